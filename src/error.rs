//! Error types for the realms rules engine.
//!
//! Every failure is raised synchronously to the immediate caller.
//! Nothing in the engine retries or swallows these, with one exception:
//! `PlayerDeck::draw` turns mid-draw exhaustion into a short result.

use thiserror::Error;

use crate::core::CardId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RealmsError {
    /// The shared market pool has no cards left. Permanent.
    #[error("Main deck is empty")]
    EmptySupply,

    /// Both the undrawn and discard piles of a player deck are empty.
    #[error("Player deck has no undrawn or discarded cards")]
    EmptyPlayerSupply,

    #[error("Starting deck must contain {expected} cards, got {actual}")]
    InvalidDeckSize { expected: usize, actual: usize },

    #[error("Starting deck may only contain Vipers and Scouts, found {0}")]
    InvalidDeckContents(String),

    #[error("No available card with id {0}")]
    IdentifierNotFound(CardId),

    #[error("Hand must draw between 0 and {max} cards, requested {requested}")]
    InvalidHandInit { requested: usize, max: usize },

    #[error("Cannot draw {requested} cards with {remaining} remaining")]
    InvalidDrawRequest { requested: usize, remaining: usize },

    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("Card {0:?} already registered")]
    DuplicateCard(String),

    #[error("Cannot parse {kind} from {value:?}")]
    Parse { kind: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<bincode::Error> for RealmsError {
    fn from(err: bincode::Error) -> Self {
        RealmsError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RealmsError>;
