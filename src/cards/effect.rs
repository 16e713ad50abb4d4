//! Card effects and the records a hand produces from them.
//!
//! An `Effect` lives on a card and never changes after the card is built.
//! An `EffectSpec` is the id-less template stored on a prototype; the
//! repository stamps a fresh `EffectId` on every spec when it builds a card.
//! An `EffectRecord` is the flattened, traceable unit the hand hands to
//! whatever resolves effects.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, EffectId, IdAllocator};
use crate::error::RealmsError;

/// The player who receives an effect.
///
/// Variants are declared in name order so the derived `Ord` sorts by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardTarget {
    Opponent,
    Owner,
}

impl CardTarget {
    /// Upper-case name of the target.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardTarget::Opponent => "OPPONENT",
            CardTarget::Owner => "OWNER",
        }
    }
}

impl std::fmt::Display for CardTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CardTarget {
    type Err = RealmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPPONENT" => Ok(CardTarget::Opponent),
            "OWNER" => Ok(CardTarget::Owner),
            _ => Err(RealmsError::Parse {
                kind: "target",
                value: s.to_string(),
            }),
        }
    }
}

/// The kind of action an effect performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardAction {
    /// Take a card from the trade row without paying its cost.
    Acquire,
    /// Reduce the target's authority.
    Attack,
    /// Destroy a target base without spending attack.
    Destroy,
    /// The target moves a card from hand to discard.
    Discard,
    /// Draw cards from the player's deck.
    Draw,
    /// Increase the player's authority.
    Heal,
    /// Trade for buying cards.
    Money,
    /// Permanently remove a card.
    Scrap,
}

impl CardAction {
    pub const ALL: [CardAction; 8] = [
        CardAction::Acquire,
        CardAction::Attack,
        CardAction::Destroy,
        CardAction::Discard,
        CardAction::Draw,
        CardAction::Heal,
        CardAction::Money,
        CardAction::Scrap,
    ];

    /// Upper-case name of the action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardAction::Acquire => "ACQUIRE",
            CardAction::Attack => "ATTACK",
            CardAction::Destroy => "DESTROY",
            CardAction::Discard => "DISCARD",
            CardAction::Draw => "DRAW",
            CardAction::Heal => "HEAL",
            CardAction::Money => "MONEY",
            CardAction::Scrap => "SCRAP",
        }
    }
}

impl std::fmt::Display for CardAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CardAction {
    type Err = RealmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardAction::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| RealmsError::Parse {
                kind: "action",
                value: s.to_string(),
            })
    }
}

/// Effect template stored on a card prototype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectSpec {
    pub target: CardTarget,
    pub action: CardAction,
    pub value: i32,
}

impl EffectSpec {
    #[must_use]
    pub const fn new(target: CardTarget, action: CardAction, value: i32) -> Self {
        Self { target, action, value }
    }

    /// Effect aimed at the card's owner.
    #[must_use]
    pub const fn owner(action: CardAction, value: i32) -> Self {
        Self::new(CardTarget::Owner, action, value)
    }

    /// Effect aimed at the opponent.
    #[must_use]
    pub const fn opponent(action: CardAction, value: i32) -> Self {
        Self::new(CardTarget::Opponent, action, value)
    }

    /// Stamp a fresh id on this spec.
    pub fn instantiate(&self, ids: &IdAllocator) -> Effect {
        Effect {
            id: ids.next_effect_id(),
            target: self.target,
            action: self.action,
            value: self.value,
        }
    }
}

/// A single effect on a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    /// Unique per effect instance.
    pub id: EffectId,
    pub target: CardTarget,
    pub action: CardAction,
    pub value: i32,
}

impl Effect {
    /// The id-less template of this effect.
    #[must_use]
    pub fn spec(&self) -> EffectSpec {
        EffectSpec::new(self.target, self.action, self.value)
    }
}

/// Effect lists on a card. Cards carry 0-3 effects per list.
pub type EffectList = SmallVec<[Effect; 2]>;

/// A pending effect, traceable to the effect and the card that provide it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectRecord {
    pub target: CardTarget,
    pub action: CardAction,
    pub value: i32,
    pub effect_id: EffectId,
    pub provider_card_id: CardId,
}

impl EffectRecord {
    /// Flatten `effect` provided by the card `provider`.
    #[must_use]
    pub fn new(effect: &Effect, provider: CardId) -> Self {
        Self {
            target: effect.target,
            action: effect.action,
            value: effect.value,
            effect_id: effect.id,
            provider_card_id: provider,
        }
    }
}
