//! Card piles: the player deck, the shared market pool and the trade row.
//!
//! ## Key Types
//!
//! - `PlayerDeck`: Undrawn and discard piles with reshuffle-on-empty
//! - `MainDeck`: Shuffled market pool, never refilled
//! - `TradeRow`: Lazily filled market window plus the Explorer slot

pub mod player_deck;
pub mod main_deck;
pub mod trade_row;

pub use player_deck::PlayerDeck;
pub use main_deck::MainDeck;
pub use trade_row::{TradeRow, TRADE_ROW_SIZE};
