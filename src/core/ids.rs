//! Instance identifiers for cards and effects.
//!
//! Every card instance and every effect instance gets its own id. Two Vipers
//! are two different cards, and the ATTACK effect on each of them is two
//! different effects, so ids are never derived from card names.
//!
//! ## Allocation
//!
//! Ids come from an `IdAllocator`, a monotonic counter owned by the
//! `CardRepository`. Card and effect ids share one counter, so a raw value
//! is never reused for either kind.
//!
//! ```
//! use realms::core::{CardId, IdAllocator};
//!
//! let ids = IdAllocator::new();
//! let first = ids.next_card_id();
//! let second = ids.next_card_id();
//!
//! assert_ne!(first, second);
//! assert_eq!(first, CardId::new(0));
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identifier for an effect instance on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u32);

impl EffectId {
    /// Create a new effect ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// Monotonic id source shared by card and effect allocation.
///
/// Atomic so a repository behind an `Arc` can hand out ids through `&self`.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU32,
}

impl IdAllocator {
    /// Create an allocator starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_raw(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Allocate a fresh card id.
    pub fn next_card_id(&self) -> CardId {
        CardId(self.next_raw())
    }

    /// Allocate a fresh effect id.
    pub fn next_effect_id(&self) -> EffectId {
        EffectId(self.next_raw())
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next.load(Ordering::Relaxed)
    }
}
