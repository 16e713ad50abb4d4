//! Card system: effects, prototypes, instances, catalog and repository.
//!
//! ## Key Types
//!
//! - `Card`: A card instance with a unique id (not `Clone`)
//! - `Faction`: Closed faction set, including the `All` wildcard
//! - `Effect` / `EffectSpec`: Effects on instances and on prototypes
//! - `EffectRecord`: Flattened effect produced by a hand
//! - `CardPrototype`: Static card data with a builder
//! - `CardCatalog`: Prototype lookup by name
//! - `CardRepository`: Builds instances with fresh ids

pub mod effect;
pub mod card;
pub mod definition;
pub mod catalog;
pub mod repository;

pub use effect::{CardAction, CardTarget, Effect, EffectList, EffectRecord, EffectSpec};
pub use card::{Card, Faction};
pub use definition::CardPrototype;
pub use catalog::{is_starter_name, CardCatalog, EXPLORER, SCOUT, VIPER};
pub use repository::CardRepository;
