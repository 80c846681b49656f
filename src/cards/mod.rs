//! Card system: definitions and battlefield instances.
//!
//! ## Key Concepts
//!
//! - **CardDef**: Static card data looked up by name ("Lightning Bolt"
//!   deals 3 damage)
//! - **Permanent**: A card on a battlefield with its own damage and
//!   modifiers
//! - **CardRegistry**: Name-keyed storage for all definitions

mod definition;
mod instance;
mod registry;

pub use definition::{CardDef, Keyword, TriggeredAbility};
pub use instance::Permanent;
pub use registry::CardRegistry;
