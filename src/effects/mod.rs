//! Effect system.
//!
//! - `Effect`: A (kind, magnitude, target kind) triple
//! - `TargetKind` / `PlayerSelection`: What an effect aims at, and how
//!   players are picked when the stack item names none
//! - `EffectResolver`: Applies effects to game state
//!
//! ## Design Philosophy
//!
//! The effect set is closed. Resolution is one `match` with an arm per
//! `EffectKind`, so adding a kind is a compile error until it is handled.

mod effect;
mod targeting;
mod resolver;

pub use effect::{Effect, EffectKind, EffectList};
pub use targeting::{PlayerSelection, TargetKind};
pub use resolver::{EffectLog, EffectResolver, ResolveResult, ResolverContext};
