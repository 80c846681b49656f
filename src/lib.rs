//! # ccg-stack
//!
//! A deterministic stack resolver for a reduced trading card game rules
//! subset.
//!
//! Given card blueprints, per-player battlefields, and a pending stack,
//! the engine resolves everything to a final state and records a
//! step-by-step trace.
//!
//! ## Design Principles
//!
//! 1. **Structured First**: Explicit trigger and effect fields always
//!    win. Rules text is only read to fill what a document left empty.
//!
//! 2. **Never Fatal**: Missing targets, unknown cards, fizzles and
//!    priority violations are recorded outcomes, not errors. Only loading
//!    a document can fail.
//!
//! 3. **Deterministic Order**: Boards keep document order, triggers are
//!    ordered APNAP with a stable sort, and nothing iterates a hash map
//!    where order is observable.
//!
//! ## Modules
//!
//! - `core`: Identifiers, ordered player maps, game state, configuration
//! - `cards`: Card definitions, keywords, permanents, the card registry
//! - `effects`: Effect kinds, targets, the effect resolver
//! - `triggers`: Events, trigger conditions, collection and APNAP order
//! - `text`: Rules text tokenizer and classifier
//! - `stack`: The stack, the resolution engine, the trace
//! - `loader`: JSON game documents
//! - `report`: Plain-text trace rendering
//! - `error`: Load errors

pub mod core;
pub mod cards;
pub mod effects;
pub mod triggers;
pub mod text;
pub mod stack;
pub mod loader;
pub mod report;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Board, EngineConfig, GameState, ObjectId, PlayerId, PlayerMap};

pub use crate::cards::{CardDef, CardRegistry, Keyword, Permanent, TriggeredAbility};

pub use crate::effects::{Effect, EffectKind, TargetKind};

pub use crate::triggers::{GameEvent, TriggerCondition, TriggerEvent, TriggerScope};

pub use crate::stack::{
    resolve, Engine, ResolutionStatus, ResolutionStep, ResolutionTrace, Stack, StackItem,
    StackItemId, StackItemKind,
};

pub use crate::error::{GameError, Result};
