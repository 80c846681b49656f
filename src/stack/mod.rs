//! Stack and resolution.
//!
//! - [`Stack`] / [`StackItem`]: The LIFO queue of spells and triggered
//!   abilities
//! - [`Engine`]: Pops, resolves, and re-enqueues triggers until the stack
//!   is empty
//! - [`ResolutionTrace`]: The step-by-step record of a run
//!
//! Priority is simplified: after each item resolves, the active player
//! holds priority again and nobody responds.

mod engine;
mod entry;
mod trace;

pub use engine::{life_totals, resolve, Engine};
pub use entry::{Stack, StackItem, StackItemId, StackItemKind};
pub use trace::{ResolutionStep, ResolutionTrace};

use serde::{Deserialize, Serialize};

/// Status returned by [`Engine::step`] and [`Engine::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// The stack is empty.
    Complete,

    /// Items remain; call `step` again.
    Processing,

    /// The configured step limit stopped the run with items left.
    Halted,
}
