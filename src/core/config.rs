//! Engine configuration.
//!
//! Everything that used to be process-wide (the debug switch, the default
//! life total) is passed to the engine and loader explicitly through
//! `EngineConfig`.

use serde::{Deserialize, Serialize};

/// Life total used for boards that don't declare one.
pub const DEFAULT_STARTING_LIFE: i64 = 20;

/// Configuration for one resolution run.
///
/// ```
/// use ccg_stack::core::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_debug(true)
///     .with_step_limit(Some(500));
///
/// assert!(config.debug);
/// assert_eq!(config.step_limit, Some(500));
/// assert_eq!(config.starting_life, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Emit per-event and per-trigger debug logs.
    pub debug: bool,

    /// Maximum number of stack items to resolve. `None` means unbounded:
    /// an ability that retriggers itself forever will run forever.
    pub step_limit: Option<usize>,

    /// Life total for boards that omit `life`.
    pub starting_life: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debug: false,
            step_limit: None,
            starting_life: DEFAULT_STARTING_LIFE,
        }
    }
}

impl EngineConfig {
    /// Enable or disable debug logging.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the resolution step limit.
    #[must_use]
    pub fn with_step_limit(mut self, limit: Option<usize>) -> Self {
        self.step_limit = limit;
        self
    }

    /// Set the default starting life.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }
}
