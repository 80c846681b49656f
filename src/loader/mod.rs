//! Game document loading.
//!
//! A document either loads completely into a [`GameState`] or fails with
//! a [`GameError`]; there is no partial state.
//!
//! ```
//! use ccg_stack::core::{EngineConfig, PlayerId};
//! use ccg_stack::loader;
//!
//! let json = r#"{
//!     "activePlayer": "Alice",
//!     "boards": { "Alice": {}, "Bob": { "life": 12 } }
//! }"#;
//! let state = loader::load_from_str(json, &EngineConfig::default()).unwrap();
//!
//! assert_eq!(state.priority_player, PlayerId::new("Alice"));
//! assert_eq!(state.life(&PlayerId::new("Alice")), Some(20));
//! assert_eq!(state.life(&PlayerId::new("Bob")), Some(12));
//! ```
//!
//! [`GameError`]: crate::error::GameError

mod document;

pub use document::{
    AbilityDocument, BoardDocument, CardDocument, GameDocument, PermanentDocument,
    StackItemDocument,
};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::{EngineConfig, GameState};
use crate::error::{GameError, Result};

/// Load a game document from JSON text.
pub fn load_from_str(json: &str, config: &EngineConfig) -> Result<GameState> {
    let document: GameDocument = serde_json::from_str(json)?;
    document.into_state(config)
}

/// Load a game document from a file.
pub fn load_from_file(path: impl AsRef<Path>, config: &EngineConfig) -> Result<GameState> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading game document");

    let json = fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&json, config)
}
