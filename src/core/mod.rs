//! Core engine types: identifiers, players, configuration, state.
//!
//! This module contains the building blocks every other module shares.

pub mod entity;
pub mod player;
pub mod config;
pub mod state;

pub use entity::ObjectId;
pub use player::{PlayerId, PlayerMap};
pub use config::{EngineConfig, DEFAULT_STARTING_LIFE};
pub use state::{Board, GameState};
