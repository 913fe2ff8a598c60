//! Terminal front end for the draughts engine.
//!
//! The binary wires these pieces together; they live in a library so the
//! play loop can be driven from tests.

pub mod command;
pub mod config;
pub mod play;
pub mod render;

pub use command::PlayCommand;
pub use config::{CliConfig, ConfigError};
pub use play::Session;
pub use render::{render, RenderOptions};
