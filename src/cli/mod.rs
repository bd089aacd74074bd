//! CLI commands module for knary-notify.

pub mod app;
pub mod commands;

pub use app::{Cli, Commands, ConfigAction};
