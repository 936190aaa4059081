//! CLI argument parsing and command dispatch.

pub mod args;
pub mod calc;
pub mod joke;

pub use args::{Cli, Commands, OutputFormat};
