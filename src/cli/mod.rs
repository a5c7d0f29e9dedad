//! Command-line front end: one subcommand per page flow.

pub mod commands;
pub mod surface;

pub use commands::{Cli, Commands, run};
pub use surface::StdoutSurface;
