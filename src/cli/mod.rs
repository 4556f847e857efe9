//! CLI handling
//!
//! - Argument parsing structures
//! - Resolution of flags into a projector run

pub mod args;
pub mod router;

pub use args::Cli;
pub use router::{execute, resolve_config};
