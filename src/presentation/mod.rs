//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Merging flags with configuration and creating use cases
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Effective settings and use case wiring (dependency injection)
//! - `output` - Output rendering abstractions

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_read_use_case, Settings};
pub use output::{renderer_for, Renderer};
