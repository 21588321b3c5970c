//! Command-line interface module.

mod args;
pub mod check;
pub mod locales;
pub mod sidebar;
pub mod watch;

pub use args::{Cli, Commands};
