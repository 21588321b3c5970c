//! Small helpers shared by the loader and the CLI.

pub mod hash;
pub mod plural;

pub use plural::{plural_count, plural_s};
