//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `handle` | Reloadable site handle (thread-safe)         |

mod error;
pub mod handle;

pub use error::ConfigError;
pub use handle::SiteHandle;
