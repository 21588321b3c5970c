//! Supported locales and label resolution.
//!
//! - [`LocaleRegistry`]: the locales a site supports, with one default
//! - [`LocaleResolver`]: labels and directions for a requested locale

mod registry;
mod resolve;

pub use registry::{Direction, Locale, LocaleError, LocaleRegistry};
pub use resolve::{
    EntryHead, LocaleCoverage, LocaleResolver, ResolveError, ResolvedEntry, ResolvedSidebar,
};
