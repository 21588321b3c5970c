//! Configuration section definitions.
//!
//! Each module corresponds to a section in `navtree.toml`:
//!
//! | Module     | TOML Section   | Purpose                                    |
//! |------------|----------------|--------------------------------------------|
//! | `site`     | `[site]`       | Site metadata and head tags (passthrough)  |
//! | `locale`   | `[[locales]]`  | Supported locales, default, direction      |
//! | `validate` | `[validate]`   | Validation limits                          |
//! | `sidebar`  | `[[sidebar]]`  | Declarative navigation tree                |

mod locale;
mod sidebar;
pub mod site;
mod validate;

pub use locale::LocaleEntry;
pub use sidebar::{RawAttrs, RawBadge, RawClass, RawNavItem};
pub use site::{HeadTag, SiteSectionConfig};
pub use validate::ValidateConfig;
