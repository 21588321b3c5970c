//! navtree - validate and resolve localized documentation sidebars.
//!
//! A site declares its locales and a nested sidebar in `navtree.toml`.
//! Loading validates the whole tree in one pass and yields either an
//! immutable [`nav::NavigationTree`] or every violation found; the tree is
//! then resolved per locale for a renderer.
//!
//! ```ignore
//! let site = navtree::config::Site::load(Path::new("navtree.toml"))?;
//! let sidebar = site.tree.resolve_sidebar("fa")?;
//! ```

pub mod cli;
pub mod config;
pub mod locale;
pub mod logger;
pub mod nav;
pub mod utils;
