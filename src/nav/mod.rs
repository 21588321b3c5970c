//! Localized navigation tree.
//!
//! Raw `[[sidebar]]` entries go through [`TreeValidator`], which yields either
//! an immutable [`NavigationTree`] or every [`Violation`] found in one pass.

mod node;
mod path;
mod validate;
mod violation;

pub use node::{Badge, BadgeVariant, LabelMap, NavNode, NavigationTree, NodeKind, Nodes};
pub use path::NodePath;
pub use validate::{DEFAULT_MAX_DEPTH, TreeValidator, ValidationResult};
pub use violation::{Violation, ViolationKind, Violations};
