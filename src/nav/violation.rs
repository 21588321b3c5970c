//! Validation violations.
//!
//! Every check in the loader produces a [`Violation`] instead of failing
//! fast, so a single pass reports every defect in the config.

use super::NodePath;
use crate::utils::plural_s;
use owo_colors::OwoColorize;
use std::fmt;

// ============================================================================
// ViolationKind
// ============================================================================

/// Category of a configuration defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    /// A label translation names a locale that is not registered.
    UnknownLocale,
    /// A label has no text for the default locale.
    MissingDefaultLabel,
    /// A node does not match exactly one of group, page or link.
    MalformedNode,
    /// An external link is not an absolute http(s) URL.
    InvalidUrl,
    /// An internal slug is empty or escapes the content root.
    InvalidSlug,
    /// Two entries point at the same internal slug.
    DuplicateSlug,
    /// A badge variant outside the supported set.
    InvalidBadgeVariant,
    /// The tree is nested deeper than the configured maximum.
    DepthExceeded,
    /// Two locales share an identifier.
    DuplicateLocale,
    /// A locale entry is malformed, or the default locale is missing or ambiguous.
    InvalidLocale,
}

impl ViolationKind {
    /// Stable kebab-case name, used in reports and for filtering.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownLocale => "unknown-locale",
            Self::MissingDefaultLabel => "missing-default-label",
            Self::MalformedNode => "malformed-node",
            Self::InvalidUrl => "invalid-url",
            Self::InvalidSlug => "invalid-slug",
            Self::DuplicateSlug => "duplicate-slug",
            Self::InvalidBadgeVariant => "invalid-badge-variant",
            Self::DepthExceeded => "depth-exceeded",
            Self::DuplicateLocale => "duplicate-locale",
            Self::InvalidLocale => "invalid-locale",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Violation
// ============================================================================

/// A single defect: what is wrong, where, and optionally how to fix it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Where the defect was found.
    pub path: NodePath,
    /// Error description
    pub message: String,
    /// Other locations involved (e.g. earlier uses of a duplicated slug).
    pub related: Vec<NodePath>,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl Violation {
    pub fn new(kind: ViolationKind, path: NodePath, message: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            message: message.into(),
            related: Vec::new(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, related: Vec<NodePath>) -> Self {
        self.related = related;
        self
    }

    /// Primary path followed by every related path.
    pub fn paths(&self) -> impl Iterator<Item = &NodePath> {
        std::iter::once(&self.path).chain(self.related.iter())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{} {}",
            "[".dimmed(),
            self.path.to_string().cyan(),
            "]".dimmed(),
            self.kind.as_str().dimmed()
        )?;
        let trail = self.path.trail();
        if !trail.is_empty() {
            write!(f, " {}", trail.dimmed())?;
        }
        write!(f, "\n{} {}", "→".red(), self.message)?;
        for other in &self.related {
            write!(f, "\n  {} {}", "also:".dimmed(), other.to_string().cyan())?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// Violations
// ============================================================================

/// Ordered collection of violations from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    items: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.items.push(violation);
    }

    /// Shorthand for `push(Violation::new(..))`.
    pub fn report(&mut self, kind: ViolationKind, path: &NodePath, message: impl Into<String>) {
        self.push(Violation::new(kind, path.clone(), message));
    }

    /// Add a violation with a hint.
    pub fn report_with_hint(
        &mut self,
        kind: ViolationKind,
        path: &NodePath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Violation::new(kind, path.clone(), message).with_hint(hint));
    }

    pub fn extend(&mut self, other: Violations) {
        self.items.extend(other.items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.items
    }

    /// Violations of a single kind, in report order.
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.items.iter().filter(move |v| v.kind == kind)
    }

    pub fn count(&self, kind: ViolationKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.items
    }

    /// Convert to Result (returns Err if there are violations).
    pub fn into_result(self) -> Result<(), Self> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(items: Vec<Violation>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "navigation validation failed:".red().bold())?;
        for (i, violation) in self.items.iter().enumerate() {
            write!(f, "{violation}")?;
            if i + 1 < self.items.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.items.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.items.len().to_string().red().bold(),
                format!("violation{}", plural_s(self.items.len())).dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Violations {
        let mut violations = Violations::new();
        violations.report_with_hint(
            ViolationKind::MissingDefaultLabel,
            &NodePath::sidebar(1).labeled("Usage"),
            "missing label for default locale `en`",
            "set `label`",
        );
        violations.push(
            Violation::new(
                ViolationKind::DuplicateSlug,
                NodePath::sidebar(2).item(0),
                "slug `index` is used by 2 entries",
            )
            .with_related(vec![NodePath::sidebar(0).item(0)]),
        );
        violations
    }

    #[test]
    fn test_kind_names_are_kebab_case() {
        assert_eq!(ViolationKind::InvalidUrl.as_str(), "invalid-url");
        assert_eq!(ViolationKind::DepthExceeded.to_string(), "depth-exceeded");
    }

    #[test]
    fn test_counts_by_kind() {
        let violations = sample();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations.count(ViolationKind::DuplicateSlug), 1);
        assert_eq!(violations.count(ViolationKind::InvalidSlug), 0);
    }

    #[test]
    fn test_paths_include_related() {
        let violations = sample();
        let duplicate = violations
            .of_kind(ViolationKind::DuplicateSlug)
            .next()
            .unwrap();
        let paths: Vec<String> = duplicate.paths().map(ToString::to_string).collect();
        assert_eq!(paths, vec!["sidebar[2].items[0]", "sidebar[0].items[0]"]);
    }

    #[test]
    fn test_display_contains_path_message_and_hint() {
        let rendered = sample().to_string();
        assert!(rendered.contains("sidebar[1]"));
        assert!(rendered.contains("missing label for default locale `en`"));
        assert!(rendered.contains("set `label`"));
        assert!(rendered.contains("sidebar[0].items[0]"));
        assert!(rendered.contains("violations"));
    }

    #[test]
    fn test_into_result() {
        assert!(Violations::new().into_result().is_ok());
        assert_eq!(sample().into_result().unwrap_err().len(), 2);
    }
}
