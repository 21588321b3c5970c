//! Location of a node or config field, for diagnostics.
//!
//! A path is a sequence of segments from the config root, e.g.
//! `sidebar[3].items[1]` or `site.url`. Sidebar segments also remember the
//! node's default label so reports can show a readable trail
//! (`Integrations › Grafana Dashboards`).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Segment {
    key: &'static str,
    index: Option<usize>,
    label: Option<String>,
}

/// Owned path into the declarative config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<Segment>,
}

impl NodePath {
    /// Path to a plain field, e.g. `NodePath::key("site").then("url")`.
    pub fn key(key: &'static str) -> Self {
        Self::default().then(key)
    }

    /// Path to the `index`-th top-level sidebar entry.
    pub fn sidebar(index: usize) -> Self {
        Self::default().indexed("sidebar", index)
    }

    /// Path to the `index`-th `[[locales]]` entry.
    pub fn locale(index: usize) -> Self {
        Self::default().indexed("locales", index)
    }

    /// Append a plain field segment.
    pub fn then(mut self, key: &'static str) -> Self {
        self.segments.push(Segment {
            key,
            index: None,
            label: None,
        });
        self
    }

    /// Append an indexed segment (`key[index]`).
    pub fn indexed(mut self, key: &'static str, index: usize) -> Self {
        self.segments.push(Segment {
            key,
            index: Some(index),
            label: None,
        });
        self
    }

    /// Path to the `index`-th child of this node.
    pub fn item(&self, index: usize) -> Self {
        self.clone().indexed("items", index)
    }

    /// Attach a human-readable label to the last segment.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        if let Some(last) = self.segments.last_mut() {
            let label = label.into();
            last.label = (!label.trim().is_empty()).then_some(label);
        }
        self
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Indices of every indexed segment, from the root.
    ///
    /// For sidebar paths this is the position of the node at each level.
    pub fn indices(&self) -> Vec<usize> {
        self.segments.iter().filter_map(|s| s.index).collect()
    }

    /// Labels recorded along the path (segments without one are skipped).
    pub fn labels(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| s.label.as_deref())
            .collect()
    }

    /// Labels joined with `›`, or an empty string when none are known.
    pub fn trail(&self) -> String {
        self.labels().join(" › ")
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.key)?;
            if let Some(index) = segment.index {
                write!(f, "[{index}]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_sidebar_path() {
        let path = NodePath::sidebar(3).item(1).item(0);
        assert_eq!(path.to_string(), "sidebar[3].items[1].items[0]");
        assert_eq!(path.indices(), vec![3, 1, 0]);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_display_field_path() {
        assert_eq!(NodePath::key("site").then("url").to_string(), "site.url");
        assert_eq!(NodePath::locale(2).to_string(), "locales[2]");
    }

    #[test]
    fn test_labels_and_trail() {
        let path = NodePath::sidebar(3)
            .labeled("Integrations")
            .item(3)
            .labeled("Grafana Dashboards");
        assert_eq!(path.labels(), vec!["Integrations", "Grafana Dashboards"]);
        assert_eq!(path.trail(), "Integrations › Grafana Dashboards");
    }

    #[test]
    fn test_blank_label_is_not_recorded() {
        let path = NodePath::sidebar(0).labeled("   ");
        assert!(path.labels().is_empty());
        assert_eq!(path.trail(), "");
    }

    #[test]
    fn test_item_does_not_mutate_parent() {
        let parent = NodePath::sidebar(0);
        let child = parent.item(4);
        assert_eq!(parent.to_string(), "sidebar[0]");
        assert_eq!(child.to_string(), "sidebar[0].items[4]");
    }
}
