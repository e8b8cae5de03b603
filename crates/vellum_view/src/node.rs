//! Presentation nodes
//!
//! A [`PresentationNode`] is the headless stand-in for a single visual
//! element. Each view part owns exactly one and only mutates it while
//! committing a frame. The host flips the `attached` flag when it inserts
//! or removes the part.

use serde::Serialize;
use smallvec::SmallVec;

/// Inline class list; view parts rarely carry more than a few classes
pub type ClassList = SmallVec<[&'static str; 4]>;

/// A single visual element owned by a view part
#[derive(Clone, Debug, PartialEq)]
pub struct PresentationNode {
    tag: &'static str,
    classes: ClassList,
    /// Width attribute in pixels, unset until the first commit
    width: Option<f32>,
    attached: bool,
    commits: u64,
}

impl PresentationNode {
    /// Create an unattached node with no classes and no width
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: ClassList::new(),
            width: None,
            attached: false,
            commits: 0,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = Some(width);
    }

    pub fn classes(&self) -> &[&'static str] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Add or remove `class` so that its presence equals `enabled`.
    ///
    /// Returns true if the class list changed.
    pub fn toggle_class(&mut self, class: &'static str, enabled: bool) -> bool {
        let position = self.classes.iter().position(|c| *c == class);
        match (position, enabled) {
            (None, true) => {
                self.classes.push(class);
                true
            }
            (Some(idx), false) => {
                self.classes.remove(idx);
                true
            }
            _ => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Record that a commit pass wrote to this node
    pub fn mark_committed(&mut self) {
        self.commits += 1;
    }

    /// Number of commit passes that wrote to this node
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    /// Observable attributes, excluding bookkeeping such as the commit count
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot {
            tag: self.tag,
            classes: self.classes.iter().map(|c| c.to_string()).collect(),
            width: self.width,
            attached: self.attached,
        }
    }
}

impl Default for PresentationNode {
    fn default() -> Self {
        Self::new("div")
    }
}

/// Serializable view of a node's observable attributes
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub width: Option<f32>,
    pub attached: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_blank() {
        let node = PresentationNode::default();
        assert_eq!(node.tag(), "div");
        assert!(node.classes().is_empty());
        assert_eq!(node.width(), None);
        assert!(!node.is_attached());
        assert_eq!(node.commit_count(), 0);
    }

    #[test]
    fn test_toggle_class() {
        let mut node = PresentationNode::default();

        assert!(node.toggle_class("shadow", true));
        assert!(!node.toggle_class("shadow", true));
        assert!(node.has_class("shadow"));
        assert_eq!(node.classes(), &["shadow"]);

        assert!(node.toggle_class("shadow", false));
        assert!(!node.toggle_class("shadow", false));
        assert!(!node.has_class("shadow"));
    }

    #[test]
    fn test_snapshot_ignores_commit_count() {
        let mut node = PresentationNode::default();
        node.set_width(120.0);
        let before = node.snapshot();
        node.mark_committed();
        assert_eq!(node.snapshot(), before);
        assert_eq!(node.commit_count(), 1);
    }
}
