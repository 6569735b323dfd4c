//! Tree nodes and their directory/leaf classification.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Whether a node is a container or a terminal resource.
///
/// The variant order is the render order: directories sort before leaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    #[default]
    Directory,
    Leaf,
}

impl NodeKind {
    /// Classify one occurrence of a segment.
    ///
    /// Only the final segment of a path can be a leaf, and only when its text
    /// contains a dot (`post.html`, `feed.xml`). Everything else is a
    /// directory.
    pub fn classify(segment: &str, is_final: bool) -> Self {
        if is_final && segment.contains('.') {
            NodeKind::Leaf
        } else {
            NodeKind::Directory
        }
    }

    /// Combine an existing classification with a newly observed one.
    ///
    /// Leaf wins; a leaf is never demoted back to a directory.
    pub fn merge(self, observed: NodeKind) -> Self {
        match observed {
            NodeKind::Leaf => NodeKind::Leaf,
            NodeKind::Directory => self,
        }
    }

    pub fn is_leaf(self) -> bool {
        self == NodeKind::Leaf
    }
}

/// One path segment. The root is the only node with an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    name: String,
    kind: NodeKind,
    children: HashMap<String, Node>,
}

impl Node {
    /// The synthetic root: unnamed, initially a directory.
    pub fn root() -> Self {
        Self::default()
    }

    fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            children: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Children in render order: directories first, then leaves, each group
    /// sorted by name.
    pub fn sorted_children(&self) -> Vec<&Node> {
        let mut children: Vec<&Node> = self.children.values().collect();
        children.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
        children
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Record another observation of this node's classification.
    pub(crate) fn absorb(&mut self, observed: NodeKind) {
        self.kind = self.kind.merge(observed);
    }

    /// Get or create the child `name`, folding `observed` into its
    /// classification.
    pub(crate) fn child_entry(&mut self, name: &str, observed: NodeKind) -> &mut Node {
        match self.children.entry(name.to_string()) {
            Entry::Occupied(entry) => {
                let child = entry.into_mut();
                child.absorb(observed);
                child
            }
            Entry::Vacant(entry) => entry.insert(Node::new(name, observed)),
        }
    }
}
