//! Fold URL paths into a [`Node`] tree.

use super::node::{Node, NodeKind};
use crate::sitemap::location::url_path;
use tracing::info;

/// The tree implied by a set of URL paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteTree {
    root: Node,
}

impl Default for SiteTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteTree {
    pub fn new() -> Self {
        Self { root: Node::root() }
    }

    /// Build a tree from `<loc>` strings, skipping any that do not parse.
    pub fn from_locations<'a, I>(locations: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tree = Self::new();
        let mut entries = 0usize;
        let mut skipped = 0usize;

        for loc in locations {
            entries += 1;
            if !tree.insert_location(loc) {
                skipped += 1;
            }
        }

        info!(entries, skipped, nodes = tree.node_count(), "built site tree");
        tree
    }

    /// Insert one location. Returns `false` when it was skipped as unparsable.
    pub fn insert_location(&mut self, loc: &str) -> bool {
        match url_path(loc) {
            Some(path) => {
                self.insert_path(&path);
                true
            }
            None => false,
        }
    }

    /// Insert one URL path.
    ///
    /// The bare site root (`""` or `"/"`) marks the root itself as a leaf and
    /// adds nothing. Otherwise the path is cleaned and each segment becomes a
    /// node; only the last segment may be classified as a leaf.
    pub fn insert_path(&mut self, path: &str) {
        if path.is_empty() || path == "/" {
            self.root.absorb(NodeKind::Leaf);
            return;
        }

        let cleaned = clean_path(path);
        let segments: Vec<&str> = cleaned.split('/').filter(|s| !s.is_empty()).collect();
        let last = segments.len().saturating_sub(1);

        let mut current = &mut self.root;
        for (i, segment) in segments.iter().enumerate() {
            let kind = NodeKind::classify(segment, i == last);
            current = current.child_entry(segment, kind);
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Visible nodes, i.e. everything except the root.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }
}

/// Lexically clean a path into rooted form.
///
/// Repeated separators collapse, `.` segments vanish, and `..` removes the
/// preceding segment without ever climbing above the root. The result always
/// starts with `/` and has no trailing separator unless it is the root.
pub fn clean_path(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            s => stack.push(s),
        }
    }
    format!("/{}", stack.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(paths: &[&str]) -> SiteTree {
        let mut tree = SiteTree::new();
        for path in paths {
            tree.insert_path(path);
        }
        tree
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("/a/b"), "/a/b");
        assert_eq!(clean_path("a/b/"), "/a/b");
        assert_eq!(clean_path("//a///b//"), "/a/b");
        assert_eq!(clean_path("/a/./b/../c"), "/a/c");
        assert_eq!(clean_path("/../../x"), "/x");
        assert_eq!(clean_path("/./"), "/");
        assert_eq!(clean_path(""), "/");
    }

    #[test]
    fn test_site_root_marks_root_leaf() {
        let tree = tree_of(&["/", "", "/"]);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().child_count(), 0);
    }

    #[test]
    fn test_new_tree_has_unnamed_directory_root() {
        let tree = SiteTree::default();
        assert_eq!(tree.root().name(), "");
        assert!(!tree.root().is_leaf());
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_root_untouched_without_root_entry() {
        let tree = tree_of(&["/docs"]);
        assert!(!tree.root().is_leaf());
    }

    #[test]
    fn test_nested_path() {
        let tree = tree_of(&["/a/b/c.txt"]);
        let root = tree.root();
        assert_eq!(root.child_count(), 1);

        let a = root.child("a").unwrap();
        assert_eq!(a.kind(), NodeKind::Directory);
        assert_eq!(a.child_count(), 1);

        let b = a.child("b").unwrap();
        assert_eq!(b.kind(), NodeKind::Directory);
        assert_eq!(b.child_count(), 1);

        let c = b.child("c.txt").unwrap();
        assert_eq!(c.kind(), NodeKind::Leaf);
        assert_eq!(c.child_count(), 0);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let once = tree_of(&["/a/b/c.txt"]);
        let twice = tree_of(&["/a/b/c.txt", "/a/b/c.txt"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_distinct_names_do_not_collide() {
        let tree = tree_of(&["/a/b", "/a.json"]);
        let root = tree.root();
        assert_eq!(root.child_count(), 2);
        assert_eq!(root.child("a").unwrap().kind(), NodeKind::Directory);
        assert_eq!(root.child("a.json").unwrap().kind(), NodeKind::Leaf);
    }

    #[test]
    fn test_classification_per_occurrence() {
        let tree = tree_of(&["/config", "/config", "/config/x"]);
        let config = tree.root().child("config").unwrap();
        assert_eq!(config.kind(), NodeKind::Directory);
        assert!(config.child("x").is_some());
    }

    #[test]
    fn test_directory_upgraded_to_leaf() {
        // `v1.2` is first seen as an intermediate segment, later as a file.
        let tree = tree_of(&["/v1.2/notes", "/v1.2"]);
        let node = tree.root().child("v1.2").unwrap();
        assert!(node.is_leaf());
        assert!(node.child("notes").is_some());
    }

    #[test]
    fn test_leaf_never_demoted() {
        let tree = tree_of(&["/v1.2", "/v1.2/notes"]);
        assert!(tree.root().child("v1.2").unwrap().is_leaf());
    }

    #[test]
    fn test_dot_segments_resolved() {
        let tree = tree_of(&["/blog/./drafts/../post.html"]);
        let blog = tree.root().child("blog").unwrap();
        assert_eq!(blog.child_count(), 1);
        assert!(blog.child("post.html").unwrap().is_leaf());
    }

    #[test]
    fn test_from_locations_skips_unparsable() {
        let tree = SiteTree::from_locations([
            "https://x.test/",
            "http://[::1/broken",
            "https://x.test/about.html",
        ]);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.node_count(), 1);
        assert!(tree.root().child("about.html").is_some());
    }

    #[test]
    fn test_insert_location_reports_skip() {
        let mut tree = SiteTree::new();
        assert!(tree.insert_location("https://x.test/docs/"));
        assert!(!tree.insert_location("https://exa mple.test/"));
        assert_eq!(tree.node_count(), 1);
    }
}
