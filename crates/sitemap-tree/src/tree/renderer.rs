//! Box-drawing text rendering of a site tree.
//!
//! ```text
//! ├── about.html
//! └── blog/
//!     ├── post-1/
//!     └── post-2.html
//! ```
//!
//! The root has no line of its own. Siblings are ordered directories first,
//! then leaves, alphabetically within each group. Directories carry a
//! trailing `/`.

use super::builder::SiteTree;
use super::node::Node;
use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";
const DIR_SUFFIX: char = '/';

/// Write the tree below `root` to `out`, one line at a time.
pub fn write_tree<W: Write>(root: &Node, out: &mut W) -> io::Result<()> {
    walk(root, "", &mut |line: &str| writeln!(out, "{line}"))
}

/// Collect the rendered lines without trailing newlines.
pub fn render_lines(root: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    let result: Result<(), Infallible> = walk(root, "", &mut |line: &str| {
        lines.push(line.to_string());
        Ok(())
    });
    match result {
        Ok(()) => lines,
        Err(never) => match never {},
    }
}

impl fmt::Display for SiteTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        walk(self.root(), "", &mut |line: &str| writeln!(f, "{line}"))
    }
}

/// Emit one line per child of `node`, depth first, in render order.
fn walk<E, F>(node: &Node, prefix: &str, emit: &mut F) -> Result<(), E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    let children = node.sorted_children();
    let last = children.len().saturating_sub(1);

    for (i, child) in children.into_iter().enumerate() {
        let is_last = i == last;
        emit(&format_line(prefix, child, is_last))?;

        let continuation = if is_last { BLANK } else { PIPE };
        walk(child, &format!("{prefix}{continuation}"), emit)?;
    }
    Ok(())
}

fn format_line(prefix: &str, node: &Node, is_last: bool) -> String {
    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    let mut line = format!("{prefix}{connector}{}", node.name());
    if !node.is_leaf() {
        line.push(DIR_SUFFIX);
    }
    line
}
