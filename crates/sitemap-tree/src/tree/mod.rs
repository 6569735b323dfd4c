//! Path tree built from sitemap locations, and its text rendering.

pub mod builder;
pub mod node;
pub mod renderer;

pub use builder::{clean_path, SiteTree};
pub use node::{Node, NodeKind};
pub use renderer::{render_lines, write_tree};
