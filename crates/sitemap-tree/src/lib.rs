//! Sitemap tree: render the site structure implied by a `sitemap.xml`.
//!
//! A sitemap is a flat list of URLs. Their paths are folded into a tree of
//! segments (directories and leaf resources) which is then printed with
//! box-drawing connectors, directories first, alphabetical within each group.

pub mod cli;
pub mod error;
pub mod sitemap;
pub mod tree;

pub use error::SitemapError;
pub use sitemap::{UrlEntry, UrlSet};
pub use tree::{Node, NodeKind, SiteTree};
