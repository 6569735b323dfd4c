//! `sitemap-tree [--map FILE]`: print the tree implied by a sitemap.

use crate::sitemap;
use crate::tree::{write_tree, SiteTree};
use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Run the command against stdout.
pub fn run(path: &Path) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_file(path, &mut out)?;
    out.flush().context("failed to write tree")?;
    Ok(())
}

/// Load the sitemap at `path` and write its tree to `out`.
///
/// The document is fully parsed before the first line is written, so a bad
/// input never produces partial output.
pub fn render_file<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let set = sitemap::load(path)?;
    let tree = SiteTree::from_locations(set.locations());
    write_tree(tree.root(), out).context("failed to write tree")?;
    Ok(())
}
