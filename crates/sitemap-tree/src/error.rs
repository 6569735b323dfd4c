//! Error types for loading sitemap documents.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that stop a run before any tree is printed.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// The sitemap file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a `<urlset>` document.
    #[error("malformed sitemap: {0}")]
    MalformedDocument(String),
}

impl From<quick_xml::DeError> for SitemapError {
    fn from(err: quick_xml::DeError) -> Self {
        SitemapError::MalformedDocument(err.to_string())
    }
}

impl From<quick_xml::Error> for SitemapError {
    fn from(err: quick_xml::Error) -> Self {
        SitemapError::MalformedDocument(err.to_string())
    }
}
