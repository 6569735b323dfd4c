//! Sitemap documents: the `<urlset>` model and how it is read from disk.
//!
//! Only the location of each entry feeds the tree. `lastmod` is accepted so
//! real-world sitemaps deserialize cleanly, but nothing downstream reads it.

pub mod location;

use crate::error::SitemapError;
use quick_xml::events::Event;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Conventional file name looked up in the working directory.
pub const DEFAULT_SITEMAP: &str = "sitemap.xml";

/// Root element every accepted document must have.
const URLSET_TAG: &[u8] = b"urlset";

/// A single `<url>` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UrlEntry {
    /// The `<loc>` text. Missing locations deserialize as empty.
    #[serde(default)]
    pub loc: String,
    /// The `<lastmod>` text, kept verbatim.
    #[serde(default)]
    pub lastmod: Option<String>,
}

/// A `<urlset>` document with its entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UrlSet {
    #[serde(rename = "url", default)]
    pub urls: Vec<UrlEntry>,
}

impl UrlSet {
    /// Location strings in document order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(|entry| entry.loc.as_str())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Read and parse the sitemap at `path`.
pub fn load(path: &Path) -> Result<UrlSet, SitemapError> {
    let xml = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::InvalidData {
            SitemapError::MalformedDocument(format!(
                "{} is not valid UTF-8",
                path.display()
            ))
        } else {
            SitemapError::InputUnavailable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let set = parse_document(&xml)?;
    debug!(path = %path.display(), entries = set.len(), "loaded sitemap");
    Ok(set)
}

/// Parse a `<urlset>` document.
///
/// The root element is checked first: serde ignores element names at the
/// top level, so a `<sitemapindex>` would otherwise deserialize as an empty
/// set instead of being rejected.
pub fn parse_document(xml: &str) -> Result<UrlSet, SitemapError> {
    expect_urlset_root(xml)?;
    Ok(quick_xml::de::from_str(xml)?)
}

fn expect_urlset_root(xml: &str) -> Result<(), SitemapError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if e.local_name().as_ref() == URLSET_TAG {
                    return Ok(());
                }
                let found = String::from_utf8_lossy(e.name().as_ref()).to_string();
                return Err(SitemapError::MalformedDocument(format!(
                    "expected <urlset> root element, found <{found}>"
                )));
            }
            Event::Eof => {
                return Err(SitemapError::MalformedDocument(
                    "document has no root element".to_string(),
                ))
            }
            _ => {}
        }
    }
}
