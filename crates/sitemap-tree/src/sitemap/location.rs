//! Turn `<loc>` strings into URL paths.

use percent_encoding::percent_decode_str;
use tracing::debug;
use url::{ParseError, Url};

/// Base used to resolve relative references such as `/about` or `blog/x`.
/// Only the path of the result is kept, so the host never leaks out.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Extract the path component of a location.
///
/// Query strings and fragments are dropped. The path is percent-decoded
/// before it is split, so `%2F` separates segments and invalid UTF-8 is
/// replaced lossily. URLs without a hierarchical path (`mailto:`, `urn:`) yield the
/// empty path. Returns `None` when the location cannot be parsed at all; the
/// entry is then skipped by the caller.
pub fn url_path(loc: &str) -> Option<String> {
    let parsed = match Url::parse(loc) {
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE).and_then(|base| base.join(loc))
        }
        other => other,
    };

    match parsed {
        Ok(url) if url.cannot_be_a_base() => Some(String::new()),
        Ok(url) => Some(
            percent_decode_str(url.path())
                .decode_utf8_lossy()
                .into_owned(),
        ),
        Err(e) => {
            debug!(location = loc, error = %e, "skipping unparsable location");
            None
        }
    }
}
