//! Command-line front end for the `sitemap-tree` binary.

pub mod output;
pub mod tree_cmd;

use tracing_subscriber::EnvFilter;

/// Environment variable holding tracing filter directives.
pub const LOG_ENV: &str = "SITEMAP_TREE_LOG";

/// Install the global tracing subscriber.
///
/// Logs go to stderr; stdout is reserved for the rendered tree.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
