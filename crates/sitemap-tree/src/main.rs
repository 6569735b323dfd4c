use clap::Parser;
use sitemap_tree::cli::output::{self, Styled};
use sitemap_tree::cli::{init_tracing, tree_cmd};
use sitemap_tree::sitemap::DEFAULT_SITEMAP;
use std::path::PathBuf;
use std::process::ExitCode;

/// Print the directory structure implied by a sitemap.xml.
#[derive(Debug, Parser)]
#[command(name = "sitemap-tree", version, about)]
struct Cli {
    /// Path to the sitemap.xml file
    #[arg(short, long = "map", value_name = "FILE", default_value = DEFAULT_SITEMAP)]
    map: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match tree_cmd::run(&cli.map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&Styled::new(), &err);
            ExitCode::FAILURE
        }
    }
}
