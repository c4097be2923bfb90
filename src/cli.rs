//! Command-line shell for the index builder.
//!
//! Thin layer over [`BuildPipeline`]: parses arguments, layers
//! configuration (file, environment, flags), initializes logging,
//! runs the build, and prints a summary.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::pipeline::BuildPipeline;

/// Build a search index from a Markdown content tree
#[derive(Parser, Debug)]
#[command(name = "mdindex", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, env = "MDINDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Content root directory (overrides configuration)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Output directory (overrides configuration)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Run the CLI to completion
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(content) = cli.content {
        config.content.root_dir = content;
    }
    if let Some(output) = cli.output {
        config.output.dir = output;
    }
    config.validate()?;
    config.log_config();

    let pipeline = BuildPipeline::new(config)?;
    let stats = pipeline.run()?;

    println!(
        "Indexed {} of {} documents ({} skipped): {} posts, {} replies in {}ms",
        stats.documents_parsed,
        stats.files_discovered,
        stats.documents_skipped,
        stats.posts_written,
        stats.replies_written,
        stats.duration_ms
    );

    Ok(())
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mdindex={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["mdindex"]);
        assert!(cli.config.is_none());
        assert!(cli.content.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from([
            "mdindex",
            "--content",
            "/srv/content",
            "--output",
            "/srv/docs",
            "-vv",
        ]);
        assert_eq!(cli.content, Some(PathBuf::from("/srv/content")));
        assert_eq!(cli.output, Some(PathBuf::from("/srv/docs")));
        assert_eq!(cli.verbose, 2);
    }
}
