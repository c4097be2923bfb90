//! mdindex binary - build a search index from a Markdown archive
//!
//! # Examples
//!
//! ```bash
//! # Build with defaults (./content -> ./docs)
//! mdindex
//!
//! # Explicit directories
//! mdindex --content ./archive --output ./site
//!
//! # With a configuration file
//! mdindex --config mdindex.toml -v
//! ```

use clap::Parser;
use mdindex::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
