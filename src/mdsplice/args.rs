use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdsplice")]
#[command(about = "Patch markdown documents: section replace and chunked splitting", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace a heading-scoped section of a document
    #[command(alias = "r")]
    Replace {
        /// Markdown file to patch ("-" for stdin)
        file: String,

        /// Heading text identifying the section (case-insensitive)
        #[arg(long)]
        heading: String,

        /// Replacement content given inline
        #[arg(long = "with", conflicts_with = "from")]
        with_text: Option<String>,

        /// Read replacement content from a file
        #[arg(long)]
        from: Option<PathBuf>,

        /// Write the result to a file instead of stdout
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Rewrite the input file
        #[arg(long)]
        in_place: bool,
    },

    /// Split markdown into byte-bounded chunks
    #[command(alias = "s")]
    Split {
        /// Markdown file to split ("-" for stdin)
        file: String,

        /// Max bytes per chunk (0 or unset: configured value, default 30000)
        #[arg(long)]
        chunk_bytes: Option<usize>,

        /// Write chunks as numbered files into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Show known size limits and defaults as JSON
    Limits {
        /// Budget to report as effective (0 or unset: configured value)
        #[arg(long)]
        chunk_bytes: Option<usize>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., chunk-bytes)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
