//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Turn everyday text into a tanka.
#[derive(Parser, Debug)]
#[command(name = "miyabi")]
#[command(about = "Generate and validate tanka with a generative model")]
#[command(version)]
pub struct Cli {
    /// Path to a settings file (default: ./miyabi.toml if present)
    #[arg(short, long, global = true, env = "MIYABI_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a tanka from text and an optional image
    Generate {
        /// Text the poem is derived from
        #[arg(short, long)]
        text: String,

        /// Image to send alongside the text
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Media type of the image (guessed from the extension if omitted)
        #[arg(long, requires = "image")]
        mime: Option<String>,
    },

    /// Check five readings against the 5-7-5-7-7 pattern without calling the model
    Check {
        /// Readings of the five lines, in order
        #[arg(long = "yomi", num_args = 5, required = true)]
        yomis: Vec<String>,

        /// Display text of the five lines, in order
        #[arg(long = "line", num_args = 5)]
        lines: Option<Vec<String>>,
    },
}
