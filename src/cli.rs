//! Command-line interface definitions.
//!
//! One binary, three modes: generate the feed once (the default), serve the
//! generated artifact over HTTP, or keep regenerating it on an interval.

use clap::{Parser, Subcommand};

/// Command-line arguments for the NPO program feed tool.
///
/// # Examples
///
/// ```sh
/// # Generate the feed once
/// npo_program_feed
///
/// # Serve the generated feed on port 9000
/// npo_program_feed serve --port 9000
///
/// # Regenerate every 15 minutes
/// npo_program_feed watch --interval-secs 900
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The operation to perform; defaults to [`Command::Run`].
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the scrape-and-publish pipeline once and exit
    Run,

    /// Serve the generated feed artifact over HTTP
    Serve {
        /// Port to bind, overriding the configured default
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Regenerate the feed at a fixed interval until interrupted
    Watch {
        /// Seconds between runs, overriding the configured default
        #[arg(short, long)]
        interval_secs: Option<u64>,
    },
}
