// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the render and lookup subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envlookup")]
#[command(about = "Substitute environment variables into configuration files")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace ${...} placeholders in a file (or stdin) and print the result
    Render {
        /// Input file; reads stdin when omitted or "-"
        input: Option<PathBuf>,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replace unresolved placeholders with an empty string
        #[arg(long)]
        empty_unresolved: bool,

        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Resolve a single placeholder key and print its value
    Lookup {
        /// Placeholder body, e.g. HOME or "DEPLOY_ENV prod=a staging=b"
        key: String,

        #[command(flatten)]
        lookup: LookupArgs,
    },
}

#[derive(Args)]
pub struct LookupArgs {
    /// Treat undefined variables as "no substitution" instead of an error
    #[arg(short, long)]
    pub lenient: bool,

    /// YAML file of variables that take precedence over the environment
    #[arg(long, value_name = "FILE")]
    pub vars: Option<PathBuf>,
}
