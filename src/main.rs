// ABOUTME: Entry point for the envlookup CLI application.
// ABOUTME: Parses arguments and dispatches to the render and lookup commands.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, LookupArgs};
use envlookup::error::{Error, Result};
use envlookup::lookup::{Layered, ProcessEnv, Resolver};
use envlookup::substitute::{Substitutor, Unresolved};
use envlookup::vars::VarsFile;
use std::collections::HashMap;
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

type CliSource = Layered<HashMap<String, String>, ProcessEnv>;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            input,
            output,
            empty_unresolved,
            lookup,
        } => {
            let policy = if empty_unresolved {
                Unresolved::Empty
            } else {
                Unresolved::Keep
            };
            let substitutor = Substitutor::new(resolver(&lookup)?).unresolved(policy);

            let text = read_input(input.as_deref())?;
            let rendered = substitutor.replace(&text)?;

            match output {
                Some(path) => std::fs::write(path, rendered)?,
                None => print!("{rendered}"),
            }
            Ok(())
        }
        Commands::Lookup { key, lookup } => {
            let value = resolver(&lookup)?
                .lookup(&key)?
                .ok_or(Error::NoSubstitution(key))?;
            println!("{value}");
            Ok(())
        }
    }
}

/// Build a resolver over the process environment with optional overrides.
fn resolver(args: &LookupArgs) -> Result<Resolver<CliSource>> {
    let overrides = match &args.vars {
        Some(path) => VarsFile::load(path)?.into_map(),
        None => HashMap::new(),
    };
    tracing::debug!(overrides = overrides.len(), "loaded variable overrides");

    Ok(Resolver::with_source(
        !args.lenient,
        Layered::new(overrides, ProcessEnv),
    ))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
