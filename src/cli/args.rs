// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and the template subcommand

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "credtmpl")]
#[command(about = "Render text templates with secrets from a credential store")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(short, long, global = true, help = "Secret store table to read from")]
    pub table: Option<String>,

    #[arg(short, long, global = true, help = "Path to a local YAML secret store")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a template file with credentials
    Template {
        /// Template file, or - to read standard input
        #[arg(value_name = "TEMPLATE")]
        sources: Vec<String>,

        #[arg(long, help = "Fail on references to undefined variables")]
        strict: bool,
    },
}

impl Args {
    /// Parse command line arguments, leaving error reporting to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Reduce a clap usage error to a single line, without the `error: ` prefix
    pub fn usage_error(err: &clap::Error) -> String {
        let rendered = err.to_string();
        rendered
            .lines()
            .find_map(|line| line.strip_prefix("error: "))
            .map(|line| line.trim().to_string())
            .unwrap_or_else(|| match err.kind() {
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                | ErrorKind::MissingSubcommand => "a subcommand is required".to_string(),
                kind => kind.to_string(),
            })
    }
}
