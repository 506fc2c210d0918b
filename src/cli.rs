//! Command line entry points.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "postal-locations")]
#[command(about = "Indonesian postal location store")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the HTTP service (default)
    Serve,

    /// Insert the hardcoded example row into the configured database and exit
    SeedExample,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::try_parse_from(["postal-locations"]).unwrap();
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_seed_example_subcommand() {
        let cli = Cli::try_parse_from(["postal-locations", "seed-example"]).unwrap();
        assert_eq!(cli.command(), Command::SeedExample);
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["postal-locations", "drop-all"]).is_err());
    }
}
