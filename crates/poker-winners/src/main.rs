//! Reads poker hands, one per line, and prints the indices of the winners.
//!
//! Logging goes to stderr and respects `RUST_LOG` (default: `info`), so the
//! output on stdout stays machine-readable.

mod input;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use poker_eval::showdown;
use tracing_subscriber::EnvFilter;

use input::{CliError, hands_from_text, read_input};
use render::{Format, render};

#[derive(Parser)]
#[command(name = "find-winners")]
#[command(about = "Find the winning hands of a poker showdown", long_about = None)]
struct Cli {
    /// File with one hand per line, e.g. `AS KS QS JS TS 2C 3D` (`-` for stdin)
    #[arg(default_value = "find-winners-input.txt")]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let text = read_input(&cli.input)?;
    let hands = hands_from_text(&text)?;
    let result = showdown(&hands);
    tracing::info!(winners = ?result.winners, "showdown complete");
    render(&result, cli.format)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["find-winners"]);
        assert_eq!(cli.input, PathBuf::from("find-winners-input.txt"));
        assert_eq!(cli.format, Format::Text);

        let cli = Cli::parse_from(["find-winners", "-", "--format", "json"]);
        assert_eq!(cli.input, PathBuf::from("-"));
        assert_eq!(cli.format, Format::Json);
    }
}
