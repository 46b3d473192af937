//! Output formats for a showdown.

use clap::ValueEnum;
use poker_eval::Showdown;

use crate::input::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One winning index per line.
    Text,
    /// The full showdown report: every hand's category, cards and key.
    Json,
}

pub fn render(showdown: &Showdown, format: Format) -> Result<String, CliError> {
    match format {
        Format::Text => Ok(showdown
            .winners
            .iter()
            .map(|index| format!("{index}\n"))
            .collect()),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(showdown)?;
            json.push('\n');
            Ok(json)
        }
    }
}
