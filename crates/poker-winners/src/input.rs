//! Reading hands from a file or stdin, one hand per line.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use poker_eval::{EvalError, Hand, parse_hands};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Reads the whole input, from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String, CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(io_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(io_error)
    }
}

/// Parses one hand per line. Every line counts, so a blank line is reported
/// as a hand with no cards rather than skipped.
pub fn hands_from_text(text: &str) -> Result<Vec<Hand>, CliError> {
    let hands = parse_hands(text.lines())?;
    info!(count = hands.len(), "parsed hands");
    for (index, hand) in hands.iter().enumerate() {
        debug!(index, %hand, "hand");
    }
    Ok(hands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hands_from_text() {
        let hands = hands_from_text("AS KS QS JS TS 2C 3D\r\n2H 2D 2S 3H 3D 9C 4C\n").unwrap();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[1].to_string(), "2H 2D 2S 3H 3D 9C 4C");
    }

    #[test]
    fn test_blank_line_is_an_error() {
        let err = hands_from_text("AS KS QS JS TS\n\n2H 2D 2S 3H 3D\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "hand 1: a hand needs at least 5 cards, got 0"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = read_input(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().starts_with("cannot read /definitely/not/here.txt"));
    }
}
