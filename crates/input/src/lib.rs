//! Roll input parsing.
//!
//! Turns user text into pin counts for the game. Two notations are accepted,
//! separated by whitespace or commas, and may be mixed:
//!
//! - plain pin counts: `10 7 3 9 0`
//! - score-sheet symbols: `X 7/ 9-` (`X` strike, `/` spare, `-` gutter)
//!
//! ```
//! use tenpin_input::parse_rolls;
//!
//! assert_eq!(parse_rolls("X 7/ 9-").unwrap(), vec![10, 7, 3, 9, 0]);
//! assert_eq!(parse_rolls("10,7,3").unwrap(), vec![10, 7, 3]);
//! ```

pub mod map;

use thiserror::Error;

pub use map::{is_symbol, symbol_to_pins};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognised roll `{token}`")]
    InvalidToken { token: String },
    #[error("pin count {pins} is out of range (0-10)")]
    OutOfRange { pins: u32 },
    #[error("spare `/` at roll #{position} has no first ball before it")]
    SpareWithoutFirstBall { position: usize },
}

/// Parse a whole roll sequence.
pub fn parse_rolls(input: &str) -> Result<Vec<u8>, ParseError> {
    let mut rolls = Vec::new();
    // Open first ball of the current rack, used to resolve `/`.
    let mut first_ball: Option<u8> = None;

    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if let Ok(pins) = token.parse::<u32>() {
            if pins > 10 {
                return Err(ParseError::OutOfRange { pins });
            }
            let pins = pins as u8;
            first_ball = next_first_ball(first_ball, pins);
            rolls.push(pins);
            continue;
        }

        if !token.chars().all(is_symbol) {
            return Err(ParseError::InvalidToken {
                token: token.to_string(),
            });
        }
        for ch in token.chars() {
            let pins = symbol_to_pins(ch, first_ball).ok_or_else(|| {
                if ch == '/' {
                    ParseError::SpareWithoutFirstBall {
                        position: rolls.len() + 1,
                    }
                } else {
                    ParseError::InvalidToken {
                        token: token.to_string(),
                    }
                }
            })?;
            first_ball = next_first_ball(first_ball, pins);
            rolls.push(pins);
        }
    }
    Ok(rolls)
}

/// Parse each argument as its own chunk of rolls and concatenate them.
pub fn parse_roll_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<u8>, ParseError> {
    let joined = args
        .iter()
        .map(|a| a.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    parse_rolls(&joined)
}

fn next_first_ball(first_ball: Option<u8>, pins: u8) -> Option<u8> {
    match first_ball {
        // Second ball closes the rack.
        Some(_) => None,
        None if pins == 10 => None,
        None => Some(pins),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_rolls("1 2  3\n4").unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(parse_rolls("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_symbols_and_numbers_mix() {
        assert_eq!(parse_rolls("X 10 4/ 6").unwrap(), vec![10, 10, 4, 6, 6]);
        assert_eq!(parse_rolls("XXX").unwrap(), vec![10, 10, 10]);
        assert_eq!(parse_rolls("-/").unwrap(), vec![0, 10]);
    }

    #[test]
    fn test_spare_tracks_rack_across_tokens() {
        assert_eq!(parse_rolls("7 /").unwrap(), vec![7, 3]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_rolls("11"),
            Err(ParseError::OutOfRange { pins: 11 })
        );
        assert_eq!(
            parse_rolls("X /"),
            Err(ParseError::SpareWithoutFirstBall { position: 2 })
        );
        assert!(matches!(
            parse_rolls("7 abc"),
            Err(ParseError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_parse_roll_args_joins_arguments() {
        let args = vec!["1,2".to_string(), "X".to_string()];
        assert_eq!(parse_roll_args(&args).unwrap(), vec![1, 2, 10]);
    }
}
