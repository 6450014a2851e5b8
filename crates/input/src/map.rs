//! Score-sheet symbol mapping to pin counts.

/// Map one score-sheet symbol to pins.
///
/// `first_ball` is the open first ball of the current rack, if any; a spare
/// (`/`) knocks down whatever it left standing.
pub fn symbol_to_pins(symbol: char, first_ball: Option<u8>) -> Option<u8> {
    match symbol {
        'X' | 'x' => Some(10),
        '-' | '0' => Some(0),
        '/' => first_ball.map(|pins| 10 - pins),
        '1'..='9' => symbol.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

/// Whether `ch` can start a score-sheet token.
pub fn is_symbol(ch: char) -> bool {
    matches!(ch, 'X' | 'x' | '-' | '/' | '0'..='9')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strike_and_gutter_symbols() {
        assert_eq!(symbol_to_pins('X', None), Some(10));
        assert_eq!(symbol_to_pins('x', Some(3)), Some(10));
        assert_eq!(symbol_to_pins('-', None), Some(0));
    }

    #[test]
    fn test_spare_needs_a_first_ball() {
        assert_eq!(symbol_to_pins('/', Some(7)), Some(3));
        assert_eq!(symbol_to_pins('/', Some(0)), Some(10));
        assert_eq!(symbol_to_pins('/', None), None);
    }

    #[test]
    fn test_digits_and_unknown_symbols() {
        assert_eq!(symbol_to_pins('9', None), Some(9));
        assert_eq!(symbol_to_pins('F', None), None);
        assert!(is_symbol('/'));
        assert!(!is_symbol('?'));
    }
}
