use thiserror::Error;

/// Reasons a roll can be refused.
///
/// A refused roll never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("game has already finished")]
    GameFinished,
    #[error("invalid pin count {pins}: must be between 0 and 10")]
    InvalidPins { pins: u8 },
    #[error("cannot knock down {pins} pins with only {standing} standing")]
    TooManyPins { pins: u8, standing: u8 },
    #[error("frame has no room for another roll")]
    FrameFull,
}

impl RollError {
    pub fn code(self) -> &'static str {
        match self {
            RollError::GameFinished => "game_finished",
            RollError::InvalidPins { .. } | RollError::TooManyPins { .. } => "invalid_pin_count",
            RollError::FrameFull => "frame_full",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_and_invalid_pins_have_distinct_codes() {
        assert_eq!(RollError::GameFinished.code(), "game_finished");
        assert_eq!(RollError::InvalidPins { pins: 11 }.code(), "invalid_pin_count");
        assert_eq!(
            RollError::TooManyPins { pins: 8, standing: 3 }.code(),
            "invalid_pin_count"
        );
        assert_ne!(RollError::GameFinished.code(), RollError::FrameFull.code());
    }

    #[test]
    fn messages_mention_the_offending_values() {
        let msg = RollError::TooManyPins { pins: 8, standing: 3 }.to_string();
        assert!(msg.contains('8'));
        assert!(msg.contains('3'));
        assert_eq!(
            RollError::InvalidPins { pins: 12 }.to_string(),
            "invalid pin count 12: must be between 0 and 10"
        );
    }
}
