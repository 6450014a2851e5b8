//! Read-only snapshot of a game, for rendering and JSON output.

use arrayvec::ArrayVec;
use serde::{Serialize, Serializer};

use crate::types::{FrameMark, FRAMES_IN_GAME, ROLLS_PER_FRAME};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FrameSnapshot {
    pub number: u8,
    pub rolls: ArrayVec<u8, ROLLS_PER_FRAME>,
    #[serde(serialize_with = "serialize_mark")]
    pub mark: FrameMark,
    /// Cumulative score through this frame, once it can be settled.
    pub running_total: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// Regulation frames started so far (at most ten).
    pub frames: ArrayVec<FrameSnapshot, FRAMES_IN_GAME>,
    /// Balls thrown in the bonus slot after the tenth frame.
    pub bonus_rolls: ArrayVec<u8, ROLLS_PER_FRAME>,
    pub current_frame: u8,
    pub score: u32,
    pub pending_bonus_rolls: u8,
    pub finished: bool,
}

impl GameSnapshot {
    /// Snapshot of frame `number` (1-indexed), if it has been started.
    pub fn frame(&self, number: usize) -> Option<&FrameSnapshot> {
        number.checked_sub(1).and_then(|i| self.frames.get(i))
    }

    /// Every ball shown in the tenth box: the frame's own rolls then the bonus.
    pub fn tenth_box_rolls(&self) -> ArrayVec<u8, 3> {
        let mut out = ArrayVec::new();
        if let Some(tenth) = self.frame(FRAMES_IN_GAME) {
            out.extend(tenth.rolls.iter().copied());
        }
        for &pins in &self.bonus_rolls {
            if out.try_push(pins).is_err() {
                break;
            }
        }
        out
    }
}

fn serialize_mark<S: Serializer>(mark: &FrameMark, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(mark.as_str())
}
