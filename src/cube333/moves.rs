//! Face turns of the 3x3x3 and applying them to a cube.

use std::fmt;

use super::{Color, Cube};
use crate::moves::{Move, MoveSequence};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A turn of one face, stored as the face's color and a counter of clockwise quarter turns. An
/// anti-clockwise turn has a count of 3.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct FaceTurn {
    /// The face being turned, named by its center color.
    pub face: Color,
    /// Number of clockwise quarter turns.
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

impl Move for FaceTurn {
    fn inverse(self) -> Self {
        Self {
            face: self.face,
            count: (4 - self.count % 4) % 4,
        }
    }
}

impl fmt::Display for FaceTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = self.face.notation();
        match self.count % 4 {
            1 => write!(f, "{face}"),
            3 => write!(f, "{face}'"),
            n => write!(f, "{face}{n}"),
        }
    }
}

/// Create a face turn by specifying a color and a count, e.g. `mv!(White, 3)`. The color is given
/// without the `Color::` prefix.
#[macro_export]
macro_rules! mv {
    ($face:ident, $count: expr) => {
        $crate::cube333::FaceTurn {
            face: $crate::cube333::Color::$face,
            count: $count,
        }
    };
}

impl Cube {
    /// Apply a sequence of turns in order.
    pub fn make_moves(&mut self, mvs: &MoveSequence<FaceTurn>) {
        for &mv in mvs.iter() {
            self.make_move(mv);
        }
    }

    /// Apply a single turn.
    pub fn make_move(&mut self, mv: FaceTurn) {
        self.rotate(mv.face, mv.count % 4);
    }
}
