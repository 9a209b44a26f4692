//! The six face colors and how they relate.

use strum::{Display, EnumIter};

use crate::error::TryFromIntToEnumError;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The color of one face of the cube. A face is named by the color of its center, which never
/// moves.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Color {
    /// Red, opposite orange
    Red,
    /// Blue, opposite green
    Blue,
    /// Green, opposite blue
    Green,
    /// White, opposite yellow
    White,
    /// Yellow, opposite white
    Yellow,
    /// Orange, opposite red
    Orange,
}

impl Color {
    /// Every color, in declaration order.
    pub const ARRAY: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::White,
        Color::Yellow,
        Color::Orange,
    ];

    /// The color of the face opposite to this one.
    pub fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Orange,
            Color::Orange => Color::Red,
            Color::Blue => Color::Green,
            Color::Green => Color::Blue,
            Color::White => Color::Yellow,
            Color::Yellow => Color::White,
        }
    }

    /// Whether two different colors can sit on the same piece.
    pub fn borders(self, other: Color) -> bool {
        self != other && self.opposite() != other
    }

    /// The letter used for this face in move notation.
    pub fn notation(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Color::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

impl From<Color> for u8 {
    fn from(c: Color) -> u8 {
        c as u8
    }
}
