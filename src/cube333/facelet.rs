//! A single sticker of the cube.

use super::Color;

/// A single sticker. Its color is fixed when the sticker is made; the face it currently sits on
/// changes as the cube is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelet {
    color: Color,
    center: Color,
}

impl Facelet {
    /// A sticker of the given color, sitting on its own face.
    pub fn new(color: Color) -> Self {
        Facelet {
            color,
            center: color,
        }
    }

    /// The permanent color of the sticker.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The face the sticker is currently on.
    pub fn center(&self) -> Color {
        self.center
    }

    /// Whether the sticker is on the face of its own color.
    pub fn is_placed(&self) -> bool {
        self.color == self.center
    }

    pub(crate) fn change_center(&mut self, center: Color) {
        self.center = center;
    }
}
