//! Edge and corner pieces. A piece is a fixed group of stickers that always move together.

use super::{Color, Facelet};
use crate::error::{InvariantViolation, PieceError};

/// Queries shared by edges and corners.
pub trait Piece {
    /// The stickers making up this piece.
    fn facelets(&self) -> &[Facelet];

    /// Whether the piece counts as being in its solved position.
    fn is_placed(&self) -> bool;

    /// Whether any sticker of this piece has the given color.
    fn contains_color(&self, color: Color) -> bool {
        self.facelets().iter().any(|f| f.color() == color)
    }

    /// Whether any sticker of this piece is currently on the given face.
    fn contains_center(&self, center: Color) -> bool {
        self.facelets().iter().any(|f| f.center() == center)
    }

    /// The sticker of this piece that is currently on the given face, if any.
    fn facelet_on(&self, center: Color) -> Option<&Facelet> {
        self.facelets().iter().find(|f| f.center() == center)
    }
}

fn position_on(facelets: &[Facelet], center: Color) -> Result<usize, InvariantViolation> {
    facelets
        .iter()
        .position(|f| f.center() == center)
        .ok_or(InvariantViolation::PieceNotOnCenter(center))
}

/// A piece with two stickers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgePiece {
    facelets: [Facelet; 2],
}

impl EdgePiece {
    /// Make a solved edge out of two colors on bordering faces.
    pub fn new(a: Color, b: Color) -> Result<Self, PieceError> {
        if !a.borders(b) {
            return Err(PieceError::InvalidEdge(a, b));
        }
        Ok(EdgePiece {
            facelets: [Facelet::new(a), Facelet::new(b)],
        })
    }

    /// Split the edge into the sticker on `center` and the other sticker.
    pub fn faces_by_center(
        &self,
        center: Color,
    ) -> Result<(&Facelet, &Facelet), InvariantViolation> {
        let [a, b] = &self.facelets;
        match position_on(&self.facelets, center)? {
            0 => Ok((a, b)),
            _ => Ok((b, a)),
        }
    }

    pub(crate) fn faces_by_center_mut(
        &mut self,
        center: Color,
    ) -> Result<(&mut Facelet, &mut Facelet), InvariantViolation> {
        let i = position_on(&self.facelets, center)?;
        let [a, b] = &mut self.facelets;
        match i {
            0 => Ok((a, b)),
            _ => Ok((b, a)),
        }
    }
}

impl Piece for EdgePiece {
    fn facelets(&self) -> &[Facelet] {
        &self.facelets
    }

    fn is_placed(&self) -> bool {
        self.facelets.iter().all(Facelet::is_placed)
    }
}

/// A piece with three stickers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CornerPiece {
    facelets: [Facelet; 3],
}

impl CornerPiece {
    /// Make a solved corner out of three mutually bordering colors.
    pub fn new(a: Color, b: Color, c: Color) -> Result<Self, PieceError> {
        if !(a.borders(b) && b.borders(c) && a.borders(c)) {
            return Err(PieceError::InvalidCorner(a, b, c));
        }
        Ok(CornerPiece {
            facelets: [Facelet::new(a), Facelet::new(b), Facelet::new(c)],
        })
    }

    /// Split the corner into the sticker on `center` and the two other stickers.
    pub fn faces_by_center(
        &self,
        center: Color,
    ) -> Result<(&Facelet, &Facelet, &Facelet), InvariantViolation> {
        let [a, b, c] = &self.facelets;
        match position_on(&self.facelets, center)? {
            0 => Ok((a, b, c)),
            1 => Ok((b, a, c)),
            _ => Ok((c, a, b)),
        }
    }

    pub(crate) fn faces_by_center_mut(
        &mut self,
        center: Color,
    ) -> Result<(&mut Facelet, &mut Facelet, &mut Facelet), InvariantViolation> {
        let i = position_on(&self.facelets, center)?;
        let [a, b, c] = &mut self.facelets;
        match i {
            0 => Ok((a, b, c)),
            1 => Ok((b, a, c)),
            _ => Ok((c, a, b)),
        }
    }
}

impl Piece for CornerPiece {
    fn facelets(&self) -> &[Facelet] {
        &self.facelets
    }

    // Once two stickers are home the third has nowhere else to be.
    fn is_placed(&self) -> bool {
        self.facelets.iter().filter(|f| f.is_placed()).count() >= 2
    }
}
