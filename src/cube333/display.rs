//! Console rendering of a cube, one block per face.
//!
//! Each face lists the color of every sticker currently on it, edges then corners. With the
//! alternate flag (`{:#}`) each sticker is followed by the faces the rest of its piece is on.

use std::fmt;

use super::{Color, CornerPiece, Cube, EdgePiece, Facelet, Piece};

/// The pieces currently touching one face.
#[derive(Debug, Clone)]
pub struct FaceView<'a> {
    /// The face being viewed.
    pub face: Color,
    /// Edges with a sticker on the face.
    pub edges: Vec<&'a EdgePiece>,
    /// Corners with a sticker on the face.
    pub corners: Vec<&'a CornerPiece>,
}

impl Cube {
    /// Collect the pieces currently touching `face`.
    pub fn face(&self, face: Color) -> FaceView<'_> {
        FaceView {
            face,
            edges: self.edges_on(face).collect(),
            corners: self.corners_on(face).collect(),
        }
    }
}

impl FaceView<'_> {
    /// The colors of the stickers on this face, edges first.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        let face = self.face;
        let edges = self
            .edges
            .iter()
            .filter_map(move |e| e.facelet_on(face))
            .map(Facelet::color);
        let corners = self
            .corners
            .iter()
            .filter_map(move |c| c.facelet_on(face))
            .map(Facelet::color);
        edges.chain(corners)
    }
}

impl fmt::Display for FaceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = f.alternate();
        writeln!(f, "{}:", self.face)?;

        f.write_str("\tEdges:\t\t")?;
        for edge in &self.edges {
            let (on, other) = edge
                .faces_by_center(self.face)
                .expect("edge in the view has no sticker on its face");
            write!(f, "{}", on.color())?;
            if details {
                write!(f, "({})", other.center())?;
            }
            f.write_str("\t")?;
        }
        writeln!(f)?;

        f.write_str("\tCorners:\t")?;
        for corner in &self.corners {
            let (on, a, b) = corner
                .faces_by_center(self.face)
                .expect("corner in the view has no sticker on its face");
            write!(f, "{}", on.color())?;
            if details {
                write!(f, "({}-{})", a.center(), b.center())?;
            }
            f.write_str("\t")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in Color::ARRAY {
            if f.alternate() {
                write!(f, "{:#}", self.face(face))?;
            } else {
                write!(f, "{}", self.face(face))?;
            }
        }
        Ok(())
    }
}
