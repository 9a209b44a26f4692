//! Implementation of a 3x3x3 cube as a set of stickers grouped into edge and corner pieces.
//!
//! Every sticker remembers its own color and the face it is currently on. A face turn walks the
//! stickers of every piece touching that face and moves each one not on the face itself one step
//! around the face's neighbour cycle, taken from the [`AdjacencyTable`].
//!
//! ```rust
//! use facelet_cube::cube333::{Color, Cube};
//!
//! let mut cube = Cube::new();
//! for _ in 0..4 {
//!     cube.clockwise(Color::White);
//! }
//! assert!(cube.is_solved());
//! ```

use itertools::Itertools;

use crate::error::AdjacencyError;

pub mod adjacency;
pub mod color;
pub mod display;
pub mod facelet;
pub mod moves;
pub mod piece;
pub mod scramble;

pub use adjacency::{AdjacencyTable, ADJACENCY};
pub use color::Color;
pub use display::FaceView;
pub use facelet::Facelet;
pub use moves::FaceTurn;
pub use piece::{CornerPiece, EdgePiece, Piece};
pub use scramble::ScrambleParams;

/// The puzzle state: 12 edges and 8 corners, built solved and then only ever turned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    edges: Vec<EdgePiece>,
    corners: Vec<CornerPiece>,
    adjacency: &'static AdjacencyTable,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// A solved cube using the standard color scheme.
    pub fn new() -> Self {
        Self::build(&ADJACENCY)
    }

    /// A solved cube turning according to the given table, which is checked first.
    pub fn with_adjacency(adjacency: &'static AdjacencyTable) -> Result<Self, AdjacencyError> {
        adjacency.validate()?;
        Ok(Self::build(adjacency))
    }

    fn build(adjacency: &'static AdjacencyTable) -> Self {
        // Every pair (triple) of mutually bordering colors is exactly one edge (corner), so these
        // constructors cannot fail.
        let edges: Vec<_> = Color::ARRAY
            .into_iter()
            .tuple_combinations()
            .filter_map(|(a, b)| EdgePiece::new(a, b).ok())
            .collect();
        let corners: Vec<_> = Color::ARRAY
            .into_iter()
            .tuple_combinations()
            .filter_map(|(a, b, c)| CornerPiece::new(a, b, c).ok())
            .collect();
        debug_assert_eq!((edges.len(), corners.len()), (12, 8));
        log::debug!(
            "built cube with {} edges and {} corners",
            edges.len(),
            corners.len()
        );

        Cube {
            edges,
            corners,
            adjacency,
        }
    }

    /// Turn a face a quarter turn clockwise.
    pub fn clockwise(&mut self, face: Color) {
        self.turn(face, true);
    }

    /// Turn a face a quarter turn anti-clockwise.
    pub fn anticlockwise(&mut self, face: Color) {
        self.turn(face, false);
    }

    /// Turn a face a quarter turn in the given direction.
    pub fn turn(&mut self, face: Color, clockwise: bool) {
        self.rotate(face, if clockwise { 1 } else { 3 });
    }

    /// Turn `face` by `steps` clockwise quarter turns. Stickers on the face itself and on the
    /// opposite face keep their center.
    fn rotate(&mut self, face: Color, steps: u8) {
        if steps == 0 {
            return;
        }
        log::trace!("turning {face} by {steps}");

        let adjacency = self.adjacency;
        let advance = |f: &mut Facelet| {
            let center = adjacency
                .advance(face, f.center(), steps)
                .expect("a sticker beside the turned face was not on a neighbouring face");
            f.change_center(center);
        };

        for edge in self.edges.iter_mut().filter(|e| e.contains_center(face)) {
            let (_, other) = edge
                .faces_by_center_mut(face)
                .expect("edge touching the face has no sticker on it");
            advance(other);
        }

        for corner in self.corners.iter_mut().filter(|c| c.contains_center(face)) {
            let (_, a, b) = corner
                .faces_by_center_mut(face)
                .expect("corner touching the face has no sticker on it");
            advance(a);
            advance(b);
        }
    }

    /// All edge pieces, in no particular order.
    pub fn edges(&self) -> &[EdgePiece] {
        &self.edges
    }

    /// All corner pieces, in no particular order.
    pub fn corners(&self) -> &[CornerPiece] {
        &self.corners
    }

    /// The edges with a sticker currently on `face`.
    pub fn edges_on(&self, face: Color) -> impl Iterator<Item = &EdgePiece> {
        self.edges.iter().filter(move |e| e.contains_center(face))
    }

    /// The corners with a sticker currently on `face`.
    pub fn corners_on(&self, face: Color) -> impl Iterator<Item = &CornerPiece> {
        self.corners.iter().filter(move |c| c.contains_center(face))
    }

    /// Every sticker on the cube, edges first.
    pub fn facelets(&self) -> impl Iterator<Item = &Facelet> {
        self.edges
            .iter()
            .flat_map(|e| e.facelets())
            .chain(self.corners.iter().flat_map(|c| c.facelets()))
    }

    /// The number of stickers currently on `face`. This is 8 for every reachable state.
    pub fn center_count(&self, face: Color) -> usize {
        self.facelets().filter(|f| f.center() == face).count()
    }

    /// Whether every piece is in its solved position.
    pub fn is_solved(&self) -> bool {
        self.edges.iter().all(Piece::is_placed) && self.corners.iter().all(Piece::is_placed)
    }

    /// The adjacency table this cube turns with.
    pub fn adjacency(&self) -> &'static AdjacencyTable {
        self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveSequence;
    use Color::*;

    fn centers(cube: &Cube) -> Vec<Color> {
        cube.facelets().map(Facelet::center).collect()
    }

    fn edge(cube: &Cube, a: Color, b: Color) -> &EdgePiece {
        cube.edges()
            .iter()
            .find(|e| e.contains_color(a) && e.contains_color(b))
            .unwrap()
    }

    fn corner(cube: &Cube, a: Color, b: Color, c: Color) -> &CornerPiece {
        cube.corners()
            .iter()
            .find(|p| p.contains_color(a) && p.contains_color(b) && p.contains_color(c))
            .unwrap()
    }

    fn sticker(piece: &impl Piece, color: Color) -> Facelet {
        *piece.facelets().iter().find(|f| f.color() == color).unwrap()
    }

    #[test]
    fn solved_cube_topology() {
        let cube = Cube::new();
        assert_eq!(cube.edges().len(), 12);
        assert_eq!(cube.corners().len(), 8);
        assert!(cube.is_solved());
        for face in Color::ARRAY {
            assert_eq!(cube.edges_on(face).count(), 4);
            assert_eq!(cube.corners_on(face).count(), 4);
            assert_eq!(cube.center_count(face), 8);
        }
        assert_eq!(cube, Cube::with_adjacency(&ADJACENCY).unwrap());
    }

    #[test]
    fn bad_adjacency_is_rejected() {
        static MIRRORED: AdjacencyTable = {
            use Color::*;
            AdjacencyTable::new([
                [White, Blue, Yellow, Green],
                [White, Orange, Yellow, Red],
                [White, Red, Yellow, Orange],
                [Orange, Green, Red, Blue],
                [Red, Blue, Orange, Green],
                [White, Green, Yellow, Blue],
            ])
        };
        assert!(Cube::with_adjacency(&MIRRORED).is_err());
    }

    #[test]
    fn white_clockwise() {
        let mut cube = Cube::new();
        cube.clockwise(White);

        assert_eq!(sticker(edge(&cube, Blue, White), Blue).center(), Red);
        assert_eq!(sticker(edge(&cube, Blue, White), White).center(), White);
        assert_eq!(sticker(edge(&cube, Red, White), Red).center(), Green);
        assert_eq!(sticker(edge(&cube, Green, White), Green).center(), Orange);
        assert_eq!(sticker(edge(&cube, Orange, White), Orange).center(), Blue);

        let c = corner(&cube, Blue, White, Red);
        assert_eq!(sticker(c, White).center(), White);
        assert_eq!(sticker(c, Blue).center(), Red);
        assert_eq!(sticker(c, Red).center(), Green);

        // Pieces away from white are untouched.
        assert!(edge(&cube, Blue, Red).is_placed());
        assert!(corner(&cube, Blue, Yellow, Red).is_placed());
        for f in cube.facelets().filter(|f| f.color() == Yellow) {
            assert_eq!(f.center(), Yellow);
        }
        assert!(!cube.is_solved());
    }

    #[test]
    fn anticlockwise_goes_the_other_way() {
        let mut cube = Cube::new();
        cube.anticlockwise(White);
        assert_eq!(sticker(edge(&cube, Blue, White), Blue).center(), Orange);
        assert_eq!(sticker(edge(&cube, Red, White), Red).center(), Blue);
    }

    #[test]
    fn sexy_move_has_order_six() {
        let sexy = MoveSequence(vec![
            crate::mv!(Red, 1),
            crate::mv!(White, 1),
            crate::mv!(Red, 3),
            crate::mv!(White, 3),
        ]);
        let mut cube = Cube::new();
        for i in 1..=6 {
            cube.make_moves(&sexy);
            assert_eq!(cube.is_solved(), i == 6);
        }
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn scrambled() -> impl Strategy<Value = Cube> {
        vec(any::<FaceTurn>(), 0..20).prop_map(|mvs| {
            let mut cube = Cube::new();
            cube.make_moves(&MoveSequence(mvs));
            cube
        })
    }

    proptest! {
        #[test]
        fn four_turns_are_identity(cube in scrambled(), face in any::<Color>()) {
            let mut cube = cube;
            let before = cube.clone();
            for _ in 0..4 {
                cube.clockwise(face);
            }
            assert_eq!(cube, before);
        }

        #[test]
        fn anticlockwise_inverts_clockwise(cube in scrambled(), face in any::<Color>()) {
            let mut cube = cube;
            let before = cube.clone();
            cube.clockwise(face);
            cube.anticlockwise(face);
            assert_eq!(cube, before);
            cube.anticlockwise(face);
            cube.clockwise(face);
            assert_eq!(cube, before);
        }

        #[test]
        fn turns_are_local(
            cube in scrambled(),
            face in any::<Color>(),
            clockwise in any::<bool>(),
        ) {
            let mut cube = cube;
            let before = centers(&cube);
            cube.turn(face, clockwise);
            let after = centers(&cube);

            let mut changed = 0;
            for (b, a) in before.iter().zip(&after) {
                if *b == face || *b == face.opposite() {
                    assert_eq!(a, b);
                }
                if a != b {
                    changed += 1;
                }
            }
            // 4 edges move one sticker each, 4 corners move two each.
            assert_eq!(changed, 12);
        }

        #[test]
        fn centers_are_conserved(cube in scrambled()) {
            for face in Color::ARRAY {
                assert_eq!(cube.center_count(face), 8);
                assert_eq!(cube.edges_on(face).count(), 4);
                assert_eq!(cube.corners_on(face).count(), 4);
            }
            for corner in cube.corners() {
                let centers = corner.facelets().iter().map(Facelet::center).collect::<Vec<_>>();
                assert!(CornerPiece::new(centers[0], centers[1], centers[2]).is_ok());
            }
        }
    }
}
