//! The neighbour cycle of every face, which is all a turn needs to know about the cube's geometry.

use itertools::Itertools;

use super::Color;
use crate::error::{AdjacencyError, InvariantViolation};

/// For each face, the four bordering faces in clockwise order when looking at that face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable([[Color; 4]; 6]);

/// The adjacency table for the standard color scheme.
pub static ADJACENCY: AdjacencyTable = {
    use Color::*;
    AdjacencyTable([
        [White, Blue, Yellow, Green],
        [White, Orange, Yellow, Red],
        [White, Red, Yellow, Orange],
        [Blue, Red, Green, Orange],
        [Red, Blue, Orange, Green],
        [White, Green, Yellow, Blue],
    ])
};

impl AdjacencyTable {
    /// Build a table from neighbour cycles indexed by `Color as usize`. The table is not checked
    /// here; see [`validate`](AdjacencyTable::validate).
    pub const fn new(cycles: [[Color; 4]; 6]) -> Self {
        AdjacencyTable(cycles)
    }

    /// The faces bordering `face`, clockwise.
    pub fn neighbours(&self, face: Color) -> &[Color; 4] {
        &self.0[face as usize]
    }

    /// Where a sticker on `from` ends up after turning `face` clockwise by `steps` quarter turns.
    pub fn advance(
        &self,
        face: Color,
        from: Color,
        steps: u8,
    ) -> Result<Color, InvariantViolation> {
        let cycle = self.neighbours(face);
        let i = cycle
            .iter()
            .position(|&c| c == from)
            .ok_or(InvariantViolation::NotANeighbour { face, center: from })?;
        Ok(cycle[(i + steps as usize) % 4])
    }

    /// Check that the table describes a cube: each cycle holds exactly the four bordering faces,
    /// with opposite faces across from each other, and every corner reads the same way round from
    /// each of its three faces.
    pub fn validate(&self) -> Result<(), AdjacencyError> {
        for face in Color::ARRAY {
            let cycle = self.neighbours(face);
            if !cycle.iter().all(|&c| face.borders(c)) || !cycle.iter().all_unique() {
                return Err(AdjacencyError::NotNeighbours(face));
            }
            if (0..4).any(|i| cycle[i].opposite() != cycle[(i + 2) % 4]) {
                return Err(AdjacencyError::OppositesAdjacent(face));
            }
        }

        // If b follows a around c, then c follows b around a.
        for face in Color::ARRAY {
            let cycle = self.neighbours(face);
            for (&a, &b) in cycle.iter().circular_tuple_windows() {
                if !self.follows(a, b, face) {
                    return Err(AdjacencyError::Chirality(face, a, b));
                }
            }
        }

        Ok(())
    }

    fn follows(&self, face: Color, a: Color, b: Color) -> bool {
        let cycle = self.neighbours(face);
        cycle
            .iter()
            .position(|&c| c == a)
            .is_some_and(|i| cycle[(i + 1) % 4] == b)
    }
}
