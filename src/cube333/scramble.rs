//! Seeded random scrambles.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use super::{Color, Cube, FaceTurn};
use crate::moves::MoveSequence;

/// Parameters to deterministically generate a random sequence of quarter turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Number of quarter turns.
    pub moves: usize,
    /// Random seed. The same seed always gives the same scramble.
    pub seed: u64,
}

impl Default for ScrambleParams {
    fn default() -> Self {
        Self { moves: 20, seed: 0 }
    }
}

impl ScrambleParams {
    /// Parameters for a scramble of the given length with a seed from the OS RNG.
    pub fn random(moves: usize) -> Self {
        Self { moves, ..Self::default() }.reseeded()
    }

    /// The same parameters with a fresh seed from the OS RNG.
    pub fn reseeded(self) -> Self {
        Self {
            seed: rand::rng().random(),
            ..self
        }
    }

    /// Generate the scramble. Each turn picks a face and a direction uniformly at random, so
    /// consecutive turns may cancel.
    pub fn generate(&self) -> MoveSequence<FaceTurn> {
        let mut rng = ChaCha12Rng::seed_from_u64(self.seed);
        (0..self.moves)
            .map(|_| FaceTurn {
                face: Color::ARRAY[rng.random_range(0..Color::ARRAY.len())],
                count: if rng.random_bool(0.5) { 1 } else { 3 },
            })
            .collect()
    }
}

impl Cube {
    /// Scramble the cube, returning the turns that were applied.
    pub fn scramble(&mut self, params: &ScrambleParams) -> MoveSequence<FaceTurn> {
        let mvs = params.generate();
        log::debug!("scramble with seed {}: {mvs}", params.seed);
        self.make_moves(&mvs);
        mvs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scramble_changes_nothing() {
        let mut cube = Cube::new();
        cube.clockwise(Color::Blue);
        let before = cube.clone();
        let mvs = cube.scramble(&ScrambleParams { moves: 0, seed: 7 });
        assert!(mvs.is_empty());
        assert_eq!(cube, before);
    }

    #[test]
    fn scrambles_are_reproducible() {
        let params = ScrambleParams::default();
        let mvs = params.generate();
        assert_eq!(mvs.len(), 20);
        assert_eq!(mvs, params.generate());
        assert!(mvs.iter().all(|m| m.count == 1 || m.count == 3));
        assert_ne!(mvs, ScrambleParams { seed: 1, ..params }.generate());
    }

    #[test]
    fn scramble_then_inverse_solves() {
        let mut cube = Cube::new();
        let mvs = cube.scramble(&ScrambleParams { moves: 25, seed: 42 });
        assert_eq!(mvs.len(), 25);
        for face in Color::ARRAY {
            assert_eq!(cube.center_count(face), 8);
        }
        cube.make_moves(&mvs.inverse());
        assert!(cube.is_solved());
    }

    #[test]
    fn reseeding_keeps_the_length() {
        let params = ScrambleParams::default().reseeded();
        assert_eq!(params.moves, ScrambleParams::default().moves);
        assert_eq!(ScrambleParams::random(5).generate().len(), 5);
    }
}
