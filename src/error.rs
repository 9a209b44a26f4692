//! This module defines general error types used throughout the crate.

use thiserror::Error;

use crate::cube333::Color;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error for building a piece out of colors that cannot share a piece.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PieceError {
    /// The two colors are equal or sit on opposite faces.
    #[error("an edge cannot be made of {0} and {1}")]
    InvalidEdge(Color, Color),
    /// Some pair of the three colors is equal or sits on opposite faces.
    #[error("a corner cannot be made of {0}, {1} and {2}")]
    InvalidCorner(Color, Color, Color),
}

/// Error for an adjacency table which does not describe a cube.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdjacencyError {
    /// A neighbour cycle repeats a color, or contains the face itself or its opposite.
    #[error("the neighbours of {0} are not the four colors adjacent to it")]
    NotNeighbours(Color),
    /// Opposite colors in a neighbour cycle must be two steps apart.
    #[error("opposite colors are next to each other in the neighbours of {0}")]
    OppositesAdjacent(Color),
    /// Going around a corner gives a different order depending on which face you start from.
    #[error("the corner {0}/{1}/{2} is ordered inconsistently between faces")]
    Chirality(Color, Color, Color),
}

/// A facelet was asked about a face it is not on. This can only happen if the pieces or the
/// adjacency table are corrupt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// No facelet of the piece currently belongs to the face.
    #[error("invariant violated: piece has no facelet on {0}")]
    PieceNotOnCenter(Color),
    /// The facelet's center is not one of the neighbours of the face being turned.
    #[error("invariant violated: {center} is not a neighbour of {face}")]
    NotANeighbour {
        /// The face being turned.
        face: Color,
        /// The center the facelet was on.
        center: Color,
    },
}
