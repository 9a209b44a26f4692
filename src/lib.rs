//! A library which models the stickers of a 3x3x3 twisty puzzle and applies face turns to them.
//! Only state representation and move application live here, there is no solver.

#![deny(missing_docs)]

pub mod cube333;
pub mod error;
pub mod moves;
