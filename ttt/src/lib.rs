//! Generalized tic-tac-toe: an N x N board (N odd, 3 to 15) won by K markers in a row.
//!
//! [`Geometry`] enumerates the candidate winning lines of a board shape,
//! [`Board`] holds the cells and answers tactical queries through [`Line`] views.
pub use board::*;
pub use cell::*;
pub use errors::*;
pub use geometry::*;
pub use line::*;
pub use registry::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cell;
mod errors;
mod geometry;
mod line;
mod registry;
mod visualization;
