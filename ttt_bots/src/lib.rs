//! Move selection for [`ttt`] boards.
//!
//! Every bot implements [`Bot`]. The [`Strategy`] enum bundles all of them, and
//! [`StrategyConfig`] builds one from a config file.
mod analyzing;
mod error;
mod maximizing;
mod random;
mod reactive;
mod strategy;

pub use analyzing::*;
pub use error::*;
pub use maximizing::*;
pub use random::*;
pub use reactive::*;
pub use strategy::*;

use ttt::{Board, Marker};

/// A trait for everything that picks moves.
pub trait Bot {
    /// The marker this bot plays with.
    fn marker(&self) -> Marker;

    /// Picks one of the board's unmarked cells.
    ///
    /// The board is only read. Bots that look ahead do so on clones.
    fn choose(&mut self, board: &Board) -> Result<usize, NoLegalMove>;
}
