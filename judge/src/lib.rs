//! Runs matches between tic-tac-toe bots.
mod error;
mod game;
mod player;
mod recording;
pub use error::*;
pub use game::*;
pub use player::*;
pub use recording::*;
