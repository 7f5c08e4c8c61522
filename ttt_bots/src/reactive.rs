use rand::rngs::StdRng;
use tracing::trace;
use ttt::{Board, Marker};

use crate::{random_move, Bot, NoLegalMove};

/// Completes its own lines, blocks the opponents' lines, and otherwise plays randomly.
pub struct ReactiveBot {
    marker: Marker,
    rng: StdRng,
}

impl ReactiveBot {
    pub fn new(marker: Marker, rng: StdRng) -> Self {
        Self { marker, rng }
    }
}

impl Bot for ReactiveBot {
    fn marker(&self) -> Marker {
        self.marker
    }

    fn choose(&mut self, board: &Board) -> Result<usize, NoLegalMove> {
        if let Some(number) = board.at_chance(self.marker) {
            trace!(marker = %self.marker, number, "Completing a line");
            return Ok(number);
        }
        if let Some(number) = board.at_risk(self.marker) {
            trace!(marker = %self.marker, number, "Blocking a line");
            return Ok(number);
        }
        random_move(board, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use ttt::marker;

    use super::*;

    fn bot() -> ReactiveBot {
        ReactiveBot::new(marker!("X"), StdRng::seed_from_u64(0))
    }

    #[test]
    fn completes_before_blocking() {
        let mut board = Board::new(3, 3).unwrap();
        for (number, m) in [(1, "X"), (2, "X"), (4, "O"), (5, "O")] {
            board.set(number, m.parse().unwrap()).unwrap();
        }
        assert_eq!(bot().choose(&board), Ok(3));
    }

    #[test]
    fn blocks() {
        let mut board = Board::new(5, 4).unwrap();
        for (number, m) in [(2, "O"), (8, "O"), (14, "O"), (13, "X")] {
            board.set(number, m.parse().unwrap()).unwrap();
        }
        assert_eq!(bot().choose(&board), Ok(20));
    }

    #[test]
    fn opens_in_the_center() {
        assert_eq!(bot().choose(&Board::new(3, 3).unwrap()), Ok(5));
    }
}
