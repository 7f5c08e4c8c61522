use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;
use ttt::{Board, Marker};

use crate::{Bot, NoLegalMove};

/// Takes the center if it can, otherwise plays anywhere.
pub struct RandomBot {
    marker: Marker,
    rng: StdRng,
}

impl RandomBot {
    pub fn new(marker: Marker, rng: StdRng) -> Self {
        Self { marker, rng }
    }
}

/// The center cell if it is empty, else a uniformly random unmarked cell.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, NoLegalMove> {
    let center = board.center_cell();
    if board.get(center).is_none() {
        return Ok(center);
    }
    board
        .unmarked_cells()
        .choose(rng)
        .copied()
        .ok_or(NoLegalMove)
}

impl Bot for RandomBot {
    fn marker(&self) -> Marker {
        self.marker
    }

    fn choose(&mut self, board: &Board) -> Result<usize, NoLegalMove> {
        let number = random_move(board, &mut self.rng)?;
        trace!(marker = %self.marker, number, "Random move");
        Ok(number)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use ttt::marker;

    use super::*;

    #[test]
    fn takes_the_center_first() {
        let mut bot = RandomBot::new(marker!("X"), StdRng::seed_from_u64(1));
        let board = Board::new(7, 4).unwrap();
        assert_eq!(bot.choose(&board), Ok(25));
    }

    #[test]
    fn plays_unmarked_cells() {
        let mut bot = RandomBot::new(marker!("X"), StdRng::seed_from_u64(2));
        let mut board = Board::new(3, 3).unwrap();
        board.set(5, marker!("O")).unwrap();
        board.set(1, marker!("O")).unwrap();
        for _ in 0..50 {
            let number = bot.choose(&board).unwrap();
            assert!(board.unmarked_cells().contains(&number));
        }
    }

    #[test]
    fn fails_on_a_full_board() {
        let mut bot = RandomBot::new(marker!("X"), StdRng::seed_from_u64(3));
        let mut board = Board::new(3, 3).unwrap();
        for number in 1..=9 {
            board.set(number, marker!("O")).unwrap();
        }
        assert_eq!(bot.choose(&board), Err(NoLegalMove));
    }
}
