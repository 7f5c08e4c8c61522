use crate::{marker, Board, MAX_SIDE, MIN_SIDE, MIN_WIN_LENGTH};

/// A valid board shape.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    pub side: usize,
    pub win_length: usize,
}

impl quickcheck::Arbitrary for Shape {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let sides: Vec<usize> = (MIN_SIDE..=MAX_SIDE).step_by(2).collect();
        let side = *g.choose(&sides).unwrap();
        let win_length = MIN_WIN_LENGTH + usize::arbitrary(g) % (side - MIN_WIN_LENGTH + 1);
        Shape { side, win_length }
    }
}

/// A small board on which X and O took turns on random cells.
///
/// Play does not stop when a line is formed, so several lines may be complete.
#[derive(Clone, Debug)]
pub struct PlayedBoard {
    pub board: Board,
}

impl quickcheck::Arbitrary for PlayedBoard {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let side = *g.choose(&[3, 5, 7]).unwrap();
        let win_length = MIN_WIN_LENGTH + usize::arbitrary(g) % (side - MIN_WIN_LENGTH + 1);
        let mut board = Board::new(side, win_length).unwrap();

        let num_moves = usize::arbitrary(g) % (side * side + 1);
        let markers = [marker!("X"), marker!("O")];
        for turn in 0..num_moves {
            let unmarked = board.unmarked_cells();
            let number = *g.choose(&unmarked).unwrap();
            board.set(number, markers[turn % 2]).unwrap();
        }
        PlayedBoard { board }
    }
}
