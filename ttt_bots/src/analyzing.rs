use tracing::{debug, trace};
use ttt::{Board, Marker};

use crate::{Bot, NoLegalMove};

/// How much completing and blocking lines are worth.
///
/// Capturing a line is worth twice as much as defending one, and both outweigh
/// the per-line shaping bonuses on boards of the usual sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights {
    pub capture: i64,
    pub defend: i64,
}

impl Weights {
    pub fn for_win_length(win_length: usize) -> Self {
        let defend = (win_length as i64).pow(3);
        Self {
            capture: 2 * defend,
            defend,
        }
    }
}

/// Scores playing `marker` on the unmarked cell `number`.
///
/// Looks at the lines through the cell while it is still empty: a win chance
/// there means the move completes a line, a line at risk means the move blocks
/// an opponent.
pub fn score_move(board: &Board, number: usize, marker: Marker) -> i64 {
    let weights = Weights::for_win_length(board.win_length());
    let lines = board.lines_involving(number);

    let blockable = lines.iter().filter(|line| line.is_blockable(marker)).count();
    let buildable = lines.iter().filter(|line| line.is_buildable(marker)).count();
    let empty = lines.iter().filter(|line| line.is_empty()).count();

    let mut score = (3 * blockable + 2 * buildable + empty) as i64;
    if lines.iter().any(|line| line.is_win_chance(marker)) {
        score += weights.capture;
    }
    if lines.iter().any(|line| line.is_at_risk(marker)) {
        score += weights.defend;
    }
    score
}

/// The score of every legal move, in the order of [`Board::unmarked_cells()`].
pub fn move_scores(board: &Board, marker: Marker) -> Vec<(usize, i64)> {
    board
        .unmarked_cells()
        .into_iter()
        .map(|number| (number, score_move(board, number, marker)))
        .collect()
}

/// The highest-scoring move. Ties go to the lowest cell number.
pub fn best_move(board: &Board, marker: Marker) -> Result<usize, NoLegalMove> {
    let mut best: Option<(usize, i64)> = None;
    for (number, score) in move_scores(board, marker) {
        trace!(%marker, number, score);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((number, score));
        }
    }
    let (number, score) = best.ok_or(NoLegalMove)?;
    debug!(%marker, number, score, "Best single-ply move");
    Ok(number)
}

/// Plays the move with the best single-ply score.
pub struct AnalyzingBot {
    marker: Marker,
}

impl AnalyzingBot {
    pub fn new(marker: Marker) -> Self {
        Self { marker }
    }
}

impl Bot for AnalyzingBot {
    fn marker(&self) -> Marker {
        self.marker
    }

    fn choose(&mut self, board: &Board) -> Result<usize, NoLegalMove> {
        best_move(board, self.marker)
    }
}

#[cfg(test)]
mod tests {
    use ttt::marker;

    use super::*;

    fn board_with(side: usize, win_length: usize, marks: &[(usize, &str)]) -> Board {
        let mut board = Board::new(side, win_length).unwrap();
        for &(number, m) in marks {
            board.set(number, m.parse().unwrap()).unwrap();
        }
        board
    }

    #[test]
    fn weights() {
        assert_eq!(Weights::for_win_length(3), Weights { capture: 54, defend: 27 });
        assert_eq!(Weights::for_win_length(5), Weights { capture: 250, defend: 125 });
    }

    #[test]
    fn empty_board_scores_count_lines() {
        let board = Board::new(3, 3).unwrap();
        let scores = move_scores(&board, marker!("X"));
        assert_eq!(
            scores,
            vec![(1, 3), (2, 2), (3, 3), (4, 2), (5, 4), (6, 2), (7, 3), (8, 2), (9, 3)]
        );
        assert_eq!(best_move(&board, marker!("X")), Ok(5));
    }

    #[test]
    fn score_components() {
        // X . .
        // . O .
        // . . .
        let board = board_with(3, 3, &[(1, "X"), (5, "O")]);
        // Cell 2: top row buildable for X, middle column blockable
        assert_eq!(score_move(&board, 2, marker!("X")), 2 + 3);
        // Cell 9: main diagonal is blocked, right column and bottom row are empty
        assert_eq!(score_move(&board, 9, marker!("X")), 2);
        // Cell 3: top row buildable, up diagonal blockable, right column empty
        assert_eq!(score_move(&board, 3, marker!("X")), 2 + 3 + 1);
    }

    #[test]
    fn capturing_beats_defending() {
        let board = board_with(3, 3, &[(1, "X"), (2, "X"), (4, "O"), (5, "O")]);
        let capture = score_move(&board, 3, marker!("X"));
        let defend = score_move(&board, 6, marker!("X"));
        assert!(capture >= 54);
        assert!((27..54).contains(&defend));
        assert_eq!(AnalyzingBot::new(marker!("X")).choose(&board), Ok(3));
    }

    #[test]
    fn blocks_a_threat() {
        let board = board_with(3, 3, &[(1, "O"), (2, "O"), (5, "X")]);
        assert_eq!(AnalyzingBot::new(marker!("X")).choose(&board), Ok(3));
    }

    #[test]
    fn ties_go_to_the_first_move() {
        // Every corner scores the same around an opponent in the center
        let board = board_with(3, 3, &[(5, "O")]);
        let scores = move_scores(&board, marker!("X"));
        let best = scores.iter().map(|&(_, score)| score).max().unwrap();
        let first_best = scores.iter().find(|&&(_, score)| score == best).unwrap().0;
        assert_eq!(best_move(&board, marker!("X")), Ok(first_best));
        assert_eq!(first_best, 1);
    }

    #[test]
    fn no_move_on_a_full_board() {
        let board = board_with(
            3,
            3,
            &[
                (1, "X"), (2, "O"), (3, "X"), (4, "X"), (5, "O"), (6, "O"), (7, "O"), (8, "X"),
                (9, "X"),
            ],
        );
        assert_eq!(AnalyzingBot::new(marker!("X")).choose(&board), Err(NoLegalMove));
    }
}
