use crate::Board;

/// Draws the board as a text grid.
///
/// Every cell is four characters wide and three lines high. With
/// `show_numbers`, the cell number replaces the top-left border of each cell,
/// so that a player can see which number to pick.
pub fn visualize_board(board: &Board, show_numbers: bool) -> String {
    let side = board.side();
    let separator = format!("{}+\n", "+---".repeat(side));

    let mut result = String::new();
    for row in board.cells().chunks(side) {
        result += &separator;
        for cell in row {
            if show_numbers {
                result += &format!("{:<4}", cell.number());
            } else {
                result += "|   ";
            }
        }
        result += "|\n";
        for cell in row {
            let glyph = cell.marker().map_or(' ', |m| m.glyph());
            result += &format!("| {} ", glyph);
        }
        result += "|\n";
        result += &"|   ".repeat(side);
        result += "|\n";
    }
    result += &separator;
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker;

    #[test]
    fn three_by_three() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, marker!("X")).unwrap();
        board.set(5, marker!("O")).unwrap();
        let expected = "\
+---+---+---+
|   |   |   |
| X |   |   |
|   |   |   |
+---+---+---+
|   |   |   |
|   | O |   |
|   |   |   |
+---+---+---+
|   |   |   |
|   |   |   |
|   |   |   |
+---+---+---+
";
        assert_eq!(visualize_board(&board, false), expected);
    }

    #[test]
    fn numbers_replace_the_left_border() {
        let board = Board::new(5, 3).unwrap();
        let drawn = board.to_string();
        assert!(drawn.starts_with("+---+---+---+---+---+\n1   2   3   4   5   |\n"));
        assert!(drawn.contains("21  22  23  24  25  |\n"));
        assert_eq!(drawn.lines().count(), 5 * 4 + 1);
    }
}
