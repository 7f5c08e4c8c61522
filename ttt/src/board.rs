use std::sync::Arc;

use crate::{Cell, ConfigError, Geometry, IllegalMark, Line, Marker};

pub const MIN_SIDE: usize = 3;
pub const MAX_SIDE: usize = 15;
pub const MIN_WIN_LENGTH: usize = 3;

/// A square board of `side * side` cells, won by `win_length` identical markers in a row.
///
/// Cloning a board copies every cell, so a clone can be used for speculative
/// play without the original ever observing it. The [`Geometry`] is shared
/// between clones, it never changes.
#[derive(Clone, Debug)]
pub struct Board {
    geometry: Arc<Geometry>,
    /// There is exactly one entry for every cell, the cell numbered `n` is at index `n - 1`.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// `side` must be odd and between 3 and 15, `win_length` between 3 and `side`.
    pub fn new(side: usize, win_length: usize) -> Result<Self, ConfigError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(ConfigError::SideOutOfRange { side });
        }
        if side % 2 == 0 {
            return Err(ConfigError::EvenSide { side });
        }
        if !(MIN_WIN_LENGTH..=side).contains(&win_length) {
            return Err(ConfigError::WinLengthOutOfRange { win_length, side });
        }
        Ok(Self {
            geometry: Arc::new(Geometry::new(side, win_length)),
            cells: (1..=side * side).map(Cell::new).collect(),
        })
    }

    pub fn side(&self) -> usize {
        self.geometry.side()
    }

    pub fn win_length(&self) -> usize {
        self.geometry.win_length()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The marker on a cell. Numbers that are not on the board have no marker.
    pub fn get(&self, number: usize) -> Option<Marker> {
        self.cell(number).and_then(Cell::marker)
    }

    /// Marks a cell.
    pub fn set(&mut self, number: usize, marker: Marker) -> Result<(), IllegalMark> {
        let num_cells = self.cells.len();
        number
            .checked_sub(1)
            .and_then(|idx| self.cells.get_mut(idx))
            .ok_or(IllegalMark::OutOfBounds { number, num_cells })?
            .mark(marker)
    }

    /// Clears all cells.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    pub fn full(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// The legal moves, in ascending order.
    pub fn unmarked_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|c| c.is_empty())
            .map(Cell::number)
            .collect()
    }

    /// The geometric center, a good opening move.
    pub fn center_cell(&self) -> usize {
        (self.cells.len() + 1) / 2
    }

    pub fn line_formed(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// The marker of the first complete line, if any.
    pub fn winning_marker(&self) -> Option<Marker> {
        self.lines().find_map(|line| line.formed_by())
    }

    /// The game is over once the board is full or someone formed a line.
    pub fn is_terminal(&self) -> bool {
        self.full() || self.line_formed()
    }

    /// The empty cell `marker` has to take to stop another marker from completing a line.
    pub fn at_risk(&self, marker: Marker) -> Option<usize> {
        self.lines()
            .find(|line| line.is_at_risk(marker))
            .and_then(|line| line.empty_cells().next())
    }

    /// The empty cell that completes a line for `marker`.
    pub fn at_chance(&self, marker: Marker) -> Option<usize> {
        self.lines()
            .find(|line| line.is_win_chance(marker))
            .and_then(|line| line.empty_cells().next())
    }

    /// All candidate winning lines, in geometry order.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        self.geometry
            .groups()
            .iter()
            .map(|group| Line::new(&self.cells, group))
    }

    /// The lines that would be affected by a move on this cell.
    pub fn lines_involving(&self, number: usize) -> Vec<Line<'_>> {
        let groups = self.geometry.groups();
        self.geometry
            .groups_involving(number)
            .iter()
            .map(|&group_idx| Line::new(&self.cells, &groups[group_idx]))
            .collect()
    }

    fn cell(&self, number: usize) -> Option<&Cell> {
        number.checked_sub(1).and_then(|idx| self.cells.get(idx))
    }
}
