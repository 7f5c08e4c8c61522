use crate::{Cell, Marker};

/// A read-only view of the cells of one candidate winning line.
///
/// Lines are produced by [`Board::lines()`](crate::Board::lines) and
/// [`Board::lines_involving()`](crate::Board::lines_involving), and borrow the board.
#[derive(Clone, Copy, Debug)]
pub struct Line<'a> {
    /// All cells of the board, indexed by `number - 1`.
    cells: &'a [Cell],
    numbers: &'a [usize],
}

impl<'a> Line<'a> {
    pub(crate) fn new(cells: &'a [Cell], numbers: &'a [usize]) -> Self {
        debug_assert!(numbers.iter().all(|&n| n >= 1 && n <= cells.len()));
        Self { cells, numbers }
    }

    /// The cell numbers, in geometry order.
    pub fn numbers(&self) -> &'a [usize] {
        self.numbers
    }

    pub fn cells(&self) -> impl Iterator<Item = &'a Cell> + 'a {
        let cells = self.cells;
        self.numbers.iter().map(move |&n| &cells[n - 1])
    }

    pub fn markers(&self) -> impl Iterator<Item = Option<Marker>> + 'a {
        self.cells().map(Cell::marker)
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + 'a {
        self.cells().filter(|c| c.is_empty()).map(Cell::number)
    }

    /// Numbers of the cells holding `marker`.
    pub fn filled_by(&self, marker: Marker) -> impl Iterator<Item = usize> + 'a {
        self.cells()
            .filter(move |c| c.marker() == Some(marker))
            .map(Cell::number)
    }

    pub fn is_empty(&self) -> bool {
        self.cells().all(Cell::is_empty)
    }

    pub fn is_full(&self) -> bool {
        !self.cells().any(Cell::is_empty)
    }

    /// At least two different markers are on this line, so nobody can complete it anymore.
    pub fn is_blocked(&self) -> bool {
        let mut filled = self.markers().flatten();
        match filled.next() {
            Some(first) => filled.any(|m| m != first),
            None => false,
        }
    }

    /// Partially filled by a single other marker, i.e. `marker` could spoil it.
    pub fn is_blockable(&self, marker: Marker) -> bool {
        !self.is_empty()
            && !self.is_full()
            && !self.is_blocked()
            && self.markers().all(|m| m != Some(marker))
    }

    /// Not empty, and only `marker` is on it.
    pub fn is_buildable(&self, marker: Marker) -> bool {
        !self.is_empty() && self.markers().flatten().all(|m| m == marker)
    }

    /// One empty cell left, and all others hold the same marker that is not `marker`.
    pub fn is_at_risk(&self, marker: Marker) -> bool {
        match self.one_short_of() {
            Some(owner) => owner != marker,
            None => false,
        }
    }

    /// One empty cell left, and all others hold `marker`.
    pub fn is_win_chance(&self, marker: Marker) -> bool {
        self.one_short_of() == Some(marker)
    }

    /// The marker on every cell, if the line is complete.
    pub fn formed_by(&self) -> Option<Marker> {
        let mut markers = self.markers();
        let first = markers.next()??;
        markers.all(|m| m == Some(first)).then_some(first)
    }

    // The marker that fills all but exactly one cell of this line.
    fn one_short_of(&self) -> Option<Marker> {
        let mut empty = 0;
        let mut owner = None;
        for marker in self.markers() {
            match (marker, owner) {
                (None, _) => empty += 1,
                (Some(m), None) => owner = Some(m),
                (Some(m), Some(o)) if m != o => return None,
                (Some(_), Some(_)) => {}
            }
        }
        if empty == 1 {
            owner
        } else {
            None
        }
    }
}
