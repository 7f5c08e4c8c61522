use std::collections::BTreeSet;

/// All candidate winning lines for one board shape.
///
/// Cells are numbered 1 to `side * side` in row-major order. A group is a run
/// of `win_length` consecutive cell numbers along a row, a column, or one of
/// the two diagonal directions. The groups only depend on the shape, so boards
/// of the same shape can share one `Geometry`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Geometry {
    side: usize,
    win_length: usize,
    /// Horizontals, then verticals, then downward diagonals, then upward diagonals.
    groups: Vec<Vec<usize>>,
    /// For every cell (index `number - 1`), the indices into `groups` that contain it.
    by_cell: Vec<Vec<usize>>,
}

impl Geometry {
    /// Enumerates the groups for a `side` x `side` board.
    ///
    /// Only called with shapes accepted by [`Board::new()`](crate::Board::new),
    /// zero sizes would panic.
    pub(crate) fn new(side: usize, win_length: usize) -> Self {
        let mut groups = Vec::new();
        groups.extend(horizontals(side, win_length));
        groups.extend(verticals(side, win_length));
        groups.extend(downward_diagonals(side, win_length));
        groups.extend(upward_diagonals(side, win_length));

        let mut by_cell = vec![Vec::new(); side * side];
        for (group_idx, group) in groups.iter().enumerate() {
            for &number in group {
                by_cell[number - 1].push(group_idx);
            }
        }

        Self {
            side,
            win_length,
            groups,
            by_cell,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Every group, in enumeration order.
    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// Indices into [`Self::groups()`] of the groups that contain the cell.
    ///
    /// Empty for numbers that are not on the board.
    pub fn groups_involving(&self, number: usize) -> &[usize] {
        number
            .checked_sub(1)
            .and_then(|idx| self.by_cell.get(idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// {1, N+1, 2N+1, ...}
fn row_starts(side: usize) -> BTreeSet<usize> {
    (0..side).map(|row| row * side + 1).collect()
}

/// {N, 2N, ..., N²}
fn row_ends(side: usize) -> BTreeSet<usize> {
    (1..=side).map(|row| row * side).collect()
}

/// The first row.
fn column_starts(side: usize) -> BTreeSet<usize> {
    (1..=side).collect()
}

/// The last row.
fn column_ends(side: usize) -> BTreeSet<usize> {
    (side * side - side + 1..=side * side).collect()
}

fn windows(path: &[usize], win_length: usize) -> impl Iterator<Item = Vec<usize>> + '_ {
    path.windows(win_length).map(<[usize]>::to_vec)
}

fn horizontals(side: usize, win_length: usize) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();
    for start in row_starts(side) {
        let row: Vec<usize> = (start..start + side).collect();
        groups.extend(windows(&row, win_length));
    }
    groups
}

fn verticals(side: usize, win_length: usize) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();
    for start in column_starts(side) {
        let column: Vec<usize> = (0..side).map(|row| start + row * side).collect();
        groups.extend(windows(&column, win_length));
    }
    groups
}

// Walking stops on boundary membership rather than on a numeric range, since
// e.g. on a 3x3 board 3 + 4 = 7 is in range but wraps around to the first column.
fn downward_diagonals(side: usize, win_length: usize) -> Vec<Vec<usize>> {
    let step = side + 1;
    let last = side * side;
    let stops: BTreeSet<usize> = column_ends(side).union(&row_ends(side)).copied().collect();
    let starts: BTreeSet<usize> = column_starts(side).union(&row_starts(side)).copied().collect();

    let mut groups = Vec::new();
    for start in starts {
        let mut path = vec![start];
        let mut current = start;
        while !stops.contains(&current) && current + step <= last {
            current += step;
            path.push(current);
        }
        groups.extend(windows(&path, win_length));
    }
    groups
}

fn upward_diagonals(side: usize, win_length: usize) -> Vec<Vec<usize>> {
    let step = side - 1;
    let stops: BTreeSet<usize> = column_starts(side).union(&row_ends(side)).copied().collect();
    let starts: BTreeSet<usize> = row_starts(side).union(&column_ends(side)).copied().collect();

    let mut groups = Vec::new();
    for start in starts {
        let mut path = vec![start];
        let mut current = start;
        while !stops.contains(&current) && current > step {
            current -= step;
            path.push(current);
        }
        groups.extend(windows(&path, win_length));
    }
    groups
}
