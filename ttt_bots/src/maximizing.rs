use std::time::{Duration, Instant};

use tracing::{debug, info};
use ttt::{Board, Marker, MarkerRegistry};

use crate::{best_move, score_move, Bot, NoLegalMove};

pub const DEFAULT_DEPTH: usize = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// How many nodes are visited between two looks at the clock.
const DEADLINE_CHECK_MASK: u64 = 1023;

// Value of a completed line, above any single-ply score on any board shape.
const WIN_VALUE: i64 = 1 << 40;

/// Looks ahead with minimax over all players, in turn order.
///
/// Completed lines decide the value of a position, earlier ones counting more.
/// Other positions are valued with the single-ply score of the last move,
/// counted for this bot and against everybody else. If the search runs out of
/// time, the bot plays the single-ply best move instead.
pub struct MaximizingBot {
    marker: Marker,
    turn_order: MarkerRegistry,
    depth: usize,
    timeout: Duration,
}

impl MaximizingBot {
    /// The turn order is taken from the registry. A marker that is missing
    /// from it is appended.
    pub fn new(marker: Marker, registry: &MarkerRegistry) -> Self {
        let mut turn_order = registry.clone();
        if turn_order.register(marker).is_ok() {
            debug!(%marker, "Appended the marker to its own turn order");
        }
        Self {
            marker,
            turn_order,
            depth: DEFAULT_DEPTH,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Bot for MaximizingBot {
    fn marker(&self) -> Marker {
        self.marker
    }

    fn choose(&mut self, board: &Board) -> Result<usize, NoLegalMove> {
        let moves = board.unmarked_cells();
        if moves.is_empty() {
            return Err(NoLegalMove);
        }

        let start = Instant::now();
        let mut search = Search {
            root: self.marker,
            turn_order: &self.turn_order,
            deadline: start.checked_add(self.timeout),
            nodes: 0,
        };
        match search.best_root_move(board, &moves, self.depth) {
            Ok((number, value)) => {
                debug!(
                    marker = %self.marker,
                    number,
                    value,
                    nodes = search.nodes,
                    elapsed = ?start.elapsed(),
                    "Search finished"
                );
                Ok(number)
            }
            Err(SearchTimeout) => {
                info!(
                    marker = %self.marker,
                    nodes = search.nodes,
                    "Search timed out after {:?}, falling back to the single-ply move",
                    self.timeout
                );
                best_move(board, self.marker)
            }
        }
    }
}

#[derive(Debug)]
struct SearchTimeout;

struct Search<'a> {
    root: Marker,
    turn_order: &'a MarkerRegistry,
    /// `None` if the timeout is too large to be represented.
    deadline: Option<Instant>,
    nodes: u64,
}

impl Search<'_> {
    fn timed_out(&self) -> bool {
        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }

    /// The first move with the highest value.
    fn best_root_move(
        &mut self,
        board: &Board,
        moves: &[usize],
        depth: usize,
    ) -> Result<(usize, i64), SearchTimeout> {
        let mut best: Option<(usize, i64)> = None;
        for &number in moves {
            if self.timed_out() {
                return Err(SearchTimeout);
            }
            let value = self.minimax(board, number, self.root, depth)?;
            debug!(number, value, "Root move");
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((number, value));
            }
        }
        Ok(best.expect("there is at least one root move"))
    }

    /// The value of `mover` playing `number` on `board`, looking `depth` more moves ahead.
    fn minimax(
        &mut self,
        board: &Board,
        number: usize,
        mover: Marker,
        depth: usize,
    ) -> Result<i64, SearchTimeout> {
        self.nodes += 1;
        if self.nodes & DEADLINE_CHECK_MASK == 0 && self.timed_out() {
            return Err(SearchTimeout);
        }

        let score = score_move(board, number, mover);
        let value = if mover == self.root { score } else { -score };

        let mut next_board = board.clone();
        next_board
            .set(number, mover)
            .expect("move was taken from the unmarked cells");
        if next_board.line_formed() {
            let win = WIN_VALUE + depth as i64;
            return Ok(if mover == self.root { win } else { -win });
        }
        if depth == 0 || next_board.full() {
            return Ok(prefer_shallow(value, depth));
        }

        let next_mover = self
            .turn_order
            .next_after(mover)
            .expect("every mover is in the turn order");
        let maximize = next_mover == self.root;
        let mut best = if maximize { i64::MIN } else { i64::MAX };
        for next_number in next_board.unmarked_cells() {
            let child = self.minimax(&next_board, next_number, next_mover, depth - 1)?;
            best = if maximize { best.max(child) } else { best.min(child) };
        }
        Ok(best)
    }
}

/// Moves a heuristic leaf value away from zero by the remaining depth.
fn prefer_shallow(value: i64, depth: usize) -> i64 {
    let depth = depth as i64;
    match value.signum() {
        1 => value + depth,
        -1 => value - depth,
        _ => 0,
    }
}
