use tracing::{debug, trace};
use ttt::Board;
use ttt_bots::Bot;

use crate::error::IllegalMove;
use crate::player::Player;
use crate::recording::Recorder;

pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Draw,
    IllegalMoveByPlayer { player_idx: usize, err: IllegalMove },
}

/// Plays one game on `board`, starting with the player at `first_player_idx`
/// and continuing in seating order.
///
/// Returns an error only when the recording cannot be written, not when an
/// illegal move is played.
pub fn play_game(
    players: &mut [Player],
    mut board: Board,
    first_player_idx: usize,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    if let Some(rec) = recorder {
        rec.start_game(&board, players);
    }

    let mut player_idx = first_player_idx % players.len();
    let game_result = loop {
        let player = &mut players[player_idx];
        let marker = player.marker();
        let number = match player.bot.choose(&board) {
            Ok(number) => number,
            Err(err) => {
                break GameResult::IllegalMoveByPlayer {
                    player_idx,
                    err: IllegalMove::NoMoveChosen(err),
                }
            }
        };
        trace!(player = %player.name, %marker, number, "Move");
        if let Err(err) = board.set(number, marker) {
            break GameResult::IllegalMoveByPlayer {
                player_idx,
                err: IllegalMove::RejectedMark { number, err },
            };
        }
        if let Some(rec) = recorder {
            rec.store_move(player, number);
        }

        // Only the mover's marker can have completed a line
        if board.line_formed() {
            break GameResult::WonByPlayer { player_idx };
        }
        if board.full() {
            break GameResult::Draw;
        }
        player_idx = (player_idx + 1) % players.len();
    };
    debug!("Final board:\n{}", board);

    if let Some(rec) = recorder {
        rec.write_game_recording(&game_result, players)?;
    }
    Ok(game_result)
}

/// Results of a series of games between the same players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchScore {
    pub wins: Vec<usize>,
    pub illegal_moves: Vec<usize>,
    pub draws: usize,
}

impl MatchScore {
    pub fn new(num_players: usize) -> Self {
        Self {
            wins: vec![0; num_players],
            illegal_moves: vec![0; num_players],
            draws: 0,
        }
    }

    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::WonByPlayer { player_idx } => self.wins[*player_idx] += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::IllegalMoveByPlayer { player_idx, .. } => {
                self.illegal_moves[*player_idx] += 1
            }
        }
    }

    pub fn num_games(&self) -> usize {
        self.wins.iter().sum::<usize>() + self.illegal_moves.iter().sum::<usize>() + self.draws
    }
}
