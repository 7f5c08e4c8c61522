use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use ttt::{Board, Marker};
use ttt_bots::StrategyConfig;

use crate::game::GameResult;
use crate::player::Player;

/// Writes every game into its own JSON file, `game_000001.json` and so on.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    current: Option<GameRecording>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            current: None,
        })
    }

    pub fn start_game(&mut self, board: &Board, players: &[Player]) {
        self.current = Some(GameRecording {
            side: board.side(),
            win_length: board.win_length(),
            players: players
                .iter()
                .map(|player| PlayerRecord {
                    name: player.name.clone(),
                    marker: player.marker(),
                    strategy: player.strategy,
                })
                .collect(),
            moves: Vec::new(),
            outcome: None,
        });
    }

    pub fn store_move(&mut self, player: &Player, number: usize) {
        if let Some(recording) = &mut self.current {
            recording.moves.push(MoveRecord {
                player: player.name.clone(),
                marker: player.marker(),
                number,
            });
        }
    }

    pub fn write_game_recording(
        &mut self,
        result: &GameResult,
        players: &[Player],
    ) -> anyhow::Result<()> {
        let Some(mut recording) = self.current.take() else {
            anyhow::bail!("No game was started before writing a recording");
        };
        recording.outcome = Some(Outcome::new(result, players));
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    pub side: usize,
    pub win_length: usize,
    pub players: Vec<PlayerRecord>,
    pub moves: Vec<MoveRecord>,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub marker: Marker,
    pub strategy: StrategyConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: String,
    pub marker: Marker,
    pub number: usize,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    Won { player: String },
    Draw,
    IllegalMove { player: String, error: String },
}

impl Outcome {
    fn new(result: &GameResult, players: &[Player]) -> Self {
        match result {
            GameResult::WonByPlayer { player_idx } => Outcome::Won {
                player: players[*player_idx].name.clone(),
            },
            GameResult::Draw => Outcome::Draw,
            GameResult::IllegalMoveByPlayer { player_idx, err } => Outcome::IllegalMove {
                player: players[*player_idx].name.clone(),
                error: err.to_string(),
            },
        }
    }
}
