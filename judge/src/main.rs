use std::path::PathBuf;

use clap::Parser;
use judge::{play_game, seat_players, GameResult, MatchScore, Player, PlayerConfig, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ttt::Board;

#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players, in seating order
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// Number of cells per row and column, an odd number from 3 to 15
    #[arg(long, default_value_t = 3)]
    side: usize,

    /// How many markers in a row win the game
    #[arg(short, long, default_value_t = 3)]
    win_length: usize,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop the match as soon as one player makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Record each game as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn play_match(
    players: &mut [Player],
    board: &Board,
    num_games: usize,
    stop_on_illegal_move: bool,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchScore> {
    let mut match_score = MatchScore::new(players.len());

    for game_idx in 0..num_games {
        // The first move goes round the table
        let game_result = play_game(players, board.clone(), game_idx, recorder)?;
        match &game_result {
            GameResult::WonByPlayer { player_idx } => {
                debug!(winner = %players[*player_idx].name, game_idx);
            }
            GameResult::Draw => {
                debug!(game_idx, "Draw");
            }
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                info!(
                    player = %players[*player_idx].name,
                    game_idx, "Illegal move by player"
                );
                let mut err_dyn = err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    info!("{}", err_dyn);
                    err_dyn = src_err;
                }
                info!("{}", err_dyn);
            }
        }
        match_score.record(&game_result);
        if stop_on_illegal_move && matches!(game_result, GameResult::IllegalMoveByPlayer { .. }) {
            break;
        }
    }

    Ok(match_score)
}

fn print_match_results(players: &[Player], match_score: &MatchScore) {
    println!("End result after {} games:", match_score.num_games());
    for (idx, player) in players.iter().enumerate() {
        let paren = if match_score.illegal_moves[idx] > 0 {
            format!(" ({} illegal moves)", match_score.illegal_moves[idx])
        } else {
            String::new()
        };
        println!(
            "- {} wins by {} playing '{}' as {}{}",
            match_score.wins[idx],
            player.name,
            player.marker(),
            player.bot.name(),
            paren
        );
    }
    println!("- {} draws", match_score.draws);
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let board = Board::new(args.side, args.win_length)?;

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<Result<Vec<PlayerConfig>, anyhow::Error>>()?;
    if player_configs.len() < 2 {
        anyhow::bail!("At least two players are needed, got {}", player_configs.len());
    }

    let (mut players, registry) = seat_players(&player_configs, &mut rng)?;
    info!(
        side = board.side(),
        win_length = board.win_length(),
        players = registry.len(),
        "Starting match"
    );

    let match_score = play_match(
        &mut players,
        &board,
        args.num_games,
        args.stop_on_illegal_move,
        &mut recorder,
    )?;
    print_match_results(&players, &match_score);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
