use std::time::Duration;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use ttt::{Board, Marker, MarkerRegistry};

use crate::{
    AnalyzingBot, Bot, MaximizingBot, NoLegalMove, RandomBot, ReactiveBot, DEFAULT_DEPTH,
    DEFAULT_TIMEOUT,
};

/// All bots, as one type.
pub enum Strategy {
    Random(RandomBot),
    Reactive(ReactiveBot),
    Analyzing(AnalyzingBot),
    Maximizing(MaximizingBot),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random(_) => "random",
            Strategy::Reactive(_) => "reactive",
            Strategy::Analyzing(_) => "analyzing",
            Strategy::Maximizing(_) => "maximizing",
        }
    }
}

impl Bot for Strategy {
    fn marker(&self) -> Marker {
        match self {
            Strategy::Random(bot) => bot.marker(),
            Strategy::Reactive(bot) => bot.marker(),
            Strategy::Analyzing(bot) => bot.marker(),
            Strategy::Maximizing(bot) => bot.marker(),
        }
    }

    fn choose(&mut self, board: &Board) -> Result<usize, NoLegalMove> {
        match self {
            Strategy::Random(bot) => bot.choose(board),
            Strategy::Reactive(bot) => bot.choose(board),
            Strategy::Analyzing(bot) => bot.choose(board),
            Strategy::Maximizing(bot) => bot.choose(board),
        }
    }
}

/// How a [`Strategy`] is described in a player config file.
///
/// ```json
/// { "type": "maximizing", "depth": 2, "timeout_ms": 1000 }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    Random,
    Reactive,
    Analyzing,
    Maximizing {
        #[serde(default = "default_depth")]
        depth: usize,
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
}

fn default_depth() -> usize {
    DEFAULT_DEPTH
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::Maximizing {
            depth: default_depth(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl StrategyConfig {
    /// Creates the bot. `registry` provides the turn order for bots that look ahead.
    pub fn build(&self, marker: Marker, registry: &MarkerRegistry, rng: StdRng) -> Strategy {
        match *self {
            StrategyConfig::Random => Strategy::Random(RandomBot::new(marker, rng)),
            StrategyConfig::Reactive => Strategy::Reactive(ReactiveBot::new(marker, rng)),
            StrategyConfig::Analyzing => Strategy::Analyzing(AnalyzingBot::new(marker)),
            StrategyConfig::Maximizing { depth, timeout_ms } => Strategy::Maximizing(
                MaximizingBot::new(marker, registry)
                    .with_depth(depth)
                    .with_timeout(Duration::from_millis(timeout_ms)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use ttt::marker;

    use super::*;

    #[test]
    fn parse_configs() {
        let parse = |json: &str| serde_json::from_str::<StrategyConfig>(json).unwrap();
        assert_eq!(parse(r#"{"type": "random"}"#), StrategyConfig::Random);
        assert_eq!(parse(r#"{"type": "reactive"}"#), StrategyConfig::Reactive);
        assert_eq!(parse(r#"{"type": "analyzing"}"#), StrategyConfig::Analyzing);
        assert_eq!(
            parse(r#"{"type": "maximizing", "depth": 2, "timeout_ms": 50}"#),
            StrategyConfig::Maximizing { depth: 2, timeout_ms: 50 }
        );
        assert_eq!(parse(r#"{"type": "maximizing"}"#), StrategyConfig::default());
        assert!(serde_json::from_str::<StrategyConfig>(r#"{"type": "psychic"}"#).is_err());
    }

    #[test]
    fn build_every_strategy() {
        let mut registry = MarkerRegistry::new();
        registry.register_glyph("X").unwrap();
        registry.register_glyph("O").unwrap();
        let board = Board::new(3, 3).unwrap();

        for (config, name) in [
            (StrategyConfig::Random, "random"),
            (StrategyConfig::Reactive, "reactive"),
            (StrategyConfig::Analyzing, "analyzing"),
            (StrategyConfig::Maximizing { depth: 1, timeout_ms: 1000 }, "maximizing"),
        ] {
            let mut bot = config.build(marker!("O"), &registry, StdRng::seed_from_u64(0));
            assert_eq!(bot.name(), name);
            assert_eq!(bot.marker(), marker!("O"));
            // Every bot opens in the center
            assert_eq!(bot.choose(&board), Ok(5), "{}", name);
        }
    }

    #[test]
    fn maximizing_settings_are_applied() {
        let config = StrategyConfig::Maximizing { depth: 4, timeout_ms: 250 };
        match config.build(marker!("X"), &MarkerRegistry::new(), StdRng::seed_from_u64(0)) {
            Strategy::Maximizing(bot) => {
                assert_eq!(bot.depth(), 4);
                assert_eq!(bot.timeout(), Duration::from_millis(250));
            }
            _ => panic!("Expected a maximizing bot"),
        }
    }
}
