use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use ttt::{Marker, MarkerRegistry};
use ttt_bots::{Bot, Strategy, StrategyConfig};

const ICAO_ALPHABET: [&str; 26] = [
    "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

/// A player as described in a JSON config file. Every field is optional.
///
/// ```json
/// { "name": "Deep Thought", "marker": "X", "strategy": { "type": "analyzing" } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub marker: Option<Marker>,
    #[serde(default)]
    pub strategy: StrategyConfig,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open player config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid player config '{}'", path.display()))
    }
}

pub struct Player {
    pub name: String,
    pub strategy: StrategyConfig,
    pub bot: Strategy,
}

impl Player {
    pub fn marker(&self) -> Marker {
        self.bot.marker()
    }
}

/// A random name in the style of "EchoKilo(AI)".
pub fn random_name(rng: &mut StdRng) -> String {
    let mut name = String::new();
    for _ in 0..2 {
        name.push_str(ICAO_ALPHABET[rng.gen_range(0..ICAO_ALPHABET.len())]);
    }
    name.push_str("(AI)");
    name
}

/// Creates the players of a session, in the order of the configs.
///
/// Missing names and markers are picked randomly. The returned registry holds
/// the markers in seating order.
pub fn seat_players(
    configs: &[PlayerConfig],
    rng: &mut StdRng,
) -> anyhow::Result<(Vec<Player>, MarkerRegistry)> {
    // Claim the configured markers first so that random picks avoid all of them
    let mut taken = MarkerRegistry::new();
    for marker in configs.iter().filter_map(|config| config.marker) {
        taken
            .register(marker)
            .with_context(|| format!("Marker '{}' is configured for two players", marker))?;
    }

    let mut registry = MarkerRegistry::new();
    for config in configs {
        let marker = match config.marker {
            Some(marker) => marker,
            None => match taken.pick_unused(rng) {
                Some(marker) => marker,
                None => anyhow::bail!("No unused marker left for another player"),
            },
        };
        registry.register(marker)?;
    }

    let players = configs
        .iter()
        .zip(registry.markers())
        .map(|(config, &marker)| {
            let name = config.name.clone().unwrap_or_else(|| random_name(rng));
            let bot_rng = StdRng::seed_from_u64(rng.gen());
            Player {
                name,
                strategy: config.strategy,
                bot: config.strategy.build(marker, &registry, bot_rng),
            }
        })
        .collect();
    Ok((players, registry))
}
