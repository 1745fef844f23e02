use anyhow::{anyhow, Result};
use serde_json::json;

use crate::adapter::{Adapter, AdapterConfig};
use crate::core::{calculate_score, DirectionSet};
use crate::types::{GameResult, TermPair};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build one game from a JSON array of term pairs on stdin
    Generate {
        game_type: String,
        category: Option<String>,
        overrides: ConfigOverrides,
    },
    /// Score one finished game from its `gameData` JSON on stdin
    Score { game_type: String },
    /// Run the line-delimited JSON adapter over stdin/stdout
    Serve { overrides: ConfigOverrides },
}

/// Command-line values that win over the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub seed: Option<u32>,
    pub directions: Option<DirectionSet>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: AdapterConfig) -> AdapterConfig {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(directions) = &self.directions {
            config.directions = directions.clone();
        }
        config
    }
}

pub const USAGE: &str = "usage:
  flashplay generate <gameType> [--seed N] [--directions 4|8] [--category C] < terms.json
  flashplay score <gameType> < gameData.json
  flashplay serve [--seed N] [--directions 4|8]";

/// Parse the arguments after the program name
pub fn parse_args(args: &[String]) -> Result<Command> {
    let Some(command) = args.first() else {
        return Err(anyhow!("missing command\n{}", USAGE));
    };

    match command.as_str() {
        "generate" => {
            let game_type = positional(args, "generate")?;
            let mut category = None;
            let overrides = parse_flags("generate", &args[2..], |flag, value| match flag {
                "--category" => {
                    category = Some(value.to_string());
                    Ok(true)
                }
                _ => Ok(false),
            })?;
            Ok(Command::Generate {
                game_type,
                category,
                overrides,
            })
        }
        "score" => {
            let game_type = positional(args, "score")?;
            if let Some(extra) = args.get(2) {
                return Err(anyhow!("score: unknown argument: {}", extra));
            }
            Ok(Command::Score { game_type })
        }
        "serve" => {
            let overrides = parse_flags("serve", &args[1..], |_, _| Ok(false))?;
            Ok(Command::Serve { overrides })
        }
        other => Err(anyhow!("unknown command: {}\n{}", other, USAGE)),
    }
}

fn positional(args: &[String], command: &str) -> Result<String> {
    match args.get(1) {
        Some(v) if !v.starts_with("--") => Ok(v.clone()),
        _ => Err(anyhow!("{}: missing <gameType>", command)),
    }
}

/// Walk `--flag value` pairs; `extra` claims command-specific flags
fn parse_flags<F>(command: &str, args: &[String], mut extra: F) -> Result<ConfigOverrides>
where
    F: FnMut(&str, &str) -> Result<bool>,
{
    let mut overrides = ConfigOverrides::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        let value = args
            .get(i)
            .ok_or_else(|| anyhow!("{}: missing value for {}", command, flag))?;
        match flag {
            "--seed" => {
                overrides.seed = Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| anyhow!("{}: invalid --seed value: {}", command, value))?,
                );
            }
            "--directions" => {
                overrides.directions = Some(DirectionSet::from_str(value).ok_or_else(|| {
                    anyhow!("{}: invalid --directions value: {} (expected 4 or 8)", command, value)
                })?);
            }
            other => {
                if !extra(other, value)? {
                    return Err(anyhow!("{}: unknown argument: {}", command, other));
                }
            }
        }
        i += 1;
    }
    Ok(overrides)
}

/// Generate a game from the term pairs in `input` and render it as JSON
pub fn run_generate(
    config: AdapterConfig,
    game_type: &str,
    category: Option<&str>,
    input: &str,
) -> Result<String> {
    let terms: Vec<TermPair> =
        serde_json::from_str(input).map_err(|e| anyhow!("generate: invalid terms JSON: {}", e))?;
    let mut adapter = Adapter::new(config);
    let game = adapter
        .generate(game_type, &terms, category)
        .map_err(|e| anyhow!("{}: {}", e.code(), e))?;
    Ok(serde_json::to_string(&game)?)
}

/// Score the `gameData` in `input`; prints `{"score":n}`
pub fn run_score(game_type: &str, input: &str) -> Result<String> {
    let result: GameResult =
        serde_json::from_str(input).map_err(|e| anyhow!("score: invalid gameData JSON: {}", e))?;
    let score = calculate_score(game_type, &result);
    Ok(json!({ "score": score }).to_string())
}
