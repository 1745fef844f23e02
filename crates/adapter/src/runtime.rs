//! Adapter runtime - answers protocol requests with the core generators and scorers
//!
//! The adapter owns the random source for its lifetime. With a configured seed that
//! source is a `SimpleRng`, so a given sequence of requests reproduces the same
//! games; otherwise it draws from the thread RNG.

use tracing::{debug, warn};

use crate::core::{
    calculate_score, generate_game, GameError, PlacementConfig, RandomSource, SimpleRng,
    ThreadRandom,
};
use crate::protocol::{
    create_error, create_game, create_score, parse_message, ErrorCode, GenerateRequest,
    GeneratedGame, OutboundMessage, ParsedMessage, ScoreRequest, DEFAULT_CATEGORY,
};
use crate::server::AdapterConfig;
use crate::types::TermPair;

/// Request handler shared by the stream loop and the one-shot CLI commands
pub struct Adapter {
    config: AdapterConfig,
    placement: PlacementConfig,
    rng: Box<dyn RandomSource + Send>,
}

impl Adapter {
    pub fn new(config: AdapterConfig) -> Self {
        let rng: Box<dyn RandomSource + Send> = match config.seed {
            Some(seed) => Box::new(SimpleRng::new(seed)),
            None => Box::new(ThreadRandom::new()),
        };
        let placement = PlacementConfig::with_directions(config.directions.clone());
        Self {
            config,
            placement,
            rng,
        }
    }

    /// Start the adapter from environment variables
    pub fn from_env() -> Self {
        Self::new(AdapterConfig::from_env())
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Build a game and attach the boundary metadata
    ///
    /// An empty term list is rejected before dispatch, whatever the game tag.
    pub fn generate(
        &mut self,
        game_type: &str,
        terms: &[TermPair],
        category: Option<&str>,
    ) -> Result<GeneratedGame, GameError> {
        if terms.is_empty() {
            return Err(GameError::NoTerms);
        }
        let content = generate_game(game_type, terms, &self.placement, &mut self.rng)?;
        Ok(GeneratedGame {
            content,
            terms_used: terms.len(),
            category: category.unwrap_or(DEFAULT_CATEGORY).to_string(),
        })
    }

    pub fn handle_generate(&mut self, req: GenerateRequest) -> OutboundMessage {
        match self.generate(&req.game_type, &req.terms, req.category.as_deref()) {
            Ok(game) => {
                debug!(seq = req.seq, game_type = %req.game_type, terms = game.terms_used, "game generated");
                OutboundMessage::Game(create_game(req.seq, game))
            }
            Err(e) => {
                warn!(seq = req.seq, game_type = %req.game_type, error = %e, "generate rejected");
                OutboundMessage::Error(create_error(
                    req.seq,
                    ErrorCode::from_code(e.code()),
                    &e.to_string(),
                ))
            }
        }
    }

    pub fn handle_score(&self, req: ScoreRequest) -> OutboundMessage {
        let score = calculate_score(&req.game_type, &req.game_data);
        debug!(seq = req.seq, game_type = %req.game_type, score, "game scored");
        OutboundMessage::Score(create_score(req.seq, score))
    }

    /// Answer one request line; blank lines produce no response
    pub fn handle_line(&mut self, line: &str) -> Option<OutboundMessage> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if line.len() > self.config.max_line_bytes {
            return Some(OutboundMessage::Error(create_error(
                extract_seq_best_effort(line).unwrap_or(0),
                ErrorCode::InvalidRequest,
                "request line too long",
            )));
        }

        let reply = match parse_message(line) {
            Ok(ParsedMessage::Generate(req)) => self.handle_generate(req),
            Ok(ParsedMessage::Score(req)) => self.handle_score(req),
            Ok(ParsedMessage::Unknown(msg)) => OutboundMessage::Error(create_error(
                msg.seq,
                ErrorCode::InvalidRequest,
                &format!("unknown message type: {}", msg.msg_type),
            )),
            Err(e) => OutboundMessage::Error(create_error(
                extract_seq_best_effort(line).unwrap_or(0),
                ErrorCode::InvalidRequest,
                &format!("invalid request: {}", e),
            )),
        };
        Some(reply)
    }
}

/// Pull `"seq": <digits>` out of a line that failed to parse
pub(crate) fn extract_seq_best_effort(s: &str) -> Option<u64> {
    let start = s.find("\"seq\"")?;
    let after_key = &s[start + 5..];
    let colon = after_key.find(':')?;
    let rest = after_key[colon + 1..].trim_start();
    let end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    rest[..end].parse::<u64>().ok()
}
