//! Protocol module - JSON message types for the game-content adapter
//!
//! Line-delimited JSON: one request per line, one response per line.
//! Every message has `type` and `seq`; responses also carry `ts` (ms since epoch).

use serde::{Deserialize, Serialize};

use crate::types::{GameContent, GameResult, TermPair};

/// Category echoed when a generate request names none
pub const DEFAULT_CATEGORY: &str = "all";

// ============== Client -> Adapter Messages ==============

/// Request to build a game from term pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub seq: u64,
    pub game_type: String,
    pub terms: Vec<TermPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Request to score a finished game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub seq: u64,
    pub game_type: String,
    pub game_data: GameResult,
}

#[derive(Debug, Clone)]
pub enum ParsedMessage {
    Generate(GenerateRequest),
    Score(ScoreRequest),
    Unknown(UnknownMessage),
}

#[derive(Debug, Clone)]
pub struct UnknownMessage {
    pub seq: u64,
    pub msg_type: String,
}

/// Parse a JSON request line
///
/// An unrecognized `type` is not a parse error; it comes back as `Unknown` so the
/// caller can answer with a protocol error that echoes `seq`.
pub fn parse_message(json: &str) -> Result<ParsedMessage, serde_json::Error> {
    #[derive(Debug, Deserialize)]
    #[serde(tag = "type")]
    enum InboundMessage {
        #[serde(rename = "generate")]
        Generate(GenerateRequest),
        #[serde(rename = "score")]
        Score(ScoreRequest),
    }

    match serde_json::from_str::<InboundMessage>(json) {
        Ok(InboundMessage::Generate(m)) => Ok(ParsedMessage::Generate(m)),
        Ok(InboundMessage::Score(m)) => Ok(ParsedMessage::Score(m)),
        Err(e) => {
            #[derive(Debug, Deserialize)]
            struct Header {
                #[serde(rename = "type")]
                msg_type: Option<String>,
                seq: Option<u64>,
            }
            let header = serde_json::from_str::<Header>(json)?;
            let msg_type = header.msg_type.unwrap_or_else(|| "unknown".to_string());
            if msg_type != "generate" && msg_type != "score" {
                return Ok(ParsedMessage::Unknown(UnknownMessage {
                    seq: header.seq.unwrap_or(0),
                    msg_type,
                }));
            }
            Err(e)
        }
    }
}

// ============== Adapter -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMessageType {
    #[serde(rename = "game")]
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreMessageType {
    #[serde(rename = "score")]
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Too few terms for the requested mode
    #[serde(rename = "validation_error")]
    ValidationError,
    #[serde(rename = "unsupported_game_type")]
    UnsupportedGameType,
    /// Malformed JSON, unknown message type, oversized line
    #[serde(rename = "invalid_request")]
    InvalidRequest,
}

impl ErrorCode {
    /// Map a core error code string onto the wire enum
    pub fn from_code(code: &str) -> Self {
        match code {
            "validation_error" => ErrorCode::ValidationError,
            "unsupported_game_type" => ErrorCode::UnsupportedGameType,
            _ => ErrorCode::InvalidRequest,
        }
    }
}

/// Game content plus the metadata the boundary adds around it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedGame {
    #[serde(flatten)]
    pub content: GameContent,
    pub terms_used: usize,
    pub category: String,
}

/// Generated game response
#[derive(Debug, Clone, Serialize)]
pub struct GameMessage {
    #[serde(rename = "type")]
    pub msg_type: GameMessageType,
    pub seq: u64,
    pub ts: u64,
    #[serde(flatten)]
    pub game: GeneratedGame,
}

/// Score response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMessage {
    #[serde(rename = "type")]
    pub msg_type: ScoreMessageType,
    pub seq: u64,
    pub ts: u64,
    pub score: u32,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub ts: u64,
    pub code: ErrorCode,
    pub message: String,
}

/// Any response line
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OutboundMessage {
    Game(GameMessage),
    Score(ScoreMessage),
    Error(ErrorMessage),
}

impl OutboundMessage {
    pub fn seq(&self) -> u64 {
        match self {
            OutboundMessage::Game(m) => m.seq,
            OutboundMessage::Score(m) => m.seq,
            OutboundMessage::Error(m) => m.seq,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, OutboundMessage::Error(_))
    }
}

// ============== Utility Functions ==============

/// Create a game response
pub fn create_game(seq: u64, game: GeneratedGame) -> GameMessage {
    GameMessage {
        msg_type: GameMessageType::Game,
        seq,
        ts: current_timestamp_ms(),
        game,
    }
}

/// Create a score response
pub fn create_score(seq: u64, score: u32) -> ScoreMessage {
    ScoreMessage {
        msg_type: ScoreMessageType::Score,
        seq,
        ts: current_timestamp_ms(),
        score,
    }
}

/// Create an error message
pub fn create_error(seq: u64, code: ErrorCode, message: &str) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        ts: current_timestamp_ms(),
        code,
        message: message.to_string(),
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
