//! Error module - failures surfaced by game generation

use thiserror::Error;

use crate::types::GameType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The request carried no term pairs at all
    #[error("no terms found")]
    NoTerms,

    /// Fewer term pairs than the mode requires
    #[error("at least {required} terms are required for the {game_type} game (got {actual})")]
    NotEnoughTerms {
        game_type: GameType,
        required: usize,
        actual: usize,
    },

    /// Generation was asked for a game tag it does not know
    #[error("unsupported game type: {0}")]
    UnsupportedGameType(String),
}

impl GameError {
    /// Stable machine-readable code for boundary layers
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NoTerms | GameError::NotEnoughTerms { .. } => "validation_error",
            GameError::UnsupportedGameType(_) => "unsupported_game_type",
        }
    }
}
