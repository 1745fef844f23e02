//! Scoring module - final score for a finished game
//!
//! Every mode adds three parts:
//! - base points per correct unit
//! - a time bonus that counts down one point per second and floors at zero
//! - a completion or accuracy bonus
//!
//! | Mode | Per unit | Time cap (s) | Bonus |
//! |------|----------|--------------|-------|
//! | memory | 100 | 300 | +200 when every pair is found |
//! | association | 150 | 240 | +300 when every term is matched |
//! | quiz | 200 | 180 | +400 at >= 80%, +200 at >= 60% |
//! | word-search | 250 | 600 | +500 at >= 90%, +300 at >= 70% |
//!
//! Dispatch by tag returns 0 for unknown modes instead of failing; generation
//! dispatch fails loudly for the same input. The asymmetry is intentional.

use tracing::debug;

use crate::types::{GameResult, GameType};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub time_bonus: u32,
    /// Completion bonus (memory, association) or accuracy tier bonus (quiz, word-search)
    pub accuracy_bonus: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    fn new(base: u32, time_bonus: u32, accuracy_bonus: u32) -> Self {
        Self {
            base,
            time_bonus,
            accuracy_bonus,
            total: base
                .saturating_add(time_bonus)
                .saturating_add(accuracy_bonus),
        }
    }
}

/// Seconds left under `cap`, zero once the cap has elapsed
pub fn time_bonus(cap: u32, seconds: u32) -> u32 {
    cap.saturating_sub(seconds)
}

/// Whether `correct / total` reaches `percent`
///
/// Compared in integers (`100 * correct >= percent * total`). A zero total counts
/// as 0% accuracy.
pub fn meets_accuracy(correct: u32, total: u32, percent: u32) -> bool {
    if total == 0 {
        return false;
    }
    correct as u64 * 100 >= percent as u64 * total as u64
}

pub fn memory_breakdown(total_pairs: u32, correct_pairs: u32, seconds: u32) -> ScoreBreakdown {
    let completion = if correct_pairs == total_pairs { 200 } else { 0 };
    ScoreBreakdown::new(
        correct_pairs.saturating_mul(100),
        time_bonus(300, seconds),
        completion,
    )
}

pub fn association_breakdown(
    total_terms: u32,
    correct_associations: u32,
    seconds: u32,
) -> ScoreBreakdown {
    let completion = if correct_associations == total_terms {
        300
    } else {
        0
    };
    ScoreBreakdown::new(
        correct_associations.saturating_mul(150),
        time_bonus(240, seconds),
        completion,
    )
}

pub fn quiz_breakdown(total_questions: u32, correct_answers: u32, seconds: u32) -> ScoreBreakdown {
    let accuracy = if meets_accuracy(correct_answers, total_questions, 80) {
        400
    } else if meets_accuracy(correct_answers, total_questions, 60) {
        200
    } else {
        0
    };
    ScoreBreakdown::new(
        correct_answers.saturating_mul(200),
        time_bonus(180, seconds),
        accuracy,
    )
}

pub fn word_search_breakdown(total_words: u32, words_found: u32, seconds: u32) -> ScoreBreakdown {
    let accuracy = if meets_accuracy(words_found, total_words, 90) {
        500
    } else if meets_accuracy(words_found, total_words, 70) {
        300
    } else {
        0
    };
    ScoreBreakdown::new(
        words_found.saturating_mul(250),
        time_bonus(600, seconds),
        accuracy,
    )
}

pub fn calculate_memory_score(total_pairs: u32, correct_pairs: u32, seconds: u32) -> u32 {
    memory_breakdown(total_pairs, correct_pairs, seconds).total
}

pub fn calculate_association_score(
    total_terms: u32,
    correct_associations: u32,
    seconds: u32,
) -> u32 {
    association_breakdown(total_terms, correct_associations, seconds).total
}

pub fn calculate_quiz_score(total_questions: u32, correct_answers: u32, seconds: u32) -> u32 {
    quiz_breakdown(total_questions, correct_answers, seconds).total
}

pub fn calculate_word_search_score(total_words: u32, words_found: u32, seconds: u32) -> u32 {
    word_search_breakdown(total_words, words_found, seconds).total
}

/// Score breakdown for a known game type
pub fn breakdown(game_type: GameType, result: &GameResult) -> ScoreBreakdown {
    let GameResult {
        total_units,
        correct_units,
        elapsed_seconds,
    } = *result;
    match game_type {
        GameType::Memory => memory_breakdown(total_units, correct_units, elapsed_seconds),
        GameType::Association => association_breakdown(total_units, correct_units, elapsed_seconds),
        GameType::Quiz => quiz_breakdown(total_units, correct_units, elapsed_seconds),
        GameType::WordSearch => word_search_breakdown(total_units, correct_units, elapsed_seconds),
    }
}

/// Score for a game tag; unknown tags score 0
pub fn calculate_score(tag: &str, result: &GameResult) -> u32 {
    match GameType::from_str(tag) {
        Some(game_type) => breakdown(game_type, result).total,
        None => {
            debug!(tag, "unknown game type, scoring 0");
            0
        }
    }
}
