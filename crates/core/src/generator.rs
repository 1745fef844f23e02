//! Generator module - builds game content from term/definition pairs
//!
//! One builder per mode plus the tag dispatch. Every builder checks the mode's
//! minimum term count first and draws all randomness from the caller's source.

use tracing::debug;

use crate::error::GameError;
use crate::grid::{Grid, PlacementConfig};
use crate::rng::{shuffle, shuffle_in_place, RandomSource};
use crate::types::{
    AssociationEntry, AssociationGame, Card, CardKind, GameContent, GameType, MemoryGame,
    QuizGame, QuizQuestion, TermPair, WordClue, WordSearchGame, QUIZ_DISTRACTORS,
};

fn require_terms(game_type: GameType, terms: &[TermPair]) -> Result<(), GameError> {
    let required = game_type.min_terms();
    if terms.len() < required {
        return Err(GameError::NotEnoughTerms {
            game_type,
            required,
            actual: terms.len(),
        });
    }
    Ok(())
}

/// Memory game: a term card and a definition card per pair, all shuffled together
pub fn generate_memory<R: RandomSource + ?Sized>(
    terms: &[TermPair],
    rng: &mut R,
) -> Result<MemoryGame, GameError> {
    require_terms(GameType::Memory, terms)?;

    let mut cards = Vec::with_capacity(terms.len() * 2);
    for (pair_id, pair) in terms.iter().enumerate() {
        cards.push(Card {
            id: format!("term-{}", pair_id),
            kind: CardKind::Term,
            content: pair.term.clone(),
            pair_id,
        });
        cards.push(Card {
            id: format!("definition-{}", pair_id),
            kind: CardKind::Definition,
            content: pair.definition.clone(),
            pair_id,
        });
    }
    shuffle_in_place(rng, &mut cards);

    debug!(cards = cards.len(), "generated memory game");
    Ok(MemoryGame {
        cards,
        total_pairs: terms.len(),
        instructions: GameType::Memory.instructions().to_string(),
    })
}

/// Association game: terms in input order, definitions shuffled, matched by id
pub fn generate_association<R: RandomSource + ?Sized>(
    terms: &[TermPair],
    rng: &mut R,
) -> Result<AssociationGame, GameError> {
    require_terms(GameType::Association, terms)?;

    let term_list: Vec<AssociationEntry> = terms
        .iter()
        .enumerate()
        .map(|(id, pair)| AssociationEntry {
            id,
            content: pair.term.clone(),
        })
        .collect();
    let mut definitions: Vec<AssociationEntry> = terms
        .iter()
        .enumerate()
        .map(|(id, pair)| AssociationEntry {
            id,
            content: pair.definition.clone(),
        })
        .collect();
    shuffle_in_place(rng, &mut definitions);

    debug!(terms = term_list.len(), "generated association game");
    Ok(AssociationGame {
        terms: term_list,
        definitions,
        instructions: GameType::Association.instructions().to_string(),
    })
}

/// Quiz game: one question per term, questions shuffled
///
/// Distractors are the definitions of the first three other terms in input order,
/// not a random sample. With exactly four terms every question offers the same
/// three wrong answers.
pub fn generate_quiz<R: RandomSource + ?Sized>(
    terms: &[TermPair],
    rng: &mut R,
) -> Result<QuizGame, GameError> {
    require_terms(GameType::Quiz, terms)?;

    let mut questions = Vec::with_capacity(terms.len());
    for (id, pair) in terms.iter().enumerate() {
        // Slot 0 holds the correct definition until the shuffle.
        let mut options: Vec<(bool, &str)> = vec![(true, pair.definition.as_str())];
        options.extend(
            terms
                .iter()
                .enumerate()
                .filter(|&(other, _)| other != id)
                .map(|(_, t)| (false, t.definition.as_str()))
                .take(QUIZ_DISTRACTORS),
        );
        shuffle_in_place(rng, &mut options);

        let correct_answer_index = options
            .iter()
            .position(|&(correct, _)| correct)
            .unwrap_or_default();
        questions.push(QuizQuestion {
            id,
            question: pair.term.clone(),
            answers: options.iter().map(|&(_, text)| text.to_string()).collect(),
            correct_answer_index,
            explanation: format!(
                "The correct definition of \"{}\" is: {}",
                pair.term, pair.definition
            ),
        });
    }
    shuffle_in_place(rng, &mut questions);

    debug!(questions = questions.len(), "generated quiz game");
    Ok(QuizGame {
        total_questions: questions.len(),
        questions,
        instructions: GameType::Quiz.instructions().to_string(),
    })
}

/// Turn a term into a placeable word: uppercase, whitespace removed
pub fn normalize_word(term: &str) -> String {
    term.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Word-search game: every term becomes a word placed on the grid
///
/// Words that find no placement are left out of the board and of the clues.
pub fn generate_word_search<R: RandomSource + ?Sized>(
    terms: &[TermPair],
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<WordSearchGame, GameError> {
    require_terms(GameType::WordSearch, terms)?;

    let words: Vec<String> = terms.iter().map(|t| normalize_word(&t.term)).collect();
    let mut grid = Grid::new(config.size);
    let placed = grid.place_all(&words, config, rng);
    let clues = placed
        .iter()
        .map(|p| WordClue {
            word: p.word.clone(),
            term: terms[p.index].term.clone(),
            definition: terms[p.index].definition.clone(),
        })
        .collect();
    let board = grid.into_board(&placed, rng);

    debug!(
        requested = words.len(),
        placed = board.placed_words.len(),
        "generated word-search game"
    );
    Ok(WordSearchGame {
        grid: board,
        clues,
        instructions: GameType::WordSearch.instructions().to_string(),
    })
}

/// Pick at most `max` random terms for a word-search session, normalized
pub fn select_terms<R: RandomSource + ?Sized>(
    terms: &[TermPair],
    max: usize,
    rng: &mut R,
) -> Vec<WordClue> {
    let mut picked = shuffle(rng, terms);
    picked.truncate(max);
    picked
        .into_iter()
        .map(|t| WordClue {
            word: normalize_word(&t.term),
            term: t.term,
            definition: t.definition,
        })
        .collect()
}

/// Build content for a known game type
pub fn generate<R: RandomSource + ?Sized>(
    game_type: GameType,
    terms: &[TermPair],
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<GameContent, GameError> {
    match game_type {
        GameType::Memory => generate_memory(terms, rng).map(GameContent::Memory),
        GameType::Association => generate_association(terms, rng).map(GameContent::Association),
        GameType::Quiz => generate_quiz(terms, rng).map(GameContent::Quiz),
        GameType::WordSearch => {
            generate_word_search(terms, config, rng).map(GameContent::WordSearch)
        }
    }
}

/// Build content for a game tag; unknown tags fail with `UnsupportedGameType`
pub fn generate_game<R: RandomSource + ?Sized>(
    tag: &str,
    terms: &[TermPair],
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<GameContent, GameError> {
    let game_type =
        GameType::from_str(tag).ok_or_else(|| GameError::UnsupportedGameType(tag.to_string()))?;
    generate(game_type, terms, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    fn pairs(n: usize) -> Vec<TermPair> {
        (0..n)
            .map(|i| TermPair::new(format!("term{}", i), format!("definition {}", i)))
            .collect()
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("cell wall"), "CELLWALL");
        assert_eq!(normalize_word(" a\tb c "), "ABC");
        assert_eq!(normalize_word("ação"), "AÇÃO");
    }

    #[test]
    fn test_minimums() {
        let mut rng = SimpleRng::new(1);
        assert!(generate_memory(&pairs(1), &mut rng).is_err());
        assert!(generate_memory(&pairs(2), &mut rng).is_ok());
        assert!(generate_association(&pairs(1), &mut rng).is_err());
        assert!(generate_quiz(&pairs(3), &mut rng).is_err());
        assert!(generate_quiz(&pairs(4), &mut rng).is_ok());
        let config = PlacementConfig::default();
        assert_eq!(
            generate_word_search(&pairs(4), &config, &mut rng),
            Err(GameError::NotEnoughTerms {
                game_type: GameType::WordSearch,
                required: 5,
                actual: 4,
            })
        );
    }

    #[test]
    fn test_quiz_distractors_are_positional() {
        let mut rng = SimpleRng::new(9);
        let terms = pairs(6);
        let quiz = generate_quiz(&terms, &mut rng).unwrap();

        for q in &quiz.questions {
            let mut expected: Vec<String> = terms
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != q.id)
                .take(3)
                .map(|(_, t)| t.definition.clone())
                .collect();
            expected.push(terms[q.id].definition.clone());
            expected.sort();

            let mut got = q.answers.clone();
            got.sort();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn test_select_terms_caps_count() {
        let mut rng = SimpleRng::new(4);
        let picked = select_terms(&pairs(25), 10, &mut rng);
        assert_eq!(picked.len(), 10);
        assert!(picked.iter().all(|c| c.word == normalize_word(&c.term)));

        let picked = select_terms(&pairs(3), 10, &mut rng);
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_dispatch_unknown_tag() {
        let mut rng = SimpleRng::new(1);
        let err = generate_game("bogus", &pairs(6), &PlacementConfig::default(), &mut rng)
            .unwrap_err();
        assert_eq!(err, GameError::UnsupportedGameType("bogus".into()));
    }

    #[test]
    fn test_dispatch_routes_by_tag() {
        let mut rng = SimpleRng::new(1);
        let config = PlacementConfig::default();
        for game in GameType::ALL {
            let content = generate_game(game.as_str(), &pairs(6), &config, &mut rng).unwrap();
            assert_eq!(content.game_type(), game);
            assert_eq!(content.instructions(), game.instructions());
        }
    }
}
