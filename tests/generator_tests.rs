//! Generator tests - content shape and term-count validation per mode

use std::collections::HashSet;

use flashplay::core::{
    generate_association, generate_game, generate_memory, generate_quiz, generate_word_search,
    normalize_word, select_terms, GameError, PlacementConfig, SimpleRng,
};
use flashplay::types::{CardKind, GameContent, GameType, TermPair, WORD_SEARCH_MAX_TERMS};

fn terms(n: usize) -> Vec<TermPair> {
    (0..n)
        .map(|i| TermPair::new(format!("word{}", i), format!("definition {}", i)))
        .collect()
}

#[test]
fn test_memory_cards_pair_up() {
    let game = generate_memory(&terms(5), &mut SimpleRng::new(1)).unwrap();
    assert_eq!(game.total_pairs, 5);
    assert_eq!(game.cards.len(), 10);

    for pair_id in 0..5 {
        let kinds: Vec<CardKind> = game
            .cards
            .iter()
            .filter(|c| c.pair_id == pair_id)
            .map(|c| c.kind)
            .collect();
        assert_eq!(kinds.len(), 2);
        assert!(kinds.contains(&CardKind::Term));
        assert!(kinds.contains(&CardKind::Definition));
    }
    let ids: HashSet<&str> = game.cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), 10);
}

#[test]
fn test_association_keeps_term_order() {
    let input = terms(6);
    let game = generate_association(&input, &mut SimpleRng::new(3)).unwrap();
    let contents: Vec<&str> = game.terms.iter().map(|t| t.content.as_str()).collect();
    let expected: Vec<&str> = input.iter().map(|t| t.term.as_str()).collect();
    assert_eq!(contents, expected);

    let mut ids: Vec<usize> = game.definitions.iter().map(|d| d.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..6).collect::<Vec<_>>());
    for def in &game.definitions {
        assert_eq!(def.content, input[def.id].definition);
    }
}

#[test]
fn test_quiz_correct_index_points_at_definition() {
    let input = terms(8);
    let game = generate_quiz(&input, &mut SimpleRng::new(11)).unwrap();
    assert_eq!(game.total_questions, 8);
    for q in &game.questions {
        assert_eq!(q.answers.len(), 4);
        assert_eq!(q.correct_answer(), Some(input[q.id].definition.as_str()));
        assert_eq!(q.question, input[q.id].term);
    }
}

#[test]
fn test_quiz_with_four_terms_reuses_the_others() {
    let input = terms(4);
    let game = generate_quiz(&input, &mut SimpleRng::new(2)).unwrap();
    for q in &game.questions {
        let mut answers = q.answers.clone();
        answers.sort();
        let mut all: Vec<String> = input.iter().map(|t| t.definition.clone()).collect();
        all.sort();
        assert_eq!(answers, all);
    }
}

#[test]
fn test_minimum_term_counts() {
    let mut rng = SimpleRng::new(1);
    let config = PlacementConfig::default();
    for game_type in GameType::ALL {
        let min = game_type.min_terms();
        let err = generate_game(game_type.as_str(), &terms(min - 1), &config, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::NotEnoughTerms {
                game_type,
                required: min,
                actual: min - 1,
            }
        );
        assert!(generate_game(game_type.as_str(), &terms(min), &config, &mut rng).is_ok());
    }
}

#[test]
fn test_unknown_tag_fails() {
    let err = generate_game("crossword", &terms(5), &PlacementConfig::default(), &mut SimpleRng::new(1))
        .unwrap_err();
    assert_eq!(err, GameError::UnsupportedGameType("crossword".to_string()));
}

#[test]
fn test_word_search_clues_match_placed_words() {
    let input = vec![
        TermPair::new("red blood cell", "carries oxygen"),
        TermPair::new("enzyme", "speeds up reactions"),
        TermPair::new("nucleus", "holds the DNA"),
        TermPair::new("ribosome", "builds proteins"),
        TermPair::new("membrane", "encloses the cell"),
    ];
    let game = generate_word_search(&input, &PlacementConfig::default(), &mut SimpleRng::new(8))
        .unwrap();
    assert_eq!(game.clues.len(), game.grid.placed_words.len());
    for (clue, word) in game.clues.iter().zip(&game.grid.placed_words) {
        assert_eq!(&clue.word, word);
        assert_eq!(normalize_word(&clue.term), *word);
    }
    assert!(game.grid.placed_words.iter().all(|w| !w.contains(' ')));
}

#[test]
fn test_normalize_word() {
    assert_eq!(normalize_word("red blood cell"), "REDBLOODCELL");
    assert_eq!(normalize_word("  mitosis\t"), "MITOSIS");
}

#[test]
fn test_select_terms_caps_at_max() {
    let picked = select_terms(&terms(25), WORD_SEARCH_MAX_TERMS, &mut SimpleRng::new(4));
    assert_eq!(picked.len(), WORD_SEARCH_MAX_TERMS);
    let unique: HashSet<&str> = picked.iter().map(|c| c.term.as_str()).collect();
    assert_eq!(unique.len(), WORD_SEARCH_MAX_TERMS);

    assert_eq!(select_terms(&terms(3), WORD_SEARCH_MAX_TERMS, &mut SimpleRng::new(4)).len(), 3);
}

#[test]
fn test_content_serializes_with_game_type_tag() {
    let game = generate_game("association", &terms(2), &PlacementConfig::default(), &mut SimpleRng::new(1))
        .unwrap();
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["gameType"], "association");
    assert!(json["instructions"].is_string());

    let back: GameContent = serde_json::from_value(json).unwrap();
    assert_eq!(back, game);
}
