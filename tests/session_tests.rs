//! Word-search session tests - selection, hints and completion bonus

use flashplay::core::{Selection, SimpleRng, WordSearchSession};
use flashplay::types::{GameResult, Position, TermPair, WordSearchGrid, WORD_SEARCH_MAX_TERMS};

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// 5x5 board with CAT across the top row and DOG down the last column
fn board() -> WordSearchGrid {
    let rows = ["CATXX", "QWERD", "ZZZZO", "ZZZZG", "ZZZZZ"];
    WordSearchGrid {
        size: 5,
        cells: rows.iter().map(|r| r.chars().collect()).collect(),
        placed_words: vec!["CAT".to_string(), "DOG".to_string()],
        placement_positions: vec![
            vec![p(0, 0), p(0, 1), p(0, 2)],
            vec![p(1, 4), p(2, 4), p(3, 4)],
        ],
    }
}

#[test]
fn test_forward_selection_finds_word() {
    let mut session = WordSearchSession::new(board());
    assert_eq!(
        session.select(p(0, 0), p(0, 2)),
        Selection::Found {
            index: 0,
            word: "CAT".to_string(),
            points: 30,
            complete: false,
        }
    );
    assert_eq!(session.score(), 30);
    assert!(session.is_found(0));
    assert_eq!(session.found_count(), 1);
}

#[test]
fn test_reverse_selection_finds_word() {
    let mut session = WordSearchSession::new(board());
    match session.select(p(3, 4), p(1, 4)) {
        Selection::Found { word, .. } => assert_eq!(word, "DOG"),
        other => panic!("expected DOG, got {:?}", other),
    }
}

#[test]
fn test_found_word_cannot_be_scored_twice() {
    let mut session = WordSearchSession::new(board());
    session.select(p(0, 0), p(0, 2));
    assert_eq!(session.select(p(0, 2), p(0, 0)), Selection::Miss);
    assert_eq!(session.score(), 30);
}

#[test]
fn test_misses() {
    let mut session = WordSearchSession::new(board());
    // not a straight line: selects only the start cell
    assert_eq!(session.select(p(0, 0), p(1, 2)), Selection::Miss);
    // runs off the board
    assert_eq!(session.select(p(0, 0), p(0, 9)), Selection::Miss);
    // straight line, wrong letters
    assert_eq!(session.select(p(1, 0), p(1, 2)), Selection::Miss);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_completion_and_finish() {
    let mut session = WordSearchSession::new(board());
    session.select(p(0, 0), p(0, 2));
    match session.select(p(1, 4), p(3, 4)) {
        Selection::Found { complete, .. } => assert!(complete),
        other => panic!("expected a find, got {:?}", other),
    }
    assert!(session.is_complete());
    assert_eq!(session.found_words().collect::<Vec<_>>(), vec!["CAT", "DOG"]);

    let result = session.finish(100);
    assert_eq!(result, GameResult::new(2, 2, 100));
    // 60 for the words + (300 - 100) * 2
    assert_eq!(session.score(), 460);
}

#[test]
fn test_finish_after_window_adds_nothing() {
    let mut session = WordSearchSession::new(board());
    session.select(p(0, 0), p(0, 2));
    let result = session.finish(301);
    assert_eq!(result, GameResult::new(2, 1, 301));
    assert_eq!(session.score(), 30);
}

#[test]
fn test_hint_costs_points_and_floors_at_zero() {
    let mut session = WordSearchSession::new(board());
    let mut rng = SimpleRng::new(3);

    let cell = session.hint(&mut rng).unwrap();
    assert!(cell == p(0, 0) || cell == p(1, 4));
    assert_eq!(session.hints_used(), 1);
    assert_eq!(session.score(), 0);

    session.select(p(0, 0), p(0, 2));
    session.select(p(1, 4), p(3, 4));
    assert_eq!(session.score(), 60);
    assert_eq!(session.hint(&mut rng), None);
    assert_eq!(session.hints_used(), 1);
}

#[test]
fn test_hint_points_at_unfound_word() {
    let mut session = WordSearchSession::new(board());
    session.select(p(0, 0), p(0, 2));
    let mut rng = SimpleRng::new(17);
    for _ in 0..5 {
        assert_eq!(session.hint(&mut rng), Some(p(1, 4)));
    }
    assert_eq!(session.score(), 0);
}

#[test]
fn test_incomplete_finish_earns_no_bonus() {
    let mut session = WordSearchSession::new(board());
    let result = session.finish(0);
    assert_eq!(result, GameResult::new(2, 0, 0));
    assert_eq!(session.score(), 0);
    assert!(session.is_finished());
}

#[test]
fn test_second_finish_adds_nothing() {
    let mut session = WordSearchSession::new(board());
    session.select(p(0, 0), p(0, 2));
    session.select(p(1, 4), p(3, 4));
    session.finish(100);
    assert_eq!(session.score(), 460);

    let again = session.finish(100);
    assert_eq!(again, GameResult::new(2, 2, 100));
    assert_eq!(session.score(), 460);
}

#[test]
fn test_session_from_terms() {
    let terms: Vec<TermPair> = (0..12)
        .map(|i| TermPair::new(format!("word {}", i), format!("definition {}", i)))
        .collect();
    let mut session = WordSearchSession::from_terms(&terms, &mut SimpleRng::new(42));

    let board = session.board().clone();
    assert!(board.placed_words.len() <= WORD_SEARCH_MAX_TERMS);
    assert!(!board.placed_words.is_empty());
    assert_eq!(session.clues().len(), board.placed_words.len());
    for (clue, word) in session.clues().iter().zip(&board.placed_words) {
        assert_eq!(&clue.word, word);
        assert_eq!(clue.word, clue.term.replace(' ', "").to_uppercase());
    }

    let path = &board.placement_positions[0];
    match session.select(path[0], *path.last().unwrap()) {
        Selection::Found { index, .. } => assert_eq!(index, 0),
        Selection::Miss => panic!("placed word should be selectable"),
    }
}
