use rand::SeedableRng;
use rand::rngs::SmallRng;

use cluegrid::app::{App, GAME_OVER_DELAY, GamePhase};
use cluegrid::game::board::{NUM_CATEGORIES, NUM_CLUES_PER_CATEGORY};
use cluegrid::game::error::{GameError, Result};
use cluegrid::game::loader;
use cluegrid::provider::{CategoryData, CategorySummary, ClueData, TriviaProvider};

/// In-memory provider: `pool_size` categories, `clues_per_category` clues
/// each, optionally failing the nth category fetch.
struct FixtureProvider {
    pool_size: usize,
    clues_per_category: usize,
    fail_fetch_at: Option<usize>,
    fetches: std::cell::RefCell<usize>,
}

impl FixtureProvider {
    fn new(pool_size: usize, clues_per_category: usize) -> Self {
        Self {
            pool_size,
            clues_per_category,
            fail_fetch_at: None,
            fetches: std::cell::RefCell::new(0),
        }
    }
}

impl TriviaProvider for FixtureProvider {
    fn fetch_pool(&self, _count: usize) -> Result<Vec<CategorySummary>> {
        Ok((0..self.pool_size as u64)
            .map(|id| CategorySummary {
                id,
                title: format!("Category {id}"),
                clues_count: self.clues_per_category,
            })
            .collect())
    }

    fn fetch_category(&self, id: u64) -> Result<CategoryData> {
        let call = *self.fetches.borrow();
        if self.fail_fetch_at == Some(call) {
            return Err(GameError::ProviderUnavailable("connection refused".into()));
        }
        *self.fetches.borrow_mut() += 1;
        Ok(CategoryData {
            id,
            title: format!("Category {id}"),
            clues: (0..self.clues_per_category as u64)
                .map(|j| ClueData {
                    question: format!("question {id}-{j}"),
                    answer: format!("answer {id}-{j}"),
                })
                .collect(),
        })
    }
}

fn load(provider: &FixtureProvider) -> Result<Vec<cluegrid::game::board::Category>> {
    let mut rng = SmallRng::seed_from_u64(99);
    loader::load_categories(provider, 100, &mut rng)
}

#[test]
fn full_game_runs_from_start_to_game_over_and_restart() {
    let provider = FixtureProvider::new(6, 5);
    let mut app = App::new();

    assert!(app.request_start());
    assert_eq!(app.phase, GamePhase::Loading);
    assert!(!app.request_start());

    app.board_loaded(load(&provider));
    assert_eq!(app.phase, GamePhase::Playing);
    assert_eq!(*provider.fetches.borrow(), NUM_CATEGORIES);
    assert_eq!(app.answered_count(), 0);

    // Every cell starts hidden and takes two reveals.
    {
        let board = app.board.as_ref().unwrap();
        for col in 0..NUM_CATEGORIES {
            for row in 0..NUM_CLUES_PER_CATEGORY {
                assert_eq!(board.cell_text(col, row), "?");
            }
        }
    }
    for col in 0..NUM_CATEGORIES {
        for row in 0..NUM_CLUES_PER_CATEGORY {
            app.reveal(col, row);
            let board = app.board.as_ref().unwrap();
            assert!(board.cell_text(col, row).starts_with("Clue: "));
            app.reveal(col, row);
            let board = app.board.as_ref().unwrap();
            assert!(board.cell_text(col, row).starts_with("Answer: "));
        }
    }
    assert_eq!(app.answered_count(), 12);

    // Notification is delayed, and input during the delay stays harmless.
    assert_eq!(app.phase, GamePhase::Playing);
    app.on_tick();
    assert_eq!(app.phase, GamePhase::Playing);
    app.reveal(0, 0);
    assert_eq!(app.answered_count(), 12);

    std::thread::sleep(GAME_OVER_DELAY + std::time::Duration::from_millis(100));
    app.on_tick();
    assert_eq!(app.phase, GamePhase::GameOver);

    // Restart rebuilds the board from scratch.
    assert!(app.request_start());
    assert!(app.board.is_none());
    app.board_loaded(load(&provider));
    assert_eq!(app.phase, GamePhase::Playing);
    assert_eq!(app.answered_count(), 0);
}

#[test]
fn insufficient_pool_returns_to_idle_with_no_board() {
    let provider = FixtureProvider::new(4, 5);
    let mut app = App::new();

    app.request_start();
    app.board_loaded(load(&provider));

    assert_eq!(app.phase, GamePhase::Idle);
    assert!(app.board.is_none());
    assert!(app.error.is_some());
    assert_eq!(*provider.fetches.borrow(), 0);
}

#[test]
fn mid_sequence_fetch_failure_leaves_no_partial_board() {
    let mut provider = FixtureProvider::new(10, 5);
    provider.fail_fetch_at = Some(2);
    let mut app = App::new();

    app.request_start();
    app.board_loaded(load(&provider));

    assert_eq!(app.phase, GamePhase::Idle);
    assert!(app.board.is_none());
    assert!(app.error.as_deref().unwrap().contains("unavailable"));
    assert_eq!(*provider.fetches.borrow(), 2);
}
