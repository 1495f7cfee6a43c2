use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::game::board::{
    Board, Category, NUM_CATEGORIES, NUM_CLUES_PER_CATEGORY, RevealResult,
};
use crate::game::error::GameError;
use crate::ui::theme::Theme;

/// Cosmetic pause between the last answer rendering and the game-over
/// banner. Checked on tick events; input keeps flowing while it runs.
pub const GAME_OVER_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Loading,
    Playing,
    GameOver,
}

impl GamePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Loading => "loading",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game over",
        }
    }
}

pub struct App {
    pub phase: GamePhase,
    pub board: Option<Board>,
    pub selected: (usize, usize),
    pub error: Option<String>,
    /// Flips after the first successful load; the start control reads
    /// "Restart" from then on.
    pub has_played: bool,
    pub config: Config,
    pub theme: &'static Theme,
    pub should_quit: bool,
    pub tick_count: u64,
    game_over_at: Option<Instant>,
    rng: SmallRng,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        Self {
            phase: GamePhase::Idle,
            board: None,
            selected: (0, 0),
            error: None,
            has_played: false,
            config,
            theme,
            should_quit: false,
            tick_count: 0,
            game_over_at: None,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Derive an rng for a loader worker thread.
    pub fn fork_rng(&mut self) -> SmallRng {
        SmallRng::from_rng(&mut self.rng).unwrap()
    }

    /// Move to the loading phase, clearing any existing board. Returns false
    /// while a load is already in flight so a second start request cannot
    /// race the first one.
    pub fn request_start(&mut self) -> bool {
        if self.phase == GamePhase::Loading {
            return false;
        }
        self.phase = GamePhase::Loading;
        self.board = None;
        self.error = None;
        self.selected = (0, 0);
        self.game_over_at = None;
        true
    }

    /// Apply a loader worker's result. A success builds the board and enters
    /// play; any failure drops back to idle with the board left empty.
    pub fn board_loaded(&mut self, result: Result<Vec<Category>, GameError>) {
        if self.phase != GamePhase::Loading {
            return;
        }
        match result {
            Ok(categories) => {
                self.board = Some(Board::build(categories, &mut self.rng));
                self.has_played = true;
                self.phase = GamePhase::Playing;
            }
            Err(err) => {
                self.board = None;
                self.error = Some(err.to_string());
                self.phase = GamePhase::Idle;
            }
        }
    }

    /// Advance one cell's reveal state. Outside the playing phase, and on
    /// cells already showing their answer, this is a no-op.
    pub fn reveal(&mut self, col: usize, row: usize) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(board) = self.board.as_mut() else {
            return;
        };
        self.selected = (col, row);
        let result = board.reveal_next(col, row);
        if matches!(result, RevealResult::Answer(_))
            && board.is_complete()
            && self.game_over_at.is_none()
        {
            self.game_over_at = Some(Instant::now());
        }
    }

    pub fn reveal_selected(&mut self) {
        let (col, row) = self.selected;
        self.reveal(col, row);
    }

    pub fn move_selection(&mut self, dcol: isize, drow: isize) {
        let (col, row) = self.selected;
        let cols = NUM_CATEGORIES as isize;
        let rows = NUM_CLUES_PER_CATEGORY as isize;
        self.selected = (
            (col as isize + dcol).rem_euclid(cols) as usize,
            (row as isize + drow).rem_euclid(rows) as usize,
        );
    }

    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if let Some(at) = self.game_over_at {
            if at.elapsed() >= GAME_OVER_DELAY {
                self.game_over_at = None;
                self.phase = GamePhase::GameOver;
            }
        }
    }

    pub fn answered_count(&self) -> usize {
        self.board.as_ref().map_or(0, |b| b.answered_count())
    }
}
