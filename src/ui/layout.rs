use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::game::board::{NUM_CATEGORIES, NUM_CLUES_PER_CATEGORY};

pub const TITLE_ROW_HEIGHT: u16 = 4;

/// Top-level screen split shared by every game phase.
pub struct ScreenLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            footer: vertical[2],
        }
    }
}

/// Grid geometry for the board: one title row plus the clue rows, six equal
/// columns. Built from the same `main` rect by both the renderer and the
/// mouse handler, so hit tests always agree with what was drawn.
pub struct BoardLayout {
    pub titles: [Rect; NUM_CATEGORIES],
    pub cells: [[Rect; NUM_CATEGORIES]; NUM_CLUES_PER_CATEGORY],
}

impl BoardLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_ROW_HEIGHT),
                Constraint::Fill(1),
                Constraint::Fill(1),
            ])
            .split(area);

        let columns = |row: Rect| -> [Rect; NUM_CATEGORIES] {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Fill(1); NUM_CATEGORIES])
                .split(row);
            std::array::from_fn(|i| split[i])
        };

        Self {
            titles: columns(rows[0]),
            cells: [columns(rows[1]), columns(rows[2])],
        }
    }

    /// Resolve a screen position to the `(column, row)` identity of a clue
    /// cell. Title cells and gaps resolve to `None`.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, rect) in cells.iter().enumerate() {
                if rect.contains(ratatui::layout::Position { x, y }) {
                    return Some((col, row));
                }
            }
        }
        None
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let target_w = (area.width.saturating_mul(percent_x.min(100)) / 100).min(area.width);
    let target_h = (area.height.saturating_mul(percent_y.min(100)) / 100).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
