use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::game::board::{Board, NUM_CATEGORIES, NUM_CLUES_PER_CATEGORY, RevealState};
use crate::ui::layout::BoardLayout;
use crate::ui::theme::Theme;

/// The trivia grid: a row of category titles over two rows of clue cards.
/// Pure projection of the board model; cell text is re-derived every frame.
pub struct BoardGrid<'a> {
    board: &'a Board,
    selected: (usize, usize),
    theme: &'a Theme,
}

impl<'a> BoardGrid<'a> {
    pub fn new(board: &'a Board, selected: (usize, usize), theme: &'a Theme) -> Self {
        Self {
            board,
            selected,
            theme,
        }
    }

    fn render_title(&self, col: usize, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.header_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let title = Paragraph::new(self.board.title(col).to_uppercase())
            .style(
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        title.render(inner, buf);
    }

    fn render_cell(&self, col: usize, row: usize, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let is_selected = self.selected == (col, row);

        let border_fg = if is_selected {
            colors.border_selected()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .border_style(Style::default().fg(border_fg))
            .style(Style::default().bg(colors.card_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let (text_fg, modifier) = match self.board.reveal_state(col, row) {
            RevealState::Hidden => (colors.card_fg(), Modifier::BOLD),
            RevealState::Question => (colors.question_fg(), Modifier::empty()),
            RevealState::Answer => (colors.answer_fg(), Modifier::empty()),
        };

        let text = Paragraph::new(self.board.cell_text(col, row))
            .style(
                Style::default()
                    .fg(text_fg)
                    .bg(colors.card_bg())
                    .add_modifier(modifier),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        text.render(inner, buf);
    }
}

impl Widget for &BoardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = BoardLayout::new(area);

        for col in 0..NUM_CATEGORIES {
            self.render_title(col, layout.titles[col], buf);
        }
        for row in 0..NUM_CLUES_PER_CATEGORY {
            for col in 0..NUM_CATEGORIES {
                self.render_cell(col, row, layout.cells[row][col], buf);
            }
        }
    }
}
