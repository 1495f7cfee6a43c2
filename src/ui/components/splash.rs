use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

const SPINNER_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Pre-game panel: title card in idle, animated indicator while the board
/// loads. Also carries the error line from a failed start attempt.
pub struct Splash<'a> {
    pub loading: bool,
    pub restart: bool,
    pub error: Option<&'a str>,
    pub tick_count: u64,
    pub theme: &'a Theme,
}

impl Widget for &Splash<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "cluegrid",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Terminal Trivia Board",
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let status = if self.loading {
            let frame = SPINNER_FRAMES[(self.tick_count as usize) % SPINNER_FRAMES.len()];
            Line::from(Span::styled(
                format!("{frame} Loading categories…"),
                Style::default().fg(colors.accent()),
            ))
        } else if self.restart {
            Line::from(Span::styled(
                "[s] Restart",
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "[s] Start",
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            ))
        };
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .render(layout[1], buf);

        if let Some(error) = self.error {
            Paragraph::new(Line::from(Span::styled(
                error,
                Style::default().fg(colors.error()),
            )))
            .alignment(Alignment::Center)
            .render(layout[2], buf);
        }
    }
}
