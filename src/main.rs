mod app;
mod config;
mod event;
mod game;
mod provider;
mod ui;

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::{App, GamePhase};
use event::{AppEvent, EventHandler};
use ui::components::board_grid::BoardGrid;
use ui::components::game_over_banner::GameOverBanner;
use ui::components::splash::Splash;
use ui::layout::{BoardLayout, ScreenLayout, centered_rect};

#[derive(Parser)]
#[command(name = "cluegrid", version, about = "Terminal trivia board game")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Base URL of the trivia provider")]
    provider_url: Option<String>,

    #[arg(long, help = "How many categories to request for the sampling pool")]
    pool_size: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(url) = cli.provider_url {
        app.config.provider_url = url;
    }
    if let Some(pool_size) = cli.pool_size {
        app.config.pool_size = pool_size;
    }
    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, events, key),
            AppEvent::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                handle_mouse(app, area, mouse);
            }
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(_, _) => {}
            AppEvent::BoardLoaded(result) => app.board_loaded(result),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, events: &EventHandler, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.phase {
        GamePhase::Idle | GamePhase::GameOver => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('s') | KeyCode::Enter => start_game(app, events),
            _ => {}
        },
        // Start requests while a load is in flight are ignored, not queued.
        GamePhase::Loading => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        GamePhase::Playing => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('s') => start_game(app, events),
            KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => app.move_selection(1, 0),
            KeyCode::Up | KeyCode::Char('k') => app.move_selection(0, -1),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => app.reveal_selected(),
            _ => {}
        },
    }
}

fn handle_mouse(app: &mut App, frame_area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.phase != GamePhase::Playing {
        return;
    }
    let layout = ScreenLayout::new(frame_area);
    let board_layout = BoardLayout::new(layout.main);
    if let Some((col, row)) = board_layout.hit_test(mouse.column, mouse.row) {
        app.reveal(col, row);
    }
}

/// Kick off a load attempt: the pool fetch, sampling, and the sequential
/// category fetches run on a worker thread so the loading animation keeps
/// ticking; the result comes back through the event channel.
fn start_game(app: &mut App, events: &EventHandler) {
    if !app.request_start() {
        return;
    }

    let tx = events.sender();
    let pool_size = app.config.pool_size;
    let mut rng = app.fork_rng();

    #[cfg(feature = "network")]
    {
        let provider = match provider::http::HttpProvider::new(&app.config.provider_url) {
            Ok(provider) => provider,
            Err(err) => {
                let _ = tx.send(AppEvent::BoardLoaded(Err(err)));
                return;
            }
        };
        thread::spawn(move || {
            let result = game::loader::load_categories(&provider, pool_size, &mut rng);
            let _ = tx.send(AppEvent::BoardLoaded(result));
        });
    }

    #[cfg(not(feature = "network"))]
    {
        let _ = (pool_size, &mut rng);
        let _ = tx.send(AppEvent::BoardLoaded(Err(
            game::error::GameError::ProviderUnavailable(
                "built without network support".to_string(),
            ),
        )));
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = ScreenLayout::new(area);
    render_header(frame, app, layout.header);
    render_footer(frame, app, layout.footer);

    match app.phase {
        GamePhase::Idle | GamePhase::Loading => {
            let splash = Splash {
                loading: app.phase == GamePhase::Loading,
                restart: app.has_played,
                error: app.error.as_deref(),
                tick_count: app.tick_count,
                theme: app.theme,
            };
            frame.render_widget(&splash, centered_rect(60, 60, layout.main));
        }
        GamePhase::Playing | GamePhase::GameOver => {
            if let Some(ref board) = app.board {
                let grid = BoardGrid::new(board, app.selected, app.theme);
                frame.render_widget(&grid, layout.main);
            }
            if app.phase == GamePhase::GameOver {
                let banner = GameOverBanner { theme: app.theme };
                frame.render_widget(&banner, centered_rect(40, 40, layout.main));
            }
        }
    }
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let status = match app.phase {
        GamePhase::Playing | GamePhase::GameOver => {
            format!(" {} | {}/12 answered", app.phase.as_str(), app.answered_count())
        }
        _ => format!(" {}", app.phase.as_str()),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " cluegrid ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            status,
            Style::default().fg(colors.accent_dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let hints = match app.phase {
        GamePhase::Idle if app.has_played => " [s] Restart  [q] Quit ",
        GamePhase::Idle => " [s] Start  [q] Quit ",
        GamePhase::Loading => " Loading…  [q] Quit ",
        GamePhase::Playing => {
            " [click/Enter] Reveal  [arrows] Select  [s] Restart  [q] Quit "
        }
        GamePhase::GameOver => " [s] Play again  [q] Quit ",
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(colors.accent_dim()),
    )));
    frame.render_widget(footer, area);
}
