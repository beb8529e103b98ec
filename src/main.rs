// Terminal entry point.
// - Bootstraps configuration and file logging before raw mode starts.
// - Runs the draw/poll loop at a 100ms tick cadence.
// - Routes key events by modifier class and pane focus.
mod app;
mod config;
mod corenlp;
mod model;
mod permute;
mod syntax;
mod ui;

use std::{fs, sync::Arc, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing_subscriber::EnvFilter;

use crate::{app::App, config::Config, model::Focus};

fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging();

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, config);
    ratatui::restore();
    result
}

// Logging goes to a file because the TUI owns stdout/stderr. A missing log
// location disables logging rather than failing startup.
fn init_logging() {
    let Some(path) = config::log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = fs::File::options().create(true).append(true).open(&path) else {
        return;
    };

    let filter =
        EnvFilter::try_from_env("PERMUTREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

fn run(terminal: &mut ratatui::DefaultTerminal, config: Config) -> Result<()> {
    let mut app = App::new(config);
    let mut focus = Focus::Input;

    loop {
        app.tick();
        if app.take_results_ready() {
            focus = Focus::Results;
        }

        terminal.draw(|frame| ui::render(frame, &app, focus))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(&mut app, &mut focus, key)
        {
            break Ok(());
        }
    }
}

// Returns true when the app should quit.
fn handle_key(app: &mut App, focus: &mut Focus, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('n') => app.select_next_mode(),
            KeyCode::Char('p') => app.select_previous_mode(),
            KeyCode::Char('j') | KeyCode::Down => *focus = focus.next_pane(),
            KeyCode::Char('k') | KeyCode::Up => *focus = focus.previous_pane(),
            KeyCode::Char('u') if *focus == Focus::Results => app.page_results_up(),
            KeyCode::Char('d') if *focus == Focus::Results => app.page_results_down(),
            _ => {}
        }
        return false;
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(ch) = key.code
            && let Some(number) = ch.to_digit(10)
        {
            app.select_mode_by_number(number as usize);
        }
        return false;
    }

    match key.code {
        KeyCode::F(1) => {
            app.toggle_keybinds();
            return false;
        }
        KeyCode::Esc => {
            app.hide_keybinds();
            return false;
        }
        KeyCode::Tab => {
            *focus = focus.next_pane();
            return false;
        }
        KeyCode::BackTab => {
            *focus = focus.previous_pane();
            return false;
        }
        _ => {}
    }

    if app.show_keybinds {
        return false;
    }

    match *focus {
        Focus::Input => match key.code {
            KeyCode::Enter => app.submit(),
            KeyCode::Char(ch) => app.push_sentence_char(ch),
            KeyCode::Backspace => app.backspace_sentence(),
            KeyCode::Left => app.move_sentence_cursor_left(),
            KeyCode::Right => app.move_sentence_cursor_right(),
            KeyCode::Home => app.move_sentence_cursor_home(),
            KeyCode::End => app.move_sentence_cursor_end(),
            _ => {}
        },
        Focus::Results => match key.code {
            KeyCode::Char('?') => app.toggle_keybinds(),
            KeyCode::Char('J') => app.scroll_tree_down(),
            KeyCode::Char('K') => app.scroll_tree_up(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_result(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_result(),
            KeyCode::PageDown => app.page_results_down(),
            KeyCode::PageUp => app.page_results_up(),
            _ => {}
        },
    }

    false
}
