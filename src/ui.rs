// Root UI composition and shared visual components.
// - Centers the fixed-size content container in the terminal viewport.
// - Renders shared chrome: mode tab bar, footer status line, keybinds popup.
// - Delegates pane rendering to the input and results submodules.
mod input_panel;
mod results_panel;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::{
    app::App,
    model::{Focus, InputMode},
};

pub(crate) const CONTAINER_WIDTH: u16 = 104;
pub(crate) const CONTAINER_HEIGHT: u16 = 34;

pub fn render(frame: &mut Frame, app: &App, focus: Focus) {
    let [content, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    let container = centered_container(content);
    let [tabs_area, input_area, results_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(9),
        Constraint::Min(0),
    ])
    .areas(container);

    render_mode_tabs(frame, app, focus, tabs_area);
    input_panel::render_input_panel(frame, app, focus, input_area);
    results_panel::render_results(frame, app, focus, results_area);
    render_footer(frame, app, footer);

    if app.show_keybinds {
        render_keybinds_popup(frame);
    }
}

// The viewport is recomputed inside every draw, so terminal resizes center the
// container again with no extra handling. Terminal cells have no negative
// coordinates; a viewport smaller than the container clips it instead.
pub(crate) fn centered_container(viewport: Rect) -> Rect {
    let width = CONTAINER_WIDTH.min(viewport.width);
    let height = CONTAINER_HEIGHT.min(viewport.height);

    Rect {
        x: viewport.x + (viewport.width - width) / 2,
        y: viewport.y + (viewport.height - height) / 2,
        width,
        height,
    }
}

fn render_mode_tabs(frame: &mut Frame, app: &App, focus: Focus, area: Rect) {
    let selected = InputMode::ALL
        .iter()
        .position(|mode| *mode == app.mode())
        .unwrap_or(0);
    let labels = InputMode::ALL
        .iter()
        .map(|mode| Line::from(format!(" {} {} ", mode.number(), mode.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(labels)
        .select(selected)
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_top(Line::from("Input mode").left_aligned())
                .title_top(
                    Line::styled("(ctrl+n)", Style::default().fg(Color::DarkGray)).right_aligned(),
                )
                .border_style(pane_border_style(focus == Focus::Input, Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    const HINT: &str = "F1 keybinds ";
    let [status_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(HINT.len() as u16)])
            .areas(area);

    let status = Paragraph::new(Line::styled(
        app.status_message.clone(),
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Left);
    frame.render_widget(status, status_area);

    let hint = Paragraph::new(Line::styled(HINT, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Right);
    frame.render_widget(hint, hint_area);
}

fn render_keybinds_popup(frame: &mut Frame) {
    let outer = frame.area();
    let [vertical] = Layout::vertical([Constraint::Percentage(70)])
        .flex(ratatui::layout::Flex::Center)
        .areas(outer);
    let [popup] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(ratatui::layout::Flex::Center)
        .areas(vertical);

    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Press F1 or Esc to close this window."),
        Line::from(""),
        keybind_section("GLOBAL"),
        keybind_row("Ctrl+c", "quit app"),
        keybind_row("Ctrl+n / Ctrl+p", "next / previous input mode"),
        keybind_row("Alt+1 / Alt+2", "select input mode directly"),
        keybind_row("Tab / Shift+Tab", "move pane focus"),
        keybind_row("Ctrl+j/k or Ctrl+Up/Down", "move pane focus"),
        Line::from(""),
        keybind_section("SENTENCE ENTRY"),
        keybind_row("Left/Right/Home/End", "move the cursor"),
        keybind_row("Backspace", "delete before the cursor"),
        keybind_row("Enter", "generate permutations"),
        Line::from(""),
        keybind_section("RESULTS"),
        keybind_row("j/k or Up/Down", "move selection"),
        keybind_row("PgUp/PgDn or Ctrl+u/d", "page selection"),
        keybind_row("J / K", "scroll the syntax tree pane"),
        keybind_row("?", "toggle keybinds popup"),
    ];

    let popup_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Keybinds"))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(popup_widget, popup);
}

fn keybind_section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn keybind_row(keys: &str, action: &str) -> Line<'static> {
    const KEY_COL_WIDTH: usize = 26;
    let keys_padded = format!("{keys:<KEY_COL_WIDTH$}");
    Line::from(vec![
        Span::styled(
            keys_padded,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(action.to_string()),
    ])
}

pub(super) fn pane_border_style(is_focused: bool, focused_color: Color) -> Style {
    if is_focused {
        Style::default()
            .fg(focused_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub(crate) fn truncate_to_width(value: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if ch_width > 0 && width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}
