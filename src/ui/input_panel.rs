// Sentence entry pane rendering.
// - Shows the active mode and the editable sentence line with a block cursor.
// - Draws the mode placeholder dimmed while the entry field is empty.
// - Carries a spinner in the title while a background parse is running.
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{app::App, model::Focus};

use super::pane_border_style;

const INPUT_LABEL_COL_WIDTH: usize = 10;

pub fn render_input_panel(frame: &mut Frame, app: &App, focus: Focus, area: Rect) {
    let form_focused = focus == Focus::Input;
    let cursor = form_focused.then_some(app.sentence_cursor);

    let lines = vec![
        section("SENTENCE ENTRY"),
        Line::from(""),
        row("Mode", app.mode().label().to_string()),
        Line::from(""),
        input_line("Sentence", &app.sentence, app.mode().placeholder(), cursor),
        Line::from(""),
        Line::from("Press Enter to generate permutations."),
    ];

    let title = if app.parse_running() {
        format!("Input {} parsing", app.parse_spinner_glyph())
    } else {
        "Input".to_string()
    };

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_border_style(form_focused, Color::LightYellow))
                .title(title),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(panel, area);
}

fn section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn row(label: &str, value: String) -> Line<'static> {
    let label_cell = format!("{label:<INPUT_LABEL_COL_WIDTH$}");
    Line::from(vec![
        Span::styled(
            label_cell,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(value),
    ])
}

fn input_line(
    label: &str,
    value: &str,
    placeholder: &'static str,
    active_cursor: Option<usize>,
) -> Line<'static> {
    let label_cell = format!("{label:<INPUT_LABEL_COL_WIDTH$}");
    let active = active_cursor.is_some();

    let mut spans = vec![
        Span::styled(
            label_cell,
            if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD)
            },
        ),
        Span::raw("  "),
    ];

    let cursor_style = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);

    if value.is_empty() {
        if active {
            spans.push(Span::styled(" ".to_string(), cursor_style));
        }
        spans.push(Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
        return Line::from(spans);
    }

    let chars = value.chars().collect::<Vec<_>>();
    let cursor = active_cursor.unwrap_or(0).min(chars.len());
    let value_style = if active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    for (index, ch) in chars.iter().enumerate() {
        let style = if active && index == cursor {
            cursor_style
        } else {
            value_style
        };
        spans.push(Span::styled(ch.to_string(), style));
    }

    if active && cursor == chars.len() {
        spans.push(Span::styled(" ".to_string(), cursor_style));
    }

    Line::from(spans)
}
