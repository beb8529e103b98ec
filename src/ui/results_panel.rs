// Results pane rendering.
// - Shows the normalized syntax tree in a scrollable pane.
// - Lists permuted sentences with the selection kept near the center.
// - Applies the staggered reveal before items become visible.
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{app::App, model::Focus, permute::PermutationSet};

use super::{pane_border_style, truncate_to_width};

pub fn render_results(frame: &mut Frame, app: &App, focus: Focus, area: Rect) {
    let focused = focus == Focus::Results;
    let Some(results) = &app.results else {
        render_empty_hint(frame, focused, area);
        return;
    };

    let [tree_area, list_area] =
        Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
    render_tree_pane(frame, app, focused, tree_area);
    render_permutations_pane(frame, app, results, focused, list_area);
}

fn render_empty_hint(frame: &mut Frame, focused: bool, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("No permutations yet."),
        Line::from(""),
        Line::from("Submit a sentence to list every reordering of its"),
        Line::from("coordinated constituents."),
    ];

    let hint = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Results")
                .border_style(pane_border_style(focused, Color::LightBlue)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(hint, area);
}

fn render_tree_pane(frame: &mut Frame, app: &App, focused: bool, area: Rect) {
    let Some(tree) = &app.tree else {
        return;
    };

    let pretty = tree.render_pretty();
    let lines = pretty
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect::<Vec<_>>();

    let block = Block::default()
        .borders(Borders::ALL)
        .title_top(Line::from("Syntax tree").left_aligned())
        .title_top(Line::styled("(J/K)", Style::default().fg(Color::DarkGray)).right_aligned())
        .border_style(pane_border_style(focused, Color::LightGreen));
    let inner = block.inner(area);
    let visible_line_count = inner.height.max(1) as usize;
    let max_scroll_top = lines.len().saturating_sub(visible_line_count);
    let scroll_top = app.clamp_tree_scroll(max_scroll_top);

    let pane = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .scroll((scroll_top.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(pane, area);
}

fn render_permutations_pane(
    frame: &mut Frame,
    app: &App,
    results: &PermutationSet,
    focused: bool,
    area: Rect,
) {
    let revealed = app.revealed_count();
    let total = results.len();
    let title = if revealed < total {
        format!("Permutations ({revealed}/{total})")
    } else if results.truncated {
        format!("Permutations ({total}, capped)")
    } else {
        format!("Permutations ({total})")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title_top(Line::from(title).left_aligned())
        .border_style(pane_border_style(focused, Color::LightBlue));
    let inner = block.inner(area);
    let visible_rows = inner.height as usize;
    app.set_results_visible_rows(visible_rows);

    // Account for borders and highlight symbol so rows stay on one line.
    let content_width = (inner.width as usize).saturating_sub(2);
    let number_width = total.to_string().len();
    let items = results
        .sentences
        .iter()
        .take(revealed)
        .enumerate()
        .map(|(index, sentence)| {
            let row = format!("{:>number_width$}. {sentence}", index + 1);
            ListItem::new(truncate_to_width(&row, content_width))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    if revealed > 0 {
        let selected = app.selected_result.min(revealed - 1);
        let centered_offset = if visible_rows == 0 {
            0
        } else {
            let max_offset = revealed.saturating_sub(visible_rows);
            selected.saturating_sub(visible_rows / 2).min(max_offset)
        };
        list_state = list_state
            .with_offset(centered_offset)
            .with_selected(Some(selected));
    }

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, area, &mut list_state);
}
