// Central application state shared by the app submodules.
// - Stores the active input mode, the sentence entry field, and results.
// - Owns the background parse job state and its channel handle.
// - Drives spinner and staggered-reveal animation from the main loop tick.
mod input;
mod submit;

use std::{cell::Cell, sync::mpsc::Receiver};

use crate::{
    config::Config,
    model::InputMode,
    permute::PermutationSet,
    syntax::SyntaxTree,
};

pub const DEFAULT_SENTENCE: &str = "Sunset painted the sky and sea in hues of orange and pink.";

// One reveal step per list index, two ticks (200ms at the 100ms poll cadence)
// per step.
pub(crate) const REVEAL_TICK_STEP: usize = 2;

pub(crate) fn reveal_delay_for_index(index: usize) -> usize {
    (index + 1) * REVEAL_TICK_STEP
}

pub struct App {
    config: Config,
    pub(crate) mode: InputMode,
    pub(crate) sentence: String,
    pub(crate) sentence_cursor: usize,
    pub(crate) status_message: String,
    pub(crate) tree: Option<SyntaxTree>,
    pub(crate) results: Option<PermutationSet>,
    pub(crate) selected_result: usize,
    pub(crate) show_keybinds: bool,
    pub(crate) parse_spinner_frame: usize,
    reveal_ticks: usize,
    results_ready: bool,
    tree_scroll: Cell<usize>,
    results_visible_rows: Cell<usize>,
    running_parse: Option<RunningParse>,
}

pub(crate) struct RunningParse {
    rx: Receiver<ParseOutcome>,
}

pub(crate) enum ParseOutcome {
    Parsed(String),
    Failed(String),
}

impl App {
    pub fn new(config: Config) -> Self {
        let sentence = DEFAULT_SENTENCE.to_string();
        let sentence_cursor = sentence.chars().count();

        Self {
            config,
            mode: InputMode::Human,
            sentence,
            sentence_cursor,
            status_message: "Press Enter to permute the sentence.".to_string(),
            tree: None,
            results: None,
            selected_result: 0,
            show_keybinds: false,
            parse_spinner_frame: 0,
            reveal_ticks: 0,
            results_ready: false,
            tree_scroll: Cell::new(0),
            results_visible_rows: Cell::new(10),
            running_parse: None,
        }
    }

    pub fn tick(&mut self) {
        if self.running_parse.is_some() {
            self.parse_spinner_frame = (self.parse_spinner_frame + 1) % spinner_frames().len();
            self.pump_running_parse();
        }

        if let Some(results) = &self.results
            && self.reveal_ticks < reveal_delay_for_index(results.len().saturating_sub(1))
        {
            self.reveal_ticks += 1;
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn select_next_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    pub fn select_previous_mode(&mut self) {
        self.set_mode(self.mode.previous());
    }

    pub fn select_mode_by_number(&mut self, number: usize) -> bool {
        let Some(mode) = InputMode::from_number(number) else {
            return false;
        };
        self.set_mode(mode);
        true
    }

    // Selecting a mode always clears the entry field, even when the mode did
    // not change.
    fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.clear_sentence();
    }

    pub fn toggle_keybinds(&mut self) {
        self.show_keybinds = !self.show_keybinds;
    }

    pub fn hide_keybinds(&mut self) {
        self.show_keybinds = false;
    }

    pub fn parse_running(&self) -> bool {
        self.running_parse.is_some()
    }

    pub fn parse_spinner_glyph(&self) -> char {
        spinner_frames()[self.parse_spinner_frame % spinner_frames().len()]
    }

    pub(crate) fn parse_config(&self) -> &Config {
        &self.config
    }

    // True exactly once per stored result set; the caller moves focus onto the
    // results pane in response.
    pub fn take_results_ready(&mut self) -> bool {
        std::mem::take(&mut self.results_ready)
    }

    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, PermutationSet::len)
    }

    pub fn revealed_count(&self) -> usize {
        let total = self.result_count();
        (self.reveal_ticks / REVEAL_TICK_STEP).min(total)
    }

    pub fn reveal_all(&mut self) {
        if let Some(results) = &self.results {
            self.reveal_ticks = reveal_delay_for_index(results.len().saturating_sub(1));
        }
    }

    pub fn select_next_result(&mut self) {
        self.reveal_all();
        let total = self.result_count();
        if total == 0 {
            self.selected_result = 0;
        } else {
            self.selected_result = (self.selected_result + 1).min(total - 1);
        }
    }

    pub fn select_previous_result(&mut self) {
        self.reveal_all();
        self.selected_result = self.selected_result.saturating_sub(1);
    }

    pub fn page_results_down(&mut self) {
        self.reveal_all();
        let total = self.result_count();
        if total == 0 {
            self.selected_result = 0;
            return;
        }
        let step = self.results_page_step();
        self.selected_result = (self.selected_result + step).min(total - 1);
    }

    pub fn page_results_up(&mut self) {
        self.reveal_all();
        let step = self.results_page_step();
        self.selected_result = self.selected_result.saturating_sub(step);
    }

    pub fn scroll_tree_down(&mut self) {
        self.tree_scroll.set(self.tree_scroll.get() + 1);
    }

    pub fn scroll_tree_up(&mut self) {
        self.tree_scroll.set(self.tree_scroll.get().saturating_sub(1));
    }

    pub(crate) fn clamp_tree_scroll(&self, max_scroll_top: usize) -> usize {
        let clamped = self.tree_scroll.get().min(max_scroll_top);
        self.tree_scroll.set(clamped);
        clamped
    }

    pub(crate) fn reset_tree_scroll(&self) {
        self.tree_scroll.set(0);
    }

    pub(crate) fn set_results_visible_rows(&self, rows: usize) {
        self.results_visible_rows.set(rows);
    }

    fn results_page_step(&self) -> usize {
        self.results_visible_rows.get().max(1)
    }

    pub(crate) fn store_results(&mut self, tree: SyntaxTree, results: PermutationSet) {
        self.tree = Some(tree);
        self.results = Some(results);
        self.selected_result = 0;
        self.reveal_ticks = 0;
        self.results_ready = true;
        self.reset_tree_scroll();
    }
}

pub(crate) fn spinner_frames() -> &'static [char] {
    &['|', '/', '-', '\\']
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InputMode;

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn starts_in_human_mode_with_the_default_sentence() {
        let app = app();
        assert_eq!(app.mode(), InputMode::Human);
        assert_eq!(app.sentence, DEFAULT_SENTENCE);
        assert_eq!(app.sentence_cursor, DEFAULT_SENTENCE.chars().count());
    }

    #[test]
    fn selecting_a_mode_clears_the_entry_field() {
        let mut app = app();
        app.select_next_mode();
        assert_eq!(app.mode(), InputMode::Tree);
        assert!(app.sentence.is_empty());
        assert_eq!(app.sentence_cursor, 0);

        // Re-selecting the active mode clears as well.
        app.push_sentence_char('x');
        assert!(app.select_mode_by_number(2));
        assert!(app.sentence.is_empty());
    }

    #[test]
    fn out_of_range_mode_numbers_are_ignored() {
        let mut app = app();
        app.push_sentence_char('x');
        assert!(!app.select_mode_by_number(9));
        assert_eq!(app.mode(), InputMode::Human);
        assert!(app.sentence.ends_with('x'));
    }

    #[test]
    fn reveal_delay_grows_linearly_from_one_step() {
        assert_eq!(reveal_delay_for_index(0), REVEAL_TICK_STEP);
        assert_eq!(reveal_delay_for_index(1), 2 * REVEAL_TICK_STEP);
        assert_eq!(reveal_delay_for_index(9), 10 * REVEAL_TICK_STEP);
    }

    #[test]
    fn results_reveal_one_item_per_step() {
        let mut app = app();
        app.mode = InputMode::Tree;
        app.sentence = "(NP (NP (NN ants)) (, ,) (NP (NN bees)) (CC and) (NP (NN wasps)))"
            .to_string();
        app.submit();

        assert_eq!(app.result_count(), 6);
        assert_eq!(app.revealed_count(), 0);

        for _ in 0..REVEAL_TICK_STEP {
            app.tick();
        }
        assert_eq!(app.revealed_count(), 1);

        for _ in 0..(4 * REVEAL_TICK_STEP) {
            app.tick();
        }
        assert_eq!(app.revealed_count(), 5);

        // Navigation reveals everything immediately.
        app.select_next_result();
        assert_eq!(app.revealed_count(), 6);
        assert_eq!(app.selected_result, 1);
    }

    #[test]
    fn reveal_ticks_stop_advancing_once_everything_is_visible() {
        let mut app = app();
        app.mode = InputMode::Tree;
        app.sentence = "(NP (NP (NN cats)) (CC and) (NP (NN dogs)))".to_string();
        app.submit();

        for _ in 0..100 {
            app.tick();
        }
        assert_eq!(app.revealed_count(), 2);
    }

    #[test]
    fn result_selection_is_clamped_to_the_list() {
        let mut app = app();
        app.select_next_result();
        assert_eq!(app.selected_result, 0);

        app.mode = InputMode::Tree;
        app.sentence = "(NP (NP (NN cats)) (CC and) (NP (NN dogs)))".to_string();
        app.submit();
        assert!(app.take_results_ready());
        assert!(!app.take_results_ready());

        for _ in 0..5 {
            app.select_next_result();
        }
        assert_eq!(app.selected_result, 1);
        app.page_results_up();
        assert_eq!(app.selected_result, 0);
    }
}
