// Sentence entry-field editing logic.
// - Handles cursor movement and character insert/delete in the entry line.
// - Keeps cursor arithmetic in characters, mapped to bytes before mutation.
use super::App;

impl App {
    pub fn push_sentence_char(&mut self, ch: char) {
        let byte_index = byte_index_for_char(&self.sentence, self.sentence_cursor);
        self.sentence.insert(byte_index, ch);
        self.sentence_cursor += 1;
    }

    pub fn backspace_sentence(&mut self) {
        if self.sentence_cursor == 0 {
            return;
        }

        let remove_char_index = self.sentence_cursor - 1;
        let start = byte_index_for_char(&self.sentence, remove_char_index);
        let end = byte_index_for_char(&self.sentence, remove_char_index + 1);
        self.sentence.replace_range(start..end, "");
        self.sentence_cursor -= 1;
    }

    pub fn move_sentence_cursor_left(&mut self) {
        self.sentence_cursor = self.sentence_cursor.saturating_sub(1);
    }

    pub fn move_sentence_cursor_right(&mut self) {
        let max = self.sentence.chars().count();
        self.sentence_cursor = (self.sentence_cursor + 1).min(max);
    }

    pub fn move_sentence_cursor_home(&mut self) {
        self.sentence_cursor = 0;
    }

    pub fn move_sentence_cursor_end(&mut self) {
        self.sentence_cursor = self.sentence.chars().count();
    }

    pub fn clear_sentence(&mut self) {
        self.sentence.clear();
        self.sentence_cursor = 0;
    }
}

pub(super) fn byte_index_for_char(input: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    input
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(input.len())
}
