#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor.min(self.len())
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let pos = self.cursor();
        let byte = byte_index_at_char(&self.value, pos);
        self.value.insert(byte, ch);
        self.cursor = pos + 1;
    }

    pub fn backspace(&mut self) -> bool {
        let pos = self.cursor();
        if pos == 0 {
            return false;
        }
        let byte = byte_index_at_char(&self.value, pos - 1);
        self.value.remove(byte);
        self.cursor = pos - 1;
        true
    }

    pub fn delete(&mut self) -> bool {
        let pos = self.cursor();
        if pos >= self.len() {
            return false;
        }
        let byte = byte_index_at_char(&self.value, pos);
        self.value.remove(byte);
        true
    }

    pub fn move_left(&mut self) -> bool {
        let pos = self.cursor();
        if pos == 0 {
            return false;
        }
        self.cursor = pos - 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        let pos = self.cursor();
        if pos >= self.len() {
            return false;
        }
        self.cursor = pos + 1;
        true
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.cursor() != 0;
        self.cursor = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let end = self.len();
        let moved = self.cursor() != end;
        self.cursor = end;
        moved
    }

    pub fn delete_word_left(&mut self) -> bool {
        let mut chars: Vec<char> = self.value.chars().collect();
        let pos = self.cursor();
        let mut start = pos;
        while start > 0 && is_separator(chars[start - 1]) {
            start -= 1;
        }
        while start > 0 && !is_separator(chars[start - 1]) {
            start -= 1;
        }
        if start == pos {
            return false;
        }

        chars.drain(start..pos);
        self.value = chars.into_iter().collect();
        self.cursor = start;
        true
    }
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | ',' | '-' | '@' | '_')
}

fn byte_index_at_char(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}
