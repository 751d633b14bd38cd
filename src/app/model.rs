/// Interface state for one widget instance.
pub struct App {
    /// Cursor position in the track list. Clamped to the list length by the
    /// movement helpers; 0 when the list is empty.
    pub selected: usize,
    /// Buffer of the add-files prompt while it is open.
    pub prompt: Option<String>,
    /// Transient one-line status message (import results, load errors).
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            selected: 0,
            prompt: None,
            status: None,
        }
    }

    pub fn prompt_open(&self) -> bool {
        self.prompt.is_some()
    }

    /// Open the add-files prompt with an empty buffer.
    pub fn open_prompt(&mut self) {
        self.prompt = Some(String::new());
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Close the prompt and hand back whatever was typed.
    pub fn take_prompt(&mut self) -> Option<String> {
        self.prompt.take()
    }

    pub fn push_prompt_char(&mut self, c: char) {
        if let Some(buf) = self.prompt.as_mut() {
            buf.push(c);
        }
    }

    pub fn pop_prompt_char(&mut self) {
        if let Some(buf) = self.prompt.as_mut() {
            buf.pop();
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Move the cursor down one row, stopping at the last track.
    pub fn select_next(&mut self, track_count: usize) {
        if track_count == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(track_count - 1);
    }

    /// Move the cursor up one row, stopping at the top.
    pub fn select_prev(&mut self, track_count: usize) {
        if track_count == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_sub(1).min(track_count - 1);
    }

    /// Keep the cursor inside the list after the track count changed.
    pub fn clamp_selected(&mut self, track_count: usize) {
        if track_count == 0 {
            self.selected = 0;
        } else if self.selected >= track_count {
            self.selected = track_count - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
