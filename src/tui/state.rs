// File: ./src/tui/state.rs
//! Transcript and input state for the chat view.

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Speaker {
    You,
    Tally,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::You => "You",
            Speaker::Tally => "Tally",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub lines: Vec<String>,
}

#[derive(Debug)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    pub input: String,
    /// Lines scrolled up from the tail; 0 means following the latest entry.
    pub scroll_offset: usize,
    pub should_quit: bool,
}

impl ChatState {
    pub fn new(greeting: Vec<String>) -> Self {
        Self {
            entries: vec![ChatEntry {
                speaker: Speaker::Tally,
                lines: greeting,
            }],
            input: String::new(),
            scroll_offset: 0,
            should_quit: false,
        }
    }

    pub fn push(&mut self, speaker: Speaker, lines: Vec<String>) {
        self.entries.push(ChatEntry { speaker, lines });
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Snaps back to the newest entry after a new exchange.
    pub fn follow_tail(&mut self) {
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_starts_with_greeting() {
        let state = ChatState::new(vec!["Hello!".to_string()]);
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].speaker, Speaker::Tally);
    }

    #[test]
    fn scrolling_saturates_at_tail() {
        let mut state = ChatState::new(vec![]);
        state.scroll_down(5);
        assert_eq!(state.scroll_offset, 0);
        state.scroll_up(3);
        state.scroll_down(1);
        assert_eq!(state.scroll_offset, 2);
        state.follow_tail();
        assert_eq!(state.scroll_offset, 0);
    }
}
