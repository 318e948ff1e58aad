use ratatui::style::{Color, Modifier, Style};

/// Theme data structure containing all styles and glyphs used by the prompt
#[derive(Debug, Clone)]
pub struct Theme {
    // Header
    pub prefix_idle: Color,
    pub prefix_done: Color,
    pub message: Color,
    pub current_dir: Color,
    pub answer: Color,

    // Candidate list
    pub directory: Color,
    pub active: Color,
    pub empty_text: Color,
    pub cancel_text: Color,

    // Help tip
    pub key: Color,
    pub help_text: Color,

    // Glyphs
    pub idle_symbol: &'static str,
    pub done_symbol: &'static str,
    pub cancel_symbol: &'static str,
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub delimiter: char,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Header
            prefix_idle: Color::Blue,
            prefix_done: Color::Green,
            message: Color::Reset,
            current_dir: Color::Magenta,
            answer: Color::Cyan,

            // Candidate list
            directory: Color::Yellow,
            active: Color::Cyan,
            empty_text: Color::Gray,
            cancel_text: Color::Red,

            // Help tip
            key: Color::Cyan,
            help_text: Color::Reset,

            // Glyphs
            idle_symbol: "?",
            done_symbol: "✔",
            cancel_symbol: "✖",
            branch: "├── ",
            last_branch: "└── ",
            delimiter: '━',
        }
    }
}

impl Theme {
    /// Tree-line prefix for a candidate row
    pub fn line_prefix(&self, is_last: bool) -> &'static str {
        if is_last {
            self.last_branch
        } else {
            self.branch
        }
    }

    pub fn message_style(&self) -> Style {
        Style::default().fg(self.message).add_modifier(Modifier::BOLD)
    }

    pub fn candidate_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::default().fg(self.active)
        } else {
            Style::default().fg(self.directory)
        }
    }
}
