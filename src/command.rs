use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents all user input a scripted session can send to the prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    // Navigation
    Complete,
    Up,
    Down,
    Commit,
    Cancel,

    // Line editing
    Char(char),
    Type(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    ClearLine,
}

impl Command {
    /// Parse a key name as used by `key:<name>` script lines
    pub fn from_key_name(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "tab" | "complete" => Ok(Command::Complete),
            "up" => Ok(Command::Up),
            "down" => Ok(Command::Down),
            "enter" | "commit" => Ok(Command::Commit),
            "esc" | "escape" | "cancel" => Ok(Command::Cancel),
            "backspace" => Ok(Command::Backspace),
            "delete" => Ok(Command::Delete),
            "left" => Ok(Command::Left),
            "right" => Ok(Command::Right),
            "home" => Ok(Command::Home),
            "end" => Ok(Command::End),
            "ctrl_u" | "clear" => Ok(Command::ClearLine),
            "space" => Ok(Command::Char(' ')),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Command::Char(c)),
                    _ => Err(format!("Unknown key: {}", s)),
                }
            }
        }
    }

    /// Key presses that produce this command
    pub fn key_events(&self) -> Vec<KeyEvent> {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        match self {
            Command::Complete => vec![key(KeyCode::Tab)],
            Command::Up => vec![key(KeyCode::Up)],
            Command::Down => vec![key(KeyCode::Down)],
            Command::Commit => vec![key(KeyCode::Enter)],
            Command::Cancel => vec![key(KeyCode::Esc)],
            Command::Char(c) => vec![key(KeyCode::Char(*c))],
            Command::Type(text) => text.chars().map(|c| key(KeyCode::Char(c))).collect(),
            Command::Backspace => vec![key(KeyCode::Backspace)],
            Command::Delete => vec![key(KeyCode::Delete)],
            Command::Left => vec![key(KeyCode::Left)],
            Command::Right => vec![key(KeyCode::Right)],
            Command::Home => vec![key(KeyCode::Home)],
            Command::End => vec![key(KeyCode::End)],
            Command::ClearLine => vec![KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)],
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Complete => write!(f, "key:tab"),
            Command::Up => write!(f, "key:up"),
            Command::Down => write!(f, "key:down"),
            Command::Commit => write!(f, "key:enter"),
            Command::Cancel => write!(f, "key:esc"),
            Command::Char(c) => write!(f, "char:{}", c),
            Command::Type(text) => write!(f, "type:{}", text),
            Command::Backspace => write!(f, "key:backspace"),
            Command::Delete => write!(f, "key:delete"),
            Command::Left => write!(f, "key:left"),
            Command::Right => write!(f, "key:right"),
            Command::Home => write!(f, "key:home"),
            Command::End => write!(f, "key:end"),
            Command::ClearLine => write!(f, "key:ctrl_u"),
        }
    }
}
