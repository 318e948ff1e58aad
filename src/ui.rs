use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::path::MAIN_SEPARATOR;

use crate::theme::Theme;
use crate::view::{DisplayModel, ViewStatus};

const HELP_LINES: [(&str, &str); 2] = [
    ("↑↓", " navigate"),
    ("<tab>", " autocomplete, <enter> select"),
];

/// Turns a display model into terminal output
pub trait Renderer {
    fn lines(&self, model: &DisplayModel) -> Vec<Line<'static>>;

    fn render(&self, frame: &mut Frame, model: &DisplayModel) {
        let paragraph = Paragraph::new(self.lines(model));
        frame.render_widget(paragraph, frame.area());
    }

    /// Rows needed to show any model with the given page size
    fn height(&self, page_size: usize) -> u16 {
        // header + page + delimiter + help
        let rows = 1 + page_size.max(1) + 1 + HELP_LINES.len();
        u16::try_from(rows).unwrap_or(u16::MAX)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DefaultRenderer {
    pub theme: Theme,
}

impl DefaultRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn header(&self, model: &DisplayModel) -> Line<'static> {
        let theme = &self.theme;
        let (symbol, symbol_style, answer) = match model.status {
            ViewStatus::Idle => (
                theme.idle_symbol,
                Style::default().fg(theme.prefix_idle),
                Span::styled(model.inserted_path.clone(), Style::default().fg(theme.current_dir)),
            ),
            ViewStatus::Committed => (
                theme.done_symbol,
                Style::default().fg(theme.prefix_done),
                Span::styled(model.inserted_path.clone(), Style::default().fg(theme.answer)),
            ),
            ViewStatus::Cancelled => (
                theme.cancel_symbol,
                Style::default().fg(theme.cancel_text),
                Span::styled("Cancelled", Style::default().fg(theme.cancel_text)),
            ),
        };

        Line::from(vec![
            Span::styled(symbol, symbol_style),
            Span::raw(" "),
            Span::styled(model.message.clone(), theme.message_style()),
            Span::raw(" "),
            answer,
        ])
    }

    fn help_tip(&self) -> Vec<Line<'static>> {
        let width = HELP_LINES
            .iter()
            .map(|(key, text)| key.chars().count() + text.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![Line::from(Span::styled(
            self.theme.delimiter.to_string().repeat(width),
            Style::default().fg(self.theme.help_text),
        ))];

        for (key, text) in HELP_LINES {
            lines.push(Line::from(vec![
                Span::styled(key, Style::default().fg(self.theme.key)),
                Span::styled(text, Style::default().fg(self.theme.help_text)),
            ]));
        }
        lines
    }
}

impl Renderer for DefaultRenderer {
    fn lines(&self, model: &DisplayModel) -> Vec<Line<'static>> {
        let mut lines = vec![self.header(model)];
        if model.status != ViewStatus::Idle {
            return lines;
        }

        if model.items.is_empty() {
            lines.push(Line::from(Span::styled(
                model.empty_text.clone(),
                Style::default().fg(self.theme.empty_text),
            )));
        } else {
            for item in &model.items {
                let text = format!(
                    "{}{}{}",
                    self.theme.line_prefix(item.is_last),
                    item.name,
                    MAIN_SEPARATOR
                );
                lines.push(Line::from(Span::styled(
                    text,
                    self.theme.candidate_style(item.is_active),
                )));
            }
        }

        lines.extend(self.help_tip());
        lines
    }
}
