//! # TitleBar Component
//!
//! Top status bar: application name and version, question source, session status.
//!
//! Stateless and props-based. The status text comes from core `App` state;
//! the bar does not care where it came from.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Quizline v0.1.0 (source: remote) | Round 2"`
//! 2. **Default**: `"Quizline v0.1.0 (source: remote)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Name of the active question source (e.g. "static")
    pub source: String,
    /// Status message (e.g. "Round 1", "Score 4/5")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(source: String, status_message: String) -> Self {
        Self {
            source,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Quizline",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                concat!(" v", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!(" (source: {})", self.source)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

/// Bottom line listing the keys that do something in the current view.
pub struct HelpBar {
    pub hints: &'static str,
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.hints,
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_with_status_message() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::new("remote".to_string(), "Round 2".to_string());

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Quizline"));
        assert!(text.contains(concat!("v", env!("CARGO_PKG_VERSION"))));
        assert!(text.contains("source: remote"));
        assert!(text.contains("| Round 2"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::new("static".to_string(), String::new());

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("source: static"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_help_bar_renders_hints() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut help = HelpBar {
            hints: "Enter Start  Esc Quit",
        };

        terminal.draw(|f| help.render(f, f.area())).unwrap();

        assert!(buffer_text(terminal.backend().buffer()).contains("Enter Start"));
    }
}
