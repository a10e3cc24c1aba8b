//! # Landing Page Component
//!
//! The home screen shown while the session is idle, and after a failed load.
//! Enter starts a quiz.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::countdown::CountdownBudget;
use crate::tui::component::Component;

const ERROR_MAX_WIDTH: u16 = 70;

/// Pre-wraps the error so the box can be sized to fit every line.
fn wrap_error(error: &str, width: u16) -> Vec<Line<'static>> {
    textwrap::wrap(error, width.max(1) as usize)
        .into_iter()
        .map(|l| Line::from(l.into_owned()))
        .collect()
}

pub struct LandingPage<'a> {
    source: &'a str,
    budget: CountdownBudget,
    /// Set when the last load failed.
    error: Option<&'a str>,
}

impl<'a> LandingPage<'a> {
    pub fn new(source: &'a str, budget: CountdownBudget, error: Option<&'a str>) -> Self {
        Self {
            source,
            budget,
            error,
        }
    }
}

impl Component for LandingPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text_lines = vec![
            Line::from(Span::styled(
                "Quizline",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(format!(
                "Questions: {}   Time: {}",
                self.source, self.budget
            )),
            Line::from(""),
            Line::from(Span::styled(
                if self.error.is_some() {
                    "Press Enter to try again"
                } else {
                    "Press Enter to start"
                },
                Style::default().fg(Color::Cyan),
            )),
        ];

        // Borders take one column and one row on each side.
        let error_width = area.width.min(ERROR_MAX_WIDTH);
        let error_lines = self
            .error
            .map(|e| wrap_error(e, error_width.saturating_sub(2)))
            .unwrap_or_default();
        let error_height = if error_lines.is_empty() {
            0
        } else {
            error_lines.len() as u16 + 2
        };
        let [text_area, _, error_area] = Layout::vertical([
            Constraint::Length(text_lines.len() as u16),
            Constraint::Length(1),
            Constraint::Length(error_height),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(
            Paragraph::new(text_lines).alignment(Alignment::Center),
            text_area,
        );

        if !error_lines.is_empty() {
            let [error_area] = Layout::horizontal([Constraint::Length(error_width)])
                .flex(Flex::Center)
                .areas(error_area);
            let paragraph = Paragraph::new(error_lines)
                .block(
                    Block::bordered()
                        .title(" Could not load quiz ")
                        .border_style(Style::default().fg(Color::Red)),
                )
                .style(Style::default().fg(Color::Red));
            frame.render_widget(paragraph, error_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use crate::trivia::SourceError;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_landing_shows_source_and_budget() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                LandingPage::new("static", CountdownBudget::from_secs(120), None)
                    .render(f, f.area())
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Quizline"));
        assert!(text.contains("Questions: static"));
        assert!(text.contains("00:02:00"));
        assert!(text.contains("Press Enter to start"));
        assert!(!text.contains("Could not load quiz"));
    }

    #[test]
    fn test_landing_shows_error() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                LandingPage::new("remote", CountdownBudget::from_secs(60), Some("Service down"))
                    .render(f, f.area())
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Could not load quiz"));
        assert!(text.contains("Service down"));
        assert!(text.contains("Press Enter to try again"));
    }

    #[test]
    fn test_landing_error_box_grows_with_long_message() {
        let message = SourceError::InsufficientQuestions { requested: 5 }.user_message();
        for width in [80, 60, 40] {
            let backend = TestBackend::new(width, 24);
            let mut terminal = Terminal::new(backend).unwrap();

            terminal
                .draw(|f| {
                    LandingPage::new(
                        "remote",
                        CountdownBudget::from_secs(60),
                        Some(message.as_str()),
                    )
                    .render(f, f.area())
                })
                .unwrap();

            let text = buffer_text(terminal.backend().buffer());
            assert!(text.contains("doesn't have enough"), "head missing at width {width}");
            assert!(text.contains("questions."), "tail missing at width {width}");
            for line in wrap_error(&message, width.min(ERROR_MAX_WIDTH) - 2) {
                assert!(text.contains(&line.to_string()), "line {line} missing at width {width}");
            }
        }
    }

    #[test]
    fn test_wrap_error_counts_lines() {
        assert_eq!(wrap_error("short", 20).len(), 1);
        assert_eq!(wrap_error("one two three four", 9).len(), 3);
        assert_eq!(wrap_error("text", 0).len(), 4);
    }
}
