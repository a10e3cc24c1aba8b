//! # Loader Component
//!
//! Centered title/message pair with a spinner, shown while a transition is
//! pending. No logic of its own.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::LoadingMessage;
use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Loader<'a> {
    message: &'a LoadingMessage,
    spinner_frame: usize,
}

impl<'a> Loader<'a> {
    pub fn new(message: &'a LoadingMessage, spinner_frame: usize) -> Self {
        Self {
            message,
            spinner_frame,
        }
    }
}

impl Component for Loader<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        let lines = vec![
            Line::from(Span::styled(spinner, Style::default().fg(Color::Cyan))),
            Line::from(""),
            Line::from(Span::styled(
                self.message.title.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.message.message.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_loader_shows_title_and_message() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let message = LoadingMessage::new("Fetching your results...", "Just a moment!");

        terminal
            .draw(|f| Loader::new(&message, 3).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Fetching your results..."));
        assert!(text.contains("Just a moment!"));
        assert!(text.contains(SPINNER[3]));
    }
}
