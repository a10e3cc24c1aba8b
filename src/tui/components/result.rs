//! # Result Component
//!
//! Score summary for a finished round, with Replay and Home actions.
//!
//! `ResultState` tracks the highlighted button and how far the answer
//! breakdown is scrolled; the payload itself is borrowed from core state
//! every frame. The scroll offset is clamped during render, once the
//! viewport height is known.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::countdown::CountdownBudget;
use crate::core::result::ResultPayload;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultButton {
    #[default]
    Replay,
    Home,
}

/// Events emitted by the result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultEvent {
    Replay,
    Reset,
}

#[derive(Debug, Default)]
pub struct ResultState {
    pub selected: ResultButton,
    /// First breakdown line shown.
    pub scroll: u16,
}

impl ResultState {
    /// Keeps the last breakdown line at the bottom of the viewport at most.
    pub fn clamp_scroll(&mut self, content_height: usize, viewport_height: u16) {
        let max = content_height.saturating_sub(viewport_height as usize);
        self.scroll = self.scroll.min(u16::try_from(max).unwrap_or(u16::MAX));
    }
}

impl EventHandler for ResultState {
    type Event = ResultEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ResultEvent> {
        match event {
            TuiEvent::CursorLeft | TuiEvent::CursorRight => {
                self.selected = match self.selected {
                    ResultButton::Replay => ResultButton::Home,
                    ResultButton::Home => ResultButton::Replay,
                };
                None
            }
            TuiEvent::CursorUp => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            TuiEvent::Submit => Some(match self.selected {
                ResultButton::Replay => ResultEvent::Replay,
                ResultButton::Home => ResultEvent::Reset,
            }),
            TuiEvent::Char('r') => Some(ResultEvent::Replay),
            TuiEvent::Char('h') => Some(ResultEvent::Reset),
            _ => None,
        }
    }
}

/// Transient render wrapper for the result view.
pub struct ResultView<'a> {
    state: &'a mut ResultState,
    result: &'a ResultPayload,
}

impl<'a> ResultView<'a> {
    pub fn new(state: &'a mut ResultState, result: &'a ResultPayload) -> Self {
        Self { state, result }
    }

    fn button(&self, label: &'static str, button: ResultButton) -> Span<'static> {
        let style = if self.state.selected == button {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Span::styled(format!(" {label} "), style)
    }

    fn breakdown(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (i, detail) in self.result.details.iter().enumerate() {
            let (mark, color) = if detail.is_correct {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };
            let prefix = format!("{mark} {}. ", i + 1);
            let indent = " ".repeat(prefix.chars().count());
            let options = textwrap::Options::new(width.max(prefix.len() + 1))
                .initial_indent(&prefix)
                .subsequent_indent(&indent);
            for wrapped in textwrap::wrap(&detail.question, options) {
                lines.push(Line::from(Span::styled(
                    wrapped.into_owned(),
                    Style::default().fg(color),
                )));
            }

            let chosen = detail.chosen.as_deref().unwrap_or("(no answer)");
            let answer_line = if detail.is_correct {
                format!("{indent}{chosen}")
            } else {
                format!("{indent}{chosen} → {}", detail.correct_answer)
            };
            lines.push(Line::from(Span::styled(
                answer_line,
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines
    }
}

impl Component for ResultView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [summary_area, breakdown_area, buttons_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let verdict_color = if self.result.passed() {
            Color::Green
        } else {
            Color::Red
        };
        let summary = vec![
            Line::from(Span::styled(
                self.result.remark(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Score "),
                Span::styled(
                    self.result.score_line(),
                    Style::default().fg(verdict_color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  ({:.0}%)", self.result.percentage())),
            ]),
            Line::from(format!(
                "Time taken {}",
                CountdownBudget::from(self.result.time_taken)
            )),
        ];
        frame.render_widget(
            Paragraph::new(summary).alignment(Alignment::Center),
            summary_area,
        );

        let inner_width = breakdown_area.width.saturating_sub(2) as usize;
        let inner_height = breakdown_area.height.saturating_sub(2);
        let lines = self.breakdown(inner_width);
        let overflowing = lines.len() > inner_height as usize;
        self.state.clamp_scroll(lines.len(), inner_height);

        let title = if overflowing {
            " Answers (↑/↓ to scroll) "
        } else {
            " Answers "
        };
        let breakdown = Paragraph::new(lines)
            .scroll((self.state.scroll, 0))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(breakdown, breakdown_area);

        let buttons = Line::from(vec![
            self.button("Replay", ResultButton::Replay),
            Span::raw("   "),
            self.button("Home", ResultButton::Home),
        ])
        .centered();
        frame.render_widget(buttons, buttons_area);
    }
}
