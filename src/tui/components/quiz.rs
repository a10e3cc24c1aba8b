//! # Quiz Component
//!
//! Presents one question at a time with its shuffled options and the
//! countdown for the whole round.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `QuizState` lives in `TuiState` for the duration of a round
//! - `Quiz` is created each frame with borrowed state
//!
//! The state emits exactly one `QuizEvent::Finished` per round: either when
//! the last question is answered or when the countdown reaches zero.

use std::time::Duration;

use log::{debug, info};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, List, ListItem, ListState, Padding, Paragraph};

use crate::core::countdown::{Countdown, CountdownBudget};
use crate::core::question::Question;
use crate::core::result::ResultPayload;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for one round of the quiz.
pub struct QuizState {
    /// The `App::round` this state was created for.
    pub round: u64,
    questions: Vec<Question>,
    pub current: usize,
    pub selected: usize,
    pub answers: Vec<Option<String>>,
    pub countdown: Countdown,
    list_state: ListState,
    finished: bool,
}

/// Events emitted by the quiz.
#[derive(Debug, PartialEq)]
pub enum QuizEvent {
    Finished(ResultPayload),
}

impl QuizState {
    pub fn new(round: u64, questions: Vec<Question>, budget: CountdownBudget) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            round,
            answers: vec![None; questions.len()],
            questions,
            current: 0,
            selected: 0,
            countdown: Countdown::new(budget),
            list_state,
            finished: false,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the countdown. Finishes the round when time runs out.
    pub fn tick(&mut self, elapsed: Duration) -> Option<QuizEvent> {
        if self.finished {
            return None;
        }
        if self.countdown.tick(elapsed) {
            info!("Countdown expired on question {}/{}", self.current + 1, self.total());
            return self.finish();
        }
        None
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    /// Records the highlighted option and moves to the next question.
    fn answer(&mut self) -> Option<QuizEvent> {
        let chosen = self.current_question()?.options.get(self.selected)?.clone();
        debug!("Answered question {} with option {}", self.current + 1, self.selected);
        self.answers[self.current] = Some(chosen);
        self.current += 1;
        self.select(0);

        if self.current >= self.total() {
            return self.finish();
        }
        None
    }

    fn finish(&mut self) -> Option<QuizEvent> {
        if self.finished {
            return None;
        }
        self.finished = true;
        let result = ResultPayload::tally(&self.questions, &self.answers, self.countdown.elapsed());
        Some(QuizEvent::Finished(result))
    }
}

impl EventHandler for QuizState {
    type Event = QuizEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<QuizEvent> {
        if self.finished {
            return None;
        }
        let count = self.option_count();
        match event {
            TuiEvent::CursorUp if count > 0 => {
                self.select(self.selected.checked_sub(1).unwrap_or(count - 1));
                None
            }
            TuiEvent::CursorDown if count > 0 => {
                self.select((self.selected + 1) % count);
                None
            }
            TuiEvent::Char(c) => {
                // 1-9 jump straight to an option
                let index = c.to_digit(10)? as usize;
                if (1..=count).contains(&index) {
                    self.select(index - 1);
                }
                None
            }
            TuiEvent::Submit => self.answer(),
            _ => None,
        }
    }
}

/// Transient render wrapper for the quiz view.
pub struct Quiz<'a> {
    state: &'a mut QuizState,
}

impl<'a> Quiz<'a> {
    pub fn new(state: &'a mut QuizState) -> Self {
        Self { state }
    }
}

impl Component for Quiz<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(question) = self.state.current_question() else {
            return;
        };

        let inner_width = area.width.saturating_sub(4).max(1) as usize;
        let wrapped: Vec<Line> = textwrap::wrap(&question.text, inner_width)
            .into_iter()
            .map(|l| Line::from(l.into_owned()))
            .collect();
        let question_height = wrapped.len() as u16 + 2;

        let [header_area, timer_area, question_area, options_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(question_height),
            Constraint::Min(0),
        ])
        .areas(area);

        let header = Line::from(vec![
            Span::styled(
                format!("Question {}/{}", self.state.current + 1, self.state.total()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {}", question.category, question.difficulty),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(header, header_area);

        let ratio = self.state.countdown.ratio_remaining().clamp(0.0, 1.0);
        let gauge_color = if ratio > 0.25 { Color::Green } else { Color::Red };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(gauge_color))
            .ratio(ratio)
            .label(format!("Time left {}", self.state.countdown.remaining_budget()));
        frame.render_widget(gauge, timer_area);

        let paragraph = Paragraph::new(wrapped).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(paragraph, question_area);

        let items: Vec<ListItem> = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| ListItem::new(format!("{}. {}", i + 1, option)))
            .collect();
        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, options_area, &mut self.state.list_state);
    }
}
