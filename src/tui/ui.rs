use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, SessionState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, LandingPage, Loader, Quiz, ResultView, TitleBar};

/// Renders the page chrome and whichever view the session state selects.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.source.name().to_string(), app.status_message.clone())
        .render(frame, title_area);

    let source = app.source.name();
    match &app.state {
        SessionState::Idle => {
            LandingPage::new(source, app.budget, None).render(frame, main_area);
        }
        SessionState::Failed { message } => {
            LandingPage::new(source, app.budget, Some(message.as_str())).render(frame, main_area);
        }
        SessionState::Loading { message, .. } => {
            Loader::new(message, spinner_frame).render(frame, main_area);
        }
        SessionState::Active { .. } => {
            if let Some(quiz) = tui.quiz.as_mut() {
                Quiz::new(quiz).render(frame, main_area);
            }
        }
        SessionState::Completed { result, .. } => {
            ResultView::new(&mut tui.result, result).render(frame, main_area);
        }
    }

    HelpBar {
        hints: help_text(&app.state),
    }
    .render(frame, help_area);
}

fn help_text(state: &SessionState) -> &'static str {
    match state {
        SessionState::Idle | SessionState::Failed { .. } => "Enter Start  Esc Quit",
        SessionState::Loading { .. } => "Esc Quit",
        SessionState::Active { .. } => "↑/↓ or 1-9 Select  Enter Answer  Esc Quit",
        SessionState::Completed { .. } => "↑/↓ Scroll  ←/→ Choose  Enter Confirm  r Replay  h Home  Esc Quit",
    }
}
