use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::{ActionError, App, ProfilePane};
use crate::content::quiz_bank::CATEGORIES;
use crate::nav::{DashboardView, Screen, StudentView};
use crate::profile::UserType;
use crate::session::chat::ChatMode;
use crate::session::setup::SetupField;
use crate::ui::components::profile_view::{PROFILE_ACTIONS, ProfileAction};
use crate::ui::components::setup_form::toggle_options;
use crate::ui::line_input::InputResult;

/// Route one key press to the active screen.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let result = match app.screen() {
        Screen::Welcome => handle_welcome_key(app, key),
        Screen::UserTypeSelection => handle_role_key(app, key),
        Screen::Setup => handle_setup_key(app, key),
        Screen::Dashboard => match app.nav.view() {
            Some(DashboardView::Teacher) => handle_teacher_key(app, key),
            Some(DashboardView::Student(view)) => handle_student_key(app, view, key, now),
            None => Ok(()),
        },
    };
    if let Err(e) = result {
        debug!(error = %e, "key action rejected");
    }
}

fn handle_welcome_key(app: &mut App, key: KeyEvent) -> Result<(), ActionError> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.cycle_language(false),
        KeyCode::Right | KeyCode::Char('l') => app.cycle_language(true),
        KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
            app.welcome_selected = 1 - app.welcome_selected.min(1);
        }
        KeyCode::Char('1') => {
            app.welcome_selected = 0;
            app.login()?;
        }
        KeyCode::Char('2') => {
            app.welcome_selected = 1;
            app.login()?;
        }
        KeyCode::Enter => app.login()?,
        _ => {}
    }
    Ok(())
}

fn handle_role_key(app: &mut App, key: KeyEvent) -> Result<(), ActionError> {
    const ROLES: [UserType; 2] = [UserType::Student, UserType::Teacher];
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Char('j')
        | KeyCode::Char('k') => {
            app.role_selected = 1 - app.role_selected.min(1);
        }
        KeyCode::Char('1') => app.select_role(UserType::Student)?,
        KeyCode::Char('2') => app.select_role(UserType::Teacher)?,
        KeyCode::Enter => app.select_role(ROLES[app.role_selected.min(1)])?,
        _ => {}
    }
    Ok(())
}

fn handle_setup_key(app: &mut App, key: KeyEvent) -> Result<(), ActionError> {
    let Some(field) = app.setup_field() else {
        return Ok(());
    };

    if field.is_text() {
        match key.code {
            KeyCode::Up => app.setup_move_focus(false),
            KeyCode::Down => app.setup_move_focus(true),
            _ => match app.setup_input.handle(key) {
                InputResult::Continue => app.setup_sync_input(),
                InputResult::Submit | InputResult::FocusNext => app.setup_move_focus(true),
                InputResult::FocusPrev => app.setup_move_focus(false),
                InputResult::Cancel => {}
            },
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::BackTab => app.setup_move_focus(false),
        KeyCode::Down | KeyCode::Tab => app.setup_move_focus(true),
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            let option_count = toggle_options(field).len();
            let Some(form) = app.setup.as_mut() else {
                return Ok(());
            };
            match field {
                SetupField::Grade => form.cycle_grade(forward),
                SetupField::Nickname => form.cycle_nickname(forward),
                SetupField::Subjects | SetupField::Classes if option_count > 0 => {
                    app.setup_option = if forward {
                        (app.setup_option + 1) % option_count
                    } else {
                        (app.setup_option + option_count - 1) % option_count
                    };
                }
                _ => {}
            }
        }
        KeyCode::Char(' ') | KeyCode::Enter
            if matches!(field, SetupField::Subjects | SetupField::Classes) =>
        {
            let option = toggle_options(field).get(app.setup_option).copied();
            if let (Some(option), Some(form)) = (option, app.setup.as_mut()) {
                match field {
                    SetupField::Subjects => form.toggle_subject(option),
                    _ => form.toggle_class(option),
                };
            }
        }
        KeyCode::Enter if field == SetupField::Submit => app.submit_setup()?,
        KeyCode::Enter => app.setup_move_focus(true),
        _ => {}
    }
    Ok(())
}

fn handle_teacher_key(app: &mut App, key: KeyEvent) -> Result<(), ActionError> {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('L') => app.logout()?,
        _ => {}
    }
    Ok(())
}

/// Whether a text field on the student dashboard owns the keyboard.
fn text_focused(app: &App, view: StudentView) -> bool {
    match view {
        StudentView::Chat => app.mode_picker.is_none(),
        StudentView::Profile => {
            app.nickname_edit.is_some() || app.profile_pane == ProfilePane::FactChecker
        }
        _ => false,
    }
}

fn cycle_tab(app: &mut App, view: StudentView, forward: bool) -> Result<(), ActionError> {
    let all = StudentView::ALL;
    let idx = all.iter().position(|v| *v == view).unwrap_or(0);
    let next = if forward {
        (idx + 1) % all.len()
    } else {
        (idx + all.len() - 1) % all.len()
    };
    app.select_student_view(all[next])
}

fn handle_student_key(
    app: &mut App,
    view: StudentView,
    key: KeyEvent,
    now: Instant,
) -> Result<(), ActionError> {
    let in_quiz = view == StudentView::Practice && app.quiz.is_some();
    if !text_focused(app, view) && !in_quiz {
        match key.code {
            KeyCode::Char('q') => {
                app.should_quit = true;
                return Ok(());
            }
            KeyCode::Char(ch @ '1'..='4') => {
                let idx = (ch as usize) - ('1' as usize);
                return app.select_student_view(StudentView::ALL[idx]);
            }
            KeyCode::Tab => return cycle_tab(app, view, true),
            KeyCode::BackTab => return cycle_tab(app, view, false),
            _ => {}
        }
    }

    match view {
        StudentView::Home => handle_home_key(app, key),
        StudentView::Chat => handle_chat_key(app, view, key, now),
        StudentView::Practice => handle_practice_key(app, key, now),
        StudentView::Profile => handle_profile_key(app, view, key, now),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) -> Result<(), ActionError> {
    match key.code {
        KeyCode::Char('d') => app.dismiss_notice(),
        KeyCode::Char('x') => app.dismiss_alert(),
        KeyCode::Enter => app.select_student_view(StudentView::Chat)?,
        _ => {}
    }
    Ok(())
}

fn handle_chat_key(
    app: &mut App,
    view: StudentView,
    key: KeyEvent,
    now: Instant,
) -> Result<(), ActionError> {
    if let Some(selected) = app.mode_picker {
        let count = ChatMode::ALL.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                app.mode_picker = Some((selected + count - 1) % count);
            }
            KeyCode::Down | KeyCode::Char('j') => app.mode_picker = Some((selected + 1) % count),
            KeyCode::Enter => app.switch_chat_mode(ChatMode::ALL[selected.min(count - 1)]),
            KeyCode::Char(ch @ '1'..='5') => {
                app.switch_chat_mode(ChatMode::ALL[(ch as usize) - ('1' as usize)]);
            }
            KeyCode::Esc | KeyCode::F(2) => app.mode_picker = None,
            _ => {}
        }
        return Ok(());
    }

    if key.code == KeyCode::F(2) {
        let current = app.chat.as_ref().map(|c| c.mode()).unwrap_or_default();
        app.mode_picker = ChatMode::ALL.iter().position(|m| *m == current).or(Some(0));
        return Ok(());
    }

    match app.chat_input.handle(key) {
        InputResult::Submit => app.send_chat(now),
        InputResult::Cancel => app.select_student_view(StudentView::Home)?,
        InputResult::FocusNext => cycle_tab(app, view, true)?,
        InputResult::FocusPrev => cycle_tab(app, view, false)?,
        InputResult::Continue => {}
    }
    Ok(())
}

fn handle_practice_key(app: &mut App, key: KeyEvent, now: Instant) -> Result<(), ActionError> {
    let Some(quiz) = app.quiz.as_mut() else {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                app.practice_selected = app.practice_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.practice_selected = (app.practice_selected + 1).min(CATEGORIES.len() - 1);
            }
            KeyCode::Enter => app.start_practice(app.practice_selected),
            _ => {}
        }
        return Ok(());
    };

    match key.code {
        KeyCode::Esc => app.leave_quiz(),
        KeyCode::Char('r') if quiz.is_completed() => app.retry_quiz()?,
        KeyCode::Char('h') => quiz.toggle_hint(),
        KeyCode::Char(ch @ '1'..='9') => {
            quiz.select_option((ch as usize) - ('1' as usize));
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let prev = quiz.selected().map(|s| s.saturating_sub(1)).unwrap_or(0);
            quiz.select_option(prev);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let next = quiz.selected().map(|s| s + 1).unwrap_or(0);
            quiz.select_option(next);
        }
        KeyCode::Enter => app.submit_answer(now)?,
        _ => {}
    }
    Ok(())
}

fn run_profile_action(app: &mut App, action: ProfileAction) -> Result<(), ActionError> {
    match action {
        ProfileAction::ChangeNickname => app.start_nickname_edit(),
        ProfileAction::Wellness => app.open_wellness(),
        ProfileAction::FactChecker => app.open_fact_checker(),
        ProfileAction::Logout => app.logout()?,
    }
    Ok(())
}

fn handle_profile_key(
    app: &mut App,
    view: StudentView,
    key: KeyEvent,
    now: Instant,
) -> Result<(), ActionError> {
    match app.profile_pane {
        ProfilePane::Overview => {
            if let Some(input) = app.nickname_edit.as_mut() {
                match input.handle(key) {
                    InputResult::Submit => app.finish_nickname_edit(),
                    InputResult::Cancel => app.nickname_edit = None,
                    _ => {}
                }
                return Ok(());
            }
            let count = PROFILE_ACTIONS.len();
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    app.profile_selected = (app.profile_selected + count - 1) % count;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    app.profile_selected = (app.profile_selected + 1) % count;
                }
                KeyCode::Enter => {
                    run_profile_action(app, PROFILE_ACTIONS[app.profile_selected.min(count - 1)])?
                }
                KeyCode::Esc => app.select_student_view(StudentView::Home)?,
                KeyCode::Char(ch) => {
                    let action = PROFILE_ACTIONS
                        .iter()
                        .find(|a| a.key().starts_with(ch))
                        .copied();
                    if let Some(action) = action {
                        run_profile_action(app, action)?;
                    }
                }
                _ => {}
            }
        }
        ProfilePane::Wellness => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
                app.back_to_profile();
            }
        }
        ProfilePane::FactChecker => match app.claim_input.handle(key) {
            InputResult::Submit => app.check_claim(now),
            InputResult::Cancel => app.back_to_profile(),
            InputResult::FocusNext => cycle_tab(app, view, true)?,
            InputResult::FocusPrev => cycle_tab(app, view, false)?,
            InputResult::Continue => {}
        },
    }
    Ok(())
}
