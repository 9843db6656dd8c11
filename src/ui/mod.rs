pub mod components;
pub mod layout;
pub mod line_input;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use rust_i18n::t;

use crate::app::{App, ProfilePane};
use crate::content::notices::HOME_ALERT;
use crate::content::quiz_bank::CATEGORIES;
use crate::nav::{DashboardView, Screen, StudentView};
use crate::profile::UserType;
use crate::session::chat::ChatMode;
use components::chat_view::ChatView;
use components::fact_checker::FactCheckerView;
use components::menu::{Menu, MenuItem};
use components::profile_view::ProfileOverview;
use components::quiz_view::QuizView;
use components::setup_form::SetupFormView;
use components::student_home::{ProgressCard, StudentHome};
use components::tab_bar::TabBar;
use components::teacher_dashboard::TeacherDashboard;
use components::welcome::Welcome;
use components::wellness::WellnessView;
use layout::{AppLayout, pack_hint_lines};
use line_input::LineInput;
use theme::Theme;

/// Text field with a block cursor when focused, or the placeholder when empty.
pub fn input_line(input: &LineInput, focused: bool, placeholder: &str, theme: &Theme) -> Line<'static> {
    let colors = &theme.colors;
    if input.value().is_empty() && !focused {
        return Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(colors.text_muted()),
        ));
    }
    let (before, cursor, after) = input.render_parts();
    let text_style = Style::default().fg(colors.fg());
    let mut spans = vec![Span::styled(before.to_string(), text_style)];
    if focused {
        let cursor_style = Style::default().fg(colors.bg()).bg(colors.accent());
        spans.push(Span::styled(cursor.unwrap_or(' ').to_string(), cursor_style));
    } else if let Some(ch) = cursor {
        spans.push(Span::styled(ch.to_string(), text_style));
    }
    spans.push(Span::styled(after.to_string(), text_style));
    Line::from(spans)
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let with_tabs = app.student_view().is_some();
    let hints = footer_hints(app);
    let hint_refs: Vec<&str> = hints.iter().map(String::as_str).collect();
    let footer_lines = pack_hint_lines(&hint_refs, area.width as usize);
    let layout = AppLayout::new(area, with_tabs, footer_lines.len() as u16);

    render_header(frame, app, layout.header);
    if let (Some(tabs_area), Some(view)) = (layout.tabs, app.student_view()) {
        let lang = app.language();
        frame.render_widget(TabBar::new(view, lang, app.theme), tabs_area);
    }

    match app.screen() {
        Screen::Welcome => render_welcome(frame, app, area_without_side(&layout)),
        Screen::UserTypeSelection => render_role_select(frame, app, area_without_side(&layout)),
        Screen::Setup => render_setup(frame, app, area_without_side(&layout)),
        Screen::Dashboard => render_dashboard(frame, app, &layout),
    }

    let footer = Paragraph::new(
        footer_lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.text_muted()))))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(footer, layout.footer);
}

fn area_without_side(layout: &AppLayout) -> Rect {
    match layout.side {
        Some(side) => layout.main.union(side),
        None => layout.main,
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language().code();
    let mut spans = vec![Span::styled(
        format!(" {} ", t!("app.name", locale = lang)),
        Style::default()
            .fg(colors.header_fg())
            .bg(colors.header_bg())
            .add_modifier(Modifier::BOLD),
    )];
    let detail = match (app.screen(), app.profile()) {
        (Screen::Dashboard, Some(profile)) => match profile.user_type {
            Some(UserType::Student) => {
                let progress = profile.progress();
                format!(
                    " | {} | ⭐ {} | 🔥 {}",
                    profile.name, progress.points, progress.streak
                )
            }
            _ => format!(" | {}", profile.name),
        },
        _ => format!(" | {}", t!("app.tagline", locale = lang)),
    };
    spans.push(Span::styled(
        detail,
        Style::default().fg(colors.header_fg()).bg(colors.header_bg()),
    ));
    let header = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_welcome(frame: &mut Frame, app: &App, area: Rect) {
    let centered = layout::centered_rect(60, 90, area);
    frame.render_widget(
        Welcome::new(app.nav.language(), app.welcome_selected, app.theme),
        centered,
    );
}

fn render_role_select(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.language().code();
    let items = vec![
        MenuItem::new(
            "1",
            format!("👨‍🎓 {}", t!("role.student", locale = lang)),
            t!("role.student_desc", locale = lang),
        ),
        MenuItem::new(
            "2",
            format!("👨‍🏫 {}", t!("role.teacher", locale = lang)),
            t!("role.teacher_desc", locale = lang),
        ),
    ];
    let menu = Menu::new(items, app.role_selected, app.theme).title(format!(
        "{} {}",
        t!("role.title", locale = lang),
        t!("role.question", locale = lang)
    ));
    let centered = layout::centered_rect(60, 40, area);
    frame.render_widget(&menu, centered);
}

fn render_setup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref form) = app.setup else {
        return;
    };
    let centered = layout::centered_rect(70, 95, area);
    frame.render_widget(
        SetupFormView::new(
            form,
            app.setup_focus,
            app.setup_option,
            &app.setup_input,
            app.language(),
            app.theme,
        ),
        centered,
    );
}

fn render_dashboard(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let Some(profile) = app.profile() else {
        return;
    };
    let lang = app.language();

    match app.nav.view() {
        Some(DashboardView::Teacher) => {
            frame.render_widget(
                TeacherDashboard::new(profile, lang, app.theme),
                area_without_side(layout),
            );
        }
        Some(DashboardView::Student(view)) => {
            let main = if view == StudentView::Home {
                area_without_side(layout)
            } else {
                if let Some(side) = layout.side {
                    frame.render_widget(ProgressCard::new(&profile.progress(), lang, app.theme), side);
                }
                layout.main
            };
            render_student_view(frame, app, view, main);
        }
        None => {}
    }
}

fn render_student_view(frame: &mut Frame, app: &App, view: StudentView, area: Rect) {
    let Some(profile) = app.profile() else {
        return;
    };
    let lang = app.language();
    let theme = app.theme;

    match view {
        StudentView::Home => {
            let notice = (!app.notice_dismissed).then_some(app.notice);
            let alert = (!app.alert_dismissed).then_some(&HOME_ALERT);
            frame.render_widget(StudentHome::new(profile, notice, alert, lang, theme), area);
        }
        StudentView::Chat => {
            if let Some(ref chat) = app.chat {
                frame.render_widget(
                    ChatView::new(chat, &app.chat_input, &profile.nickname, lang, theme),
                    area,
                );
                if let Some(selected) = app.mode_picker {
                    render_mode_picker(frame, app, selected, area);
                }
            }
        }
        StudentView::Practice => match app.quiz {
            Some(ref quiz) => frame.render_widget(QuizView::new(quiz, lang, theme), area),
            None => {
                let items = CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        let topics = c
                            .topics
                            .iter()
                            .map(|topic| {
                                format!(
                                    "{} ({})",
                                    topic.name,
                                    t!("practice.questions", locale = lang.code(), count = topic.questions)
                                )
                            })
                            .collect::<Vec<_>>()
                            .join(" · ");
                        MenuItem::new((i + 1).to_string(), format!("{} {}", c.icon, c.name), topics)
                    })
                    .collect();
                let menu = Menu::new(items, app.practice_selected, theme)
                    .title(t!("practice.title", locale = lang.code()));
                frame.render_widget(&menu, area);
            }
        },
        StudentView::Profile => match app.profile_pane {
            ProfilePane::Overview => frame.render_widget(
                ProfileOverview::new(
                    profile,
                    app.profile_selected,
                    app.nickname_edit.as_ref(),
                    lang,
                    theme,
                ),
                area,
            ),
            ProfilePane::Wellness => frame.render_widget(WellnessView::new(lang, theme), area),
            ProfilePane::FactChecker => {
                if let Some(ref fc) = app.fact_check {
                    frame.render_widget(FactCheckerView::new(fc, &app.claim_input, lang, theme), area);
                }
            }
        },
    }
}

fn render_mode_picker(frame: &mut Frame, app: &App, selected: usize, area: Rect) {
    let lang = app.language().code();
    let items = ChatMode::ALL
        .iter()
        .enumerate()
        .map(|(i, m)| {
            MenuItem::new(
                (i + 1).to_string(),
                format!("{} {}", m.icon(), m.name()),
                m.description(),
            )
        })
        .collect();
    let menu = Menu::new(items, selected, app.theme).title(t!("chat.modes", locale = lang));
    let popup = layout::centered_rect(60, 80, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(&menu, popup);
}

fn footer_hints(app: &App) -> Vec<String> {
    let lang = app.language().code();
    let h = |key: &str| t!(key, locale = lang).to_string();
    let mut hints = Vec::new();

    match app.screen() {
        Screen::Welcome => {
            hints.extend([h("hints.language"), h("hints.move"), h("hints.select")]);
        }
        Screen::UserTypeSelection => hints.extend([h("hints.move"), h("hints.select")]),
        Screen::Setup => {
            hints.extend([h("hints.next_field"), h("hints.cycle"), h("hints.toggle")]);
            hints.push(h("hints.submit"));
        }
        Screen::Dashboard => match app.nav.view() {
            Some(DashboardView::Teacher) => hints.push(h("hints.logout")),
            Some(DashboardView::Student(view)) => {
                match view {
                    StudentView::Home => hints.extend([h("hints.dismiss"), h("hints.select")]),
                    StudentView::Chat if app.mode_picker.is_some() => {
                        hints.extend([h("hints.move"), h("hints.select"), h("hints.back")])
                    }
                    StudentView::Chat => hints.extend([h("hints.send"), h("hints.modes"), h("hints.back")]),
                    StudentView::Practice => match app.quiz {
                        Some(ref quiz) if quiz.is_completed() => {
                            hints.extend([h("hints.retry"), h("hints.back")])
                        }
                        Some(_) => hints.extend([
                            h("hints.answer"),
                            h("hints.submit"),
                            h("hints.hint"),
                            h("hints.back"),
                        ]),
                        None => hints.extend([h("hints.move"), h("hints.select")]),
                    },
                    StudentView::Profile => match app.profile_pane {
                        ProfilePane::Overview if app.nickname_edit.is_none() => {
                            hints.extend([h("hints.move"), h("hints.select"), h("hints.logout")])
                        }
                        _ => hints.extend([h("hints.submit"), h("hints.back")]),
                    },
                }
                hints.push(h("hints.tabs"));
            }
            None => {}
        },
    }
    hints.push(h("hints.quit"));
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::config::Config;
    use crate::profile::UserType;
    use crate::store::profile_store::ProfileStore;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_every_screen_renders() {
        let mut app = App::new(Config::default(), ProfileStore::in_memory());
        assert!(draw(&app).contains("MySaathi"));
        app.login().unwrap();
        draw(&app);
        app.select_role(UserType::Student).unwrap();
        app.setup_input.set("Asha");
        draw(&app);
        app.submit_setup().unwrap();
        assert!(draw(&app).contains("Asha"));

        for view in StudentView::ALL {
            app.select_student_view(view).unwrap();
            draw(&app);
        }
        app.select_student_view(StudentView::Practice).unwrap();
        app.start_practice(1);
        draw(&app);
        app.select_student_view(StudentView::Profile).unwrap();
        app.open_wellness();
        draw(&app);
        app.open_fact_checker();
        draw(&app);
    }

    #[test]
    fn test_teacher_dashboard_renders() {
        let mut app = App::new(Config::default(), ProfileStore::in_memory());
        app.login().unwrap();
        app.select_role(UserType::Teacher).unwrap();
        app.setup_input.set("Meena");
        app.submit_setup().unwrap();
        assert!(draw(&app).contains("Meena"));
    }

    #[test]
    fn test_hints_follow_language() {
        let mut app = App::new(Config::default(), ProfileStore::in_memory());
        app.cycle_language(true);
        let hints = footer_hints(&app);
        assert!(hints.iter().any(|h| h.contains("बाहर")));
    }
}
