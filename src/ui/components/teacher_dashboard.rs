use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::content::notices::{FEATURED_ARTICLE, STRUGGLING_TOPICS, TEACHER_OVERVIEW};
use crate::profile::{Language, UserProfile};
use crate::ui::theme::Theme;

pub struct TeacherDashboard<'a> {
    pub profile: &'a UserProfile,
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> TeacherDashboard<'a> {
    pub fn new(profile: &'a UserProfile, language: Language, theme: &'a Theme) -> Self {
        Self {
            profile,
            language,
            theme,
        }
    }
}

impl Widget for TeacherDashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lang = self.language.code();
        let muted = Style::default().fg(colors.text_muted());
        let bold_accent = Style::default()
            .fg(colors.accent())
            .add_modifier(Modifier::BOLD);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Min(6),
            ])
            .split(area);

        let mut greeting = vec![Line::from(Span::styled(
            t!("teacher.greeting", locale = lang, name = self.profile.name).to_string(),
            bold_accent,
        ))];
        if let Some(ref school) = self.profile.school {
            greeting.push(Line::from(Span::styled(format!("🏫 {school}"), muted)));
        }
        Paragraph::new(greeting)
            .block(Block::bordered().border_style(Style::default().fg(colors.border())))
            .render(rows[0], buf);

        let stats = [
            ("👥", "teacher.students_helped", TEACHER_OVERVIEW.students_helped.to_string()),
            ("📝", "teacher.lesson_plans", TEACHER_OVERVIEW.lesson_plans.to_string()),
            ("❓", "teacher.quizzes", TEACHER_OVERVIEW.quizzes_made.to_string()),
            ("⏱", "teacher.hours_saved", format!("{:.1}", TEACHER_OVERVIEW.hours_saved)),
        ];
        let overview_block = Block::bordered()
            .title(format!(" {} ", t!("teacher.overview", locale = lang)))
            .border_style(Style::default().fg(colors.border()));
        let overview_inner = overview_block.inner(rows[1]);
        overview_block.render(rows[1], buf);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(overview_inner);
        for ((icon, key, value), col) in stats.into_iter().zip(cols.iter()) {
            Paragraph::new(vec![
                Line::from(Span::styled(format!("{icon} {value}"), bold_accent)),
                Line::from(Span::styled(t!(key, locale = lang).to_string(), muted)),
            ])
            .wrap(Wrap { trim: true })
            .render(*col, buf);
        }

        let mut insights = vec![Line::from(Span::styled(
            t!("teacher.struggling", locale = lang).to_string(),
            Style::default().fg(colors.fg()),
        ))];
        for topic in STRUGGLING_TOPICS {
            insights.push(Line::from(Span::styled(
                format!("  • {topic}"),
                Style::default().fg(colors.warning()),
            )));
        }
        insights.push(Line::from(""));
        insights.push(Line::from(vec![
            Span::styled(format!("{}: ", t!("teacher.article", locale = lang)), muted),
            Span::styled(FEATURED_ARTICLE, Style::default().fg(colors.highlight())),
        ]));
        if !self.profile.teaching_subjects.is_empty() {
            insights.push(Line::from(vec![
                Span::styled(format!("{}: ", t!("teacher.subjects", locale = lang)), muted),
                Span::styled(
                    self.profile.teaching_subjects.join(", "),
                    Style::default().fg(colors.fg()),
                ),
            ]));
        }
        if !self.profile.teaching_classes.is_empty() {
            insights.push(Line::from(vec![
                Span::styled(format!("{}: ", t!("teacher.classes", locale = lang)), muted),
                Span::styled(
                    self.profile.teaching_classes.join(", "),
                    Style::default().fg(colors.fg()),
                ),
            ]));
        }
        Paragraph::new(insights)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(format!(" {} ", t!("teacher.insights", locale = lang)))
                    .border_style(Style::default().fg(colors.border())),
            )
            .render(rows[2], buf);
    }
}
