use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::content::notices::{ClaimStatus, FakeNewsAlert, Notice};
use crate::profile::{Language, Progress, UserProfile};
use crate::ui::theme::Theme;

/// Four-counter summary, used on Home and as the side panel of other tabs.
pub struct ProgressCard<'a> {
    pub progress: &'a Progress,
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> ProgressCard<'a> {
    pub fn new(progress: &'a Progress, language: Language, theme: &'a Theme) -> Self {
        Self {
            progress,
            language,
            theme,
        }
    }
}

impl Widget for ProgressCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lang = self.language.code();

        let block = Block::bordered()
            .title(format!(" {} ", t!("home.progress", locale = lang)))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let stat = |icon: &str, key: &str, value: String| {
            Line::from(vec![
                Span::styled(format!(" {icon} "), Style::default().fg(colors.fg())),
                Span::styled(
                    value,
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", t!(key, locale = lang)),
                    Style::default().fg(colors.text_muted()),
                ),
            ])
        };

        let p = self.progress;
        let lines = vec![
            stat("⭐", "home.points", p.points.to_string()),
            stat("🔥", "home.streak", p.streak.to_string()),
            stat("🏆", "home.topics", p.topics_mastered.to_string()),
            stat("⏱", "home.hours", format!("{:.1}", p.hours_learned)),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

pub struct StudentHome<'a> {
    pub profile: &'a UserProfile,
    pub notice: Option<Notice>,
    pub alert: Option<&'a FakeNewsAlert>,
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> StudentHome<'a> {
    pub fn new(
        profile: &'a UserProfile,
        notice: Option<Notice>,
        alert: Option<&'a FakeNewsAlert>,
        language: Language,
        theme: &'a Theme,
    ) -> Self {
        Self {
            profile,
            notice,
            alert,
            language,
            theme,
        }
    }
}

impl Widget for StudentHome<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lang = self.language.code();

        let mut constraints = vec![Constraint::Length(4)];
        if self.notice.is_some() {
            constraints.push(Constraint::Length(4));
        }
        constraints.push(Constraint::Length(6));
        if self.alert.is_some() {
            constraints.push(Constraint::Length(5));
        }
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);
        let mut row = rows.iter().copied();

        if let Some(greeting_area) = row.next() {
            let greeting = vec![
                Line::from(Span::styled(
                    t!("home.greeting", locale = lang, name = self.profile.name).to_string(),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "🤖 {}",
                        t!("home.companion", locale = lang, nickname = self.profile.nickname)
                    ),
                    Style::default().fg(colors.fg()),
                )),
            ];
            Paragraph::new(greeting)
                .block(Block::bordered().border_style(Style::default().fg(colors.border())))
                .render(greeting_area, buf);
        }

        if let Some(notice) = self.notice
            && let Some(notice_area) = row.next()
        {
            let lines = vec![
                Line::from(Span::styled(
                    format!("{} {}", notice.emoji, notice.text),
                    Style::default()
                        .fg(colors.highlight())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    notice.subtext,
                    Style::default().fg(colors.text_muted()),
                )),
            ];
            Paragraph::new(lines)
                .block(Block::bordered().border_style(Style::default().fg(colors.highlight())))
                .render(notice_area, buf);
        }

        if let Some(progress_area) = row.next() {
            ProgressCard::new(&self.profile.progress(), self.language, self.theme)
                .render(progress_area, buf);
        }

        if let Some(alert) = self.alert
            && let Some(alert_area) = row.next()
        {
            let status_color = match alert.status {
                ClaimStatus::Fake => colors.error(),
                ClaimStatus::PartiallyTrue => colors.warning(),
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("\"{}\" ", alert.claim),
                        Style::default().fg(colors.fg()),
                    ),
                    Span::styled(
                        alert.status.label(),
                        Style::default()
                            .fg(status_color)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    alert.description,
                    Style::default().fg(colors.text_muted()),
                )),
            ];
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .title(format!(" ⚠ {} ", t!("home.alert", locale = lang)))
                        .border_style(Style::default().fg(status_color)),
                )
                .render(alert_area, buf);
        }

        if let Some(cta_area) = row.next() {
            Paragraph::new(Line::from(Span::styled(
                format!(
                    "  {}",
                    t!("home.start_learning", locale = lang, nickname = self.profile.nickname)
                ),
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )))
            .block(Block::bordered().border_style(Style::default().fg(colors.accent())))
            .render(cta_area, buf);
        }
    }
}
