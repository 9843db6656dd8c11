use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::content::notices::{ClaimStatus, FAKE_NEWS_ALERTS, VERIFY_TIPS};
use crate::profile::Language;
use crate::session::fact_check::FactCheckSession;
use crate::ui::input_line;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

pub struct FactCheckerView<'a> {
    pub session: &'a FactCheckSession,
    pub input: &'a LineInput,
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> FactCheckerView<'a> {
    pub fn new(
        session: &'a FactCheckSession,
        input: &'a LineInput,
        language: Language,
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            input,
            language,
            theme,
        }
    }
}

impl Widget for FactCheckerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lang = self.language.code();

        let block = Block::bordered()
            .title(format!(" {} ", t!("fact.title", locale = lang)))
            .border_style(Style::default().fg(colors.accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Min(4),
            ])
            .split(inner);

        Paragraph::new(Span::styled(
            t!("fact.prompt", locale = lang).to_string(),
            Style::default().fg(colors.text_muted()),
        ))
        .render(rows[0], buf);

        let placeholder = t!("fact.placeholder", locale = lang);
        let editable = !self.session.is_checking();
        Paragraph::new(input_line(self.input, editable, &placeholder, self.theme))
            .block(Block::bordered().border_style(Style::default().fg(if editable {
                colors.border_focused()
            } else {
                colors.border()
            })))
            .render(rows[1], buf);

        let (button, button_style) = if self.session.is_checking() {
            (
                t!("fact.checking", locale = lang),
                Style::default().fg(colors.text_muted()),
            )
        } else if self.input.is_blank() {
            (
                t!("fact.check", locale = lang),
                Style::default().fg(colors.text_muted()).bg(colors.bar_empty()),
            )
        } else {
            (
                t!("fact.check", locale = lang),
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )
        };
        Paragraph::new(Span::styled(format!("  {button}  "), button_style)).render(rows[2], buf);

        if let Some(verdict) = self.session.verdict() {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("⚠ {}", t!("fact.result", locale = lang)),
                    Style::default()
                        .fg(colors.warning())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(verdict.message, Style::default().fg(colors.fg()))),
            ])
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_style(Style::default().fg(colors.warning())))
            .render(rows[3], buf);
        }

        let mut lines = vec![Line::from(Span::styled(
            t!("fact.alerts", locale = lang).to_string(),
            Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
        ))];
        for alert in FAKE_NEWS_ALERTS {
            let color = match alert.status {
                ClaimStatus::Fake => colors.error(),
                ClaimStatus::PartiallyTrue => colors.warning(),
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" [{}] ", alert.status.label()), Style::default().fg(color)),
                Span::styled(alert.claim, Style::default().fg(colors.fg())),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", alert.description),
                Style::default().fg(colors.text_muted()),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            t!("fact.tips", locale = lang).to_string(),
            Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
        )));
        for (i, tip) in VERIFY_TIPS.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!(" {}. {tip}", i + 1),
                Style::default().fg(colors.fg()),
            )));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(rows[4], buf);
    }
}
