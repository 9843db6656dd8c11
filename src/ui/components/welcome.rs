use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::profile::Language;
use crate::ui::theme::Theme;

pub struct Welcome<'a> {
    pub language: Language,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> Welcome<'a> {
    pub fn new(language: Language, selected: usize, theme: &'a Theme) -> Self {
        Self {
            language,
            selected,
            theme,
        }
    }
}

impl Widget for Welcome<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lang = self.language.code();

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let button = |i: usize, label: String| {
            let style = if i == self.selected {
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.accent())
            };
            Line::from(Span::styled(format!("  {label}  "), style))
        };

        let mut language_spans = Vec::new();
        for language in Language::ALL {
            let style = if language == self.language {
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            language_spans.push(Span::styled(format!(" {} ", language.label()), style));
            language_spans.push(Span::raw("  "));
        }
        language_spans.pop();

        let lines = vec![
            Line::from(""),
            Line::from("🤖"),
            Line::from(Span::styled(
                t!("app.name", locale = lang).to_string(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                t!("app.tagline", locale = lang).to_string(),
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                t!("welcome.blurb", locale = lang).to_string(),
                Style::default().fg(colors.text_muted()),
            )),
            Line::from(""),
            button(0, format!("📱 {}", t!("welcome.login_phone", locale = lang))),
            Line::from(""),
            button(1, format!("✉ {}", t!("welcome.login_email", locale = lang))),
            Line::from(""),
            Line::from(Span::styled(
                format!("🌐 {}", t!("welcome.choose_language", locale = lang)),
                Style::default().fg(colors.fg()),
            )),
            Line::from(language_spans),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
