use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Tabs, Widget};
use rust_i18n::t;

use crate::nav::StudentView;
use crate::profile::Language;
use crate::ui::theme::Theme;

pub struct TabBar<'a> {
    pub view: StudentView,
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(view: StudentView, language: Language, theme: &'a Theme) -> Self {
        Self {
            view,
            language,
            theme,
        }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let titles: Vec<String> = StudentView::ALL
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{} {}", i + 1, t!(v.label_key(), locale = self.language.code())))
            .collect();
        let selected = StudentView::ALL
            .iter()
            .position(|v| *v == self.view)
            .unwrap_or(0);

        Tabs::new(titles)
            .select(selected)
            .block(Block::bordered().border_style(Style::default().fg(colors.border())))
            .style(Style::default().fg(colors.text_muted()))
            .highlight_style(
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│")
            .render(area, buf);
    }
}
