use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct MenuItem {
    pub key: String,
    pub label: String,
    pub description: String,
}

impl MenuItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Vertical list of selectable rows. Selection state lives with the caller.
pub struct Menu<'a> {
    pub title: Option<String>,
    pub items: Vec<MenuItem>,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> Menu<'a> {
    pub fn new(items: Vec<MenuItem>, selected: usize, theme: &'a Theme) -> Self {
        Self {
            title: None,
            items,
            selected,
            theme,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Widget for &Menu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        if let Some(ref title) = self.title {
            block = block.title(format!(" {title} "));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let menu_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                self.items
                    .iter()
                    .map(|item| Constraint::Length(if item.description.is_empty() { 1 } else { 3 }))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (i, item) in self.items.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };

            let label_text = format!(" {indicator} [{key}] {label}", key = item.key, label = item.label);
            let mut lines = vec![Line::from(Span::styled(
                label_text,
                Style::default()
                    .fg(if is_selected { colors.accent() } else { colors.fg() })
                    .add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
            ))];
            if !item.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("     {}", item.description),
                    Style::default().fg(colors.text_muted()),
                )));
            }

            if i < menu_layout.len() {
                Paragraph::new(lines).render(menu_layout[i], buf);
            }
        }
    }
}
