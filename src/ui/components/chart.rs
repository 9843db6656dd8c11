use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Widget};

use crate::ui::theme::Theme;

/// Weekly study hours as vertical bars, one per day.
pub struct StudyHoursChart<'a> {
    pub title: String,
    pub days: &'a [&'a str],
    pub hours: &'a [f64],
    pub theme: &'a Theme,
}

impl<'a> StudyHoursChart<'a> {
    pub fn new(title: &str, days: &'a [&'a str], hours: &'a [f64], theme: &'a Theme) -> Self {
        Self {
            title: title.to_string(),
            days,
            hours,
            theme,
        }
    }
}

impl Widget for StudyHoursChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.border()));

        // Bars take integers; chart tenths of an hour.
        let bars: Vec<Bar> = self
            .days
            .iter()
            .zip(self.hours)
            .map(|(day, hours)| {
                Bar::default()
                    .value((hours * 10.0).round() as u64)
                    .label(Line::from(*day))
                    .text_value(format!("{hours:.1}"))
                    .style(Style::default().fg(colors.accent()))
                    .value_style(Style::default().fg(colors.bg()).bg(colors.accent()))
            })
            .collect();

        let max = self
            .hours
            .iter()
            .fold(0.0f64, |m, h| m.max(*h))
            .max(1.0);

        BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1)
            .max((max * 10.0).ceil() as u64)
            .label_style(Style::default().fg(colors.text_muted()))
            .render(area, buf);
    }
}
