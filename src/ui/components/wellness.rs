use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::content::notices::{
    CHECK_INS, STUDY_HOURS, WEEK_DAYS, WELLNESS_SCORE, WELLNESS_SUGGESTIONS, average_study_hours,
};
use crate::profile::Language;
use crate::ui::components::chart::StudyHoursChart;
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::theme::Theme;

pub struct WellnessView<'a> {
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> WellnessView<'a> {
    pub fn new(language: Language, theme: &'a Theme) -> Self {
        Self { language, theme }
    }
}

impl Widget for WellnessView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lang = self.language.code();

        let block = Block::bordered()
            .title(format!(" {} ", t!("wellness.title", locale = lang)))
            .border_style(Style::default().fg(colors.accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(6),
            ])
            .split(inner);

        StudyHoursChart::new(
            &t!("wellness.week", locale = lang),
            &WEEK_DAYS,
            &STUDY_HOURS,
            self.theme,
        )
        .render(rows[0], buf);

        let average = format!("{:.1}", average_study_hours());
        Paragraph::new(Line::from(Span::styled(
            t!("wellness.average", locale = lang, hours = average).to_string(),
            Style::default().fg(colors.text_muted()),
        )))
        .render(rows[1], buf);

        ProgressBar::new(
            &t!("wellness.score", locale = lang),
            WELLNESS_SCORE as f64 / 100.0,
            self.theme,
        )
        .caption(format!("{WELLNESS_SCORE}/100"))
        .render(rows[2], buf);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[3]);

        let check_ins: Vec<Line> = CHECK_INS
            .iter()
            .map(|(when, mood)| {
                Line::from(vec![
                    Span::styled(format!(" {when}: "), Style::default().fg(colors.text_muted())),
                    Span::styled(*mood, Style::default().fg(colors.fg())),
                ])
            })
            .collect();
        Paragraph::new(check_ins)
            .block(
                Block::bordered()
                    .title(format!(" {} ", t!("wellness.check_ins", locale = lang)))
                    .border_style(Style::default().fg(colors.border())),
            )
            .render(cols[0], buf);

        let suggestions: Vec<Line> = WELLNESS_SUGGESTIONS
            .iter()
            .map(|s| {
                Line::from(Span::styled(
                    format!(" • {s}"),
                    Style::default().fg(colors.success()),
                ))
            })
            .collect();
        Paragraph::new(suggestions)
            .block(
                Block::bordered()
                    .title(Span::styled(
                        format!(" {} ", t!("wellness.suggestions", locale = lang)),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .border_style(Style::default().fg(colors.border())),
            )
            .render(cols[1], buf);
    }
}
