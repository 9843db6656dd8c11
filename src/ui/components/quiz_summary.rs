use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::profile::Language;
use crate::session::quiz::QuizSession;
use crate::ui::theme::Theme;

/// Results card shown once the last question is answered.
pub struct QuizSummary<'a> {
    pub quiz: &'a QuizSession,
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> QuizSummary<'a> {
    pub fn new(quiz: &'a QuizSession, language: Language, theme: &'a Theme) -> Self {
        Self {
            quiz,
            language,
            theme,
        }
    }
}

impl Widget for QuizSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lang = self.language.code();

        let block = Block::bordered()
            .title(format!(" {} ", self.quiz.topic()))
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            t!("quiz.complete", locale = lang).to_string(),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout[0], buf);

        let correct = self.quiz.questions_correct() as usize;
        let total = self.quiz.total();
        let score_color = if total > 0 && correct == total {
            colors.success()
        } else if correct > 0 {
            colors.warning()
        } else {
            colors.error()
        };
        Paragraph::new(Line::from(Span::styled(
            t!("quiz.score", locale = lang, score = self.quiz.score()).to_string(),
            Style::default().fg(score_color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout[1], buf);

        Paragraph::new(Line::from(Span::styled(
            t!("quiz.summary", locale = lang, correct = correct, total = total).to_string(),
            Style::default().fg(colors.fg()),
        )))
        .alignment(Alignment::Center)
        .render(layout[2], buf);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("  [r] {}  ", t!("quiz.retry", locale = lang)),
                Style::default().fg(colors.accent()),
            ),
            Span::styled(
                t!("hints.back", locale = lang).to_string(),
                Style::default().fg(colors.accent()),
            ),
        ]))
        .render(layout[4], buf);
    }
}
