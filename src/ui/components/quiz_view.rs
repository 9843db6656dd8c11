use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::profile::Language;
use crate::session::quiz::{HINT_COST, POINTS_PER_CORRECT, QuizPhase, QuizSession};
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::components::quiz_summary::QuizSummary;
use crate::ui::theme::Theme;

pub struct QuizView<'a> {
    pub quiz: &'a QuizSession,
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> QuizView<'a> {
    pub fn new(quiz: &'a QuizSession, language: Language, theme: &'a Theme) -> Self {
        Self {
            quiz,
            language,
            theme,
        }
    }
}

impl Widget for QuizView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.quiz.is_completed() {
            QuizSummary::new(self.quiz, self.language, self.theme).render(area, buf);
            return;
        }
        let Some(question) = self.quiz.current() else {
            return;
        };
        let colors = &self.theme.colors;
        let lang = self.language.code();
        let locked = matches!(self.quiz.phase(), QuizPhase::Advancing(_));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(question.options.len() as u16 + 2),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        let caption = t!(
            "quiz.question",
            locale = lang,
            current = self.quiz.index() + 1,
            total = self.quiz.total()
        );
        ProgressBar::new(self.quiz.topic(), self.quiz.progress(), self.theme)
            .caption(caption)
            .render(rows[0], buf);

        Paragraph::new(question.prompt)
            .style(Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: false })
            .block(Block::bordered().border_style(Style::default().fg(colors.border())))
            .render(rows[1], buf);

        let mut option_lines = Vec::new();
        for (i, option) in question.options.iter().enumerate() {
            let chosen = self.quiz.selected() == Some(i);
            let style = if locked && i == question.correct {
                Style::default().fg(colors.success()).add_modifier(Modifier::BOLD)
            } else if locked && chosen {
                Style::default().fg(colors.error()).add_modifier(Modifier::BOLD)
            } else if chosen {
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            let marker = if chosen { "●" } else { "○" };
            option_lines.push(Line::from(Span::styled(
                format!(" {marker} {}. {option}", i + 1),
                style,
            )));
        }
        Paragraph::new(option_lines)
            .block(Block::bordered().border_style(Style::default().fg(if locked {
                colors.border()
            } else {
                colors.border_focused()
            })))
            .render(rows[2], buf);

        let mut feedback = Vec::new();
        match self.quiz.last_correct() {
            Some(true) => feedback.push(Line::from(Span::styled(
                t!("quiz.correct", locale = lang, points = POINTS_PER_CORRECT).to_string(),
                Style::default().fg(colors.success()).add_modifier(Modifier::BOLD),
            ))),
            Some(false) => feedback.push(Line::from(Span::styled(
                t!("quiz.wrong", locale = lang).to_string(),
                Style::default().fg(colors.warning()),
            ))),
            None => {}
        }
        if self.quiz.hint_visible() {
            feedback.push(Line::from(Span::styled(
                format!("💡 {}", question.hint),
                Style::default().fg(colors.highlight()),
            )));
        } else if !locked {
            feedback.push(Line::from(Span::styled(
                format!("[h] {}", t!("quiz.hint_cost", locale = lang, cost = HINT_COST)),
                Style::default().fg(colors.text_muted()),
            )));
        }
        Paragraph::new(feedback)
            .wrap(Wrap { trim: true })
            .render(rows[3], buf);
    }
}
