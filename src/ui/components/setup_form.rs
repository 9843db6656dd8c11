use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::content::catalog::{SUBJECTS, TEACHING_CLASSES};
use crate::profile::{Language, UserType};
use crate::session::setup::{SetupError, SetupField, SetupForm, ToggleSet};
use crate::ui::input_line;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Options offered on a multi-select row.
pub fn toggle_options(field: SetupField) -> &'static [&'static str] {
    match field {
        SetupField::Subjects => SUBJECTS,
        SetupField::Classes => TEACHING_CLASSES,
        _ => &[],
    }
}

pub struct SetupFormView<'a> {
    pub form: &'a SetupForm,
    pub focus: usize,
    pub option: usize,
    pub input: &'a LineInput,
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> SetupFormView<'a> {
    pub fn new(
        form: &'a SetupForm,
        focus: usize,
        option: usize,
        input: &'a LineInput,
        language: Language,
        theme: &'a Theme,
    ) -> Self {
        Self {
            form,
            focus,
            option,
            input,
            language,
            theme,
        }
    }

    fn label(&self, field: SetupField) -> String {
        let lang = self.language.code();
        let key = match (field, self.form.role()) {
            (SetupField::Name, _) => "setup.name",
            (SetupField::School, _) => "setup.school",
            (SetupField::Grade, _) => "setup.grade",
            (SetupField::Subjects, UserType::Student) => "setup.subjects",
            (SetupField::Subjects, UserType::Teacher) => "setup.teaching_subjects",
            (SetupField::Classes, _) => "setup.classes",
            (SetupField::Nickname, _) => "setup.nickname",
            (SetupField::CustomNickname, _) => "setup.custom_nickname",
            (SetupField::Submit, _) => "setup.submit",
        };
        t!(key, locale = lang).to_string()
    }

    fn chips(&self, field: SetupField, selected: &ToggleSet, focused: bool) -> Line<'static> {
        let colors = &self.theme.colors;
        let mut spans = vec![Span::raw("   ")];
        for (i, option) in toggle_options(field).iter().enumerate() {
            let mark = if selected.contains(option) { "x" } else { " " };
            let mut style = if selected.contains(option) {
                Style::default().fg(colors.highlight())
            } else {
                Style::default().fg(colors.fg())
            };
            if focused && i == self.option {
                style = style.bg(colors.accent_dim()).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("[{mark}] {option}"), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }

    fn cycler(&self, value: &str, focused: bool) -> Line<'static> {
        let colors = &self.theme.colors;
        let style = if focused {
            Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.fg())
        };
        Line::from(Span::styled(format!("   < {value} >"), style))
    }
}

impl Widget for SetupFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lang = self.language.code();
        let title = match self.form.role() {
            UserType::Student => t!("setup.student_title", locale = lang),
            UserType::Teacher => t!("setup.teacher_title", locale = lang),
        };

        let block = Block::bordered()
            .title(format!(" {title} "))
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from("")];
        for (i, field) in self.form.visible_fields().into_iter().enumerate() {
            let focused = i == self.focus;
            let indicator = if focused { " > " } else { "   " };

            if field == SetupField::Submit {
                lines.push(Line::from(""));
                let enabled = self.form.can_submit();
                let mut style = if enabled {
                    Style::default().fg(colors.header_fg()).bg(colors.accent())
                } else {
                    Style::default().fg(colors.text_muted()).bg(colors.bar_empty())
                };
                if focused {
                    style = style.add_modifier(Modifier::BOLD);
                }
                lines.push(Line::from(vec![
                    Span::raw(indicator),
                    Span::styled(format!("  {}  ", self.label(field)), style),
                ]));
                if focused && let Err(err) = self.form.validate() {
                    let key = match err {
                        SetupError::MissingName => "setup.missing_name",
                        SetupError::MissingCustomNickname => "setup.missing_custom",
                    };
                    lines.push(Line::from(Span::styled(
                        format!("   {}", t!(key, locale = lang)),
                        Style::default().fg(colors.warning()),
                    )));
                }
                continue;
            }

            let label_style = Style::default()
                .fg(if focused { colors.accent() } else { colors.fg() })
                .add_modifier(if focused { Modifier::BOLD } else { Modifier::empty() });
            lines.push(Line::from(Span::styled(
                format!("{indicator}{}:", self.label(field)),
                label_style,
            )));

            let value_line = match field {
                SetupField::Name | SetupField::School | SetupField::CustomNickname => {
                    let mut spans = vec![Span::raw("   ")];
                    if focused {
                        spans.extend(input_line(self.input, true, "", self.theme).spans);
                    } else {
                        let value = self.form.text_value(field).to_string();
                        let shown = if value.is_empty() { "-".to_string() } else { value };
                        spans.push(Span::styled(shown, Style::default().fg(colors.fg())));
                    }
                    Line::from(spans)
                }
                SetupField::Grade => self.cycler(self.form.grade().unwrap_or(""), focused),
                SetupField::Subjects => self.chips(field, self.form.subjects(), focused),
                SetupField::Classes => match self.form.classes() {
                    Some(classes) => self.chips(field, classes, focused),
                    None => Line::from(""),
                },
                SetupField::Nickname => self.cycler(self.form.nickname_choice(), focused),
                SetupField::Submit => Line::from(""),
            };
            lines.push(value_line);
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
