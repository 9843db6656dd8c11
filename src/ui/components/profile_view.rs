use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::profile::{Language, UserProfile};
use crate::ui::components::menu::{Menu, MenuItem};
use crate::ui::input_line;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    ChangeNickname,
    Wellness,
    FactChecker,
    Logout,
}

impl ProfileAction {
    pub fn key(self) -> &'static str {
        match self {
            ProfileAction::ChangeNickname => "n",
            ProfileAction::Wellness => "w",
            ProfileAction::FactChecker => "f",
            ProfileAction::Logout => "L",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ProfileAction::ChangeNickname => "profile.change_nickname",
            ProfileAction::Wellness => "profile.wellness",
            ProfileAction::FactChecker => "profile.fact_checker",
            ProfileAction::Logout => "profile.logout",
        }
    }
}

pub const PROFILE_ACTIONS: [ProfileAction; 4] = [
    ProfileAction::ChangeNickname,
    ProfileAction::Wellness,
    ProfileAction::FactChecker,
    ProfileAction::Logout,
];

pub struct ProfileOverview<'a> {
    pub profile: &'a UserProfile,
    pub selected: usize,
    pub nickname_edit: Option<&'a LineInput>,
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> ProfileOverview<'a> {
    pub fn new(
        profile: &'a UserProfile,
        selected: usize,
        nickname_edit: Option<&'a LineInput>,
        language: Language,
        theme: &'a Theme,
    ) -> Self {
        Self {
            profile,
            selected,
            nickname_edit,
            language,
            theme,
        }
    }
}

impl Widget for ProfileOverview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lang = self.language.code();
        let profile = self.profile;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(6)])
            .split(area);

        let muted = Style::default().fg(colors.text_muted());
        let mut details = vec![
            Line::from(Span::styled(
                format!("👤 {}", profile.name),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                [profile.grade.as_deref(), profile.school.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" · "),
                muted,
            )),
            Line::from(Span::styled(profile.subjects.join(", "), muted)),
        ];

        let mut nickname_spans = vec![Span::styled("🤖 ", Style::default().fg(colors.fg()))];
        match self.nickname_edit {
            Some(input) => nickname_spans.extend(input_line(input, true, "", self.theme).spans),
            None => nickname_spans.push(Span::styled(
                profile.nickname.clone(),
                Style::default().fg(colors.highlight()),
            )),
        }
        details.push(Line::from(""));
        details.push(Line::from(nickname_spans));
        details.push(Line::from(Span::styled(
            format!("🌐 {}", profile.language.label()),
            muted,
        )));

        Paragraph::new(details)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(format!(" {} ", t!("profile.title", locale = lang)))
                    .border_style(Style::default().fg(colors.border())),
            )
            .render(rows[0], buf);

        let items = PROFILE_ACTIONS
            .iter()
            .map(|action| MenuItem::new(action.key(), t!(action.label_key(), locale = lang), ""))
            .collect();
        let menu = Menu::new(items, self.selected, self.theme);
        (&menu).render(rows[1], buf);
    }
}
