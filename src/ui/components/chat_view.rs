use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::profile::Language;
use crate::session::chat::{ChatSession, Sender};
use crate::ui::input_line;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

pub struct ChatView<'a> {
    pub chat: &'a ChatSession,
    pub input: &'a LineInput,
    pub nickname: &'a str,
    pub language: Language,
    pub theme: &'a Theme,
}

impl<'a> ChatView<'a> {
    pub fn new(
        chat: &'a ChatSession,
        input: &'a LineInput,
        nickname: &'a str,
        language: Language,
        theme: &'a Theme,
    ) -> Self {
        Self {
            chat,
            input,
            nickname,
            language,
            theme,
        }
    }
}

impl Widget for ChatView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lang = self.language.code();
        let mode = self.chat.mode();

        let block = Block::bordered()
            .title(format!(
                " 🤖 {} ",
                t!("chat.title", locale = lang, nickname = self.nickname)
            ))
            .title_bottom(format!(" {} {} ", mode.icon(), mode.short_name()))
            .border_style(Style::default().fg(colors.accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(inner);
        let log_area = Rect {
            x: rows[0].x + 1,
            width: rows[0].width.saturating_sub(2),
            ..rows[0]
        };

        let mut lines: Vec<Line> = Vec::new();
        for message in self.chat.messages() {
            let (who, style, align_pad) = match message.sender {
                Sender::User => (
                    String::new(),
                    Style::default().fg(colors.fg()).bg(colors.bubble_user()),
                    "  ",
                ),
                Sender::Bot => (
                    format!("{} ", self.nickname),
                    Style::default().fg(colors.fg()).bg(colors.bubble_bot()),
                    "",
                ),
            };
            lines.push(Line::from(Span::styled(
                format!("{align_pad}{who}{}", message.time),
                Style::default().fg(colors.text_muted()),
            )));
            for text_line in message.text.lines() {
                lines.push(Line::from(Span::styled(format!("{align_pad}{text_line}"), style)));
            }
            lines.push(Line::from(""));
        }
        if self.chat.is_typing() {
            lines.push(Line::from(Span::styled(
                t!("chat.typing", locale = lang, nickname = self.nickname).to_string(),
                Style::default()
                    .fg(colors.text_muted())
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        // Pin the newest line to the bottom, measured the way the paragraph wraps.
        let log = Paragraph::new(lines).wrap(Wrap { trim: false });
        let height = log.line_count(log_area.width);
        let scroll = height.saturating_sub(log_area.height as usize) as u16;
        log.scroll((scroll, 0)).render(log_area, buf);

        let placeholder = t!("chat.placeholder", locale = lang);
        Paragraph::new(input_line(self.input, true, &placeholder, self.theme))
            .block(Block::bordered().border_style(Style::default().fg(colors.border_focused())))
            .render(rows[1], buf);
    }
}
