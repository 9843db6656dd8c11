use chrono::Local;

use crate::profile::{CounterDelta, ProfilePatch};

pub const REPLY_POINTS: i64 = 10;
pub const REPLY_HOURS: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Local wall-clock label, e.g. `04:35 PM`.
    pub time: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatMode {
    #[default]
    Tutor,
    Companion,
    Career,
    Solver,
    Mentor,
}

impl ChatMode {
    pub const ALL: [ChatMode; 5] = [
        ChatMode::Tutor,
        ChatMode::Companion,
        ChatMode::Career,
        ChatMode::Solver,
        ChatMode::Mentor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChatMode::Tutor => "Tutor Mode",
            ChatMode::Companion => "Learning Companion",
            ChatMode::Career => "Career Pathfinder",
            ChatMode::Solver => "Problem Solver",
            ChatMode::Mentor => "Mentor Mode",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ChatMode::Tutor => "🎓",
            ChatMode::Companion => "🎮",
            ChatMode::Career => "💼",
            ChatMode::Solver => "🧩",
            ChatMode::Mentor => "🌟",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ChatMode::Tutor => "Learn anything, ask doubts",
            ChatMode::Companion => "Fun challenges & games",
            ChatMode::Career => "Explore future careers",
            ChatMode::Solver => "Solve problems together",
            ChatMode::Mentor => "Talk to professionals",
        }
    }

    /// First word of the name, used in the compact header badge.
    pub fn short_name(self) -> &'static str {
        self.name().split(' ').next().unwrap_or("")
    }
}

struct ReplyRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const PHOTOSYNTHESIS_REPLY: &str = "Of course! Let me explain in simple terms:\n\n\
Photosynthesis (प्रकाश संश्लेषण) is how plants make their own food using sunlight! 🌱☀️\n\n\
• Plants use: Sunlight + Water + CO2\n\
• They make: Glucose (food) + Oxygen\n\
• It happens in leaves (chlorophyll)\n\n\
Want me to ask you some questions to test this? 🧪";

const MATH_REPLY: &str = "Great choice! Math is all about practice. What specific topic do you want to learn? \
Algebra, Geometry, or something else? I'm here to help! 📐";

const HELP_REPLY: &str = "I'm here to help! You can:\n\
• Ask me to explain any topic\n\
• Upload your homework photo 📷\n\
• Request practice questions\n\
• Talk about study stress\n\n\
What would you like to do?";

const FALLBACK_REPLY: &str = "That's a great question! I'd love to help you understand this better. \
Let me break it down step by step for you. Would you like a detailed explanation or a quick summary? 🤔";

/// Checked in order; the first rule with any matching keyword wins.
const RULES: &[ReplyRule] = &[
    ReplyRule {
        keywords: &["photosynthesis"],
        reply: PHOTOSYNTHESIS_REPLY,
    },
    ReplyRule {
        keywords: &["math", "algebra"],
        reply: MATH_REPLY,
    },
    ReplyRule {
        keywords: &["help", "doubt"],
        reply: HELP_REPLY,
    },
];

pub fn reply_for(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK_REPLY)
}

fn time_label() -> String {
    Local::now().format("%I:%M %p").to_string()
}

/// One chat conversation. Lives as long as the chat view is open.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    mode: ChatMode,
    awaiting_reply: Option<String>,
    next_id: u64,
}

impl ChatSession {
    pub fn new(student_name: &str) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            mode: ChatMode::default(),
            awaiting_reply: None,
            next_id: 1,
        };
        session.push(
            Sender::Bot,
            format!("Hey {student_name}! Ready to learn something new today? 📚"),
        );
        session
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            sender,
            text,
            time: time_label(),
        });
        self.next_id += 1;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn is_typing(&self) -> bool {
        self.awaiting_reply.is_some()
    }

    /// Post the user's message. Returns the text the reply should answer, or
    /// `None` if the input is blank or a reply is still pending.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() || self.is_typing() {
            return None;
        }
        self.push(Sender::User, input.to_string());
        self.awaiting_reply = Some(input.to_string());
        Some(input.to_string())
    }

    /// Emit the bot's reply to the pending message. Returns the stats patch
    /// the reply earns, or `None` if nothing was pending.
    pub fn deliver_reply(&mut self) -> Option<ProfilePatch> {
        let prompt = self.awaiting_reply.take()?;
        self.push(Sender::Bot, reply_for(&prompt).to_string());
        Some(
            ProfilePatch::new()
                .add(CounterDelta::Points(REPLY_POINTS))
                .add(CounterDelta::HoursLearned(REPLY_HOURS)),
        )
    }

    pub fn switch_mode(&mut self, mode: ChatMode) {
        self.mode = mode;
        self.push(
            Sender::Bot,
            format!(
                "Great! Let's switch to {}. {} 😊",
                mode.name(),
                mode.description()
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photosynthesis_any_case_any_context() {
        assert_eq!(reply_for("What is Photosynthesis?"), PHOTOSYNTHESIS_REPLY);
        assert_eq!(reply_for("PHOTOSYNTHESIS"), PHOTOSYNTHESIS_REPLY);
        assert_eq!(
            reply_for("help me with photosynthesis and algebra"),
            PHOTOSYNTHESIS_REPLY
        );
    }

    #[test]
    fn test_rules_are_ordered() {
        assert_eq!(reply_for("I have a doubt in algebra"), MATH_REPLY);
        assert_eq!(reply_for("Mathematics homework"), MATH_REPLY);
        assert_eq!(reply_for("can you help?"), HELP_REPLY);
        assert_eq!(reply_for("one small DOUBT"), HELP_REPLY);
        assert_eq!(reply_for("tell me about rivers"), FALLBACK_REPLY);
    }

    #[test]
    fn test_session_opens_with_greeting() {
        let chat = ChatSession::new("Asha");
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender, Sender::Bot);
        assert!(chat.messages()[0].text.starts_with("Hey Asha!"));
        assert_eq!(chat.mode(), ChatMode::Tutor);
    }

    #[test]
    fn test_blank_submit_ignored() {
        let mut chat = ChatSession::new("Asha");
        assert_eq!(chat.submit("   "), None);
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_one_turn_appends_user_then_bot() {
        let mut chat = ChatSession::new("Asha");
        assert_eq!(chat.submit("math please").as_deref(), Some("math please"));
        assert!(chat.is_typing());

        let patch = chat.deliver_reply().unwrap();
        assert!(!chat.is_typing());
        assert_eq!(
            patch.deltas,
            vec![CounterDelta::Points(10), CounterDelta::HoursLearned(0.1)]
        );

        let senders: Vec<Sender> = chat.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
        assert_eq!(chat.messages()[2].text, MATH_REPLY);
    }

    #[test]
    fn test_second_submit_blocked_while_typing() {
        let mut chat = ChatSession::new("Asha");
        chat.submit("first").unwrap();
        assert_eq!(chat.submit("second"), None);
        assert_eq!(chat.messages().len(), 2);
    }

    #[test]
    fn test_deliver_without_pending_is_none() {
        let mut chat = ChatSession::new("Asha");
        assert!(chat.deliver_reply().is_none());
    }

    #[test]
    fn test_message_ids_unique_and_increasing() {
        let mut chat = ChatSession::new("Asha");
        chat.submit("hi").unwrap();
        chat.deliver_reply();
        chat.switch_mode(ChatMode::Career);
        let ids: Vec<u64> = chat.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_switch_mode_announces() {
        let mut chat = ChatSession::new("Asha");
        chat.switch_mode(ChatMode::Mentor);
        assert_eq!(chat.mode(), ChatMode::Mentor);
        let last = chat.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(
            last.text,
            "Great! Let's switch to Mentor Mode. Talk to professionals 😊"
        );
    }

    #[test]
    fn test_short_mode_name() {
        assert_eq!(ChatMode::Companion.short_name(), "Learning");
    }
}
