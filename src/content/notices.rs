use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub emoji: &'static str,
    pub text: &'static str,
    pub subtext: &'static str,
}

pub const MOTIVATIONAL_NOTICES: &[Notice] = &[
    Notice { emoji: "🎉", text: "347 students learning with you!", subtext: "Keep going! 💪" },
    Notice { emoji: "🔥", text: "You're on a 5-day streak!", subtext: "Don't break it! 🏆" },
    Notice { emoji: "💡", text: "Quick break?", subtext: "Stretch for 2 mins!" },
    Notice { emoji: "⭐", text: "You earned 50 bonus points!", subtext: "Great work! 🎯" },
    Notice { emoji: "👥", text: "Your friend Priya just started", subtext: "learning Math! 📚" },
];

pub fn random_notice<R: Rng>(rng: &mut R) -> Notice {
    MOTIVATIONAL_NOTICES[rng.gen_range(0..MOTIVATIONAL_NOTICES.len())]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    Fake,
    PartiallyTrue,
}

impl ClaimStatus {
    pub fn label(self) -> &'static str {
        match self {
            ClaimStatus::Fake => "FAKE",
            ClaimStatus::PartiallyTrue => "PARTIALLY TRUE",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FakeNewsAlert {
    pub claim: &'static str,
    pub status: ClaimStatus,
    pub description: &'static str,
}

pub const HOME_ALERT: FakeNewsAlert = FakeNewsAlert {
    claim: "Exam dates changed",
    status: ClaimStatus::Fake,
    description: "This is false news spreading online. Check official sources only!",
};

pub const FAKE_NEWS_ALERTS: &[FakeNewsAlert] = &[
    FakeNewsAlert {
        claim: "Free laptops for all students",
        status: ClaimStatus::Fake,
        description: "This is a hoax spreading on WhatsApp. No official government announcement has been made.",
    },
    FakeNewsAlert {
        claim: "Exam dates postponed",
        status: ClaimStatus::Fake,
        description: "Official exam dates remain unchanged. Always check the board's official website.",
    },
    FakeNewsAlert {
        claim: "New education policy changes",
        status: ClaimStatus::PartiallyTrue,
        description: "Some changes are true, but many viral claims are exaggerated. Verify from official sources.",
    },
];

pub const VERIFY_TIPS: &[&str] = &[
    "Check the source - Is it official?",
    "Look for the date - Is it current?",
    "Verify with multiple sources",
    "Don't share without verifying",
    "Ask your teacher or MySaathi",
];

pub const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const STUDY_HOURS: [f64; 7] = [1.5, 2.5, 2.0, 4.0, 3.0, 2.5, 1.5];
pub const WELLNESS_SCORE: u32 = 75;

pub const CHECK_INS: &[(&str, &str)] = &[
    ("Yesterday", "Feeling good"),
    ("2 days ago", "Stressed"),
    ("3 days ago", "Confident"),
];

pub const WELLNESS_SUGGESTIONS: &[&str] = &[
    "Take more study breaks",
    "Try 5-min meditation",
    "Sleep 7-8 hours tonight",
    "Talk to someone if needed",
];

pub fn average_study_hours() -> f64 {
    STUDY_HOURS.iter().sum::<f64>() / STUDY_HOURS.len() as f64
}

/// Weekly figures shown on the teacher dashboard. Not tied to the profile.
pub struct TeacherOverview {
    pub students_helped: u32,
    pub lesson_plans: u32,
    pub quizzes_made: u32,
    pub hours_saved: f64,
}

pub const TEACHER_OVERVIEW: TeacherOverview = TeacherOverview {
    students_helped: 45,
    lesson_plans: 12,
    quizzes_made: 8,
    hours_saved: 6.5,
};

pub const STRUGGLING_TOPICS: &[&str] = &["Algebra (Class 9)", "Photosynthesis (Class 10)"];

pub const FEATURED_ARTICLE: &str = "Active Learning Strategies for Science Classes";
