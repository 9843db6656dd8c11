/// One multiple-choice question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub hint: &'static str,
}

pub const SAMPLE_QUESTIONS: &[Question] = &[
    Question {
        prompt: "Solve for x:\n2x + 5 = 15",
        options: &["x = 5", "x = 10", "x = 7", "x = 3"],
        correct: 0,
        hint: "First, subtract 5 from both sides, then divide by 2",
    },
    Question {
        prompt: "What is the area of a rectangle with length 8 cm and width 5 cm?",
        options: &["40 cm²", "13 cm²", "26 cm²", "80 cm²"],
        correct: 0,
        hint: "Area of rectangle = length × width",
    },
    Question {
        prompt: "If a triangle has angles 60° and 70°, what is the third angle?",
        options: &["50°", "60°", "40°", "30°"],
        correct: 0,
        hint: "Sum of all angles in a triangle = 180°",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Topic {
    pub name: &'static str,
    pub questions: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct PracticeCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub topics: &'static [Topic],
}

impl PracticeCategory {
    /// Topic a "Start" on this category opens.
    pub fn first_topic(&self) -> &'static str {
        self.topics.first().map(|t| t.name).unwrap_or(self.name)
    }
}

pub const CATEGORIES: &[PracticeCategory] = &[
    PracticeCategory {
        id: "math",
        name: "Mathematics",
        icon: "📐",
        topics: &[
            Topic { name: "Algebra Basics", questions: 10 },
            Topic { name: "Geometry Problems", questions: 15 },
            Topic { name: "Word Problems", questions: 8 },
        ],
    },
    PracticeCategory {
        id: "science",
        name: "Science",
        icon: "🔬",
        topics: &[
            Topic { name: "Photosynthesis Quiz", questions: 12 },
            Topic { name: "Physics Motion", questions: 10 },
            Topic { name: "Chemistry Elements", questions: 15 },
        ],
    },
    PracticeCategory {
        id: "social",
        name: "Social Studies",
        icon: "🌍",
        topics: &[
            Topic { name: "Indian History", questions: 20 },
            Topic { name: "Geography Quiz", questions: 12 },
        ],
    },
];

/// Questions served for a topic. Every topic draws from the same sample set.
pub fn questions_for(_topic: &str) -> &'static [Question] {
    SAMPLE_QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_index_in_range() {
        for q in SAMPLE_QUESTIONS {
            assert!(q.correct < q.options.len(), "bad answer key: {}", q.prompt);
        }
    }

    #[test]
    fn test_first_topic() {
        assert_eq!(CATEGORIES[1].first_topic(), "Photosynthesis Quiz");
        assert_eq!(questions_for("anything").len(), 3);
    }
}
