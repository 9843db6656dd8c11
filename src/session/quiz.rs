use crate::content::quiz_bank::Question;
use crate::profile::{CounterDelta, ProfilePatch};

pub const POINTS_PER_CORRECT: u32 = 30;
/// Cost shown next to the hint control. Not deducted.
pub const HINT_COST: u32 = 5;
pub const COMPLETION_TOPICS: i64 = 1;
pub const COMPLETION_HOURS: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Answering(usize),
    /// Answer to question `i` submitted; waiting for the auto-advance.
    Advancing(usize),
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("no option selected")]
    NoSelection,
    #[error("the quiz is not accepting answers")]
    NotAnswering,
    #[error("the quiz is not finished")]
    NotCompleted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitOutcome {
    pub correct: bool,
    /// Counter changes earned by this answer, including completion rewards.
    pub patch: ProfilePatch,
    /// True if another question follows and an advance should be scheduled.
    pub advance_pending: bool,
}

pub struct QuizSession {
    topic: String,
    questions: &'static [Question],
    phase: QuizPhase,
    selected: Option<usize>,
    hint_visible: bool,
    score: u32,
    last_correct: Option<bool>,
}

impl QuizSession {
    pub fn new(topic: &str, questions: &'static [Question]) -> Self {
        Self {
            topic: topic.to_string(),
            questions,
            phase: if questions.is_empty() {
                QuizPhase::Completed
            } else {
                QuizPhase::Answering(0)
            },
            selected: None,
            hint_visible: false,
            score: 0,
            last_correct: None,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        match self.phase {
            QuizPhase::Answering(i) | QuizPhase::Advancing(i) => i,
            QuizPhase::Completed => self.questions.len().saturating_sub(1),
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current(&self) -> Option<&'static Question> {
        match self.phase {
            QuizPhase::Answering(i) | QuizPhase::Advancing(i) => self.questions.get(i),
            QuizPhase::Completed => None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions_correct(&self) -> u32 {
        self.score / POINTS_PER_CORRECT
    }

    pub fn last_correct(&self) -> Option<bool> {
        self.last_correct
    }

    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    /// Fraction of the quiz reached, counting the current question.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 1.0;
        }
        (self.index() + 1) as f64 / self.questions.len() as f64
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.phase, QuizPhase::Answering(_)) && self.selected.is_some()
    }

    /// Record a tentative choice. Re-selecting replaces the previous choice.
    pub fn select_option(&mut self, option: usize) -> bool {
        let Some(question) = self.current() else {
            return false;
        };
        if !matches!(self.phase, QuizPhase::Answering(_)) || option >= question.options.len() {
            return false;
        }
        self.selected = Some(option);
        true
    }

    pub fn toggle_hint(&mut self) {
        if matches!(self.phase, QuizPhase::Answering(_)) {
            self.hint_visible = !self.hint_visible;
        }
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, QuizError> {
        let QuizPhase::Answering(i) = self.phase else {
            return Err(QuizError::NotAnswering);
        };
        let selected = self.selected.ok_or(QuizError::NoSelection)?;
        let question = &self.questions[i];

        let correct = selected == question.correct;
        let mut patch = ProfilePatch::new();
        if correct {
            self.score += POINTS_PER_CORRECT;
            patch = patch.add(CounterDelta::Points(POINTS_PER_CORRECT as i64));
        }
        self.last_correct = Some(correct);

        let advance_pending = i + 1 < self.questions.len();
        if advance_pending {
            self.phase = QuizPhase::Advancing(i);
        } else {
            self.phase = QuizPhase::Completed;
            patch = patch
                .add(CounterDelta::TopicsMastered(COMPLETION_TOPICS))
                .add(CounterDelta::HoursLearned(COMPLETION_HOURS));
        }

        Ok(SubmitOutcome {
            correct,
            patch,
            advance_pending,
        })
    }

    /// Move on to the next question once the advance delay has passed.
    pub fn advance(&mut self) -> bool {
        let QuizPhase::Advancing(i) = self.phase else {
            return false;
        };
        self.phase = QuizPhase::Answering(i + 1);
        self.selected = None;
        self.hint_visible = false;
        self.last_correct = None;
        true
    }

    /// Start over from the first question. Rewards already granted stay.
    pub fn retry(&mut self) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Completed {
            return Err(QuizError::NotCompleted);
        }
        *self = Self::new(&self.topic, self.questions);
        Ok(())
    }
}
