use tracing::debug;

use crate::profile::model::{Language, UserProfile};

/// A change to one progress counter. Counters are only ever moved by deltas so
/// that updates from the chat and quiz compose instead of overwriting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterDelta {
    Points(i64),
    Streak(i64),
    TopicsMastered(i64),
    HoursLearned(f64),
}

/// Partial update to the profile. Identity fields replace the current value
/// when set; counter deltas are added. The role is deliberately not patchable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub language: Option<Language>,
    pub grade: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub school: Option<String>,
    pub teaching_subjects: Option<Vec<String>>,
    pub teaching_classes: Option<Vec<String>>,
    pub deltas: Vec<CounterDelta>,
}

impl ProfilePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn add(mut self, delta: CounterDelta) -> Self {
        self.deltas.push(delta);
        self
    }

    /// Fold another patch into this one. Later set-fields win, deltas accumulate.
    pub fn merge(mut self, other: ProfilePatch) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            name,
            nickname,
            language,
            grade,
            subjects,
            school,
            teaching_subjects,
            teaching_classes
        );
        self.deltas.extend(other.deltas);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, profile: &mut UserProfile) {
        if let Some(ref name) = self.name {
            profile.name = name.clone();
        }
        if let Some(ref nickname) = self.nickname {
            profile.nickname = nickname.clone();
        }
        if let Some(language) = self.language {
            profile.language = language;
        }
        if let Some(ref grade) = self.grade {
            profile.grade = Some(grade.clone());
        }
        if let Some(ref subjects) = self.subjects {
            profile.subjects = subjects.clone();
        }
        if let Some(ref school) = self.school {
            profile.school = Some(school.clone());
        }
        if let Some(ref subjects) = self.teaching_subjects {
            profile.teaching_subjects = subjects.clone();
        }
        if let Some(ref classes) = self.teaching_classes {
            profile.teaching_classes = classes.clone();
        }

        if self.deltas.is_empty() {
            return;
        }
        let Some(progress) = profile.progress.as_mut() else {
            debug!(
                deltas = self.deltas.len(),
                "ignoring counter deltas for profile without progress"
            );
            return;
        };
        for delta in &self.deltas {
            match *delta {
                CounterDelta::Points(d) => progress.points = add_clamped(progress.points, d),
                CounterDelta::Streak(d) => progress.streak = add_clamped(progress.streak, d),
                CounterDelta::TopicsMastered(d) => {
                    progress.topics_mastered = add_clamped(progress.topics_mastered, d)
                }
                CounterDelta::HoursLearned(d) => {
                    progress.hours_learned = (progress.hours_learned + d).max(0.0)
                }
            }
        }
    }
}

fn add_clamped(value: u32, delta: i64) -> u32 {
    (value as i64 + delta).clamp(0, u32::MAX as i64) as u32
}
