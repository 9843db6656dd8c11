use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Teacher,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Teacher => "teacher",
        }
    }

    /// Nickname given to the companion before setup picks one.
    pub fn default_nickname(self) -> &'static str {
        match self {
            UserType::Student => "Buddy",
            UserType::Teacher => "Assistant",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "pa")]
    Punjabi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Punjabi];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Punjabi => "pa",
        }
    }

    /// Name of the language written in that language.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Punjabi => "ਪੰਜਾਬੀ",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Student progress counters. Only ever present on student profiles that have
/// finished setup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub points: u32,
    pub streak: u32,
    pub topics_mastered: u32,
    pub hours_learned: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub user_type: Option<UserType>,
    #[serde(default)]
    pub language: Language,
    pub nickname: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teaching_subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teaching_classes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
}

impl UserProfile {
    /// Profile created the moment a role is picked, before setup fills it in.
    pub fn skeleton(role: UserType, language: Language) -> Self {
        Self {
            name: String::new(),
            user_type: Some(role),
            language,
            nickname: role.default_nickname().to_string(),
            grade: None,
            subjects: Vec::new(),
            school: None,
            teaching_subjects: Vec::new(),
            teaching_classes: Vec::new(),
            progress: None,
        }
    }

    pub fn is_student(&self) -> bool {
        self.user_type == Some(UserType::Student)
    }

    pub fn is_teacher(&self) -> bool {
        self.user_type == Some(UserType::Teacher)
    }

    pub fn progress(&self) -> Progress {
        self.progress.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_default_nickname_by_role() {
        let student = UserProfile::skeleton(UserType::Student, Language::English);
        assert_eq!(student.nickname, "Buddy");
        assert!(student.name.is_empty());
        assert!(student.progress.is_none());

        let teacher = UserProfile::skeleton(UserType::Teacher, Language::Hindi);
        assert_eq!(teacher.nickname, "Assistant");
        assert_eq!(teacher.language, Language::Hindi);
    }

    #[test]
    fn test_language_codes_serialize_short() {
        let json = serde_json::to_string(&Language::Punjabi).unwrap();
        assert_eq!(json, "\"pa\"");
        assert_eq!(Language::from_code("hi"), Some(Language::Hindi));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_language_cycle_wraps() {
        assert_eq!(Language::Punjabi.next(), Language::English);
        assert_eq!(Language::English.prev(), Language::Punjabi);
    }

    #[test]
    fn test_teacher_profile_omits_student_fields() {
        let mut teacher = UserProfile::skeleton(UserType::Teacher, Language::English);
        teacher.name = "Meena".to_string();
        teacher.teaching_classes = vec!["Class 9-10".to_string()];
        let json = serde_json::to_value(&teacher).unwrap();
        assert_eq!(json["userType"], "teacher");
        assert!(json.get("progress").is_none());
        assert!(json.get("grade").is_none());
        assert_eq!(json["teachingClasses"][0], "Class 9-10");
    }
}
