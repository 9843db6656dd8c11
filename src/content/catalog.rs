//! Fixed choice lists offered during setup.

use crate::profile::UserType;

pub const GRADES: &[&str] = &[
    "Class 6", "Class 7", "Class 8", "Class 9", "Class 10", "Class 11", "Class 12",
];

pub const DEFAULT_GRADE: &str = "Class 8";

pub const SUBJECTS: &[&str] = &["Math", "Science", "English", "Hindi", "Social Studies"];

pub const TEACHING_CLASSES: &[&str] = &["Class 6-8", "Class 9-10", "Class 11-12"];

/// Sentinel option that unlocks a free-text nickname.
pub const CUSTOM_NICKNAME: &str = "Custom";

const STUDENT_NICKNAMES: &[&str] = &["Buddy", "Dost", "Friend", "Saathi", "Teacher", CUSTOM_NICKNAME];
const TEACHER_NICKNAMES: &[&str] = &["Assistant", "Helper", "Guide", "Companion", CUSTOM_NICKNAME];

pub fn nickname_options(role: UserType) -> &'static [&'static str] {
    match role {
        UserType::Student => STUDENT_NICKNAMES,
        UserType::Teacher => TEACHER_NICKNAMES,
    }
}

pub fn default_subjects(role: UserType) -> &'static [&'static str] {
    match role {
        UserType::Student => &["Math", "Science"],
        UserType::Teacher => &["Math"],
    }
}

pub const DEFAULT_TEACHING_CLASSES: &[&str] = &["Class 6-8"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_lists_end_with_custom_and_start_with_default() {
        for role in [UserType::Student, UserType::Teacher] {
            let options = nickname_options(role);
            assert_eq!(options.last(), Some(&CUSTOM_NICKNAME));
            assert_eq!(options[0], role.default_nickname());
        }
    }

    #[test]
    fn test_defaults_come_from_the_lists() {
        assert_eq!(GRADES.len(), 7);
        assert!(GRADES.contains(&DEFAULT_GRADE));
        for role in [UserType::Student, UserType::Teacher] {
            assert!(default_subjects(role).iter().all(|s| SUBJECTS.contains(s)));
        }
        assert!(
            DEFAULT_TEACHING_CLASSES
                .iter()
                .all(|c| TEACHING_CLASSES.contains(c))
        );
    }
}
