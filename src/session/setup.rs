use crate::content::catalog::{
    self, CUSTOM_NICKNAME, DEFAULT_GRADE, DEFAULT_TEACHING_CLASSES, GRADES,
};
use crate::profile::{Progress, UserProfile, UserType};

/// Ordered multi-select. Toggling an item flips its membership; selected items
/// keep the order they were picked in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleSet {
    items: Vec<String>,
}

impl ToggleSet {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for item in items {
            let item = item.into();
            if !set.contains(&item) {
                set.items.push(item);
            }
        }
        set
    }

    /// Returns whether `item` is selected after the toggle.
    pub fn toggle(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(item.to_string());
            true
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a name is required")]
    MissingName,
    #[error("a custom nickname is required")]
    MissingCustomNickname,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleFields {
    Student {
        grade: usize,
        subjects: ToggleSet,
    },
    Teacher {
        school: String,
        subjects: ToggleSet,
        classes: ToggleSet,
    },
}

/// Focusable rows of the setup screen, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupField {
    Name,
    School,
    Grade,
    Subjects,
    Classes,
    Nickname,
    CustomNickname,
    Submit,
}

impl SetupField {
    pub fn is_text(self) -> bool {
        matches!(
            self,
            SetupField::Name | SetupField::School | SetupField::CustomNickname
        )
    }
}

/// Onboarding form for either role.
#[derive(Clone, Debug)]
pub struct SetupForm {
    base: UserProfile,
    role: UserType,
    pub name: String,
    pub custom_nickname: String,
    nickname: usize,
    pub fields: RoleFields,
}

impl SetupForm {
    /// Start a form from the skeleton profile created at role selection.
    /// A skeleton without a role is treated as a student.
    pub fn new(initial: UserProfile) -> Self {
        let role = initial.user_type.unwrap_or(UserType::Student);
        let fields = match role {
            UserType::Student => RoleFields::Student {
                grade: GRADES.iter().position(|g| *g == DEFAULT_GRADE).unwrap_or(0),
                subjects: ToggleSet::new(catalog::default_subjects(role).iter().copied()),
            },
            UserType::Teacher => RoleFields::Teacher {
                school: String::new(),
                subjects: ToggleSet::new(catalog::default_subjects(role).iter().copied()),
                classes: ToggleSet::new(DEFAULT_TEACHING_CLASSES.iter().copied()),
            },
        };
        let nickname = catalog::nickname_options(role)
            .iter()
            .position(|n| *n == initial.nickname)
            .unwrap_or(0);
        Self {
            base: initial,
            role,
            name: String::new(),
            custom_nickname: String::new(),
            nickname,
            fields,
        }
    }

    pub fn role(&self) -> UserType {
        self.role
    }

    pub fn nickname_options(&self) -> &'static [&'static str] {
        catalog::nickname_options(self.role)
    }

    pub fn nickname_choice(&self) -> &'static str {
        self.nickname_options()[self.nickname]
    }

    pub fn select_nickname(&mut self, idx: usize) {
        if idx < self.nickname_options().len() {
            self.nickname = idx;
        }
    }

    pub fn cycle_nickname(&mut self, forward: bool) {
        let len = self.nickname_options().len();
        self.nickname = if forward {
            (self.nickname + 1) % len
        } else {
            (self.nickname + len - 1) % len
        };
    }

    pub fn is_custom_nickname(&self) -> bool {
        self.nickname_choice() == CUSTOM_NICKNAME
    }

    pub fn grade(&self) -> Option<&'static str> {
        match self.fields {
            RoleFields::Student { grade, .. } => Some(GRADES[grade]),
            RoleFields::Teacher { .. } => None,
        }
    }

    pub fn cycle_grade(&mut self, forward: bool) {
        if let RoleFields::Student { ref mut grade, .. } = self.fields {
            let len = GRADES.len();
            *grade = if forward {
                (*grade + 1) % len
            } else {
                (*grade + len - 1) % len
            };
        }
    }

    pub fn subjects(&self) -> &ToggleSet {
        match self.fields {
            RoleFields::Student { ref subjects, .. } | RoleFields::Teacher { ref subjects, .. } => {
                subjects
            }
        }
    }

    pub fn toggle_subject(&mut self, subject: &str) -> bool {
        match self.fields {
            RoleFields::Student {
                ref mut subjects, ..
            }
            | RoleFields::Teacher {
                ref mut subjects, ..
            } => subjects.toggle(subject),
        }
    }

    pub fn classes(&self) -> Option<&ToggleSet> {
        match self.fields {
            RoleFields::Teacher { ref classes, .. } => Some(classes),
            RoleFields::Student { .. } => None,
        }
    }

    pub fn toggle_class(&mut self, class: &str) -> bool {
        match self.fields {
            RoleFields::Teacher {
                ref mut classes, ..
            } => classes.toggle(class),
            RoleFields::Student { .. } => false,
        }
    }

    pub fn school(&self) -> Option<&str> {
        match self.fields {
            RoleFields::Teacher { ref school, .. } => Some(school),
            RoleFields::Student { .. } => None,
        }
    }

    pub fn set_school(&mut self, value: &str) {
        if let RoleFields::Teacher { ref mut school, .. } = self.fields {
            *school = value.to_string();
        }
    }

    /// Rows currently shown, in focus order. The custom nickname row only
    /// appears once the `Custom` option is chosen.
    pub fn visible_fields(&self) -> Vec<SetupField> {
        let mut fields = vec![SetupField::Name];
        match self.role {
            UserType::Student => fields.extend([SetupField::Grade, SetupField::Subjects]),
            UserType::Teacher => fields.extend([
                SetupField::School,
                SetupField::Subjects,
                SetupField::Classes,
            ]),
        }
        fields.push(SetupField::Nickname);
        if self.is_custom_nickname() {
            fields.push(SetupField::CustomNickname);
        }
        fields.push(SetupField::Submit);
        fields
    }

    pub fn text_value(&self, field: SetupField) -> &str {
        match field {
            SetupField::Name => &self.name,
            SetupField::School => self.school().unwrap_or(""),
            SetupField::CustomNickname => &self.custom_nickname,
            _ => "",
        }
    }

    pub fn set_text_value(&mut self, field: SetupField, value: &str) {
        match field {
            SetupField::Name => self.name = value.to_string(),
            SetupField::School => self.set_school(value),
            SetupField::CustomNickname => self.custom_nickname = value.to_string(),
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.name.is_empty() {
            return Err(SetupError::MissingName);
        }
        if self.is_custom_nickname() && self.custom_nickname.is_empty() {
            return Err(SetupError::MissingCustomNickname);
        }
        Ok(())
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    fn resolved_nickname(&self) -> String {
        if self.is_custom_nickname() {
            self.custom_nickname.clone()
        } else {
            self.nickname_choice().to_string()
        }
    }

    /// Build the finished profile. Nothing is produced when validation fails.
    pub fn finish(&self) -> Result<UserProfile, SetupError> {
        self.validate()?;

        let mut profile = self.base.clone();
        profile.user_type = Some(self.role);
        profile.name = self.name.clone();
        profile.nickname = self.resolved_nickname();

        match self.fields {
            RoleFields::Student {
                grade,
                ref subjects,
            } => {
                profile.grade = Some(GRADES[grade].to_string());
                profile.subjects = subjects.as_slice().to_vec();
                profile.progress = Some(Progress::default());
            }
            RoleFields::Teacher {
                ref school,
                ref subjects,
                ref classes,
            } => {
                profile.school = Some(school.clone()).filter(|s| !s.is_empty());
                profile.teaching_subjects = subjects.as_slice().to_vec();
                profile.teaching_classes = classes.as_slice().to_vec();
                profile.progress = None;
            }
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Language;

    fn student_form() -> SetupForm {
        SetupForm::new(UserProfile::skeleton(UserType::Student, Language::English))
    }

    fn teacher_form() -> SetupForm {
        SetupForm::new(UserProfile::skeleton(UserType::Teacher, Language::English))
    }

    fn custom_index(form: &SetupForm) -> usize {
        form.nickname_options().len() - 1
    }

    #[test]
    fn test_toggle_is_symmetric_difference_in_order() {
        let mut set = ToggleSet::new(["Math", "Science"]);
        assert!(!set.toggle("Math"));
        assert!(set.toggle("Hindi"));
        assert!(set.toggle("Math"));
        assert_eq!(set.as_slice(), ["Science", "Hindi", "Math"]);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let original = ToggleSet::new(["Math", "Science"]);
        for item in ["Math", "English", "Science"] {
            let mut set = original.clone();
            set.toggle(item);
            set.toggle(item);
            assert_eq!(set.as_slice().len(), original.len());
            for s in original.as_slice() {
                assert!(set.contains(s));
            }
        }
    }

    #[test]
    fn test_toggle_set_new_drops_duplicates() {
        let set = ToggleSet::new(["Math", "Math", "Hindi"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_student_defaults() {
        let form = student_form();
        assert_eq!(form.grade(), Some("Class 8"));
        assert_eq!(form.subjects().as_slice(), ["Math", "Science"]);
        assert_eq!(form.nickname_choice(), "Buddy");
        assert!(form.classes().is_none());
    }

    #[test]
    fn test_teacher_defaults() {
        let form = teacher_form();
        assert_eq!(form.subjects().as_slice(), ["Math"]);
        assert_eq!(form.classes().unwrap().as_slice(), ["Class 6-8"]);
        assert_eq!(form.nickname_choice(), "Assistant");
        assert_eq!(form.grade(), None);
    }

    #[test]
    fn test_submit_enabled_is_conjunction_of_predicates() {
        for role_form in [student_form, teacher_form] {
            for name in ["", "Asha"] {
                for custom in [false, true] {
                    for custom_text in ["", "Mitra"] {
                        let mut form = role_form();
                        form.name = name.to_string();
                        if custom {
                            let idx = custom_index(&form);
                            form.select_nickname(idx);
                        }
                        form.custom_nickname = custom_text.to_string();

                        let expected = !name.is_empty() && (!custom || !custom_text.is_empty());
                        assert_eq!(form.can_submit(), expected, "{name:?} {custom} {custom_text:?}");
                        assert_eq!(form.finish().is_ok(), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_validation_errors() {
        let mut form = student_form();
        assert_eq!(form.validate(), Err(SetupError::MissingName));
        form.name = "Asha".to_string();
        let idx = custom_index(&form);
        form.select_nickname(idx);
        assert_eq!(form.validate(), Err(SetupError::MissingCustomNickname));
    }

    #[test]
    fn test_student_finish_zeroes_counters() {
        let mut form = student_form();
        form.name = "Asha".to_string();
        form.toggle_subject("Science");
        let profile = form.finish().unwrap();
        assert_eq!(profile.user_type, Some(UserType::Student));
        assert_eq!(profile.grade.as_deref(), Some("Class 8"));
        assert_eq!(profile.subjects, vec!["Math".to_string()]);
        assert_eq!(profile.nickname, "Buddy");
        assert_eq!(profile.progress, Some(Progress::default()));
    }

    #[test]
    fn test_custom_nickname_resolves_to_text() {
        let mut form = student_form();
        form.name = "Asha".to_string();
        let idx = custom_index(&form);
        form.select_nickname(idx);
        form.custom_nickname = "Mitra".to_string();
        assert_eq!(form.finish().unwrap().nickname, "Mitra");
    }

    #[test]
    fn test_teacher_finish_has_no_counters_and_optional_school() {
        let mut form = teacher_form();
        form.name = "Meena".to_string();
        form.toggle_class("Class 11-12");
        let profile = form.finish().unwrap();
        assert!(profile.progress.is_none());
        assert_eq!(profile.school, None);
        assert_eq!(profile.teaching_classes, vec!["Class 6-8", "Class 11-12"]);

        form.set_school("GSSS Ludhiana");
        assert_eq!(form.finish().unwrap().school.as_deref(), Some("GSSS Ludhiana"));
    }

    #[test]
    fn test_custom_row_visible_only_for_custom() {
        let mut form = student_form();
        assert!(!form.visible_fields().contains(&SetupField::CustomNickname));
        let idx = custom_index(&form);
        form.select_nickname(idx);
        assert!(form.visible_fields().contains(&SetupField::CustomNickname));
        assert_eq!(form.visible_fields().last(), Some(&SetupField::Submit));
    }

    #[test]
    fn test_cycles_wrap() {
        let mut form = student_form();
        form.cycle_nickname(false);
        assert_eq!(form.nickname_choice(), "Custom");
        form.cycle_nickname(true);
        assert_eq!(form.nickname_choice(), "Buddy");

        for _ in 0..GRADES.len() {
            form.cycle_grade(true);
        }
        assert_eq!(form.grade(), Some("Class 8"));
    }
}
