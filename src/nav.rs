use tracing::info;

use crate::profile::{Language, UserProfile, UserType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    UserTypeSelection,
    Setup,
    Dashboard,
}

impl Screen {
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::UserTypeSelection => "userType",
            Screen::Setup => "setup",
            Screen::Dashboard => "dashboard",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudentView {
    #[default]
    Home,
    Chat,
    Practice,
    Profile,
}

impl StudentView {
    pub const ALL: [StudentView; 4] = [
        StudentView::Home,
        StudentView::Chat,
        StudentView::Practice,
        StudentView::Profile,
    ];

    /// Locale key of the tab label.
    pub fn label_key(self) -> &'static str {
        match self {
            StudentView::Home => "tab.home",
            StudentView::Chat => "tab.chat",
            StudentView::Practice => "tab.practice",
            StudentView::Profile => "tab.profile",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Student(StudentView),
    Teacher,
}

impl DashboardView {
    pub fn default_for(role: UserType) -> Self {
        match role {
            UserType::Student => DashboardView::Student(StudentView::default()),
            UserType::Teacher => DashboardView::Teacher,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("cannot {action} from the {} screen", from.as_str())]
    InvalidTransition { action: &'static str, from: Screen },
    #[error("no view selector outside the student dashboard")]
    NotStudentDashboard,
}

/// Top-level screen state machine plus the dashboard view selector.
#[derive(Clone, Debug)]
pub struct Navigator {
    screen: Screen,
    language: Language,
    view: Option<DashboardView>,
}

impl Navigator {
    pub fn new(language: Language) -> Self {
        Self {
            screen: Screen::Welcome,
            language,
            view: None,
        }
    }

    /// Start directly on the dashboard for a profile restored from disk.
    pub fn restored(profile: &UserProfile) -> Self {
        let role = profile.user_type.unwrap_or(UserType::Student);
        Self {
            screen: Screen::Dashboard,
            language: profile.language,
            view: Some(DashboardView::default_for(role)),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn view(&self) -> Option<DashboardView> {
        self.view
    }

    fn expect(&self, screen: Screen, action: &'static str) -> Result<(), NavError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(NavError::InvalidTransition {
                action,
                from: self.screen,
            })
        }
    }

    fn go(&mut self, to: Screen) {
        info!(from = self.screen.as_str(), to = to.as_str(), "screen transition");
        self.screen = to;
    }

    /// Language picked on the welcome screen before a login button.
    pub fn set_language(&mut self, language: Language) {
        if self.screen == Screen::Welcome {
            self.language = language;
        }
    }

    pub fn login(&mut self, language: Language) -> Result<(), NavError> {
        self.expect(Screen::Welcome, "log in")?;
        self.language = language;
        self.go(Screen::UserTypeSelection);
        Ok(())
    }

    /// Returns the profile skeleton for the chosen role.
    pub fn select_role(&mut self, role: UserType) -> Result<UserProfile, NavError> {
        self.expect(Screen::UserTypeSelection, "select a role")?;
        self.go(Screen::Setup);
        Ok(UserProfile::skeleton(role, self.language))
    }

    pub fn complete_setup(&mut self, role: UserType) -> Result<(), NavError> {
        self.expect(Screen::Setup, "complete setup")?;
        self.view = Some(DashboardView::default_for(role));
        self.go(Screen::Dashboard);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), NavError> {
        self.expect(Screen::Dashboard, "log out")?;
        self.view = None;
        self.go(Screen::Welcome);
        Ok(())
    }

    pub fn select_student_view(&mut self, view: StudentView) -> Result<(), NavError> {
        match self.view {
            Some(DashboardView::Student(_)) if self.screen == Screen::Dashboard => {
                self.view = Some(DashboardView::Student(view));
                Ok(())
            }
            _ => Err(NavError::NotStudentDashboard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_setup(role: UserType) -> (Navigator, UserProfile) {
        let mut nav = Navigator::new(Language::English);
        nav.login(Language::Hindi).unwrap();
        let skeleton = nav.select_role(role).unwrap();
        (nav, skeleton)
    }

    #[test]
    fn test_happy_path() {
        let (mut nav, skeleton) = at_setup(UserType::Student);
        assert_eq!(nav.screen(), Screen::Setup);
        assert_eq!(skeleton.user_type, Some(UserType::Student));
        assert_eq!(skeleton.nickname, "Buddy");
        assert_eq!(skeleton.language, Language::Hindi);
        assert!(skeleton.name.is_empty());

        nav.complete_setup(UserType::Student).unwrap();
        assert_eq!(nav.screen(), Screen::Dashboard);
        assert_eq!(nav.view(), Some(DashboardView::Student(StudentView::Home)));
    }

    #[test]
    fn test_teacher_skeleton_and_view() {
        let (mut nav, skeleton) = at_setup(UserType::Teacher);
        assert_eq!(skeleton.nickname, "Assistant");
        nav.complete_setup(UserType::Teacher).unwrap();
        assert_eq!(nav.view(), Some(DashboardView::Teacher));
        assert_eq!(
            nav.select_student_view(StudentView::Chat),
            Err(NavError::NotStudentDashboard)
        );
    }

    #[test]
    fn test_wrong_screen_rejected_and_state_kept() {
        let mut nav = Navigator::new(Language::English);
        let err = nav.select_role(UserType::Student).unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidTransition {
                action: "select a role",
                from: Screen::Welcome
            }
        );
        assert_eq!(nav.screen(), Screen::Welcome);
        assert!(nav.logout().is_err());
        assert!(nav.complete_setup(UserType::Student).is_err());

        nav.login(Language::English).unwrap();
        assert!(nav.login(Language::Punjabi).is_err());
        assert_eq!(nav.language(), Language::English);
    }

    #[test]
    fn test_logout_resets_to_welcome() {
        let (mut nav, _) = at_setup(UserType::Student);
        nav.complete_setup(UserType::Student).unwrap();
        nav.select_student_view(StudentView::Practice).unwrap();
        nav.logout().unwrap();
        assert_eq!(nav.screen(), Screen::Welcome);
        assert_eq!(nav.view(), None);
    }

    #[test]
    fn test_restored_starts_on_home() {
        let mut profile = UserProfile::skeleton(UserType::Student, Language::Punjabi);
        profile.name = "Asha".to_string();
        let nav = Navigator::restored(&profile);
        assert_eq!(nav.screen(), Screen::Dashboard);
        assert_eq!(nav.view(), Some(DashboardView::Student(StudentView::Home)));
        assert_eq!(nav.language(), Language::Punjabi);
    }

    #[test]
    fn test_view_resets_on_each_entry() {
        let (mut nav, _) = at_setup(UserType::Student);
        nav.complete_setup(UserType::Student).unwrap();
        nav.select_student_view(StudentView::Profile).unwrap();
        nav.logout().unwrap();
        nav.login(Language::English).unwrap();
        nav.select_role(UserType::Student).unwrap();
        nav.complete_setup(UserType::Student).unwrap();
        assert_eq!(nav.view(), Some(DashboardView::Student(StudentView::Home)));
    }

    #[test]
    fn test_error_message() {
        let err = NavError::InvalidTransition {
            action: "log out",
            from: Screen::Setup,
        };
        assert_eq!(err.to_string(), "cannot log out from the setup screen");
    }
}
