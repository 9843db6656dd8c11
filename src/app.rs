use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::content::notices::{self, Notice};
use crate::content::quiz_bank::{self, CATEGORIES};
use crate::nav::{DashboardView, NavError, Navigator, Screen, StudentView};
use crate::profile::{Language, ProfilePatch, UserProfile, UserType};
use crate::session::chat::{ChatMode, ChatSession};
use crate::session::fact_check::FactCheckSession;
use crate::session::quiz::{QuizError, QuizSession};
use crate::session::scheduler::{Job, Owner, Scheduler};
use crate::session::setup::{SetupError, SetupField, SetupForm};
use crate::store::profile_store::ProfileStore;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Nav(#[from] NavError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Sub-pages reachable from the student profile tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfilePane {
    #[default]
    Overview,
    Wellness,
    FactChecker,
}

pub struct App {
    pub nav: Navigator,
    pub store: ProfileStore,
    pub config: Config,
    pub theme: &'static Theme,
    pub scheduler: Scheduler,
    pub should_quit: bool,

    /// Highlighted login button. Both log in the same way.
    pub welcome_selected: usize,
    pub role_selected: usize,

    pub setup: Option<SetupForm>,
    pub setup_focus: usize,
    /// Highlighted option inside the subjects / classes rows.
    pub setup_option: usize,
    /// Edit buffer for whichever setup text field has focus.
    pub setup_input: LineInput,

    pub notice: Notice,
    pub notice_dismissed: bool,
    pub alert_dismissed: bool,

    pub chat: Option<ChatSession>,
    pub chat_input: LineInput,
    /// Open mode picker and its highlighted row.
    pub mode_picker: Option<usize>,

    pub practice_selected: usize,
    pub quiz: Option<QuizSession>,

    pub profile_pane: ProfilePane,
    pub profile_selected: usize,
    pub nickname_edit: Option<LineInput>,
    pub fact_check: Option<FactCheckSession>,
    pub claim_input: LineInput,

    rng: SmallRng,
}

impl App {
    /// Build the app, restoring a stored profile if there is a valid one.
    pub fn new(config: Config, mut store: ProfileStore) -> Self {
        let theme = Theme::load(&config.theme).unwrap_or_else(|| {
            warn!(theme = %config.theme, "unknown theme, using default");
            Theme::default()
        });
        let theme: &'static Theme = Box::leak(Box::new(theme));

        let nav = match store.load() {
            Some(profile) => Navigator::restored(profile),
            None => Navigator::new(config.language()),
        };
        let mut rng = SmallRng::from_entropy();
        let notice = notices::random_notice(&mut rng);

        Self {
            nav,
            store,
            config,
            theme,
            scheduler: Scheduler::new(),
            should_quit: false,
            welcome_selected: 0,
            role_selected: 0,
            setup: None,
            setup_focus: 0,
            setup_option: 0,
            setup_input: LineInput::default(),
            notice,
            notice_dismissed: false,
            alert_dismissed: false,
            chat: None,
            chat_input: LineInput::default(),
            mode_picker: None,
            practice_selected: 0,
            quiz: None,
            profile_pane: ProfilePane::Overview,
            profile_selected: 0,
            nickname_edit: None,
            fact_check: None,
            claim_input: LineInput::default(),
            rng,
        }
    }

    pub fn screen(&self) -> Screen {
        self.nav.screen()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.store.current()
    }

    /// Language for the app chrome: the profile's once there is one, else the
    /// welcome screen selection.
    pub fn language(&self) -> Language {
        self.profile()
            .map(|p| p.language)
            .unwrap_or_else(|| self.nav.language())
    }

    pub fn student_view(&self) -> Option<StudentView> {
        match self.nav.view() {
            Some(DashboardView::Student(view)) => Some(view),
            _ => None,
        }
    }

    // --- welcome / role selection ---

    pub fn cycle_language(&mut self, forward: bool) {
        let current = self.nav.language();
        self.nav.set_language(if forward {
            current.next()
        } else {
            current.prev()
        });
    }

    pub fn login(&mut self) -> Result<(), ActionError> {
        self.nav.login(self.nav.language())?;
        self.role_selected = 0;
        Ok(())
    }

    pub fn select_role(&mut self, role: UserType) -> Result<(), ActionError> {
        let skeleton = self.nav.select_role(role)?;
        info!(role = role.as_str(), "role selected");
        self.setup = Some(SetupForm::new(skeleton.clone()));
        self.store.set(skeleton);
        self.setup_focus = 0;
        self.setup_option = 0;
        self.setup_input = LineInput::default();
        Ok(())
    }

    // --- setup ---

    pub fn setup_field(&self) -> Option<SetupField> {
        let form = self.setup.as_ref()?;
        form.visible_fields().get(self.setup_focus).copied()
    }

    fn commit_setup_input(&mut self) {
        if let (Some(field), Some(form)) = (self.setup_field(), self.setup.as_mut())
            && field.is_text()
        {
            form.set_text_value(field, self.setup_input.value());
        }
    }

    /// Move focus by one row, wrapping. Text typed into the current field is
    /// kept in the form.
    pub fn setup_move_focus(&mut self, forward: bool) {
        self.commit_setup_input();
        let Some(form) = self.setup.as_ref() else {
            return;
        };
        let len = form.visible_fields().len();
        self.setup_focus = if forward {
            (self.setup_focus + 1) % len
        } else {
            (self.setup_focus + len - 1) % len
        };
        self.setup_option = 0;
        if let Some(field) = self.setup_field() {
            let value = self
                .setup
                .as_ref()
                .map(|f| f.text_value(field).to_string())
                .unwrap_or_default();
            self.setup_input.set(&value);
        }
    }

    /// Push the edit buffer into the form so validation sees it as typed.
    pub fn setup_sync_input(&mut self) {
        self.commit_setup_input();
    }

    pub fn submit_setup(&mut self) -> Result<(), ActionError> {
        self.commit_setup_input();
        let Some(form) = self.setup.as_ref() else {
            return Err(NavError::InvalidTransition {
                action: "complete setup",
                from: self.nav.screen(),
            }
            .into());
        };
        let profile = form.finish()?;
        let role = form.role();
        self.nav.complete_setup(role)?;

        info!(role = role.as_str(), "setup complete");
        if let Err(e) = self.store.save(profile) {
            warn!(error = %e, "could not persist profile, continuing in memory");
        }
        self.setup = None;
        self.enter_dashboard();
        Ok(())
    }

    fn enter_dashboard(&mut self) {
        self.notice = notices::random_notice(&mut self.rng);
        self.notice_dismissed = false;
        self.alert_dismissed = false;
        self.practice_selected = 0;
        self.profile_pane = ProfilePane::Overview;
    }

    // --- dashboard ---

    pub fn logout(&mut self) -> Result<(), ActionError> {
        self.nav.logout()?;
        self.scheduler.cancel_all();
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "could not erase stored profile");
        }
        self.chat = None;
        self.chat_input = LineInput::default();
        self.mode_picker = None;
        self.quiz = None;
        self.fact_check = None;
        self.nickname_edit = None;
        self.claim_input = LineInput::default();
        info!("logged out");
        Ok(())
    }

    /// Merge a patch into the profile and write it out while on the dashboard.
    pub fn apply_patch(&mut self, patch: ProfilePatch) {
        if !self.store.patch(&patch) {
            debug!("patch without an active profile ignored");
            return;
        }
        if self.nav.screen() == Screen::Dashboard
            && let Err(e) = self.store.persist()
        {
            warn!(error = %e, "could not persist profile update");
        }
    }

    pub fn select_student_view(&mut self, view: StudentView) -> Result<(), ActionError> {
        let current = self.student_view();
        if current == Some(view) {
            return Ok(());
        }
        self.nav.select_student_view(view)?;
        if let Some(previous) = current {
            self.leave_view(previous);
        }
        match view {
            StudentView::Chat => {
                let name = self.profile().map(|p| p.name.clone()).unwrap_or_default();
                self.chat = Some(ChatSession::new(&name));
            }
            StudentView::Practice => {
                self.practice_selected = 0;
                self.quiz = None;
            }
            StudentView::Profile => {
                self.profile_pane = ProfilePane::Overview;
                self.profile_selected = 0;
            }
            StudentView::Home => {}
        }
        Ok(())
    }

    fn leave_view(&mut self, view: StudentView) {
        match view {
            StudentView::Chat => {
                self.scheduler.cancel_owner(Owner::Chat);
                self.chat = None;
                self.chat_input = LineInput::default();
                self.mode_picker = None;
            }
            StudentView::Practice => {
                self.scheduler.cancel_owner(Owner::Quiz);
                self.quiz = None;
            }
            StudentView::Profile => {
                self.close_fact_checker();
                self.nickname_edit = None;
                self.profile_pane = ProfilePane::Overview;
            }
            StudentView::Home => {}
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice_dismissed = true;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert_dismissed = true;
    }

    // --- chat ---

    pub fn send_chat(&mut self, now: Instant) {
        let Some(chat) = self.chat.as_mut() else {
            return;
        };
        if chat.submit(self.chat_input.value()).is_some() {
            self.chat_input.take();
            self.scheduler.schedule(
                Owner::Chat,
                Job::ChatReply,
                now,
                self.config.chat_reply_delay(),
            );
        }
    }

    pub fn switch_chat_mode(&mut self, mode: ChatMode) {
        if let Some(chat) = self.chat.as_mut() {
            chat.switch_mode(mode);
        }
        self.mode_picker = None;
    }

    // --- practice ---

    pub fn start_practice(&mut self, category: usize) {
        let Some(category) = CATEGORIES.get(category) else {
            return;
        };
        let topic = category.first_topic();
        info!(topic, "quiz started");
        self.quiz = Some(QuizSession::new(topic, quiz_bank::questions_for(topic)));
    }

    pub fn leave_quiz(&mut self) {
        self.scheduler.cancel_owner(Owner::Quiz);
        self.quiz = None;
    }

    pub fn submit_answer(&mut self, now: Instant) -> Result<(), ActionError> {
        let Some(quiz) = self.quiz.as_mut() else {
            return Err(QuizError::NotAnswering.into());
        };
        let outcome = quiz.submit()?;
        if quiz.is_completed() {
            info!(score = quiz.score(), topic = quiz.topic(), "quiz completed");
        }
        self.apply_patch(outcome.patch);
        if outcome.advance_pending {
            self.scheduler.schedule(
                Owner::Quiz,
                Job::QuizAdvance,
                now,
                self.config.quiz_advance_delay(),
            );
        }
        Ok(())
    }

    pub fn retry_quiz(&mut self) -> Result<(), ActionError> {
        if let Some(quiz) = self.quiz.as_mut() {
            quiz.retry()?;
        }
        Ok(())
    }

    // --- profile tab ---

    pub fn open_wellness(&mut self) {
        self.profile_pane = ProfilePane::Wellness;
    }

    pub fn open_fact_checker(&mut self) {
        self.profile_pane = ProfilePane::FactChecker;
        self.fact_check = Some(FactCheckSession::new());
        self.claim_input = LineInput::default();
    }

    pub fn close_fact_checker(&mut self) {
        self.scheduler.cancel_owner(Owner::FactCheck);
        self.fact_check = None;
        if self.profile_pane == ProfilePane::FactChecker {
            self.profile_pane = ProfilePane::Overview;
        }
    }

    pub fn back_to_profile(&mut self) {
        match self.profile_pane {
            ProfilePane::FactChecker => self.close_fact_checker(),
            _ => self.profile_pane = ProfilePane::Overview,
        }
    }

    pub fn check_claim(&mut self, now: Instant) {
        let Some(fc) = self.fact_check.as_mut() else {
            return;
        };
        fc.claim = self.claim_input.value().to_string();
        if fc.submit() {
            self.scheduler.schedule(
                Owner::FactCheck,
                Job::FactCheckVerdict,
                now,
                self.config.fact_check_delay(),
            );
        }
    }

    pub fn start_nickname_edit(&mut self) {
        let current = self.profile().map(|p| p.nickname.clone()).unwrap_or_default();
        self.nickname_edit = Some(LineInput::new(&current));
    }

    /// Save the edited nickname. Blank input keeps the old one.
    pub fn finish_nickname_edit(&mut self) {
        let Some(input) = self.nickname_edit.take() else {
            return;
        };
        if input.is_blank() {
            return;
        }
        let nickname = input.value().trim().to_string();
        info!(%nickname, "nickname changed");
        self.apply_patch(ProfilePatch::new().nickname(nickname));
    }

    // --- timers ---

    /// Run every scheduled job due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for (owner, job) in self.scheduler.take_due(now) {
            debug!(?owner, ?job, "running scheduled job");
            match job {
                Job::ChatReply => {
                    let patch = self.chat.as_mut().and_then(|c| c.deliver_reply());
                    if let Some(patch) = patch {
                        self.apply_patch(patch);
                    }
                }
                Job::QuizAdvance => {
                    if let Some(quiz) = self.quiz.as_mut() {
                        quiz.advance();
                    }
                }
                Job::FactCheckVerdict => {
                    if let Some(fc) = self.fact_check.as_mut() {
                        fc.deliver();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::session::quiz::QuizPhase;
    use crate::store::json_store::JsonStore;
    use tempfile::TempDir;

    fn make_test_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let backend = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        let app = App::new(Config::default(), ProfileStore::new(Some(backend)));
        (dir, app)
    }

    fn onboard_student(app: &mut App) {
        app.login().unwrap();
        app.select_role(UserType::Student).unwrap();
        app.setup_input.set("Asha");
        app.submit_setup().unwrap();
    }

    #[test]
    fn test_setup_input_committed_on_submit() {
        let (_dir, mut app) = make_test_app();
        onboard_student(&mut app);
        assert_eq!(app.screen(), Screen::Dashboard);
        assert_eq!(app.profile().unwrap().name, "Asha");
        assert_eq!(app.student_view(), Some(StudentView::Home));
    }

    #[test]
    fn test_setup_focus_wraps_and_keeps_text() {
        let (_dir, mut app) = make_test_app();
        app.login().unwrap();
        app.select_role(UserType::Student).unwrap();
        app.setup_input.set("Asha");
        app.setup_move_focus(false);
        assert_eq!(app.setup_field(), Some(SetupField::Submit));
        app.setup_move_focus(true);
        assert_eq!(app.setup_field(), Some(SetupField::Name));
        assert_eq!(app.setup_input.value(), "Asha");
    }

    #[test]
    fn test_empty_name_blocks_submit() {
        let (_dir, mut app) = make_test_app();
        app.login().unwrap();
        app.select_role(UserType::Student).unwrap();
        let err = app.submit_setup().unwrap_err();
        assert!(matches!(err, ActionError::Setup(SetupError::MissingName)));
        assert_eq!(app.screen(), Screen::Setup);
    }

    #[test]
    fn test_leaving_chat_cancels_pending_reply() {
        let (_dir, mut app) = make_test_app();
        onboard_student(&mut app);
        app.select_student_view(StudentView::Chat).unwrap();
        let t0 = Instant::now();
        app.chat_input.set("help");
        app.send_chat(t0);
        assert_eq!(app.chat_input.value(), "");
        app.select_student_view(StudentView::Home).unwrap();
        app.tick(t0 + Duration::from_secs(5));
        assert_eq!(app.profile().unwrap().progress().points, 0);
        assert!(app.chat.is_none());
    }

    #[test]
    fn test_chat_reply_arrives_after_delay() {
        let (_dir, mut app) = make_test_app();
        onboard_student(&mut app);
        app.select_student_view(StudentView::Chat).unwrap();
        let t0 = Instant::now();
        app.chat_input.set("what is photosynthesis");
        app.send_chat(t0);
        app.tick(t0 + Duration::from_millis(1000));
        assert!(app.chat.as_ref().unwrap().is_typing());
        app.tick(t0 + Duration::from_millis(1500));
        assert!(!app.chat.as_ref().unwrap().is_typing());
        assert_eq!(app.chat.as_ref().unwrap().messages().len(), 3);
        assert_eq!(app.profile().unwrap().progress().points, 10);
    }

    #[test]
    fn test_quiz_advances_on_tick() {
        let (_dir, mut app) = make_test_app();
        onboard_student(&mut app);
        app.select_student_view(StudentView::Practice).unwrap();
        app.start_practice(0);
        assert_eq!(app.quiz.as_ref().unwrap().topic(), "Algebra Basics");

        let t0 = Instant::now();
        app.quiz.as_mut().unwrap().select_option(0);
        app.submit_answer(t0).unwrap();
        assert!(app.submit_answer(t0).is_err());
        app.tick(t0 + Duration::from_millis(500));
        assert_eq!(app.quiz.as_ref().unwrap().index(), 1);
        assert_eq!(app.profile().unwrap().progress().points, 30);
    }

    #[test]
    fn test_retry_keeps_earned_rewards() {
        let (_dir, mut app) = make_test_app();
        onboard_student(&mut app);
        app.select_student_view(StudentView::Practice).unwrap();
        app.start_practice(0);

        let mut now = Instant::now();
        while !app.quiz.as_ref().unwrap().is_completed() {
            let quiz = app.quiz.as_mut().unwrap();
            let correct = quiz.current().unwrap().correct;
            quiz.select_option(correct);
            app.submit_answer(now).unwrap();
            now += Duration::from_millis(500);
            app.tick(now);
        }
        let total = app.quiz.as_ref().unwrap().total() as u32;
        let earned = app.profile().unwrap().progress();
        assert_eq!(earned.points, total * 30);
        assert_eq!(earned.topics_mastered, 1);
        assert!((earned.hours_learned - 0.5).abs() < 1e-9);

        app.retry_quiz().unwrap();
        let quiz = app.quiz.as_ref().unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Answering(0));
        assert_eq!(quiz.score(), 0);
        assert_eq!(app.profile().unwrap().progress(), earned);
    }

    #[test]
    fn test_fact_checker_verdict_and_cancel() {
        let (_dir, mut app) = make_test_app();
        onboard_student(&mut app);
        app.select_student_view(StudentView::Profile).unwrap();
        app.open_fact_checker();
        let t0 = Instant::now();
        app.claim_input.set("Holidays extended");
        app.check_claim(t0);
        assert!(app.fact_check.as_ref().unwrap().is_checking());
        app.tick(t0 + Duration::from_millis(1500));
        assert!(app.fact_check.as_ref().unwrap().verdict().is_some());

        app.open_fact_checker();
        app.claim_input.set("Another claim");
        app.check_claim(t0);
        app.back_to_profile();
        assert!(!app.scheduler.has_pending(Owner::FactCheck));
        assert_eq!(app.profile_pane, ProfilePane::Overview);
    }

    #[test]
    fn test_nickname_edit_persists() {
        let (dir, mut app) = make_test_app();
        onboard_student(&mut app);
        app.select_student_view(StudentView::Profile).unwrap();
        app.start_nickname_edit();
        app.nickname_edit.as_mut().unwrap().set("Saathi");
        app.finish_nickname_edit();

        let backend = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        let mut reopened = ProfileStore::new(Some(backend));
        assert_eq!(reopened.load().unwrap().nickname, "Saathi");
    }

    #[test]
    fn test_blank_nickname_edit_keeps_old() {
        let (_dir, mut app) = make_test_app();
        onboard_student(&mut app);
        app.start_nickname_edit();
        app.nickname_edit.as_mut().unwrap().set("   ");
        app.finish_nickname_edit();
        assert_eq!(app.profile().unwrap().nickname, "Buddy");
    }

    #[test]
    fn test_view_switch_rejected_for_teacher() {
        let (_dir, mut app) = make_test_app();
        app.login().unwrap();
        app.select_role(UserType::Teacher).unwrap();
        app.setup_input.set("Meena");
        app.submit_setup().unwrap();
        assert!(app.select_student_view(StudentView::Chat).is_err());
        assert_eq!(app.nav.view(), Some(DashboardView::Teacher));
    }
}
