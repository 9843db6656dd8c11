use std::path::Path;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use mysaathi::app::App;
use mysaathi::config::Config;
use mysaathi::nav::{Screen, StudentView};
use mysaathi::profile::{Language, UserType};
use mysaathi::session::scheduler::Owner;
use mysaathi::store::json_store::JsonStore;
use mysaathi::store::profile_store::ProfileStore;
use mysaathi::store::schema::PROFILE_KEY;

fn store_at(dir: &Path) -> ProfileStore {
    ProfileStore::new(Some(JsonStore::with_base_dir(dir.to_path_buf()).unwrap()))
}

fn app_at(dir: &Path) -> App {
    App::new(Config::default(), store_at(dir))
}

fn onboard_student(app: &mut App, name: &str) {
    app.login().unwrap();
    app.select_role(UserType::Student).unwrap();
    app.setup_input.set(name);
    app.submit_setup().unwrap();
}

fn write_record(dir: &Path, content: &str) {
    JsonStore::with_base_dir(dir.to_path_buf())
        .unwrap()
        .write(PROFILE_KEY, content)
        .unwrap();
}

#[test]
fn test_student_onboarding_persists_zeroed_counters() {
    let dir = TempDir::new().unwrap();
    let mut app = app_at(dir.path());
    assert_eq!(app.screen(), Screen::Welcome);

    onboard_student(&mut app, "Asha");
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.student_view(), Some(StudentView::Home));

    let mut reopened = store_at(dir.path());
    let stored = reopened.load().unwrap();
    assert_eq!(stored.name, "Asha");
    assert_eq!(stored.user_type, Some(UserType::Student));
    assert_eq!(stored.language, Language::English);
    let progress = stored.progress();
    assert_eq!(progress.points, 0);
    assert_eq!(progress.streak, 0);
    assert_eq!(progress.topics_mastered, 0);
    assert_eq!(progress.hours_learned, 0.0);
}

#[test]
fn test_language_chosen_on_welcome_is_kept() {
    let dir = TempDir::new().unwrap();
    let mut app = app_at(dir.path());
    app.cycle_language(true);
    onboard_student(&mut app, "Asha");
    assert_eq!(app.profile().unwrap().language, Language::Hindi);
    assert_eq!(app.language(), Language::Hindi);
}

#[test]
fn test_restart_resumes_on_dashboard_home() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = app_at(dir.path());
        onboard_student(&mut app, "Asha");
        app.select_student_view(StudentView::Practice).unwrap();
    }
    let app = app_at(dir.path());
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.student_view(), Some(StudentView::Home));
    assert_eq!(app.profile().unwrap().name, "Asha");
}

#[test]
fn test_logout_erases_record() {
    let dir = TempDir::new().unwrap();
    let mut app = app_at(dir.path());
    onboard_student(&mut app, "Asha");
    app.logout().unwrap();

    assert_eq!(app.screen(), Screen::Welcome);
    assert!(app.profile().is_none());
    assert!(store_at(dir.path()).load().is_none());

    let restarted = app_at(dir.path());
    assert_eq!(restarted.screen(), Screen::Welcome);
}

#[test]
fn test_logout_cancels_pending_jobs() {
    let dir = TempDir::new().unwrap();
    let mut app = app_at(dir.path());
    onboard_student(&mut app, "Asha");
    app.select_student_view(StudentView::Chat).unwrap();
    let t0 = Instant::now();
    app.chat_input.set("photosynthesis");
    app.send_chat(t0);
    assert!(app.scheduler.has_pending(Owner::Chat));

    app.logout().unwrap();
    assert!(app.scheduler.is_empty());
    app.tick(t0 + Duration::from_secs(10));
    assert!(app.profile().is_none());
}

#[test]
fn test_corrupt_record_starts_at_welcome() {
    let dir = TempDir::new().unwrap();
    write_record(dir.path(), "{ not json");
    let app = app_at(dir.path());
    assert_eq!(app.screen(), Screen::Welcome);
    assert!(app.profile().is_none());
}

#[test]
fn test_future_schema_version_starts_at_welcome() {
    let dir = TempDir::new().unwrap();
    write_record(
        dir.path(),
        r#"{"schemaVersion": 99, "savedAt": "2026-01-01T00:00:00Z", "profile": {}}"#,
    );
    let app = app_at(dir.path());
    assert_eq!(app.screen(), Screen::Welcome);
}

#[test]
fn test_legacy_record_is_upgraded() {
    let dir = TempDir::new().unwrap();
    write_record(
        dir.path(),
        r#"{"name": "Ravi", "userType": "student", "language": "pa", "points": 120, "streak": 3}"#,
    );
    let app = app_at(dir.path());
    assert_eq!(app.screen(), Screen::Dashboard);
    let profile = app.profile().unwrap();
    assert_eq!(profile.name, "Ravi");
    assert_eq!(profile.nickname, "Buddy");
    assert_eq!(profile.language, Language::Punjabi);
    assert_eq!(profile.progress().points, 120);
    assert_eq!(profile.progress().streak, 3);

    let raw = JsonStore::with_base_dir(dir.path().to_path_buf())
        .unwrap()
        .read(PROFILE_KEY)
        .unwrap()
        .unwrap();
    assert!(raw.contains("schemaVersion"));
}

#[test]
fn test_chat_and_quiz_rewards_add_up() {
    let dir = TempDir::new().unwrap();
    let mut app = app_at(dir.path());
    onboard_student(&mut app, "Asha");
    let t0 = Instant::now();

    app.select_student_view(StudentView::Chat).unwrap();
    app.chat_input.set("help");
    app.send_chat(t0);
    app.tick(t0 + Duration::from_millis(1500));
    assert_eq!(app.profile().unwrap().progress().points, 10);

    app.select_student_view(StudentView::Practice).unwrap();
    app.start_practice(0);
    let mut now = t0 + Duration::from_secs(2);
    while let Some(question) = app.quiz.as_ref().and_then(|q| q.current()) {
        app.quiz.as_mut().unwrap().select_option(question.correct);
        app.submit_answer(now).unwrap();
        now += Duration::from_millis(500);
        app.tick(now);
    }

    let progress = app.profile().unwrap().progress();
    assert_eq!(progress.points, 100);
    assert_eq!(progress.topics_mastered, 1);
    assert!((progress.hours_learned - 0.6).abs() < 1e-9);

    let mut reopened = store_at(dir.path());
    assert_eq!(reopened.load().unwrap().progress().points, 100);
}

#[test]
fn test_reply_cancelled_by_tab_switch_earns_nothing() {
    let dir = TempDir::new().unwrap();
    let mut app = app_at(dir.path());
    onboard_student(&mut app, "Asha");
    let t0 = Instant::now();

    app.select_student_view(StudentView::Chat).unwrap();
    app.chat_input.set("algebra");
    app.send_chat(t0);
    app.select_student_view(StudentView::Profile).unwrap();
    app.tick(t0 + Duration::from_secs(5));

    assert_eq!(app.profile().unwrap().progress().points, 0);
    assert!(!app.scheduler.has_pending(Owner::Chat));
}

#[test]
fn test_teacher_restores_to_teacher_dashboard() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = app_at(dir.path());
        app.login().unwrap();
        app.select_role(UserType::Teacher).unwrap();
        app.setup_input.set("Meena");
        app.submit_setup().unwrap();
    }
    let mut app = app_at(dir.path());
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.student_view(), None);
    assert!(app.profile().unwrap().progress.is_none());
    assert!(app.select_student_view(StudentView::Chat).is_err());
}
