pub mod chart;
pub mod chat_view;
pub mod fact_checker;
pub mod menu;
pub mod profile_view;
pub mod progress_bar;
pub mod quiz_summary;
pub mod quiz_view;
pub mod setup_form;
pub mod student_home;
pub mod tab_bar;
pub mod teacher_dashboard;
pub mod welcome;
pub mod wellness;
