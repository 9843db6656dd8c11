rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod content;
pub mod event;
pub mod keys;
pub mod logging;
pub mod nav;
pub mod profile;
pub mod session;
pub mod store;
pub mod ui;
