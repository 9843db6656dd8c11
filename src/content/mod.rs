//! Hardcoded datasets the views draw from.

pub mod catalog;
pub mod notices;
pub mod quiz_bank;
