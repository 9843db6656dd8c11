pub mod chat;
pub mod fact_check;
pub mod quiz;
pub mod scheduler;
pub mod setup;
