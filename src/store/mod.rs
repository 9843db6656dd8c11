pub mod json_store;
pub mod profile_store;
pub mod schema;
