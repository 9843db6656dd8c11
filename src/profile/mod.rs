pub mod model;
pub mod patch;

pub use model::{Language, Progress, UserProfile, UserType};
pub use patch::{CounterDelta, ProfilePatch};
