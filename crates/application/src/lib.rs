pub mod auth;
pub mod content;
pub mod error;
pub mod messages;
pub mod users;

pub use error::{AppError, AppResult};
