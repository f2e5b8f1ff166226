pub mod dtos;
pub mod session;
pub mod use_cases;
mod validation;

pub use validation::USERNAME_REGEX;
