pub mod create;
pub mod dtos;
pub mod feed;
pub mod interactions;
pub mod projection;
pub mod story;

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
