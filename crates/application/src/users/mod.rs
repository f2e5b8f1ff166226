pub mod dtos;
pub mod edit_profile;
pub mod list_following;
pub mod profile;
pub mod search;
pub mod suggested;
pub mod toggle_follow;

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
