pub mod content;
pub mod conversations;
pub mod messages;
pub mod users;
