pub mod list_messages;
pub mod prev_chats;
pub mod send_message;

#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;
