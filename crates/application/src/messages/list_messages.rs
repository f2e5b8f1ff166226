use infrastructure::store::Store;
use uuid::Uuid;
use vybe_core::entities::messages::Message;

use crate::AppResult;

pub struct ListMessagesUseCase;

impl ListMessagesUseCase {
    /// Conversation history in append order. No conversation yet means an
    /// empty history, not an error.
    pub async fn execute(
        store: &Store,
        sender_id: Uuid,
        receiver_id: Uuid,
    ) -> AppResult<Vec<Message>> {
        match store
            .conversations
            .find_by_participants(sender_id, receiver_id)
            .await?
        {
            Some(conversation) => Ok(store.messages.find_by_ids(&conversation.messages).await?),
            None => Ok(Vec::new()),
        }
    }
}
