use infrastructure::store::Store;
use tracing::instrument;
use uuid::Uuid;
use vybe_core::entities::conversations::Conversation;
use vybe_core::entities::messages::Message;

use crate::{AppError, AppResult};

pub struct SendMessageUseCase;

impl SendMessageUseCase {
    /// Inserts the message, then appends it to the participant pair's
    /// conversation (created on first contact). The append is sequenced
    /// after the insert so a failure between the two is reported, not
    /// hidden.
    #[instrument(skip(store, text, image_url))]
    pub async fn execute(
        store: &Store,
        sender_id: Uuid,
        receiver_id: Uuid,
        text: Option<String>,
        image_url: Option<String>,
    ) -> AppResult<Message> {
        let text = text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        if text.is_none() && image_url.is_none() {
            return Err(AppError::Validation(
                "Message or image is required".to_string(),
            ));
        }

        if store.users.find_by_id(receiver_id).await?.is_none() {
            return Err(AppError::NotFound("User not found.".to_string()));
        }

        let message = store
            .messages
            .insert(Message::new(sender_id, receiver_id, text, image_url))
            .await?;

        match store
            .conversations
            .find_by_participants(sender_id, receiver_id)
            .await?
        {
            Some(conversation) => {
                store
                    .conversations
                    .push_message(conversation.id, message.id)
                    .await?;
            }
            None => {
                let mut conversation = Conversation::new(sender_id, receiver_id);
                conversation.messages.push(message.id);
                store.conversations.insert(conversation).await?;
            }
        }

        Ok(message)
    }
}
