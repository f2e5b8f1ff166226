// In-memory document store. Each collection sits behind its own RwLock and
// every trait method takes the lock exactly once, which is what gives the
// single-document atomicity the application layer relies on. Concurrent
// read-modify-write cycles on the same set field are last-write-wins.

use std::collections::HashMap;

use anyhow::anyhow;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;
use vybe_core::entities::content::{Comment, Content, ContentKind, ContentSetField};
use vybe_core::entities::conversations::Conversation;
use vybe_core::entities::messages::Message;
use vybe_core::entities::users::{User, UserSetField};

use super::traits::{ContentStore, ConversationStore, MessageStore, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    contents: RwLock<HashMap<Uuid, Content>>,
    messages: RwLock<HashMap<Uuid, Message>>,
    conversations: RwLock<HashMap<Uuid, Conversation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn user_set_mut(user: &mut User, field: UserSetField) -> &mut std::collections::HashSet<Uuid> {
    match field {
        UserSetField::Followers => &mut user.followers,
        UserSetField::Following => &mut user.following,
        UserSetField::Saved => &mut user.saved,
        UserSetField::Posts => &mut user.posts,
        UserSetField::Loops => &mut user.loops,
    }
}

fn content_set_mut(
    content: &mut Content,
    field: ContentSetField,
) -> &mut std::collections::HashSet<Uuid> {
    match field {
        ContentSetField::Likes => &mut content.likes,
        ContentSetField::Viewers => &mut content.viewers,
    }
}

#[::async_trait::async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, user: User) -> anyhow::Result<User> {
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_username(&self, user_name: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.user_name == user_name)
            .cloned())
    }

    async fn update(&self, user: User) -> anyhow::Result<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(anyhow!("user {} does not exist", user.id));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<User>> {
        let mut all: Vec<User> = self.users.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn add_to_set(&self, user_id: Uuid, field: UserSetField, member: Uuid) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| anyhow!("user {} does not exist", user_id))?;
        user_set_mut(user, field).insert(member);
        Ok(())
    }

    async fn remove_from_set(
        &self,
        user_id: Uuid,
        field: UserSetField,
        member: Uuid,
    ) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| anyhow!("user {} does not exist", user_id))?;
        user_set_mut(user, field).remove(&member);
        Ok(())
    }

    async fn set_story(&self, user_id: Uuid, story: Option<Uuid>) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| anyhow!("user {} does not exist", user_id))?;
        user.story = story;
        Ok(())
    }
}

#[::async_trait::async_trait]
impl ContentStore for MemoryStore {
    async fn insert(&self, content: Content) -> anyhow::Result<Content> {
        let mut contents = self.contents.write().await;
        contents.insert(content.id, content.clone());
        Ok(content)
    }

    async fn find_by_id(&self, content_id: Uuid) -> anyhow::Result<Option<Content>> {
        Ok(self.contents.read().await.get(&content_id).cloned())
    }

    async fn delete(&self, content_id: Uuid) -> anyhow::Result<()> {
        self.contents.write().await.remove(&content_id);
        Ok(())
    }

    async fn list_by_kind(&self, kind: ContentKind) -> anyhow::Result<Vec<Content>> {
        let mut matching: Vec<Content> = self
            .contents
            .read()
            .await
            .values()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(matching)
    }

    async fn find_by_author_and_kind(
        &self,
        author: Uuid,
        kind: ContentKind,
    ) -> anyhow::Result<Option<Content>> {
        Ok(self
            .contents
            .read()
            .await
            .values()
            .find(|c| c.author == author && c.kind == kind)
            .cloned())
    }

    async fn add_to_set(
        &self,
        content_id: Uuid,
        field: ContentSetField,
        member: Uuid,
    ) -> anyhow::Result<()> {
        let mut contents = self.contents.write().await;
        let content = contents
            .get_mut(&content_id)
            .ok_or_else(|| anyhow!("content {} does not exist", content_id))?;
        content_set_mut(content, field).insert(member);
        Ok(())
    }

    async fn remove_from_set(
        &self,
        content_id: Uuid,
        field: ContentSetField,
        member: Uuid,
    ) -> anyhow::Result<()> {
        let mut contents = self.contents.write().await;
        let content = contents
            .get_mut(&content_id)
            .ok_or_else(|| anyhow!("content {} does not exist", content_id))?;
        content_set_mut(content, field).remove(&member);
        Ok(())
    }

    async fn push_comment(&self, content_id: Uuid, comment: Comment) -> anyhow::Result<()> {
        let mut contents = self.contents.write().await;
        let content = contents
            .get_mut(&content_id)
            .ok_or_else(|| anyhow!("content {} does not exist", content_id))?;
        content.comments.push(comment);
        Ok(())
    }
}

#[::async_trait::async_trait]
impl MessageStore for MemoryStore {
    async fn insert(&self, message: Message) -> anyhow::Result<Message> {
        let mut messages = self.messages.write().await;
        messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn find_by_ids(&self, message_ids: &[Uuid]) -> anyhow::Result<Vec<Message>> {
        let messages = self.messages.read().await;
        Ok(message_ids
            .iter()
            .filter_map(|id| messages.get(id).cloned())
            .collect())
    }
}

#[::async_trait::async_trait]
impl ConversationStore for MemoryStore {
    async fn insert(&self, conversation: Conversation) -> anyhow::Result<Conversation> {
        let mut conversations = self.conversations.write().await;
        conversations.insert(conversation.id, conversation.clone());
        Ok(conversation)
    }

    async fn find_by_participants(&self, a: Uuid, b: Uuid) -> anyhow::Result<Option<Conversation>> {
        Ok(self
            .conversations
            .read()
            .await
            .values()
            .find(|c| c.is_between(a, b))
            .cloned())
    }

    async fn find_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Conversation>> {
        let mut involving: Vec<Conversation> = self
            .conversations
            .read()
            .await
            .values()
            .filter(|c| c.involves(user_id))
            .cloned()
            .collect();
        involving.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(involving)
    }

    async fn push_message(&self, conversation_id: Uuid, message_id: Uuid) -> anyhow::Result<()> {
        let mut conversations = self.conversations.write().await;
        let conversation = conversations
            .get_mut(&conversation_id)
            .ok_or_else(|| anyhow!("conversation {} does not exist", conversation_id))?;
        conversation.messages.push(message_id);
        conversation.updated_at = Utc::now();
        Ok(())
    }
}
