// Trait definitions for the document store.
// Each method is a single-document operation; single-document atomicity is
// the only consistency primitive callers may rely on.

use uuid::Uuid;
use vybe_core::entities::content::{Content, ContentKind, ContentSetField};
use vybe_core::entities::conversations::Conversation;
use vybe_core::entities::messages::Message;
use vybe_core::entities::users::{User, UserSetField};

#[::async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: User) -> anyhow::Result<User>;
    async fn find_by_id(&self, user_id: Uuid) -> anyhow::Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn find_by_username(&self, user_name: &str) -> anyhow::Result<Option<User>>;
    /// Whole-document replace, keyed by `user.id`.
    async fn update(&self, user: User) -> anyhow::Result<User>;
    async fn list_all(&self) -> anyhow::Result<Vec<User>>;
    /// Set-union update on one set-valued field of one document.
    async fn add_to_set(&self, user_id: Uuid, field: UserSetField, member: Uuid) -> anyhow::Result<()>;
    /// Set-difference update on one set-valued field of one document.
    async fn remove_from_set(
        &self,
        user_id: Uuid,
        field: UserSetField,
        member: Uuid,
    ) -> anyhow::Result<()>;
    async fn set_story(&self, user_id: Uuid, story: Option<Uuid>) -> anyhow::Result<()>;
}

#[::async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    async fn insert(&self, content: Content) -> anyhow::Result<Content>;
    async fn find_by_id(&self, content_id: Uuid) -> anyhow::Result<Option<Content>>;
    async fn delete(&self, content_id: Uuid) -> anyhow::Result<()>;
    /// Newest-first by creation time.
    async fn list_by_kind(&self, kind: ContentKind) -> anyhow::Result<Vec<Content>>;
    async fn find_by_author_and_kind(
        &self,
        author: Uuid,
        kind: ContentKind,
    ) -> anyhow::Result<Option<Content>>;
    async fn add_to_set(
        &self,
        content_id: Uuid,
        field: ContentSetField,
        member: Uuid,
    ) -> anyhow::Result<()>;
    async fn remove_from_set(
        &self,
        content_id: Uuid,
        field: ContentSetField,
        member: Uuid,
    ) -> anyhow::Result<()>;
    /// Appends to the ordered comment list.
    async fn push_comment(
        &self,
        content_id: Uuid,
        comment: vybe_core::entities::content::Comment,
    ) -> anyhow::Result<()>;
}

#[::async_trait::async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert(&self, message: Message) -> anyhow::Result<Message>;
    /// Resolves ids in the given order; missing ids are skipped.
    async fn find_by_ids(&self, message_ids: &[Uuid]) -> anyhow::Result<Vec<Message>>;
}

#[::async_trait::async_trait]
pub trait ConversationStore: Send + Sync {
    async fn insert(&self, conversation: Conversation) -> anyhow::Result<Conversation>;
    async fn find_by_participants(&self, a: Uuid, b: Uuid) -> anyhow::Result<Option<Conversation>>;
    /// Conversations involving the user, most recently updated first.
    async fn find_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Conversation>>;
    /// Appends the message id and bumps `updated_at`.
    async fn push_message(&self, conversation_id: Uuid, message_id: Uuid) -> anyhow::Result<()>;
}
