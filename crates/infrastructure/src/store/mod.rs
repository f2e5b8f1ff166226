mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::{ContentStore, ConversationStore, MessageStore, UserStore};

use std::sync::Arc;

/// Handle to the document store, one trait object per collection.
/// Cloning is cheap; every component receives the same backing store.
#[derive(Clone)]
pub struct Store {
    pub users: Arc<dyn UserStore>,
    pub contents: Arc<dyn ContentStore>,
    pub messages: Arc<dyn MessageStore>,
    pub conversations: Arc<dyn ConversationStore>,
}

impl Store {
    pub fn in_memory() -> Self {
        let backend = Arc::new(MemoryStore::new());
        Self {
            users: backend.clone(),
            contents: backend.clone(),
            messages: backend.clone(),
            conversations: backend,
        }
    }
}
