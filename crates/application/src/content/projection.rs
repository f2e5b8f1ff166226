// Join logic of the read side: content documents plus the identity
// projections of everyone they reference.

use std::collections::{HashMap, HashSet};

use infrastructure::store::Store;
use uuid::Uuid;
use vybe_core::entities::content::Content;

use super::dtos::{CommentView, ContentView};
use crate::users::dtos::AuthorSummary;
use crate::AppResult;

pub async fn project_content(store: &Store, content: &Content) -> AppResult<ContentView> {
    let mut views = project_many(store, vec![content.clone()]).await?;
    // project_many returns exactly one view per input content
    Ok(views.remove(0))
}

pub async fn project_many(store: &Store, contents: Vec<Content>) -> AppResult<Vec<ContentView>> {
    let mut referenced: HashSet<Uuid> = HashSet::new();
    for content in &contents {
        referenced.insert(content.author);
        referenced.extend(content.comments.iter().map(|c| c.author));
        referenced.extend(content.viewers.iter().copied());
    }

    let mut identities: HashMap<Uuid, AuthorSummary> = HashMap::new();
    for id in referenced {
        if let Some(user) = store.users.find_by_id(id).await? {
            identities.insert(id, AuthorSummary::from(&user));
        }
    }

    Ok(contents
        .into_iter()
        .map(|content| {
            let comments = content
                .comments
                .iter()
                .map(|c| CommentView {
                    author: identities.get(&c.author).cloned(),
                    message: c.message.clone(),
                    created_at: c.created_at,
                })
                .collect();
            let viewers = content
                .viewers
                .iter()
                .filter_map(|v| identities.get(v).cloned())
                .collect();
            ContentView {
                id: content.id,
                kind: content.kind,
                author: identities.get(&content.author).cloned(),
                media: content.media,
                media_type: content.media_type,
                caption: content.caption,
                likes: content.likes.into_iter().collect(),
                comments,
                viewers,
                created_at: content.created_at,
            }
        })
        .collect())
}
