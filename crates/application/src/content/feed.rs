use infrastructure::store::Store;
use tracing::instrument;
use vybe_core::entities::content::ContentKind;

use super::dtos::ContentView;
use super::projection::project_many;
use crate::AppResult;

pub struct GlobalFeedUseCase;

impl GlobalFeedUseCase {
    /// All entities of the kind, newest-first, identities projected.
    #[instrument(skip(store), fields(kind = ?kind))]
    pub async fn execute(store: &Store, kind: ContentKind) -> AppResult<Vec<ContentView>> {
        let contents = store.contents.list_by_kind(kind).await?;
        project_many(store, contents).await
    }
}
