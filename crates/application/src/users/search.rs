use infrastructure::store::Store;
use regex::RegexBuilder;

use super::dtos::UserView;
use crate::{AppError, AppResult};

pub struct SearchUsersUseCase;

impl SearchUsersUseCase {
    /// Case-insensitive substring match on username or display name. The
    /// keyword is escaped before compilation so metacharacters stay inert.
    pub async fn execute(store: &Store, keyword: &str) -> AppResult<Vec<UserView>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(AppError::Validation("Keyword required!".to_string()));
        }

        let pattern = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
            .map_err(|e| AppError::Internal(format!("search pattern error: {}", e)))?;

        let users = store.users.list_all().await?;
        Ok(users
            .into_iter()
            .filter(|u| pattern.is_match(&u.user_name) || pattern.is_match(&u.name))
            .map(UserView::from)
            .collect())
    }
}
