#[cfg(test)]
mod tests {
    use crate::users::search::SearchUsersUseCase;
    use crate::users::suggested::SuggestedUsersUseCase;
    use crate::users::toggle_follow::ToggleFollowUseCase;
    use crate::AppError;
    use infrastructure::store::Store;
    use uuid::Uuid;
    use vybe_core::entities::users::User;

    async fn seeded_user(store: &Store, name: &str) -> Uuid {
        let user = store
            .users
            .insert(User::new(
                format!("{} example", name),
                name.to_string(),
                format!("{}@example.com", name),
                "hash".to_string(),
            ))
            .await
            .expect("insert failed");
        user.id
    }

    #[tokio::test]
    async fn test_follow_is_symmetric() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        let bob = seeded_user(&store, "bob").await;

        let change = ToggleFollowUseCase::execute(&store, alice, bob)
            .await
            .expect("follow failed");
        assert!(change.following);

        let alice_doc = store.users.find_by_id(alice).await.unwrap().unwrap();
        let bob_doc = store.users.find_by_id(bob).await.unwrap().unwrap();
        assert!(alice_doc.following.contains(&bob));
        assert!(bob_doc.followers.contains(&alice));
        assert!(alice_doc.followers.is_empty());
        assert!(bob_doc.following.is_empty());
    }

    #[tokio::test]
    async fn test_follow_twice_restores_original_state() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        let bob = seeded_user(&store, "bob").await;

        let bob_before = store.users.find_by_id(bob).await.unwrap().unwrap();
        assert!(bob_before.followers.is_empty());

        let first = ToggleFollowUseCase::execute(&store, alice, bob).await.unwrap();
        assert!(first.following);
        let bob_during = store.users.find_by_id(bob).await.unwrap().unwrap();
        assert!(!bob_during.followers.is_empty());

        let second = ToggleFollowUseCase::execute(&store, alice, bob).await.unwrap();
        assert!(!second.following);

        let alice_after = store.users.find_by_id(alice).await.unwrap().unwrap();
        let bob_after = store.users.find_by_id(bob).await.unwrap().unwrap();
        assert!(alice_after.following.is_empty());
        assert!(bob_after.followers.is_empty());
    }

    #[tokio::test]
    async fn test_self_follow_rejected() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;

        let result = ToggleFollowUseCase::execute(&store, alice, alice).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        let alice_doc = store.users.find_by_id(alice).await.unwrap().unwrap();
        assert!(alice_doc.following.is_empty());
    }

    #[tokio::test]
    async fn test_follow_unknown_target_rejected() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;

        let result = ToggleFollowUseCase::execute(&store, alice, Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_suggested_excludes_actor() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        seeded_user(&store, "bob").await;
        seeded_user(&store, "carol").await;

        let suggested = SuggestedUsersUseCase::execute(&store, alice).await.unwrap();
        assert_eq!(suggested.len(), 2);
        assert!(suggested.iter().all(|u| u.id != alice));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let store = Store::in_memory();
        seeded_user(&store, "alice").await;
        seeded_user(&store, "malice").await;
        seeded_user(&store, "bob").await;

        let hits = SearchUsersUseCase::execute(&store, "ALIce").await.unwrap();
        assert_eq!(hits.len(), 2);

        let hits = SearchUsersUseCase::execute(&store, "bob").await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_search_escapes_metacharacters() {
        let store = Store::in_memory();
        seeded_user(&store, "alice").await;

        // Would match everything if the dot-star were treated as a pattern
        let hits = SearchUsersUseCase::execute(&store, ".*").await.unwrap();
        assert!(hits.is_empty());

        let hits = SearchUsersUseCase::execute(&store, "(a|b)+").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_search_rejects_blank_keyword() {
        let store = Store::in_memory();
        let result = SearchUsersUseCase::execute(&store, "   ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
