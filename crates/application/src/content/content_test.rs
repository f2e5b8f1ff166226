#[cfg(test)]
mod tests {
    use crate::content::create::CreateContentUseCase;
    use crate::content::feed::GlobalFeedUseCase;
    use crate::content::interactions::{AddCommentUseCase, ToggleLikeUseCase, ToggleSaveUseCase};
    use crate::content::story::{StoryFeedUseCase, UploadStoryUseCase, ViewStoryUseCase};
    use crate::users::toggle_follow::ToggleFollowUseCase;
    use crate::AppError;
    use infrastructure::store::Store;
    use uuid::Uuid;
    use vybe_core::entities::content::{ContentKind, MediaType};
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

    async fn seeded_post(store: &Store, author: Uuid) -> Uuid {
        CreateContentUseCase::execute(
            store,
            author,
            ContentKind::Post,
            Some("http://media/p.jpg".to_string()),
            Some("caption".to_string()),
            Some("image"),
        )
        .await
        .expect("create post failed")
        .id
    }

    #[tokio::test]
    async fn test_misrouted_story_writes_nothing() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;

        let result = CreateContentUseCase::execute(
            &store,
            alice,
            ContentKind::Story,
            Some("http://media/s.jpg".to_string()),
            None,
            Some("image"),
        )
        .await;
        assert!(matches!(result, Err(AppError::Internal(_))));

        let stories = store
            .contents
            .list_by_kind(ContentKind::Story)
            .await
            .unwrap();
        assert!(stories.is_empty());
    }

    #[tokio::test]
    async fn test_create_post_appends_author_back_reference() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;

        let view = CreateContentUseCase::execute(
            &store,
            alice,
            ContentKind::Post,
            Some("http://media/p.jpg".to_string()),
            Some("  hello  ".to_string()),
            Some("image"),
        )
        .await
        .unwrap();

        assert_eq!(view.caption.as_deref(), Some("hello"));
        let author = view.author.expect("author projected");
        assert_eq!(author.id, alice);
        assert_eq!(author.user_name, "alice");

        let alice_doc = store.users.find_by_id(alice).await.unwrap().unwrap();
        assert!(alice_doc.posts.contains(&view.id));
    }

    #[tokio::test]
    async fn test_create_post_requires_media_and_media_type() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;

        let missing_media = CreateContentUseCase::execute(
            &store,
            alice,
            ContentKind::Post,
            None,
            None,
            Some("image"),
        )
        .await;
        assert!(matches!(missing_media, Err(AppError::Validation(_))));

        let bad_type = CreateContentUseCase::execute(
            &store,
            alice,
            ContentKind::Post,
            Some("http://media/p.gif".to_string()),
            None,
            Some("gif"),
        )
        .await;
        assert!(matches!(bad_type, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_loop_is_always_video() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;

        let view = CreateContentUseCase::execute(
            &store,
            alice,
            ContentKind::Loop,
            Some("http://media/l.mp4".to_string()),
            None,
            None,
        )
        .await
        .unwrap();

        assert_eq!(view.media_type, MediaType::Video);
        let alice_doc = store.users.find_by_id(alice).await.unwrap().unwrap();
        assert!(alice_doc.loops.contains(&view.id));
        assert!(alice_doc.posts.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_like_is_its_own_inverse() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        let bob = seeded_user(&store, "bob").await;
        let post = seeded_post(&store, alice).await;

        let (view, liked) = ToggleLikeUseCase::execute(&store, ContentKind::Post, post, bob)
            .await
            .unwrap();
        assert!(liked);
        assert_eq!(view.likes, vec![bob]);

        let (view, liked) = ToggleLikeUseCase::execute(&store, ContentKind::Post, post, bob)
            .await
            .unwrap();
        assert!(!liked);
        assert!(view.likes.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_like_wrong_kind_is_not_found() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        let post = seeded_post(&store, alice).await;

        let result = ToggleLikeUseCase::execute(&store, ContentKind::Loop, post, alice).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_first_comment() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        let bob = seeded_user(&store, "bob").await;
        let post = seeded_post(&store, alice).await;

        let view = AddCommentUseCase::execute(&store, ContentKind::Post, post, bob, "hi")
            .await
            .unwrap();

        assert_eq!(view.comments.len(), 1);
        assert_eq!(view.comments[0].message, "hi");
        let commenter = view.comments[0].author.clone().expect("author projected");
        assert_eq!(commenter.id, bob);
    }

    #[tokio::test]
    async fn test_comments_keep_insertion_order() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        let post = seeded_post(&store, alice).await;

        for text in ["first", "second", "third"] {
            AddCommentUseCase::execute(&store, ContentKind::Post, post, alice, text)
                .await
                .unwrap();
        }

        let view = AddCommentUseCase::execute(&store, ContentKind::Post, post, alice, "fourth")
            .await
            .unwrap();
        let messages: Vec<&str> = view.comments.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third", "fourth"]);
    }

    #[tokio::test]
    async fn test_empty_comment_rejected() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        let post = seeded_post(&store, alice).await;

        let result = AddCommentUseCase::execute(&store, ContentKind::Post, post, alice, "   ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_toggle_save_lives_on_the_actor() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        let bob = seeded_user(&store, "bob").await;
        let post = seeded_post(&store, alice).await;

        let (view, saved) = ToggleSaveUseCase::execute(&store, post, bob).await.unwrap();
        assert!(saved);
        assert!(view.saved.contains(&post));

        let post_doc = store.contents.find_by_id(post).await.unwrap().unwrap();
        assert!(post_doc.likes.is_empty(), "saving must not touch the post");

        let (view, saved) = ToggleSaveUseCase::execute(&store, post, bob).await.unwrap();
        assert!(!saved);
        assert!(view.saved.is_empty());
    }

    #[tokio::test]
    async fn test_second_story_replaces_the_first() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;

        let first = UploadStoryUseCase::execute(
            &store,
            alice,
            Some("http://media/s1.jpg".to_string()),
            None,
            Some("image"),
        )
        .await
        .unwrap();

        let second = UploadStoryUseCase::execute(
            &store,
            alice,
            Some("http://media/s2.mp4".to_string()),
            None,
            Some("video"),
        )
        .await
        .unwrap();

        assert_ne!(first.id, second.id);
        assert!(
            store.contents.find_by_id(first.id).await.unwrap().is_none(),
            "first story must be unreachable"
        );
        let stories = store.contents.list_by_kind(ContentKind::Story).await.unwrap();
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].id, second.id);

        let alice_doc = store.users.find_by_id(alice).await.unwrap().unwrap();
        assert_eq!(alice_doc.story, Some(second.id));
    }

    #[tokio::test]
    async fn test_story_view_is_idempotent_insertion() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        let bob = seeded_user(&store, "bob").await;

        let story = UploadStoryUseCase::execute(
            &store,
            alice,
            Some("http://media/s.jpg".to_string()),
            None,
            Some("image"),
        )
        .await
        .unwrap();

        ViewStoryUseCase::execute(&store, story.id, bob).await.unwrap();
        let view = ViewStoryUseCase::execute(&store, story.id, bob).await.unwrap();

        assert_eq!(view.viewers.len(), 1);
        assert_eq!(view.viewers[0].id, bob);
    }

    #[tokio::test]
    async fn test_story_feed_only_shows_followed_authors() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;
        let bob = seeded_user(&store, "bob").await;
        let carol = seeded_user(&store, "carol").await;

        for author in [bob, carol] {
            UploadStoryUseCase::execute(
                &store,
                author,
                Some("http://media/s.jpg".to_string()),
                None,
                Some("image"),
            )
            .await
            .unwrap();
        }

        ToggleFollowUseCase::execute(&store, alice, bob).await.unwrap();

        let ring = StoryFeedUseCase::execute(&store, alice).await.unwrap();
        assert_eq!(ring.len(), 1);
        assert_eq!(ring[0].author.as_ref().map(|a| a.id), Some(bob));
    }

    #[tokio::test]
    async fn test_global_feed_newest_first() {
        let store = Store::in_memory();
        let alice = seeded_user(&store, "alice").await;

        let first = seeded_post(&store, alice).await;
        // Backdate the first post so ordering does not depend on timer resolution
        let mut doc = store.contents.find_by_id(first).await.unwrap().unwrap();
        doc.created_at -= chrono::Duration::seconds(5);
        store.contents.delete(first).await.unwrap();
        let first = store.contents.insert(doc).await.unwrap().id;

        let second = seeded_post(&store, alice).await;

        let feed = GlobalFeedUseCase::execute(&store, ContentKind::Post).await.unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].id, second);
        assert_eq!(feed[1].id, first);
    }
}
