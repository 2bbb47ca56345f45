use fb_core::error::AppError;
use fb_core::models::UpdateBoard;
use fb_core::traits::BoardRepo;
use integration_tests::{create_input, TestBoard};

#[tokio::test]
async fn create_assigns_first_id_and_equal_timestamps() {
    let t = TestBoard::new().await.unwrap();

    let board = t
        .service
        .create(create_input("Test Title", "Test Content", "Test Author"))
        .await
        .unwrap();

    assert_eq!(board.id, 1);
    assert_eq!(board.title, "Test Title");
    assert_eq!(board.content, "Test Content");
    assert_eq!(board.author, "Test Author");
    assert_eq!(board.created_at, board.updated_at);
}

#[tokio::test]
async fn sequential_creates_are_listed_in_creation_order() {
    let t = TestBoard::new().await.unwrap();

    let first = t.service.create(create_input("Title 1", "Content 1", "Author 1")).await.unwrap();
    let second = t.service.create(create_input("Title 2", "Content 2", "Author 2")).await.unwrap();
    assert_eq!((first.id, second.id), (1, 2));

    let all = t.service.find_all().await.unwrap();
    assert_eq!(all, vec![first, second]);
}

#[tokio::test]
async fn find_all_on_empty_store_is_empty() {
    let t = TestBoard::new().await.unwrap();
    assert!(t.service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn find_one_returns_the_created_board() {
    let t = TestBoard::new().await.unwrap();
    let created = t.service.create(create_input("Test Title", "Test Content", "Test Author")).await.unwrap();

    assert_eq!(t.service.find_one(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn find_one_on_unknown_id_is_not_found() {
    let t = TestBoard::new().await.unwrap();

    let err = t.service.find_one(999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(..)));
    assert_eq!(err.to_string(), "Board with ID 999 not found");
}

#[tokio::test]
async fn update_changes_supplied_fields_and_keeps_author() {
    let t = TestBoard::new().await.unwrap();
    let created = t
        .service
        .create(create_input("Original Title", "Original Content", "Original Author"))
        .await
        .unwrap();

    let updated = t
        .service
        .update(
            created.id,
            UpdateBoard {
                title: Some("Updated Title".into()),
                content: Some("Updated Content".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Updated Title");
    assert_eq!(updated.content, "Updated Content");
    assert_eq!(updated.author, "Original Author");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    // Persisted, not just returned.
    assert_eq!(t.service.find_one(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn partial_update_leaves_omitted_fields() {
    let t = TestBoard::new().await.unwrap();
    let created = t
        .service
        .create(create_input("Original Title", "Original Content", "Original Author"))
        .await
        .unwrap();

    let updated = t
        .service
        .update(created.id, UpdateBoard { title: Some("Updated Title Only".into()), content: None })
        .await
        .unwrap();

    assert_eq!(updated.title, "Updated Title Only");
    assert_eq!(updated.content, "Original Content");
}

#[tokio::test]
async fn update_on_unknown_id_is_not_found() {
    let t = TestBoard::new().await.unwrap();

    let result = t
        .service
        .update(999, UpdateBoard { title: Some("Updated Title".into()), content: None })
        .await;
    assert!(matches!(result, Err(AppError::NotFound(..))));
    assert!(t.service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_makes_board_unreachable() {
    let t = TestBoard::new().await.unwrap();
    let created = t.service.create(create_input("Test Title", "Test Content", "Test Author")).await.unwrap();

    t.service.remove(created.id).await.unwrap();

    assert!(matches!(t.service.find_one(created.id).await, Err(AppError::NotFound(..))));
}

#[tokio::test]
async fn remove_on_unknown_id_has_no_side_effect() {
    let t = TestBoard::new().await.unwrap();
    let kept = t.service.create(create_input("Keep Me", "Content", "Author")).await.unwrap();

    assert!(matches!(t.service.remove(999).await, Err(AppError::NotFound(..))));
    assert_eq!(t.service.find_all().await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let t = TestBoard::new().await.unwrap();
    let first = t.service.create(create_input("First", "Content", "Author")).await.unwrap();
    t.service.remove(first.id).await.unwrap();

    let second = t.service.create(create_input("Second", "Content", "Author")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn clear_restarts_ids_at_one() {
    let t = TestBoard::new().await.unwrap();
    t.service.create(create_input("First", "Content", "Author")).await.unwrap();
    t.service.create(create_input("Second", "Content", "Author")).await.unwrap();

    t.repo.clear().await.unwrap();

    let board = t.service.create(create_input("Again", "Content", "Author")).await.unwrap();
    assert_eq!(board.id, 1);
}
