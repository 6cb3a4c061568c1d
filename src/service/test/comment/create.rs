use super::*;

/// Tests posting a comment.
///
/// The new comment starts with zero votes and is bound to the review.
///
/// Expected: Ok with the created comment
#[tokio::test]
async fn creates_comment() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, review) =
        test_utils::factory::helpers::create_review_with_dependencies(db)
            .await
            .unwrap();

    let service = CommentService::new(db);
    let comment = service
        .create(CreateCommentParams {
            review_id: review.review_id,
            author: user.username.clone(),
            body: "Test Comment".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(comment.body, "Test Comment");
    assert_eq!(comment.review_id, review.review_id);
    assert_eq!(comment.votes, 0);
}

/// Tests posting a comment with an unknown username.
///
/// The foreign key violation is classified as a missing referenced row.
///
/// Expected: Err NotFound "Not found"
#[tokio::test]
async fn unknown_username_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _category, review) =
        test_utils::factory::helpers::create_review_with_dependencies(db)
            .await
            .unwrap();

    let service = CommentService::new(db);
    let result = service
        .create(CreateCommentParams {
            review_id: review.review_id,
            author: "ghost".to_string(),
            body: "Who said that?".to_string(),
        })
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// Tests posting a comment on an unknown review.
///
/// Expected: Err NotFound "Not found"
#[tokio::test]
async fn unknown_review_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();

    let service = CommentService::new(db);
    let result = service
        .create(CreateCommentParams {
            review_id: 9999,
            author: user.username.clone(),
            body: "Commenting into the void".to_string(),
        })
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}
