use super::*;

/// Tests listing comments on a review that has some.
///
/// Expected: Ok with the review's comments
#[tokio::test]
async fn returns_comments() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, review) =
        test_utils::factory::helpers::create_review_with_dependencies(db)
            .await
            .unwrap();
    let comment = factory::comment::create_comment(db, review.review_id, &user.username)
        .await
        .unwrap();

    let service = CommentService::new(db);
    let comments = service.list_for_review(review.review_id).await.unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].comment_id, comment.comment_id);
}

/// Tests that a freshly posted comment appears as the most recent entry.
///
/// Expected: Ok with the new comment first
#[tokio::test]
async fn new_comment_is_most_recent() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, review) =
        test_utils::factory::helpers::create_review_with_dependencies(db)
            .await
            .unwrap();
    factory::comment::create_comment(db, review.review_id, &user.username)
        .await
        .unwrap();

    let service = CommentService::new(db);
    let posted = service
        .create(CreateCommentParams {
            review_id: review.review_id,
            author: user.username.clone(),
            body: "Test Comment".to_string(),
        })
        .await
        .unwrap();

    let comments = service.list_for_review(review.review_id).await.unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].comment_id, posted.comment_id);
}

/// Tests listing comments for an unknown review id.
///
/// Expected: Err NotFound "Review not found"
#[tokio::test]
async fn unknown_review_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CommentService::new(db);
    let result = service.list_for_review(9999).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Review not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// Tests listing comments for a valid review that has none.
///
/// The empty comment set is not distinguished from an unknown review id, so
/// a valid review with zero comments is also reported as missing.
///
/// Expected: Err NotFound "Review not found"
#[tokio::test]
async fn review_without_comments_is_reported_missing() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _category, review) =
        test_utils::factory::helpers::create_review_with_dependencies(db)
            .await
            .unwrap();

    let service = CommentService::new(db);
    let result = service.list_for_review(review.review_id).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Review not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}
