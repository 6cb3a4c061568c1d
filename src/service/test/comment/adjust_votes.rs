use super::*;

/// Tests incrementing a comment's votes.
///
/// Expected: Ok with the updated comment
#[tokio::test]
async fn increments_votes() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, review) =
        test_utils::factory::helpers::create_review_with_dependencies(db)
            .await
            .unwrap();
    let comment = factory::comment::CommentFactory::new(db, review.review_id, &user.username)
        .votes(4)
        .build()
        .await
        .unwrap();

    let service = CommentService::new(db);
    let updated = service.adjust_votes(comment.comment_id, 1).await.unwrap();

    assert_eq!(updated.votes, 5);
}

/// Tests adjusting votes on an unknown comment id.
///
/// Expected: Err NotFound "Comment not found"
#[tokio::test]
async fn unknown_comment_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CommentService::new(db);
    let result = service.adjust_votes(9999, 1).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Comment not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}
