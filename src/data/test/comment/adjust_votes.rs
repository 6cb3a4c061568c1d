use super::*;

/// Tests incrementing a comment's votes.
///
/// Expected: Ok(Some(comment)) with the stored count increased
#[tokio::test]
async fn increments_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, review) =
        test_utils::factory::helpers::create_review_with_dependencies(db).await?;
    let comment = factory::comment::CommentFactory::new(db, review.review_id, &user.username)
        .votes(10)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let updated = repo.adjust_votes(comment.comment_id, 1).await?;

    let updated = updated.unwrap();
    assert_eq!(updated.comment_id, comment.comment_id);
    assert_eq!(updated.votes, 11);

    Ok(())
}

/// Tests decrementing a comment's votes with a negative adjustment.
///
/// Expected: Ok(Some(comment)) with the stored count decreased
#[tokio::test]
async fn decrements_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, review) =
        test_utils::factory::helpers::create_review_with_dependencies(db).await?;
    let comment = factory::comment::CommentFactory::new(db, review.review_id, &user.username)
        .votes(10)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let updated = repo.adjust_votes(comment.comment_id, -3).await?;

    assert_eq!(updated.unwrap().votes, 7);

    Ok(())
}

/// Tests adjusting votes on an unknown comment id.
///
/// Expected: Ok(None), no row updated
#[tokio::test]
async fn returns_none_for_unknown_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let updated = repo.adjust_votes(9999, 1).await?;

    assert!(updated.is_none());

    Ok(())
}
