use super::*;

/// Tests deleting a comment by id.
///
/// Expected: Ok(1) and the comment is gone from its review's listing
#[tokio::test]
async fn deletes_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _category, review, comment) =
        test_utils::factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let rows_affected = repo.delete(comment.comment_id).await?;

    assert_eq!(rows_affected, 1);

    // Verify the comment no longer appears in the review's listing
    let comments = repo.get_by_review_id(review.review_id).await?;
    assert!(comments.is_empty());

    Ok(())
}

/// Tests deleting an unknown comment id.
///
/// Expected: Ok(0), nothing deleted
#[tokio::test]
async fn returns_zero_for_unknown_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let rows_affected = repo.delete(9999).await?;

    assert_eq!(rows_affected, 0);

    Ok(())
}
