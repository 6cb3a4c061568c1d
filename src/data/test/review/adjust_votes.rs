use super::*;

/// Tests incrementing a review's votes.
///
/// Expected: Ok(true) with the stored count increased
#[tokio::test]
async fn increments_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let review = factory::review::ReviewFactory::new(db, &user.username, &category.slug)
        .votes(5)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let updated = repo.adjust_votes(review.review_id, 1).await?;

    assert!(updated);
    let record = repo.get_by_id(review.review_id).await?.unwrap();
    assert_eq!(record.votes, 6);

    Ok(())
}

/// Tests decrementing a review's votes with a negative adjustment.
///
/// Expected: Ok(true) with the stored count decreased
#[tokio::test]
async fn decrements_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let review = factory::review::ReviewFactory::new(db, &user.username, &category.slug)
        .votes(5)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let updated = repo.adjust_votes(review.review_id, -2).await?;

    assert!(updated);
    let record = repo.get_by_id(review.review_id).await?.unwrap();
    assert_eq!(record.votes, 3);

    Ok(())
}

/// Tests adjusting votes on an unknown review id.
///
/// Expected: Ok(false), no row updated
#[tokio::test]
async fn returns_false_for_unknown_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let updated = repo.adjust_votes(9999, 1).await?;

    assert!(!updated);

    Ok(())
}
