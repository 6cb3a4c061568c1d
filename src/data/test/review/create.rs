use super::*;

/// Tests creating a new review.
///
/// Verifies the row is inserted with zero votes and a server-assigned
/// timestamp.
///
/// Expected: Ok with review created
#[tokio::test]
async fn creates_review_with_zero_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            title: "Jenga".to_string(),
            designer: Some("Leslie Scott".to_string()),
            owner: user.username.clone(),
            review_img_url: "https://images.example.com/jenga.png".to_string(),
            review_body: "Fiddly fun for all the family".to_string(),
            category: category.slug.clone(),
        })
        .await?;

    assert_eq!(review.title, "Jenga");
    assert_eq!(review.designer.as_deref(), Some("Leslie Scott"));
    assert_eq!(review.owner, user.username);
    assert_eq!(review.category, category.slug);
    assert_eq!(review.votes, 0);
    assert!(review.review_id > 0);

    Ok(())
}

/// Tests creating a review without a designer.
///
/// The designer field is optional and stored as NULL when absent.
///
/// Expected: Ok with designer None
#[tokio::test]
async fn creates_review_without_designer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            title: "Anonymous Classic".to_string(),
            designer: None,
            owner: user.username.clone(),
            review_img_url: "https://images.example.com/classic.png".to_string(),
            review_body: "Nobody knows who made it".to_string(),
            category: category.slug.clone(),
        })
        .await?;

    assert_eq!(review.designer, None);

    Ok(())
}

/// Tests creating a review with an unknown owner.
///
/// The owner column references users, so the insert must surface as a
/// foreign key violation.
///
/// Expected: Err with ForeignKeyConstraintViolation
#[tokio::test]
async fn unknown_owner_is_a_foreign_key_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParams {
            title: "Orphan Review".to_string(),
            designer: None,
            owner: "ghost".to_string(),
            review_img_url: "https://images.example.com/ghost.png".to_string(),
            review_body: "Nobody wrote this".to_string(),
            category: category.slug.clone(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
