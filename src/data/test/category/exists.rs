use super::*;

/// Tests the existence probe for a known category.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.exists(&category.slug).await?);

    Ok(())
}

/// Tests the existence probe for an unknown slug.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    assert!(!repo.exists("not_a_category").await?);

    Ok(())
}
