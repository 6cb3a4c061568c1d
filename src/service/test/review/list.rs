use super::*;

/// Tests the sort column allow-list.
///
/// A `sort_by` value outside the allowed set must be rejected before any
/// query runs.
///
/// Expected: Err BadRequest "Invalid sort query"
#[tokio::test]
async fn rejects_unknown_sort_column() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReviewService::new(db);
    let result = service
        .list(ListReviewsParams {
            sort_by: Some("im_a_hacker".to_string()),
            ..Default::default()
        })
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid sort query"),
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

/// Tests the order allow-list.
///
/// Only `ASC` and `DESC` are accepted, case-sensitively.
///
/// Expected: Err BadRequest "Invalid order query"
#[tokio::test]
async fn rejects_unknown_order() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReviewService::new(db);

    for order in ["im_a_hacker", "asc", "desc"] {
        let result = service
            .list(ListReviewsParams {
                order: Some(order.to_string()),
                ..Default::default()
            })
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid order query"),
            other => panic!("expected BadRequest for {:?}, got {:?}", order, other),
        }
    }
}

/// Tests filtering by a category that does not exist.
///
/// Zero rows plus an unknown slug means the filter itself was wrong.
///
/// Expected: Err NotFound "Not found"
#[tokio::test]
async fn unknown_category_is_not_found() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReviewService::new(db);
    let result = service
        .list(ListReviewsParams {
            category: Some("not_a_category".to_string()),
            ..Default::default()
        })
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// Tests filtering by a known category that has no reviews.
///
/// A category that exists but has nothing to show is an empty listing, not
/// an error.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn known_category_without_reviews_is_empty() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_with_slug(db, "dexterity")
        .await
        .unwrap();

    let service = ReviewService::new(db);
    let reviews = service
        .list(ListReviewsParams {
            category: Some("dexterity".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(reviews.is_empty());
}

/// Tests an unfiltered listing of an empty table.
///
/// No filter means no existence question to answer.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn empty_table_without_filter_is_empty() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReviewService::new(db);
    let reviews = service.list(ListReviewsParams::default()).await.unwrap();

    assert!(reviews.is_empty());
}

/// Tests the default ordering of the listing.
///
/// With no query parameters the listing sorts by creation timestamp, newest
/// first.
///
/// Expected: Ok with newest review first
#[tokio::test]
async fn defaults_to_newest_first() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let category = factory::category::create_category(db).await.unwrap();

    let now = Utc::now();
    let older = factory::review::ReviewFactory::new(db, &user.username, &category.slug)
        .created_at(now - Duration::hours(1))
        .build()
        .await
        .unwrap();
    let newer = factory::review::ReviewFactory::new(db, &user.username, &category.slug)
        .created_at(now)
        .build()
        .await
        .unwrap();

    let service = ReviewService::new(db);
    let reviews = service.list(ListReviewsParams::default()).await.unwrap();

    let ids: Vec<i32> = reviews.iter().map(|r| r.review_id).collect();
    assert_eq!(ids, vec![newer.review_id, older.review_id]);
}

/// Tests an explicit votes-ascending sort request.
///
/// Expected: Ok with reviews ordered by increasing vote count
#[tokio::test]
async fn sorts_by_votes_ascending_on_request() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let category = factory::category::create_category(db).await.unwrap();

    for votes in [7, 2, 4] {
        factory::review::ReviewFactory::new(db, &user.username, &category.slug)
            .votes(votes)
            .build()
            .await
            .unwrap();
    }

    let service = ReviewService::new(db);
    let reviews = service
        .list(ListReviewsParams {
            sort_by: Some("votes".to_string()),
            order: Some("ASC".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let votes: Vec<i32> = reviews.iter().map(|r| r.votes).collect();
    assert_eq!(votes, vec![2, 4, 7]);
}
