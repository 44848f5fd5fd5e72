//! Community board flows: reading the feed, posting and liking.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_community_page_shows_seeded_feed() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/community")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Sarah M."));
    assert!(body.contains("Mike R."));
    assert!(body.contains("Jennifer L."));
    assert!(body.contains("David K."));
    assert!(body.contains("Success Story"));
    assert!(body.contains("12 likes"));
}

#[tokio::test]
async fn test_community_page_without_seed_is_empty() {
    let app = common::create_test_app_without_seed();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/community")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("No messages yet"));
}

#[tokio::test]
async fn test_posting_redirects_and_prepends_to_feed() {
    let app = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::form_request(
            "/community",
            &[
                ("author", "Alex P."),
                ("category", "Question"),
                ("content", "Has anyone tried the cauliflower rice bowl?"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/community"
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/community")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_string(response).await;
    let new_post = body.find("Alex P.").expect("new post should be in the feed");
    let seeded_post = body.find("Sarah M.").expect("seed posts should remain");
    assert!(new_post < seeded_post, "newest post should be listed first");
    assert!(body.contains("Has anyone tried the cauliflower rice bowl?"));
    assert!(body.contains("0 likes"));
}

#[tokio::test]
async fn test_posting_with_empty_content_rerenders_with_message() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::form_request(
            "/community",
            &[
                ("author", "Alex P."),
                ("category", "General"),
                ("content", "   "),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = common::body_string(response).await;
    assert!(body.contains("content must not be empty"));
    // The feed is still rendered under the form
    assert!(body.contains("Sarah M."));
}

#[tokio::test]
async fn test_unknown_category_falls_back_to_general() {
    let app = common::create_test_app_without_seed();

    let response = app
        .clone()
        .oneshot(common::form_request(
            "/community",
            &[
                ("author", "Alex P."),
                ("category", "Gossip"),
                ("content", "First!"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/community")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_string(response).await;
    assert!(body.contains("First!"));
    assert!(body.contains("<span class=\"badge\">General</span>"));
}

#[tokio::test]
async fn test_liking_a_post_increments_its_count() {
    let app = common::create_test_app();

    // Mike R.'s seeded post has id 3 and 3 likes
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/community/like/3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/community")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_string(response).await;
    assert!(body.contains("4 likes"));
}

#[tokio::test]
async fn test_liking_an_unknown_post_returns_404() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/community/like/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = common::body_string(response).await;
    assert!(body.contains("Post Not Found"));
}
