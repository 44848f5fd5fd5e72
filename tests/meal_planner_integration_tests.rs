//! Meal plan generation through the web form.

use axum::http::StatusCode;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_generate_returns_three_meals_and_totals() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::form_request(
            "/meal-planner",
            &[
                ("age", "52"),
                ("diabetes_type", "type2"),
                ("dietary_preference", "balanced"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Your Personalized Meal Plan"));
    assert!(body.contains("Plan profile: type2-balanced"));
    assert!(body.contains("Breakfast"));
    assert!(body.contains("Lunch"));
    assert!(body.contains("Dinner"));
    assert!(body.contains("Daily Totals"));
}

#[tokio::test]
async fn test_type1_low_carb_selects_from_low_carb_candidates() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::form_request(
            "/meal-planner",
            &[
                ("age", "34"),
                ("diabetes_type", "type1"),
                ("dietary_preference", "low-carb"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Plan profile: type1-low-carb"));
    assert!(
        body.contains("Veggie Egg Scramble") || body.contains("Avocado Egg Toast"),
        "breakfast should come from the low-carb candidates"
    );
    assert!(
        body.contains("Grilled Chicken Salad") || body.contains("Turkey Lettuce Wraps"),
        "lunch should come from the low-carb candidates"
    );
    assert!(
        body.contains("Zucchini Noodle Stir-Fry") || body.contains("Herb-Crusted Chicken Breast"),
        "dinner should come from the low-carb candidates"
    );
}

#[tokio::test]
async fn test_gestational_overrides_dietary_preference() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::form_request(
            "/meal-planner",
            &[
                ("age", "29"),
                ("diabetes_type", "gestational"),
                ("dietary_preference", "low-carb"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_string(response).await;
    assert!(body.contains("Plan profile: gestational-moderate"));
}

#[tokio::test]
async fn test_missing_fields_rerender_form_with_message() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::form_request(
            "/meal-planner",
            &[("age", ""), ("diabetes_type", ""), ("dietary_preference", "")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = common::body_string(response).await;
    assert!(body.contains("Please fill in your age, diabetes type and dietary preference."));
    assert!(body.contains("Tell Us About Yourself"));
}

#[tokio::test]
async fn test_non_numeric_age_is_rejected() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::form_request(
            "/meal-planner",
            &[
                ("age", "fortytwo"),
                ("diabetes_type", "type2"),
                ("dietary_preference", "balanced"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = common::body_string(response).await;
    assert!(body.contains("Age must be a number."));
    // Submitted values are echoed back into the form
    assert!(body.contains("value=\"fortytwo\""));
}

#[tokio::test]
async fn test_unknown_diabetes_type_is_rejected() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::form_request(
            "/meal-planner",
            &[
                ("age", "42"),
                ("diabetes_type", "type3"),
                ("dietary_preference", "balanced"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = common::body_string(response).await;
    assert!(body.contains("Please select a valid diabetes type."));
}
