use crate::helpers::make_app;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::course::Model as CourseModel;
use db::models::user::Model as UserModel;
use db::test_utils::setup_test_db;
use tower::ServiceExt;

fn enroll_request(user_id: &str, course_id: i64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/enrollment/enroll/{user_id}/{course_id}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_enroll_success() {
    let db = setup_test_db().await;
    let user = UserModel::create(&db, "u-1", "alice", "alice@test.com")
        .await
        .unwrap();
    let course = CourseModel::create(&db, "Rust", "desc").await.unwrap();
    let app = make_app(db);

    let response = app.oneshot(enroll_request(&user.id, course.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Enrolled successfully");
}

/// A second enrollment for the same pair is rejected and leaves the
/// original row in place.
#[tokio::test]
async fn test_enroll_twice_rejected() {
    let db = setup_test_db().await;
    let user = UserModel::create(&db, "u-1", "alice", "alice@test.com")
        .await
        .unwrap();
    let course = CourseModel::create(&db, "Rust", "desc").await.unwrap();
    let app = make_app(db);

    let response = app
        .clone()
        .oneshot(enroll_request(&user.id, course.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(enroll_request(&user.id, course.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "You are already enrolled in this course");

    // still exactly one enrollment, so the list endpoint shows one course
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/enrollment/mycourses/{}", user.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_enroll_unknown_user() {
    let db = setup_test_db().await;
    let course = CourseModel::create(&db, "Rust", "desc").await.unwrap();
    let app = make_app(db);

    let response = app.oneshot(enroll_request("ghost", course.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "User not found");
}

#[tokio::test]
async fn test_enroll_unknown_course() {
    let db = setup_test_db().await;
    let user = UserModel::create(&db, "u-1", "alice", "alice@test.com")
        .await
        .unwrap();
    let app = make_app(db);

    let response = app.oneshot(enroll_request(&user.id, 9999)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Course not found");
}
