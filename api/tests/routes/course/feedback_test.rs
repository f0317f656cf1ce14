use crate::helpers::make_app;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use db::models::course::Model as CourseModel;
use db::models::user::Model as UserModel;
use db::test_utils::setup_test_db;
use serde_json::json;
use tower::ServiceExt;

fn feedback_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/course/feedback")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_add_feedback_created_with_location() {
    let db = setup_test_db().await;
    let user = UserModel::create(&db, "u-1", "alice", "alice@test.com")
        .await
        .unwrap();
    let course = CourseModel::create(&db, "Rust", "desc").await.unwrap();
    let app = make_app(db);

    let response = app
        .oneshot(feedback_request(json!({
            "course_id": course.id,
            "user_id": user.id,
            "content": "Great pacing, more exercises please"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("/api/course/feedback/{}", course.id)
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["content"], "Great pacing, more exercises please");
    assert_eq!(json["data"]["course_id"].as_i64().unwrap(), course.id);
}

#[tokio::test]
async fn test_add_feedback_empty_content() {
    let db = setup_test_db().await;
    let user = UserModel::create(&db, "u-1", "alice", "alice@test.com")
        .await
        .unwrap();
    let course = CourseModel::create(&db, "Rust", "desc").await.unwrap();
    let app = make_app(db);

    let response = app
        .oneshot(feedback_request(json!({
            "course_id": course.id,
            "user_id": user.id,
            "content": ""
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_feedback_includes_author() {
    let db = setup_test_db().await;
    let user = UserModel::create(&db, "u-1", "alice", "alice@test.com")
        .await
        .unwrap();
    let course = CourseModel::create(&db, "Rust", "desc").await.unwrap();
    let app = make_app(db);

    let response = app
        .clone()
        .oneshot(feedback_request(json!({
            "course_id": course.id,
            "user_id": user.id,
            "content": "Loved the borrow checker chapter"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/course/feedback/{}", course.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["content"], "Loved the borrow checker chapter");
    assert_eq!(data[0]["user"]["username"], "alice");
    assert_eq!(data[0]["user"]["email"], "alice@test.com");
}
