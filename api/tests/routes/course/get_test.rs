use crate::helpers::make_app;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::course::Model as CourseModel;
use db::test_utils::setup_test_db;
use tower::ServiceExt;

#[tokio::test]
async fn test_list_courses_returns_all() {
    let db = setup_test_db().await;
    CourseModel::create(&db, "First", "one").await.unwrap();
    CourseModel::create(&db, "Second", "two").await.unwrap();
    let app = make_app(db);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/course/courses")
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
    assert_eq!(data.len(), 2);
    let titles: Vec<&str> = data.iter().map(|c| c["title"].as_str().unwrap()).collect();
    assert!(titles.contains(&"First"));
    assert!(titles.contains(&"Second"));
}

#[tokio::test]
async fn test_get_course_not_found() {
    let db = setup_test_db().await;
    let app = make_app(db);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/course/courses/9999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Course not found");
}

#[tokio::test]
async fn test_list_content_empty_for_course_without_uploads() {
    let db = setup_test_db().await;
    let course = CourseModel::create(&db, "Empty", "no content").await.unwrap();
    let app = make_app(db);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/course/course/{}/content", course.id))
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
    assert!(json["data"].as_array().unwrap().is_empty());
}
