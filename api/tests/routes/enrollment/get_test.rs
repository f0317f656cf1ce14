use crate::helpers::make_app;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::course::Model as CourseModel;
use db::models::enrollment::Model as EnrollmentModel;
use db::models::user::Model as UserModel;
use db::test_utils::setup_test_db;
use tower::ServiceExt;

fn mycourses_request(user_id: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/api/enrollment/mycourses/{user_id}"))
        .body(Body::empty())
        .unwrap()
}

/// A user with zero enrollments gets an empty array, not NotFound. The same
/// holds for a user id that does not exist at all.
#[tokio::test]
async fn test_mycourses_empty() {
    let db = setup_test_db().await;
    UserModel::create(&db, "u-1", "alice", "alice@test.com")
        .await
        .unwrap();
    let app = make_app(db);

    for user_id in ["u-1", "nobody"] {
        let response = app
            .clone()
            .oneshot(mycourses_request(user_id))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["data"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_mycourses_lists_enrolled_courses_only() {
    let db = setup_test_db().await;
    let user = UserModel::create(&db, "u-1", "alice", "alice@test.com")
        .await
        .unwrap();
    let enrolled = CourseModel::create(&db, "Enrolled", "in").await.unwrap();
    CourseModel::create(&db, "Skipped", "out").await.unwrap();
    EnrollmentModel::create(&db, &user.id, enrolled.id)
        .await
        .unwrap();
    let app = make_app(db);

    let response = app.oneshot(mycourses_request(&user.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"].as_i64().unwrap(), enrolled.id);
    assert_eq!(data[0]["title"], "Enrolled");
}
