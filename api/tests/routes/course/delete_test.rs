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

fn delete_request(course_id: i64) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/api/course/course/{course_id}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_delete_course_success() {
    let db = setup_test_db().await;
    let course = CourseModel::create(&db, "Doomed", "to be removed")
        .await
        .unwrap();
    let app = make_app(db.clone());

    let response = app.oneshot(delete_request(course.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(
        CourseModel::get_by_id(&db, course.id)
            .await
            .unwrap()
            .is_none()
    );
}

/// Deleting a non-existent course id returns NotFound, never a server error.
#[tokio::test]
async fn test_delete_course_not_found() {
    let db = setup_test_db().await;
    let app = make_app(db);

    let response = app.oneshot(delete_request(9999)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Course not found");
}

#[tokio::test]
async fn test_delete_course_cascades_enrollments() {
    let db = setup_test_db().await;
    let user = UserModel::create(&db, "u-1", "alice", "alice@test.com")
        .await
        .unwrap();
    let course = CourseModel::create(&db, "Linked", "has an enrollment")
        .await
        .unwrap();
    EnrollmentModel::create(&db, &user.id, course.id)
        .await
        .unwrap();
    let app = make_app(db.clone());

    let response = app.oneshot(delete_request(course.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(
        EnrollmentModel::find_by_user_and_course(&db, &user.id, course.id)
            .await
            .unwrap()
            .is_none()
    );
}
