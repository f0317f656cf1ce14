//! Enrollment listing route.

use crate::response::ApiResponse;
use crate::routes::course::common::CourseResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::enrollment::Model as EnrollmentModel;
use util::state::AppState;

/// GET /api/enrollment/mycourses/{user_id}
///
/// List the courses a user is enrolled in. A user with no enrollments gets
/// `200` with an empty array, never `404`.
pub async fn get_my_courses(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let db = app_state.db();

    match EnrollmentModel::courses_for_user(db, &user_id).await {
        Ok(courses) => {
            let data: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Courses retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list courses for user {user_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}
