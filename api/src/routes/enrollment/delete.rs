//! Enrollment removal route.

use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::enrollment::Model as EnrollmentModel;
use util::state::AppState;

/// DELETE /api/enrollment/unenroll/{user_id}/{course_id}
///
/// Remove a user's enrollment in a course.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "User unenrolled successfully" }
/// ```
///
/// - `404 Not Found` — no enrollment exists for the pair
pub async fn unenroll_user(
    State(app_state): State<AppState>,
    Path((user_id, course_id)): Path<(String, i64)>,
) -> impl IntoResponse {
    let db = app_state.db();

    match EnrollmentModel::delete_by_user_and_course(db, &user_id, course_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "User unenrolled successfully")),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(
                "User is not enrolled in the course",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to unenroll {user_id} from course {course_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}
