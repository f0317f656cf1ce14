//! Enrollment creation route.

use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course::Model as CourseModel;
use db::models::enrollment::Model as EnrollmentModel;
use db::models::user::Model as UserModel;
use util::state::AppState;

/// POST /api/enrollment/enroll/{user_id}/{course_id}
///
/// Enroll a user in a course.
///
/// The existence check and the insert are not one atomic step; the unique
/// index on (user_id, course_id) closes the race, and a racing insert's
/// unique-violation error maps to the same Bad Request response as the check.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "Enrolled successfully" }
/// ```
///
/// - `404 Not Found` — unknown user or course
/// - `400 Bad Request` — the pair is already enrolled
/// ```json
/// {
///   "success": false,
///   "message": "You are already enrolled in this course"
/// }
/// ```
pub async fn enroll_user(
    State(app_state): State<AppState>,
    Path((user_id, course_id)): Path<(String, i64)>,
) -> Response {
    let db = app_state.db();

    match UserModel::get_by_id(db, &user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("User not found")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Failed to fetch user {user_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    }

    match CourseModel::get_by_id(db, course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Course not found")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Failed to fetch course {course_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    }

    match EnrollmentModel::find_by_user_and_course(db, &user_id, course_id).await {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(
                    "You are already enrolled in this course",
                )),
            )
                .into_response();
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to check enrollment for {user_id}/{course_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response();
        }
    }

    match EnrollmentModel::create(db, &user_id, course_id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Enrolled successfully")),
        )
            .into_response(),
        Err(e) => {
            if e.to_string().contains("UNIQUE constraint failed") {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<()>::error(
                        "You are already enrolled in this course",
                    )),
                )
                    .into_response();
            }

            tracing::error!("Failed to enroll {user_id} in course {course_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}
