//! Course update routes.

use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::course::common::{CourseRequest, CourseResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::course::Model as CourseModel;
use util::state::AppState;
use validator::Validate;

/// PUT /api/course/course/{course_id}
///
/// Update a course's title and description.
///
/// ### Responses
/// - `200 OK` with the updated course
/// - `400 Bad Request` on missing/invalid fields
/// - `404 Not Found` for an unknown id
pub async fn edit_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Json(req): Json<CourseRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response();
    }

    let title = req.title.as_deref().map(str::trim).unwrap_or_default();
    let description = req.description.as_deref().map(str::trim).unwrap_or_default();

    if title.is_empty() || description.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Validation failed: title and description are required",
            )),
        )
            .into_response();
    }

    match CourseModel::edit(db, course_id, title, description).await {
        Ok(Some(course)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course updated successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Course not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update course {course_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}
