//! Course and content DELETE handlers.

use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course::Model as CourseModel;
use db::models::course_content::Model as ContentModel;
use util::paths;
use util::state::AppState;

/// DELETE /api/course/course/{course_id}
///
/// Delete a course. Content, enrollment and feedback rows referencing it are
/// removed by the cascading foreign keys.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` for an unknown id
pub async fn delete_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match CourseModel::delete(db, course_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Course deleted successfully")),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Course not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to delete course {course_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}

/// DELETE /api/course/course/{course_id}/content/{content_id}
///
/// Delete a content row and its stored file. File removal is best-effort;
/// a row whose file already vanished still deletes cleanly.
///
/// ### Responses
/// - `204 No Content`
/// - `404 Not Found` when the row does not exist for that course
pub async fn delete_content(
    State(app_state): State<AppState>,
    Path((course_id, content_id)): Path<(i64, i64)>,
) -> Response {
    let db = app_state.db();

    match ContentModel::delete_for_course(db, course_id, content_id).await {
        Ok(Some(row)) => {
            let fs_path = paths::content_file_path(&row.content);
            if let Err(e) = tokio::fs::remove_file(&fs_path).await {
                tracing::warn!("Could not remove content file {fs_path:?}: {e}");
            }
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Content not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to delete content {content_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}
