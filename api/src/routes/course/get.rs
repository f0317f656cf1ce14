//! Course, content, feedback and forum GET handlers.

use crate::response::ApiResponse;
use crate::routes::course::common::{
    ContentResponse, CourseResponse, FeedbackResponse, PostResponse,
};
use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use db::models::course::Model as CourseModel;
use db::models::course_content::{ContentType, Model as ContentModel};
use db::models::feedback::Model as FeedbackModel;
use db::models::post::Model as PostModel;
use tokio::{fs::File as FsFile, io::AsyncReadExt};
use tokio_util::io::ReaderStream;
use util::paths;
use util::state::AppState;

/// GET /api/course/courses
///
/// List all courses.
pub async fn get_courses(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match CourseModel::get_all(db).await {
        Ok(courses) => {
            let data: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Courses retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list courses: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}

/// GET /api/course/courses/{course_id}
///
/// Fetch a single course by id.
///
/// ### Responses
/// - `200 OK` with the course
/// - `404 Not Found` for an unknown id
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match CourseModel::get_by_id(db, course_id).await {
        Ok(Some(course)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Course not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch course {course_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}

/// GET /api/course/course/{course_id}/content
///
/// List the content rows for a course. Always `200`, possibly an empty array.
pub async fn get_course_content(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match ContentModel::get_for_course(db, course_id).await {
        Ok(rows) => {
            let data: Vec<ContentResponse> = rows.into_iter().map(ContentResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    data,
                    "Course content retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list content for course {course_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}

/// GET /api/course/course/{course_id}/content/{content_id}
///
/// Serve the stored file for a content row. PDFs are returned whole as an
/// attachment with `application/pdf`; videos are streamed with `video/mp4`.
///
/// ### Responses
/// - `200 OK`: the file bytes
/// - `400 Bad Request`: the stored type is neither "PDF" nor "Video"
/// - `404 Not Found`: no such content row, or the file is missing on disk
pub async fn download_content(
    State(app_state): State<AppState>,
    Path((course_id, content_id)): Path<(i64, i64)>,
) -> Response {
    let db = app_state.db();

    let row = match ContentModel::get_by_id_for_course(db, course_id, content_id).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Content not found")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Failed to fetch content {content_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Database error")),
            )
                .into_response();
        }
    };

    // Guard again at fetch time; rows written by other tools may carry
    // types this platform cannot serve.
    let kind = match row.content_type.parse::<ContentType>() {
        Ok(kind) => kind,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error("Unsupported content type.")),
            )
                .into_response();
        }
    };

    let fs_path = paths::content_file_path(&row.content);

    if tokio::fs::metadata(&fs_path).await.is_err() {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("File missing on disk")),
        )
            .into_response();
    }

    let file_name = fs_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "content".to_string());

    let mut file_handle = match FsFile::open(&fs_path).await {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("Failed to open content file {fs_path:?}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Could not open file")),
            )
                .into_response();
        }
    };

    match kind {
        ContentType::Pdf => {
            let mut buffer = Vec::new();
            if let Err(e) = file_handle.read_to_end(&mut buffer).await {
                tracing::error!("Failed to read content file {fs_path:?}: {e}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error("Failed to read file")),
                )
                    .into_response();
            }

            let mut headers = HeaderMap::new();
            headers.insert(
                header::CONTENT_DISPOSITION,
                HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file_name))
                    .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
            );
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(kind.mime()));

            (StatusCode::OK, headers, buffer).into_response()
        }
        ContentType::Video => {
            let stream = ReaderStream::new(file_handle);
            let mut headers = HeaderMap::new();
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(kind.mime()));

            (StatusCode::OK, headers, Body::from_stream(stream)).into_response()
        }
    }
}

/// GET /api/course/feedback/{course_id}
///
/// List feedback for a course, each entry carrying its authoring user.
pub async fn get_feedback(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match FeedbackModel::get_for_course_with_authors(db, course_id).await {
        Ok(rows) => {
            let data: Vec<FeedbackResponse> = rows
                .into_iter()
                .map(|(feedback, user)| FeedbackResponse::from_row(feedback, user))
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    data,
                    "Feedback retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list feedback for course {course_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}

/// GET /api/course/forums
///
/// List all forum posts.
pub async fn get_posts(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match PostModel::get_all(db).await {
        Ok(posts) => {
            let data: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Posts retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list posts: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}
