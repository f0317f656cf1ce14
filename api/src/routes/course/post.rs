//! Course creation, content upload, feedback and forum POST handlers.

use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::course::common::{
    ContentResponse, CourseRequest, CourseResponse, FeedbackRequest, FeedbackResponse, PostRequest,
    PostResponse,
};
use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use db::models::course::Model as CourseModel;
use db::models::course_content::{ContentType, Model as ContentModel};
use db::models::feedback::Model as FeedbackModel;
use db::models::post::Model as PostModel;
use util::paths;
use util::state::AppState;
use validator::Validate;

/// POST /api/course
///
/// Create a new course.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Rust for Beginners",
///   "description": "Ownership, borrowing and fearless concurrency"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "title": "Rust for Beginners",
///     "description": "Ownership, borrowing and fearless concurrency",
///     "created_at": "2025-08-18T12:00:00Z",
///     "updated_at": "2025-08-18T12:00:00Z"
///   },
///   "message": "Course created successfully"
/// }
/// ```
///
/// - `400 Bad Request` (missing/invalid fields)
/// ```json
/// {
///   "success": false,
///   "message": "Validation failed: title: Title is required"
/// }
/// ```
pub async fn create_course(
    State(app_state): State<AppState>,
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

    if title.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Validation failed: title: Title is required",
            )),
        )
            .into_response();
    }

    if description.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Validation failed: description: Description is required",
            )),
        )
            .into_response();
    }

    match CourseModel::create(db, title, description).await {
        Ok(course) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course created successfully",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create course: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}

/// POST /api/course/{course_id}
///
/// Upload one or more content files to a course.
///
/// ### Request Body (Multipart Form Data)
/// - `type` (string, required): "PDF" or "Video"; shared by every file in
///   the request.
/// - `files` (file, repeatable): the files to store. Zero-length files are
///   silently skipped.
///
/// Each stored file is written to `{storage_root}/uploads/{course_id}/{file_name}`
/// (same-named files are overwritten) and recorded as a content row whose
/// `content` field holds `{course_id}/{file_name}`.
///
/// ### Responses
///
/// - `200 OK`: one content row per stored file
/// - `400 Bad Request`: missing or unsupported `type`, or a filename that
///   reduces to nothing after sanitization
/// - `404 Not Found`: unknown course id
/// - `500 Internal Server Error`: filesystem or database failure
pub async fn upload_content(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    mut multipart: Multipart,
) -> Response {
    let db = app_state.db();

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
                Json(ApiResponse::<()>::error("Database error")),
            )
                .into_response();
        }
    }

    let mut content_type: Option<ContentType> = None;
    let mut files: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart.next_field().await.unwrap_or(None) {
        match field.name().unwrap_or("") {
            "type" => {
                let raw = field.text().await.unwrap_or_default();
                match raw.parse::<ContentType>() {
                    Ok(parsed) => content_type = Some(parsed),
                    Err(_) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ApiResponse::<()>::error("Unsupported content type.")),
                        )
                            .into_response();
                    }
                }
            }
            "files" | "files[]" => {
                let Some(name) = field.file_name().map(|s| s.to_string()) else {
                    continue;
                };
                let bytes = field.bytes().await.unwrap_or_default();
                files.push((name, bytes.to_vec()));
            }
            _ => continue,
        }
    }

    let Some(content_type) = content_type else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Missing required field: type")),
        )
            .into_response();
    };

    // Validate every filename up front so a bad one rejects the whole
    // request before any file is written or recorded.
    let mut to_store: Vec<(String, Vec<u8>)> = Vec::new();
    for (raw_name, bytes) in files {
        // Zero-length files are skipped without error.
        if bytes.is_empty() {
            continue;
        }

        let Some(file_name) = paths::sanitize_filename(&raw_name) else {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(format!(
                    "Invalid file name: {raw_name}"
                ))),
            )
                .into_response();
        };

        to_store.push((file_name, bytes));
    }

    let mut created: Vec<ContentResponse> = Vec::new();

    for (file_name, bytes) in to_store {
        let dir = paths::course_upload_dir(course_id);
        if let Err(e) = paths::ensure_dir(&dir) {
            tracing::error!("Failed to create upload directory {dir:?}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Failed to save file")),
            )
                .into_response();
        }

        // Last writer wins for same-named files within a course.
        if let Err(e) = tokio::fs::write(dir.join(&file_name), &bytes).await {
            tracing::error!("Failed to write uploaded file {file_name}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Failed to save file")),
            )
                .into_response();
        }

        let relative = format!("{}/{}", course_id, file_name);
        match ContentModel::create(db, course_id, content_type, &relative).await {
            Ok(row) => created.push(ContentResponse::from(row)),
            Err(e) => {
                tracing::error!("Failed to record content row for {relative}: {e}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error("Database error")),
                )
                    .into_response();
            }
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            created,
            "Content uploaded successfully",
        )),
    )
        .into_response()
}

/// POST /api/course/feedback
///
/// Record a user's feedback on a course.
///
/// ### Responses
///
/// - `201 Created` with a `Location` header pointing at the course's
///   feedback listing (`/api/course/feedback/{course_id}`).
/// - `400 Bad Request` on empty content.
pub async fn add_feedback(
    State(app_state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Response {
    let db = app_state.db();

    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response();
    }

    match FeedbackModel::create(db, req.course_id, &req.user_id, &req.content).await {
        Ok(feedback) => {
            let location = format!("/api/course/feedback/{}", feedback.course_id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(ApiResponse::success(
                    FeedbackResponse::from_row(feedback, None),
                    "Feedback added successfully",
                )),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to add feedback: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}

/// POST /api/course/forums
///
/// Create a forum post.
///
/// ### Responses
///
/// - `201 Created` with a `Location` header pointing at the forum listing
///   (`/api/course/forums`).
/// - `400 Bad Request` on empty content.
pub async fn add_post(
    State(app_state): State<AppState>,
    Json(req): Json<PostRequest>,
) -> Response {
    let db = app_state.db();

    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response();
    }

    match PostModel::create(db, &req.content).await {
        Ok(post) => (
            StatusCode::CREATED,
            [(header::LOCATION, "/api/course/forums".to_string())],
            Json(ApiResponse::success(
                PostResponse::from(post),
                "Post created successfully",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create post: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
            )
                .into_response()
        }
    }
}
