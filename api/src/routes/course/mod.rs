//! # Course Routes Module
//!
//! Defines and wires up routes for the `/api/course` endpoint group.
//!
//! ## Structure
//! - `post.rs` — POST handlers (create course, upload content, feedback, forum posts)
//! - `get.rs` — GET handlers (list/fetch courses, content listing and download, feedback, forum)
//! - `put.rs` — PUT handlers (edit course)
//! - `delete.rs` — DELETE handlers (delete course, delete content)
//!
//! The route shapes mirror the single-page client's expectations, including the
//! `/courses/{id}` vs `/course/{id}` split.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::{delete_content, delete_course};
use get::{download_content, get_course, get_course_content, get_courses, get_feedback, get_posts};
use post::{add_feedback, add_post, create_course, upload_content};
use put::edit_course;

/// Builds and returns the `/course` route group.
///
/// Routes:
/// - `POST   /`                                  → create a new course
/// - `POST   /{course_id}`                       → upload content files (multipart)
/// - `GET    /courses`                           → list all courses
/// - `GET    /courses/{course_id}`               → get a single course
/// - `PUT    /course/{course_id}`                → edit course details
/// - `DELETE /course/{course_id}`                → delete a course
/// - `GET    /course/{course_id}/content`        → list a course's content rows
/// - `GET    /course/{course_id}/content/{id}`   → download/stream a content file
/// - `DELETE /course/{course_id}/content/{id}`   → delete a content row and its file
/// - `GET    /feedback/{course_id}`              → list feedback with authors
/// - `POST   /feedback`                          → add feedback
/// - `GET    /forums`                            → list forum posts
/// - `POST   /forums`                            → add a forum post
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course))
        .route("/{course_id}", post(upload_content))
        .route("/courses", get(get_courses))
        .route("/courses/{course_id}", get(get_course))
        .route("/course/{course_id}", put(edit_course))
        .route("/course/{course_id}", delete(delete_course))
        .route("/course/{course_id}/content", get(get_course_content))
        .route(
            "/course/{course_id}/content/{content_id}",
            get(download_content),
        )
        .route(
            "/course/{course_id}/content/{content_id}",
            delete(delete_content),
        )
        .route("/feedback/{course_id}", get(get_feedback))
        .route("/feedback", post(add_feedback))
        .route("/forums", get(get_posts))
        .route("/forums", post(add_post))
}
