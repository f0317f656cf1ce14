//! # Enrollment Routes Module
//!
//! Defines and wires up routes for the `/api/enrollment` endpoint group.
//!
//! ## Structure
//! - `post.rs` — enroll a user into a course
//! - `delete.rs` — remove a user's enrollment
//! - `get.rs` — list the courses a user is enrolled in

use axum::{
    Router,
    routing::{delete, get, post},
};
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;

use delete::unenroll_user;
use get::get_my_courses;
use post::enroll_user;

/// Builds and returns the `/enrollment` route group.
///
/// Routes:
/// - `POST   /enroll/{user_id}/{course_id}`   → enroll a user
/// - `DELETE /unenroll/{user_id}/{course_id}` → remove an enrollment
/// - `GET    /mycourses/{user_id}`            → list a user's courses
pub fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/enroll/{user_id}/{course_id}", post(enroll_user))
        .route("/unenroll/{user_id}/{course_id}", delete(unenroll_user))
        .route("/mycourses/{user_id}", get(get_my_courses))
}
