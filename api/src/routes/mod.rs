//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain:
//! - `/health` → Health check endpoint
//! - `/course` → Course CRUD, content upload/download, feedback, forum posts
//! - `/enrollment` → Enroll/unenroll users and list a user's courses

use crate::routes::{
    course::course_routes, enrollment::enrollment_routes, health::health_routes,
};
use axum::Router;
use util::state::AppState;

pub mod common;
pub mod course;
pub mod enrollment;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has `AppState` as its state type and mounts
/// all core API routes under their respective base paths.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/course", course_routes())
        .nest("/enrollment", enrollment_routes())
}
