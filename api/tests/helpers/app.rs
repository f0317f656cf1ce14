use api::routes::routes;
use axum::Router;
use sea_orm::DatabaseConnection;
use util::state::AppState;

/// Builds the full application router over the given (usually in-memory)
/// database connection, mirroring the wiring in `main`.
pub fn make_app(db: DatabaseConnection) -> Router {
    Router::new()
        .nest("/api", routes())
        .with_state(AppState::new(db))
}
