pub mod courses;

use axum::Router;

use crate::state::AppState;

/// Every versioned endpoint, relative to the API prefix.
pub fn router() -> Router<AppState> {
    Router::new().merge(courses::router())
}
