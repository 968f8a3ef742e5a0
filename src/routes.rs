use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::api;
use crate::config::Settings;
use crate::error::AppError;
use crate::state::AppState;

pub fn router(settings: &Settings, state: AppState) -> Router {
    let prefix = settings.api_prefix();
    let app = Router::new().route("/health", get(health));

    // axum refuses to nest at the root
    let app = if prefix.is_empty() {
        app.merge(api::router())
    } else {
        app.nest(&prefix, api::router())
    };

    app.with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}
