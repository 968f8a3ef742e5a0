use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courses_api::config::Settings;
use courses_api::db;
use courses_api::routes::router;
use courses_api::state::AppState;

const APP_TITLE: &str = "Cursos API - CRUD com SQL Alchemy";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "courses_api=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::new_from_env()?;

    let pool = db::connect(&settings).await?;
    db::ensure_schema(&pool).await?;

    let state = AppState { db: pool };

    let app = router(&settings, state);

    info!(
        "{} listening on http://{}{}",
        APP_TITLE,
        settings.bind_addr,
        settings.api_prefix()
    );

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
