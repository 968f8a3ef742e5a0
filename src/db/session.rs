use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::{Sqlite, SqliteConnection, Transaction};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Per-request database session.
///
/// Wraps a transaction taken from the shared pool. Call [`Session::commit`]
/// to persist writes; dropping the session on any other path rolls back and
/// hands the connection back to the pool.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    pub async fn begin(state: &AppState) -> Result<Self, AppError> {
        let tx = state.db.begin().await?;
        Ok(Self { tx })
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        debug!("session committed");
        Ok(())
    }
}

impl Deref for Session {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.tx
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tx
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Session::begin(state).await
    }
}
