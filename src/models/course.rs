use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

pub const TITLE_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub classes: i32,
    pub hours: i32,
}

/// Body accepted by create and update. An `id` sent by the client is
/// silently dropped; storage always assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRequest {
    pub title: String,
    pub classes: i32,
    pub hours: i32,
}

impl CourseRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let len = self.title.chars().count();
        if len > TITLE_MAX_CHARS {
            return Err(AppError::Validation(format!(
                "title must be at most {} characters, got {}",
                TITLE_MAX_CHARS, len
            )));
        }
        Ok(())
    }
}

/// Storage mapping for [`Course`], kept apart from the record type.
pub struct CourseTable;

impl CourseTable {
    pub const NAME: &'static str = "course";
    pub const COLUMNS: &'static str = "id, title, classes, hours";
    pub const CREATE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS course (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR(100),
            classes INTEGER,
            hours INTEGER
        )
    "#;
}
