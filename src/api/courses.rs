use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{debug, info};

use crate::db::{Session, repository};
use crate::error::AppError;
use crate::models::{Course, CourseRequest};
use crate::state::AppState;

pub const COURSE_NOT_FOUND: &str = "Course not found";
// Existing clients match on this exact wording for updates.
pub const CURSO_NAO_ENCONTRADO: &str = "Curso não encontrado.";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
}

async fn create_course(
    mut session: Session,
    Json(req): Json<CourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    req.validate()?;
    let course = repository::insert_course(&mut session, &req).await?;
    session.commit().await?;
    info!("created course {}", course.id);
    Ok((StatusCode::CREATED, Json(course)))
}

async fn list_courses(mut session: Session) -> Result<Json<Vec<Course>>, AppError> {
    let courses = repository::fetch_courses(&mut session).await?;
    debug!("listing {} courses", courses.len());
    Ok(Json(courses))
}

async fn get_course(
    Path(id): Path<i64>,
    mut session: Session,
) -> Result<Json<Course>, AppError> {
    let course = repository::find_course_by_id(&mut session, id)
        .await?
        .ok_or_else(|| AppError::NotFound(COURSE_NOT_FOUND.to_string()))?;
    Ok(Json(course))
}

async fn update_course(
    Path(id): Path<i64>,
    mut session: Session,
    Json(req): Json<CourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    req.validate()?;
    let course = repository::update_course(&mut session, id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound(CURSO_NAO_ENCONTRADO.to_string()))?;
    session.commit().await?;
    info!("updated course {}", id);
    Ok((StatusCode::ACCEPTED, Json(course)))
}

async fn delete_course(
    Path(id): Path<i64>,
    mut session: Session,
) -> Result<StatusCode, AppError> {
    if !repository::delete_course(&mut session, id).await? {
        return Err(AppError::NotFound(COURSE_NOT_FOUND.to_string()));
    }
    session.commit().await?;
    info!("deleted course {}", id);
    Ok(StatusCode::NO_CONTENT)
}
