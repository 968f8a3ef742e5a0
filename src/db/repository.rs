use sqlx::SqliteConnection;

use crate::models::{Course, CourseRequest, CourseTable};

pub async fn fetch_courses(conn: &mut SqliteConnection) -> Result<Vec<Course>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM {} ORDER BY id",
        CourseTable::COLUMNS,
        CourseTable::NAME
    );
    sqlx::query_as::<_, Course>(&sql).fetch_all(conn).await
}

pub async fn find_course_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Course>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM {} WHERE id = ?1",
        CourseTable::COLUMNS,
        CourseTable::NAME
    );
    sqlx::query_as::<_, Course>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn insert_course(
    conn: &mut SqliteConnection,
    req: &CourseRequest,
) -> Result<Course, sqlx::Error> {
    let sql = format!(
        "INSERT INTO {} (title, classes, hours) VALUES (?1, ?2, ?3) RETURNING {}",
        CourseTable::NAME,
        CourseTable::COLUMNS
    );
    sqlx::query_as::<_, Course>(&sql)
        .bind(&req.title)
        .bind(req.classes)
        .bind(req.hours)
        .fetch_one(conn)
        .await
}

/// Replaces every mutable field of the course. `None` when no row has `id`.
pub async fn update_course(
    conn: &mut SqliteConnection,
    id: i64,
    req: &CourseRequest,
) -> Result<Option<Course>, sqlx::Error> {
    let sql = format!(
        "UPDATE {} SET title = ?1, classes = ?2, hours = ?3 WHERE id = ?4 RETURNING {}",
        CourseTable::NAME,
        CourseTable::COLUMNS
    );
    sqlx::query_as::<_, Course>(&sql)
        .bind(&req.title)
        .bind(req.classes)
        .bind(req.hours)
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn delete_course(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", CourseTable::NAME);
    let result = sqlx::query(&sql)
        .bind(id)
        .execute(conn)
        .await?
        .rows_affected();

    Ok(result > 0)
}

#[cfg(test)]
mod tests {
    use sqlx::{Connection, SqlitePool};
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::db::ensure_schema;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test db");

        ensure_schema(&pool).await.expect("Failed to create schema");

        pool
    }

    fn algorithms() -> CourseRequest {
        CourseRequest {
            title: "Algorithms".to_string(),
            classes: 10,
            hours: 40,
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch_course() {
        let pool = setup_test_db().await;
        let mut conn = pool.acquire().await.unwrap();

        let course = insert_course(&mut conn, &algorithms())
            .await
            .expect("Failed to insert course");
        assert_eq!(course.id, 1);
        assert_eq!(course.title, "Algorithms");
        assert_eq!(course.classes, 10);
        assert_eq!(course.hours, 40);

        let found = find_course_by_id(&mut conn, course.id)
            .await
            .expect("Failed to find course")
            .expect("Course not found");
        assert_eq!(found, course);

        let courses = fetch_courses(&mut conn).await.expect("Failed to fetch courses");
        assert_eq!(courses, vec![course]);
    }

    #[tokio::test]
    async fn test_fetch_courses_ordered_by_id() {
        let pool = setup_test_db().await;
        let mut conn = pool.acquire().await.unwrap();

        for title in ["C", "A", "B"] {
            let req = CourseRequest {
                title: title.to_string(),
                ..algorithms()
            };
            insert_course(&mut conn, &req).await.unwrap();
        }

        let ids: Vec<i64> = fetch_courses(&mut conn)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_course() {
        let pool = setup_test_db().await;
        let mut conn = pool.acquire().await.unwrap();
        let course = insert_course(&mut conn, &algorithms()).await.unwrap();

        let req = CourseRequest {
            title: "Algorithms II".to_string(),
            classes: 12,
            hours: 48,
        };
        let updated = update_course(&mut conn, course.id, &req)
            .await
            .expect("Failed to update course")
            .expect("Course not found");

        assert_eq!(updated.id, course.id);
        assert_eq!(updated.title, "Algorithms II");
        assert_eq!(updated.classes, 12);
        assert_eq!(updated.hours, 48);
    }

    #[tokio::test]
    async fn test_update_missing_course_creates_nothing() {
        let pool = setup_test_db().await;
        let mut conn = pool.acquire().await.unwrap();

        let updated = update_course(&mut conn, 42, &algorithms()).await.unwrap();
        assert!(updated.is_none());
        assert!(fetch_courses(&mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_course() {
        let pool = setup_test_db().await;
        let mut conn = pool.acquire().await.unwrap();
        let course = insert_course(&mut conn, &algorithms()).await.unwrap();

        assert!(delete_course(&mut conn, course.id).await.unwrap());
        assert!(find_course_by_id(&mut conn, course.id).await.unwrap().is_none());
        assert!(!delete_course(&mut conn, course.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_rolled_back_insert_is_discarded() {
        let pool = setup_test_db().await;

        {
            let mut tx = pool.begin().await.unwrap();
            insert_course(&mut tx, &algorithms()).await.unwrap();
            // dropped without commit
        }

        let mut conn = pool.acquire().await.unwrap();
        assert!(fetch_courses(&mut conn).await.unwrap().is_empty());

        let mut tx = conn.begin().await.unwrap();
        insert_course(&mut tx, &algorithms()).await.unwrap();
        tx.commit().await.unwrap();
        assert_eq!(fetch_courses(&mut conn).await.unwrap().len(), 1);
    }
}
