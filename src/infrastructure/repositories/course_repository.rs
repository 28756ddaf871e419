//! Course Repository Implementation
//!
//! PostgreSQL implementation of the CourseRepository trait.
//! Every write is a single statement, so each operation applies atomically.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Course, CourseFilter, CoursePatch, CourseRepository, NewCourse};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

const BACKEND: &str = "postgres";

/// Database row representation matching the courses table schema.
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: i64,
    name: String,
}

impl CourseRow {
    fn into_course(self) -> Course {
        Course {
            id: self.id,
            name: self.name,
        }
    }
}

/// PostgreSQL course repository implementation.
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    /// Create a new PgCourseRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    /// List courses, applying only the filters that are set.
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name
            FROM courses
            WHERE ($1::BIGINT IS NULL OR id = $1)
              AND ($2::TEXT IS NULL OR name = $2)
            ORDER BY id
            "#,
        )
        .bind(filter.id)
        .bind(filter.name.as_deref())
        .fetch_all(&self.pool)
        .await?;
        metrics::record_store_query("list", BACKEND, start.elapsed().as_secs_f64());

        Ok(rows.into_iter().map(CourseRow::into_course).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, CourseRow>("SELECT id, name FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        metrics::record_store_query("find_by_id", BACKEND, start.elapsed().as_secs_f64());

        Ok(row.map(CourseRow::into_course))
    }

    async fn create(&self, course: &NewCourse) -> Result<Course, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&course.name)
        .fetch_one(&self.pool)
        .await?;
        metrics::record_store_query("create", BACKEND, start.elapsed().as_secs_f64());

        Ok(row.into_course())
    }

    /// Unset patch fields keep their stored value via COALESCE.
    async fn update(&self, id: i64, patch: &CoursePatch) -> Result<Option<Course>, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            UPDATE courses
            SET name = COALESCE($2, name)
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_store_query("update", BACKEND, start.elapsed().as_secs_f64());

        Ok(row.map(CourseRow::into_course))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let start = Instant::now();
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        metrics::record_store_query("delete", BACKEND, start.elapsed().as_secs_f64());

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
