use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::models::NewCourse;
use crate::database::store::{Store, StoreError};

/// Build the shared connection pool.
///
/// The pool is lazy: no connection is opened until the first query, so the
/// server can come up before the database does. The pool owns connection
/// lifetimes and concurrency limits.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect_lazy(&config.url)?;

    info!("Created database pool (max_connections={})", config.max_connections);
    Ok(pool)
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    const SELECT_COURSES: &'static str = "SELECT row_to_json(t) AS row FROM (SELECT * FROM courses) t";

    const INSERT_COURSE: &'static str = "WITH inserted AS (\
         INSERT INTO courses (title, description, price, duration) \
         VALUES ($1, $2, $3, $4) RETURNING *\
         ) SELECT row_to_json(inserted) AS row FROM inserted";

    const SELECT_LEADS: &'static str = "SELECT row_to_json(t) AS row FROM (SELECT * FROM leads) t";

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn select_rows(&self, sql: &str) -> Result<Vec<Value>, StoreError> {
        let rows = sqlx::query_scalar::<_, Value>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_courses(&self) -> Result<Vec<Value>, StoreError> {
        self.select_rows(Self::SELECT_COURSES).await
    }

    async fn insert_course(&self, course: &NewCourse) -> Result<Value, StoreError> {
        let row = sqlx::query_scalar::<_, Value>(Self::INSERT_COURSE)
            .bind(&course.title)
            .bind(&course.description)
            .bind(course.price)
            .bind(&course.duration)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_leads(&self) -> Result<Vec<Value>, StoreError> {
        self.select_rows(Self::SELECT_LEADS).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
