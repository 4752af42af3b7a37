use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::database::models::NewCourse;

/// Errors from the relational store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl StoreError {
    /// Whether the store itself is gone, as opposed to the pool being
    /// saturated or shutting down
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            StoreError::Sqlx(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed)
        )
    }
}

/// Data access for the HTTP surface.
///
/// Rows come back as JSON objects in whatever shape the table holds. Every
/// call is exactly one round trip and is never retried here.
#[async_trait]
pub trait Store: Send + Sync {
    /// All rows of `courses`, in storage order
    async fn list_courses(&self) -> Result<Vec<Value>, StoreError>;

    /// Insert one course and return the created row, generated id included
    async fn insert_course(&self, course: &NewCourse) -> Result<Value, StoreError>;

    /// All rows of `leads`, in storage order
    async fn list_leads(&self) -> Result<Vec<Value>, StoreError>;

    /// Cheap liveness probe used by the pool watchdog
    async fn ping(&self) -> Result<(), StoreError>;
}
