//! Resource Client
//!
//! Centralizes every network call against the job records endpoint.
//! `JobsApi` is the seam the router and the pages depend on;
//! `HttpJobsClient` is the `reqwest` implementation.

pub mod http;

pub use http::HttpJobsClient;

use crate::models::{Job, JobPatch, NewJob};
use crate::types::{AppError, AppResult};
use async_trait::async_trait;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Operations against the job records backend.
///
/// Every operation reports failure through its `Result`; nothing is
/// swallowed and nothing panics on a missing identifier.
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// List job records, optionally capped to the first `limit`.
    async fn list_jobs(&self, limit: Option<usize>) -> AppResult<Vec<Job>>;

    /// Read one record by identifier.
    async fn get_job(&self, id: &str) -> AppResult<Job>;

    /// Create a record. The backend assigns the identifier.
    async fn create_job(&self, job: &NewJob) -> AppResult<Job>;

    /// Apply a partial update to the record with `id`.
    async fn update_job(&self, id: &str, patch: &JobPatch) -> AppResult<Job>;

    /// Delete the record with `id`.
    async fn delete_job(&self, id: &str) -> AppResult<()>;
}

/// Run `request` for as long as `scope` is alive.
///
/// When the scope is cancelled first the request future is dropped, which
/// aborts the underlying HTTP call, and `AppError::Cancelled` is returned.
pub async fn scoped<T, F>(scope: &CancellationToken, request: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    tokio::select! {
        biased;
        _ = scope.cancelled() => Err(AppError::Cancelled),
        result = request => result,
    }
}
