// HTTP implementation of the jobs resource client

use crate::client::JobsApi;
use crate::config::ApiConfig;
use crate::models::{Job, JobPatch, NewJob};
use crate::types::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use std::time::Duration;
use tracing::{debug, error, warn};
use validator::Validate;

const JOBS_SEGMENT: &str = "jobs";

pub struct HttpJobsClient {
    client: Client,
    base_url: Url,
}

impl HttpJobsClient {
    /// Create a client for the backend rooted at `base_url` (e.g. `http://localhost:8000/api`)
    pub fn new(base_url: &str) -> AppResult<Self> {
        Self::build(base_url, None)
    }

    /// Create a client from the API section of the configuration
    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        Self::build(
            &config.base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("invalid API base URL {:?}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "API base URL {} cannot carry a path",
                base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/jobs` or `{base}/jobs/{id}`, with the id percent-encoded
    fn endpoint(&self, id: Option<&str>) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AppError::Config(format!("API base URL {} cannot carry a path", self.base_url)))?;
            segments.pop_if_empty().push(JOBS_SEGMENT);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// Send a request, logging transport failures to the diagnostic channel
    async fn send(&self, operation: &str, request: reqwest::RequestBuilder) -> AppResult<Response> {
        let response = request.send().await.map_err(|e| {
            error!("{} failed before reaching the backend: {}", operation, e);
            AppError::from(e)
        })?;

        let status = response.status();
        debug!("{} -> {}", operation, status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("{} rejected by backend ({}): {}", operation, status, body);

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(operation.to_string()));
        }

        Err(AppError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(operation: &str, response: Response) -> AppResult<T> {
        response.json::<T>().await.map_err(|e| {
            error!("{} returned an unreadable body: {}", operation, e);
            AppError::Decode(format!("{}: {}", operation, e))
        })
    }
}

#[async_trait]
impl JobsApi for HttpJobsClient {
    async fn list_jobs(&self, limit: Option<usize>) -> AppResult<Vec<Job>> {
        let mut url = self.endpoint(None)?;
        if let Some(limit) = limit {
            url.query_pairs_mut().append_pair("_limit", &limit.to_string());
        }

        let response = self.send("list jobs", self.client.get(url)).await?;
        Self::decode("list jobs", response).await
    }

    async fn get_job(&self, id: &str) -> AppResult<Job> {
        let operation = format!("get job {}", id);
        let url = self.endpoint(Some(id))?;

        let response = self.send(&operation, self.client.get(url)).await?;
        Self::decode(&operation, response).await
    }

    async fn create_job(&self, job: &NewJob) -> AppResult<Job> {
        job.validate()?;
        let url = self.endpoint(None)?;

        let response = self
            .send("create job", self.client.post(url).json(job))
            .await?;
        Self::decode("create job", response).await
    }

    async fn update_job(&self, id: &str, patch: &JobPatch) -> AppResult<Job> {
        let operation = format!("update job {}", id);
        let url = self.endpoint(Some(id))?;

        let response = self
            .send(&operation, self.client.patch(url).json(patch))
            .await?;
        Self::decode(&operation, response).await
    }

    async fn delete_job(&self, id: &str) -> AppResult<()> {
        let operation = format!("delete job {}", id);
        let url = self.endpoint(Some(id))?;

        self.send(&operation, self.client.delete(url)).await?;
        Ok(())
    }
}
