//! Router
//!
//! Maps URL paths to pages. Detail and edit pages carry a loader that
//! resolves their job record before the page is mounted:
//!
//! - `/`              → home overview
//! - `/jobs`          → full listing
//! - `/add-job`       → creation form (create)
//! - `/jobs/:id`      → detail, loads `:id` (delete)
//! - `/edit-job/:id`  → edit form, loads `:id` (update)
//! - anything else    → not found

use crate::client::{scoped, JobsApi};
use crate::models::Job;
use crate::types::AppResult;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Characters escaped when an id is written back into a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

fn encode_segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

/// Route parameters hold decoded identifiers; `path()` encodes them again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Jobs,
    AddJob,
    Job { id: String },
    EditJob { id: String },
    NotFound { path: String },
}

/// The mutation a page is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Create,
    Update,
    Delete,
}

impl Route {
    /// Parse a path. Query strings, fragments and one trailing slash are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };

        let segments: Vec<&str> = trimmed
            .strip_prefix('/')
            .unwrap_or(trimmed)
            .split('/')
            .collect();

        match segments.as_slice() {
            [""] => Route::Home,
            ["jobs"] => Route::Jobs,
            ["add-job"] => Route::AddJob,
            ["jobs", id] if !id.is_empty() => Route::Job {
                id: decode_segment(id),
            },
            ["edit-job", id] if !id.is_empty() => Route::EditJob {
                id: decode_segment(id),
            },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Jobs => "/jobs".to_string(),
            Route::AddJob => "/add-job".to_string(),
            Route::Job { id } => format!("/jobs/{}", encode_segment(id)),
            Route::EditJob { id } => format!("/edit-job/{}", encode_segment(id)),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Identifier the loader must resolve before the page mounts
    pub fn loader_id(&self) -> Option<&str> {
        match self {
            Route::Job { id } | Route::EditJob { id } => Some(id),
            _ => None,
        }
    }

    pub fn capability(&self) -> Option<Capability> {
        match self {
            Route::AddJob => Some(Capability::Create),
            Route::Job { .. } => Some(Capability::Delete),
            Route::EditJob { .. } => Some(Capability::Update),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// A route whose loader has settled successfully
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub route: Route,
    pub job: Option<Job>,
}

/// Run the route's loader, if it has one. Routes without a loader make no calls.
pub async fn run_loader(
    route: &Route,
    api: &dyn JobsApi,
    scope: &CancellationToken,
) -> AppResult<Option<Job>> {
    match route.loader_id() {
        Some(id) => {
            debug!("Loading job {} for {}", id, route);
            let job = scoped(scope, api.get_job(id)).await?;
            Ok(Some(job))
        }
        None => Ok(None),
    }
}

/// Parse `path` and resolve its data before the page is mounted
pub async fn resolve(
    path: &str,
    api: &dyn JobsApi,
    scope: &CancellationToken,
) -> AppResult<Resolution> {
    let route = Route::parse(path);
    let job = run_loader(&route, api, scope).await?;
    Ok(Resolution { route, job })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{job, Call, MockJobsApi};

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/jobs"), Route::Jobs);
        assert_eq!(Route::parse("/jobs/"), Route::Jobs);
        assert_eq!(Route::parse("/add-job"), Route::AddJob);
        assert_eq!(
            Route::parse("/jobs/abc123?tab=company"),
            Route::Job { id: "abc123".to_string() }
        );
        assert_eq!(
            Route::parse("/edit-job/7"),
            Route::EditJob { id: "7".to_string() }
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        for path in ["/nonexistent", "/jobs/1/extra", "/edit-job", "/edit-job/", "/add-job/x"] {
            assert_eq!(
                Route::parse(path),
                Route::NotFound { path: path.to_string() },
                "path {:?}",
                path
            );
        }
    }

    #[test]
    fn test_path_round_trips_and_capabilities() {
        let route = Route::Job { id: "42".to_string() };
        assert_eq!(Route::parse(&route.path()), route);
        assert_eq!(route.capability(), Some(Capability::Delete));
        assert_eq!(Route::AddJob.capability(), Some(Capability::Create));
        assert_eq!(Route::Jobs.capability(), None);
        assert_eq!(Route::Home.loader_id(), None);
    }

    #[test]
    fn test_encoded_ids_are_decoded_once() {
        let route = Route::parse("/jobs/a%20b");
        assert_eq!(route, Route::Job { id: "a b".to_string() });
        assert_eq!(route.path(), "/jobs/a%20b");

        let route = Route::parse("/edit-job/x%2Fy%25z");
        assert_eq!(route.loader_id(), Some("x/y%z"));
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[tokio::test]
    async fn test_loader_requests_decoded_id() {
        let api = MockJobsApi::with_jobs(vec![job("a b", "Spaced")]);
        let scope = CancellationToken::new();

        resolve("/jobs/a%20b", &api, &scope).await.unwrap();
        assert_eq!(api.calls(), vec![Call::Get("a b".to_string())]);
    }

    #[tokio::test]
    async fn test_detail_route_loads_exactly_once() {
        let api = MockJobsApi::with_jobs(vec![job("abc123", "Rust Developer")]);
        let scope = CancellationToken::new();

        let resolution = resolve("/jobs/abc123", &api, &scope).await.unwrap();

        assert_eq!(api.calls(), vec![Call::Get("abc123".to_string())]);
        assert_eq!(resolution.job.unwrap().title, "Rust Developer");
    }

    #[tokio::test]
    async fn test_unmapped_path_makes_no_calls() {
        let api = MockJobsApi::default();
        let scope = CancellationToken::new();

        let resolution = resolve("/nonexistent", &api, &scope).await.unwrap();

        assert!(matches!(resolution.route, Route::NotFound { .. }));
        assert!(resolution.job.is_none());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_loader_failure_is_returned() {
        let api = MockJobsApi::default();
        let scope = CancellationToken::new();

        let err = resolve("/edit-job/missing", &api, &scope).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_cancelled_scope_short_circuits_loader() {
        let api = MockJobsApi::with_jobs(vec![job("1", "Any")]);
        let scope = CancellationToken::new();
        scope.cancel();

        let err = resolve("/jobs/1", &api, &scope).await.unwrap_err();
        assert!(err.is_cancelled());
    }
}
