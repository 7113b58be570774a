// Job Board - terminal client for a REST job listings backend

pub mod client;
pub mod config;
pub mod listing;
pub mod models;
pub mod router;
pub mod shell;
pub mod tui; // Terminal User Interface
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use client::{HttpJobsClient, JobsApi};
pub use config::Config;
pub use models::{Company, Job, JobPatch, NewJob};
pub use router::Route;
pub use types::{AppError, AppResult};
