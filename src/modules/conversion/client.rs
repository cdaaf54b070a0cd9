use super::builder::StatusUpdateInterval;
use super::error::ConversionError;
use super::settings::JobSettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};

/// Job-control surface of the remote transcoding service.
#[async_trait]
pub trait JobClient: Send + Sync {
    async fn create_job(&self, request: CreateJobRequest) -> Result<JobDetails, ConversionError>;

    async fn cancel_job(&self, id: &str) -> Result<(), ConversionError>;

    async fn get_job(&self, id: &str) -> Result<JobDetails, ConversionError>;

    async fn list_jobs(&self, options: ListJobsOptions) -> Result<JobPage, ConversionError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateJobRequest {
    pub role: String,
    pub queue: Option<String>,
    pub settings: JobSettings,
    pub user_metadata: HashMap<String, String>,
    pub tags: HashMap<String, String>,
    pub status_update_interval: StatusUpdateInterval,
    pub priority: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct JobDetails {
    pub id: Option<String>,
    pub arn: Option<String>,
    pub status: Option<String>,
    pub current_phase: Option<String>,
    pub job_percent_complete: Option<i32>,
    pub queue: Option<String>,
    pub priority: Option<i32>,
    pub error_code: Option<i32>,
    pub error_message: Option<String>,
    /// Seconds since the Unix epoch.
    pub created_at: Option<i64>,
    pub user_metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct JobPage {
    pub jobs: Vec<JobDetails>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListJobsOptions {
    /// Page size, 1 to 20.
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    /// `ASCENDING` or `DESCENDING`.
    pub order: Option<String>,
    pub queue: Option<String>,
    /// `SUBMITTED`, `PROGRESSING`, `COMPLETE`, `CANCELED` or `ERROR`.
    pub status: Option<String>,
}
