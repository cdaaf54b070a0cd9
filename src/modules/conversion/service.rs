use super::builder::{JobSubmission, MediaConverter};
use super::client::{JobDetails, JobPage, ListJobsOptions};
use super::dto::CreateConversionRequest;
use super::error::ConversionError;
use crate::state::AppState;

pub struct ConversionService;

impl ConversionService {
    fn converter(state: &AppState) -> MediaConverter {
        MediaConverter::new(
            state.jobs.clone(),
            state.converter.clone(),
            state.template.as_ref(),
        )
    }

    pub async fn create(
        state: AppState,
        req: CreateConversionRequest,
    ) -> Result<JobDetails, ConversionError> {
        Self::converter(&state)
            .input(&req.input_path, req.input_bucket.as_deref())
            .destination(&req.destination_path, req.destination_bucket.as_deref())
            .submit(JobSubmission {
                settings: None,
                user_metadata: req.user_metadata,
                tags: req.tags,
                priority: req.priority,
            })
            .await
    }

    pub async fn find_by_id(state: AppState, id: &str) -> Result<JobDetails, ConversionError> {
        Self::converter(&state).get_job(id).await
    }

    pub async fn list(state: AppState, options: ListJobsOptions) -> Result<JobPage, ConversionError> {
        Self::converter(&state).list_jobs(options).await
    }

    pub async fn cancel(state: AppState, id: &str) -> Result<(), ConversionError> {
        Self::converter(&state).cancel_job(id).await
    }
}
