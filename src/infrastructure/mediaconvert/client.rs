use super::mapping;
use crate::config::settings::MediaConvertConfig;
use crate::modules::conversion::client::{
    CreateJobRequest, JobClient, JobDetails, JobPage, ListJobsOptions,
};
use crate::modules::conversion::error::ConversionError;
use async_trait::async_trait;
use aws_sdk_mediaconvert::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_mediaconvert::types::{
    Job, JobStatus as SdkJobStatus, Order, StatusUpdateInterval as SdkStatusUpdateInterval,
};
use aws_sdk_mediaconvert::{Client, Error as SdkError};
use tracing::{debug, info};

#[derive(Clone)]
pub struct MediaConvertService {
    client: Client,
}

impl MediaConvertService {
    /// Static credentials when both keys are configured, the default provider chain otherwise.
    pub async fn new(config: &MediaConvertConfig) -> Self {
        let builder = match (&config.access_key, &config.secret_key) {
            (Some(access_key), Some(secret_key)) => {
                let credentials = Credentials::new(access_key, secret_key, None, None, "static");
                Builder::new()
                    .behavior_version(BehaviorVersion::latest())
                    .credentials_provider(credentials)
            }
            _ => {
                let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;
                Builder::from(&shared)
            }
        };

        let mut builder = builder.region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(builder.build());

        info!("✅ MediaConvert client ready ({})", config.region);

        Self { client }
    }
}

impl From<&Job> for JobDetails {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id().map(str::to_string),
            arn: job.arn().map(str::to_string),
            status: job.status().map(|status| status.as_str().to_string()),
            current_phase: job.current_phase().map(|phase| phase.as_str().to_string()),
            job_percent_complete: job.job_percent_complete(),
            queue: job.queue().map(str::to_string),
            priority: job.priority(),
            error_code: job.error_code(),
            error_message: job.error_message().map(str::to_string),
            created_at: job.created_at().map(|created| created.secs()),
            user_metadata: job.user_metadata().cloned().unwrap_or_default(),
        }
    }
}

#[async_trait]
impl JobClient for MediaConvertService {
    async fn create_job(&self, request: CreateJobRequest) -> Result<JobDetails, ConversionError> {
        let interval = request.status_update_interval.to_string();

        let output = self
            .client
            .create_job()
            .role(request.role)
            .set_queue(request.queue)
            .settings(mapping::job_settings(&request.settings))
            .set_user_metadata(Some(request.user_metadata))
            .set_tags(Some(request.tags))
            .status_update_interval(SdkStatusUpdateInterval::from(interval.as_str()))
            .priority(request.priority)
            .send()
            .await
            .map_err(SdkError::from)?;

        output
            .job()
            .map(JobDetails::from)
            .ok_or(ConversionError::EmptyResponse("CreateJob"))
    }

    async fn cancel_job(&self, id: &str) -> Result<(), ConversionError> {
        self.client
            .cancel_job()
            .id(id)
            .send()
            .await
            .map_err(SdkError::from)?;

        debug!(job_id = id, "Cancelled MediaConvert job");
        Ok(())
    }

    async fn get_job(&self, id: &str) -> Result<JobDetails, ConversionError> {
        let output = self
            .client
            .get_job()
            .id(id)
            .send()
            .await
            .map_err(SdkError::from)?;

        output
            .job()
            .map(JobDetails::from)
            .ok_or(ConversionError::EmptyResponse("GetJob"))
    }

    async fn list_jobs(&self, options: ListJobsOptions) -> Result<JobPage, ConversionError> {
        let output = self
            .client
            .list_jobs()
            .set_max_results(options.max_results)
            .set_next_token(options.next_token)
            .set_order(options.order.as_deref().map(Order::from))
            .set_queue(options.queue)
            .set_status(options.status.as_deref().map(SdkJobStatus::from))
            .send()
            .await
            .map_err(SdkError::from)?;

        Ok(JobPage {
            jobs: output.jobs().iter().map(JobDetails::from).collect(),
            next_token: output.next_token().map(str::to_string),
        })
    }
}
