use super::client::{CreateJobRequest, JobClient, JobDetails, JobPage, ListJobsOptions};
use super::error::ConversionError;
use super::location::StorageLocation;
use super::settings::JobSettings;
use super::template::JobSettingsTemplate;
use crate::config::settings::ConverterConfig;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Cadences MediaConvert accepts for `StatusUpdateInterval`, in seconds.
pub const ALLOWED_STATUS_UPDATE_INTERVALS: [u32; 15] = [
    10, 12, 15, 20, 30, 60, 120, 180, 240, 300, 360, 420, 480, 540, 600,
];

const DEFAULT_STATUS_UPDATE_INTERVAL: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdateInterval(u32);

impl StatusUpdateInterval {
    /// Falls back to 60 seconds for a missing or unsupported value.
    pub fn from_config(seconds: Option<u32>) -> Self {
        match seconds {
            Some(seconds) if ALLOWED_STATUS_UPDATE_INTERVALS.contains(&seconds) => Self(seconds),
            Some(seconds) => {
                warn!(
                    "Status update interval {}s is not supported by MediaConvert, using {}s",
                    seconds, DEFAULT_STATUS_UPDATE_INTERVAL
                );
                Self(DEFAULT_STATUS_UPDATE_INTERVAL)
            }
            None => Self(DEFAULT_STATUS_UPDATE_INTERVAL),
        }
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StatusUpdateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SECONDS_{}", self.0)
    }
}

/// Per-call inputs to [`MediaConverter::submit`].
#[derive(Debug, Clone, Default)]
pub struct JobSubmission {
    /// Replaces the builder's working document entirely when set.
    pub settings: Option<JobSettings>,
    pub user_metadata: HashMap<String, String>,
    pub tags: HashMap<String, String>,
    pub priority: i32,
}

/// Builds one MediaConvert job from the configured template.
///
/// ```ignore
/// let job = MediaConverter::new(client, config, template.as_ref())
///     .input("uploads/clip.mov", None)
///     .destination("encoded/clip/", None)
///     .submit(JobSubmission::default())
///     .await?;
/// ```
///
/// An instance owns its working document and is meant for a single submission.
pub struct MediaConverter {
    client: Arc<dyn JobClient>,
    config: Arc<ConverterConfig>,
    job_settings: JobSettings,
}

impl MediaConverter {
    pub fn new(
        client: Arc<dyn JobClient>,
        config: Arc<ConverterConfig>,
        template: &dyn JobSettingsTemplate,
    ) -> Self {
        Self {
            client,
            config,
            job_settings: template.get(),
        }
    }

    /// Sets the source file. `bucket` defaults to the configured bucket.
    pub fn input(mut self, path: &str, bucket: Option<&str>) -> Self {
        let location = StorageLocation::resolve(&self.config.storage, path, bucket).to_string();
        self.job_settings.set_file_input(location);
        self
    }

    /// Sets the output destination. `bucket` defaults to the configured bucket.
    pub fn destination(mut self, path: &str, bucket: Option<&str>) -> Self {
        let location = StorageLocation::resolve(&self.config.storage, path, bucket).to_string();
        self.job_settings.set_destination(location);
        self
    }

    pub fn job_settings(&self) -> &JobSettings {
        &self.job_settings
    }

    /// Creates the job. Unset locations are left for MediaConvert to reject.
    pub async fn submit(&self, submission: JobSubmission) -> Result<JobDetails, ConversionError> {
        let settings = submission
            .settings
            .unwrap_or_else(|| self.job_settings.clone());

        let request = CreateJobRequest {
            role: self.config.iam_role_arn.clone(),
            queue: self.config.queue_arn.clone(),
            settings,
            user_metadata: submission.user_metadata,
            tags: submission.tags,
            status_update_interval: StatusUpdateInterval::from_config(self.config.webhook_interval),
            priority: submission.priority,
        };

        let job = self.client.create_job(request).await?;
        info!(
            job_id = job.id.as_deref().unwrap_or_default(),
            "Submitted MediaConvert job"
        );

        Ok(job)
    }

    pub async fn cancel_job(&self, id: &str) -> Result<(), ConversionError> {
        self.client.cancel_job(id).await
    }

    pub async fn get_job(&self, id: &str) -> Result<JobDetails, ConversionError> {
        self.client.get_job(id).await
    }

    pub async fn list_jobs(&self, options: ListJobsOptions) -> Result<JobPage, ConversionError> {
        self.client.list_jobs(options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::StorageDefaults;
    use crate::modules::conversion::template::DefaultJobSettings;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClient {
        created: Mutex<Vec<CreateJobRequest>>,
        cancelled: Mutex<Vec<String>>,
        fail_create: bool,
    }

    #[async_trait]
    impl JobClient for RecordingClient {
        async fn create_job(&self, request: CreateJobRequest) -> Result<JobDetails, ConversionError> {
            if self.fail_create {
                return Err(ConversionError::EmptyResponse("CreateJob"));
            }
            self.created.lock().unwrap().push(request);
            Ok(JobDetails {
                id: Some("1792143000000-abc123".to_string()),
                status: Some("SUBMITTED".to_string()),
                ..Default::default()
            })
        }

        async fn cancel_job(&self, id: &str) -> Result<(), ConversionError> {
            self.cancelled.lock().unwrap().push(id.to_string());
            Ok(())
        }

        async fn get_job(&self, id: &str) -> Result<JobDetails, ConversionError> {
            Ok(JobDetails {
                id: Some(id.to_string()),
                ..Default::default()
            })
        }

        async fn list_jobs(&self, options: ListJobsOptions) -> Result<JobPage, ConversionError> {
            Ok(JobPage {
                jobs: vec![],
                next_token: options.next_token,
            })
        }
    }

    fn config(webhook_interval: Option<u32>) -> Arc<ConverterConfig> {
        Arc::new(ConverterConfig {
            iam_role_arn: "arn:aws:iam::123456789012:role/MediaConvert".to_string(),
            queue_arn: Some("arn:aws:mediaconvert:us-east-1:123456789012:queues/Default".to_string()),
            webhook_interval,
            storage: StorageDefaults {
                bucket: "b".to_string(),
                root: "/r/".to_string(),
            },
        })
    }

    fn converter(client: Arc<RecordingClient>, webhook_interval: Option<u32>) -> MediaConverter {
        MediaConverter::new(client, config(webhook_interval), &DefaultJobSettings)
    }

    #[test]
    fn input_writes_resolved_location_into_the_input_hole() {
        let converter = converter(Arc::default(), None).input("x/y.mp4", None);

        assert_eq!(converter.job_settings().file_input(), Some("s3://b/r/x/y.mp4"));
        assert_eq!(converter.job_settings().destination(), None);
    }

    #[test]
    fn second_input_call_wins_and_nothing_else_changes() {
        let converter = converter(Arc::default(), None)
            .input("first.mov", None)
            .input("second.mov", Some("other"));

        let mut expected = DefaultJobSettings.get();
        expected.set_file_input("s3://other/r/second.mov".to_string());

        assert_eq!(converter.job_settings(), &expected);
    }

    #[test]
    fn input_and_destination_are_order_independent() {
        let a = converter(Arc::default(), None)
            .input("in.mov", None)
            .destination("out/", None);
        let b = converter(Arc::default(), None)
            .destination("out/", None)
            .input("in.mov", None);

        assert_eq!(a.job_settings(), b.job_settings());
        assert_eq!(a.job_settings().destination(), Some("s3://b/r/out/"));
    }

    #[test]
    fn unsupported_interval_falls_back_to_sixty_seconds() {
        assert_eq!(StatusUpdateInterval::from_config(Some(45)).seconds(), 60);
        assert_eq!(StatusUpdateInterval::from_config(None).seconds(), 60);
        assert_eq!(StatusUpdateInterval::from_config(Some(30)).seconds(), 30);
        assert_eq!(StatusUpdateInterval::from_config(Some(600)).to_string(), "SECONDS_600");
    }

    #[tokio::test]
    async fn submit_sends_working_document_with_configured_role_and_cadence() {
        let client = Arc::new(RecordingClient::default());
        let job = converter(client.clone(), Some(30))
            .input("in.mov", None)
            .destination("out/", None)
            .submit(JobSubmission {
                user_metadata: HashMap::from([("media_id".to_string(), "42".to_string())]),
                priority: 5,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(job.id.as_deref(), Some("1792143000000-abc123"));

        let created = client.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        let request = &created[0];
        assert_eq!(request.role, "arn:aws:iam::123456789012:role/MediaConvert");
        assert_eq!(request.status_update_interval.to_string(), "SECONDS_30");
        assert_eq!(request.priority, 5);
        assert_eq!(request.user_metadata.get("media_id").map(String::as_str), Some("42"));
        assert_eq!(request.settings.file_input(), Some("s3://b/r/in.mov"));
        assert_eq!(request.settings.destination(), Some("s3://b/r/out/"));
    }

    #[tokio::test]
    async fn submit_with_disallowed_cadence_uses_sixty_seconds() {
        let client = Arc::new(RecordingClient::default());
        converter(client.clone(), Some(45))
            .submit(JobSubmission::default())
            .await
            .unwrap();

        let created = client.created.lock().unwrap();
        assert_eq!(created[0].status_update_interval.seconds(), 60);
        assert_eq!(created[0].priority, 0);
    }

    #[tokio::test]
    async fn explicit_settings_replace_the_working_document() {
        let client = Arc::new(RecordingClient::default());
        let mut replacement = JobSettings::default();
        replacement.set_file_input("s3://elsewhere/in.mxf".to_string());

        converter(client.clone(), None)
            .input("ignored.mov", None)
            .submit(JobSubmission {
                settings: Some(replacement.clone()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(client.created.lock().unwrap()[0].settings, replacement);
    }

    #[tokio::test]
    async fn remote_failures_are_returned_to_the_caller() {
        let client = Arc::new(RecordingClient {
            fail_create: true,
            ..Default::default()
        });

        let err = converter(client, None)
            .submit(JobSubmission::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ConversionError::EmptyResponse("CreateJob")));
    }

    #[tokio::test]
    async fn job_queries_pass_straight_through() {
        let client = Arc::new(RecordingClient::default());
        let converter = converter(client.clone(), None);

        converter.cancel_job("job-1").await.unwrap();
        let job = converter.get_job("job-2").await.unwrap();
        let page = converter
            .list_jobs(ListJobsOptions {
                next_token: Some("page-2".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(client.cancelled.lock().unwrap().as_slice(), ["job-1".to_string()]);
        assert_eq!(job.id.as_deref(), Some("job-2"));
        assert_eq!(page.next_token.as_deref(), Some("page-2"));
    }
}
