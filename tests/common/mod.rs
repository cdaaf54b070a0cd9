#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use media_converter::config::settings::{
    AppConfig, ConverterConfig, MediaConvertConfig, StorageDefaults,
};
use media_converter::infrastructure::http::fetcher::{FetchError, HttpFetcher};
use media_converter::modules::conversion::client::{
    CreateJobRequest, JobClient, JobDetails, JobPage, ListJobsOptions,
};
use media_converter::modules::conversion::error::ConversionError;
use media_converter::modules::conversion::template::DefaultJobSettings;
use media_converter::modules::webhook::events::{ConversionEvent, EventBus};
use media_converter::state::AppState;
use std::sync::{Arc, Mutex};

pub const CERT: &str = include_str!("../fixtures/sns-signing-cert.pem");
pub const NOTIFICATION: &str = include_str!("../fixtures/notification-complete.json");
pub const CONFIRMATION: &str = include_str!("../fixtures/subscription-confirmation.json");
pub const UNKNOWN_STATUS: &str = include_str!("../fixtures/notification-unknown-status.json");
pub const MALFORMED_MESSAGE: &str =
    include_str!("../fixtures/notification-malformed-message.json");

/// Serves the fixture certificate for `.pem` URLs and an empty body otherwise.
#[derive(Default)]
pub struct FakeFetcher {
    pub urls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn non_certificate_fetches(&self) -> Vec<String> {
        self.urls
            .lock()
            .unwrap()
            .iter()
            .filter(|url| !url.ends_with(".pem"))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl HttpFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        self.urls.lock().unwrap().push(url.to_string());
        if url.ends_with(".pem") {
            Ok(Bytes::from_static(CERT.as_bytes()))
        } else {
            Ok(Bytes::new())
        }
    }
}

#[derive(Default)]
pub struct FakeBus {
    pub events: Mutex<Vec<ConversionEvent>>,
}

#[async_trait]
impl EventBus for FakeBus {
    async fn publish(&self, event: ConversionEvent) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

/// Records submitted jobs. Fails every call when `fail` is set.
#[derive(Default)]
pub struct FakeJobs {
    pub created: Mutex<Vec<CreateJobRequest>>,
    pub canceled: Mutex<Vec<String>>,
    pub fail: bool,
}

impl FakeJobs {
    fn check(&self) -> Result<(), ConversionError> {
        if self.fail {
            return Err(ConversionError::EmptyResponse("test"));
        }
        Ok(())
    }
}

#[async_trait]
impl JobClient for FakeJobs {
    async fn create_job(&self, request: CreateJobRequest) -> Result<JobDetails, ConversionError> {
        self.check()?;
        let details = JobDetails {
            id: Some("job-1".to_string()),
            status: Some("SUBMITTED".to_string()),
            priority: Some(request.priority),
            user_metadata: request.user_metadata.clone(),
            ..Default::default()
        };
        self.created.lock().unwrap().push(request);
        Ok(details)
    }

    async fn cancel_job(&self, id: &str) -> Result<(), ConversionError> {
        self.check()?;
        self.canceled.lock().unwrap().push(id.to_string());
        Ok(())
    }

    async fn get_job(&self, id: &str) -> Result<JobDetails, ConversionError> {
        self.check()?;
        Ok(JobDetails {
            id: Some(id.to_string()),
            status: Some("PROGRESSING".to_string()),
            ..Default::default()
        })
    }

    async fn list_jobs(&self, options: ListJobsOptions) -> Result<JobPage, ConversionError> {
        self.check()?;
        Ok(JobPage {
            jobs: vec![JobDetails {
                id: Some("job-1".to_string()),
                status: options.status,
                ..Default::default()
            }],
            next_token: None,
        })
    }
}

pub fn config() -> AppConfig {
    AppConfig {
        server_port: 3000,
        media_convert: MediaConvertConfig {
            region: "us-east-1".to_string(),
            endpoint: None,
            access_key: None,
            secret_key: None,
        },
        converter: ConverterConfig {
            iam_role_arn: "arn:aws:iam::123456789012:role/MediaConvert".to_string(),
            queue_arn: None,
            webhook_interval: Some(30),
            storage: StorageDefaults {
                bucket: "media".to_string(),
                root: "uploads".to_string(),
            },
        },
        job_settings_path: None,
        rabbitmq_url: None,
        events_queue: "mediaconvert_events".to_string(),
    }
}

pub struct Harness {
    pub state: AppState,
    pub fetcher: Arc<FakeFetcher>,
    pub bus: Arc<FakeBus>,
    pub jobs: Arc<FakeJobs>,
}

pub fn harness(jobs: FakeJobs) -> Harness {
    let fetcher = Arc::new(FakeFetcher::default());
    let bus = Arc::new(FakeBus::default());
    let jobs = Arc::new(jobs);
    let state = AppState::new(
        config(),
        jobs.clone(),
        Arc::new(DefaultJobSettings),
        fetcher.clone(),
        bus.clone(),
    );

    Harness { state, fetcher, bus, jobs }
}

