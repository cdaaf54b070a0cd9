use crate::config::env::{self, EnvKey};

/// Bucket and root prefix used when a caller passes a bare path.
#[derive(Clone, Debug)]
pub struct StorageDefaults {
    pub bucket: String,
    pub root: String,
}

/// Everything a `MediaConverter` needs besides its client and template.
#[derive(Clone, Debug)]
pub struct ConverterConfig {
    pub iam_role_arn: String,
    pub queue_arn: Option<String>,
    /// Requested status-update cadence in seconds, validated at submit time.
    pub webhook_interval: Option<u32>,
    pub storage: StorageDefaults,
}

#[derive(Clone, Debug)]
pub struct MediaConvertConfig {
    pub region: String,
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub media_convert: MediaConvertConfig,
    pub converter: ConverterConfig,
    pub job_settings_path: Option<String>,
    pub rabbitmq_url: Option<String>,
    pub events_queue: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            media_convert: MediaConvertConfig {
                region: env::get_or(EnvKey::AwsRegion, "us-east-1"),
                endpoint: env::get_opt(EnvKey::MediaConvertUrl),
                access_key: env::get_opt(EnvKey::AwsAccessKey),
                secret_key: env::get_opt(EnvKey::AwsSecretKey),
            },
            converter: ConverterConfig {
                iam_role_arn: env::get(EnvKey::MediaConvertIamArn)?,
                queue_arn: env::get_opt(EnvKey::MediaConvertQueueArn),
                webhook_interval: env::get_opt(EnvKey::WebhookInterval)
                    .and_then(|value| value.trim().parse().ok()),
                storage: StorageDefaults {
                    bucket: env::get(EnvKey::AwsBucket)?,
                    root: env::get_or(EnvKey::AwsRoot, ""),
                },
            },
            job_settings_path: env::get_opt(EnvKey::JobSettingsPath),
            rabbitmq_url: env::get_opt(EnvKey::RabbitMqUrl),
            events_queue: env::get_or(EnvKey::EventsQueue, "mediaconvert_events"),
        })
    }
}
