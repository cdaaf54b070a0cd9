use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    AwsRegion,
    AwsAccessKey,
    AwsSecretKey,
    AwsBucket,
    AwsRoot,
    MediaConvertUrl,
    MediaConvertIamArn,
    MediaConvertQueueArn,
    WebhookInterval,
    JobSettingsPath,
    RabbitMqUrl,
    EventsQueue,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::AwsRegion => "AWS_REGION",
            EnvKey::AwsAccessKey => "AWS_ACCESS_KEY_ID",
            EnvKey::AwsSecretKey => "AWS_SECRET_ACCESS_KEY",
            EnvKey::AwsBucket => "AWS_BUCKET",
            EnvKey::AwsRoot => "AWS_ROOT",
            EnvKey::MediaConvertUrl => "MEDIACONVERT_URL",
            EnvKey::MediaConvertIamArn => "MEDIACONVERT_IAM_ARN",
            EnvKey::MediaConvertQueueArn => "MEDIACONVERT_QUEUE_ARN",
            EnvKey::WebhookInterval => "MEDIACONVERT_WEBHOOK_INTERVAL",
            EnvKey::JobSettingsPath => "MEDIACONVERT_JOB_SETTINGS",
            EnvKey::RabbitMqUrl => "RABBITMQ_URL",
            EnvKey::EventsQueue => "MEDIACONVERT_EVENTS_QUEUE",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

/// Unset and blank variables both read as `None`.
pub fn get_opt(key: EnvKey) -> Option<String> {
    env::var(key.as_str())
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
