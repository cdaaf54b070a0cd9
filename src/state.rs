use crate::config::settings::{AppConfig, ConverterConfig};
use crate::infrastructure::http::fetcher::HttpFetcher;
use crate::modules::conversion::client::JobClient;
use crate::modules::conversion::template::JobSettingsTemplate;
use crate::modules::webhook::events::EventBus;
use crate::modules::webhook::service::WebhookService;
use crate::modules::webhook::validator::SnsMessageValidator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub converter: Arc<ConverterConfig>,
    pub jobs: Arc<dyn JobClient>,
    pub template: Arc<dyn JobSettingsTemplate>,
    pub verifier: SnsMessageValidator,
    pub webhooks: WebhookService,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        jobs: Arc<dyn JobClient>,
        template: Arc<dyn JobSettingsTemplate>,
        fetcher: Arc<dyn HttpFetcher>,
        events: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            converter: Arc::new(config.converter),
            jobs,
            template,
            verifier: SnsMessageValidator::new(fetcher.clone()),
            webhooks: WebhookService::new(fetcher, events),
        }
    }
}
