use crate::modules::webhook::events::{ConversionEvent, EventBus};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use lapin::{
    options::*, types::FieldTable, BasicProperties, Channel, Connection,
    ConnectionProperties,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Publishes conversion events as persistent JSON messages on a durable queue.
#[derive(Clone)]
pub struct RabbitMqEventBus {
    url: String,
    queue: String,
    conn: Arc<Mutex<Connection>>,
    channel: Arc<Mutex<Channel>>,
}

impl RabbitMqEventBus {
    async fn connect(url: &str) -> Result<(Connection, Channel)> {
        info!("Connecting to RabbitMQ");
        let conn = Connection::connect(url, ConnectionProperties::default())
            .await
            .map_err(|e| anyhow!("Failed to connect to RabbitMQ: {}", e))?;

        let channel = conn
            .create_channel()
            .await
            .map_err(|e| anyhow!("Failed to create channel: {}", e))?;

        Ok((conn, channel))
    }

    pub async fn new(url: &str, queue: &str) -> Result<Self> {
        let (conn, channel) = Self::connect(url).await?;
        info!("✅ RabbitMQ event bus ready on queue '{}'", queue);

        Ok(Self {
            url: url.to_string(),
            queue: queue.to_string(),
            conn: Arc::new(Mutex::new(conn)),
            channel: Arc::new(Mutex::new(channel)),
        })
    }

    async fn reconnect(&self) -> Result<()> {
        warn!("RabbitMQ connection dropped, reconnecting...");
        let (conn, channel) = Self::connect(&self.url).await?;
        *self.conn.lock().await = conn;
        *self.channel.lock().await = channel;
        Ok(())
    }

    async fn publish_payload(&self, payload: &[u8]) -> Result<()> {
        let channel = self.channel.lock().await;

        channel
            .queue_declare(
                &self.queue,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|e| anyhow!("Failed to declare queue: {}", e))?;

        channel
            .basic_publish(
                "",
                &self.queue,
                BasicPublishOptions::default(),
                payload,
                BasicProperties::default()
                    .with_content_type("application/json".into())
                    .with_delivery_mode(2),
            )
            .await
            .map_err(|e| anyhow!("Failed to publish event: {}", e))?
            .await
            .map_err(|e| anyhow!("Failed to confirm event publication: {}", e))?;

        Ok(())
    }
}

#[async_trait]
impl EventBus for RabbitMqEventBus {
    async fn publish(&self, event: ConversionEvent) -> Result<()> {
        let payload = serde_json::to_vec(&event)?;

        if let Err(e) = self.publish_payload(&payload).await {
            warn!("RabbitMQ publish failed: {}. Retrying after reconnect.", e);
            self.reconnect().await?;
            self.publish_payload(&payload).await?;
        }

        debug!(event = event.name(), queue = %self.queue, "Conversion event published");
        Ok(())
    }
}
