use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};
use tokio::time::{sleep, timeout};
use url::Url;

use super::{PublishFormat, Publisher};
use crate::{
    error::PublishError,
    measurement::{Measurement, Value},
    prelude::*,
};

pub struct MqttPublisher {
    client: AsyncClient,
    prefix: String,
    format: PublishFormat,
}

impl MqttPublisher {
    const CLIENT_ID: &str = "invt";
    const DEFAULT_PORT: u16 = 1883;
    const KEEP_ALIVE: Duration = Duration::from_secs(30);
    const PUBLISH_TIMEOUT: Duration = Duration::from_secs(1);
    const RECONNECT_DELAY: Duration = Duration::from_secs(1);

    /// Create the client and spawn its event loop driver.
    ///
    /// The connection itself is established lazily by the driver.
    pub fn connect(
        url: &Url,
        credentials: Option<(String, String)>,
        prefix: &str,
        format: PublishFormat,
    ) -> Result<Self> {
        let host = url.host_str().with_context(|| format!("`{url}` has no host"))?;
        let port = url.port().unwrap_or(Self::DEFAULT_PORT);
        info!(host, port, ?format, "connecting to the broker…");

        let mut options = MqttOptions::new(Self::CLIENT_ID, host, port);
        options.set_keep_alive(Self::KEEP_ALIVE);
        if let Some((username, password)) = credentials {
            options.set_credentials(username, password);
        }
        let (client, event_loop) = AsyncClient::new(options, 10);
        tokio::spawn(Self::drive(event_loop));

        Ok(Self { client, prefix: prefix.trim_end_matches('/').to_owned(), format })
    }

    async fn drive(mut event_loop: EventLoop) {
        loop {
            match event_loop.poll().await {
                Ok(Event::Incoming(Packet::ConnAck(_))) => info!("connected to the broker"),
                Ok(_) => {}
                Err(error) => {
                    warn!("broker connection lost: {error:#}");
                    sleep(Self::RECONNECT_DELAY).await;
                }
            }
        }
    }
}

#[async_trait]
impl Publisher for MqttPublisher {
    #[instrument(skip_all, level = Level::DEBUG, fields(topic = topic))]
    async fn publish(&self, topic: &str, measurement: Measurement) -> Result<(), PublishError> {
        let timestamp_millis = Utc::now().timestamp_millis();
        let messages = render(&self.prefix, self.format, topic, measurement, timestamp_millis)?;
        for (topic, payload) in messages {
            timeout(
                Self::PUBLISH_TIMEOUT,
                self.client.publish(topic.clone(), QoS::AtMostOnce, true, payload),
            )
            .await
            .map_err(|_| PublishError::Timeout { topic })??;
        }
        Ok(())
    }
}

/// Full topics and payloads of the retained messages for the measurement.
fn render(
    prefix: &str,
    format: PublishFormat,
    topic: &str,
    mut measurement: Measurement,
    timestamp_millis: i64,
) -> Result<Vec<(String, Vec<u8>)>, PublishError> {
    match format {
        PublishFormat::Topics => Ok(measurement
            .into_iter()
            .map(|(key, value)| (format!("{prefix}/{topic}/{key}"), value.to_string().into_bytes()))
            .collect()),
        PublishFormat::Json => {
            measurement.insert("LastTimestamp", Value::Integer(timestamp_millis));
            Ok(vec![(format!("{prefix}/{topic}"), serde_json::to_vec(&measurement)?)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn measurement() -> Measurement {
        [("frequency", Value::Scaled(49.98)), ("inverter1Temperature", Value::Scaled(41.0))]
            .into_iter()
            .collect()
    }

    #[test]
    fn render_topics_ok() -> Result {
        let messages = render("home/invt", PublishFormat::Topics, "gridOutput", measurement(), 0)?;
        assert_eq!(messages, [
            ("home/invt/gridOutput/frequency".to_owned(), b"49.98".to_vec()),
            ("home/invt/gridOutput/inverter1Temperature".to_owned(), b"41.00".to_vec()),
        ]);
        Ok(())
    }

    #[test]
    fn render_json_ok() -> Result {
        let topic = "gridOutput/phaseA";
        let messages = render("invt", PublishFormat::Json, topic, measurement(), 1_689_417_000_000)?;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, "invt/gridOutput/phaseA");
        assert_eq!(
            String::from_utf8(messages[0].1.clone())?,
            r#"{"LastTimestamp":1689417000000,"frequency":"49.98","inverter1Temperature":"41.00"}"#,
        );
        Ok(())
    }
}
