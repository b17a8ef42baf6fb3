//! Publication of the assembled views.

mod mqtt;

use std::sync::Arc;

use async_trait::async_trait;
use clap::ValueEnum;

pub use self::mqtt::MqttPublisher;
use crate::{
    error::PublishError,
    measurement::{Measurement, Publication},
    prelude::*,
};

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish the measurement under the topic suffix, for example `gridOutput/phaseA`.
    async fn publish(&self, topic: &str, measurement: Measurement) -> Result<(), PublishError>;
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum PublishFormat {
    /// Retained message per key.
    #[default]
    Topics,

    /// Retained JSON object per topic, stamped with `LastTimestamp`.
    Json,
}

/// Fire-and-forget publication of every message of a view.
///
/// Does nothing when publishing is disabled.
#[derive(Clone, Default)]
pub struct Dispatcher(Option<Arc<dyn Publisher>>);

impl Dispatcher {
    pub fn new(publisher: impl Publisher + 'static) -> Self {
        Self(Some(Arc::new(publisher)))
    }

    pub const fn disabled() -> Self {
        Self(None)
    }

    /// Spawn a detached task per message, each owning its measurement.
    pub fn dispatch(&self, publication: Publication) {
        let Some(publisher) = &self.0 else {
            return;
        };
        for (topic, measurement) in publication.into_messages() {
            let publisher = Arc::clone(publisher);
            tokio::spawn(async move {
                match publisher.publish(&topic, measurement).await {
                    Ok(()) => debug!(%topic, "published"),
                    Err(error) => warn!(%topic, "failed to publish: {:#}", Error::from(error)),
                }
            });
        }
    }
}

/// Forwards every publication into a channel.
#[cfg(test)]
pub struct ChannelPublisher(pub tokio::sync::mpsc::UnboundedSender<(String, Measurement)>);

#[cfg(test)]
#[async_trait]
impl Publisher for ChannelPublisher {
    async fn publish(&self, topic: &str, measurement: Measurement) -> Result<(), PublishError> {
        let _ = self.0.send((topic.to_owned(), measurement));
        Ok(())
    }
}
