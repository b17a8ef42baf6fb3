use clap::Parser;
use url::Url;

use crate::{
    prelude::*,
    publish::{Dispatcher, MqttPublisher, PublishFormat},
};

#[derive(Parser)]
pub struct MqttArgs {
    /// Broker URL, for example `tcp://broker:1883`.
    #[clap(long = "mqtt-url", env = "MQTT_URL")]
    pub url: Option<Url>,

    #[clap(long = "mqtt-user", env = "MQTT_USER")]
    pub user: Option<String>,

    #[clap(long = "mqtt-password", env = "MQTT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Topic prefix, publishing is disabled without it.
    #[clap(long = "mqtt-prefix", env = "MQTT_PREFIX")]
    pub prefix: Option<String>,

    #[clap(long = "mqtt-format", env = "MQTT_FORMAT", value_enum, default_value = "topics")]
    pub format: PublishFormat,
}

impl MqttArgs {
    pub fn dispatcher(self) -> Result<Dispatcher> {
        let (Some(url), Some(prefix)) = (self.url, self.prefix) else {
            warn!("broker URL or topic prefix is not set, publishing is disabled");
            return Ok(Dispatcher::disabled());
        };
        let credentials = self.user.map(|user| (user, self.password.unwrap_or_default()));
        let publisher = MqttPublisher::connect(&url, credentials, &prefix, self.format)
            .context("failed to set up the broker client")?;
        Ok(Dispatcher::new(publisher))
    }
}
