use std::time::Duration;

use clap::Parser;

use crate::{
    cli::{device::DeviceArgs, mqtt::MqttArgs},
    poll::PollLoop,
    prelude::*,
};

#[derive(Parser)]
pub struct RunArgs {
    #[clap(flatten)]
    pub device: DeviceArgs,

    /// Poll interval, for example `90s` or `2min`; a bare number is taken as seconds.
    #[clap(
        long,
        env = "INVERTER_READ_INTERVAL",
        default_value = "60s",
        value_parser = parse_interval,
    )]
    pub read_interval: Duration,

    /// Also publish every register under the raw catalog names.
    #[clap(long = "with-telemetry", env = "PUBLISH_TELEMETRY")]
    pub with_telemetry: bool,

    #[clap(flatten)]
    pub mqtt: MqttArgs,
}

impl RunArgs {
    pub async fn run(self) -> Result {
        PollLoop::builder()
            .logger(self.device.logger())
            .dispatcher(self.mqtt.dispatcher()?)
            .interval(self.read_interval)
            .with_telemetry(self.with_telemetry)
            .build()
            .run()
            .await
    }
}

fn parse_interval(value: &str) -> Result<Duration, humantime::DurationError> {
    value
        .parse()
        .map_or_else(|_| humantime::parse_duration(value), |seconds| Ok(Duration::from_secs(seconds)))
}
