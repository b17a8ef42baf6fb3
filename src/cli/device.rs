use clap::{Parser, value_parser};

use crate::{logger::Logger, transport::TcpTransport};

#[must_use]
#[derive(Parser)]
pub struct DeviceArgs {
    /// Data logger address as `host:port`.
    #[clap(long = "inverter-address", env = "INVERTER_ADDRESS")]
    pub address: String,

    /// Data logger serial number, printed on the logger sticker.
    #[clap(
        long = "logger-serial",
        env = "INVERTER_LOGGER_SERIAL",
        value_parser = value_parser!(u32).range(1..),
    )]
    pub serial_number: u32,
}

impl DeviceArgs {
    pub fn logger(&self) -> Logger<TcpTransport> {
        Logger::new(self.serial_number, TcpTransport::new(self.address.clone()))
    }
}
