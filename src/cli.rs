mod device;
mod mqtt;
mod query;
mod registers;
mod run;

use clap::{Parser, Subcommand};

use crate::{
    cli::{query::QueryArgs, registers::RegistersArgs, run::RunArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub async fn run(self) -> Result {
        match self.command {
            Command::Run(args) => args.run().await,
            Command::Query(args) => args.run().await,
            Command::Registers(args) => {
                args.run();
                Ok(())
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: poll the data logger and publish every view to the broker.
    #[clap(name = "run")]
    Run(Box<RunArgs>),

    /// Query a single view once and print it.
    #[clap(name = "query")]
    Query(Box<QueryArgs>),

    /// Print the register catalog.
    #[clap(name = "registers")]
    Registers(RegistersArgs),
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::CommandFactory;

    use super::*;
    use crate::{catalog::View, publish::PublishFormat};

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_run_ok() -> Result {
        let args = Args::try_parse_from([
            "invt-logger",
            "run",
            "--inverter-address",
            "192.168.1.50:8899",
            "--logger-serial",
            "1234567890",
            "--read-interval",
            "30s",
            "--mqtt-url",
            "tcp://broker:1883",
            "--mqtt-prefix",
            "home/invt",
            "--mqtt-format",
            "json",
        ])?;
        let Command::Run(args) = args.command else {
            bail!("expected the `run` command");
        };
        assert_eq!(args.device.serial_number, 1_234_567_890);
        assert_eq!(args.read_interval, Duration::from_secs(30));
        assert_eq!(args.mqtt.format, PublishFormat::Json);
        assert!(!args.with_telemetry);
        Ok(())
    }

    #[test]
    fn bare_read_interval_is_seconds() -> Result {
        let args = Args::try_parse_from([
            "invt-logger",
            "run",
            "--inverter-address",
            "localhost:8899",
            "--logger-serial",
            "1",
            "--read-interval",
            "90",
        ])?;
        let Command::Run(args) = args.command else {
            bail!("expected the `run` command");
        };
        assert_eq!(args.read_interval, Duration::from_secs(90));
        Ok(())
    }

    #[test]
    fn zero_serial_number_err() {
        let result = Args::try_parse_from([
            "invt-logger",
            "query",
            "station",
            "--inverter-address",
            "localhost:8899",
            "--logger-serial",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_query_ok() -> Result {
        let args = Args::try_parse_from([
            "invt-logger",
            "query",
            "pv-output",
            "--inverter-address",
            "localhost:8899",
            "--logger-serial",
            "1",
        ])?;
        let Command::Query(args) = args.command else {
            bail!("expected the `query` command");
        };
        assert_eq!(args.view, View::PvOutput);
        Ok(())
    }

    #[test]
    fn registers_needs_no_device() -> Result {
        let args = Args::try_parse_from(["invt-logger", "registers", "battery-output"])?;
        assert!(matches!(args.command, Command::Registers(_)));
        Ok(())
    }
}
