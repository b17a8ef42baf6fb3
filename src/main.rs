#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod catalog;
mod cli;
mod error;
mod logger;
mod measurement;
mod poll;
mod prelude;
mod protocol;
mod publish;
mod tables;
mod transport;
mod views;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{cli::Args, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    load_env_files();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().without_time().compact().with_env_filter(filter).init();
    info!(version = crate_version!(), "starting…");

    Args::parse().run().await?;

    info!("done!");
    Ok(())
}

/// Environment-specific files go first, `dotenvy` never overrides a variable once it is set.
fn load_env_files() {
    if let Ok(app_env) = std::env::var("APP_ENV") {
        let _ = dotenvy::from_filename(format!(".env.{app_env}.local"));
        let _ = dotenvy::from_filename(format!(".env.{app_env}"));
    }
    let _ = dotenvy::dotenv();
}
