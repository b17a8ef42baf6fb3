use clap::Parser;

use crate::{catalog::View, cli::device::DeviceArgs, prelude::*, tables::build_publication_table};

#[derive(Parser)]
pub struct QueryArgs {
    #[clap(value_enum)]
    pub view: View,

    #[clap(flatten)]
    pub device: DeviceArgs,
}

impl QueryArgs {
    #[instrument(skip_all, fields(view = %self.view))]
    pub async fn run(self) -> Result {
        let publication = self
            .device
            .logger()
            .query(self.view)
            .await
            .with_context(|| format!("failed to query `{}`", self.view))?;
        if publication.is_empty() {
            warn!("the logger returned an empty payload");
        }
        println!("{}", build_publication_table(&publication));
        Ok(())
    }
}
