use crate::{
    catalog::{RegisterRange, View},
    error::{QueryError, TransportError},
    measurement::{Measurement, Publication},
    prelude::*,
    protocol::{MAX_REPLY_LEN, Request, decode},
    transport::Transport,
    views,
};

/// Data logger client which queries views range by range.
pub struct Logger<T> {
    serial_number: u32,
    transport: T,
}

impl<T: Transport> Logger<T> {
    pub const fn new(serial_number: u32, transport: T) -> Self {
        Self { serial_number, transport }
    }

    #[cfg(test)]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Read every range of the view and assemble the publication.
    ///
    /// The first failing range aborts the whole view.
    #[instrument(skip_all, fields(view = %view))]
    pub async fn query(&mut self, view: View) -> Result<Publication, QueryError> {
        let mut merged = Measurement::default();
        for range in view.ranges() {
            merged.extend(self.read_register_range(range).await?);
        }
        debug!(n_values = merged.len(), "decoded");
        Ok(views::assemble(view, merged))
    }

    /// Perform a full round trip for the single range.
    #[instrument(
        skip_all,
        level = Level::DEBUG,
        fields(range = range.name, start = range.start, count = range.count()),
    )]
    pub async fn read_register_range(
        &mut self,
        range: &RegisterRange,
    ) -> Result<Measurement, QueryError> {
        let request = Request::for_range(self.serial_number, range);
        self.transport.open().await?;
        let reply = self.exchange(request).await;
        if let Err(error) = self.transport.close().await {
            warn!("failed to close the connection: {error}");
        }
        decode(range, &reply?)
    }

    async fn exchange(&mut self, request: Request) -> Result<Vec<u8>, TransportError> {
        trace!(%request, "sending…");
        self.transport.write(&request.to_bytes()).await?;
        let mut buffer = vec![0; MAX_REPLY_LEN];
        let n_bytes = self.transport.read(&mut buffer).await?;
        buffer.truncate(n_bytes);
        trace!(n_bytes, "received");
        Ok(buffer)
    }
}
