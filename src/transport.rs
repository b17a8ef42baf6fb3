//! Stream transport towards the data logger.

#[cfg(test)]
pub mod simulated;

use std::time::Duration;

use async_trait::async_trait;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
    time::timeout,
};

use crate::{error::TransportError, prelude::*};

/// One request/reply cycle is `open` → `write` → `read` → `close`.
#[async_trait]
pub trait Transport: Send {
    async fn open(&mut self) -> Result<(), TransportError>;

    async fn write(&mut self, bytes: &[u8]) -> Result<usize, TransportError>;

    /// Read whatever the peer has sent, up to the buffer size.
    async fn read(&mut self, buffer: &mut [u8]) -> Result<usize, TransportError>;

    async fn close(&mut self) -> Result<(), TransportError>;
}

pub struct TcpTransport {
    address: String,
    stream: Option<TcpStream>,
}

impl TcpTransport {
    const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
    const IO_TIMEOUT: Duration = Duration::from_secs(20);

    #[must_use]
    pub const fn new(address: String) -> Self {
        Self { address, stream: None }
    }

    fn stream(&mut self) -> Result<&mut TcpStream, TransportError> {
        self.stream.as_mut().ok_or(TransportError::NotOpen)
    }
}

#[async_trait]
impl Transport for TcpTransport {
    #[instrument(skip_all, level = Level::DEBUG, fields(address = %self.address))]
    async fn open(&mut self) -> Result<(), TransportError> {
        debug!("connecting…");
        let stream = timeout(Self::CONNECT_TIMEOUT, TcpStream::connect(&self.address))
            .await
            .map_err(|_| TransportError::Timeout { operation: "connect" })?
            .map_err(|source| TransportError::Connect { address: self.address.clone(), source })?;
        stream.set_nodelay(true)?;
        self.stream = Some(stream);
        Ok(())
    }

    async fn write(&mut self, bytes: &[u8]) -> Result<usize, TransportError> {
        let stream = self.stream()?;
        timeout(Self::IO_TIMEOUT, stream.write_all(bytes))
            .await
            .map_err(|_| TransportError::Timeout { operation: "write" })??;
        Ok(bytes.len())
    }

    async fn read(&mut self, buffer: &mut [u8]) -> Result<usize, TransportError> {
        let stream = self.stream()?;
        let n_bytes = timeout(Self::IO_TIMEOUT, stream.read(buffer))
            .await
            .map_err(|_| TransportError::Timeout { operation: "read" })??;
        Ok(n_bytes)
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        if let Some(mut stream) = self.stream.take() {
            stream.shutdown().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn tcp_round_trip_ok() -> Result {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?.to_string();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await?;
            let mut request = [0_u8; 4];
            socket.read_exact(&mut request).await?;
            socket.write_all(&[request[3], request[2], request[1], request[0]]).await?;
            Ok::<_, std::io::Error>(())
        });

        let mut transport = TcpTransport::new(address);
        transport.open().await?;
        assert_eq!(transport.write(&[1, 2, 3, 4]).await?, 4);
        let mut buffer = [0_u8; 16];
        let n_bytes = transport.read(&mut buffer).await?;
        transport.close().await?;
        server.await??;

        assert_eq!(&buffer[..n_bytes], [4, 3, 2, 1]);
        Ok(())
    }

    #[tokio::test]
    async fn write_without_open_err() {
        let mut transport = TcpTransport::new("127.0.0.1:1".to_owned());
        assert!(matches!(transport.write(&[0]).await, Err(TransportError::NotOpen)));
    }
}
