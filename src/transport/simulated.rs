//! In-memory data logger answering request frames from a register map.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::{
    error::TransportError,
    protocol::{Request, build_reply},
    transport::Transport,
};

#[derive(Default)]
pub struct SimulatedLogger {
    registers: HashMap<u16, u16>,

    /// Start addresses of the ranges which never get a reply.
    silent_ranges: HashSet<u16>,

    /// Refuse connections when set.
    pub is_offline: bool,

    is_open: bool,
    pending_reply: Option<Vec<u8>>,

    /// Every request frame received so far.
    pub requests: Vec<Vec<u8>>,

    pub n_closes: usize,
}

impl SimulatedLogger {
    pub fn with_registers(mut self, start: u16, values: &[u16]) -> Self {
        for (address, value) in (start..).zip(values) {
            self.registers.insert(address, *value);
        }
        self
    }

    pub fn with_silent_range(mut self, start: u16) -> Self {
        self.silent_ranges.insert(start);
        self
    }

    pub fn offline() -> Self {
        Self { is_offline: true, ..Self::default() }
    }

    /// Start addresses of the requested ranges, in order.
    pub fn requested_starts(&self) -> Vec<u16> {
        self.requests.iter().map(|frame| u16::from_be_bytes([frame[28], frame[29]])).collect()
    }
}

#[async_trait]
impl Transport for SimulatedLogger {
    async fn open(&mut self) -> Result<(), TransportError> {
        if self.is_offline {
            return Err(TransportError::Connect {
                address: "simulated".to_owned(),
                source: std::io::ErrorKind::ConnectionRefused.into(),
            });
        }
        self.is_open = true;
        Ok(())
    }

    async fn write(&mut self, bytes: &[u8]) -> Result<usize, TransportError> {
        if !self.is_open {
            return Err(TransportError::NotOpen);
        }
        assert_eq!(bytes.len(), Request::LEN);
        self.requests.push(bytes.to_vec());

        let start = u16::from_be_bytes([bytes[28], bytes[29]]);
        let count = u16::from_be_bytes([bytes[30], bytes[31]]);
        self.pending_reply = if self.silent_ranges.contains(&start) {
            None
        } else {
            let payload: Vec<u8> = (start..start + count)
                .map(|address| self.registers.get(&address).copied().unwrap_or_default())
                .flat_map(u16::to_be_bytes)
                .collect();
            Some(build_reply(&payload))
        };
        Ok(bytes.len())
    }

    async fn read(&mut self, buffer: &mut [u8]) -> Result<usize, TransportError> {
        if !self.is_open {
            return Err(TransportError::NotOpen);
        }
        let reply =
            self.pending_reply.take().ok_or(TransportError::Timeout { operation: "read" })?;
        let n_bytes = reply.len().min(buffer.len());
        buffer[..n_bytes].copy_from_slice(&reply[..n_bytes]);
        Ok(n_bytes)
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.is_open = false;
        self.n_closes += 1;
        Ok(())
    }
}
