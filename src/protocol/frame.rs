use std::fmt::{Display, Formatter};

use bytes::BufMut;
use itertools::Itertools;

use crate::catalog::RegisterRange;

/// Read request for a register window of the logger with the given serial number.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub serial_number: u32,

    /// Inclusive.
    pub start: u16,

    /// Inclusive.
    pub end: u16,
}

impl Request {
    pub const LEN: usize = 36;

    const PREAMBLE: u8 = 0xA5;
    const CONTROL_CODE: u16 = 0x1700;
    const FRAME_TYPE: u16 = 0x1045;
    const FLAG: u8 = 0x02;
    const READ_COMMAND: u16 = 0x0103;
    const TERMINATOR: u8 = 0x15;

    pub const fn new(serial_number: u32, start: u16, end: u16) -> Self {
        debug_assert!(start <= end);
        Self { serial_number, start, end }
    }

    pub const fn for_range(serial_number: u32, range: &RegisterRange) -> Self {
        Self::new(serial_number, range.start, range.end)
    }

    /// Register count as carried on the wire, the full 64Ki window wraps to zero.
    #[must_use]
    pub const fn count(self) -> u16 {
        (self.end - self.start).wrapping_add(1)
    }

    #[must_use]
    pub fn to_bytes(self) -> [u8; Self::LEN] {
        let mut frame = [0_u8; Self::LEN];
        {
            let mut buf = &mut frame[..];
            buf.put_u8(Self::PREAMBLE);
            buf.put_u16(Self::CONTROL_CODE);
            buf.put_u16(Self::FRAME_TYPE);
            buf.put_bytes(0, 2);
            buf.put_u32_le(self.serial_number);
            buf.put_u8(Self::FLAG);
            buf.put_bytes(0, 14);
            buf.put_u16(Self::READ_COMMAND);
            buf.put_u16(self.start);
            buf.put_u16(self.count());
        }
        let crc = modbus_crc(&frame[26..32]);
        frame[32..34].copy_from_slice(&crc.to_le_bytes());
        frame[34] = checksum(&frame);
        frame[35] = Self::TERMINATOR;
        frame
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let hex = self.to_bytes().iter().map(|byte| format!("{byte:02X}")).join(" ");
        f.write_str(&hex)
    }
}

/// CRC-16/MODBUS of the embedded Modbus request.
#[must_use]
pub fn modbus_crc(bytes: &[u8]) -> u16 {
    crc16::State::<crc16::MODBUS>::calculate(bytes)
}

/// Frame checksum: byte sum of everything between the preamble and the checksum itself.
#[must_use]
pub fn checksum(frame: &[u8]) -> u8 {
    frame[1..frame.len() - 2].iter().fold(0, |sum, byte| sum.wrapping_add(*byte))
}
