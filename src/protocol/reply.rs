use crate::{
    catalog::{Field, RegisterRange, ValueType},
    error::QueryError,
    measurement::{Measurement, Value},
};

/// Receive buffer size for a single reply.
pub const MAX_REPLY_LEN: usize = 2048;

/// Replies shorter than this carry no payload header at all.
const MIN_REPLY_LEN: usize = 27;

/// Offset of the payload length byte, the payload follows it.
const LENGTH_OFFSET: usize = 27;

/// Decode every named field of the range from the raw reply.
///
/// Fields which do not fit in the received payload are omitted.
pub fn decode(range: &RegisterRange, reply: &[u8]) -> Result<Measurement, QueryError> {
    let payload = payload(reply)?;
    Ok(range
        .named_fields()
        .filter_map(|field| decode_field(range, field, payload).map(|value| (field.name, value)))
        .collect())
}

fn payload(reply: &[u8]) -> Result<&[u8], QueryError> {
    if reply.len() < MIN_REPLY_LEN {
        return Err(QueryError::ShortReply { length: reply.len() });
    }
    let Some(&length) = reply.get(LENGTH_OFFSET) else {
        return Ok(&[]);
    };
    let start = LENGTH_OFFSET + 1;
    let end = (start + usize::from(length)).min(reply.len());
    Ok(&reply[start..end])
}

fn decode_field(range: &RegisterRange, field: &Field, payload: &[u8]) -> Option<Value> {
    let value_type = field.value_type?;
    let offset = range.offset_of(field);
    let bytes = payload.get(offset..offset + value_type.min_len())?;
    let value = match value_type {
        ValueType::U8Pair => Value::Pair(bytes[0], bytes[1]),

        // Only the high word of a 32-bit field is taken into account, which is what the logger
        // deployments in the wild have been publishing all along.
        ValueType::U16 | ValueType::U32 => {
            Value::Scaled(f64::from(u16::from_be_bytes([bytes[0], bytes[1]])) * field.scale)
        }

        ValueType::S16 => {
            Value::Scaled(f64::from(i16::from_be_bytes([bytes[0], bytes[1]])) * field.scale)
        }

        ValueType::String12 => Value::Digits(bytes.to_vec()),
    };
    Some(value)
}

/// Wrap the payload into a reply frame the way the logger does.
#[cfg(test)]
pub fn build_reply(payload: &[u8]) -> Vec<u8> {
    let mut reply = vec![0; LENGTH_OFFSET];
    reply[0] = 0xA5;
    reply.push(u8::try_from(payload.len()).unwrap());
    reply.extend_from_slice(payload);
    reply.push(0x15);
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{ValueType::String12, ranges},
        prelude::*,
    };

    static SINGLE_U16: RegisterRange = RegisterRange {
        name: "test",
        start: 0x1000,
        end: 0x1000,
        fields: &[Field::new(0x1000, "value", ValueType::U16, 0.1, "V")],
    };

    static SINGLE_S16: RegisterRange = RegisterRange {
        name: "test",
        start: 0x1000,
        end: 0x1000,
        fields: &[Field::new(0x1000, "value", ValueType::S16, 0.1, "A")],
    };

    static SERIAL: RegisterRange = RegisterRange {
        name: "test",
        start: 0x2000,
        end: 0x2005,
        fields: &[Field::new(0x2000, "serial", String12, 1.0, "")],
    };

    #[test]
    fn u16_ok() -> Result {
        let measurement = decode(&SINGLE_U16, &build_reply(&[0x08, 0x35]))?;
        assert_eq!(measurement["value"].to_string(), "210.10");
        Ok(())
    }

    #[test]
    fn s16_ok() -> Result {
        let measurement = decode(&SINGLE_S16, &build_reply(&[0xFF, 0xFF]))?;
        assert_eq!(measurement["value"].to_string(), "-0.10");
        Ok(())
    }

    #[test]
    fn u32_reads_high_word_only() -> Result {
        let reply = build_reply(&[0x30, 0x39, 0xFF, 0xFF]);
        let measurement = decode(&ranges::STATION_DATA, &reply)?;
        assert_eq!(measurement["PV Day Energy"].to_string(), "12.35");
        Ok(())
    }

    #[test]
    fn u8_pair_ok() -> Result {
        let measurement =
            decode(&ranges::STATION_INFO, &build_reply(&[23, 7, 15, 0, 10, 30, 0, 3]))?;
        assert_eq!(measurement["Year_Month"].to_string(), "23-7");
        assert_eq!(measurement["Second_DayOfWeek"], Value::Pair(0, 3));
        Ok(())
    }

    #[test]
    fn string12_ok() -> Result {
        let measurement =
            decode(&SERIAL, &build_reply(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 10, 11]))?;
        assert_eq!(measurement["serial"].to_string(), "12345678901011");
        Ok(())
    }

    #[test]
    fn string12_needs_twelve_bytes() -> Result {
        let measurement = decode(&SERIAL, &build_reply(&[1, 2, 3, 4]))?;
        assert!(measurement.is_empty());
        Ok(())
    }

    #[test]
    fn short_reply_err() {
        let result = decode(&SINGLE_U16, &[0xA5; 26]);
        assert!(matches!(result, Err(QueryError::ShortReply { length: 26 })));
    }

    #[test]
    fn reply_without_length_byte_is_empty() -> Result {
        assert!(decode(&SINGLE_U16, &[0; 27])?.is_empty());
        Ok(())
    }

    #[test]
    fn truncated_payload_omits_trailing_fields() -> Result {
        let payload = [0x09, 0x1A, 0x00, 0x2A, 0x00, 0x03, 0x08, 0xFC];
        let measurement = decode(&ranges::PV_OUTPUT, &build_reply(&payload))?;
        assert_eq!(measurement.len(), 4);
        assert_eq!(measurement["PV: Voltage_PV1"].to_string(), "233.00");
        assert_eq!(measurement["PV: Current_PV1"].to_string(), "4.20");
        assert_eq!(measurement["PV: Power_PV1"].to_string(), "3.00");
        assert_eq!(measurement["PV: Voltage_PV2"].to_string(), "230.00");
        assert!(!measurement.contains_key("PV: Current_PV2"));
        assert!(!measurement.contains_key("PV: Power_PV2"));
        Ok(())
    }

    #[test]
    fn length_byte_beyond_reply_is_clamped() -> Result {
        let mut reply = build_reply(&[0x08, 0x35]);
        reply.truncate(reply.len() - 1);
        reply[LENGTH_OFFSET] = 200;
        assert_eq!(decode(&SINGLE_U16, &reply)?["value"].to_string(), "210.10");
        Ok(())
    }

    #[test]
    fn padding_is_skipped() -> Result {
        let payload = vec![0x01; usize::from(ranges::LOAD_INFO.count()) * 2];
        let measurement = decode(&ranges::LOAD_INFO, &build_reply(&payload))?;
        assert_eq!(measurement.len(), 15);
        Ok(())
    }
}
