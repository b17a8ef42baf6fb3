use chrono::{NaiveDate, NaiveDateTime};

use super::{arrange, layouts};
use crate::{
    error::QueryError,
    measurement::{Measurement, Publication, Value},
    prelude::*,
};

/// The logger reports its clock without a zone, it is taken as UTC.
///
/// An unset or unreadable clock only drops the timestamps, the rest of the station is kept.
pub fn assemble(measurement: Measurement, publication: &mut Publication) {
    match parse_clock(&measurement) {
        Ok(last_update) => {
            publication.insert(
                None,
                "lastUpdateTime",
                Value::Text(last_update.format("%Y-%m-%d %H:%M:%S").to_string()),
            );
            let last_update_unix = last_update.and_utc().timestamp();
            publication.insert(None, "lastUpdateTimeUnix", Value::Integer(last_update_unix));
        }
        Err(error) => warn!("publishing the station without a timestamp: {error}"),
    }

    let pv_powers = (
        measurement.get("Power PV1").and_then(Value::as_f64),
        measurement.get("Power PV2").and_then(Value::as_f64),
    );
    if let (Some(pv1), Some(pv2)) = pv_powers {
        publication.insert(None, "pvPower", Value::Float(pv1 + pv2));
    }

    arrange(layouts::STATION, measurement, publication);
}

/// Assemble the logger clock from its packed byte pairs, the year is counted from 2000.
pub fn parse_clock(measurement: &Measurement) -> Result<NaiveDateTime, QueryError> {
    let pair = |name: &'static str| {
        measurement.get(name).and_then(Value::as_pair).ok_or(QueryError::MissingField(name))
    };
    let (year, month) = pair("Year_Month")?;
    let (day, _) = pair("Day_Res")?;
    let (hour, minute) = pair("Hour_Minute")?;
    let (second, _day_of_week) = pair("Second_DayOfWeek")?;

    NaiveDate::from_ymd_opt(2000 + i32::from(year), u32::from(month), u32::from(day))
        .and_then(|date| date.and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second)))
        .ok_or_else(|| {
            QueryError::InvalidTimestamp(format!(
                "20{year:02}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            ))
        })
}
