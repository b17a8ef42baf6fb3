//! Register catalog of the INVT data logger.

pub mod ranges;

use clap::ValueEnum;
use derive_more::Display;
use itertools::Itertools;

/// How a field is laid out in the reply payload.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum ValueType {
    /// Two independent bytes, for example year and month.
    #[display("U8")]
    U8Pair,

    U16,

    S16,

    /// Nominally two words, though the logger only fills the first one meaningfully.
    U32,

    /// Twelve raw bytes rendered as decimal digits.
    #[display("STRING12")]
    String12,
}

impl ValueType {
    /// Payload bytes needed to decode the value.
    pub const fn min_len(self) -> usize {
        match self {
            Self::U8Pair | Self::U16 | Self::S16 | Self::U32 => 2,
            Self::String12 => 12,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Field {
    pub address: u16,

    /// Empty name marks padding.
    pub name: &'static str,

    pub value_type: Option<ValueType>,
    pub scale: f64,
    pub unit: &'static str,
}

impl Field {
    pub const fn new(
        address: u16,
        name: &'static str,
        value_type: ValueType,
        scale: f64,
        unit: &'static str,
    ) -> Self {
        Self { address, name, value_type: Some(value_type), scale, unit }
    }

    pub const fn padding(address: u16) -> Self {
        Self { address, name: "", value_type: None, scale: 1.0, unit: "" }
    }

    #[must_use]
    pub const fn is_padding(&self) -> bool {
        self.name.is_empty() || self.value_type.is_none()
    }
}

/// Contiguous register window requested in a single round trip.
#[derive(Debug)]
pub struct RegisterRange {
    pub name: &'static str,

    /// Inclusive.
    pub start: u16,

    /// Inclusive.
    pub end: u16,

    pub fields: &'static [Field],
}

impl RegisterRange {
    #[must_use]
    pub const fn count(&self) -> u16 {
        (self.end - self.start).wrapping_add(1)
    }

    /// Byte offset of the field within the reply payload.
    #[must_use]
    pub const fn offset_of(&self, field: &Field) -> usize {
        (field.address - self.start) as usize * 2
    }

    pub fn named_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.is_padding())
    }
}

#[derive(Copy, Clone, Debug, Display, Eq, Hash, PartialEq, ValueEnum)]
pub enum View {
    #[display("Station")]
    Station,

    #[display("EnergyTodayTotals")]
    EnergyTodayTotals,

    #[display("GridOutput")]
    GridOutput,

    #[display("InverterInfo")]
    InverterInfo,

    #[display("LoadInfo")]
    LoadInfo,

    #[display("BatteryOutput")]
    BatteryOutput,

    #[display("PVOutput")]
    PvOutput,

    /// Every range with raw catalog names, published as a flat record.
    #[display("Telemetry")]
    Telemetry,
}

impl View {
    /// Views queried by each poll pass, in order.
    pub const POLL_ORDER: [Self; 7] = [
        Self::Station,
        Self::EnergyTodayTotals,
        Self::GridOutput,
        Self::InverterInfo,
        Self::LoadInfo,
        Self::BatteryOutput,
        Self::PvOutput,
    ];

    #[must_use]
    pub fn ranges(self) -> &'static [&'static RegisterRange] {
        match self {
            Self::Station => &ranges::STATION_VIEW,
            Self::EnergyTodayTotals => &ranges::ENERGY_TODAY_TOTALS_VIEW,
            Self::GridOutput => &ranges::GRID_OUTPUT_VIEW,
            Self::InverterInfo => &ranges::INVERTER_INFO_VIEW,
            Self::LoadInfo => &ranges::LOAD_INFO_VIEW,
            Self::BatteryOutput => &ranges::BATTERY_OUTPUT_VIEW,
            Self::PvOutput => &ranges::PV_OUTPUT_VIEW,
            Self::Telemetry => &ranges::TELEMETRY_VIEW,
        }
    }

    /// Topic suffix the view is published under.
    #[must_use]
    pub const fn topic(self) -> &'static str {
        match self {
            Self::Station => "station",
            Self::EnergyTodayTotals => "energyTodayTotals",
            Self::GridOutput => "gridOutput",
            Self::InverterInfo => "inverterInfo",
            Self::LoadInfo => "loadInfo",
            Self::BatteryOutput => "batteryOutput",
            Self::PvOutput => "pvOutput",
            Self::Telemetry => "telemetry",
        }
    }
}

/// Names of every decodable field in the given ranges, skipping padding.
pub fn register_names(ranges: &[&RegisterRange]) -> Vec<&'static str> {
    ranges.iter().flat_map(|range| range.named_fields()).map(|field| field.name).collect()
}

/// Distinct register ranges across all views, in the order they are first referenced.
pub fn all_ranges() -> Vec<&'static RegisterRange> {
    View::POLL_ORDER
        .iter()
        .chain(&[View::Telemetry])
        .flat_map(|view| view.ranges().iter().copied())
        .unique_by(|range| std::ptr::from_ref(*range))
        .collect()
}
