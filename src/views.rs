//! Turning merged register values into publishable views.

mod layouts;
mod station;

use crate::{
    catalog::View,
    measurement::{Measurement, Publication},
};

/// Public name and sub-topic of a catalog field.
pub struct Placement {
    pub source: &'static str,
    pub group: Option<&'static str>,
    pub name: &'static str,
}

impl Placement {
    pub const fn root(source: &'static str, name: &'static str) -> Self {
        Self { source, group: None, name }
    }

    pub const fn grouped(source: &'static str, group: &'static str, name: &'static str) -> Self {
        Self { source, group: Some(group), name }
    }
}

/// Move the placed fields into the publication under their public names.
///
/// Fields absent from the measurement are skipped, fields without a placement are dropped.
fn arrange(placements: &[Placement], mut measurement: Measurement, publication: &mut Publication) {
    for placement in placements {
        if let Some(value) = measurement.remove(placement.source) {
            publication.insert(placement.group, placement.name, value);
        }
    }
}

/// Derive, rename and group the merged measurement of the view.
pub fn assemble(view: View, measurement: Measurement) -> Publication {
    let mut publication = Publication::new(view.topic());
    match view {
        View::Station => station::assemble(measurement, &mut publication),
        View::Telemetry => publication.root = measurement,
        View::EnergyTodayTotals
        | View::GridOutput
        | View::InverterInfo
        | View::LoadInfo
        | View::BatteryOutput
        | View::PvOutput => arrange(layouts::of(view), measurement, &mut publication),
    }
    publication
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::register_names, measurement::Value};

    fn filled(view: View) -> Measurement {
        register_names(view.ranges()).into_iter().map(|name| (name, Value::Scaled(1.0))).collect()
    }

    #[test]
    fn every_field_is_placed() {
        for view in &View::POLL_ORDER[1..] {
            let n_fields = register_names(view.ranges()).len();
            let publication = assemble(*view, filled(*view));
            assert_eq!(publication.len(), n_fields, "{view}");
        }
    }

    #[test]
    fn grid_output_is_grouped_per_phase() {
        let mut measurement = filled(View::GridOutput);
        measurement.insert("GO: Grid B Voltage", Value::Scaled(229.5));
        let publication = assemble(View::GridOutput, measurement);

        assert_eq!(publication.topic, "gridOutput");
        assert_eq!(publication.groups["phaseB"]["voltage"], Value::Scaled(229.5));
        assert!(publication.root.contains_key("frequency"));
        assert_eq!(publication.groups.keys().copied().collect::<Vec<_>>(), [
            "phaseA", "phaseB", "phaseC"
        ]);
    }

    #[test]
    fn battery_output_separates_cells() {
        let publication = assemble(View::BatteryOutput, filled(View::BatteryOutput));
        assert_eq!(publication.groups["cells"].len(), 4);
        assert_eq!(publication.groups["bms"].len(), 2);
        assert!(publication.root.contains_key("stateOfCharge"));
    }

    #[test]
    fn missing_fields_are_skipped() {
        let measurement: Measurement =
            [("PV: Power_PV1", Value::Scaled(3.0))].into_iter().collect();
        let publication = assemble(View::PvOutput, measurement);
        assert_eq!(publication.len(), 1);
        assert_eq!(publication.groups["pv1"]["power"], Value::Scaled(3.0));
    }

    #[test]
    fn telemetry_is_flat() {
        let publication = assemble(View::Telemetry, filled(View::Telemetry));
        assert!(publication.groups.is_empty());
        assert!(publication.root.contains_key("RR: Year_Month"));
    }
}
