use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    catalog::RegisterRange,
    measurement::{Measurement, Publication, Value},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_registers_table(ranges: &[&RegisterRange]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Range", "Address", "Name", "Type", "Scale", "Unit"]);
    for range in ranges {
        for field in range.named_fields() {
            let Some(value_type) = field.value_type else {
                continue;
            };
            table.add_row(vec![
                Cell::new(range.name).add_attribute(Attribute::Dim),
                Cell::new(format!("0x{:04X}", field.address)).fg(Color::Cyan),
                Cell::new(field.name),
                Cell::new(value_type),
                Cell::new(field.scale).set_alignment(CellAlignment::Right),
                Cell::new(field.unit).add_attribute(Attribute::Dim),
            ]);
        }
    }
    table
}

pub fn build_publication_table(publication: &Publication) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Topic", "Name", "Value"]);
    add_measurement_rows(&mut table, publication.topic, &publication.root);
    for (group, measurement) in &publication.groups {
        add_measurement_rows(&mut table, &format!("{}/{group}", publication.topic), measurement);
    }
    table
}

fn add_measurement_rows(table: &mut Table, topic: &str, measurement: &Measurement) {
    for (name, value) in measurement {
        let value_cell = match value {
            Value::Scaled(number) | Value::Float(number) => Cell::new(value)
                .set_alignment(CellAlignment::Right)
                .fg(if *number < 0.0 { Color::Red } else { Color::Green }),
            Value::Integer(_) => Cell::new(value).set_alignment(CellAlignment::Right),
            Value::Pair(..) | Value::Digits(_) | Value::Text(_) => Cell::new(value),
        };
        table.add_row(vec![
            Cell::new(topic).add_attribute(Attribute::Dim),
            Cell::new(name),
            value_cell,
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{View, all_ranges};

    #[test]
    fn registers_table_ok() {
        let ranges = all_ranges();
        let n_fields: usize = ranges.iter().map(|range| range.named_fields().count()).sum();
        assert_eq!(build_registers_table(&ranges).row_iter().count(), n_fields);

        let table = build_registers_table(View::LoadInfo.ranges()).to_string();
        assert!(table.contains("0x313D"));
        assert!(!table.contains("0x313C"), "padding is not listed");
    }

    #[test]
    fn publication_table_ok() {
        let mut publication = Publication::new("batteryOutput");
        publication.insert(None, "power", Value::Scaled(-250.0));
        publication.insert(Some("cells"), "maxVoltage", Value::Scaled(3345.0));
        let table = build_publication_table(&publication);
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("batteryOutput/cells"));
        assert!(rendered.contains("-250.00"));
    }
}
