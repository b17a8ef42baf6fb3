use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use derive_more::{Deref, DerefMut, IntoIterator};
use serde::{Serialize, Serializer};

/// Decoded or derived value, kept typed until it is rendered for publication.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Register value multiplied by its scale, rendered with two decimals.
    Scaled(f64),

    /// Two independent bytes, rendered as `A-B`.
    Pair(u8, u8),

    /// Raw bytes rendered as concatenated decimal numbers.
    Digits(Vec<u8>),

    /// Derived number, rendered with its natural precision.
    Float(f64),

    Integer(i64),

    Text(String),
}

impl Value {
    /// Numeric view of the value, if it has one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Scaled(value) | Self::Float(value) => Some(*value),
            #[expect(clippy::cast_precision_loss)]
            Self::Integer(value) => Some(*value as f64),
            Self::Pair(..) | Self::Digits(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn as_pair(&self) -> Option<(u8, u8)> {
        match self {
            Self::Pair(first, second) => Some((*first, *second)),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scaled(value) => write!(f, "{value:.2}"),
            Self::Pair(first, second) => write!(f, "{first}-{second}"),
            Self::Digits(digits) => digits.iter().try_for_each(|digit| write!(f, "{digit}")),
            Self::Float(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Scaled(_) | Self::Pair(..) | Self::Digits(_) | Self::Text(_) => {
                serializer.collect_str(self)
            }
        }
    }
}

/// Named values produced by a single query.
///
/// Cloned whenever it crosses into a publication task, never shared.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deref, DerefMut, IntoIterator)]
pub struct Measurement(#[into_iterator(owned, ref)] BTreeMap<&'static str, Value>);

impl FromIterator<(&'static str, Value)> for Measurement {
    fn from_iter<T: IntoIterator<Item = (&'static str, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// View measurement split into the root topic and its sub-topics.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct Publication {
    pub topic: &'static str,
    pub root: Measurement,
    pub groups: BTreeMap<&'static str, Measurement>,
}

impl Publication {
    pub fn new(topic: &'static str) -> Self {
        Self { topic, ..Self::default() }
    }

    /// Place the value under the root topic or under the named sub-topic.
    pub fn insert(&mut self, group: Option<&'static str>, name: &'static str, value: Value) {
        match group {
            None => self.root.insert(name, value),
            Some(group) => self.groups.entry(group).or_default().insert(name, value),
        };
    }

    /// Topic suffixes with their measurements, skipping the empty ones.
    pub fn into_messages(self) -> impl Iterator<Item = (String, Measurement)> {
        let topic = self.topic;
        std::iter::once((topic.to_owned(), self.root))
            .chain(
                self.groups
                    .into_iter()
                    .map(move |(group, measurement)| (format!("{topic}/{group}"), measurement)),
            )
            .filter(|(_, measurement)| !measurement.is_empty())
    }

    /// Total number of values across the root and the sub-topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len() + self.groups.values().map(|group| group.len()).sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn display_ok() {
        assert_eq!(Value::Scaled(210.1).to_string(), "210.10");
        assert_eq!(Value::Scaled(-0.1).to_string(), "-0.10");
        assert_eq!(Value::Pair(23, 7).to_string(), "23-7");
        assert_eq!(Value::Digits(vec![1, 2, 10]).to_string(), "1210");
        assert_eq!(Value::Float(4.5).to_string(), "4.5");
        assert_eq!(Value::Float(3.0).to_string(), "3");
    }

    #[test]
    fn serialize_ok() -> Result {
        let measurement: Measurement = [
            ("batterySOC", Value::Scaled(56.7)),
            ("lastUpdateTimeUnix", Value::Integer(1_689_417_000)),
            ("pvPower", Value::Float(1.5)),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            serde_json::to_string(&measurement)?,
            r#"{"batterySOC":"56.70","lastUpdateTimeUnix":1689417000,"pvPower":1.5}"#,
        );
        Ok(())
    }

    #[test]
    fn messages_ok() {
        let mut publication = Publication::new("gridOutput");
        publication.insert(None, "frequency", Value::Scaled(50.0));
        publication.insert(Some("phaseA"), "voltage", Value::Scaled(230.1));
        publication.insert(Some("phaseB"), "voltage", Value::Scaled(229.9));
        assert_eq!(publication.len(), 3);

        let topics: Vec<_> = publication.into_messages().map(|(topic, _)| topic).collect();
        assert_eq!(topics, ["gridOutput", "gridOutput/phaseA", "gridOutput/phaseB"]);
    }

    #[test]
    fn empty_root_is_skipped() {
        let mut publication = Publication::new("loadInfo");
        publication.insert(Some("phaseA"), "power", Value::Scaled(120.0));
        let topics: Vec<_> = publication.into_messages().map(|(topic, _)| topic).collect();
        assert_eq!(topics, ["loadInfo/phaseA"]);
    }
}
