use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// One timestamped record for a measurement. Tags and fields keep their
/// keys sorted so the encoded line is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub measurement: String,
    pub tags: BTreeMap<String, String>,
    pub time: DateTime<Utc>,
    pub fields: BTreeMap<String, f64>,
}

impl Point {
    pub fn new(measurement: &str, time: DateTime<Utc>) -> Point {
        Point {
            measurement: measurement.to_string(),
            tags: BTreeMap::new(),
            time,
            fields: BTreeMap::new(),
        }
    }

    pub fn tag(mut self, name: &str, value: &str) -> Point {
        self.tags.insert(name.to_string(), value.to_string());
        self
    }

    pub fn field(mut self, name: &str, value: f64) -> Point {
        self.fields.insert(name.to_string(), value);
        self
    }
}
