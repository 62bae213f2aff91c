use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::Error;

/// One set of readings from the station. Fields the station sends beyond
/// these three are ignored.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Reading {
    pub temp: f64,
    pub pres: f64,
    pub hum: f64,
}

impl Reading {
    pub fn from_payload(payload: &Value) -> Result<Reading, Error> {
        let reading = serde_json::from_value(payload.clone())?;
        Ok(reading)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T: {} / P: {} / H: {}", self.temp, self.pres, self.hum)
    }
}
