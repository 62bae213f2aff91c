mod collector;
mod error;

pub use collector::{Collector, PointSink, Sensor};
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
