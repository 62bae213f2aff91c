use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;
use tokio::time;

use influx::Point;
use meteo::Reading;

use crate::Result;

#[async_trait]
pub trait Sensor {
    async fn read(&self) -> std::result::Result<Value, meteo::Error>;
}

#[async_trait]
impl Sensor for meteo::Client {
    async fn read(&self) -> std::result::Result<Value, meteo::Error> {
        meteo::Client::read(self).await
    }
}

#[async_trait]
pub trait PointSink {
    async fn write_points(&self, points: &[Point]) -> std::result::Result<(), influx::Error>;
}

#[async_trait]
impl PointSink for influx::Client {
    async fn write_points(&self, points: &[Point]) -> std::result::Result<(), influx::Error> {
        influx::Client::write_points(self, points).await
    }
}

pub struct Collector<S, P> {
    sensor: S,
    sink: P,
    interval: Duration,
}

impl<S, P> Collector<S, P>
where
    S: Sensor,
    P: PointSink,
{
    pub fn new(sensor: S, sink: P, interval: Duration) -> Collector<S, P> {
        Collector {
            sensor,
            sink,
            interval,
        }
    }

    /// Runs cycles until the first error. There is no retry: a failed
    /// fetch, parse or write aborts the loop and the caller decides what
    /// to do with the process.
    pub async fn run(&self) -> Result<()> {
        loop {
            self.cycle().await?;
            time::sleep(self.interval).await;
        }
    }

    async fn cycle(&self) -> Result<()> {
        let payload = self.sensor.read().await?;

        // raw payload goes to stdout, one line per cycle
        println!("{payload}");

        let reading = Reading::from_payload(&payload)?;
        debug!("parsed reading {reading}");

        let time = Utc::now();

        for point in points(&reading, time) {
            self.sink.write_points(&[point]).await?;
        }

        Ok(())
    }
}

fn points(reading: &Reading, time: DateTime<Utc>) -> [Point; 3] {
    [
        Point::new("temp", time).field("value", reading.temp),
        Point::new("pres", time).field("value", reading.pres),
        Point::new("hum", time).field("value", reading.hum),
    ]
}
