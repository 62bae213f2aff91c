use std::time::Duration;

use log::info;

use greta::{Collector, Result};
use influx::Client as InfluxClient;
use meteo::Client as StationClient;

const STATION_URL: &str = "http://192.168.1.91";

const INFLUX_HOST: &str = "192.168.1.67";
const INFLUX_PORT: u16 = 8086;
const INFLUX_DATABASE: &str = "weather";

const POLL_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    pretty_env_logger::init_timed();

    let station = StationClient::new(STATION_URL);
    let influx = InfluxClient::new(INFLUX_HOST, INFLUX_PORT, INFLUX_DATABASE);

    info!("polling {} every {}s", STATION_URL, POLL_INTERVAL.as_secs());
    info!(
        "writing to {}:{} db {}",
        INFLUX_HOST, INFLUX_PORT, INFLUX_DATABASE
    );

    let collector = Collector::new(station, influx, POLL_INTERVAL);

    collector.run().await
}
