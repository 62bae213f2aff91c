use chipp_http::{HttpClient, NoInterceptor};
use log::debug;
use serde_json::Value;

use crate::Error;

/// Client for the weather station HTTP API. The station replies to a GET
/// on its base URL with a JSON object carrying the current readings.
pub struct Client {
    base_url: String,
    http_client: HttpClient<NoInterceptor>,
}

impl Client {
    pub fn new(base_url: &str) -> Client {
        let http_client = HttpClient::new(base_url).unwrap();

        Client {
            base_url: base_url.to_string(),
            http_client,
        }
    }

    /// Fetches the current readings and returns the parsed payload as-is.
    pub async fn read(&self) -> Result<Value, Error> {
        debug!("GET {}", self.base_url);

        let request = self.http_client.new_request_with_url(self.base_url.clone())?;

        let payload = self
            .http_client
            .perform_request(request, chipp_http::json::parse_json)
            .await?;

        Ok(payload)
    }
}
