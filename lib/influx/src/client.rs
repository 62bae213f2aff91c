use chipp_http::{HttpClient, HttpMethod, NoInterceptor};
use log::debug;

use crate::{line, Error, Point};

/// Client for the InfluxDB 1.x write API. A successful write is answered
/// with `204 No Content`.
pub struct Client {
    base_url: String,
    database: String,
    http_client: HttpClient<NoInterceptor>,
}

impl Client {
    pub fn new(host: &str, port: u16, database: &str) -> Client {
        let base_url = format!("http://{host}:{port}");
        let http_client = HttpClient::new(&base_url).unwrap();

        Client {
            base_url,
            database: database.to_string(),
            http_client,
        }
    }

    pub async fn write_points(&self, points: &[Point]) -> Result<(), Error> {
        debug!("writing {} points to {}", points.len(), self.database);

        let url = format!("{}/write?db={}&precision=ns", self.base_url, self.database);
        let mut request = self.http_client.new_request_with_url(url)?;

        request.method = HttpMethod::Post;
        request.body = Some(line::to_lines(points).into_bytes());

        let status_code = self
            .http_client
            .perform_request(request, |_, response| Ok(response.status_code as u16))
            .await?;

        if status_code != 204 {
            return Err(Error::UnexpectedStatus(status_code));
        }

        Ok(())
    }
}
