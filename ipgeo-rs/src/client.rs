use crate::errors::{ClientError, LookupError, GEOLOCATION_UNAVAILABLE};
use crate::types::{Config, GeolocationRecord, IpApiResponse, IpEchoResponse};
use crate::utils::get_raw;
use reqwest::Client;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{error, instrument};

const CURRENT_IP_FAILED: &str = "Failed to get current IP";

/// Client for the public IP echo service and the geolocation service.
///
/// Holds one connection pool; every call is a single request bounded by
/// [`Config::timeout`]. Nothing is cached between calls.
#[derive(Clone)]
pub struct GeoClient {
    pub config: Arc<Config>,
    http: Client,
}

impl GeoClient {
    pub fn init(config: Option<Config>) -> Result<Self, ClientError> {
        let config = Arc::new(config.unwrap_or_default());
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Asks the echo service for the caller's own public address.
    #[cfg_attr(feature = "tracing", instrument(skip(self)))]
    pub async fn resolve_current_ip(&self) -> Result<String, LookupError> {
        let res = get_raw(&self.http, &self.config.ip_echo_url)
            .await
            .map_err(|e| {
                #[cfg(feature = "tracing")]
                error!(error = %e, "Public IP request failed");
                LookupError::transport(format!("{CURRENT_IP_FAILED}: request failed: {e}"))
            })?;

        if !res.status.is_success() {
            return Err(LookupError::upstream_rejection(format!(
                "{CURRENT_IP_FAILED}: request failed: HTTP status {}",
                res.status
            )));
        }

        let echo: IpEchoResponse = serde_json::from_slice(&res.body).map_err(|e| {
            LookupError::malformed_response(format!("{CURRENT_IP_FAILED}: invalid response: {e}"))
        })?;
        Ok(echo.ip)
    }

    /// Looks up `ip` as given. The remote service alone decides whether it is valid.
    #[cfg_attr(feature = "tracing", instrument(skip(self)))]
    pub async fn resolve_geolocation(&self, ip: &str) -> Result<GeolocationRecord, LookupError> {
        let url = self.geolocation_url(ip);
        let res = get_raw(&self.http, &url).await.map_err(|e| {
            #[cfg(feature = "tracing")]
            error!(error = %e, "Geolocation request failed");
            LookupError::transport(format!("Request failed: {e}"))
        })?;

        if !res.status.is_success() {
            return Err(LookupError::upstream_rejection(format!(
                "Request failed: HTTP status {}",
                res.status
            )));
        }

        let payload: IpApiResponse = serde_json::from_slice(&res.body)
            .map_err(|_| LookupError::malformed_response(GEOLOCATION_UNAVAILABLE))?;

        if !payload.is_success() {
            return Err(LookupError::upstream_rejection(GEOLOCATION_UNAVAILABLE));
        }

        payload
            .into_record()
            .ok_or_else(|| LookupError::malformed_response(GEOLOCATION_UNAVAILABLE))
    }

    fn geolocation_url(&self, ip: &str) -> String {
        format!(
            "{}/{}",
            self.config.geolocation_url.trim_end_matches('/'),
            urlencoding::encode(ip)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_base(base: &str) -> GeoClient {
        GeoClient::init(Some(Config {
            geolocation_url: base.to_string(),
            ..Config::default()
        }))
        .unwrap()
    }

    #[test]
    fn geolocation_url_appends_ip_segment() {
        let client = client_with_base("http://ip-api.com/json/");
        assert_eq!(
            client.geolocation_url("8.8.8.8"),
            "http://ip-api.com/json/8.8.8.8"
        );
    }

    #[test]
    fn geolocation_url_percent_encodes_input() {
        let client = client_with_base("http://ip-api.com/json");
        assert_eq!(
            client.geolocation_url("not an/ip"),
            "http://ip-api.com/json/not%20an%2Fip"
        );
        assert_eq!(
            client.geolocation_url("2001:db8::1"),
            "http://ip-api.com/json/2001%3Adb8%3A%3A1"
        );
    }
}
