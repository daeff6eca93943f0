use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the IP echo service, including any query string.
    pub ip_echo_url: String,
    /// Base URL of the geolocation service; the IP is appended as a path segment.
    pub geolocation_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_echo_url: "https://api.ipify.org?format=json".to_string(),
            geolocation_url: "http://ip-api.com/json".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Normalized location data for one IP address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeolocationRecord {
    pub ip: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub isp: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct IpEchoResponse {
    pub ip: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IpApiResponse {
    pub status: Option<String>,
    pub query: Option<String>,
    pub city: Option<String>,
    pub region_name: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub org: Option<String>,
}

impl IpApiResponse {
    pub const SUCCESS: &'static str = "success";

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(Self::SUCCESS)
    }

    /// Maps a successful payload into a record. `None` if the echoed query is missing.
    pub fn into_record(self) -> Option<GeolocationRecord> {
        Some(GeolocationRecord {
            ip: self.query?,
            city: self.city,
            state: self.region_name,
            country: self.country,
            latitude: self.lat,
            longitude: self.lon,
            isp: self.org,
        })
    }
}
