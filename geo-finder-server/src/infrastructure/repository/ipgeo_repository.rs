use ipgeo_rs::{ClientError, GeoClient, GeolocationRecord, LookupError};

use crate::domain::ports::geolocation::GeolocationRepository;

#[derive(Clone)]
pub struct IpGeoRepository {
    client: GeoClient,
}

impl IpGeoRepository {
    pub fn new(config: ipgeo_rs::Config) -> Result<Self, ClientError> {
        let client = GeoClient::init(Some(config))?;
        Ok(Self { client })
    }
}

impl GeolocationRepository for IpGeoRepository {
    async fn current_ip(&self) -> Result<String, LookupError> {
        self.client.resolve_current_ip().await
    }

    async fn geolocate(&self, ip: &str) -> Result<GeolocationRecord, LookupError> {
        self.client.resolve_geolocation(ip).await
    }
}
