use ipgeo_rs::{GeolocationRecord, LookupError};
use std::future::Future;

pub trait GeolocationRepository: Send + Sync + 'static {
    fn current_ip(&self) -> impl Future<Output = Result<String, LookupError>> + Send;
    fn geolocate(
        &self,
        ip: &str,
    ) -> impl Future<Output = Result<GeolocationRecord, LookupError>> + Send;
}
