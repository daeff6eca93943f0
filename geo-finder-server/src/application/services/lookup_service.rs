use ipgeo_rs::{GeolocationRecord, LookupError};

use crate::domain::ports::geolocation::GeolocationRepository;

/// Everything the lookup page shows for one interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupView {
    pub current_ip: Result<String, LookupError>,
    /// Contents of the IP input control after this interaction.
    pub input: String,
    /// `None` when the input is empty and no lookup was made.
    pub lookup: Option<Result<GeolocationRecord, LookupError>>,
}

#[derive(Clone)]
pub struct LookupService<R: GeolocationRepository> {
    repo: R,
}

impl<R: GeolocationRepository> LookupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn current_ip(&self) -> Result<String, LookupError> {
        self.repo.current_ip().await
    }

    pub async fn geolocate(&self, ip: &str) -> Result<GeolocationRecord, LookupError> {
        self.repo.geolocate(ip).await
    }

    /// Builds the view for one page interaction.
    ///
    /// `input` is `None` on initial load, in which case the input defaults to the
    /// current public IP. `known_current_ip` is the address resolved earlier in the
    /// session; when present the echo service is not called again.
    pub async fn view(&self, input: Option<String>, known_current_ip: Option<String>) -> LookupView {
        let current_ip = match known_current_ip.filter(|ip| !ip.is_empty()) {
            Some(ip) => Ok(ip),
            None => self.current_ip().await,
        };
        if let Err(e) = &current_ip {
            tracing::warn!(error = %e, "could not resolve current public IP");
        }

        let input = input.unwrap_or_else(|| current_ip.clone().unwrap_or_default());

        let lookup = if input.is_empty() {
            None
        } else {
            let result = self.geolocate(&input).await;
            if let Err(e) = &result {
                tracing::warn!(ip = %input, error = %e, "geolocation lookup failed");
            }
            Some(result)
        };

        LookupView {
            current_ip,
            input,
            lookup,
        }
    }
}
