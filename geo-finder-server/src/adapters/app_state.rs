use std::sync::Arc;

use ipgeo_rs::ClientError;

use crate::{
    application::services::lookup_service::LookupService, config::Config,
    infrastructure::repository::ipgeo_repository::IpGeoRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub lookup_service: Arc<LookupService<IpGeoRepository>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let repo = IpGeoRepository::new(config.client_config())?;
        Ok(Self {
            lookup_service: Arc::new(LookupService::new(repo)),
        })
    }
}
