use std::time::Duration;

use ::config::{Environment, File};
use anyhow::Context;
use serde::Deserialize;

const SERVER_PORT_KEY: &str = "server_port";

const IP_ECHO_URL_KEY: &str = "ip_echo_url";

const GEOLOCATION_URL_KEY: &str = "geolocation_url";

const REQUEST_TIMEOUT_SECS_KEY: &str = "request_timeout_secs";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub server_port: u16,
    pub ip_echo_url: String,
    pub geolocation_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Defaults, then `config.toml`, then the process environment (after `.env`).
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();
        Self::load(Environment::default().try_parsing(true))
    }

    fn load(environment: Environment) -> anyhow::Result<Config> {
        let defaults = ipgeo_rs::Config::default();

        let conf = ::config::Config::builder()
            .set_default(SERVER_PORT_KEY, 3000)?
            .set_default(IP_ECHO_URL_KEY, defaults.ip_echo_url)?
            .set_default(GEOLOCATION_URL_KEY, defaults.geolocation_url)?
            .set_default(REQUEST_TIMEOUT_SECS_KEY, defaults.timeout.as_secs())?
            .add_source(File::with_name("config.toml").required(false))
            .add_source(environment)
            .build()
            .context("failed to load configuration")?;

        conf.try_deserialize::<Config>().context("failed to parse configuration")
    }

    pub fn client_config(&self) -> ipgeo_rs::Config {
        ipgeo_rs::Config {
            ip_echo_url: self.ip_echo_url.clone(),
            geolocation_url: self.geolocation_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn environment_from(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().try_parsing(true).source(Some(source))
    }

    #[test]
    fn defaults_point_at_public_services() {
        let config = Config::load(environment_from(&[])).unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.ip_echo_url, "https://api.ipify.org?format=json");
        assert_eq!(config.geolocation_url, "http://ip-api.com/json");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::load(environment_from(&[
            ("SERVER_PORT", "8081"),
            ("GEOLOCATION_URL", "http://localhost:9000/json"),
            ("REQUEST_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 8081);
        assert_eq!(config.geolocation_url, "http://localhost:9000/json");

        let client = config.client_config();
        assert_eq!(client.timeout, Duration::from_secs(3));
        assert_eq!(client.ip_echo_url, "https://api.ipify.org?format=json");
    }
}
