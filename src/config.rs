use crate::adapters::outbound::{
    BIGDATACLOUD_URL, IPAPI_CO_URL, IPIFY_URL, IPWHOIS_URL, IP_API_COM_URL,
};
use crate::domain::value_objects::LocatorOptions;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    // Geolocation providers, queried in this order
    pub ipapi_co_url: String,
    pub ip_api_com_url: String,
    pub ipwhois_url: String,

    // Self-IP and reverse geocoding services
    pub self_ip_url: String,
    pub reverse_geocode_url: String,
    pub locality_language: String,

    // Per-request HTTP timeout
    pub request_timeout_secs: u64,

    // Device positioning
    pub locator_timeout_ms: u64,
    pub locator_max_age_ms: u64,
    pub locator_high_accuracy: bool,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ipapi_co_url: IPAPI_CO_URL.to_string(),
            ip_api_com_url: IP_API_COM_URL.to_string(),
            ipwhois_url: IPWHOIS_URL.to_string(),
            self_ip_url: IPIFY_URL.to_string(),
            reverse_geocode_url: BIGDATACLOUD_URL.to_string(),
            locality_language: "en".to_string(),
            request_timeout_secs: 10,
            locator_timeout_ms: 15_000,
            locator_max_age_ms: 0,
            locator_high_accuracy: true,
            debug: false,
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn locator_options(&self) -> LocatorOptions {
        LocatorOptions {
            high_accuracy: self.locator_high_accuracy,
            timeout: Duration::from_millis(self.locator_timeout_ms),
            maximum_age: Duration::from_millis(self.locator_max_age_ms),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(default)
}

pub fn load_config() -> anyhow::Result<Config> {
    let defaults = Config::default();

    let ipapi_co_url = std::env::var("GEOLOCATE_IPAPI_CO_URL")
        .unwrap_or(defaults.ipapi_co_url);

    let ip_api_com_url = std::env::var("GEOLOCATE_IP_API_URL")
        .unwrap_or(defaults.ip_api_com_url);

    let ipwhois_url = std::env::var("GEOLOCATE_IPWHOIS_URL")
        .unwrap_or(defaults.ipwhois_url);

    let self_ip_url = std::env::var("GEOLOCATE_SELF_IP_URL")
        .unwrap_or(defaults.self_ip_url);

    let reverse_geocode_url = std::env::var("GEOLOCATE_REVERSE_GEOCODE_URL")
        .unwrap_or(defaults.reverse_geocode_url);

    let locality_language = std::env::var("GEOLOCATE_LOCALITY_LANGUAGE")
        .unwrap_or(defaults.locality_language);

    let request_timeout_secs = std::env::var("GEOLOCATE_REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.request_timeout_secs);

    let locator_timeout_ms = std::env::var("GEOLOCATE_LOCATOR_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.locator_timeout_ms);

    let locator_max_age_ms = std::env::var("GEOLOCATE_LOCATOR_MAX_AGE_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.locator_max_age_ms);

    let locator_high_accuracy =
        env_flag("GEOLOCATE_LOCATOR_HIGH_ACCURACY", defaults.locator_high_accuracy);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        ipapi_co_url,
        ip_api_com_url,
        ipwhois_url,
        self_ip_url,
        reverse_geocode_url,
        locality_language,
        request_timeout_secs,
        locator_timeout_ms,
        locator_max_age_ms,
        locator_high_accuracy,
        debug,
    })
}
