use crate::{Config, FetchError, WeatherReport, provider::http::HttpProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

/// Source of current conditions for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one lookup for `city`.
    async fn current(&self, city: &str) -> Result<WeatherReport, FetchError>;
}

/// Construct the HTTP provider for the configured endpoint.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(HttpProvider::new(config.endpoint.clone()))
}
