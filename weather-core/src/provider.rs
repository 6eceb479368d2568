use crate::{Settings, WeatherResult, error::LookupError};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current weather for a location name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &str) -> Result<WeatherResult, LookupError>;
}

/// Construct the provider described by the effective settings.
pub fn provider_from_settings(settings: &Settings) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(
        settings.api_key.clone(),
        settings.base_url.clone(),
    ))
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current_weather(&self, query: &str) -> Result<WeatherResult, LookupError> {
        (**self).current_weather(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn provider_from_settings_uses_configured_endpoint() {
        let cfg = Config {
            base_url: Some("http://localhost:9/weather".into()),
            ..Config::default()
        };
        let provider = provider_from_settings(&cfg.resolve(Some("KEY".into()), None));

        let debug = format!("{provider:?}");
        assert!(debug.contains("http://localhost:9/weather"));
    }
}
