use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::{error::LookupError, model::WeatherResult};

use super::WeatherProvider;

const SUCCESS_CODE: i64 = 200;

/// Client for the OpenWeatherMap current-weather endpoint.
#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    fn request(&self, query: &str) -> RequestBuilder {
        self.http.get(&self.base_url).query(&[
            ("q", query),
            ("appid", self.api_key.as_str()),
            ("units", "metric"),
        ])
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &str) -> Result<WeatherResult, LookupError> {
        tracing::debug!(%query, url = %self.base_url, "requesting current weather");

        let res = self.request(query).send().await?;

        // The embedded `cod` decides success; the HTTP status is only logged.
        let status = res.status();
        let body = res.text().await?;
        tracing::debug!(%status, bytes = body.len(), "weather response received");

        parse_current(&body)
    }
}

/// Map a current-weather response body onto a [`WeatherResult`].
pub fn parse_current(body: &str) -> Result<WeatherResult, LookupError> {
    let value: Value = serde_json::from_str(body)?;

    let envelope = OwEnvelope::deserialize(&value)?;
    if !envelope.is_success() {
        return Err(LookupError::provider(envelope.message));
    }

    let parsed = OwCurrentResponse::deserialize(&value)?;
    let condition = parsed.weather.into_iter().next().ok_or_else(|| {
        LookupError::transport("Weather response contained no weather conditions")
    })?;

    Ok(WeatherResult {
        city: parsed.name,
        temp: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        description: condition.description,
        icon: condition.icon,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
    })
}

#[derive(Debug, Deserialize)]
struct OwEnvelope {
    /// A number on success, frequently a string on errors (`"404"`).
    cod: Option<Value>,
    message: Option<String>,
}

impl OwEnvelope {
    fn is_success(&self) -> bool {
        // Only the number 200 counts; a string "200" does not.
        self.cod.as_ref().and_then(Value::as_i64) == Some(SUCCESS_CODE)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}
