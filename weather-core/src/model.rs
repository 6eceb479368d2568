use serde::{Deserialize, Serialize};

/// Normalized snapshot of current conditions for one location.
///
/// Temperatures are in °C and wind speed in m/s, since requests always ask
/// the provider for metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub city: String,
    pub temp: f64,
    pub feels_like: f64,
    pub description: String,
    pub icon: String,
    pub humidity: u8,
    pub wind_speed: f64,
}

impl WeatherResult {
    /// URL of the condition icon (`<icon_base>/<icon>@2x.png`).
    pub fn icon_url(&self, icon_base: &str) -> String {
        format!("{}/{}@2x.png", icon_base.trim_end_matches('/'), self.icon)
    }
}
