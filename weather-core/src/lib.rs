//! Core library for the `weather-now` CLI.
//!
//! This crate defines:
//! - The lookup component and its interaction state
//! - Abstraction over the weather provider (OpenWeatherMap)
//! - Configuration & credentials handling
//!
//! It is used by `weather-now`, but can also be driven from any other
//! front end that can poll a future.

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;

pub use config::{Config, Settings};
pub use error::LookupError;
pub use lookup::{InteractionState, Phase, RequestTicket, WeatherLookup};
pub use model::WeatherResult;
pub use provider::{OpenWeatherProvider, WeatherProvider, provider_from_settings};
