use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use weather_now_core::{
    Config, Phase, Settings, WeatherLookup, WeatherProvider, provider_from_settings,
};

use crate::render::{render, render_json};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-now", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key in the config file.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City or location name.
        city: String,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for cities until cancelled (the default).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city, json }) => show(&settings()?, city, json).await,
            Some(Command::Interactive) | None => interactive(&settings()?).await,
        }
    }
}

fn settings() -> anyhow::Result<Settings> {
    let settings = Config::load()?.settings();
    tracing::debug!(
        base_url = %settings.base_url,
        has_api_key = !settings.api_key.is_empty(),
        "configuration loaded"
    );
    Ok(settings)
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(ExitCode::SUCCESS)
}

async fn show(settings: &Settings, city: String, json: bool) -> anyhow::Result<ExitCode> {
    let mut lookup = WeatherLookup::new(provider_from_settings(settings));
    lookup.set_query(city);
    lookup.submit_query().await;

    let state = lookup.state();
    if json {
        let view = render_json(state, &settings.icon_base_url);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        let out = render(state, &settings.icon_base_url);
        if !out.is_empty() {
            println!("{out}");
        }
    }

    Ok(match state.phase() {
        Phase::Success => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

async fn interactive(settings: &Settings) -> anyhow::Result<ExitCode> {
    let mut lookup = WeatherLookup::new(provider_from_settings(settings));

    loop {
        let city = match Text::new("City:")
            .with_placeholder("Enter city name")
            .prompt()
        {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => {
                tracing::warn!(error = %err, "city prompt failed");
                return Err(err).context("Failed to read city");
            }
        };

        lookup.set_query(city);
        let Some(ticket) = lookup.begin_request() else {
            continue;
        };
        println!("{}", render(lookup.state(), &settings.icon_base_url));

        let outcome = lookup.provider().current_weather(ticket.query()).await;
        lookup.complete_request(&ticket, outcome);
        println!("{}\n", render(lookup.state(), &settings.icon_base_url));
    }

    Ok(ExitCode::SUCCESS)
}
