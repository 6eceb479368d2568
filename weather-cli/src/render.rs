use serde_json::{Value, json};
use weather_now_core::{InteractionState, Phase, WeatherResult};

/// Human-readable view of the widget: loading line, error line or result card.
pub fn render(state: &InteractionState, icon_base: &str) -> String {
    match state.phase() {
        Phase::Idle => String::new(),
        Phase::Loading => "Loading...".to_string(),
        Phase::Failed => state.error_message.clone().unwrap_or_default(),
        Phase::Success => state
            .result
            .as_ref()
            .map(|r| result_card(r, icon_base))
            .unwrap_or_default(),
    }
}

fn result_card(result: &WeatherResult, icon_base: &str) -> String {
    [
        result.city.clone(),
        format!("🌡 {}°C (Feels like {}°C)", result.temp, result.feels_like),
        format!("🌤 {}", capitalize(&result.description)),
        format!("💧 Humidity: {}%", result.humidity),
        format!("🌬 Wind: {} m/s", result.wind_speed),
        format!("Icon: {}", result.icon_url(icon_base)),
    ]
    .join("\n")
}

/// Machine-readable view for `--json`.
pub fn render_json(state: &InteractionState, icon_base: &str) -> Value {
    json!({
        "query": state.query,
        "result": state.result,
        "icon_url": state.result.as_ref().map(|r| r.icon_url(icon_base)),
        "error": state.error_message,
    })
}

/// Uppercase the first letter of every word ("broken clouds" -> "Broken Clouds").
fn capitalize(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICONS: &str = "https://openweathermap.org/img/wn";

    fn london_state() -> InteractionState {
        InteractionState {
            query: "London".into(),
            result: Some(WeatherResult {
                city: "London".into(),
                temp: 15.0,
                feels_like: 14.0,
                description: "broken clouds".into(),
                icon: "04d".into(),
                humidity: 80,
                wind_speed: 3.1,
            }),
            is_loading: false,
            error_message: None,
        }
    }

    #[test]
    fn idle_renders_nothing() {
        assert_eq!(render(&InteractionState::default(), ICONS), "");
    }

    #[test]
    fn loading_renders_placeholder() {
        let state = InteractionState {
            query: "London".into(),
            is_loading: true,
            ..InteractionState::default()
        };
        assert_eq!(render(&state, ICONS), "Loading...");
    }

    #[test]
    fn failure_renders_error_message() {
        let state = InteractionState {
            query: "Nowhereville".into(),
            error_message: Some("city not found".into()),
            ..InteractionState::default()
        };
        assert_eq!(render(&state, ICONS), "city not found");
    }

    #[test]
    fn success_renders_card() {
        let out = render(&london_state(), ICONS);

        assert!(out.starts_with("London\n"));
        assert!(out.contains("15°C (Feels like 14°C)"));
        assert!(out.contains("🌤 Broken Clouds"));
        assert!(out.contains("Humidity: 80%"));
        assert!(out.contains("Wind: 3.1 m/s"));
        assert!(out.contains("https://openweathermap.org/img/wn/04d@2x.png"));
    }

    #[test]
    fn capitalize_uppercases_every_word() {
        assert_eq!(capitalize("light intensity drizzle"), "Light Intensity Drizzle");
        assert_eq!(capitalize("mist"), "Mist");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn json_view_includes_result_and_icon_url() {
        let value = render_json(&london_state(), ICONS);

        assert_eq!(value["result"]["city"], "London");
        assert_eq!(value["result"]["wind_speed"], 3.1);
        assert_eq!(value["icon_url"], "https://openweathermap.org/img/wn/04d@2x.png");
        assert!(value["error"].is_null());
    }
}
