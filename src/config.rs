use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional inline JSON block that overrides the defaults.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tuning knobs for every behavior on the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub header_scroll_threshold: f64,
    pub anchor_extra_offset: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub steps_line_threshold: f64,
    pub counter_threshold: f64,
    pub counter_duration_ms: f64,
    pub submit_sending_ms: u32,
    pub submit_success_ms: u32,
    pub sending_label: String,
    pub success_label: String,
    pub success_background: String,
    pub parallax_min_viewport: f64,
    pub parallax_max_degrees: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_scroll_threshold: 50.0,
            anchor_extra_offset: 20.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -60px 0px".to_string(),
            steps_line_threshold: 0.3,
            counter_threshold: 0.5,
            counter_duration_ms: 2000.0,
            submit_sending_ms: 1500,
            submit_success_ms: 3000,
            sending_label: "Отправка...".to_string(),
            success_label: "Заявка отправлена!".to_string(),
            success_background: "linear-gradient(135deg, #10B981, #06B6D4)".to_string(),
            parallax_min_viewport: 768.0,
            parallax_max_degrees: 8.0,
        }
    }
}

impl Config {
    /// Parses overrides. Unknown keys are ignored, missing keys keep their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Reads `#page-config` if the markup has one, falling back to defaults.
    pub fn load(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = Config::from_json(r#"{ "header_scroll_threshold": 80 }"#).unwrap();
        assert_eq!(config.header_scroll_threshold, 80.0);
        assert_eq!(config.counter_duration_ms, 2000.0);
        assert_eq!(config.reveal_root_margin, "0px 0px -60px 0px");
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ header_scroll_threshold: ").is_err());
    }
}
