use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CalendarDate, CalendarLayout, DEFAULT_SELECTION_COLOR, DisabledDateSet, RangePicker};

/// What a tap does once a range has both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AfterRange {
    /// Drop the range and open a new one at the tapped date.
    #[default]
    Restart,
    /// Drop the range; the next tap opens a new one.
    ClearOnly,
}

/// Errors raised while loading a picker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Invalid color format: {0} (expected #RGB, #RRGGBB or #RRGGBBAA)")]
    InvalidColor(String),
}

/// Settings for one calendar screen.
///
/// ```json
/// {
///   "disabledDates": ["2020-03-18", "2020-03-19"],
///   "color": "#5BA7B6",
///   "current": "2020-03-01",
///   "layout": "list",
///   "afterRange": "restart"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PickerConfig {
    /// Sold-out dates, in any order.
    #[serde(default)]
    pub disabled_dates: Vec<CalendarDate>,
    #[serde(default = "default_color")]
    pub color:          String,
    /// The month the calendar opens on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current:        Option<CalendarDate>,
    #[serde(default)]
    pub layout:         CalendarLayout,
    #[serde(default)]
    pub after_range:    AfterRange,
}

fn default_color() -> String {
    DEFAULT_SELECTION_COLOR.to_owned()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            disabled_dates: Vec::new(),
            color:          default_color(),
            current:        None,
            layout:         CalendarLayout::default(),
            after_range:    AfterRange::default(),
        }
    }
}

impl PickerConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` for malformed JSON or dates, and
    /// `ConfigError::InvalidColor` for a colour that is not hex.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::InvalidColor` if the colour is not `#RGB`,
    /// `#RRGGBB` or `#RRGGBBAA`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_hex_color(&self.color) {
            return Err(ConfigError::InvalidColor(self.color.clone()));
        }
        Ok(())
    }
}

fn is_hex_color(color: &str) -> bool {
    color.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}

impl RangePicker {
    /// Builds a cleared picker from a configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidColor` if the configuration does not validate.
    pub fn from_config(config: &PickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let picker = Self::new(DisabledDateSet::build(config.disabled_dates.iter().copied()))
            .with_color(config.color.clone())
            .with_layout(config.layout)
            .with_after_range(config.after_range);
        Ok(match config.current {
            Some(current) => picker.with_current(current),
            None => picker,
        })
    }
}
