//! Configuration persistence for rulerpick settings
//!
//! Only range and style are stored. The picked value is never persisted.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::iced::Color;
use serde::{Deserialize, Serialize};

use crate::domain::{TapeOrientation, ValueRange};
use crate::render::geometry::{LineStyle, TapeStyle};

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl TickColor {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.533, 0.533, 0.533);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for TickColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<TickColor> for Color {
    fn from(c: TickColor) -> Self {
        Color::from_rgb(c.r, c.g, c.b)
    }
}

impl From<Color> for TickColor {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Picker configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CosmicConfigEntry)]
#[version = 1]
pub struct RulerConfig {
    /// Smallest selectable value (kg on the horizontal tape)
    pub min_value: i32,
    /// Largest selectable value
    pub max_value: i32,
    /// Draw horizontal tick lines on a tape dragged up and down.
    /// When false, the tape runs left to right and offers a kg/lb toggle.
    pub horizontal_lines: bool,
    /// Stroke width of major ticks in logical pixels
    pub major_line_thickness: f32,
    /// Stroke width of normal ticks in logical pixels
    pub normal_line_thickness: f32,
    /// Stroke width of the middle marker in logical pixels
    pub middle_line_thickness: f32,
    /// Major tick length as a fraction of the cross axis
    pub major_line_length: f32,
    /// Normal tick length as a fraction of the cross axis
    pub normal_line_length: f32,
    /// Where the middle marker starts, as a fraction of the cross axis
    pub middle_line_length: f32,
    pub major_color: TickColor,
    pub normal_color: TickColor,
    pub middle_color: TickColor,
    #[serde(default)]
    pub label_color: TickColor,
    #[serde(default = "default_background_color")]
    pub background_color: TickColor,
    /// Label font size in logical pixels
    #[serde(default = "default_label_size")]
    pub label_size: f32,
}

fn default_background_color() -> TickColor {
    TickColor::WHITE
}

fn default_label_size() -> f32 {
    30.0
}

impl RulerConfig {
    /// Configuration ID for cosmic-config
    pub const ID: &'static str = "io.github.rulerpick";

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => match Self::get_entry(&config) {
                Ok(entry) => entry,
                Err((errs, entry)) => {
                    log::warn!("Error loading config, using defaults: {:?}", errs);
                    entry
                }
            },
            Err(err) => {
                log::warn!("Could not create config handler: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => {
                if let Err(err) = self.write_entry(&config) {
                    log::error!("Failed to save config: {:?}", err);
                } else {
                    log::debug!("saved config to {}", Self::ID);
                }
            }
            Err(err) => {
                log::error!("Could not create config handler for saving: {:?}", err);
            }
        }
    }

    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.min_value, self.max_value)
    }

    pub fn orientation(&self) -> TapeOrientation {
        TapeOrientation::from_horizontal_lines(self.horizontal_lines)
    }

    pub fn tape_style(&self) -> TapeStyle {
        TapeStyle {
            major: LineStyle {
                thickness: self.major_line_thickness,
                length: self.major_line_length,
                color: self.major_color,
            },
            normal: LineStyle {
                thickness: self.normal_line_thickness,
                length: self.normal_line_length,
                color: self.normal_color,
            },
            middle: LineStyle {
                thickness: self.middle_line_thickness,
                length: self.middle_line_length,
                color: self.middle_color,
            },
            label_color: self.label_color,
            label_size: self.label_size,
            background: self.background_color,
        }
    }
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            min_value: 0,
            max_value: 100,
            horizontal_lines: false,
            major_line_thickness: 2.0,
            normal_line_thickness: 1.0,
            middle_line_thickness: 2.0,
            major_line_length: 0.3,
            normal_line_length: 0.2,
            middle_line_length: 0.0,
            major_color: TickColor::BLACK,
            normal_color: TickColor::GRAY,
            middle_color: TickColor::BLUE,
            label_color: TickColor::BLACK,
            background_color: default_background_color(),
            label_size: default_label_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulerConfig::default();
        assert_eq!(config.range(), ValueRange::new(0, 100));
        assert_eq!(config.orientation(), TapeOrientation::Horizontal);

        let style = config.tape_style();
        assert_eq!(style.major.length, 0.3);
        assert_eq!(style.normal.length, 0.2);
        assert_eq!(style.middle.length, 0.0);
        assert_eq!(style.major.color, TickColor::BLACK);
        assert_eq!(style.normal.color, TickColor::GRAY);
        assert_eq!(style.middle.color, TickColor::BLUE);
    }

    #[test]
    fn test_horizontal_lines_select_vertical_tape() {
        let config = RulerConfig {
            horizontal_lines: true,
            ..RulerConfig::default()
        };
        assert_eq!(config.orientation(), TapeOrientation::Vertical);
    }

    #[test]
    fn test_serde_fills_new_style_fields() {
        // Entries written before label and background settings existed
        let old: RulerConfig = serde_json::from_value(serde_json::json!({
            "min_value": 10,
            "max_value": 250,
            "horizontal_lines": true,
            "major_line_thickness": 2.0,
            "normal_line_thickness": 1.0,
            "middle_line_thickness": 2.0,
            "major_line_length": 0.3,
            "normal_line_length": 0.2,
            "middle_line_length": 0.0,
            "major_color": {"r": 0.0, "g": 0.0, "b": 0.0},
            "normal_color": {"r": 0.533, "g": 0.533, "b": 0.533},
            "middle_color": {"r": 0.0, "g": 0.0, "b": 1.0},
        }))
        .unwrap();
        assert_eq!(old.range(), ValueRange::new(10, 250));
        assert_eq!(old.background_color, TickColor::WHITE);
        assert_eq!(old.label_size, 30.0);
    }

    #[test]
    fn test_color_conversion() {
        let color: Color = TickColor::BLUE.into();
        assert_eq!(color, Color::from_rgb(0.0, 0.0, 1.0));
        assert_eq!(TickColor::from(color), TickColor::BLUE);
    }
}
