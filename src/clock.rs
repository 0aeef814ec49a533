//! Analog clock face
//!
//! Builds the clock document served by the `svgclock` demo: a circular face
//! with second, minute and hour hands drawn as short paths from the centre.
//! The look is configurable through a TOML file.

use std::f64::consts::PI;
use std::path::Path as FsPath;

use chrono::Timelike;
use serde::Deserialize;
use thiserror::Error;

use crate::document::elements::{circle, path, svg};
use crate::document::Element;
use crate::path::Path;
use crate::value::{Length, LengthUnit};

/// Errors that can occur when loading a clock configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read clock config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse clock config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Appearance of one hand
#[derive(Debug, Clone, PartialEq)]
pub struct HandConfig {
    /// Length as a fraction of the face radius
    pub length: f64,
    pub stroke: String,
    pub stroke_width: f64,
}

impl HandConfig {
    fn new(length: f64, stroke: &str, stroke_width: f64) -> Self {
        Self {
            length,
            stroke: stroke.to_string(),
            stroke_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "TomlHands")]
pub struct Hands {
    pub second: HandConfig,
    pub minute: HandConfig,
    pub hour: HandConfig,
}

impl Default for Hands {
    fn default() -> Self {
        Self {
            second: HandConfig::new(0.8, "red", 1.0),
            minute: HandConfig::new(0.9, "black", 3.0),
            hour: HandConfig::new(0.6, "black", 5.0),
        }
    }
}

/// TOML structure for a hand; missing fields fall back to that hand's defaults
#[derive(Default, Deserialize)]
struct TomlHand {
    length: Option<f64>,
    stroke: Option<String>,
    stroke_width: Option<f64>,
}

impl TomlHand {
    fn over(self, base: HandConfig) -> HandConfig {
        HandConfig {
            length: self.length.unwrap_or(base.length),
            stroke: self.stroke.unwrap_or(base.stroke),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct TomlHands {
    second: TomlHand,
    minute: TomlHand,
    hour: TomlHand,
}

impl From<TomlHands> for Hands {
    fn from(hands: TomlHands) -> Self {
        let defaults = Hands::default();
        Self {
            second: hands.second.over(defaults.second),
            minute: hands.minute.over(defaults.minute),
            hour: hands.hour.over(defaults.hour),
        }
    }
}

/// Clock face configuration
///
/// Every field is optional in the TOML file:
///
/// ```toml
/// width = 256
/// height = 256
/// refresh_secs = 5
///
/// [hands.second]
/// length = 0.85
/// stroke = "crimson"
/// stroke_width = 1.5
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub width: f64,
    pub height: f64,
    /// Space between the face and the edge of the image
    pub margin: f64,
    /// Page reload interval for the served HTML
    pub refresh_secs: u64,
    pub hands: Hands,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            width: 128.0,
            height: 128.0,
            margin: 4.0,
            refresh_secs: 1,
            hands: Hands::default(),
        }
    }
}

impl ClockConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &FsPath) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Radius of the face
    pub fn radius(&self) -> f64 {
        let diameter = (self.width - 2.0 * self.margin).min(self.height - 2.0 * self.margin);
        diameter / 2.0
    }
}

fn rad(deg: i64) -> f64 {
    PI * deg as f64 / 180.0
}

/// Angles of the second, minute and hour hands in radians, measured
/// clockwise from the positive x axis. Degrees are truncated to whole
/// numbers before conversion, so hands move in one-degree steps.
pub fn hand_angles(time: &impl Timelike) -> [f64; 3] {
    let hour = i64::from(time.hour());
    let minute = i64::from(time.minute());
    let second = i64::from(time.second());
    [
        rad(360 * second / 60 - 90),
        rad(360 * (60 * minute + second) / (60 * 60) - 90),
        rad(360 * ((hour % 12) * 60 * 60 + minute * 60 + second) / (12 * 60 * 60) - 90),
    ]
}

/// Build the clock face document for `time`
pub fn clock_face(time: &impl Timelike, config: &ClockConfig) -> Element {
    let (width, height) = (config.width, config.height);
    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = config.radius();

    let [second, minute, hour] = hand_angles(time);
    let hands = [
        (&config.hands.second, second),
        (&config.hands.minute, minute),
        (&config.hands.hour, hour),
    ];

    let face = circle()
        .cx_cy_r(cx, cy, radius, LengthUnit::Number)
        .fill("none")
        .stroke("black");

    svg()
        .width_height(width, height, LengthUnit::Number)
        .view_box(0.0, 0.0, width, height)
        .child(face)
        .append_children(hands.into_iter().map(|(hand, angle)| {
            let tip = (
                hand.length * radius * angle.cos(),
                hand.length * radius * angle.sin(),
            );
            path()
                .d(Path::new()
                    .move_to_abs((cx, cy))
                    .line_to_rel(tip)
                    .close_path())
                .stroke(hand.stroke.as_str())
                .stroke_width(Length::number(hand.stroke_width))
        }))
}
