use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{AxisOrientation, AxisRect};
use crate::error::{AxisError, AxisResult};

/// Custom label text for `(value, index)`.
pub type TickLabelFormatterFn = Arc<dyn Fn(f64, usize) -> String + Send + Sync + 'static>;

/// Strategy used to thin the candidate tick list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TickInterval {
    /// Keep every `(n + 1)`-th candidate, no measurement involved.
    Step(usize),
    /// Greedy scan from the first candidate.
    PreserveStart,
    /// Greedy scan from the last candidate.
    #[default]
    PreserveEnd,
    /// Keep the last candidate, then scan from the first.
    PreserveStartEnd,
    /// Calendar sampling of unix-second values.
    Time,
}

impl TickInterval {
    /// Any unknown policy name resolves to [`TickInterval::PreserveEnd`].
    #[must_use]
    pub fn from_policy_name(name: &str) -> Self {
        match name {
            "preserveStart" => Self::PreserveStart,
            "preserveStartEnd" => Self::PreserveStartEnd,
            "time" => Self::Time,
            _ => Self::PreserveEnd,
        }
    }
}

impl FromStr for TickInterval {
    type Err = std::convert::Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Ok(step) = trimmed.parse::<usize>() {
            return Ok(Self::Step(step));
        }
        Ok(Self::from_policy_name(trimmed))
    }
}

impl Serialize for TickInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Step(step) => serializer.serialize_u64(*step as u64),
            Self::PreserveStart => serializer.serialize_str("preserveStart"),
            Self::PreserveEnd => serializer.serialize_str("preserveEnd"),
            Self::PreserveStartEnd => serializer.serialize_str("preserveStartEnd"),
            Self::Time => serializer.serialize_str("time"),
        }
    }
}

struct TickIntervalVisitor;

impl Visitor<'_> for TickIntervalVisitor {
    type Value = TickInterval;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a non-negative integer step or an interval policy name")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        usize::try_from(value)
            .map(TickInterval::Step)
            .map_err(|_| E::custom(format!("interval step {value} is too large")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .map_err(|_| E::custom(format!("interval step must be >= 0, got {value}")))
            .and_then(|value| self.visit_u64(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(TickInterval::from_policy_name(value))
    }
}

impl<'de> Deserialize<'de> for TickInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TickIntervalVisitor)
    }
}

/// Whether the host can measure text for this pass.
///
/// Server-side passes skip every measuring strategy and thin by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderEnvironment {
    #[default]
    Interactive,
    Server,
}

/// Immutable per-pass axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub orientation: AxisOrientation,
    /// The axis' own rectangle; tick marks and the axis line hang off it.
    pub bounds: AxisRect,
    /// Span labels must stay inside.
    pub view_box: AxisRect,
    pub min_tick_gap: f64,
    pub tick_size: f64,
    pub tick_margin: f64,
    pub mirror: bool,
    pub interval: TickInterval,
    pub unit: Option<String>,
    pub show_labels: bool,
    pub show_tick_lines: bool,
    pub show_axis_line: bool,
    pub hide: bool,
    pub label_font_size_px: f64,
    pub environment: RenderEnvironment,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            orientation: AxisOrientation::Bottom,
            bounds: AxisRect::default(),
            view_box: AxisRect::default(),
            min_tick_gap: 5.0,
            tick_size: 6.0,
            tick_margin: 2.0,
            mirror: false,
            interval: TickInterval::PreserveEnd,
            unit: None,
            show_labels: true,
            show_tick_lines: true,
            show_axis_line: true,
            hide: false,
            label_font_size_px: 12.0,
            environment: RenderEnvironment::Interactive,
        }
    }
}

impl AxisConfig {
    /// Axis whose own rectangle and label span coincide.
    #[must_use]
    pub fn new(orientation: AxisOrientation, rect: AxisRect) -> Self {
        Self {
            orientation,
            bounds: rect,
            view_box: rect,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_view_box(mut self, view_box: AxisRect) -> Self {
        self.view_box = view_box;
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: TickInterval) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_min_tick_gap(mut self, min_tick_gap: f64) -> Self {
        self.min_tick_gap = min_tick_gap;
        self
    }

    #[must_use]
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    #[must_use]
    pub fn with_tick_margin(mut self, tick_margin: f64) -> Self {
        self.tick_margin = tick_margin;
        self
    }

    #[must_use]
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: RenderEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Unit suffix, treating an empty string as absent.
    #[must_use]
    pub fn unit_suffix(&self) -> Option<&str> {
        self.unit.as_deref().filter(|unit| !unit.is_empty())
    }

    pub fn validate(&self) -> AxisResult<()> {
        for (name, rect) in [("bounds", self.bounds), ("view_box", self.view_box)] {
            if !rect.is_finite() {
                return Err(AxisError::InvalidConfig(format!(
                    "`{name}` must have finite x, y, width and height"
                )));
            }
            if rect.width < 0.0 || rect.height < 0.0 {
                return Err(AxisError::InvalidConfig(format!(
                    "`{name}` width and height must be >= 0"
                )));
            }
        }
        for (name, value) in [
            ("min_tick_gap", self.min_tick_gap),
            ("tick_size", self.tick_size),
            ("tick_margin", self.tick_margin),
        ] {
            if !value.is_finite() {
                return Err(AxisError::InvalidConfig(format!("`{name}` must be finite")));
            }
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(AxisError::InvalidConfig(
                "`label_font_size_px` must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidConfig(format!("failed to parse axis config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AxisError::InvalidConfig(format!("failed to serialize axis config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisConfig, RenderEnvironment, TickInterval};
    use crate::core::AxisOrientation;

    #[test]
    fn unknown_policy_names_fall_back_to_preserve_end() {
        assert_eq!(TickInterval::from_policy_name("bogus"), TickInterval::PreserveEnd);
        assert_eq!("".parse::<TickInterval>(), Ok(TickInterval::PreserveEnd));
    }

    #[test]
    fn numeric_strings_parse_as_steps() {
        assert_eq!("3".parse::<TickInterval>(), Ok(TickInterval::Step(3)));
        assert_eq!("time".parse::<TickInterval>(), Ok(TickInterval::Time));
    }

    #[test]
    fn defaults_match_component_defaults() {
        let config = AxisConfig::default();
        assert_eq!(config.orientation, AxisOrientation::Bottom);
        assert_eq!(config.min_tick_gap, 5.0);
        assert_eq!(config.tick_size, 6.0);
        assert_eq!(config.tick_margin, 2.0);
        assert_eq!(config.interval, TickInterval::PreserveEnd);
        assert_eq!(config.environment, RenderEnvironment::Interactive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_unit_is_treated_as_absent() {
        let config = AxisConfig::default().with_unit("");
        assert_eq!(config.unit_suffix(), None);
    }

    #[test]
    fn non_finite_gap_is_rejected() {
        let config = AxisConfig::default().with_min_tick_gap(f64::NAN);
        assert!(config.validate().is_err());
    }
}
