use crate::core::{ExtentDimension, TextExtentProvider};

use super::TickLabelFormatterFn;

/// Plain rendering of a tick value when no formatter is configured.
#[must_use]
pub fn default_tick_text(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else {
        value.to_string()
    }
}

#[must_use]
pub fn format_tick_text(
    value: f64,
    index: usize,
    formatter: Option<&TickLabelFormatterFn>,
) -> String {
    match formatter {
        Some(formatter) => formatter(value, index),
        None => default_tick_text(value),
    }
}

/// Measurer, formatter and font bundled for one selection pass.
#[derive(Clone, Copy)]
pub struct TickLabelMeasure<'a> {
    measurer: &'a dyn TextExtentProvider,
    formatter: Option<&'a TickLabelFormatterFn>,
    font_size_px: f64,
}

impl std::fmt::Debug for TickLabelMeasure<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickLabelMeasure")
            .field("has_formatter", &self.formatter.is_some())
            .field("font_size_px", &self.font_size_px)
            .finish_non_exhaustive()
    }
}

impl<'a> TickLabelMeasure<'a> {
    #[must_use]
    pub fn new(measurer: &'a dyn TextExtentProvider, font_size_px: f64) -> Self {
        Self {
            measurer,
            formatter: None,
            font_size_px,
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Option<&'a TickLabelFormatterFn>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Extent of the formatted label along `dimension`.
    #[must_use]
    pub fn label_size(&self, value: f64, index: usize, dimension: ExtentDimension) -> f64 {
        let text = format_tick_text(value, index, self.formatter);
        self.text_size(&text, dimension)
    }

    #[must_use]
    pub fn text_size(&self, text: &str, dimension: ExtentDimension) -> f64 {
        self.measurer
            .measure(text, self.font_size_px)
            .along(dimension)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{TickLabelMeasure, default_tick_text, format_tick_text};
    use crate::api::TickLabelFormatterFn;
    use crate::core::{ExtentDimension, TextExtent};

    #[test]
    fn default_text_drops_trailing_fraction() {
        assert_eq!(default_tick_text(5.0), "5");
        assert_eq!(default_tick_text(0.25), "0.25");
        assert_eq!(default_tick_text(-0.0), "0");
        assert_eq!(default_tick_text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn formatter_receives_value_and_index() {
        let formatter: TickLabelFormatterFn =
            Arc::new(|value: f64, index: usize| format!("{index}:{value}"));
        assert_eq!(format_tick_text(2.5, 4, Some(&formatter)), "4:2.5");
    }

    #[test]
    fn label_size_reads_requested_dimension() {
        let measurer = |text: &str, _font_size_px: f64| TextExtent::new(text.len() as f64, 9.0);
        let labels = TickLabelMeasure::new(&measurer, 12.0);
        assert_eq!(labels.label_size(123.0, 0, ExtentDimension::Width), 3.0);
        assert_eq!(labels.label_size(123.0, 0, ExtentDimension::Height), 9.0);
    }
}
