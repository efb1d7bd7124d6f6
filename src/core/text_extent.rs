use crate::core::types::TextExtent;

/// Measures rendered label text.
///
/// Implementations must be pure: the collision scan measures the same label
/// text more than once per pass and relies on identical answers.
pub trait TextExtentProvider {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent;
}

impl<F> TextExtentProvider for F
where
    F: Fn(&str, f64) -> TextExtent,
{
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        self(text, font_size_px)
    }
}

/// Backend-independent glyph-width estimate for headless layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicTextExtent {
    pub line_height_ratio: f64,
}

impl Default for HeuristicTextExtent {
    fn default() -> Self {
        Self {
            line_height_ratio: 1.2,
        }
    }
}

impl TextExtentProvider for HeuristicTextExtent {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        if text.is_empty() || !font_size_px.is_finite() || font_size_px <= 0.0 {
            return TextExtent::ZERO;
        }

        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' | '\'' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        TextExtent::new(units * font_size_px, font_size_px * self.line_height_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::{HeuristicTextExtent, TextExtentProvider};
    use crate::core::types::TextExtent;

    #[test]
    fn empty_text_has_no_extent() {
        let extent = HeuristicTextExtent::default().measure("", 12.0);
        assert_eq!(extent, TextExtent::ZERO);
    }

    #[test]
    fn digits_are_wider_than_separators() {
        let measurer = HeuristicTextExtent::default();
        let digits = measurer.measure("00", 10.0).width;
        let commas = measurer.measure(",,", 10.0).width;
        assert!(digits > commas);
    }

    #[test]
    fn closures_act_as_measurers() {
        let fixed = |text: &str, _font_size_px: f64| TextExtent::new(text.len() as f64, 4.0);
        assert_eq!(fixed.measure("abc", 12.0), TextExtent::new(3.0, 4.0));
    }
}
