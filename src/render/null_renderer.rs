use crate::error::AxisResult;
use crate::render::{AxisFrame, Renderer};

/// Headless renderer that validates frames and records what it was given.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_labels: Vec<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &AxisFrame) -> AxisResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_labels = frame.texts.iter().map(|text| text.text.clone()).collect();
        Ok(())
    }
}
