use serde::{Deserialize, Serialize};

use crate::error::AxisResult;
use crate::render::{AxisLineKind, LinePrimitive, TextPrimitive};

/// Backend-agnostic draw list for one axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisFrame {
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl AxisFrame {
    pub fn axis_line(&self) -> Option<&LinePrimitive> {
        self.lines
            .iter()
            .find(|line| line.kind == AxisLineKind::AxisLine)
    }

    pub fn tick_lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.lines
            .iter()
            .filter(|line| line.kind == AxisLineKind::TickLine)
    }

    pub fn validate(&self) -> AxisResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }
}
