use serde::{Deserialize, Serialize};

/// Side of the plot an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl AxisOrientation {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Label dimension that competes for space along this axis.
    #[must_use]
    pub fn measured_dimension(self) -> ExtentDimension {
        if self.is_horizontal() {
            ExtentDimension::Width
        } else {
            ExtentDimension::Height
        }
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl AxisRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    #[must_use]
    pub fn has_area(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// One axis position proposed by the scale-mapping layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickCandidate {
    /// Domain value. Unix seconds for time axes.
    pub value: f64,
    /// Pixel position along the measured dimension of the axis.
    pub coordinate: f64,
    /// Per-tick override of the configured tick-mark length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_size: Option<f64>,
}

impl TickCandidate {
    #[must_use]
    pub const fn new(value: f64, coordinate: f64) -> Self {
        Self {
            value,
            coordinate,
            tick_size: None,
        }
    }

    #[must_use]
    pub const fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = Some(tick_size);
        self
    }
}

/// Candidate that survived one selection strategy.
///
/// `tick_coord` is only set by the collision scan; `time_label` only by the
/// time granularity selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedTick {
    pub index: usize,
    pub candidate: TickCandidate,
    pub tick_coord: Option<f64>,
    pub time_label: Option<String>,
}

impl SelectedTick {
    #[must_use]
    pub(crate) fn unshifted(index: usize, candidate: TickCandidate) -> Self {
        Self {
            index,
            candidate,
            tick_coord: None,
            time_label: None,
        }
    }
}

/// Display-ready tick handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleTick {
    pub value: f64,
    pub label: String,
    pub coordinate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_coord: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_size: Option<f64>,
}

impl VisibleTick {
    /// Coordinate the label is anchored at.
    #[must_use]
    pub fn label_coord(&self) -> f64 {
        self.tick_coord.unwrap_or(self.coordinate)
    }
}

/// Rendered size of one label.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn along(self, dimension: ExtentDimension) -> f64 {
        match dimension {
            ExtentDimension::Width => self.width,
            ExtentDimension::Height => self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtentDimension {
    Width,
    Height,
}
