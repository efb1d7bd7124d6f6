use serde::{Deserialize, Serialize};

use crate::core::{AxisOrientation, VisibleTick};

use super::AxisConfig;

/// Tick mark segment. `(x1, y1)` sits next to the label, `(x2, y2)` on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickGeometry {
    pub line: TickLine,
    pub label: LabelAnchor,
}

/// Where along its own width a label is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelTextAnchor {
    Start,
    Middle,
    End,
}

/// Where along its own height a label is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelVerticalAnchor {
    Start,
    Middle,
    End,
}

/// Tick-mark endpoints and label anchor for one tick.
///
/// The tick mark is drawn at `coordinate`; the label follows `tick_coord`
/// when the collision scan shifted it.
#[must_use]
pub fn compute_tick_geometry(tick: &VisibleTick, config: &AxisConfig) -> TickGeometry {
    let bounds = config.bounds;
    let mirror = config.mirror;
    let sign = if mirror { -1.0 } else { 1.0 };
    let tick_size = effective_tick_size(tick.tick_size, config.tick_size);
    let margin = config.tick_margin;
    let label_coord = tick.label_coord();
    let coordinate = tick.coordinate;

    match config.orientation {
        AxisOrientation::Top => {
            let y2 = bounds.y + if mirror { 0.0 } else { bounds.height };
            let y1 = y2 - sign * tick_size;
            TickGeometry {
                line: TickLine {
                    x1: coordinate,
                    y1,
                    x2: coordinate,
                    y2,
                },
                label: LabelAnchor {
                    x: label_coord,
                    y: y1 - sign * margin,
                },
            }
        }
        AxisOrientation::Bottom => {
            let y2 = bounds.y + if mirror { bounds.height } else { 0.0 };
            let y1 = y2 + sign * tick_size;
            TickGeometry {
                line: TickLine {
                    x1: coordinate,
                    y1,
                    x2: coordinate,
                    y2,
                },
                label: LabelAnchor {
                    x: label_coord,
                    y: y1 + sign * margin,
                },
            }
        }
        AxisOrientation::Left => {
            let x2 = bounds.x + if mirror { 0.0 } else { bounds.width };
            let x1 = x2 - sign * tick_size;
            TickGeometry {
                line: TickLine {
                    x1,
                    y1: coordinate,
                    x2,
                    y2: coordinate,
                },
                label: LabelAnchor {
                    x: x1 - sign * margin,
                    y: label_coord,
                },
            }
        }
        AxisOrientation::Right => {
            let x2 = bounds.x + if mirror { bounds.width } else { 0.0 };
            let x1 = x2 + sign * tick_size;
            TickGeometry {
                line: TickLine {
                    x1,
                    y1: coordinate,
                    x2,
                    y2: coordinate,
                },
                label: LabelAnchor {
                    x: x1 + sign * margin,
                    y: label_coord,
                },
            }
        }
    }
}

/// A zero or NaN per-tick size falls back to the axis-wide size.
fn effective_tick_size(tick_size: Option<f64>, axis_tick_size: f64) -> f64 {
    tick_size
        .filter(|size| *size != 0.0 && !size.is_nan())
        .unwrap_or(axis_tick_size)
}

/// Axis baseline, on the edge of `bounds` facing the plot.
#[must_use]
pub fn compute_axis_line(config: &AxisConfig) -> TickLine {
    let bounds = config.bounds;
    let mirror = config.mirror;
    match config.orientation {
        AxisOrientation::Top | AxisOrientation::Bottom => {
            let on_far_edge = (config.orientation == AxisOrientation::Top && !mirror)
                || (config.orientation == AxisOrientation::Bottom && mirror);
            let y = bounds.y + if on_far_edge { bounds.height } else { 0.0 };
            TickLine {
                x1: bounds.x,
                y1: y,
                x2: bounds.x + bounds.width,
                y2: y,
            }
        }
        AxisOrientation::Left | AxisOrientation::Right => {
            let on_far_edge = (config.orientation == AxisOrientation::Left && !mirror)
                || (config.orientation == AxisOrientation::Right && mirror);
            let x = bounds.x + if on_far_edge { bounds.width } else { 0.0 };
            TickLine {
                x1: x,
                y1: bounds.y,
                x2: x,
                y2: bounds.y + bounds.height,
            }
        }
    }
}

#[must_use]
pub fn label_text_anchor(orientation: AxisOrientation, mirror: bool) -> LabelTextAnchor {
    match (orientation, mirror) {
        (AxisOrientation::Left, false) | (AxisOrientation::Right, true) => LabelTextAnchor::End,
        (AxisOrientation::Left, true) | (AxisOrientation::Right, false) => LabelTextAnchor::Start,
        (AxisOrientation::Top | AxisOrientation::Bottom, _) => LabelTextAnchor::Middle,
    }
}

#[must_use]
pub fn label_vertical_anchor(orientation: AxisOrientation, mirror: bool) -> LabelVerticalAnchor {
    match (orientation, mirror) {
        (AxisOrientation::Left | AxisOrientation::Right, _) => LabelVerticalAnchor::Middle,
        (AxisOrientation::Top, false) | (AxisOrientation::Bottom, true) => LabelVerticalAnchor::End,
        (AxisOrientation::Top, true) | (AxisOrientation::Bottom, false) => {
            LabelVerticalAnchor::Start
        }
    }
}
