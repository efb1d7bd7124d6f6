use serde::{Deserialize, Serialize};

use crate::core::VisibleTick;
use crate::render::{
    AxisFrame, AxisLineKind, Color, LinePrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use super::AxisConfig;
use super::tick_geometry::{
    LabelTextAnchor, LabelVerticalAnchor, TickLine, compute_axis_line, compute_tick_geometry,
    label_text_anchor, label_vertical_anchor,
};

/// Stroke and text styling applied to one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisRenderStyle {
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub tick_line_color: Color,
    pub tick_line_width: f64,
    pub label_color: Color,
}

impl Default for AxisRenderStyle {
    fn default() -> Self {
        Self {
            axis_line_color: Color::AXIS_GRAY,
            axis_line_width: 1.0,
            tick_line_color: Color::AXIS_GRAY,
            tick_line_width: 1.0,
            label_color: Color::AXIS_GRAY,
        }
    }
}

/// Turns selected ticks into draw primitives.
///
/// Label text is the display label followed by the configured unit.
#[must_use]
pub fn build_axis_frame(
    ticks: &[VisibleTick],
    config: &AxisConfig,
    style: &AxisRenderStyle,
) -> AxisFrame {
    let mut frame = AxisFrame::default();
    if config.hide {
        return frame;
    }

    if config.show_axis_line {
        frame.lines.push(line_primitive(
            AxisLineKind::AxisLine,
            compute_axis_line(config),
            style.axis_line_width,
            style.axis_line_color,
        ));
    }

    let h_align = match label_text_anchor(config.orientation, config.mirror) {
        LabelTextAnchor::Start => TextHAlign::Left,
        LabelTextAnchor::Middle => TextHAlign::Center,
        LabelTextAnchor::End => TextHAlign::Right,
    };
    let v_align = match label_vertical_anchor(config.orientation, config.mirror) {
        LabelVerticalAnchor::Start => TextVAlign::Top,
        LabelVerticalAnchor::Middle => TextVAlign::Middle,
        LabelVerticalAnchor::End => TextVAlign::Bottom,
    };
    let unit = config.unit_suffix().unwrap_or_default();

    for tick in ticks {
        let geometry = compute_tick_geometry(tick, config);
        if config.show_tick_lines {
            frame.lines.push(line_primitive(
                AxisLineKind::TickLine,
                geometry.line,
                style.tick_line_width,
                style.tick_line_color,
            ));
        }
        let text = format!("{}{unit}", tick.label);
        // Blank labels keep their tick mark but draw no text.
        if config.show_labels && !text.is_empty() {
            frame.texts.push(TextPrimitive {
                text,
                x: geometry.label.x,
                y: geometry.label.y,
                font_size_px: config.label_font_size_px,
                color: style.label_color,
                h_align,
                v_align,
            });
        }
    }

    frame
}

fn line_primitive(
    kind: AxisLineKind,
    line: TickLine,
    stroke_width: f64,
    color: Color,
) -> LinePrimitive {
    LinePrimitive {
        kind,
        x1: line.x1,
        y1: line.y1,
        x2: line.x2,
        y2: line.y2,
        stroke_width,
        color,
    }
}
