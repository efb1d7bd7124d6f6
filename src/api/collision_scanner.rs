use crate::core::{ExtentDimension, SelectedTick, TickCandidate};

use super::AxisConfig;
use super::tick_label_text::TickLabelMeasure;

/// End of the axis the greedy scan starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanAnchor {
    Start,
    End,
    /// Resolve the last candidate first, then fill from the start.
    Both,
}

/// Greedily drops labels that overlap an accepted neighbour or leave the
/// view box.
///
/// Only the boundary candidate the scan starts from (and the last candidate
/// for [`ScanAnchor::Both`]) may be shifted inward; interior candidates
/// either fit at their own coordinate or are dropped. Every returned tick
/// carries `tick_coord`.
#[must_use]
pub fn scan_ticks(
    candidates: &[TickCandidate],
    config: &AxisConfig,
    anchor: ScanAnchor,
    labels: &TickLabelMeasure<'_>,
) -> Vec<SelectedTick> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let frame = ScanFrame::new(candidates, config, labels);
    match anchor {
        ScanAnchor::End => frame.scan_from_end(candidates, labels),
        ScanAnchor::Start => frame.scan_from_start(candidates, labels, false),
        ScanAnchor::Both => frame.scan_from_start(candidates, labels, true),
    }
}

#[derive(Debug, Clone, Copy)]
struct ScanFrame {
    dimension: ExtentDimension,
    sign: f64,
    start: f64,
    end: f64,
    unit_size: f64,
    min_tick_gap: f64,
}

impl ScanFrame {
    fn new(
        candidates: &[TickCandidate],
        config: &AxisConfig,
        labels: &TickLabelMeasure<'_>,
    ) -> Self {
        let dimension = config.orientation.measured_dimension();
        let view_box = config.view_box;
        let (low, high) = match dimension {
            ExtentDimension::Width => (view_box.x, view_box.x + view_box.width),
            ExtentDimension::Height => (view_box.y, view_box.y + view_box.height),
        };
        let sign = match candidates {
            [first, second, ..] => direction_sign(second.coordinate - first.coordinate),
            _ => 1.0,
        };
        let (start, end) = if sign == 1.0 { (low, high) } else { (high, low) };

        // Unit suffixes only widen labels; they never add height.
        let unit_size = match (config.unit_suffix(), dimension) {
            (Some(unit), ExtentDimension::Width) => labels.text_size(unit, dimension),
            _ => 0.0,
        };

        Self {
            dimension,
            sign,
            start,
            end,
            unit_size,
            min_tick_gap: config.min_tick_gap,
        }
    }

    fn label_size(&self, labels: &TickLabelMeasure<'_>, value: f64, index: usize) -> f64 {
        labels.label_size(value, index, self.dimension) + self.unit_size
    }

    fn fits(&self, tick_coord: f64, size: f64, start: f64, end: f64) -> bool {
        let sign = self.sign;
        sign * (tick_coord - sign * size / 2.0 - start) >= 0.0
            && sign * (tick_coord + sign * size / 2.0 - end) <= 0.0
    }

    /// Coordinate pulled back inside `end` by exactly the overrun.
    fn shift_before_end(&self, coordinate: f64, size: f64, end: f64) -> f64 {
        let overrun = self.sign * (coordinate + self.sign * size / 2.0 - end);
        if overrun > 0.0 {
            coordinate - overrun * self.sign
        } else {
            coordinate
        }
    }

    /// Coordinate pushed forward inside `start` by exactly the underrun.
    fn shift_after_start(&self, coordinate: f64, size: f64, start: f64) -> f64 {
        let underrun = self.sign * (coordinate - self.sign * size / 2.0 - start);
        if underrun < 0.0 {
            coordinate - underrun * self.sign
        } else {
            coordinate
        }
    }

    fn scan_from_end(
        &self,
        candidates: &[TickCandidate],
        labels: &TickLabelMeasure<'_>,
    ) -> Vec<SelectedTick> {
        let len = candidates.len();
        let mut end = self.end;
        let mut shown = Vec::with_capacity(len);

        for (index, candidate) in candidates.iter().copied().enumerate().rev() {
            let size = self.label_size(labels, candidate.value, len - index - 1);
            let tick_coord = if index == len - 1 {
                self.shift_before_end(candidate.coordinate, size, end)
            } else {
                candidate.coordinate
            };

            if self.fits(tick_coord, size, self.start, end) {
                end = tick_coord - self.sign * (size / 2.0 + self.min_tick_gap);
                shown.push(shifted(index, candidate, tick_coord));
            }
        }

        shown.reverse();
        shown
    }

    fn scan_from_start(
        &self,
        candidates: &[TickCandidate],
        labels: &TickLabelMeasure<'_>,
        preserve_end: bool,
    ) -> Vec<SelectedTick> {
        let len = candidates.len();
        let mut start = self.start;
        let mut end = self.end;
        let mut tail = None;

        if preserve_end {
            let index = len - 1;
            let candidate = candidates[index];
            let size = self.label_size(labels, candidate.value, index);
            let tick_coord = self.shift_before_end(candidate.coordinate, size, end);
            if self.fits(tick_coord, size, start, end) {
                end = tick_coord - self.sign * (size / 2.0 + self.min_tick_gap);
                tail = Some(shifted(index, candidate, tick_coord));
            }
        }

        let count = if preserve_end { len - 1 } else { len };
        let mut shown = Vec::with_capacity(len);
        for (index, candidate) in candidates.iter().copied().enumerate().take(count) {
            let size = self.label_size(labels, candidate.value, index);
            let tick_coord = if index == 0 {
                self.shift_after_start(candidate.coordinate, size, start)
            } else {
                candidate.coordinate
            };

            if self.fits(tick_coord, size, start, end) {
                start = tick_coord + self.sign * (size / 2.0 + self.min_tick_gap);
                shown.push(shifted(index, candidate, tick_coord));
            }
        }

        shown.extend(tail);
        shown
    }
}

fn shifted(index: usize, candidate: TickCandidate, tick_coord: f64) -> SelectedTick {
    SelectedTick {
        index,
        candidate,
        tick_coord: Some(tick_coord),
        time_label: None,
    }
}

/// `0` for a zero delta, `-1` for negative or NaN deltas.
fn direction_sign(delta: f64) -> f64 {
    if delta == 0.0 {
        0.0
    } else if delta > 0.0 {
        1.0
    } else {
        -1.0
    }
}
