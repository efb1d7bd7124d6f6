use std::sync::Arc;

#[cfg(feature = "parallel-axes")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::core::{SelectedTick, TextExtentProvider, TickCandidate, VisibleTick};
use crate::error::AxisResult;
use crate::render::{AxisFrame, Renderer};

use super::axis_scene_builder::{AxisRenderStyle, build_axis_frame};
use super::collision_scanner::{ScanAnchor, scan_ticks};
use super::json_contract::VisibleTicksSnapshot;
use super::tick_interval_selector::select_by_interval;
use super::tick_label_text::{TickLabelMeasure, format_tick_text};
use super::time_granularity_selector::select_time_ticks;
use super::{AxisConfig, RenderEnvironment, TickInterval, TickLabelFormatterFn};

/// Shared measurer handle owned by an [`AxisTickSelector`].
pub type SharedTextExtentProvider = Arc<dyn TextExtentProvider + Send + Sync + 'static>;

/// Strategy the orchestrator settled on for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickStrategy {
    Interval(usize),
    Time,
    Scan(ScanAnchor),
}

/// Resolves the interval policy against what the host can measure.
#[must_use]
pub fn resolve_tick_strategy(
    interval: TickInterval,
    environment: RenderEnvironment,
    can_measure: bool,
) -> TickStrategy {
    if let TickInterval::Step(step) = interval {
        return TickStrategy::Interval(step);
    }
    if environment == RenderEnvironment::Server {
        return TickStrategy::Interval(0);
    }

    let anchor = match interval {
        TickInterval::Time => return TickStrategy::Time,
        TickInterval::PreserveStartEnd => ScanAnchor::Both,
        TickInterval::PreserveStart => ScanAnchor::Start,
        TickInterval::PreserveEnd | TickInterval::Step(_) => ScanAnchor::End,
    };
    if !can_measure {
        debug!(
            ?interval,
            "no text measurer available, thinning ticks by interval instead"
        );
        return TickStrategy::Interval(0);
    }
    TickStrategy::Scan(anchor)
}

/// Picks the ticks that get a visible label on this pass.
///
/// Output labels are display-ready: time ticks carry their calendar label,
/// every other tick is formatted with its index in the output.
#[must_use]
pub fn get_visible_ticks(
    candidates: &[TickCandidate],
    config: &AxisConfig,
    measurer: Option<&dyn TextExtentProvider>,
    formatter: Option<&TickLabelFormatterFn>,
) -> Vec<VisibleTick> {
    if candidates.is_empty() || !config.show_labels {
        return Vec::new();
    }

    let strategy = resolve_tick_strategy(config.interval, config.environment, measurer.is_some());
    let selected = match (strategy, measurer) {
        (TickStrategy::Interval(step), _) => select_by_interval(candidates, step),
        (TickStrategy::Time, _) => select_time_ticks(candidates),
        (TickStrategy::Scan(anchor), Some(measurer)) => {
            let labels = TickLabelMeasure::new(measurer, config.label_font_size_px)
                .with_formatter(formatter);
            scan_ticks(candidates, config, anchor, &labels)
        }
        (TickStrategy::Scan(_), None) => select_by_interval(candidates, 0),
    };

    let visible: Vec<VisibleTick> = selected
        .into_iter()
        .enumerate()
        .map(|(position, tick)| into_visible_tick(position, tick, formatter))
        .collect();

    trace!(
        ?strategy,
        candidates = candidates.len(),
        visible = visible.len(),
        "selected visible axis ticks"
    );
    visible
}

fn into_visible_tick(
    position: usize,
    tick: SelectedTick,
    formatter: Option<&TickLabelFormatterFn>,
) -> VisibleTick {
    let SelectedTick {
        candidate,
        tick_coord,
        time_label,
        ..
    } = tick;
    let label = time_label
        .unwrap_or_else(|| format_tick_text(candidate.value, position, formatter));
    VisibleTick {
        value: candidate.value,
        label,
        coordinate: candidate.coordinate,
        tick_coord,
        tick_size: candidate.tick_size,
    }
}

/// Validated axis configuration plus the host's measurer and formatter.
#[derive(Clone)]
pub struct AxisTickSelector {
    config: AxisConfig,
    measurer: Option<SharedTextExtentProvider>,
    formatter: Option<TickLabelFormatterFn>,
}

impl std::fmt::Debug for AxisTickSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisTickSelector")
            .field("config", &self.config)
            .field("has_measurer", &self.measurer.is_some())
            .field("has_formatter", &self.formatter.is_some())
            .finish()
    }
}

impl AxisTickSelector {
    pub fn new(config: AxisConfig) -> AxisResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            measurer: None,
            formatter: None,
        })
    }

    #[must_use]
    pub fn with_measurer(mut self, measurer: SharedTextExtentProvider) -> Self {
        self.measurer = Some(measurer);
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: TickLabelFormatterFn) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    #[must_use]
    pub fn strategy(&self) -> TickStrategy {
        resolve_tick_strategy(
            self.config.interval,
            self.config.environment,
            self.measurer.is_some(),
        )
    }

    #[must_use]
    pub fn visible_ticks(&self, candidates: &[TickCandidate]) -> Vec<VisibleTick> {
        let measurer = self
            .measurer
            .as_deref()
            .map(|measurer| measurer as &dyn TextExtentProvider);
        get_visible_ticks(candidates, &self.config, measurer, self.formatter.as_ref())
    }

    #[must_use]
    pub fn snapshot(&self, candidates: &[TickCandidate]) -> VisibleTicksSnapshot {
        VisibleTicksSnapshot {
            orientation: self.config.orientation,
            interval: self.config.interval,
            ticks: self.visible_ticks(candidates),
        }
    }

    #[must_use]
    pub fn build_frame(&self, candidates: &[TickCandidate], style: &AxisRenderStyle) -> AxisFrame {
        if self.config.hide || !self.config.bounds.has_area() || candidates.is_empty() {
            return AxisFrame::default();
        }
        let ticks = self.visible_ticks(candidates);
        build_axis_frame(&ticks, &self.config, style)
    }

    pub fn render<R: Renderer>(
        &self,
        candidates: &[TickCandidate],
        style: &AxisRenderStyle,
        renderer: &mut R,
    ) -> AxisResult<()> {
        let frame = self.build_frame(candidates, style);
        renderer.render(&frame)
    }
}

/// Visible ticks for many independent axes, in input order.
#[must_use]
pub fn select_visible_ticks_batch(
    axes: &[(&AxisTickSelector, &[TickCandidate])],
) -> Vec<Vec<VisibleTick>> {
    #[cfg(feature = "parallel-axes")]
    {
        axes.par_iter()
            .map(|(selector, candidates)| selector.visible_ticks(candidates))
            .collect()
    }

    #[cfg(not(feature = "parallel-axes"))]
    {
        axes.iter()
            .map(|(selector, candidates)| selector.visible_ticks(candidates))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{TickStrategy, resolve_tick_strategy};
    use crate::api::collision_scanner::ScanAnchor;
    use crate::api::{RenderEnvironment, TickInterval};

    #[test]
    fn numeric_interval_wins_over_everything() {
        assert_eq!(
            resolve_tick_strategy(TickInterval::Step(3), RenderEnvironment::Server, false),
            TickStrategy::Interval(3)
        );
    }

    #[test]
    fn server_environment_thins_by_step_zero() {
        assert_eq!(
            resolve_tick_strategy(TickInterval::Time, RenderEnvironment::Server, true),
            TickStrategy::Interval(0)
        );
        assert_eq!(
            resolve_tick_strategy(
                TickInterval::PreserveStartEnd,
                RenderEnvironment::Server,
                true
            ),
            TickStrategy::Interval(0)
        );
    }

    #[test]
    fn time_policy_needs_no_measurer() {
        assert_eq!(
            resolve_tick_strategy(TickInterval::Time, RenderEnvironment::Interactive, false),
            TickStrategy::Time
        );
    }

    #[test]
    fn scan_policies_map_to_anchors() {
        let env = RenderEnvironment::Interactive;
        assert_eq!(
            resolve_tick_strategy(TickInterval::PreserveStart, env, true),
            TickStrategy::Scan(ScanAnchor::Start)
        );
        assert_eq!(
            resolve_tick_strategy(TickInterval::PreserveEnd, env, true),
            TickStrategy::Scan(ScanAnchor::End)
        );
        assert_eq!(
            resolve_tick_strategy(TickInterval::PreserveStartEnd, env, true),
            TickStrategy::Scan(ScanAnchor::Both)
        );
        assert_eq!(
            resolve_tick_strategy(TickInterval::PreserveEnd, env, false),
            TickStrategy::Interval(0)
        );
    }
}
