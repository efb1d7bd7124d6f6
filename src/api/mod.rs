//! Tick selection strategies, their orchestrator and the axis scene they feed.

mod axis_config;
mod axis_scene_builder;
mod axis_tick_selector;
mod collision_scanner;
mod json_contract;
mod tick_geometry;
mod tick_interval_selector;
mod tick_label_text;
mod time_granularity_selector;

pub use axis_config::{AxisConfig, RenderEnvironment, TickInterval, TickLabelFormatterFn};
pub use axis_scene_builder::{AxisRenderStyle, build_axis_frame};
pub use axis_tick_selector::{
    AxisTickSelector, SharedTextExtentProvider, TickStrategy, get_visible_ticks,
    resolve_tick_strategy, select_visible_ticks_batch,
};
pub use collision_scanner::{ScanAnchor, scan_ticks};
pub use json_contract::{
    VISIBLE_TICKS_JSON_SCHEMA_V1, VisibleTicksJsonContractV1, VisibleTicksSnapshot,
};
pub use tick_geometry::{
    LabelAnchor, LabelTextAnchor, LabelVerticalAnchor, TickGeometry, TickLine, compute_axis_line,
    compute_tick_geometry, label_text_anchor, label_vertical_anchor,
};
pub use tick_interval_selector::select_by_interval;
pub use tick_label_text::{TickLabelMeasure, default_tick_text, format_tick_text};
pub use time_granularity_selector::{
    TimeGranularity, format_time_tick, resolve_time_granularity, select_time_ticks,
};
