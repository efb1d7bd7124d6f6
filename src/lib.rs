//! cartesian-axis: tick selection and label collision avoidance for chart axes.
//!
//! Given the candidate ticks a scale produced for one axis, this crate decides
//! which of them get a visible label, nudges boundary labels back inside the
//! axis span, samples time axes by day, week or month, and turns the result
//! into backend-neutral draw primitives. Every pass is a pure function of its
//! inputs.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AxisConfig, AxisTickSelector, TickInterval, get_visible_ticks};
pub use error::{AxisError, AxisResult};
