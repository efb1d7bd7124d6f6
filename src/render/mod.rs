mod frame;
mod null_renderer;
mod primitives;

pub use frame::AxisFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AxisLineKind, Color, LinePrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::AxisResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `AxisFrame`; tick selection and
/// geometry are settled before drawing starts.
pub trait Renderer {
    fn render(&mut self, frame: &AxisFrame) -> AxisResult<()>;
}
