pub mod text_extent;
pub mod types;

pub use text_extent::{HeuristicTextExtent, TextExtentProvider};
pub use types::{
    AxisOrientation, AxisRect, ExtentDimension, SelectedTick, TextExtent, TickCandidate,
    VisibleTick,
};
