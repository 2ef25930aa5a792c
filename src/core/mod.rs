pub mod bar_projection;
pub mod geometry;
pub mod series;
pub mod types;

pub use bar_projection::{BAR_TOP_BUFFER_PX, BarFrame, MIN_BAR_HEIGHT_PX, project_bar_frames};
pub use geometry::{
    BAR_SPACING_PX, BarLayout, DEFAULT_BAR_WIDTH_PX, bar_pitch, content_width, index_for_offset,
    offset_for_index,
};
pub use series::DataSeries;
pub use types::Viewport;
