mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;
mod tick_clock;

pub use input::{InputAction, MOVEMENT_ACTIONS};
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{
    glyph_advance, line_height, text_width_px, DrawCommand, DrawList, PixelRect, Renderer, Rgba,
};
pub use scene::{InputSnapshot, Scene, SceneCommand};
