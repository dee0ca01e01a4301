//! Windowed fixed-timestep runtime for a single 2D scene: key input mapping,
//! a tick driver, and a software renderer that rasterizes a per-frame draw
//! list.

pub mod app;

pub use app::{
    glyph_advance, line_height, run_app, text_width_px, AppError, DrawCommand, DrawList,
    InputAction, InputSnapshot, LoopConfig, LoopMetricsSnapshot, PixelRect, Renderer, Rgba, Scene,
    SceneCommand, MOVEMENT_ACTIONS,
};
