use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{debug, info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder};

use super::input::KeyboardState;
use super::metrics::MetricsAccumulator;
use super::scene::SceneHost;
use super::tick_clock::{FramePacer, TickClock, TickTiming};
use super::{DrawList, Renderer, Scene, SceneCommand};

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_tps: u32,
    pub max_frame_delta: Duration,
    /// Upper bound on simulation ticks per rendered frame. Backlog beyond it
    /// is dropped, so a slow frame delays the simulation instead of bursting.
    pub max_ticks_per_frame: u32,
    pub metrics_log_interval: Duration,
    pub max_render_fps: Option<u32>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "2D Text Adventure RPG".to_string(),
            window_width: 800,
            window_height: 600,
            target_tps: 60,
            max_frame_delta: Duration::from_millis(250),
            max_ticks_per_frame: 1,
            metrics_log_interval: Duration::from_secs(1),
            max_render_fps: Some(60),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

/// Opens the window and drives `scene` until a quit signal or window close.
pub fn run_app(config: LoopConfig, scene: Box<dyn Scene>) -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(config.window_width),
                f64::from(config.window_height),
            ))
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let renderer = Renderer::new(
        Arc::clone(&window),
        config.window_width,
        config.window_height,
    )
    .map_err(AppError::CreateRenderer)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let mut driver = FrameDriver::new(&config, window, renderer, scene);
    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == driver.window.id() => {
                driver.on_window_event(event, window_target);
            }
            Event::AboutToWait => driver.window.request_redraw(),
            Event::LoopExiting => {
                driver.host.shutdown();
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

enum FrameOutcome {
    Continue,
    Exit,
}

/// Everything the event-loop closure owns between callbacks.
struct FrameDriver {
    window: Arc<Window>,
    renderer: Renderer,
    host: SceneHost,
    keyboard: KeyboardState,
    draw_list: DrawList,
    clock: TickClock,
    pacer: FramePacer,
    metrics: MetricsAccumulator,
}

impl FrameDriver {
    fn new(
        config: &LoopConfig,
        window: Arc<Window>,
        renderer: Renderer,
        scene: Box<dyn Scene>,
    ) -> Self {
        let timing = TickTiming::new(
            config.target_tps,
            config.max_frame_delta,
            config.max_ticks_per_frame,
        );
        let metrics_log_interval = if config.metrics_log_interval.is_zero() {
            Duration::from_secs(1)
        } else {
            config.metrics_log_interval
        };
        let now = Instant::now();
        let pacer = FramePacer::new(config.max_render_fps, now);

        let mut host = SceneHost::new(scene);
        host.load();
        info!(entity_count = host.entity_count(), "scene_loaded");
        info!(
            target_tps = timing.target_tps,
            max_frame_delta_ms = timing.max_frame_delta.as_millis() as u64,
            max_ticks_per_frame = timing.max_ticks_per_frame,
            metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
            render_fps_cap = %pacer.describe_cap(),
            window_width = config.window_width,
            window_height = config.window_height,
            "loop_config"
        );

        Self {
            window,
            renderer,
            host,
            keyboard: KeyboardState::default(),
            draw_list: DrawList::default(),
            clock: TickClock::new(timing, now),
            pacer,
            metrics: MetricsAccumulator::new(metrics_log_interval),
        }
    }

    fn on_window_event(&mut self, event: WindowEvent, window_target: &EventLoopWindowTarget<()>) {
        let outcome = match event {
            WindowEvent::CloseRequested => {
                self.keyboard.request_quit();
                info!(reason = "window_close", "shutdown_requested");
                FrameOutcome::Exit
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.window.inner_size();
                self.resize(size.width, size.height)
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.on_key(event.physical_key, event.state);
                FrameOutcome::Continue
            }
            WindowEvent::RedrawRequested => self.run_frame(),
            _ => FrameOutcome::Continue,
        };

        if let FrameOutcome::Exit = outcome {
            window_target.exit();
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> FrameOutcome {
        match self.renderer.resize(width, height) {
            Ok(()) => FrameOutcome::Continue,
            Err(error) => {
                warn!(error = %error, "renderer_resize_failed");
                FrameOutcome::Exit
            }
        }
    }

    fn run_frame(&mut self) -> FrameOutcome {
        let frame_start = Instant::now();
        let budget = self.clock.advance(frame_start);

        for _ in 0..budget.ticks {
            let command = self.host.update(&self.keyboard.snapshot());
            self.metrics.record_tick();
            if command == SceneCommand::Quit {
                info!(reason = "quit_signal", "shutdown_requested");
                return FrameOutcome::Exit;
            }
        }

        if budget.dropped_backlog > Duration::ZERO {
            self.metrics.record_clamp();
            debug!(
                dropped_backlog_ms = budget.dropped_backlog.as_millis() as u64,
                "sim_clamp_triggered"
            );
        }

        let wait = self.pacer.wait_before_present(Instant::now());
        if wait > Duration::ZERO {
            thread::sleep(wait);
        }

        self.host.render(&mut self.draw_list);
        if let Err(error) = self.renderer.render(&self.draw_list) {
            warn!(error = %error, "renderer_draw_failed");
            return FrameOutcome::Exit;
        }
        self.pacer.mark_presented(Instant::now());
        self.metrics.record_frame(budget.frame_dt);

        if let Some(snapshot) = self.metrics.maybe_snapshot(frame_start) {
            info!(
                fps = snapshot.fps,
                tps = snapshot.tps,
                frame_time_ms = snapshot.frame_time_ms,
                clamped_frames = snapshot.clamped_frames,
                entity_count = self.host.entity_count(),
                "loop_metrics"
            );
        }

        FrameOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_window_and_tick_rate() {
        let config = LoopConfig::default();
        assert_eq!(config.window_title, "2D Text Adventure RPG");
        assert_eq!((config.window_width, config.window_height), (800, 600));
        assert_eq!(config.target_tps, 60);
        assert_eq!(config.max_ticks_per_frame, 1);
        assert_eq!(config.max_render_fps, Some(60));
    }

    #[test]
    fn default_config_yields_one_tick_per_sixtieth_of_a_second() {
        let config = LoopConfig::default();
        let timing = TickTiming::new(
            config.target_tps,
            config.max_frame_delta,
            config.max_ticks_per_frame,
        );
        let base = Instant::now();
        let mut clock = TickClock::new(timing, base);

        let budget = clock.advance(base + Duration::from_millis(17));
        assert_eq!(budget.ticks, 1);
        assert_eq!(budget.dropped_backlog, Duration::ZERO);
    }
}
