use std::time::{Duration, Instant};

const FALLBACK_MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Timing knobs after zero values have been replaced with usable ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TickTiming {
    pub(crate) target_tps: u32,
    pub(crate) fixed_dt: Duration,
    pub(crate) max_frame_delta: Duration,
    pub(crate) max_ticks_per_frame: u32,
}

impl TickTiming {
    pub(crate) fn new(target_tps: u32, max_frame_delta: Duration, max_ticks_per_frame: u32) -> Self {
        let target_tps = target_tps.max(1);
        Self {
            target_tps,
            fixed_dt: Duration::from_secs_f64(1.0 / f64::from(target_tps)),
            max_frame_delta: non_zero_or(max_frame_delta, FALLBACK_MAX_FRAME_DELTA),
            max_ticks_per_frame: max_ticks_per_frame.max(1),
        }
    }
}

/// What one rendered frame is allowed to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameBudget {
    /// Wall time since the previous frame, before clamping.
    pub(crate) frame_dt: Duration,
    pub(crate) ticks: u32,
    pub(crate) dropped_backlog: Duration,
}

/// Fixed-timestep accumulator. Wall time goes in, whole ticks come out.
#[derive(Debug)]
pub(crate) struct TickClock {
    timing: TickTiming,
    accumulator: Duration,
    last_frame: Instant,
}

impl TickClock {
    pub(crate) fn new(timing: TickTiming, now: Instant) -> Self {
        Self {
            timing,
            accumulator: Duration::ZERO,
            last_frame: now,
        }
    }

    pub(crate) fn advance(&mut self, now: Instant) -> FrameBudget {
        let frame_dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.accumulator = self
            .accumulator
            .saturating_add(frame_dt.min(self.timing.max_frame_delta));

        let mut ticks = 0u32;
        while self.accumulator >= self.timing.fixed_dt && ticks < self.timing.max_ticks_per_frame {
            self.accumulator -= self.timing.fixed_dt;
            ticks += 1;
        }

        // A full tick still pending here means the cap was hit.
        let dropped_backlog = if self.accumulator >= self.timing.fixed_dt {
            std::mem::take(&mut self.accumulator)
        } else {
            Duration::ZERO
        };

        FrameBudget {
            frame_dt,
            ticks,
            dropped_backlog,
        }
    }
}

/// Render cap: how long to wait before presenting the next frame.
#[derive(Debug)]
pub(crate) struct FramePacer {
    max_fps: Option<u32>,
    frame_target: Option<Duration>,
    last_present: Instant,
}

impl FramePacer {
    /// `None` or `Some(0)` disables the cap.
    pub(crate) fn new(max_fps: Option<u32>, now: Instant) -> Self {
        let max_fps = max_fps.filter(|fps| *fps > 0);
        Self {
            max_fps,
            frame_target: max_fps.map(|fps| Duration::from_secs_f64(1.0 / f64::from(fps))),
            last_present: now,
        }
    }

    pub(crate) fn describe_cap(&self) -> String {
        match self.max_fps {
            Some(fps) => fps.to_string(),
            None => "off".to_string(),
        }
    }

    pub(crate) fn wait_before_present(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_present);
        match self.frame_target {
            Some(target) if elapsed < target => target - elapsed,
            _ => Duration::ZERO,
        }
    }

    pub(crate) fn mark_presented(&mut self, now: Instant) {
        self.last_present = now;
    }
}

fn non_zero_or(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}
