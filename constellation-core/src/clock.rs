/// Instantaneous frame-rate meter.
///
/// Timestamps are milliseconds, as handed out by the frame scheduler.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: f64,
    fps: f64,
}

impl FrameClock {
    /// Seed the reference timestamp so the first tick has a prior frame.
    pub fn new(origin_ms: f64) -> Self {
        Self {
            last: origin_ms,
            fps: 0.0,
        }
    }

    /// Record a frame at `now_ms` and return `1000 / elapsed`.
    ///
    /// A non-increasing timestamp keeps the previous reading instead of
    /// dividing by zero.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let elapsed = now_ms - self.last;
        if elapsed > 0.0 {
            self.fps = 1000.0 / elapsed;
        }
        self.last = now_ms;
        self.fps
    }

    /// Last value returned by [`FrameClock::tick`]
    pub fn fps(&self) -> f64 {
        self.fps
    }
}
