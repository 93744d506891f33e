/// Accumulates frame deltas and reports when a refresh threshold is crossed.
#[derive(Clone, Debug, Default)]
pub struct TickClock {
    accumulated_ms: f64,
    last_ms: Option<f64>,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a frame timestamp. Returns true when more than `threshold_ms` has
    /// built up since the last tick; the accumulator then restarts from zero.
    /// The first frame after a reset only records the timestamp.
    pub fn advance(&mut self, now_ms: f64, threshold_ms: f64) -> bool {
        let delta = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);
        self.accumulated_ms += delta;
        if self.accumulated_ms > threshold_ms {
            self.accumulated_ms = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
