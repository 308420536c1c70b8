//! Fixed-rate frame pacing
//!
//! Deadlines advance by exactly one period. An overrun restarts the schedule
//! from the current instant instead of bursting to catch up.
//!
//! `FramePacer` blocks the native loop; `TickGate` applies the same schedule
//! to callbacks that cannot block, such as `requestAnimationFrame`.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

/// Early-arrival slack for frame timestamps (ms)
const GATE_TOLERANCE_MS: f64 = 0.5;

/// Decides which display frames run a tick
///
/// Timestamps are milliseconds, as passed to animation-frame callbacks.
#[derive(Debug, Clone)]
pub struct TickGate {
    period_ms: f64,
    next_due: Option<f64>,
}

impl TickGate {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            period_ms: 1000.0 / rate_hz.max(1) as f64,
            next_due: None,
        }
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Whether a tick is due at `now_ms`, advancing the schedule if so
    pub fn ready(&mut self, now_ms: f64) -> bool {
        let Some(due) = self.next_due else {
            self.next_due = Some(now_ms + self.period_ms);
            return true;
        };
        if now_ms + GATE_TOLERANCE_MS < due {
            return false;
        }
        self.next_due = if now_ms - due > self.period_ms {
            // Overrun: no catch-up
            Some(now_ms + self.period_ms)
        } else {
            Some(due + self.period_ms)
        };
        true
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    next_deadline: Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl FramePacer {
    pub fn new(rate_hz: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / rate_hz.max(1) as f64);
        Self {
            period,
            next_deadline: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// How long to sleep at `now`, advancing the schedule
    pub fn advance(&mut self, now: Instant) -> Option<Duration> {
        if now < self.next_deadline {
            let sleep = self.next_deadline - now;
            self.next_deadline += self.period;
            Some(sleep)
        } else {
            // Overrun: no catch-up
            self.next_deadline = now + self.period;
            None
        }
    }

    /// Block until the next tick boundary
    pub fn wait(&mut self) {
        if let Some(sleep) = self.advance(Instant::now()) {
            std::thread::sleep(sleep);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ticks run during one second of frames at `display_hz`
    fn ticks_per_second(display_hz: f64) -> usize {
        let mut gate = TickGate::new(60);
        (0..)
            .map(|i| i as f64 * 1000.0 / display_hz)
            .take_while(|t| *t < 1000.0)
            .filter(|&t| gate.ready(t))
            .count()
    }

    #[test]
    fn test_gate_holds_60hz_on_common_displays() {
        for display_hz in [60.0, 75.0, 90.0, 120.0, 144.0, 165.0, 240.0] {
            assert_eq!(ticks_per_second(display_hz), 60, "{display_hz} Hz display");
        }
    }

    #[test]
    fn test_gate_on_slow_display_ticks_every_frame() {
        // 30 Hz frames cannot carry 60 ticks; no catch-up bursts
        assert_eq!(ticks_per_second(30.0), 30);
    }

    #[test]
    fn test_gate_restarts_after_overrun() {
        let mut gate = TickGate::new(60);
        assert!(gate.ready(1000.0));
        assert!(!gate.ready(1010.0));
        // Stalled for 100 ms: one tick, then a fresh period
        assert!(gate.ready(1110.0));
        assert!(!gate.ready(1120.0));
        assert!(gate.ready(1110.0 + gate.period_ms()));
    }

    #[test]
    fn test_period_from_rate() {
        let pacer = FramePacer::new(60);
        let expected = 1.0 / 60.0;
        assert!((pacer.period().as_secs_f64() - expected).abs() < 1e-9);
        // Zero rate is treated as 1 Hz
        assert_eq!(FramePacer::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn test_deadlines_advance_by_period() {
        let mut pacer = FramePacer::new(100);
        let start = pacer.next_deadline - pacer.period();

        let sleep = pacer.advance(start).unwrap();
        assert_eq!(sleep, pacer.period());
        // Halfway to the second deadline
        let sleep = pacer.advance(start + pacer.period() + pacer.period() / 2).unwrap();
        assert_eq!(sleep, pacer.period() / 2);
    }

    #[test]
    fn test_overrun_does_not_catch_up() {
        let mut pacer = FramePacer::new(100);
        let late = pacer.next_deadline + pacer.period() * 5;
        assert!(pacer.advance(late).is_none());
        // Next tick is a full period after the late one, not a burst
        let sleep = pacer.advance(late).unwrap();
        assert_eq!(sleep, pacer.period());
    }

    #[test]
    fn test_wait_blocks_roughly_one_period() {
        let mut pacer = FramePacer::new(200);
        let start = Instant::now();
        for _ in 0..4 {
            pacer.wait();
        }
        // Four 5ms periods; allow scheduler slack on the low side only
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
