/// Window used by the gradient controller between classifications.
pub const DEFAULT_THROTTLE_MS: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Window is open: run now.
    RunNow,
    /// First suppressed call in the window; arm a timer for the trailing run.
    ScheduleTrailing { delay_ms: f64 },
    /// Folded into the already armed trailing run (or dropped when trailing
    /// runs are disabled).
    Coalesced,
}

/// Leading-edge rate limiter driven by an external clock.
///
/// The first call of a burst runs immediately. Calls inside the following
/// window are collapsed; when `trailing` is set, one extra run is owed at the
/// end of the window so the last position of a burst is not lost.
///
/// Holds no timers itself. The caller owns the timer and reports back through
/// [`Throttle::fire_trailing`].
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    trailing: bool,
    last_run_ms: Option<f64>,
    trailing_pending: bool,
}

impl Throttle {
    pub fn new(interval_ms: f64, trailing: bool) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            trailing,
            last_run_ms: None,
            trailing_pending: false,
        }
    }

    pub fn is_trailing_pending(&self) -> bool {
        self.trailing_pending
    }

    pub fn signal(&mut self, now_ms: f64) -> ThrottleDecision {
        if let Some(last) = self.last_run_ms {
            let elapsed = now_ms - last;
            if elapsed < self.interval_ms {
                if !self.trailing || self.trailing_pending {
                    return ThrottleDecision::Coalesced;
                }
                self.trailing_pending = true;
                return ThrottleDecision::ScheduleTrailing {
                    delay_ms: self.interval_ms - elapsed,
                };
            }
        }

        // A late trailing timer is superseded by this leading run.
        self.trailing_pending = false;
        self.last_run_ms = Some(now_ms);
        ThrottleDecision::RunNow
    }

    /// Called when the trailing timer elapses. Returns whether a run is owed.
    pub fn fire_trailing(&mut self, now_ms: f64) -> bool {
        if !self.trailing_pending {
            return false;
        }
        self.trailing_pending = false;
        self.last_run_ms = Some(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.last_run_ms = None;
        self.trailing_pending = false;
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_MS, true)
    }
}
