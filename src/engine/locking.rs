use std::time::Duration;

/// Grace period a resting piece spends on the floor before it fixes.
const DELAY_DURATION: Duration = Duration::from_millis(500);
/// Movement/rotation resets allowed per piece.
const MAX_RESETS: u32 = 15;

/// Per-playfield lock delay. Started when the piece lands, reset (up to the
/// cap) by movement while resting, cancelled by lock/hold, refilled on spawn.
#[derive(Debug, Clone)]
pub struct LockDelayTimer {
    elapsed: Duration,
    resets_left: u32,
    active: bool,
}

impl LockDelayTimer {
    pub fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
            resets_left: MAX_RESETS,
            active: false,
        }
    }

    /// Activate the timer if it is not already running.
    pub fn start(&mut self) {
        if !self.active && self.resets_left > 0 {
            self.active = true;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Consume one reset, zeroing the elapsed time. Silently ignored once the
    /// cap is spent; the timer then runs out undisturbed.
    pub fn reset(&mut self) {
        if self.active && self.resets_left > 0 {
            self.resets_left -= 1;
            self.elapsed = Duration::ZERO;
        }
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.elapsed = Duration::ZERO;
    }

    /// Advance the timer. Returns true when the delay ran out, deactivating
    /// the timer; the caller decides whether the piece actually locks.
    pub fn update(&mut self, dt: Duration) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= DELAY_DURATION {
            self.cancel();
            true
        } else {
            false
        }
    }

    /// Refill the reset budget (on spawn, hold, or playfield reset).
    pub fn reset_counter(&mut self) {
        self.resets_left = MAX_RESETS;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn resets_left(&self) -> u32 {
        self.resets_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_once() {
        let mut timer = LockDelayTimer::new();
        assert!(!timer.is_active());
        timer.start();
        assert!(timer.is_active());
        timer.update(Duration::from_millis(300));
        // A second start must not rewind the elapsed time.
        timer.start();
        assert!(timer.update(Duration::from_millis(250)));
    }

    #[test]
    fn test_expires_after_delay() {
        let mut timer = LockDelayTimer::new();
        timer.start();
        assert!(!timer.update(Duration::from_millis(499)));
        assert!(timer.update(Duration::from_millis(1)));
        assert!(!timer.is_active());
    }

    #[test]
    fn test_reset_rewinds_elapsed() {
        let mut timer = LockDelayTimer::new();
        timer.start();
        timer.update(Duration::from_millis(400));
        timer.reset();
        assert!(!timer.update(Duration::from_millis(400)));
        assert!(timer.update(Duration::from_millis(100)));
    }

    #[test]
    fn test_reset_cap() {
        let mut timer = LockDelayTimer::new();
        timer.start();
        for _ in 0..MAX_RESETS {
            timer.update(Duration::from_millis(100));
            timer.reset();
        }
        assert_eq!(timer.resets_left(), 0);
        // The 16th reset is ignored: elapsed keeps running to expiry.
        timer.update(Duration::from_millis(400));
        timer.reset();
        assert!(timer.update(Duration::from_millis(100)));
    }

    #[test]
    fn test_cancel_and_refill() {
        let mut timer = LockDelayTimer::new();
        timer.start();
        timer.reset();
        timer.cancel();
        assert!(!timer.update(Duration::from_secs(1)));
        timer.reset_counter();
        assert_eq!(timer.resets_left(), MAX_RESETS);
    }
}
