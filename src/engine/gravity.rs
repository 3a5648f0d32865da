use std::time::Duration;

const FRAMES_PER_SECOND: f64 = 60.0;

/// Gravity configuration: rows per virtual frame, constant until
/// `ramp_delay_frames` have elapsed, then stepped up once per second.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GravityTuning {
    pub initial_gravity: f64,
    pub ramp_delay_frames: f64,
    pub gravity_increment: f64,
}

impl Default for GravityTuning {
    fn default() -> Self {
        Self {
            initial_gravity: 0.02,
            ramp_delay_frames: 7200.0,
            gravity_increment: 0.0035,
        }
    }
}

/// Time-driven source of downward motion, shared by every playfield of a
/// match. The driver feeds real elapsed time; internally everything is
/// counted in virtual 60 Hz frames so pacing is display-rate independent.
#[derive(Debug, Clone)]
pub struct GravityClock {
    tuning: GravityTuning,
    total_frames: f64,
    accumulator: f64,
}

impl GravityClock {
    pub fn new(tuning: GravityTuning) -> Self {
        Self {
            tuning,
            total_frames: 0.0,
            accumulator: 0.0,
        }
    }

    /// Advance by `dt` of real time. Returns the whole rows of gravity owed;
    /// the fractional remainder stays banked.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let frames = dt.as_secs_f64() * FRAMES_PER_SECOND;
        self.total_frames += frames;
        self.accumulator += self.current_gravity() * frames;
        if self.accumulator >= 1.0 {
            let rows = self.accumulator as u32;
            self.accumulator -= rows as f64;
            rows
        } else {
            0
        }
    }

    /// Rows per frame at the current ramp position.
    pub fn current_gravity(&self) -> f64 {
        let t = &self.tuning;
        if self.total_frames < t.ramp_delay_frames {
            return t.initial_gravity;
        }
        let seconds_after_delay = (self.total_frames - t.ramp_delay_frames) / FRAMES_PER_SECOND;
        t.initial_gravity + seconds_after_delay.floor() * t.gravity_increment
    }

    pub fn reset(&mut self) {
        self.total_frames = 0.0;
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: f64) -> Duration {
        Duration::from_secs_f64(n / FRAMES_PER_SECOND)
    }

    #[test]
    fn test_initial_gravity_owes_a_row_after_50_frames() {
        let mut clock = GravityClock::new(GravityTuning::default());
        // 0.02 rows/frame: 49 frames bank 0.98 rows.
        assert_eq!(clock.tick(frames(49.0)), 0);
        assert_eq!(clock.tick(frames(2.0)), 1);
    }

    #[test]
    fn test_fraction_carries_over() {
        let mut clock = GravityClock::new(GravityTuning::default());
        assert_eq!(clock.tick(frames(75.0)), 1); // 1.5 banked, 0.5 carried
        assert_eq!(clock.tick(frames(26.0)), 1); // 0.5 + 0.52
    }

    #[test]
    fn test_ramp_increases_gravity() {
        let tuning = GravityTuning {
            initial_gravity: 0.02,
            ramp_delay_frames: 120.0,
            gravity_increment: 0.01,
        };
        let mut clock = GravityClock::new(tuning);
        assert_eq!(clock.current_gravity(), 0.02);
        clock.tick(frames(120.0));
        // At the ramp boundary the increment has not stepped yet.
        assert_eq!(clock.current_gravity(), 0.02);
        clock.tick(frames(60.0));
        assert!((clock.current_gravity() - 0.03).abs() < 1e-9);
        clock.tick(frames(120.0));
        assert!((clock.current_gravity() - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut clock = GravityClock::new(GravityTuning::default());
        clock.tick(Duration::from_secs(200));
        clock.reset();
        assert_eq!(clock.current_gravity(), 0.02);
        assert_eq!(clock.tick(frames(49.0)), 0);
    }
}
