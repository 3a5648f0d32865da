use std::time::Duration;

/// Auto-shift phase for one held direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DasPhase {
    Idle,
    /// Held, waiting for the initial delay to expire.
    Charging,
    /// Auto-repeating.
    Repeating,
}

/// DAS state for a single held key.
#[derive(Debug, Clone)]
pub struct DasState {
    pub pressed: bool,
    pub phase: DasPhase,
    timer: Duration,
}

impl DasState {
    pub fn new() -> Self {
        Self {
            pressed: false,
            phase: DasPhase::Idle,
            timer: Duration::ZERO,
        }
    }

    pub fn press(&mut self) {
        self.pressed = true;
        self.phase = DasPhase::Charging;
        self.timer = Duration::ZERO;
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.phase = DasPhase::Idle;
        self.timer = Duration::ZERO;
    }

    /// Advance by dt. Returns how many repeats to emit this frame; an ARR of
    /// zero means instant (capped at the board width so a wall stops it).
    pub fn tick(&mut self, dt: Duration, das_delay: Duration, arr_delay: Duration) -> u32 {
        if !self.pressed {
            return 0;
        }
        match self.phase {
            DasPhase::Idle => 0,
            DasPhase::Charging => {
                self.timer += dt;
                if self.timer < das_delay {
                    return 0;
                }
                self.phase = DasPhase::Repeating;
                let overshoot = self.timer - das_delay;
                self.timer = overshoot;
                if arr_delay.is_zero() {
                    20
                } else {
                    1 + (overshoot.as_nanos() / arr_delay.as_nanos()) as u32
                }
            }
            DasPhase::Repeating => {
                if arr_delay.is_zero() {
                    return 20;
                }
                self.timer += dt;
                let mut repeats = 0;
                while self.timer >= arr_delay {
                    self.timer -= arr_delay;
                    repeats += 1;
                }
                repeats
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Held-key auto-shift for one player: both horizontal directions plus soft
/// drop, with timings from the user config.
#[derive(Debug, Clone)]
pub struct DasHandler {
    pub left: DasState,
    pub right: DasState,
    pub soft_drop: DasState,
    pub das_delay: Duration,
    pub arr_delay: Duration,
    pub sd_arr_delay: Duration,
}

impl DasHandler {
    pub fn new(das_delay: Duration, arr_delay: Duration, sd_arr_delay: Duration) -> Self {
        Self {
            left: DasState::new(),
            right: DasState::new(),
            soft_drop: DasState::new(),
            das_delay,
            arr_delay,
            sd_arr_delay,
        }
    }

    /// Tick all held keys. Returns (left, right, soft drop) repeat counts.
    pub fn tick(&mut self, dt: Duration) -> (u32, u32, u32) {
        let left = self.left.tick(dt, self.das_delay, self.arr_delay);
        let right = self.right.tick(dt, self.das_delay, self.arr_delay);
        let soft = self.soft_drop.tick(dt, self.das_delay, self.sd_arr_delay);
        (left, right, soft)
    }

    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
        self.soft_drop.reset();
    }
}
