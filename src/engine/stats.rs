use std::time::Duration;

use super::clear::ClearKind;

/// Per-player session statistics.
#[derive(Debug, Clone)]
pub struct Stats {
    pub pieces_placed: u32,
    pub inputs: u32,
    pub time: Duration,
    pub attack_sent: u32,
    pub garbage_received: u32,
    pub garbage_cleared: u32,

    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub quads: u32,
    pub tspins: u32,
    pub mini_tspins: u32,
    pub all_spins: u32,

    pub max_combo: u32,
    pub max_b2b: u32,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            pieces_placed: 0,
            inputs: 0,
            time: Duration::ZERO,
            attack_sent: 0,
            garbage_received: 0,
            garbage_cleared: 0,
            singles: 0,
            doubles: 0,
            triples: 0,
            quads: 0,
            tspins: 0,
            mini_tspins: 0,
            all_spins: 0,
            max_combo: 0,
            max_b2b: 0,
        }
    }

    pub fn record_clear(&mut self, kind: &ClearKind) {
        match kind {
            ClearKind::Single => self.singles += 1,
            ClearKind::Double => self.doubles += 1,
            ClearKind::Triple => self.triples += 1,
            ClearKind::Quad => self.quads += 1,
            ClearKind::TSpin
            | ClearKind::TSpinSingle
            | ClearKind::TSpinDouble
            | ClearKind::TSpinTriple => self.tspins += 1,
            ClearKind::MiniTSpin | ClearKind::MiniTSpinSingle | ClearKind::MiniTSpinDouble => {
                self.mini_tspins += 1
            }
            ClearKind::AllMini(_) => self.all_spins += 1,
            ClearKind::None => {}
        }
    }

    /// Pieces per second.
    pub fn pps(&self) -> f64 {
        let secs = self.time.as_secs_f64();
        if secs > 0.0 {
            self.pieces_placed as f64 / secs
        } else {
            0.0
        }
    }

    /// Attack lines per minute.
    pub fn apm(&self) -> f64 {
        let mins = self.time.as_secs_f64() / 60.0;
        if mins > 0.0 {
            self.attack_sent as f64 / mins
        } else {
            0.0
        }
    }

    /// Format elapsed time as MM:SS.mmm
    pub fn format_time(&self) -> String {
        let total_ms = self.time.as_millis();
        let minutes = total_ms / 60_000;
        let seconds = (total_ms % 60_000) / 1000;
        let millis = total_ms % 1000;
        format!("{:02}:{:02}.{:03}", minutes, seconds, millis)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
