use super::clear::ClearKind;

/// Outgoing attack produced by one lock. `attack` is the combo- and
/// B2B-adjusted base; `release_waves` are the extra transfers fired when a
/// charged B2B chain breaks. Each entry is routed like a normal attack.
#[derive(Debug, Clone, Default)]
pub struct AttackPlan {
    pub attack: u32,
    pub release_waves: Vec<u32>,
}

impl AttackPlan {
    pub fn total(&self) -> u32 {
        self.attack + self.release_waves.iter().sum::<u32>()
    }
}

/// Classic point values, kept purely as a display counter. Attack lines are
/// the competitive output.
fn base_score(kind: &ClearKind) -> u64 {
    match kind {
        ClearKind::Single => 100,
        ClearKind::Double => 300,
        ClearKind::Triple => 500,
        ClearKind::Quad => 800,
        ClearKind::TSpin => 400,
        ClearKind::TSpinSingle => 800,
        ClearKind::TSpinDouble => 1200,
        ClearKind::TSpinTriple => 1600,
        ClearKind::MiniTSpin => 100,
        ClearKind::MiniTSpinSingle => 200,
        ClearKind::MiniTSpinDouble => 400,
        ClearKind::AllMini(n) => 100 * *n as u64,
        ClearKind::None => 0,
    }
}

/// Attack, combo and back-to-back state for one playfield.
#[derive(Debug, Clone)]
pub struct Scoring {
    pub score: u64,
    /// -1 = no active combo; 0 = one clearing lock so far.
    pub combo: i32,
    /// Count of consecutive B2B-eligible clears. Survives non-clearing locks;
    /// broken (and possibly released) by a plain clear.
    pub b2b_chain: u32,
    pub lines_cleared: u32,
}

impl Scoring {
    pub fn new() -> Self {
        Self {
            score: 0,
            combo: -1,
            b2b_chain: 0,
            lines_cleared: 0,
        }
    }

    /// Account one lock. Returns the attack to route to the opponent.
    pub fn process_lock(&mut self, kind: &ClearKind, cleared: u32) -> AttackPlan {
        let mut plan = AttackPlan::default();

        if cleared == 0 {
            // Non-clearing lock: combo breaks, the B2B chain survives.
            self.combo = -1;
            return plan;
        }

        plan.attack = kind.base_attack();

        if kind.is_b2b_eligible() {
            if self.b2b_chain > 0 {
                plan.attack += 1;
            }
            self.b2b_chain += 1;
        } else {
            if self.b2b_chain >= 4 {
                plan.release_waves = charge_release(self.b2b_chain);
            }
            self.b2b_chain = 0;
        }

        // Combo counts this clear before the bonus, so the first clear of a
        // run contributes nothing.
        self.combo += 1;
        let combo = self.combo.max(0) as f64;
        if plan.attack == 0 {
            plan.attack = (1.0 + 1.25 * combo).ln().floor() as u32;
        } else {
            plan.attack *= (1.0 + 0.25 * combo).floor() as u32;
        }

        self.lines_cleared += cleared;

        let mut score = base_score(kind);
        if self.combo > 0 {
            score += 50 * self.combo as u64;
        }
        if self.b2b_chain >= 2 {
            score = score * 3 / 2;
        }
        self.score += score;

        plan
    }

    pub fn add_soft_drop(&mut self, cells: u32) {
        self.score += cells as u64;
    }

    pub fn add_hard_drop(&mut self, cells: u32) {
        self.score += cells as u64 * 2;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Waves released when a chain of `b2b_chain` eligible clears is broken:
/// three transfers of chain/3 lines, the first chain%3 of them one larger.
fn charge_release(b2b_chain: u32) -> Vec<u32> {
    let size = b2b_chain / 3;
    let bumped = b2b_chain % 3;
    (0..3)
        .map(|i| if i < bumped { size + 1 } else { size })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clear::SpinKind;

    fn quad() -> ClearKind {
        ClearKind::classify(4, SpinKind::None)
    }

    fn single() -> ClearKind {
        ClearKind::classify(1, SpinKind::None)
    }

    #[test]
    fn test_first_tspin_double() {
        let mut scoring = Scoring::new();
        let plan = scoring.process_lock(&ClearKind::TSpinDouble, 2);
        assert_eq!(plan.attack, 4);
        assert!(plan.release_waves.is_empty());
        assert_eq!(scoring.b2b_chain, 1);
    }

    #[test]
    fn test_b2b_bump_on_second_eligible() {
        let mut scoring = Scoring::new();
        scoring.process_lock(&quad(), 4);
        // Stack a piece without clearing between quads: chain survives, combo
        // breaks.
        scoring.process_lock(&ClearKind::None, 0);
        let plan = scoring.process_lock(&quad(), 4);
        assert_eq!(plan.attack, 5);
        assert_eq!(scoring.b2b_chain, 2);
    }

    #[test]
    fn test_chain_of_three_releases_nothing() {
        let mut scoring = Scoring::new();
        for _ in 0..3 {
            scoring.process_lock(&quad(), 4);
            scoring.process_lock(&ClearKind::None, 0);
        }
        assert_eq!(scoring.b2b_chain, 3);

        let plan = scoring.process_lock(&single(), 1);
        assert!(plan.release_waves.is_empty());
        assert_eq!(plan.attack, 0);
        assert_eq!(scoring.b2b_chain, 0);
    }

    #[test]
    fn test_chain_of_four_releases_bumped_waves() {
        let mut scoring = Scoring::new();
        for _ in 0..4 {
            scoring.process_lock(&quad(), 4);
            scoring.process_lock(&ClearKind::None, 0);
        }
        assert_eq!(scoring.b2b_chain, 4);

        let plan = scoring.process_lock(&single(), 1);
        assert_eq!(plan.release_waves, vec![2, 1, 1]);
        assert_eq!(scoring.b2b_chain, 0);
    }

    #[test]
    fn test_combo_log_bonus_for_zero_base() {
        let mut scoring = Scoring::new();
        // Consecutive singles: combo 0, 1, 2, ...
        assert_eq!(scoring.process_lock(&single(), 1).attack, 0); // ln(1.0)
        assert_eq!(scoring.process_lock(&single(), 1).attack, 0); // ln(2.25)
        assert_eq!(scoring.process_lock(&single(), 1).attack, 1); // ln(3.5)
        assert_eq!(scoring.combo, 2);
    }

    #[test]
    fn test_combo_multiplier_for_positive_base() {
        let mut scoring = Scoring::new();
        for _ in 0..4 {
            scoring.process_lock(&ClearKind::Double, 2);
        }
        // Fifth consecutive clear: combo = 4, multiplier floor(2.0) = 2.
        let plan = scoring.process_lock(&ClearKind::Double, 2);
        assert_eq!(plan.attack, 2);
    }

    #[test]
    fn test_combo_resets_on_empty_lock() {
        let mut scoring = Scoring::new();
        scoring.process_lock(&single(), 1);
        assert_eq!(scoring.combo, 0);
        scoring.process_lock(&ClearKind::None, 0);
        assert_eq!(scoring.combo, -1);
    }

    #[test]
    fn test_lines_accumulate() {
        let mut scoring = Scoring::new();
        scoring.process_lock(&quad(), 4);
        scoring.process_lock(&single(), 1);
        assert_eq!(scoring.lines_cleared, 5);
    }
}
