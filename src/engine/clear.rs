/// Spin classification of a lock, decided before the piece is written to the
/// grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinKind {
    None,
    TSpin,
    TSpinMini,
    /// Non-T piece locked while immobile in all four directions.
    AllMini,
}

/// What a lock amounted to, for scoring, stats and action text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearKind {
    None,
    Single,
    Double,
    Triple,
    Quad,
    TSpin,
    TSpinSingle,
    TSpinDouble,
    TSpinTriple,
    MiniTSpin,
    MiniTSpinSingle,
    MiniTSpinDouble,
    AllMini(u32),
}

impl ClearKind {
    pub fn classify(cleared: u32, spin: SpinKind) -> Self {
        match spin {
            SpinKind::TSpin => match cleared {
                0 => ClearKind::TSpin,
                1 => ClearKind::TSpinSingle,
                2 => ClearKind::TSpinDouble,
                _ => ClearKind::TSpinTriple,
            },
            SpinKind::TSpinMini => match cleared {
                0 => ClearKind::MiniTSpin,
                1 => ClearKind::MiniTSpinSingle,
                2 => ClearKind::MiniTSpinDouble,
                _ => ClearKind::Triple,
            },
            SpinKind::AllMini => {
                if cleared > 0 {
                    ClearKind::AllMini(cleared)
                } else {
                    ClearKind::None
                }
            }
            SpinKind::None => match cleared {
                0 => ClearKind::None,
                1 => ClearKind::Single,
                2 => ClearKind::Double,
                3 => ClearKind::Triple,
                _ => ClearKind::Quad,
            },
        }
    }

    pub fn lines(&self) -> u32 {
        match self {
            ClearKind::None | ClearKind::TSpin | ClearKind::MiniTSpin => 0,
            ClearKind::Single | ClearKind::TSpinSingle | ClearKind::MiniTSpinSingle => 1,
            ClearKind::Double | ClearKind::TSpinDouble | ClearKind::MiniTSpinDouble => 2,
            ClearKind::Triple | ClearKind::TSpinTriple => 3,
            ClearKind::Quad => 4,
            ClearKind::AllMini(n) => *n,
        }
    }

    /// Whether this lock continues (or starts) a back-to-back chain: any spin
    /// that clears at least one line, or a 4-line clear.
    pub fn is_b2b_eligible(&self) -> bool {
        matches!(
            self,
            ClearKind::Quad
                | ClearKind::TSpinSingle
                | ClearKind::TSpinDouble
                | ClearKind::TSpinTriple
                | ClearKind::MiniTSpinSingle
                | ClearKind::MiniTSpinDouble
                | ClearKind::AllMini(_)
        )
    }

    /// Base attack lines before B2B and combo adjustments.
    pub fn base_attack(&self) -> u32 {
        match self {
            ClearKind::TSpinSingle => 2,
            ClearKind::TSpinDouble => 4,
            ClearKind::TSpinTriple => 6,
            ClearKind::MiniTSpinSingle => 0,
            ClearKind::MiniTSpinDouble => 1,
            ClearKind::Double | ClearKind::AllMini(2) => 1,
            ClearKind::Triple | ClearKind::AllMini(3) => 2,
            ClearKind::Quad | ClearKind::AllMini(4) => 4,
            _ => 0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClearKind::None => "",
            ClearKind::Single => "SINGLE",
            ClearKind::Double => "DOUBLE",
            ClearKind::Triple => "TRIPLE",
            ClearKind::Quad => "QUAD",
            ClearKind::TSpin => "T-SPIN",
            ClearKind::TSpinSingle => "T-SPIN SINGLE",
            ClearKind::TSpinDouble => "T-SPIN DOUBLE",
            ClearKind::TSpinTriple => "T-SPIN TRIPLE",
            ClearKind::MiniTSpin => "MINI T-SPIN",
            ClearKind::MiniTSpinSingle => "MINI T-SPIN SINGLE",
            ClearKind::MiniTSpinDouble => "MINI T-SPIN DOUBLE",
            ClearKind::AllMini(n) => match n {
                1 => "MINI SPIN SINGLE",
                2 => "MINI SPIN DOUBLE",
                3 => "MINI SPIN TRIPLE",
                _ => "MINI SPIN",
            },
        }
    }
}

impl std::fmt::Display for ClearKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_clears() {
        assert_eq!(ClearKind::classify(1, SpinKind::None), ClearKind::Single);
        assert_eq!(ClearKind::classify(4, SpinKind::None), ClearKind::Quad);
        assert!(!ClearKind::Single.is_b2b_eligible());
        assert!(ClearKind::Quad.is_b2b_eligible());
    }

    #[test]
    fn test_classify_tspins() {
        let td = ClearKind::classify(2, SpinKind::TSpin);
        assert_eq!(td, ClearKind::TSpinDouble);
        assert_eq!(td.base_attack(), 4);
        assert!(td.is_b2b_eligible());

        let zero = ClearKind::classify(0, SpinKind::TSpin);
        assert_eq!(zero, ClearKind::TSpin);
        assert!(!zero.is_b2b_eligible());
    }

    #[test]
    fn test_mini_attack_row() {
        assert_eq!(ClearKind::MiniTSpinSingle.base_attack(), 0);
        assert_eq!(ClearKind::MiniTSpinDouble.base_attack(), 1);
    }

    #[test]
    fn test_all_mini_matches_plain_attack_but_eligible() {
        for n in 1..=4 {
            assert_eq!(
                ClearKind::AllMini(n).base_attack(),
                ClearKind::classify(n, SpinKind::None).base_attack()
            );
            assert!(ClearKind::AllMini(n).is_b2b_eligible());
        }
    }
}
