use super::piece::PieceKind;

/// One-slot hold cache, usable once per piece lifecycle.
#[derive(Debug, Clone)]
pub struct HoldSlot {
    pub kind: Option<PieceKind>,
    pub used_this_piece: bool,
}

impl HoldSlot {
    pub fn new() -> Self {
        Self {
            kind: None,
            used_this_piece: false,
        }
    }

    pub fn available(&self) -> bool {
        !self.used_this_piece
    }

    /// Stash `current`, returning what was held before (None on first use).
    /// Fails if hold was already used for this piece.
    pub fn swap(&mut self, current: PieceKind) -> Result<Option<PieceKind>, ()> {
        if self.used_this_piece {
            return Err(());
        }
        self.used_this_piece = true;
        Ok(self.kind.replace(current))
    }

    /// Re-arm after a lock.
    pub fn unlock(&mut self) {
        self.used_this_piece = false;
    }

    pub fn reset(&mut self) {
        self.kind = None;
        self.used_this_piece = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_hold_returns_none() {
        let mut hold = HoldSlot::new();
        assert_eq!(hold.swap(PieceKind::T), Ok(None));
        assert_eq!(hold.kind, Some(PieceKind::T));
        assert!(!hold.available());
    }

    #[test]
    fn test_swap_after_unlock() {
        let mut hold = HoldSlot::new();
        hold.swap(PieceKind::T).unwrap();
        hold.unlock();
        assert_eq!(hold.swap(PieceKind::I), Ok(Some(PieceKind::T)));
        assert_eq!(hold.kind, Some(PieceKind::I));
    }

    #[test]
    fn test_double_hold_rejected() {
        let mut hold = HoldSlot::new();
        hold.swap(PieceKind::T).unwrap();
        assert!(hold.swap(PieceKind::I).is_err());
    }
}
