use rand::seq::SliceRandom;
use rand::Rng;

use super::piece::PieceKind;

/// 7-bag randomizer with a double bag for seamless lookahead.
///
/// Construction performs no RNG calls; the first draw shuffles both bags, so
/// the RNG call order is identical for a fresh generator and a reset one.
#[derive(Debug, Clone)]
pub struct BagGenerator {
    current: [PieceKind; 7],
    next: [PieceKind; 7],
    index: usize,
    primed: bool,
}

impl BagGenerator {
    pub fn new() -> Self {
        Self {
            current: PieceKind::ALL,
            next: PieceKind::ALL,
            index: 0,
            primed: false,
        }
    }

    /// Draw the next piece, rotating bags when the current one is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> PieceKind {
        if !self.primed {
            self.current.shuffle(rng);
            self.next.shuffle(rng);
            self.primed = true;
        }
        if self.index == 7 {
            self.current = self.next;
            self.next.shuffle(rng);
            self.index = 0;
        }
        let kind = self.current[self.index];
        self.index += 1;
        kind
    }

    /// Peek at the next `count` pieces (count <= 14).
    pub fn peek(&self, count: usize) -> Vec<PieceKind> {
        let count = count.min(14);
        let mut result = Vec::with_capacity(count);
        for i in 0..count {
            let pos = self.index + i;
            if pos < 7 {
                result.push(self.current[pos]);
            } else if pos < 14 {
                result.push(self.next[pos - 7]);
            }
        }
        result
    }
}
