pub mod bag;
pub mod board;
pub mod clear;
pub mod garbage;
pub mod gravity;
pub mod hold;
pub mod locking;
pub mod movement;
pub mod piece;
pub mod playfield;
pub mod scoring;
pub mod srs;
pub mod stats;
pub mod versus;

use self::clear::{ClearKind, SpinKind};

/// Control operations an external driver may submit to a playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Rotate180,
    Hold,
}

/// What came out of one playfield step: whether a piece locked, what it
/// cleared, and the attack transfers to route.
#[derive(Debug, Clone)]
pub struct LockReport {
    pub locked: bool,
    pub cleared: u32,
    pub spin: SpinKind,
    pub clear_kind: ClearKind,
    /// Attack transfers for the garbage router, base attack first, then any
    /// B2B charge release waves. Zero entries are already filtered out.
    pub outgoing: Vec<u32>,
    pub game_over: bool,
}

impl LockReport {
    pub fn none() -> Self {
        Self {
            locked: false,
            cleared: 0,
            spin: SpinKind::None,
            clear_kind: ClearKind::None,
            outgoing: Vec::new(),
            game_over: false,
        }
    }
}

/// Renderer-facing events accumulated by a playfield and drained once per
/// frame by the driver.
#[derive(Debug, Clone)]
pub enum PlayfieldEvent {
    PieceLocked,
    LinesCleared(Vec<usize>),
    HardDrop { cells: u32 },
    Spin(SpinKind),
    Combo(u32),
    BackToBack(u32),
    GarbageReceived(u32),
    GameOver,
}
