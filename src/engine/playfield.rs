use std::time::Duration;

use rand::Rng;

use super::bag::BagGenerator;
use super::board::{Board, Cell, BOARD_WIDTH, VISIBLE_HEIGHT};
use super::clear::{ClearKind, SpinKind};
use super::garbage::{GarbageQueue, MAX_RISE_PER_LOCK};
use super::hold::HoldSlot;
use super::locking::LockDelayTimer;
use super::movement;
use super::piece::{Piece, PieceKind, Rotation};
use super::scoring::Scoring;
use super::stats::Stats;
use super::{LockReport, PlayerAction, PlayfieldEvent};

/// One player's board state machine: grid, active piece, bag, hold, lock
/// delay, garbage reception and scoring.
///
/// Randomness (bag shuffles, garbage hole columns) is drawn from the match's
/// shared PRNG, passed in by the caller, so call order fully determines the
/// outcome.
#[derive(Debug, Clone)]
pub struct Playfield {
    pub board: Board,
    pub active: Option<Piece>,
    pub bag: BagGenerator,
    pub hold: HoldSlot,
    pub lock_delay: LockDelayTimer,
    pub scoring: Scoring,
    pub garbage: GarbageQueue,
    pub stats: Stats,
    pub game_over: bool,
    pub last_clear_kind: Option<ClearKind>,

    last_move_was_rotation: bool,
    events: Vec<PlayfieldEvent>,
}

impl Playfield {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: None,
            bag: BagGenerator::new(),
            hold: HoldSlot::new(),
            lock_delay: LockDelayTimer::new(),
            scoring: Scoring::new(),
            garbage: GarbageQueue::new(),
            stats: Stats::new(),
            game_over: false,
            last_clear_kind: None,
            last_move_was_rotation: false,
            events: Vec::new(),
        }
    }

    /// Wipe everything and spawn the first piece.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.board = Board::new();
        self.active = None;
        self.bag = BagGenerator::new();
        self.hold.reset();
        self.lock_delay = LockDelayTimer::new();
        self.scoring.reset();
        self.garbage.clear();
        self.stats.reset();
        self.game_over = false;
        self.last_clear_kind = None;
        self.last_move_was_rotation = false;
        self.events.clear();
        self.spawn_next(rng);
    }

    /// Install a piece at its spawn anchor. A blocked spawn latches game
    /// over and leaves the playfield without an active piece.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::spawn(kind);
        if !self.board.piece_fits(&piece) {
            self.game_over = true;
            self.events.push(PlayfieldEvent::GameOver);
            return false;
        }
        self.active = Some(piece);
        self.last_move_was_rotation = false;
        self.lock_delay.cancel();
        self.lock_delay.reset_counter();
        true
    }

    fn spawn_next<R: Rng>(&mut self, rng: &mut R) -> bool {
        let kind = self.bag.draw(rng);
        self.spawn(kind)
    }

    /// Apply one driver action. Once game over, actions are no-ops.
    pub fn handle<R: Rng>(&mut self, action: PlayerAction, rng: &mut R) -> LockReport {
        if self.game_over {
            return LockReport::none();
        }
        self.stats.inputs += 1;
        match action {
            PlayerAction::MoveLeft => {
                self.control_left();
            }
            PlayerAction::MoveRight => {
                self.control_right();
            }
            PlayerAction::SoftDrop => {
                self.control_soft_drop();
            }
            PlayerAction::HardDrop => return self.control_hard_drop(rng),
            PlayerAction::RotateCw => {
                self.control_rotate_cw();
            }
            PlayerAction::RotateCcw => {
                self.control_rotate_ccw();
            }
            PlayerAction::Rotate180 => {
                self.control_rotate_180();
            }
            PlayerAction::Hold => self.control_hold(rng),
        }
        LockReport::none()
    }

    pub fn control_left(&mut self) -> bool {
        self.move_active(-1, 0)
    }

    pub fn control_right(&mut self) -> bool {
        self.move_active(1, 0)
    }

    /// Move down one row; on failure the lock-delay flow has been initiated.
    pub fn control_soft_drop(&mut self) -> bool {
        if self.move_active(0, -1) {
            self.scoring.add_soft_drop(1);
            true
        } else {
            false
        }
    }

    pub fn control_hard_drop<R: Rng>(&mut self, rng: &mut R) -> LockReport {
        self.lock_delay.cancel();
        let cells = match self.active.as_mut() {
            Some(piece) => movement::hard_drop(&self.board, piece),
            None => return LockReport::none(),
        };
        if cells > 0 {
            self.last_move_was_rotation = false;
        }
        self.scoring.add_hard_drop(cells);
        self.events.push(PlayfieldEvent::HardDrop { cells });
        self.lock_active(rng)
    }

    pub fn control_rotate_cw(&mut self) -> bool {
        self.rotate_active(|r| r.cw())
    }

    pub fn control_rotate_ccw(&mut self) -> bool {
        self.rotate_active(|r| r.ccw())
    }

    pub fn control_rotate_180(&mut self) -> bool {
        self.rotate_active(|r| r.flip())
    }

    /// Swap the active piece with the hold slot (or stash it and pull the
    /// next from the bag). Usable once per piece; a blocked swap-spawn is a
    /// game over.
    pub fn control_hold<R: Rng>(&mut self, rng: &mut R) {
        let kind = match &self.active {
            Some(piece) if self.hold.available() => piece.kind,
            _ => return,
        };
        match self.hold.swap(kind) {
            Ok(Some(held)) => {
                self.active = None;
                self.spawn(held);
            }
            Ok(None) => {
                self.active = None;
                self.spawn_next(rng);
            }
            Err(()) => {}
        }
    }

    fn move_active(&mut self, dx: i32, dy: i32) -> bool {
        let piece = match self.active.as_mut() {
            Some(p) => p,
            None => return false,
        };
        if !movement::try_shift(&self.board, piece, dx, dy) {
            if dy < 0 {
                // Resting on the stack: make sure the lock delay is running.
                self.lock_delay.start();
            }
            return false;
        }
        self.last_move_was_rotation = false;
        if dx != 0 && self.lock_delay.is_active() {
            self.lock_delay.reset();
        }
        if movement::is_grounded(&self.board, piece) {
            self.lock_delay.start();
        }
        true
    }

    fn rotate_active(&mut self, target_of: fn(Rotation) -> Rotation) -> bool {
        let piece = match self.active.as_mut() {
            Some(p) => p,
            None => return false,
        };
        if piece.kind == PieceKind::O {
            // O never changes layout; the rotation trivially succeeds.
            return true;
        }
        let target = target_of(piece.rotation);
        if movement::try_rotate(&self.board, piece, target).is_none() {
            return false;
        }
        self.last_move_was_rotation = true;
        if self.lock_delay.is_active() {
            self.lock_delay.reset();
        }
        if movement::is_grounded(&self.board, piece) {
            self.lock_delay.start();
        }
        true
    }

    /// Pull the active piece down by up to `rows` cells of gravity.
    pub fn apply_gravity(&mut self, rows: u32) {
        if self.game_over {
            return;
        }
        for _ in 0..rows {
            if !self.move_active(0, -1) {
                break;
            }
        }
    }

    /// Service the lock-delay timer. Locks the piece when the delay ran out
    /// and the piece still cannot move down.
    pub fn tick<R: Rng>(&mut self, dt: Duration, rng: &mut R) -> LockReport {
        if self.game_over {
            return LockReport::none();
        }
        self.stats.time += dt;
        if self.lock_delay.update(dt) {
            if let Some(piece) = &self.active {
                if movement::is_grounded(&self.board, piece) {
                    return self.lock_active(rng);
                }
            }
        }
        LockReport::none()
    }

    /// Accept garbage released by the router into the reception queue.
    pub fn queue_garbage(&mut self, lines: u32) {
        self.garbage.push(lines);
    }

    /// The lock pipeline: classify the spin against the pre-lock grid, write
    /// the piece, clear lines, raise queued garbage on a non-clearing lock,
    /// score the result and spawn the next piece.
    fn lock_active<R: Rng>(&mut self, rng: &mut R) -> LockReport {
        let piece = match self.active.take() {
            Some(p) => p,
            None => return LockReport::none(),
        };
        self.lock_delay.cancel();

        let spin = movement::classify_spin(&self.board, &piece, self.last_move_was_rotation);

        self.board.lock_piece(&piece);
        self.stats.pieces_placed += 1;
        self.events.push(PlayfieldEvent::PieceLocked);

        let full = self.board.full_lines();
        let cleared = full.len() as u32;
        self.stats.garbage_cleared += self.board.count_garbage_in_rows(&full) as u32;
        self.board.clear_lines(&full);

        if cleared == 0 {
            self.insert_pending_garbage(rng);
        }

        let clear_kind = ClearKind::classify(cleared, spin);
        let plan = self.scoring.process_lock(&clear_kind, cleared);
        self.stats.record_clear(&clear_kind);
        self.stats.attack_sent += plan.total();
        if self.scoring.combo >= 0 {
            self.stats.max_combo = self.stats.max_combo.max(self.scoring.combo as u32);
        }
        self.stats.max_b2b = self.stats.max_b2b.max(self.scoring.b2b_chain);

        if spin != SpinKind::None {
            self.events.push(PlayfieldEvent::Spin(spin));
        }
        if cleared > 0 {
            self.events.push(PlayfieldEvent::LinesCleared(full));
        }
        if self.scoring.combo > 0 {
            self.events.push(PlayfieldEvent::Combo(self.scoring.combo as u32));
        }
        if self.scoring.b2b_chain >= 2 {
            self.events
                .push(PlayfieldEvent::BackToBack(self.scoring.b2b_chain));
        }
        if clear_kind != ClearKind::None {
            self.last_clear_kind = Some(clear_kind.clone());
        }

        self.hold.unlock();

        let mut outgoing = Vec::new();
        if plan.attack > 0 {
            outgoing.push(plan.attack);
        }
        outgoing.extend(plan.release_waves.iter().copied().filter(|&w| w > 0));

        self.spawn_next(rng);

        LockReport {
            locked: true,
            cleared,
            spin,
            clear_kind,
            outgoing,
            game_over: self.game_over,
        }
    }

    /// Raise queued garbage, at most 8 rows per lock. Chunks share one hole
    /// column; an entry split by the cap keeps its column for the remainder.
    fn insert_pending_garbage<R: Rng>(&mut self, rng: &mut R) -> u32 {
        let mut inserted = 0;
        while inserted < MAX_RISE_PER_LOCK && self.garbage.queued() > 0 {
            let hole = self.garbage.hole_column(rng);
            let (lines, broken) = match self.garbage.take(MAX_RISE_PER_LOCK - inserted) {
                Some(taken) => taken,
                None => break,
            };
            self.board.add_garbage(lines as usize, hole);
            inserted += lines;
            if !broken {
                self.garbage.clear_hole();
            }
        }
        if inserted > 0 {
            self.stats.garbage_received += inserted;
            self.events.push(PlayfieldEvent::GarbageReceived(inserted));
        }
        inserted
    }

    // --- read-only surface for renderers and drivers ---

    /// The visible 20x10 window, top row first, with the active piece
    /// overlaid.
    pub fn renderable_state(&self) -> [Cell; VISIBLE_HEIGHT * BOARD_WIDTH] {
        let mut cells = [Cell::Empty; VISIBLE_HEIGHT * BOARD_WIDTH];
        for vis_row in 0..VISIBLE_HEIGHT {
            let row = VISIBLE_HEIGHT - 1 - vis_row;
            cells[vis_row * BOARD_WIDTH..(vis_row + 1) * BOARD_WIDTH]
                .copy_from_slice(&self.board.grid[row]);
        }
        if let Some(piece) = &self.active {
            for (col, row) in piece.cells() {
                if (0..BOARD_WIDTH as i32).contains(&col) && (0..VISIBLE_HEIGHT as i32).contains(&row)
                {
                    let vis_row = VISIBLE_HEIGHT - 1 - row as usize;
                    cells[vis_row * BOARD_WIDTH + col as usize] = Cell::Filled(piece.kind);
                }
            }
        }
        cells
    }

    pub fn active_cells(&self) -> Option<[(i32, i32); 4]> {
        self.active.as_ref().map(|p| p.cells())
    }

    /// Drop-target cells, absent when the piece already rests there.
    pub fn ghost_cells(&self) -> Option<[(i32, i32); 4]> {
        let piece = self.active.as_ref()?;
        let ghost = movement::ghost_y(&self.board, piece);
        if ghost == piece.y {
            return None;
        }
        Some(piece.cells_at(piece.x, ghost, piece.rotation))
    }

    pub fn held_kind(&self) -> Option<PieceKind> {
        self.hold.kind
    }

    pub fn next_queue(&self, count: usize) -> Vec<PieceKind> {
        self.bag.peek(count)
    }

    pub fn score(&self) -> u64 {
        self.scoring.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.scoring.lines_cleared
    }

    pub fn b2b_chain(&self) -> u32 {
        self.scoring.b2b_chain
    }

    pub fn combo(&self) -> i32 {
        self.scoring.combo
    }

    /// Lines sitting in the reception queue, not yet risen.
    pub fn garbage_queued(&self) -> u32 {
        self.garbage.queued()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn has_active_piece(&self) -> bool {
        self.active.is_some()
    }

    pub fn piece_position(&self) -> Option<(i32, i32)> {
        self.active.as_ref().map(|p| (p.x, p.y))
    }

    /// Stack within four rows of the visible top.
    pub fn is_danger(&self) -> bool {
        self.board.max_height() >= VISIBLE_HEIGHT - 4
    }

    pub fn drain_events(&mut self) -> Vec<PlayfieldEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn fresh() -> (Playfield, StdRng) {
        let mut rng = rng();
        let mut field = Playfield::new();
        field.reset(&mut rng);
        (field, rng)
    }

    fn fill_row_except(field: &mut Playfield, row: i32, holes: &[i32]) {
        for col in 0..BOARD_WIDTH as i32 {
            if !holes.contains(&col) {
                field.board.set(col, row, Cell::Filled(PieceKind::J));
            }
        }
    }

    #[test]
    fn test_reset_spawns_first_piece() {
        let (field, _) = fresh();
        assert!(field.has_active_piece());
        assert!(!field.is_game_over());
        // Anchor matches the spawn table.
        let piece = field.active.as_ref().unwrap();
        assert_eq!((piece.x, piece.y), piece.kind.spawn_position());
    }

    #[test]
    fn test_active_never_overlaps_stack() {
        let (mut field, mut rng) = fresh();
        for _ in 0..30 {
            field.handle(PlayerAction::MoveLeft, &mut rng);
            field.handle(PlayerAction::RotateCw, &mut rng);
            field.handle(PlayerAction::HardDrop, &mut rng);
            if field.game_over {
                break;
            }
            let piece = field.active.as_ref().unwrap();
            assert!(field.board.piece_fits(piece));
        }
    }

    #[test]
    fn test_tspin_double_scores_and_starts_b2b() {
        let (mut field, mut rng) = fresh();
        // Canonical slot: rows 0-1 full except a T notch at columns 0-2,
        // overhang at (0, 2).
        fill_row_except(&mut field, 0, &[1]);
        fill_row_except(&mut field, 1, &[0, 1, 2]);
        field.board.set(0, 2, Cell::Filled(PieceKind::J));

        field.active = None;
        assert!(field.spawn(PieceKind::T));
        // Walk the T above the notch, then rotate twice; the second CCW is
        // the last move before the lock.
        {
            let piece = field.active.as_mut().unwrap();
            piece.x = 0;
            piece.y = 0;
        }
        assert!(field.control_rotate_ccw());
        assert!(field.control_rotate_ccw());
        let report = field.control_hard_drop(&mut rng);

        assert_eq!(report.spin, SpinKind::TSpin);
        assert_eq!(report.cleared, 2);
        assert_eq!(report.clear_kind, ClearKind::TSpinDouble);
        assert_eq!(report.outgoing, vec![4]);
        assert_eq!(field.b2b_chain(), 1);
    }

    #[test]
    fn test_vertical_i_clears_one_and_shifts() {
        let (mut field, mut rng) = fresh();
        fill_row_except(&mut field, 5, &[9]);
        for row in 0..5 {
            field.board.set(9, row, Cell::Garbage);
        }

        field.active = None;
        assert!(field.spawn(PieceKind::I));
        assert!(field.control_rotate_cw());
        for _ in 0..4 {
            assert!(field.control_right());
        }
        let report = field.control_hard_drop(&mut rng);

        assert_eq!(report.cleared, 1);
        assert_eq!(report.clear_kind, ClearKind::Single);
        assert!(report.outgoing.is_empty());
        assert_eq!(field.b2b_chain(), 0);
        // The three I cells above the cleared row collapsed onto rows 5-7.
        for row in 5..8 {
            assert_eq!(field.board.get(9, row), Cell::Filled(PieceKind::I));
        }
        assert!(field.board.get(9, 8).is_empty());
    }

    #[test]
    fn test_hold_swaps_and_rearms_on_lock() {
        let (mut field, mut rng) = fresh();
        let first = field.active.as_ref().unwrap().kind;
        field.control_hold(&mut rng);
        assert_eq!(field.held_kind(), Some(first));
        assert!(field.has_active_piece());
        // Second hold before a lock is rejected.
        let second = field.active.as_ref().unwrap().kind;
        field.control_hold(&mut rng);
        assert_eq!(field.active.as_ref().unwrap().kind, second);

        field.control_hard_drop(&mut rng);
        let third = field.active.as_ref().unwrap().kind;
        field.control_hold(&mut rng);
        // Re-armed: the new piece goes in, the original comes back out.
        assert_eq!(field.held_kind(), Some(third));
        assert_eq!(field.active.as_ref().unwrap().kind, first);
    }

    #[test]
    fn test_garbage_rises_capped_with_shared_hole() {
        let (mut field, mut rng) = fresh();
        field.queue_garbage(12);

        field.active = None;
        assert!(field.spawn(PieceKind::O));
        field.control_hard_drop(&mut rng);

        assert_eq!(field.garbage_queued(), 4);
        let hole = (0..BOARD_WIDTH as i32)
            .find(|&col| field.board.get(col, 0).is_empty())
            .expect("garbage row must keep a hole");
        for row in 0..8 {
            for col in 0..BOARD_WIDTH as i32 {
                if col == hole {
                    assert!(field.board.get(col, row).is_empty());
                } else {
                    assert_eq!(field.board.get(col, row), Cell::Garbage);
                }
            }
        }
        // The locked O rose with the stack.
        assert_eq!(field.board.get(4, 8), Cell::Filled(PieceKind::O));

        // The split entry keeps its hole column on the next empty lock.
        field.control_hard_drop(&mut rng);
        assert_eq!(field.garbage_queued(), 0);
        for row in 0..4 {
            assert!(field.board.get(hole, row).is_empty());
        }
    }

    #[test]
    fn test_clearing_lock_defers_garbage() {
        let (mut field, mut rng) = fresh();
        // Row 0 lacks only column 9; drop a vertical I there.
        fill_row_except(&mut field, 0, &[9]);
        field.queue_garbage(3);
        field.active = None;
        assert!(field.spawn(PieceKind::I));
        assert!(field.control_rotate_cw());
        for _ in 0..4 {
            assert!(field.control_right());
        }
        let report = field.control_hard_drop(&mut rng);
        assert_eq!(report.cleared, 1);
        // The clear suppressed insertion; garbage stays queued.
        assert_eq!(field.garbage_queued(), 3);
        assert!(field.board.get(0, 0).is_empty());
    }

    #[test]
    fn test_lock_delay_reset_cap() {
        let (mut field, mut rng) = fresh();
        // Rest the piece on the floor.
        while field.control_soft_drop() {}
        assert!(field.lock_delay.is_active());

        // 15 successful shifts each buy a fresh delay window.
        for i in 0..15 {
            let moved = if i % 2 == 0 {
                field.control_left() || field.control_right()
            } else {
                field.control_right() || field.control_left()
            };
            assert!(moved);
            let report = field.tick(Duration::from_millis(400), &mut rng);
            assert!(!report.locked, "locked after {} resets", i + 1);
        }
        assert_eq!(field.lock_delay.resets_left(), 0);

        // Further movement no longer rewinds the timer.
        field.control_left();
        field.control_right();
        let report = field.tick(Duration::from_millis(200), &mut rng);
        assert!(report.locked);
        // The lock spawned the next piece.
        assert!(field.has_active_piece());
    }

    #[test]
    fn test_blocked_spawn_is_game_over() {
        let (mut field, mut rng) = fresh();
        for col in 3..7 {
            for row in 20..24 {
                field.board.set(col, row, Cell::Garbage);
            }
        }
        field.active = None;
        assert!(!field.spawn(PieceKind::T));
        assert!(field.is_game_over());
        // Actions become no-ops.
        let report = field.handle(PlayerAction::HardDrop, &mut rng);
        assert!(!report.locked);
    }

    #[test]
    fn test_renderable_state_overlays_active() {
        let (mut field, _) = fresh();
        field.board.set(0, 0, Cell::Garbage);
        field.active = None;
        assert!(field.spawn(PieceKind::T));
        {
            let piece = field.active.as_mut().unwrap();
            piece.x = 3;
            piece.y = 4;
        }
        let cells = field.renderable_state();
        // Bottom-left garbage cell: last row of the snapshot.
        assert_eq!(cells[19 * BOARD_WIDTH], Cell::Garbage);
        // T bar occupies row 5 (snapshot row 14), columns 3-5.
        for col in 3..6 {
            assert_eq!(cells[14 * BOARD_WIDTH + col], Cell::Filled(PieceKind::T));
        }
        assert_eq!(cells[13 * BOARD_WIDTH + 4], Cell::Filled(PieceKind::T));
    }

    #[test]
    fn test_soft_drop_on_floor_starts_lock_delay() {
        let (mut field, _) = fresh();
        while field.control_soft_drop() {}
        assert!(field.lock_delay.is_active());
    }
}
