use super::board::Board;
use super::clear::SpinKind;
use super::piece::{Piece, PieceKind, Rotation};
use super::srs;

/// Try to shift a piece by (dx, dy). Returns true if the move was committed.
pub fn try_shift(board: &Board, piece: &mut Piece, dx: i32, dy: i32) -> bool {
    if board.fits_at(piece, piece.x + dx, piece.y + dy, piece.rotation) {
        piece.x += dx;
        piece.y += dy;
        true
    } else {
        false
    }
}

/// Try to rotate a piece into `target`, attempting each SRS+ kick in order.
/// Returns the kick that succeeded, if any.
pub fn try_rotate(board: &Board, piece: &mut Piece, target: Rotation) -> Option<(i32, i32)> {
    let kicks = srs::get_kicks(piece.kind, piece.rotation, target);
    for &(dx, dy) in kicks {
        if board.fits_at(piece, piece.x + dx, piece.y + dy, target) {
            piece.x += dx;
            piece.y += dy;
            piece.rotation = target;
            return Some((dx, dy));
        }
    }
    None
}

/// Drop the piece to its resting row. Returns the number of rows travelled.
pub fn hard_drop(board: &Board, piece: &mut Piece) -> u32 {
    let start_y = piece.y;
    while board.fits_at(piece, piece.x, piece.y - 1, piece.rotation) {
        piece.y -= 1;
    }
    (start_y - piece.y) as u32
}

/// True when the piece cannot move one row down.
pub fn is_grounded(board: &Board, piece: &Piece) -> bool {
    !board.fits_at(piece, piece.x, piece.y - 1, piece.rotation)
}

/// The row the piece would rest on if dropped straight down.
pub fn ghost_y(board: &Board, piece: &Piece) -> i32 {
    let mut y = piece.y;
    while board.fits_at(piece, piece.x, y - 1, piece.rotation) {
        y -= 1;
    }
    y
}

/// Classify the lock's spin. Must be called before the piece is written to
/// the grid; `last_was_rotation` is the playfield's rotated-last flag.
pub fn classify_spin(board: &Board, piece: &Piece, last_was_rotation: bool) -> SpinKind {
    if !last_was_rotation {
        return SpinKind::None;
    }
    match piece.kind {
        PieceKind::T => classify_tspin(board, piece),
        PieceKind::O => SpinKind::None,
        _ => {
            if is_immobile(board, piece) {
                SpinKind::AllMini
            } else {
                SpinKind::None
            }
        }
    }
}

/// T-spin 3-corner rule around the T's rotation center at anchor + (1, 1).
///
/// The corner array cycles [TL, TR, BR, BL]; rotating it by the rotation
/// index yields the two corners on the pointing side ("front") first.
fn classify_tspin(board: &Board, piece: &Piece) -> SpinKind {
    let (cx, cy) = (piece.x + 1, piece.y + 1);
    let corners = [
        board.get(cx - 1, cy + 1).is_occupied(), // top-left
        board.get(cx + 1, cy + 1).is_occupied(), // top-right
        board.get(cx + 1, cy - 1).is_occupied(), // bottom-right
        board.get(cx - 1, cy - 1).is_occupied(), // bottom-left
    ];

    let r = piece.rotation.index();
    let front = [corners[r], corners[(r + 1) % 4]];
    let back = [corners[(r + 2) % 4], corners[(r + 3) % 4]];

    let front_count = front.iter().filter(|&&b| b).count();
    let back_count = back.iter().filter(|&&b| b).count();

    if front_count == 2 && back_count >= 1 {
        SpinKind::TSpin
    } else if (back_count == 2 && front_count >= 1) || is_immobile(board, piece) {
        SpinKind::TSpinMini
    } else {
        SpinKind::None
    }
}

/// The all-mini test: the piece cannot move by one cell in any direction.
fn is_immobile(board: &Board, piece: &Piece) -> bool {
    !board.fits_at(piece, piece.x, piece.y + 1, piece.rotation)
        && !board.fits_at(piece, piece.x, piece.y - 1, piece.rotation)
        && !board.fits_at(piece, piece.x - 1, piece.y, piece.rotation)
        && !board.fits_at(piece, piece.x + 1, piece.y, piece.rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::board::{Cell, BOARD_WIDTH};

    fn fill_row_except(board: &mut Board, row: i32, holes: &[i32]) {
        for col in 0..BOARD_WIDTH as i32 {
            if !holes.contains(&col) {
                board.set(col, row, Cell::Filled(PieceKind::J));
            }
        }
    }

    #[test]
    fn test_shift_walls() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::T);
        // T occupies columns 3-5; 3 left shifts reach the wall.
        for _ in 0..3 {
            assert!(try_shift(&board, &mut piece, -1, 0));
        }
        assert!(!try_shift(&board, &mut piece, -1, 0));
        // And 7 right shifts from the wall reach the other side.
        for _ in 0..7 {
            assert!(try_shift(&board, &mut piece, 1, 0));
        }
        assert!(!try_shift(&board, &mut piece, 1, 0));
    }

    #[test]
    fn test_horizontal_i_right_wall() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::I);
        // Horizontal I occupies columns 3-6: 3 shifts to reach column 9.
        for _ in 0..3 {
            assert!(try_shift(&board, &mut piece, 1, 0));
        }
        assert!(!try_shift(&board, &mut piece, 1, 0));
    }

    #[test]
    fn test_hard_drop_to_floor() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::T);
        assert!(!is_grounded(&board, &piece));
        let rows = hard_drop(&board, &mut piece);
        assert!(rows > 0);
        assert!(is_grounded(&board, &piece));
        // Bar lands on row 0, so the box anchor sits one row below.
        assert_eq!(piece.y, -1);
    }

    #[test]
    fn test_ghost_matches_hard_drop() {
        let mut board = Board::new();
        fill_row_except(&mut board, 0, &[]);
        let mut piece = Piece::spawn(PieceKind::L);
        let ghost = ghost_y(&board, &piece);
        hard_drop(&board, &mut piece);
        assert_eq!(piece.y, ghost);
    }

    #[test]
    fn test_rotation_round_trip_identity() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::J);
        let (x, y, rot) = (piece.x, piece.y, piece.rotation);

        let cw = piece.rotation.cw();
        assert_eq!(try_rotate(&board, &mut piece, cw), Some((0, 0)));
        let ccw = piece.rotation.ccw();
        assert_eq!(try_rotate(&board, &mut piece, ccw), Some((0, 0)));
        assert_eq!((piece.x, piece.y, piece.rotation), (x, y, rot));

        let flip = piece.rotation.flip();
        assert_eq!(try_rotate(&board, &mut piece, flip), Some((0, 0)));
        let flip = piece.rotation.flip();
        assert_eq!(try_rotate(&board, &mut piece, flip), Some((0, 0)));
        assert_eq!((piece.x, piece.y, piece.rotation), (x, y, rot));
    }

    #[test]
    fn test_tspin_corner_rule() {
        let mut board = Board::new();
        // Slot: rows 0 and 1 full except the T-shaped notch at columns 0-2,
        // with an overhang cell at (0, 2).
        fill_row_except(&mut board, 0, &[1]);
        fill_row_except(&mut board, 1, &[0, 1, 2]);
        board.set(0, 2, Cell::Filled(PieceKind::J));

        // Point-down T filling the notch: anchor (0, 0), center (1, 1).
        let piece = Piece {
            kind: PieceKind::T,
            rotation: Rotation::R2,
            x: 0,
            y: 0,
        };
        assert!(board.piece_fits(&piece));
        assert_eq!(classify_spin(&board, &piece, true), SpinKind::TSpin);
        // Not rotated in: no spin at all.
        assert_eq!(classify_spin(&board, &piece, false), SpinKind::None);
    }

    #[test]
    fn test_tspin_mini_two_back_corners() {
        let mut board = Board::new();
        // Only the two corners behind an upward-pointing T, plus one front.
        board.set(0, 0, Cell::Filled(PieceKind::J)); // BL of center (1,1)
        board.set(2, 0, Cell::Filled(PieceKind::J)); // BR
        board.set(0, 2, Cell::Filled(PieceKind::J)); // TL (one front corner)
        let piece = Piece {
            kind: PieceKind::T,
            rotation: Rotation::R0,
            x: 0,
            y: 0,
        };
        assert!(board.piece_fits(&piece));
        assert_eq!(classify_spin(&board, &piece, true), SpinKind::TSpinMini);
    }

    #[test]
    fn test_all_mini_for_immobile_s() {
        let mut board = Board::new();
        let piece = Piece {
            kind: PieceKind::S,
            rotation: Rotation::R0,
            x: 0,
            y: 0,
        };
        // S at the origin occupies (0,1),(1,1),(1,2),(2,2). Wall it in so no
        // single-cell move fits.
        for (col, row) in [(2, 1), (3, 2), (0, 2), (1, 3), (2, 3), (0, 0), (1, 0)] {
            board.set(col, row, Cell::Garbage);
        }
        assert!(board.piece_fits(&piece));
        assert_eq!(classify_spin(&board, &piece, true), SpinKind::AllMini);
        // A plain drop into the same pocket is no spin.
        assert_eq!(classify_spin(&board, &piece, false), SpinKind::None);
    }
}
