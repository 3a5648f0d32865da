use super::piece::{PieceKind, Rotation};

/// SRS+ wall kick offsets for a rotation attempt. Returns the ordered list of
/// (dx, dy) translations to try; the 0° offset is always first so an unkicked
/// rotation wins when it fits.
pub fn get_kicks(kind: PieceKind, from: Rotation, to: Rotation) -> &'static [(i32, i32)] {
    if kind == PieceKind::O {
        return &[(0, 0)];
    }

    let is_180 = (from.index() as i32 - to.index() as i32).abs() == 2;
    if is_180 {
        // One shared 180° set for every non-O piece.
        return get_180_kicks(from, to);
    }

    if kind == PieceKind::I {
        get_i_kicks(from, to)
    } else {
        get_normal_kicks(from, to)
    }
}

/// Standard SRS kicks for J/L/S/T/Z.
fn get_normal_kicks(from: Rotation, to: Rotation) -> &'static [(i32, i32)] {
    use Rotation::*;
    match (from, to) {
        (R0, R1) => &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
        (R1, R0) => &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
        (R1, R2) => &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
        (R2, R1) => &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
        (R2, R3) => &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
        (R3, R2) => &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
        (R3, R0) => &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
        (R0, R3) => &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
        _ => &[(0, 0)],
    }
}

/// SRS kicks for the I piece.
fn get_i_kicks(from: Rotation, to: Rotation) -> &'static [(i32, i32)] {
    use Rotation::*;
    match (from, to) {
        (R0, R1) => &[(0, 0), (1, 0), (-2, 0), (-2, -1), (1, 2)],
        (R1, R0) => &[(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
        (R1, R2) => &[(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
        (R2, R1) => &[(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
        (R2, R3) => &[(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
        (R3, R2) => &[(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
        (R3, R0) => &[(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
        (R0, R3) => &[(0, 0), (-1, 0), (2, 0), (2, -1), (-1, 2)],
        _ => &[(0, 0)],
    }
}

/// SRS+ 180° kicks, shared by all non-O pieces.
fn get_180_kicks(from: Rotation, to: Rotation) -> &'static [(i32, i32)] {
    use Rotation::*;
    match (from, to) {
        (R0, R2) => &[(0, 0), (0, 1), (1, 1), (-1, 1), (1, 0), (-1, 0)],
        (R2, R0) => &[(0, 0), (0, -1), (-1, -1), (1, -1), (-1, 0), (1, 0)],
        (R1, R3) => &[(0, 0), (1, 0), (1, 2), (1, 1), (0, 2), (0, 1)],
        (R3, R1) => &[(0, 0), (-1, 0), (-1, 2), (-1, 1), (0, 2), (0, 1)],
        _ => &[(0, 0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_o_piece_identity_only() {
        for (from, to) in [
            (Rotation::R0, Rotation::R1),
            (Rotation::R0, Rotation::R2),
            (Rotation::R1, Rotation::R3),
        ] {
            assert_eq!(get_kicks(PieceKind::O, from, to), &[(0, 0)]);
        }
    }

    #[test]
    fn test_quarter_kicks_have_5_entries() {
        for kind in [PieceKind::T, PieceKind::I] {
            let kicks = get_kicks(kind, Rotation::R0, Rotation::R1);
            assert_eq!(kicks.len(), 5);
            assert_eq!(kicks[0], (0, 0));
        }
    }

    #[test]
    fn test_180_kicks_shared_by_i() {
        // The 180° set applies regardless of kind.
        assert_eq!(
            get_kicks(PieceKind::I, Rotation::R0, Rotation::R2),
            get_kicks(PieceKind::T, Rotation::R0, Rotation::R2)
        );
        assert_eq!(
            get_kicks(PieceKind::S, Rotation::R1, Rotation::R3).len(),
            6
        );
    }

    #[test]
    fn test_quarter_kicks_mirror() {
        // CW and its reverse CCW share magnitudes with opposite signs.
        let cw = get_kicks(PieceKind::T, Rotation::R0, Rotation::R1);
        let back = get_kicks(PieceKind::T, Rotation::R1, Rotation::R0);
        for (a, b) in cw.iter().zip(back.iter()) {
            assert_eq!((a.0, a.1), (-b.0, -b.1));
        }
    }
}
