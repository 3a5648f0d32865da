use ratatui::style::Color;

/// The 7 tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Spawn anchor: board coordinate of the 4x4 box's bottom-left corner.
    pub fn spawn_position(self) -> (i32, i32) {
        match self {
            PieceKind::I => (3, 19),
            _ => (3, 20),
        }
    }

    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Rgb(94, 214, 206),
            PieceKind::O => Color::Rgb(238, 210, 74),
            PieceKind::T => Color::Rgb(186, 64, 204),
            PieceKind::S => Color::Rgb(118, 202, 72),
            PieceKind::Z => Color::Rgb(214, 62, 48),
            PieceKind::J => Color::Rgb(58, 94, 220),
            PieceKind::L => Color::Rgb(233, 164, 60),
        }
    }

    pub fn bright_color(self) -> Color {
        match self {
            PieceKind::I => Color::Rgb(138, 240, 228),
            PieceKind::O => Color::Rgb(252, 233, 118),
            PieceKind::T => Color::Rgb(222, 104, 238),
            PieceKind::S => Color::Rgb(158, 232, 112),
            PieceKind::Z => Color::Rgb(244, 104, 90),
            PieceKind::J => Color::Rgb(104, 138, 244),
            PieceKind::L => Color::Rgb(252, 198, 112),
        }
    }

    pub fn dim_color(self) -> Color {
        match self {
            PieceKind::I => Color::Rgb(47, 107, 103),
            PieceKind::O => Color::Rgb(119, 105, 37),
            PieceKind::T => Color::Rgb(93, 32, 102),
            PieceKind::S => Color::Rgb(59, 101, 36),
            PieceKind::Z => Color::Rgb(107, 31, 24),
            PieceKind::J => Color::Rgb(29, 47, 110),
            PieceKind::L => Color::Rgb(116, 82, 30),
        }
    }
}

/// Rotation state of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Spawn state (0)
    R0,
    /// Clockwise (R)
    R1,
    /// 180 (2)
    R2,
    /// Counter-clockwise (L)
    R3,
}

impl Rotation {
    pub fn cw(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R3,
            Rotation::R1 => Rotation::R0,
            Rotation::R2 => Rotation::R1,
            Rotation::R3 => Rotation::R2,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R2,
            Rotation::R1 => Rotation::R3,
            Rotation::R2 => Rotation::R0,
            Rotation::R3 => Rotation::R1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }
}

/// Active piece on a playfield.
///
/// `(x, y)` is the bottom-left corner of the piece's 4x4 box in board
/// coordinates (row 0 = bottom).
#[derive(Debug, Clone)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = kind.spawn_position();
        Self {
            kind,
            rotation: Rotation::R0,
            x,
            y,
        }
    }

    /// Occupancy mask for the current rotation.
    pub fn mask(&self) -> u16 {
        mask(self.kind, self.rotation)
    }

    /// The 4 occupied board cells (col, row) for the current state.
    pub fn cells(&self) -> [(i32, i32); 4] {
        mask_cells(self.mask(), self.x, self.y)
    }

    /// Occupied cells for a hypothetical position/rotation.
    pub fn cells_at(&self, x: i32, y: i32, rotation: Rotation) -> [(i32, i32); 4] {
        mask_cells(mask(self.kind, rotation), x, y)
    }
}

/// Occupancy mask for a kind/rotation pair.
pub fn mask(kind: PieceKind, rotation: Rotation) -> u16 {
    let table = match kind {
        PieceKind::I => &I_MASKS,
        PieceKind::O => &O_MASKS,
        PieceKind::T => &T_MASKS,
        PieceKind::S => &S_MASKS,
        PieceKind::Z => &Z_MASKS,
        PieceKind::J => &J_MASKS,
        PieceKind::L => &L_MASKS,
    };
    table[rotation.index()]
}

/// Expand a 4x4 mask anchored at (x, y) into board cells.
///
/// Bit 15 is the top-left cell of the box, bit 0 the bottom-right; with
/// i = 15 - bit, the cell lands at (x + i % 4, y + 3 - i / 4).
pub fn mask_cells(mask: u16, x: i32, y: i32) -> [(i32, i32); 4] {
    let mut cells = [(0, 0); 4];
    let mut n = 0;
    for i in 0..16 {
        if mask & (1 << (15 - i)) != 0 {
            cells[n] = (x + (i % 4), y + 3 - (i / 4));
            n += 1;
        }
    }
    debug_assert_eq!(n, 4);
    cells
}

// Rotation masks, 4 bits per box row from the top. The JLSTZ 3x3 occupies
// box columns 0-2 and the three bottom rows, which puts the T's rotation
// center at anchor + (1, 1). I uses the full 4x4; O never changes.

const I_MASKS: [u16; 4] = [0x0F00, 0x2222, 0x00F0, 0x4444];

const O_MASKS: [u16; 4] = [0x0660, 0x0660, 0x0660, 0x0660];

const T_MASKS: [u16; 4] = [0x04E0, 0x0464, 0x00E4, 0x04C4];

const S_MASKS: [u16; 4] = [0x06C0, 0x0462, 0x006C, 0x08C4];

const Z_MASKS: [u16; 4] = [0x0C60, 0x0264, 0x00C6, 0x04C8];

const J_MASKS: [u16; 4] = [0x08E0, 0x0644, 0x00E2, 0x044C];

const L_MASKS: [u16; 4] = [0x02E0, 0x0446, 0x00E8, 0x0C44];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_masks_have_four_cells() {
        for &kind in &PieceKind::ALL {
            for rot in [Rotation::R0, Rotation::R1, Rotation::R2, Rotation::R3] {
                assert_eq!(mask(kind, rot).count_ones(), 4, "{:?} {:?}", kind, rot);
            }
        }
    }

    #[test]
    fn test_rotation_cycle() {
        let r = Rotation::R0;
        assert_eq!(r.cw().cw().cw().cw(), Rotation::R0);
        assert_eq!(r.ccw().ccw().ccw().ccw(), Rotation::R0);
        assert_eq!(r.cw(), r.ccw().flip());
        assert_eq!(r.flip().flip(), r);
    }

    #[test]
    fn test_o_rotation_invariant() {
        for i in 1..4 {
            assert_eq!(O_MASKS[i], O_MASKS[0]);
        }
    }

    #[test]
    fn test_i_spawn_cells() {
        let piece = Piece::spawn(PieceKind::I);
        let mut cells = piece.cells();
        cells.sort();
        // Horizontal I on row 21, columns 3-6.
        assert_eq!(cells, [(3, 21), (4, 21), (5, 21), (6, 21)]);
    }

    #[test]
    fn test_t_spawn_cells() {
        let piece = Piece::spawn(PieceKind::T);
        let mut cells = piece.cells();
        cells.sort();
        // Flat side on row 21, nub above the center column.
        assert_eq!(cells, [(3, 21), (4, 21), (4, 22), (5, 21)]);
    }

    #[test]
    fn test_spawn_rows_align() {
        // Every kind's lowest cell spawns on row 21.
        for &kind in &PieceKind::ALL {
            let lowest = Piece::spawn(kind).cells().iter().map(|c| c.1).min().unwrap();
            assert_eq!(lowest, 21, "{:?}", kind);
        }
    }

    #[test]
    fn test_mask_cell_mapping() {
        // T at the origin: bar across row 1, nub at (1, 2), center at (1, 1).
        let mut cells = mask_cells(T_MASKS[0], 0, 0);
        cells.sort();
        assert_eq!(cells, [(0, 1), (1, 1), (1, 2), (2, 1)]);
        // Vertical I (R1) occupies box column 2 top to bottom.
        let mut cells = mask_cells(I_MASKS[1], 0, 0);
        cells.sort();
        assert_eq!(cells, [(2, 0), (2, 1), (2, 2), (2, 3)]);
    }
}
