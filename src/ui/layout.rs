use ratatui::layout::Rect;

use crate::engine::board::{BOARD_WIDTH, VISIBLE_HEIGHT};

/// Board dimensions in terminal cells (each board cell is 2 chars wide).
pub const BOARD_CELL_W: u16 = BOARD_WIDTH as u16 * 2;
pub const BOARD_CELL_H: u16 = VISIBLE_HEIGHT as u16;
pub const BOARD_TOTAL_W: u16 = BOARD_CELL_W + 2;
pub const BOARD_TOTAL_H: u16 = BOARD_CELL_H + 2;

/// Sidebar panel width.
pub const PANEL_W: u16 = 12;

/// One player's pane width: hold panel, board, next panel.
pub const PANE_W: u16 = PANEL_W + 1 + BOARD_TOTAL_W + 1 + PANEL_W;

/// Minimum terminal size for the duel screen.
pub const MIN_WIDTH: u16 = PANE_W * 2 + 4;
pub const MIN_HEIGHT: u16 = BOARD_TOTAL_H + 4;

/// Layout for one player's pane.
#[derive(Debug, Clone)]
pub struct PaneLayout {
    pub hold: Rect,
    pub board: Rect,
    pub next: Rect,
    pub left_sidebar: Rect,
    pub right_sidebar: Rect,
    pub garbage_bar: Rect,
    pub action_text: Rect,
    pub info: Rect,
}

impl PaneLayout {
    fn new(area: Rect) -> Self {
        let left_x = area.x;
        let board_x = left_x + PANEL_W + 1;
        let right_x = board_x + BOARD_TOTAL_W + 1;
        let top = area.y;

        PaneLayout {
            hold: Rect::new(left_x, top, PANEL_W, 5),
            left_sidebar: Rect::new(left_x, top + 6, PANEL_W, BOARD_TOTAL_H.saturating_sub(6)),
            board: Rect::new(board_x, top, BOARD_TOTAL_W, BOARD_TOTAL_H),
            garbage_bar: Rect::new(board_x.saturating_sub(1), top + 1, 1, BOARD_CELL_H),
            next: Rect::new(right_x, top, PANEL_W, 12),
            right_sidebar: Rect::new(right_x, top + 12, PANEL_W, BOARD_TOTAL_H.saturating_sub(12)),
            action_text: Rect::new(board_x + 2, top + BOARD_TOTAL_H / 2, BOARD_CELL_W, 4),
            info: Rect::new(board_x, top + BOARD_TOTAL_H, BOARD_TOTAL_W, 1),
        }
    }
}

/// Side-by-side panes for the two players, with a divider column between.
#[derive(Debug, Clone)]
pub struct DuelLayout {
    pub panes: [PaneLayout; 2],
    pub center: Rect,
    pub controls: Rect,
}

impl DuelLayout {
    pub fn new(area: Rect) -> Self {
        let gap = 4;
        let total_w = PANE_W * 2 + gap;
        let start_x = area.x + area.width.saturating_sub(total_w) / 2;
        let start_y = area.y + area.height.saturating_sub(BOARD_TOTAL_H + 3) / 2;

        let left = Rect::new(start_x, start_y, PANE_W, area.height);
        let right = Rect::new(start_x + PANE_W + gap, start_y, PANE_W, area.height);
        let center = Rect::new(
            start_x + PANE_W,
            start_y + BOARD_TOTAL_H / 2 - 2,
            gap,
            5,
        );
        let controls = Rect::new(start_x, start_y + BOARD_TOTAL_H + 1, total_w, 2);

        DuelLayout {
            panes: [PaneLayout::new(left), PaneLayout::new(right)],
            center,
            controls,
        }
    }
}

/// Whether the terminal can fit the duel screen.
pub fn check_size(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}
