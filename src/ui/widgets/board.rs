use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::engine::board::{Cell, BOARD_WIDTH, VISIBLE_HEIGHT};
use crate::engine::playfield::Playfield;
use crate::ui::effects::Effects;
use crate::ui::theme;

/// Renders one playfield's visible window from its renderer snapshot, with
/// ghost overlay and effect flashes.
pub struct BoardWidget<'a> {
    pub field: &'a Playfield,
    pub effects: &'a Effects,
    pub show_grid: bool,
}

impl<'a> Widget for BoardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board_width = BOARD_WIDTH as u16 * 2;
        let board_height = VISIBLE_HEIGHT as u16;
        if area.width < board_width + 2 || area.height < board_height + 2 {
            return;
        }

        let shake = self.effects.shake_offset();
        let board_x = (area.x as i16 + 1 + shake.0).max(area.x as i16) as u16;
        let board_y = (area.y as i16 + 1 + shake.1).max(area.y as i16) as u16;

        self.draw_border(area, buf);

        let snapshot = self.field.renderable_state();
        let active = self.field.active_cells();
        let ghost = self.field.ghost_cells();

        for vis_row in 0..VISIBLE_HEIGHT {
            let screen_row = board_y + vis_row as u16;
            if screen_row >= area.y + area.height {
                continue;
            }
            // Snapshot rows run top to bottom; board rows bottom up.
            let board_row = (VISIBLE_HEIGHT - 1 - vis_row) as i32;

            for col in 0..BOARD_WIDTH {
                let screen_col = board_x + col as u16 * 2;
                if screen_col + 1 >= area.x + area.width {
                    continue;
                }

                let cell = snapshot[vis_row * BOARD_WIDTH + col];
                let (text, style) =
                    self.cell_display(cell, col as i32, board_row, vis_row, &active, &ghost);
                if screen_col < buf.area.width && screen_row < buf.area.height {
                    buf.set_string(screen_col, screen_row, text, style);
                }
            }
        }
    }
}

impl<'a> BoardWidget<'a> {
    #[allow(clippy::too_many_arguments)]
    fn cell_display(
        &self,
        cell: Cell,
        col: i32,
        row: i32,
        vis_row: usize,
        active: &Option<[(i32, i32); 4]>,
        ghost: &Option<[(i32, i32); 4]>,
    ) -> (&'static str, Style) {
        if let Some((ref flash_rows, progress)) = self.effects.line_clear_flash {
            if flash_rows.contains(&vis_row) {
                let color = self.effects.line_clear_color(progress);
                return (theme::BLOCK_FLASH, Style::default().fg(color));
            }
        }

        if let Some(cells) = active {
            if cells.contains(&(col, row)) {
                let color = match cell {
                    Cell::Filled(kind) => kind.bright_color(),
                    _ => theme::TEXT_BRIGHT,
                };
                return (theme::BLOCK_FULL, Style::default().fg(color));
            }
        }

        if cell.is_empty() {
            if let Some(cells) = ghost {
                if cells.contains(&(col, row)) {
                    return (theme::BLOCK_GHOST, Style::default().fg(theme::GHOST_COLOR));
                }
            }
        }

        match cell {
            Cell::Empty => {
                if self.show_grid {
                    (theme::BLOCK_DOT, Style::default().fg(theme::GRID_DOT_COLOR))
                } else {
                    (theme::BLOCK_EMPTY, Style::default())
                }
            }
            Cell::Filled(kind) => {
                let mut color = kind.color();
                if row >= VISIBLE_HEIGHT as i32 - 4 && self.effects.in_danger {
                    color = blend_color(color, theme::DANGER_COLOR, self.effects.danger_flash * 0.3);
                }
                (theme::BLOCK_FULL, Style::default().fg(color))
            }
            Cell::Garbage => {
                let color = if row % 2 == 0 {
                    theme::GARBAGE_COLOR
                } else {
                    theme::GARBAGE_DARK
                };
                (theme::BLOCK_GARBAGE, Style::default().fg(color))
            }
        }
    }

    fn draw_border(&self, area: Rect, buf: &mut Buffer) {
        let w = BOARD_WIDTH as u16 * 2 + 2;
        let h = VISIBLE_HEIGHT as u16 + 2;

        let border_color = if self.effects.in_danger {
            blend_color(
                theme::BORDER_COLOR,
                theme::DANGER_COLOR,
                self.effects.danger_flash * 0.6,
            )
        } else if !self.effects.hard_drop_flash.is_zero() {
            theme::BORDER_BRIGHT
        } else {
            theme::BORDER_COLOR
        };
        let style = Style::default().fg(border_color);

        let x = area.x;
        let y = area.y;

        buf.set_string(x, y, theme::BORDER_TL, style);
        for i in 1..w - 1 {
            buf.set_string(x + i, y, theme::BORDER_H_TOP, style);
        }
        buf.set_string(x + w - 1, y, theme::BORDER_TR, style);

        for row in 1..h - 1 {
            // Gradient: brighter near the top.
            let t = row as f32 / (h - 2) as f32;
            let grad = blend_color(theme::BORDER_BRIGHT, theme::BORDER_COLOR, t);
            let grad_style = Style::default().fg(if self.effects.in_danger {
                blend_color(grad, theme::DANGER_COLOR, self.effects.danger_flash * 0.4)
            } else {
                grad
            });
            buf.set_string(x, y + row, theme::BORDER_V_LEFT, grad_style);
            buf.set_string(x + w - 1, y + row, theme::BORDER_V_RIGHT, grad_style);
        }

        buf.set_string(x, y + h - 1, theme::BORDER_BL, style);
        for i in 1..w - 1 {
            buf.set_string(x + i, y + h - 1, theme::BORDER_H_BOT, style);
        }
        buf.set_string(x + w - 1, y + h - 1, theme::BORDER_BR, style);
    }
}

/// Blend two colors. t=0 gives c1, t=1 gives c2.
pub fn blend_color(c1: Color, c2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (c1, c2) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let r = (r1 as f32 * (1.0 - t) + r2 as f32 * t) as u8;
            let g = (g1 as f32 * (1.0 - t) + g2 as f32 * t) as u8;
            let b = (b1 as f32 * (1.0 - t) + b2 as f32 * t) as u8;
            Color::Rgb(r, g, b)
        }
        _ => c1,
    }
}
