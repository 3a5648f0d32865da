use ratatui::style::{Color, Modifier, Style};

use crate::engine::clear::ClearKind;

// Block characters
pub const BLOCK_FULL: &str = "██";
pub const BLOCK_GHOST: &str = "░░";
pub const BLOCK_FLASH: &str = "▓▓";
pub const BLOCK_EMPTY: &str = "  ";
pub const BLOCK_DOT: &str = "· ";
pub const BLOCK_GARBAGE: &str = "▒▒";

// Board border characters (half blocks so pieces meet the wall seamlessly)
pub const BORDER_TL: &str = "▗";
pub const BORDER_TR: &str = "▖";
pub const BORDER_BL: &str = "▝";
pub const BORDER_BR: &str = "▘";
pub const BORDER_H_TOP: &str = "▄";
pub const BORDER_H_BOT: &str = "▀";
pub const BORDER_V_LEFT: &str = "▐";
pub const BORDER_V_RIGHT: &str = "▌";

// Panel separator
pub const PANEL_H: &str = "─";

// Colors
pub const BG_COLOR: Color = Color::Rgb(14, 14, 19);
pub const BORDER_COLOR: Color = Color::Rgb(58, 63, 78);
pub const BORDER_BRIGHT: Color = Color::Rgb(96, 106, 136);
pub const PANEL_COLOR: Color = Color::Rgb(44, 49, 63);
pub const TEXT_COLOR: Color = Color::Rgb(198, 203, 213);
pub const TEXT_DIM: Color = Color::Rgb(98, 103, 118);
pub const TEXT_BRIGHT: Color = Color::Rgb(238, 243, 253);
pub const GHOST_COLOR: Color = Color::Rgb(58, 60, 68);
pub const GARBAGE_COLOR: Color = Color::Rgb(98, 98, 108);
pub const GARBAGE_DARK: Color = Color::Rgb(63, 63, 73);
pub const DANGER_COLOR: Color = Color::Rgb(178, 38, 38);
pub const GRID_DOT_COLOR: Color = Color::Rgb(29, 31, 39);

// Incoming-garbage bar
pub const GARBAGE_BAR_COLOR: Color = Color::Rgb(198, 48, 48);
pub const GARBAGE_BAR_BG: Color = Color::Rgb(34, 34, 44);

// Clear type text colors
pub fn clear_kind_color(kind: &ClearKind) -> Color {
    match kind {
        ClearKind::None => TEXT_DIM,
        ClearKind::Single => Color::Rgb(178, 183, 198),
        ClearKind::Double => Color::Rgb(118, 198, 253),
        ClearKind::Triple => Color::Rgb(178, 98, 253),
        ClearKind::Quad => Color::Rgb(253, 213, 58),
        ClearKind::TSpin | ClearKind::MiniTSpin => Color::Rgb(198, 78, 253),
        ClearKind::TSpinSingle | ClearKind::MiniTSpinSingle => Color::Rgb(218, 98, 253),
        ClearKind::TSpinDouble | ClearKind::MiniTSpinDouble => Color::Rgb(253, 138, 253),
        ClearKind::TSpinTriple => Color::Rgb(253, 178, 253),
        ClearKind::AllMini(_) => Color::Rgb(98, 253, 198),
    }
}

// Combo color (escalating intensity)
pub fn combo_color(combo: u32) -> Color {
    match combo {
        0..=2 => TEXT_COLOR,
        3..=5 => Color::Rgb(253, 253, 98),
        6..=9 => Color::Rgb(253, 178, 48),
        10..=14 => Color::Rgb(253, 78, 78),
        _ => Color::Rgb(253, 98, 253),
    }
}

// B2B chain color
pub fn b2b_color(chain: u32) -> Color {
    match chain {
        0..=2 => Color::Rgb(253, 198, 58),
        3..=5 => Color::Rgb(253, 158, 38),
        _ => Color::Rgb(253, 118, 198),
    }
}

// Styles
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Rgb(98, 178, 253))
        .add_modifier(Modifier::BOLD)
}

pub fn menu_item_style() -> Style {
    Style::default().fg(TEXT_COLOR)
}

pub fn menu_selected_style() -> Style {
    Style::default()
        .fg(Color::Rgb(98, 218, 253))
        .add_modifier(Modifier::BOLD)
}

pub fn menu_desc_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn header_style() -> Style {
    Style::default()
        .fg(TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn stat_label_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn stat_value_style() -> Style {
    Style::default()
        .fg(TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn danger_style() -> Style {
    Style::default()
        .fg(DANGER_COLOR)
        .add_modifier(Modifier::BOLD)
}

pub fn game_over_style() -> Style {
    Style::default()
        .fg(Color::Rgb(253, 58, 58))
        .add_modifier(Modifier::BOLD)
}
