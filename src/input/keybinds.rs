use crossterm::event::KeyCode;

use crate::engine::PlayerAction;

/// App-level actions shared by both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Pause,
    Quit,
    Restart,
    MenuUp,
    MenuDown,
    MenuSelect,
    MenuBack,
}

/// Key map for one player's game controls.
#[derive(Debug, Clone)]
pub struct PlayerKeys {
    binds: Vec<(PlayerAction, &'static [KeyCode])>,
}

impl PlayerKeys {
    pub fn resolve(&self, key: KeyCode) -> Option<PlayerAction> {
        self.binds
            .iter()
            .find(|(_, keys)| keys.contains(&key))
            .map(|(action, _)| *action)
    }

    /// Display string for the primary key of an action.
    pub fn key_display(&self, action: PlayerAction) -> String {
        self.binds
            .iter()
            .find(|(a, _)| *a == action)
            .and_then(|(_, keys)| keys.first())
            .map(|&k| format_key(k))
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Left-hand cluster: WASD movement, Q/E rotation.
pub fn player_one_keys() -> PlayerKeys {
    use KeyCode::Char;
    PlayerKeys {
        binds: vec![
            (PlayerAction::MoveLeft, &[Char('a')]),
            (PlayerAction::MoveRight, &[Char('d')]),
            (PlayerAction::SoftDrop, &[Char('s')]),
            (PlayerAction::HardDrop, &[Char('w')]),
            (PlayerAction::RotateCcw, &[Char('q')]),
            (PlayerAction::RotateCw, &[Char('e')]),
            (PlayerAction::Rotate180, &[Char('x')]),
            (PlayerAction::Hold, &[Char('c')]),
        ],
    }
}

/// Right-hand cluster: arrows plus the ,./ row.
pub fn player_two_keys() -> PlayerKeys {
    use KeyCode::Char;
    PlayerKeys {
        binds: vec![
            (PlayerAction::MoveLeft, &[KeyCode::Left]),
            (PlayerAction::MoveRight, &[KeyCode::Right]),
            (PlayerAction::SoftDrop, &[KeyCode::Down]),
            (PlayerAction::HardDrop, &[KeyCode::Up]),
            (PlayerAction::RotateCcw, &[Char(',')]),
            (PlayerAction::RotateCw, &[Char('.')]),
            (PlayerAction::Rotate180, &[Char('/')]),
            (PlayerAction::Hold, &[Char('m')]),
        ],
    }
}

/// App-level keys during play.
pub fn resolve_game_global(key: KeyCode) -> Option<AppAction> {
    match key {
        KeyCode::Esc | KeyCode::Char('p') => Some(AppAction::Pause),
        KeyCode::Char('r') => Some(AppAction::Restart),
        _ => None,
    }
}

/// App-level keys in menus and overlays.
pub fn resolve_menu(key: KeyCode) -> Option<AppAction> {
    match key {
        KeyCode::Char('k') | KeyCode::Up => Some(AppAction::MenuUp),
        KeyCode::Char('j') | KeyCode::Down => Some(AppAction::MenuDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppAction::MenuSelect),
        KeyCode::Esc => Some(AppAction::MenuBack),
        KeyCode::Char('q') => Some(AppAction::Quit),
        KeyCode::Char('r') => Some(AppAction::Restart),
        _ => None,
    }
}

/// Format a key code for display.
pub fn format_key(key: KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        _ => "?".to_string(),
    }
}
