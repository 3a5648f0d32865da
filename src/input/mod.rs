pub mod das;
pub mod keybinds;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use self::das::DasHandler;
use self::keybinds::{AppAction, PlayerKeys};
use crate::data::config::Config;
use crate::engine::PlayerAction;

/// One resolved input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Player(usize, PlayerAction),
    App(AppAction),
}

/// Polls crossterm events and maps them onto the two players' key clusters,
/// with per-player DAS auto-shift when the terminal reports key releases.
pub struct InputHandler {
    players: [PlayerKeys; 2],
    das: [DasHandler; 2],
    /// Game mode (DAS live) vs menu mode.
    pub in_game: bool,
    /// Kitty-style key release support; without it DAS is off and terminal
    /// auto-repeat drives held keys.
    pub has_key_release: bool,
}

impl InputHandler {
    pub fn new(has_key_release: bool, config: &Config) -> Self {
        let das = Duration::from_millis(config.das_delay_ms);
        let arr = Duration::from_millis(config.arr_delay_ms);
        let sd_arr = Duration::from_millis(config.sd_arr_delay_ms);
        Self {
            players: [keybinds::player_one_keys(), keybinds::player_two_keys()],
            das: [
                DasHandler::new(das, arr, sd_arr),
                DasHandler::new(das, arr, sd_arr),
            ],
            in_game: false,
            has_key_release,
        }
    }

    pub fn player_keys(&self, player: usize) -> &PlayerKeys {
        &self.players[player]
    }

    /// Drain all pending terminal events. Call once per frame.
    pub fn poll(&mut self) -> Vec<AppInput> {
        let mut inputs = Vec::new();
        while let Ok(true) = event::poll(Duration::ZERO) {
            if let Ok(Event::Key(key_event)) = event::read() {
                if let Some(input) = self.process_key(key_event) {
                    inputs.push(input);
                }
            }
        }
        inputs
    }

    /// Auto-shift repeats for both players. Call once per frame after poll.
    pub fn tick_das(&mut self, dt: Duration) -> Vec<(usize, PlayerAction)> {
        if !self.in_game || !self.has_key_release {
            return Vec::new();
        }
        let mut actions = Vec::new();
        for (player, das) in self.das.iter_mut().enumerate() {
            let (left, right, soft) = das.tick(dt);
            for _ in 0..left {
                actions.push((player, PlayerAction::MoveLeft));
            }
            for _ in 0..right {
                actions.push((player, PlayerAction::MoveRight));
            }
            for _ in 0..soft {
                actions.push((player, PlayerAction::SoftDrop));
            }
        }
        actions
    }

    pub fn reset_das(&mut self) {
        for das in &mut self.das {
            das.reset();
        }
    }

    fn process_key(&mut self, key_event: KeyEvent) -> Option<AppInput> {
        if self.in_game {
            self.process_game_key(key_event.code, key_event.kind)
        } else if key_event.kind == KeyEventKind::Press {
            keybinds::resolve_menu(key_event.code).map(AppInput::App)
        } else {
            None
        }
    }

    fn process_game_key(&mut self, code: KeyCode, kind: KeyEventKind) -> Option<AppInput> {
        if kind == KeyEventKind::Press {
            if let Some(action) = keybinds::resolve_game_global(code) {
                return Some(AppInput::App(action));
            }
        }
        let (player, action) = self.resolve_player(code)?;
        if self.has_key_release {
            self.process_with_release(player, action, kind)
        } else {
            self.process_without_release(player, action, kind)
        }
    }

    fn resolve_player(&self, code: KeyCode) -> Option<(usize, PlayerAction)> {
        for (player, keys) in self.players.iter().enumerate() {
            if let Some(action) = keys.resolve(code) {
                return Some((player, action));
            }
        }
        None
    }

    /// Press/release tracking drives DAS; repeats from the terminal are
    /// ignored.
    fn process_with_release(
        &mut self,
        player: usize,
        action: PlayerAction,
        kind: KeyEventKind,
    ) -> Option<AppInput> {
        let das = &mut self.das[player];
        match kind {
            KeyEventKind::Press => {
                match action {
                    PlayerAction::MoveLeft => {
                        das.right.release();
                        das.left.press();
                    }
                    PlayerAction::MoveRight => {
                        das.left.release();
                        das.right.press();
                    }
                    PlayerAction::SoftDrop => das.soft_drop.press(),
                    _ => {}
                }
                Some(AppInput::Player(player, action))
            }
            KeyEventKind::Release => {
                match action {
                    PlayerAction::MoveLeft => das.left.release(),
                    PlayerAction::MoveRight => das.right.release(),
                    PlayerAction::SoftDrop => das.soft_drop.release(),
                    _ => {}
                }
                None
            }
            _ => None,
        }
    }

    /// Without release events every press/repeat is a single action, except
    /// for hard drop and hold which only fire on the initial press.
    fn process_without_release(
        &mut self,
        player: usize,
        action: PlayerAction,
        kind: KeyEventKind,
    ) -> Option<AppInput> {
        match kind {
            KeyEventKind::Press => Some(AppInput::Player(player, action)),
            KeyEventKind::Repeat => match action {
                PlayerAction::HardDrop | PlayerAction::Hold => None,
                _ => Some(AppInput::Player(player, action)),
            },
            _ => None,
        }
    }
}
