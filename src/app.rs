use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::data::config::Config;
use crate::engine::board::VISIBLE_HEIGHT;
use crate::engine::versus::Match;
use crate::engine::PlayfieldEvent;
use crate::input::keybinds::AppAction;
use crate::input::{AppInput, InputHandler};
use crate::ui::effects::Effects;
use crate::ui::layout::{self, DuelLayout};
use crate::ui::screens::duel::DuelScreen;
use crate::ui::screens::game_over::GameOverScreen;
use crate::ui::screens::menu::{MenuChoice, MenuScreen};
use crate::ui::theme;

/// Top-level application state.
pub enum AppState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// The main application: menu flow around a two-player match.
pub struct App {
    pub state: AppState,
    pub menu: MenuScreen,
    pub duel: Option<Match>,
    pub input: InputHandler,
    pub config: Config,
    pub effects: [Effects; 2],
    pub frame: u64,
}

impl App {
    pub fn new(has_key_release: bool) -> Self {
        let config = Config::load();
        Self {
            state: AppState::Menu,
            menu: MenuScreen::new(),
            duel: None,
            input: InputHandler::new(has_key_release, &config),
            config,
            effects: [Effects::new(), Effects::new()],
            frame: 0,
        }
    }

    /// Process one frame. Returns false when the app should exit.
    pub fn update(&mut self, dt: Duration) -> bool {
        self.frame += 1;

        let inputs = self.input.poll();
        for input in inputs {
            if !self.handle_input(input) {
                return false;
            }
        }

        if let AppState::Playing = self.state {
            if let Some(duel) = &mut self.duel {
                for (player, action) in self.input.tick_das(dt) {
                    duel.apply_action(player, action);
                }

                duel.update(dt);

                for player in 0..2 {
                    let events = duel.board_mut(player).drain_events();
                    let effects = &mut self.effects[player];
                    for event in events {
                        match event {
                            PlayfieldEvent::PieceLocked => effects.trigger_lock(),
                            PlayfieldEvent::HardDrop { .. } => effects.trigger_hard_drop(),
                            PlayfieldEvent::LinesCleared(rows) => {
                                // Board rows to snapshot (top-first) rows.
                                let flash = rows
                                    .iter()
                                    .filter(|&&r| r < VISIBLE_HEIGHT)
                                    .map(|&r| VISIBLE_HEIGHT - 1 - r)
                                    .collect();
                                effects.trigger_line_clear(flash);
                                effects.trigger_action_text();
                            }
                            PlayfieldEvent::Spin(_)
                            | PlayfieldEvent::Combo(_)
                            | PlayfieldEvent::BackToBack(_) => effects.trigger_action_text(),
                            PlayfieldEvent::GarbageReceived(_) => {}
                            PlayfieldEvent::GameOver => {}
                        }
                    }
                    let danger = duel.board(player).is_danger();
                    self.effects[player].set_danger(danger);
                    self.effects[player].update(dt);
                }

                if duel.is_over() {
                    self.state = AppState::GameOver;
                    self.input.in_game = false;
                    self.input.reset_das();
                }
            }
        } else if let AppState::Menu = self.state {
            self.menu.frame = self.frame;
        }

        true
    }

    /// Handle one input event. Returns false to quit the app.
    fn handle_input(&mut self, input: AppInput) -> bool {
        match self.state {
            AppState::Menu => {
                if let AppInput::App(action) = input {
                    match action {
                        AppAction::MenuUp => self.menu.move_up(),
                        AppAction::MenuDown => self.menu.move_down(),
                        AppAction::MenuSelect => match self.menu.selected_choice() {
                            MenuChoice::Duel => self.start_duel(),
                            MenuChoice::Quit => return false,
                        },
                        AppAction::Quit | AppAction::MenuBack => return false,
                        _ => {}
                    }
                }
            }
            AppState::Playing => match input {
                AppInput::Player(player, action) => {
                    if let Some(duel) = &mut self.duel {
                        duel.apply_action(player, action);
                    }
                }
                AppInput::App(AppAction::Pause) => {
                    self.state = AppState::Paused;
                    self.input.in_game = false;
                    self.input.reset_das();
                }
                AppInput::App(AppAction::Restart) => self.start_duel(),
                _ => {}
            },
            AppState::Paused => {
                if let AppInput::App(action) = input {
                    match action {
                        AppAction::MenuBack => {
                            self.state = AppState::Playing;
                            self.input.in_game = true;
                        }
                        AppAction::Restart => self.start_duel(),
                        AppAction::Quit => self.to_menu(),
                        _ => {}
                    }
                }
            }
            AppState::GameOver => {
                if let AppInput::App(action) = input {
                    match action {
                        AppAction::MenuSelect | AppAction::Restart => self.start_duel(),
                        AppAction::MenuBack | AppAction::Quit => self.to_menu(),
                        _ => {}
                    }
                }
            }
        }
        true
    }

    fn start_duel(&mut self) {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut duel = Match::with_config(seed, self.config.match_config());
        duel.add_player();
        duel.add_player();
        self.duel = Some(duel);
        for effects in &mut self.effects {
            effects.reset();
        }
        self.state = AppState::Playing;
        self.input.in_game = true;
        self.input.reset_das();
    }

    fn to_menu(&mut self) {
        self.state = AppState::Menu;
        self.duel = None;
        self.input.in_game = false;
        self.input.reset_das();
    }

    /// Render the current frame.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Menu => (&self.menu).render(area, buf),
            AppState::Playing | AppState::Paused => self.render_duel(area, buf),
            AppState::GameOver => {
                if let Some(duel) = &self.duel {
                    GameOverScreen {
                        winner: duel.winner(),
                        stats: [&duel.board(0).stats, &duel.board(1).stats],
                        frame: self.frame,
                    }
                    .render(area, buf);
                }
            }
        }
    }

    fn render_duel(&self, area: Rect, buf: &mut Buffer) {
        let duel = match &self.duel {
            Some(d) => d,
            None => return,
        };
        if !layout::check_size(area) {
            self.render_size_error(area, buf);
            return;
        }
        let duel_layout = DuelLayout::new(area);
        DuelScreen {
            duel,
            effects: &self.effects,
            layout: &duel_layout,
            paused: matches!(self.state, AppState::Paused),
        }
        .render(area, buf);
    }

    fn render_size_error(&self, area: Rect, buf: &mut Buffer) {
        let msg = format!(
            "Terminal too small: {}x{} (need {}x{})",
            area.width,
            area.height,
            layout::MIN_WIDTH,
            layout::MIN_HEIGHT
        );
        let x = area.x + area.width.saturating_sub(msg.len() as u16) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(x, y, &msg, theme::danger_style());
    }
}
