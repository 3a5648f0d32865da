pub mod duel;
pub mod game_over;
pub mod menu;
