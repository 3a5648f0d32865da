pub mod effects;
pub mod layout;
pub mod screens;
pub mod theme;
pub mod widgets;
