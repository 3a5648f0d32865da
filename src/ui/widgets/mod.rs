pub mod action_text;
pub mod board;
pub mod garbage_bar;
pub mod hold_box;
pub mod next_queue;
pub mod sidebar;
