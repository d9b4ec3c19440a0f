//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Alert, App, Message, MessageStyle, run_tui};
pub use rendering::{letter_tiles, ui};
