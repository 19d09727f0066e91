use std::time::Duration;

use ratatui::style::Color;

pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub const TITLE_SEARCH: &str = "Search";
pub const TITLE_TABS: &str = "Pokédex";
pub const TITLE_DETAIL: &str = "Details";
pub const TAB_LABELS: [&str; 2] = ["First half", "Second half"];

pub const HELP_TEXT: &str =
    "←/→ tabs  ↑/↓ move  Enter select  Ctrl-G genus  Backspace erase  Esc quit";

pub const ACCENT: Color = Color::Yellow;
