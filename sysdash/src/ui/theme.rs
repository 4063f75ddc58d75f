//! Shared UI theme constants.

use ratatui::style::{Color, Modifier, Style};

pub const HEADER: Style = Style::new().fg(Color::Indexed(39)).add_modifier(Modifier::BOLD);
pub const VALUE: Style = Style::new().fg(Color::Indexed(15));
pub const MUTED: Style = Style::new().fg(Color::Indexed(240));

pub const TAB_ACTIVE: Style = Style::new()
    .fg(Color::Indexed(212))
    .bg(Color::Indexed(236))
    .add_modifier(Modifier::BOLD);
pub const TAB_INACTIVE: Style = MUTED;

// Per-metric accents
pub const CPU: Style = Style::new().fg(Color::Indexed(46));
pub const MEM: Style = Style::new().fg(Color::Indexed(196));
pub const DISK: Style = Style::new().fg(Color::Indexed(208));
pub const NET: Style = Style::new().fg(Color::Indexed(33));
pub const PROC: Style = Style::new().fg(Color::Indexed(141));
