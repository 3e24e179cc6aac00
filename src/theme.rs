//! Colors and styles for the modal front-end.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Colors
// ============================================================================

/// Accent for focused elements and the selected chain.
pub const PRIMARY_COLOR: Color = Color::Cyan;

pub const SUCCESS_COLOR: Color = Color::Green;

/// In-progress connection states.
pub const WARNING_COLOR: Color = Color::Yellow;

pub const ERROR_COLOR: Color = Color::Red;

/// Placeholders and disabled controls.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Styles
// ============================================================================

pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Highlighted row in the wallet list.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Key hints in the footer.
pub const KEY_HINT_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);
