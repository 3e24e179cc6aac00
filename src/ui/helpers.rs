//! Styled block helpers.

use ratatui::{
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

/// Bordered block whose style follows the focus state.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let display_title = if title.is_empty() {
        String::new()
    } else if focused {
        format!(" ● {title} ")
    } else {
        format!(" {title} ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(display_title);

    if focused {
        block
            .title_style(FOCUSED_TITLE_STYLE)
            .border_set(border::DOUBLE)
            .border_style(FOCUSED_BORDER_STYLE)
    } else {
        block
            .title_style(Style::new().fg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .border_set(border::ROUNDED)
            .border_style(BORDER_STYLE)
    }
}
