//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner, colored by variant.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::{ToastState, ToastVariant};
use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
const TOAST_PADDING_RIGHT: u16 = 2;
const TOAST_PADDING_BOTTOM: u16 = 2;
/// Borders plus one space either side.
const TOAST_WIDTH_PADDING: u16 = 4;

/// Renders `toast` if it is open.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &ToastState) {
    if !toast.open {
        return;
    }

    let toast_area = calculate_toast_position(area, &toast.message);
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(variant_color(toast.variant)))
        .style(Style::default().bg(Color::Black));
    let inner_area = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let text = Paragraph::new(toast.message.as_str())
        .style(Style::default().fg(variant_color(toast.variant)))
        .alignment(Alignment::Center);
    frame.render_widget(text, inner_area);
}

#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let toast_width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y + area.height.saturating_sub(TOAST_HEIGHT + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, TOAST_HEIGHT.min(area.height))
}

#[must_use]
const fn variant_color(variant: ToastVariant) -> Color {
    match variant {
        ToastVariant::Success => SUCCESS_COLOR,
        ToastVariant::Error => ERROR_COLOR,
    }
}
