//! Key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::{KEY_HINT_STYLE, MUTED_COLOR};

const KEY_HINTS: [(&str, &str); 8] = [
    ("q", "Quit"),
    ("Enter", "Connect"),
    ("l", "Link"),
    ("c", "Copy"),
    ("n", "Switch"),
    ("s", "Network"),
    ("x", "Inject"),
    ("b", "Back"),
];

/// Renders the key hints centered in `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = KEY_HINTS
        .iter()
        .enumerate()
        .flat_map(|(i, (key, label))| {
            let separator = if i == 0 { "" } else { "  " };
            [
                Span::raw(separator),
                Span::styled(*key, KEY_HINT_STYLE),
                Span::styled(format!(":{label}"), Style::default().fg(MUTED_COLOR)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
