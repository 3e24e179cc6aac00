//! Terminal rendering for the demo modal.
//!
//! ```text
//! ┌ Network ─────────┐┌ Balance ─┐┌ Account ──────┐
//! └──────────────────┘└──────────┘└───────────────┘
//! ┌ Wallets ─┐┌ <route title> ──────────────────────┐
//! │          ││ wallet, route, URI, history, status │
//! └──────────┘└─────────────────────────────────────┘
//!  key hints                              [toast]
//! ```

pub mod components;
pub mod footer;
pub mod helpers;
pub mod panels;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::app::App;
use crate::constants::DEFAULT_TRUNCATE_LEN;
use crate::theme::MUTED_COLOR;
use crate::util::truncate;

use components::render_toast;
use helpers::create_border_block;

pub const HEADER_HEIGHT: u16 = 3;

/// Renders the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);
    panels::render_wallet_list(app, frame, body[0]);
    panels::render_route_panel(app, frame, body[1]);

    footer::render(frame, chunks[2]);

    render_toast(frame, frame.area(), &app.ctx.toast.state());
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .split(area);

    match &app.network_switch {
        Some(switch) => switch.render(frame, columns[0], app.ctx.modal.state().open),
        None => {
            let standalone = Paragraph::new("Standalone")
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center)
                .block(create_border_block("Network", false));
            frame.render_widget(standalone, columns[0]);
        }
    }

    app.balance.render(frame, columns[1]);

    let address = app
        .ctx
        .account
        .state()
        .address
        .map_or_else(|| "Not connected".to_string(), |a| truncate(&a, DEFAULT_TRUNCATE_LEN));
    let account = Paragraph::new(address)
        .alignment(Alignment::Center)
        .block(create_border_block("Account", false));
    frame.render_widget(account, columns[2]);
}
