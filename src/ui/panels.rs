//! Wallet list and route panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use crate::app::App;
use crate::routing::{ConnectionRoute, WalletPlatforms};
use crate::theme::{ERROR_COLOR, HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::util::{get_wallet_icon, get_wallet_name, truncate};

use super::helpers::create_border_block;

const URI_DISPLAY_LEN: usize = 24;

/// Renders the selectable wallet list. Names are shortened on mobile devices.
pub fn render_wallet_list(app: &App, frame: &mut Frame, area: Rect) {
    let short = app.ctx.device().is_mobile();
    let items: Vec<ListItem> = app
        .wallets
        .iter()
        .map(|wallet| {
            let platforms = WalletPlatforms::from_wallet(wallet);
            ListItem::new(Line::from(vec![
                Span::raw(get_wallet_name(&wallet.name, short).to_string()),
                Span::styled(
                    format!(" {}", platform_badges(platforms)),
                    Style::default().fg(MUTED_COLOR),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(create_border_block("Wallets", !app.ctx.modal.state().open))
        .highlight_style(HIGHLIGHT_STYLE)
        .highlight_symbol("▶ ");

    let mut state = app.wallet_state.clone();
    frame.render_stateful_widget(list, area, &mut state);
}

fn platform_badges(platforms: WalletPlatforms) -> String {
    [
        (platforms.is_mobile, "M"),
        (platforms.is_desktop, "D"),
        (platforms.is_web, "W"),
    ]
    .iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, badge)| *badge)
    .collect::<Vec<_>>()
    .join("")
}

/// Renders the current view with the pending wallet and session details.
pub fn render_route_panel(app: &App, frame: &mut Frame, area: Rect) {
    let router = app.ctx.router.state();
    let label = Style::default().fg(MUTED_COLOR);
    let mut lines = Vec::new();

    match router.data.as_ref().and_then(|data| data.wallet.as_ref()) {
        Some(wallet) => {
            lines.push(Line::from(vec![
                Span::styled("Wallet  ", label),
                Span::styled(
                    wallet.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            let icon = get_wallet_icon(&app.ctx, wallet);
            lines.push(Line::from(vec![
                Span::styled("Icon    ", label),
                Span::raw(if icon.is_empty() { "-".to_string() } else { icon }),
            ]));
        }
        None => lines.push(Line::styled("Select a wallet and press Enter", label)),
    }

    if let Some(route) = app.route {
        lines.push(Line::from(vec![
            Span::styled("Route   ", label),
            Span::styled(format!("{route:?}"), Style::default().fg(route_color(route))),
        ]));
    }

    let options = app.ctx.options.state();
    let uri = options
        .standalone_uri
        .or_else(|| app.ctx.connection.state().pairing_uri);
    lines.push(Line::from(vec![
        Span::styled("URI     ", label),
        match uri {
            Some(uri) => Span::raw(truncate(&uri, URI_DISPLAY_LEN)),
            None => Span::styled("Not connected", Style::default().fg(ERROR_COLOR)),
        },
    ]));

    let history = router
        .history
        .iter()
        .map(|view| view.title())
        .collect::<Vec<_>>()
        .join(" › ");
    lines.push(Line::from(vec![Span::styled("History ", label), Span::raw(history)]));

    if let Some(status) = &app.status {
        lines.push(Line::default());
        lines.push(Line::styled(status.clone(), Style::default().fg(SUCCESS_COLOR)));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(create_border_block(router.view.title(), app.ctx.modal.state().open));
    frame.render_widget(panel, area);
}

const fn route_color(route: ConnectionRoute) -> ratatui::style::Color {
    match route {
        ConnectionRoute::InstallWallet => ERROR_COLOR,
        ConnectionRoute::MobileQrcodeConnecting => WARNING_COLOR,
        _ => PRIMARY_COLOR,
    }
}
