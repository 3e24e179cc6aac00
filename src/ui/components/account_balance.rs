//! Account balance display.

use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::constants::BALANCE_PLACEHOLDER;
use crate::context::ModalContext;
use crate::domain::Balance;
use crate::state::Subscription;
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::create_border_block;

/// Balance of the connected account, kept current through a subscription.
#[derive(Debug)]
pub struct AccountBalance {
    balance: Arc<Mutex<Option<Balance>>>,
    _subscription: Subscription,
}

impl AccountBalance {
    #[must_use]
    pub fn new(ctx: &ModalContext) -> Self {
        let balance = Arc::new(Mutex::new(ctx.account.state().balance));
        let subscription = ctx.account.subscribe({
            let balance = Arc::clone(&balance);
            move |account| *balance.lock() = account.balance.clone()
        });

        Self {
            balance,
            _subscription: subscription,
        }
    }

    /// `amount symbol`, or `_._` while the balance is unknown.
    #[must_use]
    pub fn text(&self) -> String {
        self.balance
            .lock()
            .as_ref()
            .map_or_else(|| BALANCE_PLACEHOLDER.to_string(), ToString::to_string)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = if self.balance.lock().is_some() {
            SUCCESS_COLOR
        } else {
            MUTED_COLOR
        };
        let paragraph = Paragraph::new(self.text())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(create_border_block("Balance", false));
        frame.render_widget(paragraph, area);
    }
}
