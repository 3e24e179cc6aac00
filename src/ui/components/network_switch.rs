//! Network switch button.
//!
//! Shows the selected chain and opens the network picker on click. The label
//! tracks [`OptionsCtrl`](crate::state::OptionsCtrl) through a subscription
//! held for the component's lifetime.

use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::constants::{NETWORK_BUTTON_EVENT, SELECT_NETWORK_LABEL, WRONG_NETWORK_LABEL};
use crate::context::ModalContext;
use crate::domain::{RouterView, Result, is_known_chain};
use crate::state::{OptionsState, Subscription};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_border_block;
use crate::util::reject_standalone_button_component;

/// What the switch displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkSwitchView {
    /// Selected chain id, as text.
    pub chain_id: Option<String>,
    /// Chain name, or "Wrong Network" for an unsupported chain.
    pub label: Option<String>,
    /// Whether the selected chain is missing from the supported chains.
    pub wrong_network: bool,
}

impl NetworkSwitchView {
    fn apply(&mut self, options: &OptionsState) {
        // Without a selected chain the previous values stay.
        let Some(chain) = &options.selected_chain else {
            return;
        };
        self.chain_id = Some(chain.id.to_string());
        self.wrong_network = !is_known_chain(options.chains.as_deref(), chain.id);
        self.label = Some(if self.wrong_network {
            WRONG_NETWORK_LABEL.to_string()
        } else {
            chain.name.clone()
        });
    }

    /// Label to render, falling back to "Select Network".
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => SELECT_NETWORK_LABEL,
        }
    }
}

/// Network switch bound to a [`ModalContext`].
#[derive(Debug)]
pub struct NetworkSwitch {
    ctx: ModalContext,
    view: Arc<Mutex<NetworkSwitchView>>,
    _subscription: Subscription,
}

impl NetworkSwitch {
    /// Creates the switch.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ModalError::StandaloneMode`] in standalone mode.
    pub fn new(ctx: &ModalContext) -> Result<Self> {
        reject_standalone_button_component(ctx)?;

        let view = Arc::new(Mutex::new(NetworkSwitchView::default()));
        view.lock().apply(&ctx.options.state());

        let subscription = ctx.options.subscribe({
            let view = Arc::clone(&view);
            move |options| view.lock().apply(options)
        });

        Ok(Self {
            ctx: ctx.clone(),
            view,
            _subscription: subscription,
        })
    }

    /// Current view.
    #[must_use]
    pub fn view(&self) -> NetworkSwitchView {
        self.view.lock().clone()
    }

    /// Disabled unless more than one chain is supported.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        !self.ctx.options.state().is_multichain()
    }

    /// Records the click and opens the modal at the network picker.
    ///
    /// # Returns
    ///
    /// `false` when the switch is disabled and nothing happened.
    pub fn on_click(&self) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.ctx.events.click(NETWORK_BUTTON_EVENT);
        self.ctx.modal.open(Some(RouterView::SelectNetwork));
        true
    }

    /// Renders the switch as a bordered button.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let view = self.view();
        let style = if self.is_disabled() {
            Style::default().fg(MUTED_COLOR)
        } else if view.wrong_network {
            Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD)
        };

        let text = match &view.chain_id {
            Some(id) => format!("● {} ({id})", view.display_label()),
            None => view.display_label().to_string(),
        };

        let button = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(create_border_block("Network", focused));
        frame.render_widget(button, area);
    }
}
