//! Demo front-end state.
//!
//! [`App`] wires the modal controllers to a wallet list and turns
//! [`Action`]s into router pushes, deep-link dispatches and network switches
//! on the [`LocalClient`].

use ratatui::widgets::ListState;
use tokio::runtime::Handle;

use crate::client::LocalClient;
use crate::context::ModalContext;
use crate::domain::{Balance, ModalError, Result, RouterView, WalletData, WalletLinks};
use crate::event::Action;
use crate::linking::{LinkOutcome, dispatch_for_route, handle_connector_connection, handle_uri_copy};
use crate::network_context::NetworkContext;
use crate::routing::{ConnectionRoute, goto_connecting_view};
use crate::state::ToastVariant;
use crate::ui::components::{AccountBalance, NetworkSwitch};
use crate::util::{get_error_message, truncate};

/// Address the demo account is connected with.
pub const DEMO_ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

/// Pairing URI the demo connection advertises.
pub const DEMO_PAIRING_URI: &str =
    "wc:7f6e504bfad60b485450578e05678ed3e8e8c4751d3c6160be17160d63ec90f9@2?relay-protocol=irn&symKey=587d5484ce2a2a6ee3ba1962fdd7e8588e06200c46823bd18fbd67def96ad303";

/// Wallets listed when the configuration has none.
#[must_use]
pub fn demo_wallets() -> Vec<WalletData> {
    vec![
        WalletData::new("rainbow", "Rainbow Wallet")
            .with_image_id("7a33d7f1-3d12-4b5c-f3ee-5cd83cb1b500")
            .with_mobile(WalletLinks::native("rainbow:").with_universal("https://rnbwapp.com"))
            .with_desktop(WalletLinks::native("rainbow-desktop://")),
        WalletData::new("trust", "Trust Wallet")
            .with_image_id("0528ee7e-16d1-4089-21e3-bbfb41933100")
            .with_mobile(WalletLinks::native("trust:").with_universal("https://link.trustwallet.com")),
        WalletData::new("ledger", "Ledger Live")
            .with_image_id("a7f416de-aa03-4c5e-3280-ab49269aef00")
            .with_desktop(WalletLinks::native("ledgerlive:")),
        WalletData::new("coinbase", "Coinbase Wallet")
            .with_image_id("a5ebc364-8f91-4200-fcc6-be81310a0000")
            .with_desktop(WalletLinks::universal("https://go.cb-w.com")),
        WalletData::new("frame", "Frame"),
    ]
}

/// Balances the local client reports, one per default chain.
fn demo_balances() -> [(u64, Balance); 3] {
    [
        (1, Balance::new("1.284301", "ETH")),
        (137, Balance::new("420.5", "MATIC")),
        (10, Balance::new("0.031", "ETH")),
    ]
}

/// Connects the demo account and scripts the local client.
///
/// In standalone mode no pairing URI is set; the standalone URI is used.
pub fn seed_demo(ctx: &ModalContext, client: &LocalClient) {
    for (chain_id, balance) in demo_balances() {
        client.set_balance(chain_id, balance);
    }
    ctx.account.set_address(Some(DEMO_ADDRESS.to_string()));
    if !ctx.options.state().is_standalone {
        ctx.connection.set_pairing_uri(DEMO_PAIRING_URI);
    }
}

/// Demo application state.
#[derive(Debug)]
pub struct App {
    pub ctx: ModalContext,
    pub client: LocalClient,
    pub wallets: Vec<WalletData>,
    pub wallet_state: ListState,
    /// Absent in standalone mode.
    pub network_switch: Option<NetworkSwitch>,
    pub balance: AccountBalance,
    /// Route taken by the last [`Action::Connect`].
    pub route: Option<ConnectionRoute>,
    /// Result of the last dispatch, shown in the route panel.
    pub status: Option<String>,
    pub exit: bool,
    runtime: Handle,
    network: NetworkContext,
}

impl App {
    /// Creates the app on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::Runtime`] outside a tokio runtime.
    pub fn new(ctx: ModalContext, client: LocalClient) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| ModalError::Runtime(e.to_string()))?;

        let configured = ctx.config.state().wallets;
        let wallets = if configured.is_empty() {
            demo_wallets()
        } else {
            configured
        };

        let network_switch = match NetworkSwitch::new(&ctx) {
            Ok(switch) => Some(switch),
            Err(err) => {
                tracing::info!("network switch unavailable: {err}");
                None
            }
        };
        let balance = AccountBalance::new(&ctx);
        let network = NetworkContext::with_runtime(&ctx, runtime.clone());

        let mut wallet_state = ListState::default();
        if !wallets.is_empty() {
            wallet_state.select(Some(0));
        }

        Ok(Self {
            ctx,
            client,
            wallets,
            wallet_state,
            network_switch,
            balance,
            route: None,
            status: None,
            exit: false,
            runtime,
            network,
        })
    }

    /// Wallet under the list cursor.
    #[must_use]
    pub fn selected_wallet(&self) -> Option<&WalletData> {
        self.wallet_state.selected().and_then(|i| self.wallets.get(i))
    }

    /// Chain the network synchronizer last reconciled to.
    #[must_use]
    pub fn active_chain_id(&self) -> Option<u64> {
        self.network.active_chain_id()
    }

    /// Applies `action`.
    ///
    /// # Errors
    ///
    /// Returns the error of the dispatch or copy that ran.
    pub fn update(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.exit = true,
            Action::SelectNext => self.move_selection(1),
            Action::SelectPrev => self.move_selection(-1),
            Action::Connect => self.connect(),
            Action::DeepLink => self.deep_link()?,
            Action::CopyUri => {
                let outcome = handle_uri_copy(&self.ctx)?;
                self.record(&outcome);
            }
            Action::SimulateNetworkSwitch => self.switch_network(),
            Action::Back => self.back(),
            Action::OpenNetworkSelector => self.open_network_selector(),
            Action::ConnectConnector => self.connect_connector(),
            Action::Tick => {
                self.ctx.toast.tick();
            }
        }
        Ok(())
    }

    /// Shows `err` as an error toast.
    pub fn report_error(&self, err: &ModalError) {
        tracing::warn!("action failed: {err}");
        self.ctx
            .toast
            .open_toast(get_error_message(err), ToastVariant::Error);
    }

    fn move_selection(&mut self, delta: isize) {
        if self.wallets.is_empty() {
            return;
        }
        let len = self.wallets.len();
        let current = self.wallet_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.wallet_state.select(Some(next));
    }

    fn connect(&mut self) {
        let Some(wallet) = self.selected_wallet().cloned() else {
            return;
        };
        let route = goto_connecting_view(&self.ctx, wallet);
        self.route = Some(route);
        self.status = None;
    }

    fn back(&mut self) {
        self.ctx.router.go_back();
        if self.ctx.router.view() == RouterView::ConnectWallet {
            self.route = None;
            self.status = None;
        }
    }

    fn deep_link(&mut self) -> Result<()> {
        if self.route.is_none() {
            self.connect();
        }
        let wallet = self
            .ctx
            .router
            .state()
            .data
            .and_then(|data| data.wallet)
            .or_else(|| self.selected_wallet().cloned());
        let (Some(route), Some(wallet)) = (self.route, wallet) else {
            return Ok(());
        };

        let outcome = dispatch_for_route(&self.ctx, route, &wallet)?;
        self.record(&outcome);
        Ok(())
    }

    fn record(&mut self, outcome: &LinkOutcome) {
        self.status = Some(match outcome {
            LinkOutcome::Opened(href) => format!("Opened {}", truncate(href, 48)),
            LinkOutcome::Copied => "Copied pairing URI".to_string(),
            LinkOutcome::Skipped => "No link for this wallet".to_string(),
        });
    }

    fn switch_network(&self) {
        if let Some(chain) = self.client.next_chain() {
            self.client.switch_network(chain);
        }
    }

    fn open_network_selector(&self) {
        let opened = self
            .network_switch
            .as_ref()
            .is_some_and(NetworkSwitch::on_click);
        if !opened {
            tracing::debug!("network switch disabled");
        }
    }

    fn connect_connector(&self) {
        let Some(wallet) = self.selected_wallet() else {
            return;
        };
        let ctx = self.ctx.clone();
        let connector_id = wallet.id.clone();
        self.runtime.spawn(async move {
            handle_connector_connection(&ctx, &connector_id, None).await;
        });
    }
}
