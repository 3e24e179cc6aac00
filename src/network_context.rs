//! Network synchronizer.
//!
//! Keeps the selected chain in [`OptionsCtrl`](crate::state::OptionsCtrl)
//! aligned with the chain the wallet-connection client reports. The client is
//! authoritative: a reported chain that differs from the cached one overwrites
//! the selection, clears the balance and triggers a refetch on the runtime.
//!
//! The watch is owned by [`NetworkContext`]; dropping it (or calling
//! [`NetworkContext::unwatch`]) stops all further writes.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;

use crate::client::{NetworkChange, NetworkWatch};
use crate::context::ModalContext;
use crate::domain::{ModalError, Result};
use crate::state::ToastVariant;
use crate::util::get_error_message;

/// Owner of the network-change watch.
#[derive(Debug)]
pub struct NetworkContext {
    active_chain_id: Arc<Mutex<Option<u64>>>,
    watch: NetworkWatch,
}

impl NetworkContext {
    /// Starts synchronizing on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::Runtime`] when called outside a tokio runtime.
    /// Nothing is watched in that case.
    pub fn new(ctx: &ModalContext) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| ModalError::Runtime(e.to_string()))?;
        Ok(Self::with_runtime(ctx, runtime))
    }

    /// Starts synchronizing, spawning balance fetches on `runtime`.
    #[must_use]
    pub fn with_runtime(ctx: &ModalContext, runtime: Handle) -> Self {
        let active_chain_id = Arc::new(Mutex::new(ctx.options.get_selected_chain().map(|c| c.id)));

        let callback = {
            let ctx = ctx.clone();
            let active = Arc::clone(&active_chain_id);
            move |change: &NetworkChange| on_network_change(&ctx, &runtime, &active, change)
        };
        let watch = ctx.client().watch_network(Box::new(callback));

        Self {
            active_chain_id,
            watch,
        }
    }

    /// Chain id the synchronizer last reconciled to.
    #[must_use]
    pub fn active_chain_id(&self) -> Option<u64> {
        *self.active_chain_id.lock()
    }

    /// Returns `true` while the watch is held.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.watch.is_active()
    }

    /// Releases the watch now.
    pub fn unwatch(self) {
        self.watch.unsubscribe();
    }
}

fn on_network_change(
    ctx: &ModalContext,
    runtime: &Handle,
    active: &Arc<Mutex<Option<u64>>>,
    change: &NetworkChange,
) {
    let Some(chain) = change.chain.clone() else {
        return;
    };

    // Updated before the reset; in-flight fetches check it under the same lock.
    {
        let mut active_id = active.lock();
        if *active_id == Some(chain.id) {
            return;
        }
        *active_id = Some(chain.id);
    }

    tracing::info!(chain_id = chain.id, chain = %chain.name, "wallet network changed");
    ctx.options.set_selected_chain(chain.clone());
    ctx.account.reset_balance();
    spawn_balance_fetch(ctx, runtime, Arc::clone(active), chain.id);
}

fn spawn_balance_fetch(ctx: &ModalContext, runtime: &Handle, active: Arc<Mutex<Option<u64>>>, chain_id: u64) {
    if !ctx.config.enable_account_view() {
        return;
    }

    let ctx = ctx.clone();
    runtime.spawn(async move {
        if let Err(err) = ctx.account.fetch_balance(ctx.client(), chain_id, &active).await {
            tracing::error!(chain_id, "balance fetch failed: {err}");
            ctx.toast
                .open_toast(get_error_message(&err), ToastVariant::Error);
        }
    });
}
