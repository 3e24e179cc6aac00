//! Transient user notifications.
//!
//! Only the trigger contract lives here; rendering is done by
//! `ui::components::toast`. A toast stays up for a number of UI ticks.

use super::store::{Store, Subscription};

/// Ticks a toast stays visible by default.
pub const DEFAULT_TOAST_TICKS: u8 = 30;

/// Toast severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    /// Confirmation (e.g. "Link copied").
    #[default]
    Success,
    /// Recoverable failure.
    Error,
}

/// Toast state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    /// Whether a toast is showing.
    pub open: bool,
    /// Message text.
    pub message: String,
    /// Severity.
    pub variant: ToastVariant,
    /// Remaining ticks before auto-dismiss.
    pub remaining_ticks: u8,
}

/// Controller for [`ToastState`].
#[derive(Debug, Clone, Default)]
pub struct ToastCtrl {
    store: Store<ToastState>,
}

impl ToastCtrl {
    /// Creates a controller with no toast.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> ToastState {
        self.store.state()
    }

    /// Subscribes to toast changes.
    pub fn subscribe(&self, listener: impl Fn(&ToastState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Shows a toast, replacing any current one.
    pub fn open_toast(&self, message: impl Into<String>, variant: ToastVariant) {
        self.store.set(ToastState {
            open: true,
            message: message.into(),
            variant,
            remaining_ticks: DEFAULT_TOAST_TICKS,
        });
    }

    /// Hides the current toast.
    pub fn close_toast(&self) {
        self.store.update(|s| {
            s.open = false;
            s.remaining_ticks = 0;
        });
    }

    /// Decrements the countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was dismissed on this tick.
    pub fn tick(&self) -> bool {
        let expired = self.store.with(|s| s.open && s.remaining_ticks <= 1);
        if expired {
            self.close_toast();
            return true;
        }
        if self.store.with(|s| s.open) {
            self.store.update(|s| s.remaining_ticks -= 1);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let toast = ToastCtrl::new();
        assert!(!toast.state().open);

        toast.open_toast("Link copied", ToastVariant::Success);
        let state = toast.state();
        assert!(state.open);
        assert_eq!(state.message, "Link copied");
        assert_eq!(state.remaining_ticks, DEFAULT_TOAST_TICKS);

        toast.close_toast();
        assert!(!toast.state().open);
    }

    #[test]
    fn test_tick_dismisses_after_countdown() {
        let toast = ToastCtrl::new();
        toast.open_toast("Oops", ToastVariant::Error);
        for _ in 0..DEFAULT_TOAST_TICKS - 1 {
            assert!(!toast.tick());
        }
        assert!(toast.tick());
        assert!(!toast.state().open);
        assert!(!toast.tick());
    }
}
