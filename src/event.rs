//! User actions driving the demo front-end.

/// Actions produced by key presses or the tick timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Move the wallet selection down.
    SelectNext,
    /// Move the wallet selection up.
    SelectPrev,
    /// Route the selected wallet to its connecting view.
    Connect,
    /// Run the deep link for the current connecting view.
    DeepLink,
    /// Copy the pairing URI.
    CopyUri,
    /// Move the local wallet to its next chain.
    SimulateNetworkSwitch,
    /// Go back in the router history.
    Back,
    /// Press the network switch.
    OpenNetworkSelector,
    /// Connect the selected wallet as an injected connector.
    ConnectConnector,
    /// Timer tick, counts toasts down.
    Tick,
}
