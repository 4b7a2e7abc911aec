use crate::app::route::Route;

/// Side effects requested by the key handler. They are executed one at a
/// time by the main loop, which awaits every remote call in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Switch screens. Entering the study screen mounts a fresh wizard.
    Navigate(Route),
    /// Forward transition of the wizard (submit / translate / finish).
    Advance,
    /// Leave the session early.
    Skip,
    /// Refetch the redemption requests shown on the token screen.
    LoadTokens,
    Quit,
}
