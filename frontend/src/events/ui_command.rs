/// Commands initiated by the UI (View -> Controller)
/// These are "requests" to perform actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    // --- Landing ---
    /// Join button pressed (or Enter in the room code field)
    JoinStream,

    // --- Room / Not found ---
    /// Return to the landing screen
    GoHome,
}
