// Results panel: view-state selection, rendering, and the host-side session.
// The view is a pure function of the inputs plus the chosen preview.

pub mod handlers;
pub mod panel;
pub mod session;
pub mod view_state;

pub use panel::{ResultsPanel, ResultsView};
pub use session::ScreenerSession;
