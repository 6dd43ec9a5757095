//! Session scope — owned state, the view router, and session operations.
//!
//! Everything a session fetches or derives lives here and nowhere else;
//! there is no persistence. The router hands out content only for views
//! whose prerequisite entities are present.

pub mod manager;
pub mod routes;
pub mod state;

pub use manager::{SessionManager, SessionSummary};
pub use routes::{SessionRouteState, session_routes};
pub use state::{PLAN_ERROR_MESSAGE, SessionState, View};
