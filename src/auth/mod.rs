//! Authentication: unauthenticated endpoints, refresh coordination, and
//! session state.

pub mod api;
mod coordinator;
mod session;

pub use coordinator::RefreshCoordinator;
pub use session::Session;
