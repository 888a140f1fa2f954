//! Navigation
//!
//! The landing screen only knows the [`Navigator`] capability. The concrete
//! collaborator is the [`Router`], owned by the app shell, which maps paths
//! onto [`Route`]s.

mod route;
mod router;

pub use route::{Route, room_path};
pub use router::Router;

/// Capability to move the application to another path
pub trait Navigator {
    /// Requests navigation to `path`. The caller does not inspect the outcome.
    fn navigate(&mut self, path: &str);
}
