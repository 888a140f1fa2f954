//! Application Module - MVU Controller
//!
//! Coordinates the pages and the router.
//!
//! # Structure
//!
//! - `state.rs`: Application state, page selection and the eframe loop
//! - `ui_handler.rs`: Command dispatcher for UI actions
//!
//! # Communication Flow
//!
//! ```text
//! View (pages) --> UiCommand --> ui_handler --> HomeScreen / Router
//!                                                   \--> route change --> remount landing screen
//! ```

mod state;
mod ui_handler;

pub use state::App;
