//! State Management
//!
//! Global application state and the signal-backed page surface.

pub mod global;
pub mod page;

pub use global::{provide_global_state, GlobalState, TableState};
pub use page::SignalPage;
