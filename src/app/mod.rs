// src/app/mod.rs
//! Application module - contains application state and logic.

pub mod session;
pub mod state;

// Re-export the main types
pub use session::{ContentView, Session};
pub use state::App;
