//! Interactive navigation state shared by the input handler and the UI.

pub mod state;

pub use state::AppState;
