//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: main-thread async work (file and message dialogs)
//! - `rayon::spawn`: CPU-intensive work (image decoding, preloading)
//! - `slint::invoke_from_event_loop` / `Weak::upgrade_in_event_loop`:
//!   returning results from rayon workers to the UI thread

pub mod dialogs;
pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
