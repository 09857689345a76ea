//! Terminal lifecycle management.
//!
//! Setup, teardown, and panic-safe restoration of the terminal. The dashboard
//! must never leave the user's terminal in raw mode, so every exit path goes
//! through [`leave_tui_mode`] or [`emergency_restore`].

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};
