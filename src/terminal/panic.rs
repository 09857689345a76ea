//! Panic hook for terminal restoration.
//!
//! Restores the terminal to a usable state when the application panics, then
//! delegates to the original hook so the panic message still prints.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call this early in `main()`, before entering TUI mode.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();

        // Reset to the default hook to avoid affecting other tests
        let _ = panic::take_hook();
    }
}
