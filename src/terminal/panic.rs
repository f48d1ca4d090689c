//! Panic hook that puts the terminal back before the panic is printed.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal restore in front of the current panic hook.
///
/// Call after `color_eyre::install()` so its report is the hook being chained.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Reset to default hook to avoid affecting other tests
        let _ = panic::take_hook();
    }
}
