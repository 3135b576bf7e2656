//! Modal message dialogs.
//!
//! rfd's async dialogs must be driven from the main thread, so every
//! notification is spawned onto the Slint event loop with
//! `slint::spawn_local`.

use rfd::{AsyncMessageDialog, MessageLevel};

fn show(level: MessageLevel, title: String, text: String) {
    let _ = slint::spawn_local(async move {
        AsyncMessageDialog::new()
            .set_level(level)
            .set_title(title.as_str())
            .set_description(text.as_str())
            .show()
            .await;
    });
}

/// Informational notification ("N images added", "no collections found").
pub fn show_info(title: &str, text: impl Into<String>) {
    show(MessageLevel::Info, title.to_string(), text.into());
}

/// Error notification (decode failure, I/O failure, invalid input).
pub fn show_error(title: &str, text: impl Into<String>) {
    show(MessageLevel::Error, title.to_string(), text.into());
}
