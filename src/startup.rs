//! Startup concerns: the application window icon.

use crate::config::WINDOW_ICON_BYTES;
use i_slint_backend_winit::winit::window::Icon;
use i_slint_backend_winit::WinitWindowAccessor;
use log::warn;
use slint::ComponentHandle;

/// Installs the bundled application icon on the main window.
///
/// Purely cosmetic: a decode or backend failure is logged and the window
/// proceeds without a custom icon.
pub fn set_window_icon(app: &crate::AppWindow) {
    match decode_icon() {
        Ok(icon) => {
            let _ = app
                .window()
                .with_winit_window(|window| window.set_window_icon(Some(icon)));
        }
        Err(error) => warn!("Failed to load window icon: {}", error),
    }
}

fn decode_icon() -> Result<Icon, Box<dyn std::error::Error>> {
    let image = image::load_from_memory(WINDOW_ICON_BYTES)?.to_rgba8();
    let (width, height) = image.dimensions();
    Ok(Icon::from_rgba(image.into_raw(), width, height)?)
}
