//! Helper functions that set grouped `ViewState` properties.
//!
//! UI handlers go through these instead of calling individual setters, so
//! related properties (image + error line, counter pair) stay consistent.

use log::error;
use slint::ComponentHandle;

/// Shows a decoded image and clears any previous error line.
pub fn show_image(ui: &crate::AppWindow, image: slint::Image) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_current_image(image);
    view_state.set_image_loaded(true);
    view_state.set_error_message("".into());
}

/// Returns the image area to its "No Image Loaded" state.
pub fn clear_image(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_current_image(slint::Image::default());
    view_state.set_image_loaded(false);
    view_state.set_error_message("".into());
}

/// Updates the "Image X of Y" counter.
pub fn set_navigation_info(ui: &crate::AppWindow, current: usize, total: usize) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_current_number(current as i32);
    view_state.set_total_count(total as i32);
}

/// Logs an error and surfaces it in the window's error line.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}

/// Fills the collection-name list shown in the save/open dialogs.
pub fn set_collection_names(ui: &crate::AppWindow, names: &[String]) {
    let names: Vec<slint::SharedString> = names.iter().map(|n| n.as_str().into()).collect();
    ui.global::<crate::ViewState>()
        .set_collection_names(slint::ModelRc::new(slint::VecModel::from(names)));
}
