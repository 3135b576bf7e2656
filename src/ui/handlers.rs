//! Event handlers for UI callbacks.
//!
//! Registers all `Logic` callbacks (gallery navigation, imports, collection
//! save/load, slideshow) using the appropriate threading model for each
//! operation type.

use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::AppError;
use crate::services::{slideshow_service, GalleryService};
use crate::state::AppState;
use crate::ui::image_display::load_and_display_image;
use crate::ui::{dialogs, state_helpers};
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, app_state: AppState) {
    let gallery = GalleryService::new(app_state.gallery.clone());
    let cache = app_state.image_cache.clone();
    let collections = app_state.collections.clone();
    let slideshow_slot: slideshow_service::RunnerSlot = Rc::new(RefCell::new(None));

    // New: clear the gallery and the display.
    ui.global::<crate::Logic>().on_reset_gallery({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            gallery.clear();
            state_helpers::clear_image(&ui);
            state_helpers::set_navigation_info(&ui, 0, 0);
            dialogs::show_info("Reset", "Image list cleared.");
        }
    });

    // Add Images: multi-select file picker, append, rewind to the first
    // image of the whole list.
    // AsyncFileDialog must run on the main thread, hence slint::spawn_local.
    ui.global::<crate::Logic>().on_add_images({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = cache.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let gallery = gallery.clone();
            let cache = cache.clone();
            let _ = slint::spawn_local(async move {
                let Some(files) = AsyncFileDialog::new()
                    .set_title("Select Images")
                    .add_filter("Image Files", &SUPPORTED_IMAGE_EXTENSIONS)
                    .pick_files()
                    .await
                else {
                    return;
                };
                if files.is_empty() {
                    return;
                }

                let paths: Vec<PathBuf> =
                    files.iter().map(|f| f.path().to_path_buf()).collect();
                let (added, display) = gallery.add_from_picker(paths);

                let Some(ui) = ui_handle.upgrade() else {
                    return;
                };
                let (current, total) = gallery.position();
                state_helpers::set_navigation_info(&ui, current, total);
                dialogs::show_info("Success", format!("{} images added successfully.", added));

                if let Some(path) = display {
                    load_and_display_image(
                        ui_handle.clone(),
                        path,
                        "Failed to load image",
                        gallery.clone(),
                        cache.clone(),
                    );
                }
            });
        }
    });

    // Forward / Right arrow.
    ui.global::<crate::Logic>().on_next_image({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = cache.clone();
        move || {
            step_and_display(&ui_handle, &gallery, &cache, Step::Forward);
        }
    });

    // Backward / Left arrow.
    ui.global::<crate::Logic>().on_prev_image({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = cache.clone();
        move || {
            step_and_display(&ui_handle, &gallery, &cache, Step::Backward);
        }
    });

    // Shuffle: random permutation, jump to the new first image.
    ui.global::<crate::Logic>().on_shuffle_images({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = cache.clone();
        move || {
            let display = gallery.shuffle();
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let (current, total) = gallery.position();
            state_helpers::set_navigation_info(&ui, current, total);
            if let Some(path) = display {
                load_and_display_image(
                    ui_handle.clone(),
                    path,
                    "Failed to load image",
                    gallery.clone(),
                    cache.clone(),
                );
            }
        }
    });

    // Save Collection: check there is something to save, then open the
    // name dialog with the existing names listed as a convenience.
    ui.global::<crate::Logic>().on_request_save_collection({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let collections = collections.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            if gallery.is_empty() {
                dialogs::show_info("Nothing to save", "There are no images to save.");
                return;
            }
            state_helpers::set_collection_names(&ui, &collections.list());
            ui.global::<crate::ViewState>().set_save_dialog_visible(true);
        }
    });

    ui.global::<crate::Logic>().on_confirm_save_collection({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let collections = collections.clone();
        move |name| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            match collections.save(name.as_str(), &gallery.snapshot()) {
                Ok(()) => {
                    ui.global::<crate::ViewState>().set_save_dialog_visible(false);
                    dialogs::show_info(
                        "Saved",
                        format!("Collection \"{}\" saved.", name.trim()),
                    );
                }
                Err(AppError::Validation(message)) => {
                    // Bad name: report and keep the dialog open for another try.
                    dialogs::show_error("Save Collection", message);
                }
                Err(error) => {
                    ui.global::<crate::ViewState>().set_save_dialog_visible(false);
                    dialogs::show_error("Save Collection", error.to_string());
                }
            }
        }
    });

    // Open Collection: list saved names, let the user pick exactly one.
    ui.global::<crate::Logic>().on_request_open_collection({
        let ui_handle = ui.as_weak();
        let collections = collections.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let names = collections.list();
            if names.is_empty() {
                dialogs::show_info("No collections found", "There are no saved collections.");
                return;
            }
            state_helpers::set_collection_names(&ui, &names);
            ui.global::<crate::ViewState>().set_open_dialog_visible(true);
        }
    });

    ui.global::<crate::Logic>().on_confirm_open_collection({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = cache.clone();
        let collections = collections.clone();
        move |name| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            if name.is_empty() {
                // Confirmed with nothing selected: report, dialog stays open.
                dialogs::show_error("Open Collection", "No collection selected.");
                return;
            }

            ui.global::<crate::ViewState>().set_open_dialog_visible(false);
            let lines = match collections.load(name.as_str()) {
                Ok(lines) => lines,
                Err(error) => {
                    // The backing file vanished since listing, or is unreadable.
                    dialogs::show_error("Open Collection", error.to_string());
                    return;
                }
            };

            let import = gallery.import_collection(lines);
            let (current, total) = gallery.position();
            state_helpers::set_navigation_info(&ui, current, total);

            // The import never moves the index; only a gallery that already
            // held images re-renders its current one.
            if let Some(path) = import.redisplay {
                load_and_display_image(
                    ui_handle.clone(),
                    path,
                    "Failed to load image",
                    gallery.clone(),
                    cache.clone(),
                );
            }
        }
    });

    // Slideshow: requires a non-empty gallery, then prompts for an interval.
    ui.global::<crate::Logic>().on_request_slideshow({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            if gallery.is_empty() {
                dialogs::show_info("No Images", "Please load images to start the slideshow.");
                return;
            }
            ui.global::<crate::ViewState>()
                .set_interval_dialog_visible(true);
        }
    });

    // Interval chosen (or prompt cancelled: -1 maps to the default).
    ui.global::<crate::Logic>().on_start_slideshow({
        let ui_handle = ui.as_weak();
        let gallery = gallery.clone();
        let cache = cache.clone();
        let slot = slideshow_slot.clone();
        move |interval| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            ui.global::<crate::ViewState>()
                .set_interval_dialog_visible(false);

            let requested = (interval >= 0).then_some(interval);
            if let Err(error) =
                slideshow_service::launch(&ui, &slot, cache.clone(), gallery.snapshot(), requested)
            {
                dialogs::show_error("Slideshow", error.to_string());
            }
        }
    });
}

#[derive(Clone, Copy)]
enum Step {
    Forward,
    Backward,
}

/// Shared body of the Forward/Backward handlers: move the index, refresh
/// the counter, display the new current image. Empty gallery is a no-op.
fn step_and_display(
    ui_handle: &slint::Weak<crate::AppWindow>,
    gallery: &GalleryService,
    cache: &std::sync::Arc<std::sync::Mutex<crate::image_cache::ImageCache>>,
    step: Step,
) {
    let path = match step {
        Step::Forward => gallery.next(),
        Step::Backward => gallery.previous(),
    };
    let Some(ui) = ui_handle.upgrade() else {
        return;
    };
    let Some(path) = path else {
        return;
    };
    let (current, total) = gallery.position();
    state_helpers::set_navigation_info(&ui, current, total);
    load_and_display_image(
        ui_handle.clone(),
        path,
        "Failed to load image",
        gallery.clone(),
        cache.clone(),
    );
}
