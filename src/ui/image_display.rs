//! Image loading and display logic for the main window.
//!
//! Uses `rayon::spawn` for CPU-intensive image decoding, then
//! `slint::invoke_from_event_loop` to update the UI from the background
//! thread. A decode failure leaves the gallery untouched: the error is
//! reported and the previous image stays up.

use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use crate::services::GalleryService;
use crate::ui::{dialogs, state_helpers};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Loads the image at `path` and shows it in the main window.
///
/// Checks the cache first for instant display; on a miss the decode runs on
/// a rayon worker and the result is marshalled back to the UI thread.
/// Either way the neighboring images are preloaded afterwards.
pub fn load_and_display_image(
    ui: slint::Weak<crate::AppWindow>,
    path: PathBuf,
    error_prefix: &'static str,
    gallery: GalleryService,
    cache: Arc<Mutex<ImageCache>>,
) {
    let cached = cache.lock().ok().and_then(|mut c| c.get(&path));

    if let Some(cached_image) = cached {
        if let Some(ui) = ui.upgrade() {
            let image = image_loader::create_slint_image(
                cached_image.data,
                cached_image.width,
                cached_image.height,
            );
            state_helpers::show_image(&ui, image);
            preload_adjacent_images(gallery, cache);
        }
        return;
    }

    let cache_clone = cache.clone();
    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&path);

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui.upgrade() else {
                return;
            };
            match result {
                Ok((data, width, height)) => {
                    if let Ok(mut cache) = cache_clone.lock() {
                        cache.put(path, CachedImage::new(data.clone(), width, height));
                    }
                    let image = image_loader::create_slint_image(data, width, height);
                    state_helpers::show_image(&ui, image);
                    preload_adjacent_images(gallery, cache_clone);
                }
                Err(error) => {
                    state_helpers::set_error_with_prefix(&ui, error_prefix, error.to_string());
                    dialogs::show_error(error_prefix, error.to_string());
                }
            }
        });
    });
}

/// Preloads the next and previous images in the background. Errors are
/// ignored; a preload failure will resurface as a display error if the
/// user actually navigates there.
fn preload_adjacent_images(gallery: GalleryService, cache: Arc<Mutex<ImageCache>>) {
    let (next_path, prev_path) = gallery.neighbors();

    for path in [next_path, prev_path].into_iter().flatten() {
        preload_path(path, cache.clone());
    }
}

/// Decodes one path into the cache on a worker thread, if not present.
pub fn preload_path(path: PathBuf, cache: Arc<Mutex<ImageCache>>) {
    let already_cached = cache
        .lock()
        .ok()
        .map(|mut c| c.contains(&path))
        .unwrap_or(true);
    if already_cached {
        return;
    }

    rayon::spawn(move || {
        if let Ok((data, width, height)) = image_loader::load_image_blocking(&path) {
            if let Ok(mut cache) = cache.lock() {
                cache.put(path, CachedImage::new(data, width, height));
            }
        }
    });
}
