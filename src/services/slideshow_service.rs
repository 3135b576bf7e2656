//! Fullscreen slideshow driven by a `slint::Timer`.
//!
//! The timer lives on the runner, so cancellation stops it outright
//! instead of relying on a flag check at the next tick. The session's
//! `active` flag is still cleared for the case of a tick already queued on
//! the event loop when Escape arrives.

use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use crate::state::SlideshowSession;
use crate::ui::{dialogs, image_display};
use i_slint_backend_winit::WinitWindowAccessor;
use log::info;
use slint::{ComponentHandle, Timer, TimerMode};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// A live slideshow: the fullscreen window, its timer and its session.
pub struct SlideshowRunner {
    window: crate::SlideshowWindow,
    timer: Timer,
    session: Rc<RefCell<SlideshowSession>>,
}

/// Holder for the at-most-one running slideshow, owned by the UI thread.
pub type RunnerSlot = Rc<RefCell<Option<SlideshowRunner>>>;

/// Launches a slideshow over a snapshot of the gallery's paths.
///
/// `requested_interval` is the dialog's value, or `None`/out-of-range when
/// the prompt was cancelled; the session substitutes the default. An empty
/// snapshot is a no-op (callers check and notify the user beforehand).
pub fn launch(
    main_ui: &crate::AppWindow,
    slot: &RunnerSlot,
    cache: Arc<Mutex<ImageCache>>,
    paths: Vec<PathBuf>,
    requested_interval: Option<i32>,
) -> Result<(), slint::PlatformError> {
    let Some(session) = SlideshowSession::new(paths, requested_interval) else {
        return Ok(());
    };
    info!(
        "Starting slideshow: interval {:?}",
        session.interval()
    );

    // One slideshow at a time; a stale runner is torn down first.
    stop(slot, &main_ui.as_weak());

    let window = crate::SlideshowWindow::new()?;
    window.window().set_fullscreen(true);

    let session = Rc::new(RefCell::new(session));

    window.on_cancel({
        let slot = slot.clone();
        let main_ui = main_ui.as_weak();
        move || stop(&slot, &main_ui)
    });

    display_current(window.as_weak(), &session, &cache);

    let timer = Timer::default();
    let interval = session.borrow().interval();
    timer.start(TimerMode::Repeated, interval, {
        let window = window.as_weak();
        let session = session.clone();
        let cache = cache.clone();
        move || {
            if session.borrow_mut().advance().is_none() {
                // Cancelled while this tick was already queued.
                return;
            }
            display_current(window.clone(), &session, &cache);
        }
    });

    window.show()?;
    *slot.borrow_mut() = Some(SlideshowRunner {
        window,
        timer,
        session,
    });
    Ok(())
}

/// Tears down the running slideshow, if any, and gives focus back to the
/// main window. Safe to call when no slideshow is active.
pub fn stop(slot: &RunnerSlot, main_ui: &slint::Weak<crate::AppWindow>) {
    if let Some(runner) = slot.borrow_mut().take() {
        info!("Stopping slideshow");
        runner.timer.stop();
        runner.session.borrow_mut().cancel();
        let _ = runner.window.hide();
    }

    if let Some(ui) = main_ui.upgrade() {
        let _ = ui
            .window()
            .with_winit_window(|window| window.focus_window());
    }
}

/// Shows the session's current image in the slideshow window and preloads
/// the one the next tick will need. A decode failure terminates the
/// slideshow and reports the error.
fn display_current(
    window: slint::Weak<crate::SlideshowWindow>,
    session: &Rc<RefCell<SlideshowSession>>,
    cache: &Arc<Mutex<ImageCache>>,
) {
    let (path, next_path) = {
        let session = session.borrow();
        (
            session.current().to_path_buf(),
            session.peek_next().to_path_buf(),
        )
    };

    let cached = cache.lock().ok().and_then(|mut c| c.get(&path));
    if let Some(cached_image) = cached {
        if let Some(window) = window.upgrade() {
            window.set_current_image(image_loader::create_slint_image(
                cached_image.data,
                cached_image.width,
                cached_image.height,
            ));
        }
        image_display::preload_path(next_path, cache.clone());
        return;
    }

    let cache_clone = cache.clone();
    rayon::spawn(move || {
        match image_loader::load_image_blocking(&path) {
            Ok((data, width, height)) => {
                if let Ok(mut cache) = cache_clone.lock() {
                    cache.put(path, CachedImage::new(data.clone(), width, height));
                }
                let _ = window.upgrade_in_event_loop(move |window| {
                    window
                        .set_current_image(image_loader::create_slint_image(data, width, height));
                });
            }
            Err(error) => {
                let message = error.to_string();
                let _ = window.upgrade_in_event_loop(move |window| {
                    dialogs::show_error("Slideshow", message);
                    window.invoke_cancel();
                });
            }
        }
    });
    image_display::preload_path(next_path, cache.clone());
}
