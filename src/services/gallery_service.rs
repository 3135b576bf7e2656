//! Service for gallery operations.
//!
//! Provides high-level methods over the shared `GalleryState` so UI
//! handlers never manipulate the list or the index directly.

use crate::state::GalleryState;
use log::info;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Outcome of importing a saved collection into the gallery.
#[derive(Debug)]
pub struct CollectionImport {
    /// Number of paths appended.
    pub added: usize,
    /// Path to re-display, present only when the gallery already held
    /// images before the import (the import itself never moves the index).
    pub redisplay: Option<PathBuf>,
}

/// Service for managing the gallery list and current position.
#[derive(Clone)]
pub struct GalleryService {
    gallery: Arc<Mutex<GalleryState>>,
}

impl GalleryService {
    pub fn new(gallery: Arc<Mutex<GalleryState>>) -> Self {
        Self { gallery }
    }

    /// Appends picker-selected files and jumps back to the first image of
    /// the whole list. Returns the number added and the path to display.
    pub fn add_from_picker(&self, paths: Vec<PathBuf>) -> (usize, Option<PathBuf>) {
        let mut gallery = self.gallery.lock().unwrap();
        let added = gallery.append(paths);
        gallery.rewind();
        info!("Picker import: {} images added", added);
        (added, gallery.current_path().map(PathBuf::from))
    }

    /// Appends the entries of a loaded collection, skipping blank lines,
    /// without moving the current index. The current image is re-displayed
    /// only when the gallery was non-empty before the import.
    pub fn import_collection(&self, lines: Vec<String>) -> CollectionImport {
        let mut gallery = self.gallery.lock().unwrap();
        let had_images = !gallery.is_empty();
        let added = gallery.append(
            lines
                .into_iter()
                .filter(|line| !line.is_empty())
                .map(PathBuf::from),
        );
        info!("Collection import: {} paths added", added);
        CollectionImport {
            added,
            redisplay: if had_images {
                gallery.current_path().map(PathBuf::from)
            } else {
                None
            },
        }
    }

    /// Empties the gallery.
    pub fn clear(&self) {
        self.gallery.lock().unwrap().clear();
    }

    /// Steps forward and returns the new current path, if any.
    pub fn next(&self) -> Option<PathBuf> {
        self.gallery.lock().unwrap().step(1).map(PathBuf::from)
    }

    /// Steps backward and returns the new current path, if any.
    pub fn previous(&self) -> Option<PathBuf> {
        self.gallery.lock().unwrap().step(-1).map(PathBuf::from)
    }

    /// Shuffles the gallery and returns the new first image, if any.
    pub fn shuffle(&self) -> Option<PathBuf> {
        let mut gallery = self.gallery.lock().unwrap();
        gallery.shuffle();
        gallery.current_path().map(PathBuf::from)
    }

    /// 1-based position and total count for the counter label.
    pub fn position(&self) -> (usize, usize) {
        self.gallery.lock().unwrap().position()
    }

    /// Copy of the full path list (slideshow launch, collection save).
    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.gallery.lock().unwrap().snapshot()
    }

    pub fn is_empty(&self) -> bool {
        self.gallery.lock().unwrap().is_empty()
    }

    /// Neighbor paths for background preloading.
    pub fn neighbors(&self) -> (Option<PathBuf>, Option<PathBuf>) {
        let gallery = self.gallery.lock().unwrap();
        (
            gallery.peek_next().map(PathBuf::from),
            gallery.peek_prev().map(PathBuf::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn service() -> GalleryService {
        GalleryService::new(Arc::new(Mutex::new(GalleryState::new())))
    }

    fn to_paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn picker_import_rewinds_to_first_image() {
        let service = service();
        service.add_from_picker(to_paths(&["a.png", "b.png"]));
        service.next();

        let (added, display) = service.add_from_picker(to_paths(&["c.png"]));
        assert_eq!(added, 1);
        assert_eq!(display.as_deref(), Some(Path::new("a.png")));
        assert_eq!(service.position(), (1, 3));
    }

    #[test]
    fn collection_import_keeps_index_and_redisplays_current() {
        let service = service();
        service.add_from_picker(to_paths(&["a.png", "b.png"]));
        service.next();

        let import = service.import_collection(vec!["c.png".into(), "d.png".into()]);
        assert_eq!(import.added, 2);
        assert_eq!(import.redisplay.as_deref(), Some(Path::new("b.png")));
        assert_eq!(service.position(), (2, 4));
    }

    #[test]
    fn collection_import_into_empty_gallery_does_not_redisplay() {
        let service = service();
        let import = service.import_collection(vec!["a.png".into(), "b.png".into()]);
        assert_eq!(import.added, 2);
        assert_eq!(import.redisplay, None);
        assert_eq!(service.position(), (1, 2));
    }

    #[test]
    fn collection_import_skips_blank_entries() {
        let service = service();
        let import = service.import_collection(vec!["a.png".into(), String::new()]);
        assert_eq!(import.added, 1);
        assert_eq!(service.position(), (1, 1));
    }

    #[test]
    fn navigation_on_empty_gallery_returns_none() {
        let service = service();
        assert_eq!(service.next(), None);
        assert_eq!(service.previous(), None);
        assert_eq!(service.shuffle(), None);
        assert_eq!(service.position(), (0, 0));
    }
}
