//! State management for the gallery viewer application.

use crate::collection_store::CollectionStore;
use crate::config::IMAGE_CACHE_CAPACITY;
use crate::image_cache::ImageCache;
use std::sync::{Arc, Mutex};

pub mod gallery;
pub mod slideshow;

pub use gallery::GalleryState;
pub use slideshow::SlideshowSession;

/// Application-wide state container.
pub struct AppState {
    /// The gallery list and current index, shared with decode workers.
    pub gallery: Arc<Mutex<GalleryState>>,
    /// LRU cache for decoded images.
    pub image_cache: Arc<Mutex<ImageCache>>,
    /// Persistence for named collections.
    pub collections: CollectionStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            gallery: Arc::new(Mutex::new(GalleryState::new())),
            image_cache: Arc::new(Mutex::new(ImageCache::new(IMAGE_CACHE_CAPACITY))),
            collections: CollectionStore::default(),
        }
    }
}
