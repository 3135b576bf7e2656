//! Image cache for fast navigation.
//!
//! Caches decoded RGB8 image data using an LRU policy, so stepping back and
//! forth through the gallery (and slideshow re-display) is instant.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Decoded RGB8 pixel data for one image.
#[derive(Clone)]
pub struct CachedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl CachedImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// LRU cache for storing decoded images.
pub struct ImageCache {
    cache: LruCache<PathBuf, CachedImage>,
}

impl ImageCache {
    /// Creates a new image cache with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).expect("Capacity must be non-zero")),
        }
    }

    /// Retrieves an image from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<CachedImage> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::info!("Cache HIT: {}", path.display());
        } else {
            log::info!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores an image in the cache.
    pub fn put(&mut self, path: PathBuf, cached_image: CachedImage) {
        log::info!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            cached_image.width,
            cached_image.height
        );
        self.cache.put(path, cached_image);
    }

    /// Checks if an image is in the cache.
    pub fn contains(&mut self, path: &Path) -> bool {
        self.cache.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_returns_the_image() {
        let mut cache = ImageCache::new(2);
        cache.put(
            PathBuf::from("a.png"),
            CachedImage::new(vec![1, 2, 3], 1, 1),
        );

        assert!(cache.contains(Path::new("a.png")));
        let cached = cache.get(Path::new("a.png")).expect("cache miss");
        assert_eq!(cached.data, vec![1, 2, 3]);
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = ImageCache::new(2);
        cache.put(PathBuf::from("a.png"), CachedImage::new(vec![1], 1, 1));
        cache.put(PathBuf::from("b.png"), CachedImage::new(vec![2], 1, 1));
        cache.get(Path::new("a.png"));
        cache.put(PathBuf::from("c.png"), CachedImage::new(vec![3], 1, 1));

        assert!(cache.contains(Path::new("a.png")));
        assert!(!cache.contains(Path::new("b.png")));
    }
}
