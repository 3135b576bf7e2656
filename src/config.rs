//! Application configuration constants.

/// Supported image file extensions for the file picker filter.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Directory (relative to the working directory) where collections are saved.
pub const COLLECTIONS_DIR: &str = "saved_collection";

/// File extension used for persisted collections.
pub const COLLECTION_EXTENSION: &str = "txt";

/// Slideshow interval used when the user cancels the prompt or enters nothing.
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: u64 = 3;

/// Valid range for a user-chosen slideshow interval, in seconds.
pub const SLIDESHOW_INTERVAL_RANGE: std::ops::RangeInclusive<i32> = 1..=60;

/// Number of decoded images kept in the LRU cache.
pub const IMAGE_CACHE_CAPACITY: usize = 10;

/// Application icon bundled into the binary; decoded at startup.
pub const WINDOW_ICON_BYTES: &[u8] = include_bytes!("../bundle/icon.png");
