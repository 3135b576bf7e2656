//! Gallery state: the ordered list of image paths and the current position.

use log::{debug, warn};
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

/// Manages the list of loaded image paths and the index of the image on
/// display. The index is always a valid position whenever the list is
/// non-empty; navigation wraps around modulo the list length.
#[derive(Debug, Default)]
pub struct GalleryState {
    paths: Vec<PathBuf>,
    current_index: usize,
}

impl GalleryState {
    /// Creates a new empty gallery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends paths to the end of the list, preserving existing order and
    /// the current index. Callers that want to jump back to the first image
    /// (the file-picker import does, the collection import does not) follow
    /// up with [`rewind`](Self::rewind).
    pub fn append<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let before = self.paths.len();
        self.paths.extend(paths);
        let added = self.paths.len() - before;
        debug!("Appended {} paths ({} total)", added, self.paths.len());
        added
    }

    /// Resets the current index to the first image.
    pub fn rewind(&mut self) {
        self.current_index = 0;
    }

    /// Empties the list and resets the index. Never errors, even when the
    /// gallery is already empty.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.current_index = 0;
    }

    /// Shuffles the list into a random permutation and resets the index to
    /// the first element. No-op on an empty gallery.
    pub fn shuffle(&mut self) {
        if self.paths.is_empty() {
            warn!("Shuffle requested on an empty gallery");
            return;
        }
        self.paths.shuffle(&mut rand::rng());
        self.current_index = 0;
    }

    /// Steps the current index by `delta` (+1 or -1) with wraparound and
    /// returns the new current path. No-op on an empty gallery.
    pub fn step(&mut self, delta: isize) -> Option<&Path> {
        if self.paths.is_empty() {
            warn!("No images available for navigation");
            return None;
        }
        let len = self.paths.len() as isize;
        self.current_index = (self.current_index as isize + delta).rem_euclid(len) as usize;
        self.paths.get(self.current_index).map(PathBuf::as_path)
    }

    /// Returns the path currently on display, if any.
    pub fn current_path(&self) -> Option<&Path> {
        self.paths.get(self.current_index).map(PathBuf::as_path)
    }

    /// Returns the path one step forward without moving the index.
    pub fn peek_next(&self) -> Option<&Path> {
        if self.paths.is_empty() {
            return None;
        }
        let next = (self.current_index + 1) % self.paths.len();
        self.paths.get(next).map(PathBuf::as_path)
    }

    /// Returns the path one step backward without moving the index.
    pub fn peek_prev(&self) -> Option<&Path> {
        if self.paths.is_empty() {
            return None;
        }
        let prev = (self.current_index + self.paths.len() - 1) % self.paths.len();
        self.paths.get(prev).map(PathBuf::as_path)
    }

    /// Returns the 1-based position and total count for the "Image X of Y"
    /// counter. `(0, 0)` when the gallery is empty.
    pub fn position(&self) -> (usize, usize) {
        if self.paths.is_empty() {
            (0, 0)
        } else {
            (self.current_index + 1, self.paths.len())
        }
    }

    /// Returns a snapshot copy of the path list, e.g. for launching a
    /// slideshow or saving a collection.
    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.paths.clone()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn gallery_with(names: &[&str]) -> GalleryState {
        let mut gallery = GalleryState::new();
        gallery.append(names.iter().map(PathBuf::from));
        gallery
    }

    #[test]
    fn new_gallery_is_empty() {
        let gallery = GalleryState::new();
        assert!(gallery.is_empty());
        assert_eq!(gallery.current_path(), None);
        assert_eq!(gallery.position(), (0, 0));
    }

    #[test]
    fn append_preserves_order_and_index() {
        let mut gallery = gallery_with(&["a.png", "b.png"]);
        gallery.step(1);
        gallery.append([PathBuf::from("c.png")]);

        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.current_path(), Some(Path::new("b.png")));
        assert_eq!(gallery.snapshot().last().unwrap(), Path::new("c.png"));
    }

    #[test]
    fn rewind_returns_to_first_image() {
        let mut gallery = gallery_with(&["a.png", "b.png", "c.png"]);
        gallery.step(1);
        gallery.rewind();
        assert_eq!(gallery.current_path(), Some(Path::new("a.png")));
    }

    #[test]
    fn step_forward_then_backward_restores_index() {
        let mut gallery = gallery_with(&["a.png", "b.png", "c.png"]);
        for start in 0..3 {
            gallery.rewind();
            for _ in 0..start {
                gallery.step(1);
            }
            let before = gallery.position();
            gallery.step(1);
            gallery.step(-1);
            assert_eq!(gallery.position(), before);
        }
    }

    #[test]
    fn n_forward_steps_wrap_to_start() {
        let mut gallery = gallery_with(&["a.png", "b.png", "c.png", "d.png"]);
        gallery.step(1);
        let before = gallery.position();
        for _ in 0..gallery.len() {
            gallery.step(1);
        }
        assert_eq!(gallery.position(), before);
    }

    #[test]
    fn step_backward_from_first_wraps_to_last() {
        let mut gallery = gallery_with(&["a.png", "b.png", "c.png"]);
        assert_eq!(gallery.step(-1), Some(Path::new("c.png")));
        assert_eq!(gallery.position(), (3, 3));
    }

    #[test]
    fn step_on_empty_gallery_is_noop() {
        let mut gallery = GalleryState::new();
        assert_eq!(gallery.step(1), None);
        assert_eq!(gallery.step(-1), None);
    }

    #[test]
    fn shuffle_preserves_paths_and_resets_index() {
        let names: Vec<String> = (0..32).map(|i| format!("img{i}.png")).collect();
        let mut gallery = GalleryState::new();
        gallery.append(names.iter().map(PathBuf::from));
        gallery.step(5);

        gallery.shuffle();

        assert_eq!(gallery.position(), (1, 32));
        let shuffled: HashSet<PathBuf> = gallery.snapshot().into_iter().collect();
        let original: HashSet<PathBuf> = names.iter().map(PathBuf::from).collect();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn shuffle_on_empty_gallery_is_noop() {
        let mut gallery = GalleryState::new();
        gallery.shuffle();
        assert!(gallery.is_empty());
    }

    #[test]
    fn clear_empties_list_and_resets_index() {
        let mut gallery = gallery_with(&["a.png", "b.png"]);
        gallery.step(1);
        gallery.clear();
        assert!(gallery.is_empty());
        assert_eq!(gallery.position(), (0, 0));

        // Clearing an already-empty gallery is fine too.
        gallery.clear();
        assert!(gallery.is_empty());
    }

    #[test]
    fn peek_does_not_move_the_index() {
        let mut gallery = gallery_with(&["a.png", "b.png", "c.png"]);
        assert_eq!(gallery.peek_next(), Some(Path::new("b.png")));
        assert_eq!(gallery.peek_prev(), Some(Path::new("c.png")));
        assert_eq!(gallery.current_path(), Some(Path::new("a.png")));

        gallery.step(1);
        gallery.step(1);
        assert_eq!(gallery.peek_next(), Some(Path::new("a.png")));
    }

    #[test]
    fn counter_scenario_three_images() {
        let mut gallery = gallery_with(&["a.png", "b.png", "c.png"]);
        gallery.rewind();
        assert_eq!(gallery.current_path(), Some(Path::new("a.png")));
        assert_eq!(gallery.position(), (1, 3));

        gallery.step(1);
        gallery.step(1);
        assert_eq!(gallery.current_path(), Some(Path::new("c.png")));
        assert_eq!(gallery.position(), (3, 3));

        gallery.step(1);
        assert_eq!(gallery.current_path(), Some(Path::new("a.png")));
        assert_eq!(gallery.position(), (1, 3));
    }
}
