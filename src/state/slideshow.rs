//! Slideshow session state.
//!
//! A session is a read-only view over a snapshot of the gallery's paths
//! taken at launch. The timer that drives it lives in
//! `services::slideshow_service`; this type only tracks the index, the
//! chosen interval and the active flag, so it stays independent of the UI
//! toolkit and easy to test.

use crate::config::{DEFAULT_SLIDESHOW_INTERVAL_SECS, SLIDESHOW_INTERVAL_RANGE};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A running (or cancelled) slideshow over a fixed list of image paths.
#[derive(Debug)]
pub struct SlideshowSession {
    paths: Vec<PathBuf>,
    index: usize,
    interval: Duration,
    active: bool,
}

impl SlideshowSession {
    /// Creates a session over a snapshot of paths, starting at the first
    /// image. Returns `None` when the snapshot is empty; the requested
    /// interval falls back to the default when out of range or absent
    /// (the user cancelled the prompt).
    pub fn new(paths: Vec<PathBuf>, requested_interval: Option<i32>) -> Option<Self> {
        if paths.is_empty() {
            return None;
        }
        Some(Self {
            paths,
            index: 0,
            interval: Duration::from_secs(Self::resolve_interval(requested_interval)),
            active: true,
        })
    }

    /// Maps the user's interval input to seconds, substituting the default
    /// for a cancelled prompt or an out-of-range value.
    pub fn resolve_interval(requested: Option<i32>) -> u64 {
        match requested {
            Some(secs) if SLIDESHOW_INTERVAL_RANGE.contains(&secs) => secs as u64,
            _ => DEFAULT_SLIDESHOW_INTERVAL_SECS,
        }
    }

    /// The path currently on display.
    pub fn current(&self) -> &Path {
        &self.paths[self.index]
    }

    /// The path that the next tick will display, without advancing.
    pub fn peek_next(&self) -> &Path {
        &self.paths[(self.index + 1) % self.paths.len()]
    }

    /// Advances to the next image with wraparound and returns it. Returns
    /// `None` once the session is cancelled, so a stale timer fire is a
    /// no-op.
    pub fn advance(&mut self) -> Option<&Path> {
        if !self.active {
            return None;
        }
        self.index = (self.index + 1) % self.paths.len();
        Some(&self.paths[self.index])
    }

    /// Marks the session as stopped. Further ticks become no-ops.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_over(names: &[&str], interval: Option<i32>) -> SlideshowSession {
        let paths = names.iter().map(PathBuf::from).collect();
        SlideshowSession::new(paths, interval).expect("non-empty session")
    }

    #[test]
    fn empty_snapshot_yields_no_session() {
        assert!(SlideshowSession::new(Vec::new(), Some(5)).is_none());
    }

    #[test]
    fn interval_defaults_when_cancelled_or_out_of_range() {
        assert_eq!(SlideshowSession::resolve_interval(None), 3);
        assert_eq!(SlideshowSession::resolve_interval(Some(-1)), 3);
        assert_eq!(SlideshowSession::resolve_interval(Some(0)), 3);
        assert_eq!(SlideshowSession::resolve_interval(Some(61)), 3);
        assert_eq!(SlideshowSession::resolve_interval(Some(1)), 1);
        assert_eq!(SlideshowSession::resolve_interval(Some(60)), 60);
    }

    #[test]
    fn session_starts_at_first_image_with_chosen_interval() {
        let session = session_over(&["1.png", "2.png"], Some(10));
        assert!(session.is_active());
        assert_eq!(session.current(), Path::new("1.png"));
        assert_eq!(session.interval(), Duration::from_secs(10));
    }

    #[test]
    fn ticks_advance_and_wrap_around() {
        let mut session = session_over(&["1.png", "2.png"], Some(1));
        assert_eq!(session.advance(), Some(Path::new("2.png")));
        assert_eq!(session.advance(), Some(Path::new("1.png")));
    }

    #[test]
    fn cancel_freezes_the_index() {
        let mut session = session_over(&["1.png", "2.png", "3.png"], Some(1));
        session.advance();
        session.cancel();

        assert!(!session.is_active());
        assert_eq!(session.advance(), None);
        assert_eq!(session.current(), Path::new("2.png"));
    }

    #[test]
    fn snapshot_is_independent_of_later_gallery_changes() {
        let mut paths = vec![PathBuf::from("1.png"), PathBuf::from("2.png")];
        let session = SlideshowSession::new(paths.clone(), None).unwrap();
        paths.clear();
        assert_eq!(session.current(), Path::new("1.png"));
        assert_eq!(session.peek_next(), Path::new("2.png"));
    }
}
