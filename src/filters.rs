use crate::frames::{Frame, FrameSet};
use log::info;
use regex::Regex;
use std::sync::LazyLock;

/// Identities of owner-data frames injected by Google's music services,
/// e.g. `PRIV:Google/StoreId:...`.
pub const PRIVATE_TAG_PATTERN: &str = r"(?i)^[^:]+:google";

static DEFAULT_FILTER: LazyLock<PrivateTagFilter> = LazyLock::new(PrivateTagFilter::new);

/// Commits an edited tag collection to its backing storage.
pub trait Persist {
    type Error;

    fn persist(&mut self) -> Result<(), Self::Error>;
}

/// Finds and removes vendor private frames.
#[derive(Debug, Clone)]
pub struct PrivateTagFilter {
    pattern: Regex,
}

impl Default for PrivateTagFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivateTagFilter {
    pub fn new() -> Self {
        let pattern = Regex::new(PRIVATE_TAG_PATTERN).expect("private tag pattern is valid");
        Self::with_pattern(pattern)
    }

    /// Match owner-data identities against `pattern` instead.
    pub fn with_pattern(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Whether `frame` is an owner-data frame whose identity matches.
    pub fn matches(&self, frame: &Frame) -> bool {
        matches!(frame, Frame::OwnerData(_)) && self.pattern.is_match(&frame.identity())
    }

    /// Identities of every matching frame, in collection order.
    pub fn private_frames(&self, tags: &FrameSet) -> Vec<String> {
        tags.iter()
            .filter(|frame| self.matches(frame))
            .map(Frame::identity)
            .collect()
    }

    /// Remove every matching frame and return the removed identities.
    ///
    /// With `persist` set, `tags` is committed exactly once after the
    /// removals, whether or not anything matched. A failing commit is returned
    /// as is; the in-memory removals are kept.
    pub fn strip<T>(&self, tags: &mut T, persist: bool) -> Result<Vec<String>, T::Error>
    where
        T: AsMut<FrameSet> + Persist + ?Sized,
    {
        let frames = tags.as_mut();
        let removed = self.private_frames(frames);
        for identity in &removed {
            frames.remove(identity);
            info!("removed {identity}");
        }

        if persist {
            tags.persist()?;
        }
        Ok(removed)
    }
}

/// [`PrivateTagFilter::strip`] with the default pattern.
pub fn strip_private<T>(tags: &mut T, persist: bool) -> Result<Vec<String>, T::Error>
where
    T: AsMut<FrameSet> + Persist + ?Sized,
{
    DEFAULT_FILTER.strip(tags, persist)
}

/// Every frame except pictures, keyed by identity, in collection order.
pub fn non_picture(tags: &FrameSet) -> Vec<(String, &Frame)> {
    tags.iter()
        .filter(|frame| !frame.is_picture())
        .map(|frame| (frame.identity(), frame))
        .collect()
}

/// Only the pictures: the complement of [`non_picture`].
pub fn pictures(tags: &FrameSet) -> Vec<(String, &Frame)> {
    tags.iter()
        .filter(|frame| frame.is_picture())
        .map(|frame| (frame.identity(), frame))
        .collect()
}
