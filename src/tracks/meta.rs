//! Track metadata records.

use std::sync::Arc;
use std::time::Duration;

/// Difficulty tier attached to a track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tier {
    Easy,
    #[default]
    Normal,
    Hard,
    Expert,
}

/// Metadata record for a single track.
///
/// Built with [`TrackMeta::new`] plus the `with_*` setters:
///
/// ```
/// use std::time::Duration;
/// use signalbus::{Tier, TrackMeta};
///
/// let meta = TrackMeta::new("intro", "Intro Theme", "The Composers")
///     .with_tier(Tier::Hard)
///     .with_duration(Duration::from_secs(184));
///
/// assert_eq!(meta.id.as_ref(), "intro");
/// assert_eq!(meta.tier, Tier::Hard);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackMeta {
    /// Stable identifier, unique within a catalog.
    pub id: Arc<str>,
    /// Display title.
    pub title: String,
    /// Performing or composing artist.
    pub artist: String,
    /// Difficulty tier.
    pub tier: Tier,
    /// Playback length, when known.
    pub duration: Option<Duration>,
}

impl TrackMeta {
    /// Creates a record with [`Tier::Normal`] and no duration.
    pub fn new(
        id: impl Into<Arc<str>>,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            tier: Tier::default(),
            duration: None,
        }
    }

    /// Sets the difficulty tier.
    #[inline]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Sets the playback length.
    #[inline]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}
