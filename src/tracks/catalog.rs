//! # Track catalog - keyed metadata table with bus announcements.
//!
//! [`TrackCatalog`] stores [`TrackMeta`] records keyed by track id and answers
//! point lookups plus linear-scan queries. It is independent of the bus for
//! storage and queries, but acts as a *producer* of named events: when
//! constructed with [`TrackCatalog::with_bus`], every mutation is announced on
//! a well-known topic (see [`topics`]).
//!
//! ## Rules
//! - Ids are unique: registering a duplicate id is rejected, not overwritten.
//! - Lookup misses (`remove`, `get`) are benign, not errors.
//! - Scan results are sorted by id so query output is deterministic.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::events::EventBus;
use crate::tracks::meta::{Tier, TrackMeta};

/// Topics on which [`TrackCatalog`] announces mutations.
pub mod topics {
    /// A track was registered; payload [`CatalogEvent::TrackRegistered`](super::CatalogEvent).
    pub const TRACK_REGISTERED: &str = "catalog/track_registered";
    /// A track was removed; payload [`CatalogEvent::TrackRemoved`](super::CatalogEvent).
    pub const TRACK_REMOVED: &str = "catalog/track_removed";
    /// The catalog was emptied; payload [`CatalogEvent::CatalogCleared`](super::CatalogEvent).
    pub const CATALOG_CLEARED: &str = "catalog/cleared";
}

/// Announcement payload published by the catalog.
///
/// One variant per known event shape, so consumers can match instead of
/// decoding an untyped payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEvent {
    /// Emitted on successful [`TrackCatalog::register`].
    TrackRegistered {
        /// Id of the new track.
        id: Arc<str>,
    },
    /// Emitted when [`TrackCatalog::remove`] removes a track.
    TrackRemoved {
        /// Id of the removed track.
        id: Arc<str>,
    },
    /// Emitted when [`TrackCatalog::clear`] removes anything.
    CatalogCleared {
        /// Number of tracks that were removed.
        removed: usize,
    },
}

/// Keyed table of track metadata, optionally announcing mutations on a bus.
pub struct TrackCatalog {
    tracks: HashMap<Arc<str>, TrackMeta>,
    announcer: Option<Arc<EventBus<CatalogEvent>>>,
}

impl TrackCatalog {
    /// Creates an empty catalog with no announcement bus.
    pub fn new() -> Self {
        Self {
            tracks: HashMap::new(),
            announcer: None,
        }
    }

    /// Creates an empty catalog that announces mutations on `bus`.
    pub fn with_bus(bus: Arc<EventBus<CatalogEvent>>) -> Self {
        Self {
            tracks: HashMap::new(),
            announcer: Some(bus),
        }
    }

    /// Registers a new track.
    ///
    /// Rejects an id that is already present; the existing record is kept
    /// untouched. Announces [`CatalogEvent::TrackRegistered`] on success.
    pub fn register(&mut self, meta: TrackMeta) -> Result<(), CatalogError> {
        if self.tracks.contains_key(&meta.id) {
            return Err(CatalogError::DuplicateTrack {
                id: Arc::clone(&meta.id),
            });
        }
        let id = Arc::clone(&meta.id);
        self.tracks.insert(Arc::clone(&id), meta);
        self.announce(topics::TRACK_REGISTERED, CatalogEvent::TrackRegistered { id });
        Ok(())
    }

    /// Removes a track and returns its record; `None` if the id is unknown.
    ///
    /// Announces [`CatalogEvent::TrackRemoved`] when something was removed.
    pub fn remove(&mut self, id: &str) -> Option<TrackMeta> {
        let meta = self.tracks.remove(id)?;
        self.announce(
            topics::TRACK_REMOVED,
            CatalogEvent::TrackRemoved {
                id: Arc::clone(&meta.id),
            },
        );
        Some(meta)
    }

    /// Empties the catalog.
    ///
    /// Announces [`CatalogEvent::CatalogCleared`] with the number of removed
    /// tracks; clearing an already-empty catalog announces nothing.
    pub fn clear(&mut self) {
        let removed = self.tracks.len();
        if removed == 0 {
            return;
        }
        self.tracks.clear();
        self.announce(
            topics::CATALOG_CLEARED,
            CatalogEvent::CatalogCleared { removed },
        );
    }

    /// Returns the record for an id, if registered.
    pub fn get(&self, id: &str) -> Option<&TrackMeta> {
        self.tracks.get(id)
    }

    /// Returns true if the id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.tracks.contains_key(id)
    }

    /// Number of registered tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns true if no track is registered.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Returns the sorted list of registered track ids.
    pub fn track_ids(&self) -> Vec<Arc<str>> {
        let mut ids: Vec<Arc<str>> = self.tracks.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Linear scan: every track by this artist (exact match), sorted by id.
    pub fn by_artist(&self, artist: &str) -> Vec<&TrackMeta> {
        let mut hits: Vec<&TrackMeta> = self
            .tracks
            .values()
            .filter(|meta| meta.artist == artist)
            .collect();
        hits.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        hits
    }

    /// Linear scan: every track at this tier, sorted by id.
    pub fn by_tier(&self, tier: Tier) -> Vec<&TrackMeta> {
        let mut hits: Vec<&TrackMeta> = self
            .tracks
            .values()
            .filter(|meta| meta.tier == tier)
            .collect();
        hits.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        hits
    }

    fn announce(&self, topic: &str, event: CatalogEvent) {
        if let Some(bus) = &self.announcer {
            bus.publish(topic, &event);
        }
    }
}

impl Default for TrackCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::subscribers::SubscriberFn;

    fn sample() -> TrackCatalog {
        let mut catalog = TrackCatalog::new();
        catalog
            .register(
                TrackMeta::new("intro", "Intro Theme", "The Composers")
                    .with_duration(Duration::from_secs(92)),
            )
            .unwrap();
        catalog
            .register(
                TrackMeta::new("finale", "Grand Finale", "The Composers").with_tier(Tier::Expert),
            )
            .unwrap();
        catalog
            .register(TrackMeta::new("bridge", "Bridge Section", "Solo Act").with_tier(Tier::Hard))
            .unwrap();
        catalog
    }

    #[test]
    fn test_register_and_lookup() {
        let catalog = sample();

        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("intro"));
        assert_eq!(catalog.get("intro").unwrap().title, "Intro Theme");
        assert_eq!(
            catalog.get("intro").unwrap().duration,
            Some(Duration::from_secs(92))
        );
        assert!(catalog.get("unknown").is_none());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut catalog = sample();
        let err = catalog
            .register(TrackMeta::new("intro", "Other", "Other"))
            .unwrap_err();

        assert_eq!(err.as_label(), "duplicate_track");
        assert_eq!(
            catalog.get("intro").unwrap().title,
            "Intro Theme",
            "the existing record must stay untouched"
        );
    }

    #[test]
    fn test_remove_returns_record_and_misses_are_none() {
        let mut catalog = sample();

        let meta = catalog.remove("bridge").expect("bridge was registered");
        assert_eq!(meta.artist, "Solo Act");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.remove("bridge").is_none());
    }

    #[test]
    fn test_track_ids_sorted() {
        let catalog = sample();
        let ids = catalog.track_ids();
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        assert_eq!(ids, vec!["bridge", "finale", "intro"]);
    }

    #[test]
    fn test_scans_filter_and_sort() {
        let catalog = sample();

        let composers = catalog.by_artist("The Composers");
        let ids: Vec<&str> = composers.iter().map(|m| m.id.as_ref()).collect();
        assert_eq!(ids, vec!["finale", "intro"]);

        let hard = catalog.by_tier(Tier::Hard);
        assert_eq!(hard.len(), 1);
        assert_eq!(hard[0].id.as_ref(), "bridge");

        assert!(catalog.by_artist("Nobody").is_empty());
    }

    #[test]
    fn test_mutations_are_announced_on_bus() {
        let bus = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = {
            let seen = Arc::clone(&seen);
            SubscriberFn::arc("recorder", move |event: &CatalogEvent| {
                seen.lock().unwrap().push(event.clone());
            })
        };
        bus.subscribe(topics::TRACK_REGISTERED, recorder.clone());
        bus.subscribe(topics::TRACK_REMOVED, recorder.clone());
        bus.subscribe(topics::CATALOG_CLEARED, recorder);

        let mut catalog = TrackCatalog::with_bus(Arc::clone(&bus));
        catalog
            .register(TrackMeta::new("intro", "Intro Theme", "The Composers"))
            .unwrap();
        assert!(catalog.remove("intro").is_some());
        catalog
            .register(TrackMeta::new("finale", "Grand Finale", "The Composers"))
            .unwrap();
        catalog.clear();
        catalog.clear(); // empty: no announcement

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                CatalogEvent::TrackRegistered { id: "intro".into() },
                CatalogEvent::TrackRemoved { id: "intro".into() },
                CatalogEvent::TrackRegistered { id: "finale".into() },
                CatalogEvent::CatalogCleared { removed: 1 },
            ]
        );
    }

    #[test]
    fn test_rejected_register_is_not_announced() {
        let bus = Arc::new(EventBus::new());
        let hits = Arc::new(Mutex::new(0usize));
        let recorder = {
            let hits = Arc::clone(&hits);
            SubscriberFn::arc("recorder", move |_: &CatalogEvent| {
                *hits.lock().unwrap() += 1;
            })
        };
        bus.subscribe(topics::TRACK_REGISTERED, recorder);

        let mut catalog = TrackCatalog::with_bus(Arc::clone(&bus));
        catalog
            .register(TrackMeta::new("intro", "Intro Theme", "The Composers"))
            .unwrap();
        let _ = catalog.register(TrackMeta::new("intro", "Copy", "Copy"));

        assert_eq!(*hits.lock().unwrap(), 1);
    }
}
