use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::records::{Artist, ArtistDraft, NewShow, Show, Venue, VenueDraft};
use super::{EntityStore, StoreError};

#[derive(Default)]
struct Tables {
    venues: BTreeMap<i32, Venue>,
    artists: BTreeMap<i32, Artist>,
    shows: BTreeMap<i32, Show>,
    last_venue_id: i32,
    last_artist_id: i32,
    last_show_id: i32,
}

/// In-process store backed by ordered maps.
///
/// Ids are assigned sequentially from 1 per entity kind and never reused.
/// No foreign keys are enforced; show references are checked by the
/// validator before `insert_show` is reached.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn list_venues(&self) -> Result<Vec<Venue>, StoreError> {
        Ok(self.tables.read().await.venues.values().cloned().collect())
    }

    async fn get_venue(&self, id: i32) -> Result<Option<Venue>, StoreError> {
        Ok(self.tables.read().await.venues.get(&id).cloned())
    }

    async fn insert_venue(&self, draft: VenueDraft) -> Result<Venue, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_venue_id += 1;
        let venue = draft.into_venue(tables.last_venue_id);
        tables.venues.insert(venue.id, venue.clone());
        Ok(venue)
    }

    async fn replace_venue(&self, id: i32, draft: VenueDraft) -> Result<Venue, StoreError> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .venues
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "Venue", id })?;
        *slot = draft.into_venue(id);
        Ok(slot.clone())
    }

    async fn delete_venue(&self, id: i32) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.venues.contains_key(&id) {
            return Err(StoreError::NotFound { entity: "Venue", id });
        }
        tables.shows.retain(|_, show| show.venue_id != id);
        tables.venues.remove(&id);
        Ok(())
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, StoreError> {
        Ok(self.tables.read().await.artists.values().cloned().collect())
    }

    async fn get_artist(&self, id: i32) -> Result<Option<Artist>, StoreError> {
        Ok(self.tables.read().await.artists.get(&id).cloned())
    }

    async fn insert_artist(&self, draft: ArtistDraft) -> Result<Artist, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_artist_id += 1;
        let artist = draft.into_artist(tables.last_artist_id);
        tables.artists.insert(artist.id, artist.clone());
        Ok(artist)
    }

    async fn replace_artist(&self, id: i32, draft: ArtistDraft) -> Result<Artist, StoreError> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .artists
            .get_mut(&id)
            .ok_or(StoreError::NotFound {
                entity: "Artist",
                id,
            })?;
        *slot = draft.into_artist(id);
        Ok(slot.clone())
    }

    async fn list_shows(&self) -> Result<Vec<Show>, StoreError> {
        Ok(self.tables.read().await.shows.values().cloned().collect())
    }

    async fn shows_for_venue(&self, venue_id: i32) -> Result<Vec<Show>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .shows
            .values()
            .filter(|show| show.venue_id == venue_id)
            .cloned()
            .collect())
    }

    async fn shows_for_artist(&self, artist_id: i32) -> Result<Vec<Show>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .shows
            .values()
            .filter(|show| show.artist_id == artist_id)
            .cloned()
            .collect())
    }

    async fn insert_show(&self, show: NewShow) -> Result<Show, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_show_id += 1;
        let show = Show {
            id: tables.last_show_id,
            artist_id: show.artist_id,
            venue_id: show.venue_id,
            start_time: show.start_time,
        };
        tables.shows.insert(show.id, show.clone());
        Ok(show)
    }
}
