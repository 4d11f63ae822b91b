use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::instrument;

use super::aggregator::{self, ArtistDetail, ArtistListItem, LocationGroup, SearchResults, ShowListing, VenueDetail};
use super::validator::{ShowProposal, ShowRejection, validate_show};
use crate::store::{Artist, ArtistDraft, EntityStore, Show, StoreError, Venue, VenueDraft};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error(transparent)]
    Rejected(#[from] ShowRejection),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => BookingError::NotFound { entity, id },
            other => BookingError::Store(other),
        }
    }
}

/// Read-model operations over an injected store.
///
/// Every call fetches fresh records; nothing is cached between requests.
#[derive(Clone)]
pub struct Booking {
    store: Arc<dyn EntityStore>,
}

impl Booking {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn venues_by_location(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<LocationGroup>, BookingError> {
        let venues = self.store.list_venues().await?;
        let shows = self.store.list_shows().await?;
        Ok(aggregator::group_by_location(&venues, &shows, now))
    }

    pub async fn venue_detail(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<VenueDetail, BookingError> {
        let venue = self.venue_record(id).await?;
        let shows = self.store.shows_for_venue(id).await?;
        let artists = self.store.list_artists().await?;
        Ok(aggregator::venue_detail(venue, shows, &artists, now))
    }

    /// The stored venue as-is, for prefilling an edit form.
    pub async fn venue_record(&self, id: i32) -> Result<Venue, BookingError> {
        self.store
            .get_venue(id)
            .await?
            .ok_or(BookingError::NotFound { entity: "Venue", id })
    }

    pub async fn search_venues(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, BookingError> {
        let venues = self.store.list_venues().await?;
        let shows = self.store.list_shows().await?;
        Ok(aggregator::search_venues(term, &venues, &shows, now))
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_venue(&self, draft: VenueDraft) -> Result<Venue, BookingError> {
        let venue = self.store.insert_venue(draft).await?;
        tracing::info!(id = venue.id, "Venue created");
        Ok(venue)
    }

    #[instrument(skip(self, draft))]
    pub async fn replace_venue(&self, id: i32, draft: VenueDraft) -> Result<Venue, BookingError> {
        let venue = self.store.replace_venue(id, draft).await?;
        tracing::info!("Venue replaced");
        Ok(venue)
    }

    #[instrument(skip(self))]
    pub async fn delete_venue(&self, id: i32) -> Result<(), BookingError> {
        self.store.delete_venue(id).await?;
        tracing::info!("Venue deleted with its shows");
        Ok(())
    }

    pub async fn list_artists(&self) -> Result<Vec<ArtistListItem>, BookingError> {
        let artists = self.store.list_artists().await?;
        Ok(aggregator::list_artists(&artists))
    }

    pub async fn artist_detail(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<ArtistDetail, BookingError> {
        let artist = self.artist_record(id).await?;
        let shows = self.store.shows_for_artist(id).await?;
        let venues = self.store.list_venues().await?;
        Ok(aggregator::artist_detail(artist, shows, &venues, now))
    }

    pub async fn artist_record(&self, id: i32) -> Result<Artist, BookingError> {
        self.store
            .get_artist(id)
            .await?
            .ok_or(BookingError::NotFound {
                entity: "Artist",
                id,
            })
    }

    pub async fn search_artists(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, BookingError> {
        let artists = self.store.list_artists().await?;
        let shows = self.store.list_shows().await?;
        Ok(aggregator::search_artists(term, &artists, &shows, now))
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_artist(&self, draft: ArtistDraft) -> Result<Artist, BookingError> {
        let artist = self.store.insert_artist(draft).await?;
        tracing::info!(id = artist.id, "Artist created");
        Ok(artist)
    }

    #[instrument(skip(self, draft))]
    pub async fn replace_artist(
        &self,
        id: i32,
        draft: ArtistDraft,
    ) -> Result<Artist, BookingError> {
        let artist = self.store.replace_artist(id, draft).await?;
        tracing::info!("Artist replaced");
        Ok(artist)
    }

    pub async fn list_shows(&self) -> Result<Vec<ShowListing>, BookingError> {
        let shows = self.store.list_shows().await?;
        let venues = self.store.list_venues().await?;
        let artists = self.store.list_artists().await?;
        Ok(aggregator::list_shows(&shows, &venues, &artists))
    }

    /// Validate the proposal against current records, then insert it.
    ///
    /// A rejected proposal never reaches the store's write path.
    #[instrument(skip(self, proposal))]
    pub async fn create_show(&self, proposal: ShowProposal) -> Result<Show, BookingError> {
        let artists = self.store.list_artists().await?;
        let venues = self.store.list_venues().await?;

        let new_show = validate_show(&proposal, &artists, &venues).inspect_err(|rejection| {
            tracing::info!(code = rejection.code(), "Show proposal rejected");
        })?;

        let show = self.store.insert_show(new_show).await?;
        tracing::info!(
            id = show.id,
            artist_id = show.artist_id,
            venue_id = show.venue_id,
            "Show created"
        );
        Ok(show)
    }
}
