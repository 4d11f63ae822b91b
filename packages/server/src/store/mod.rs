//! Persistence boundary for venues, artists and shows.

mod error;
pub mod memory;
pub mod records;
pub mod sea;

use async_trait::async_trait;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use records::{Artist, ArtistDraft, NewShow, Show, Venue, VenueDraft};
pub use sea::SeaOrmStore;

/// Repository over the three entity kinds.
///
/// Listings are ordered by ascending id. Single-record lookups return `None`
/// for an unknown id so callers can tell "missing" apart from "empty".
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn list_venues(&self) -> Result<Vec<Venue>, StoreError>;

    async fn get_venue(&self, id: i32) -> Result<Option<Venue>, StoreError>;

    async fn insert_venue(&self, draft: VenueDraft) -> Result<Venue, StoreError>;

    /// Overwrite every attribute of an existing venue.
    async fn replace_venue(&self, id: i32, draft: VenueDraft) -> Result<Venue, StoreError>;

    /// Delete the venue's shows, then the venue itself.
    async fn delete_venue(&self, id: i32) -> Result<(), StoreError>;

    async fn list_artists(&self) -> Result<Vec<Artist>, StoreError>;

    async fn get_artist(&self, id: i32) -> Result<Option<Artist>, StoreError>;

    async fn insert_artist(&self, draft: ArtistDraft) -> Result<Artist, StoreError>;

    /// Overwrite every attribute of an existing artist.
    async fn replace_artist(&self, id: i32, draft: ArtistDraft) -> Result<Artist, StoreError>;

    async fn list_shows(&self) -> Result<Vec<Show>, StoreError>;

    async fn shows_for_venue(&self, venue_id: i32) -> Result<Vec<Show>, StoreError>;

    async fn shows_for_artist(&self, artist_id: i32) -> Result<Vec<Show>, StoreError>;

    async fn insert_show(&self, show: NewShow) -> Result<Show, StoreError>;
}
