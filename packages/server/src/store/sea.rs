use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use tracing::instrument;

use super::records::{Artist, ArtistDraft, NewShow, Show, Venue, VenueDraft};
use super::{EntityStore, StoreError};
use crate::entity::{artist, show, venue};

/// Relational store backed by a sea-orm connection pool.
#[derive(Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn read_err(err: DbErr) -> StoreError {
    StoreError::Read(err.to_string())
}

fn write_err(err: DbErr) -> StoreError {
    StoreError::Write(err.to_string())
}

fn decode_genres(raw: serde_json::Value) -> Result<Vec<String>, StoreError> {
    serde_json::from_value(raw).map_err(|e| StoreError::Read(format!("malformed genres: {e}")))
}

fn encode_genres(genres: Vec<String>) -> serde_json::Value {
    serde_json::Value::Array(genres.into_iter().map(serde_json::Value::String).collect())
}

impl TryFrom<venue::Model> for Venue {
    type Error = StoreError;

    fn try_from(m: venue::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            name: m.name,
            city: m.city,
            state: m.state,
            address: m.address,
            phone: m.phone,
            genres: decode_genres(m.genres)?,
            image_link: m.image_link,
            facebook_link: m.facebook_link,
            website: m.website,
            seeking_talent: m.seeking_talent,
            seeking_description: m.seeking_description,
        })
    }
}

impl TryFrom<artist::Model> for Artist {
    type Error = StoreError;

    fn try_from(m: artist::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            name: m.name,
            city: m.city,
            state: m.state,
            phone: m.phone,
            genres: decode_genres(m.genres)?,
            image_link: m.image_link,
            facebook_link: m.facebook_link,
            website: m.website,
            seeking_venue: m.seeking_venue,
            seeking_description: m.seeking_description,
        })
    }
}

impl From<show::Model> for Show {
    fn from(m: show::Model) -> Self {
        Self {
            id: m.id,
            artist_id: m.artist_id,
            venue_id: m.venue_id,
            start_time: m.start_time,
        }
    }
}

fn apply_venue_draft(active: &mut venue::ActiveModel, draft: VenueDraft) {
    active.name = Set(draft.name);
    active.city = Set(draft.city);
    active.state = Set(draft.state);
    active.address = Set(draft.address);
    active.phone = Set(draft.phone);
    active.genres = Set(encode_genres(draft.genres));
    active.image_link = Set(draft.image_link);
    active.facebook_link = Set(draft.facebook_link);
    active.website = Set(draft.website);
    active.seeking_talent = Set(draft.seeking_talent);
    active.seeking_description = Set(draft.seeking_description);
}

fn apply_artist_draft(active: &mut artist::ActiveModel, draft: ArtistDraft) {
    active.name = Set(draft.name);
    active.city = Set(draft.city);
    active.state = Set(draft.state);
    active.phone = Set(draft.phone);
    active.genres = Set(encode_genres(draft.genres));
    active.image_link = Set(draft.image_link);
    active.facebook_link = Set(draft.facebook_link);
    active.website = Set(draft.website);
    active.seeking_venue = Set(draft.seeking_venue);
    active.seeking_description = Set(draft.seeking_description);
}

#[async_trait]
impl EntityStore for SeaOrmStore {
    async fn list_venues(&self) -> Result<Vec<Venue>, StoreError> {
        venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await
            .map_err(read_err)?
            .into_iter()
            .map(Venue::try_from)
            .collect()
    }

    async fn get_venue(&self, id: i32) -> Result<Option<Venue>, StoreError> {
        venue::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(read_err)?
            .map(Venue::try_from)
            .transpose()
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn insert_venue(&self, draft: VenueDraft) -> Result<Venue, StoreError> {
        let mut active = <venue::ActiveModel as Default>::default();
        apply_venue_draft(&mut active, draft);
        let model = active.insert(&self.db).await.map_err(write_err)?;
        Venue::try_from(model)
    }

    #[instrument(skip(self, draft))]
    async fn replace_venue(&self, id: i32, draft: VenueDraft) -> Result<Venue, StoreError> {
        let txn = self.db.begin().await.map_err(write_err)?;
        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(read_err)?
            .ok_or(StoreError::NotFound { entity: "Venue", id })?;

        let mut active: venue::ActiveModel = existing.into();
        apply_venue_draft(&mut active, draft);
        let model = active.update(&txn).await.map_err(write_err)?;
        txn.commit().await.map_err(write_err)?;

        Venue::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete_venue(&self, id: i32) -> Result<(), StoreError> {
        let txn = self.db.begin().await.map_err(write_err)?;
        venue::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(read_err)?
            .ok_or(StoreError::NotFound { entity: "Venue", id })?;

        show::Entity::delete_many()
            .filter(show::Column::VenueId.eq(id))
            .exec(&txn)
            .await
            .map_err(write_err)?;
        venue::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(write_err)?;

        txn.commit().await.map_err(write_err)
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, StoreError> {
        artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await
            .map_err(read_err)?
            .into_iter()
            .map(Artist::try_from)
            .collect()
    }

    async fn get_artist(&self, id: i32) -> Result<Option<Artist>, StoreError> {
        artist::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(read_err)?
            .map(Artist::try_from)
            .transpose()
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn insert_artist(&self, draft: ArtistDraft) -> Result<Artist, StoreError> {
        let mut active = <artist::ActiveModel as Default>::default();
        apply_artist_draft(&mut active, draft);
        let model = active.insert(&self.db).await.map_err(write_err)?;
        Artist::try_from(model)
    }

    #[instrument(skip(self, draft))]
    async fn replace_artist(&self, id: i32, draft: ArtistDraft) -> Result<Artist, StoreError> {
        let txn = self.db.begin().await.map_err(write_err)?;
        let existing = artist::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(read_err)?
            .ok_or(StoreError::NotFound {
                entity: "Artist",
                id,
            })?;

        let mut active: artist::ActiveModel = existing.into();
        apply_artist_draft(&mut active, draft);
        let model = active.update(&txn).await.map_err(write_err)?;
        txn.commit().await.map_err(write_err)?;

        Artist::try_from(model)
    }

    async fn list_shows(&self) -> Result<Vec<Show>, StoreError> {
        let rows = show::Entity::find()
            .order_by_asc(show::Column::Id)
            .all(&self.db)
            .await
            .map_err(read_err)?;
        Ok(rows.into_iter().map(Show::from).collect())
    }

    async fn shows_for_venue(&self, venue_id: i32) -> Result<Vec<Show>, StoreError> {
        let rows = show::Entity::find()
            .filter(show::Column::VenueId.eq(venue_id))
            .order_by_asc(show::Column::Id)
            .all(&self.db)
            .await
            .map_err(read_err)?;
        Ok(rows.into_iter().map(Show::from).collect())
    }

    async fn shows_for_artist(&self, artist_id: i32) -> Result<Vec<Show>, StoreError> {
        let rows = show::Entity::find()
            .filter(show::Column::ArtistId.eq(artist_id))
            .order_by_asc(show::Column::Id)
            .all(&self.db)
            .await
            .map_err(read_err)?;
        Ok(rows.into_iter().map(Show::from).collect())
    }

    #[instrument(skip(self), fields(artist_id = new_show.artist_id, venue_id = new_show.venue_id))]
    async fn insert_show(&self, new_show: NewShow) -> Result<Show, StoreError> {
        let active = show::ActiveModel {
            artist_id: Set(new_show.artist_id),
            venue_id: Set(new_show.venue_id),
            start_time: Set(new_show.start_time),
            ..Default::default()
        };
        let model = active.insert(&self.db).await.map_err(write_err)?;
        Ok(model.into())
    }
}
