use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::store::{Artist, ArtistDraft};

use super::shared::{clean_genres, flag, non_blank, validate_required};

/// Artist form submission. Used for both create and full replacement.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ArtistRequest {
    #[serde(default)]
    #[schema(example = "Guns N Petals")]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    #[schema(value_type = Option<bool>)]
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl ArtistRequest {
    pub fn into_draft(self) -> Result<ArtistDraft, AppError> {
        validate_required("Name", &self.name)?;
        validate_required("City", &self.city)?;
        validate_required("State", &self.state)?;

        Ok(ArtistDraft {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: non_blank(self.phone),
            genres: clean_genres(self.genres),
            image_link: non_blank(self.image_link),
            facebook_link: non_blank(self.facebook_link),
            website: non_blank(self.website),
            seeking_venue: self.seeking_venue,
            seeking_description: non_blank(self.seeking_description),
        })
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ArtistResponse {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<Artist> for ArtistResponse {
    fn from(a: Artist) -> Self {
        Self {
            id: a.id,
            name: a.name,
            city: a.city,
            state: a.state,
            phone: a.phone,
            genres: a.genres,
            image_link: a.image_link,
            facebook_link: a.facebook_link,
            website: a.website,
            seeking_venue: a.seeking_venue,
            seeking_description: a.seeking_description,
        }
    }
}
