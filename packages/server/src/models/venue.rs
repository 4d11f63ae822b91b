use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::store::{Venue, VenueDraft};

use super::shared::{clean_genres, flag, non_blank, validate_required};

/// Venue form submission. Used for both create and full replacement.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct VenueRequest {
    #[serde(default)]
    #[schema(example = "The Musical Hop")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "San Francisco")]
    pub city: String,
    #[serde(default)]
    #[schema(example = "CA")]
    pub state: String,
    #[serde(default)]
    pub address: Option<String>,
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
    /// `true`, or the string `"y"` from a checkbox. Anything else is `false`.
    #[serde(default, deserialize_with = "flag")]
    #[schema(value_type = Option<bool>)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl VenueRequest {
    /// Validate required fields and normalize blanks into a store draft.
    pub fn into_draft(self) -> Result<VenueDraft, AppError> {
        validate_required("Name", &self.name)?;
        validate_required("City", &self.city)?;
        validate_required("State", &self.state)?;

        Ok(VenueDraft {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: non_blank(self.address),
            phone: non_blank(self.phone),
            genres: clean_genres(self.genres),
            image_link: non_blank(self.image_link),
            facebook_link: non_blank(self.facebook_link),
            website: non_blank(self.website),
            seeking_talent: self.seeking_talent,
            seeking_description: non_blank(self.seeking_description),
        })
    }
}

/// A stored venue exactly as persisted.
#[derive(Serialize, utoipa::ToSchema)]
pub struct VenueResponse {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<Venue> for VenueResponse {
    fn from(v: Venue) -> Self {
        Self {
            id: v.id,
            name: v.name,
            city: v.city,
            state: v.state,
            address: v.address,
            phone: v.phone,
            genres: v.genres,
            image_link: v.image_link,
            facebook_link: v.facebook_link,
            website: v.website,
            seeking_talent: v.seeking_talent,
            seeking_description: v.seeking_description,
        }
    }
}
