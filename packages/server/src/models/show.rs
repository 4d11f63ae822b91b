use serde::{Deserialize, Serialize};

use crate::read_model::ShowProposal;
use crate::read_model::classifier::format_start_time;
use crate::store::Show;

use super::shared::text_or_number;

/// Show submission. Ids may be numbers or numeric strings.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateShowRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    #[schema(value_type = Option<String>, example = "1")]
    pub artist_id: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    #[schema(value_type = Option<String>, example = "5")]
    pub venue_id: Option<String>,
    /// RFC 3339, or `YYYY-MM-DD[T ]HH:MM[:SS]` taken as UTC.
    #[serde(default)]
    #[schema(example = "2035-04-01T20:00:00")]
    pub start_time: Option<String>,
}

impl From<CreateShowRequest> for ShowProposal {
    fn from(req: CreateShowRequest) -> Self {
        Self {
            artist_id: req.artist_id,
            venue_id: req.venue_id,
            start_time: req.start_time,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ShowResponse {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    #[schema(example = "2035-04-01 20:00:00")]
    pub start_time: String,
}

impl From<Show> for ShowResponse {
    fn from(s: Show) -> Self {
        Self {
            id: s.id,
            artist_id: s.artist_id,
            venue_id: s.venue_id,
            start_time: format_start_time(&s.start_time),
        }
    }
}
