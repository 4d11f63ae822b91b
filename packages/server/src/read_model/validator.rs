//! Existence check for show proposals.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::store::{Artist, NewShow, Venue};

/// Raw show submission. Every field arrives as text because form posts
/// carry no types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowProposal {
    pub artist_id: Option<String>,
    pub venue_id: Option<String>,
    pub start_time: Option<String>,
}

/// Why a show proposal was refused. Checks run in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShowRejection {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    #[error("unknown artist: {0}")]
    UnknownArtist(i32),

    #[error("unknown venue: {0}")]
    UnknownVenue(i32),
}

impl ShowRejection {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::UnknownArtist(_) => "UNKNOWN_ARTIST",
            Self::UnknownVenue(_) => "UNKNOWN_VENUE",
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing field",
            Self::InvalidField(_) => "invalid field",
            Self::UnknownArtist(_) => "unknown artist",
            Self::UnknownVenue(_) => "unknown venue",
        }
    }
}

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a submitted start time. Values without an offset are taken as UTC.
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn present<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, ShowRejection> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ShowRejection::MissingField(field)),
    }
}

fn parse_id(raw: &str, field: &'static str) -> Result<i32, ShowRejection> {
    raw.parse().map_err(|_| ShowRejection::InvalidField(field))
}

/// Accept the proposal only if both referenced records exist.
///
/// Reads nothing but the supplied lists, so it never touches the store.
pub fn validate_show(
    proposal: &ShowProposal,
    artists: &[Artist],
    venues: &[Venue],
) -> Result<NewShow, ShowRejection> {
    let artist_raw = present(&proposal.artist_id, "artist_id")?;
    let venue_raw = present(&proposal.venue_id, "venue_id")?;
    let start_raw = present(&proposal.start_time, "start_time")?;

    let artist_id = parse_id(artist_raw, "artist_id")?;
    let venue_id = parse_id(venue_raw, "venue_id")?;
    let start_time =
        parse_start_time(start_raw).ok_or(ShowRejection::InvalidField("start_time"))?;

    if !artists.iter().any(|a| a.id == artist_id) {
        return Err(ShowRejection::UnknownArtist(artist_id));
    }
    if !venues.iter().any(|v| v.id == venue_id) {
        return Err(ShowRejection::UnknownVenue(venue_id));
    }

    Ok(NewShow {
        artist_id,
        venue_id,
        start_time,
    })
}
