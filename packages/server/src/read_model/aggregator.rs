//! Display records built from entity data and classified shows.
//!
//! Every builder here is a pure function over records fetched by the caller.
//! A show whose counterpart record is missing from the supplied list is
//! skipped and logged rather than failing the whole view.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::classifier::{classify, count_upcoming, format_start_time};
use crate::store::{Artist, Show, Venue};

/// A show as listed on a venue page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ArtistShowSummary {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[schema(example = "2035-04-01 20:00:00")]
    pub start_time: String,
}

/// A show as listed on an artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct VenueShowSummary {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    #[schema(example = "2035-04-01 20:00:00")]
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShowSummary>,
    pub upcoming_shows: Vec<ArtistShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShowSummary>,
    pub upcoming_shows: Vec<VenueShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// A venue or artist annotated with how many of its shows are still ahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct EntitySummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct LocationGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<EntitySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<EntitySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ArtistListItem {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[schema(example = "2035-04-01 20:00:00")]
    pub start_time: String,
}

/// Entities that can be searched and summarized by name.
pub trait Named {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
}

impl Named for Venue {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Artist {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn index_by_id<T: Named>(items: &[T]) -> HashMap<i32, &T> {
    items.iter().map(|item| (item.id(), item)).collect()
}

/// Build the venue page: every venue attribute plus its classified shows.
pub fn venue_detail(
    venue: Venue,
    shows: Vec<Show>,
    artists: &[Artist],
    reference: DateTime<Utc>,
) -> VenueDetail {
    let artists = index_by_id(artists);
    let summaries = shows.into_iter().filter_map(|show| {
        let Some(artist) = artists.get(&show.artist_id) else {
            tracing::warn!(show_id = show.id, artist_id = show.artist_id, "Show references missing artist");
            return None;
        };
        Some((
            show.start_time,
            ArtistShowSummary {
                artist_id: artist.id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: format_start_time(&show.start_time),
            },
        ))
    });
    let classified = classify(reference, summaries, |(start, _)| *start).map(|(_, s)| s);

    VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: classified.past_count(),
        upcoming_shows_count: classified.upcoming_count(),
        past_shows: classified.past,
        upcoming_shows: classified.upcoming,
    }
}

/// Build the artist page, the mirror image of [`venue_detail`].
pub fn artist_detail(
    artist: Artist,
    shows: Vec<Show>,
    venues: &[Venue],
    reference: DateTime<Utc>,
) -> ArtistDetail {
    let venues = index_by_id(venues);
    let summaries = shows.into_iter().filter_map(|show| {
        let Some(venue) = venues.get(&show.venue_id) else {
            tracing::warn!(show_id = show.id, venue_id = show.venue_id, "Show references missing venue");
            return None;
        };
        Some((
            show.start_time,
            VenueShowSummary {
                venue_id: venue.id,
                venue_name: venue.name.clone(),
                venue_image_link: venue.image_link.clone(),
                start_time: format_start_time(&show.start_time),
            },
        ))
    });
    let classified = classify(reference, summaries, |(start, _)| *start).map(|(_, s)| s);

    ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: classified.past_count(),
        upcoming_shows_count: classified.upcoming_count(),
        past_shows: classified.past,
        upcoming_shows: classified.upcoming,
    }
}

fn summarize<T: Named>(
    item: &T,
    shows_by_owner: &HashMap<i32, Vec<&Show>>,
    reference: DateTime<Utc>,
) -> EntitySummary {
    let num_upcoming_shows = shows_by_owner
        .get(&item.id())
        .map(|shows| count_upcoming(reference, shows.iter().copied(), |s: &Show| s.start_time))
        .unwrap_or(0);
    EntitySummary {
        id: item.id(),
        name: item.name().to_string(),
        num_upcoming_shows,
    }
}

fn group_shows(shows: &[Show], owner: fn(&Show) -> i32) -> HashMap<i32, Vec<&Show>> {
    let mut grouped: HashMap<i32, Vec<&Show>> = HashMap::new();
    for show in shows {
        grouped.entry(owner(show)).or_default().push(show);
    }
    grouped
}

/// Group venues by (city, state) in first-seen order.
pub fn group_by_location(
    venues: &[Venue],
    shows: &[Show],
    reference: DateTime<Utc>,
) -> Vec<LocationGroup> {
    let shows_by_venue = group_shows(shows, |s| s.venue_id);
    let mut groups: Vec<LocationGroup> = Vec::new();

    for venue in venues {
        let summary = summarize(venue, &shows_by_venue, reference);
        match groups
            .iter_mut()
            .find(|g| g.city == venue.city && g.state == venue.state)
        {
            Some(group) => group.venues.push(summary),
            None => groups.push(LocationGroup {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![summary],
            }),
        }
    }

    groups
}

/// Case-insensitive substring match on name. An empty term matches everything.
pub fn search_by_name<'a, T: Named>(term: &str, items: &'a [T]) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect()
}

pub fn search_venues(
    term: &str,
    venues: &[Venue],
    shows: &[Show],
    reference: DateTime<Utc>,
) -> SearchResults {
    let shows_by_venue = group_shows(shows, |s| s.venue_id);
    search_results(term, venues, &shows_by_venue, reference)
}

pub fn search_artists(
    term: &str,
    artists: &[Artist],
    shows: &[Show],
    reference: DateTime<Utc>,
) -> SearchResults {
    let shows_by_artist = group_shows(shows, |s| s.artist_id);
    search_results(term, artists, &shows_by_artist, reference)
}

fn search_results<T: Named>(
    term: &str,
    items: &[T],
    shows_by_owner: &HashMap<i32, Vec<&Show>>,
    reference: DateTime<Utc>,
) -> SearchResults {
    let data: Vec<EntitySummary> = search_by_name(term, items)
        .into_iter()
        .map(|item| summarize(item, shows_by_owner, reference))
        .collect();
    SearchResults {
        count: data.len(),
        data,
    }
}

pub fn list_artists(artists: &[Artist]) -> Vec<ArtistListItem> {
    artists
        .iter()
        .map(|a| ArtistListItem {
            id: a.id,
            name: a.name.clone(),
        })
        .collect()
}

/// One row per show, joined with its venue and artist.
pub fn list_shows(shows: &[Show], venues: &[Venue], artists: &[Artist]) -> Vec<ShowListing> {
    let venues = index_by_id(venues);
    let artists = index_by_id(artists);

    shows
        .iter()
        .filter_map(|show| {
            let (Some(venue), Some(artist)) =
                (venues.get(&show.venue_id), artists.get(&show.artist_id))
            else {
                tracing::warn!(show_id = show.id, "Show references missing venue or artist");
                return None;
            };
            Some(ShowListing {
                venue_id: venue.id,
                venue_name: venue.name.clone(),
                artist_id: artist.id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: format_start_time(&show.start_time),
            })
        })
        .collect()
}
