use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::AppInput;
use crate::models::search::SearchRequest;
use crate::models::venue::{VenueRequest, VenueResponse};
use crate::read_model::aggregator::{LocationGroup, SearchResults, VenueDetail};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Venues",
    operation_id = "listVenues",
    summary = "List venues grouped by location",
    description = "Returns one group per distinct (city, state) pair in first-seen order. Each venue carries its number of upcoming shows.",
    responses(
        (status = 200, description = "Venues grouped by city and state", body = Vec<LocationGroup>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationGroup>>, AppError> {
    let groups = state.booking.venues_by_location(Utc::now()).await?;
    Ok(Json(groups))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Venues",
    operation_id = "createVenue",
    summary = "Create a venue",
    description = "Accepts JSON or an urlencoded form. `seeking_talent` is true only for JSON `true` or the string `y`.",
    request_body = VenueRequest,
    responses(
        (status = 201, description = "Venue created", body = VenueResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Store write failed (STORE_WRITE_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_venue(
    State(state): State<AppState>,
    AppInput(payload): AppInput<VenueRequest>,
) -> Result<impl IntoResponse, AppError> {
    let draft = payload.into_draft()?;
    let venue = state.booking.create_venue(draft).await?;
    Ok((StatusCode::CREATED, Json(VenueResponse::from(venue))))
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "Venues",
    operation_id = "searchVenues",
    summary = "Search venues by name",
    description = "Case-insensitive substring match on the venue name. An empty term returns every venue.",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching venues", body = SearchResults),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(term = %payload.search_term))]
pub async fn search_venues(
    State(state): State<AppState>,
    AppInput(payload): AppInput<SearchRequest>,
) -> Result<Json<SearchResults>, AppError> {
    let results = state
        .booking
        .search_venues(&payload.search_term, Utc::now())
        .await?;
    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Venues",
    operation_id = "getVenue",
    summary = "Get a venue with its past and upcoming shows",
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Venue detail", body = VenueDetail),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VenueDetail>, AppError> {
    let detail = state.booking.venue_detail(id, Utc::now()).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Venues",
    operation_id = "replaceVenue",
    summary = "Replace a venue",
    description = "Full replacement: every attribute is taken from the submission. Absent or blank optional fields are cleared.",
    params(("id" = i32, Path, description = "Venue ID")),
    request_body = VenueRequest,
    responses(
        (status = 200, description = "Venue replaced", body = VenueResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Store write failed (STORE_WRITE_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn replace_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppInput(payload): AppInput<VenueRequest>,
) -> Result<Json<VenueResponse>, AppError> {
    let draft = payload.into_draft()?;
    let venue = state.booking.replace_venue(id, draft).await?;
    Ok(Json(venue.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Venues",
    operation_id = "deleteVenue",
    summary = "Delete a venue and its shows",
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 204, description = "Venue deleted"),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Store write failed (STORE_WRITE_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.booking.delete_venue(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/{id}/edit",
    tag = "Venues",
    operation_id = "editVenue",
    summary = "Get the stored venue record for an edit form",
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Stored venue", body = VenueResponse),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VenueResponse>, AppError> {
    let venue = state.booking.venue_record(id).await?;
    Ok(Json(venue.into()))
}
