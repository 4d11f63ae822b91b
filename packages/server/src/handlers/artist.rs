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
use crate::models::artist::{ArtistRequest, ArtistResponse};
use crate::models::search::SearchRequest;
use crate::read_model::aggregator::{ArtistDetail, ArtistListItem, SearchResults};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Artists",
    operation_id = "listArtists",
    summary = "List all artists",
    responses(
        (status = 200, description = "Artist ids and names", body = Vec<ArtistListItem>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArtistListItem>>, AppError> {
    Ok(Json(state.booking.list_artists().await?))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Artists",
    operation_id = "createArtist",
    summary = "Create an artist",
    description = "Accepts JSON or an urlencoded form. `seeking_venue` is true only for JSON `true` or the string `y`.",
    request_body = ArtistRequest,
    responses(
        (status = 201, description = "Artist created", body = ArtistResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Store write failed (STORE_WRITE_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_artist(
    State(state): State<AppState>,
    AppInput(payload): AppInput<ArtistRequest>,
) -> Result<impl IntoResponse, AppError> {
    let draft = payload.into_draft()?;
    let artist = state.booking.create_artist(draft).await?;
    Ok((StatusCode::CREATED, Json(ArtistResponse::from(artist))))
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "Artists",
    operation_id = "searchArtists",
    summary = "Search artists by name",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching artists", body = SearchResults),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(term = %payload.search_term))]
pub async fn search_artists(
    State(state): State<AppState>,
    AppInput(payload): AppInput<SearchRequest>,
) -> Result<Json<SearchResults>, AppError> {
    let results = state
        .booking
        .search_artists(&payload.search_term, Utc::now())
        .await?;
    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Artists",
    operation_id = "getArtist",
    summary = "Get an artist with past and upcoming shows",
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Artist detail", body = ArtistDetail),
        (status = 404, description = "Artist not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistDetail>, AppError> {
    Ok(Json(state.booking.artist_detail(id, Utc::now()).await?))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Artists",
    operation_id = "replaceArtist",
    summary = "Replace an artist",
    params(("id" = i32, Path, description = "Artist ID")),
    request_body = ArtistRequest,
    responses(
        (status = 200, description = "Artist replaced", body = ArtistResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Artist not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Store write failed (STORE_WRITE_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn replace_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppInput(payload): AppInput<ArtistRequest>,
) -> Result<Json<ArtistResponse>, AppError> {
    let draft = payload.into_draft()?;
    let artist = state.booking.replace_artist(id, draft).await?;
    Ok(Json(artist.into()))
}

#[utoipa::path(
    get,
    path = "/{id}/edit",
    tag = "Artists",
    operation_id = "editArtist",
    summary = "Get the stored artist record for an edit form",
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Stored artist", body = ArtistResponse),
        (status = 404, description = "Artist not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistResponse>, AppError> {
    let artist = state.booking.artist_record(id).await?;
    Ok(Json(artist.into()))
}
