use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::AppInput;
use crate::models::show::{CreateShowRequest, ShowResponse};
use crate::read_model::aggregator::ShowListing;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Shows",
    operation_id = "listShows",
    summary = "List every show with its venue and artist",
    responses(
        (status = 200, description = "All shows in creation order", body = Vec<ShowListing>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_shows(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShowListing>>, AppError> {
    Ok(Json(state.booking.list_shows().await?))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Shows",
    operation_id = "createShow",
    summary = "Create a show",
    description = "The referenced artist and venue must exist. Nothing is written when the proposal is rejected.",
    request_body = CreateShowRequest,
    responses(
        (status = 201, description = "Show created", body = ShowResponse),
        (status = 400, description = "Rejected (MISSING_FIELD, INVALID_FIELD, UNKNOWN_ARTIST, UNKNOWN_VENUE, VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Store write failed (STORE_WRITE_FAILED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_show(
    State(state): State<AppState>,
    AppInput(payload): AppInput<CreateShowRequest>,
) -> Result<impl IntoResponse, AppError> {
    let show = state.booking.create_show(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(ShowResponse::from(show))))
}
