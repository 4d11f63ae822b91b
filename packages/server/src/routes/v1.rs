use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/venues", venue_routes())
        .nest("/artists", artist_routes())
        .nest("/shows", show_routes())
}

fn venue_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::venue::list_venues,
            handlers::venue::create_venue
        ))
        .routes(routes!(handlers::venue::search_venues))
        .routes(routes!(
            handlers::venue::get_venue,
            handlers::venue::replace_venue,
            handlers::venue::delete_venue
        ))
        .routes(routes!(handlers::venue::edit_venue))
}

fn artist_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::artist::list_artists,
            handlers::artist::create_artist
        ))
        .routes(routes!(handlers::artist::search_artists))
        .routes(routes!(
            handlers::artist::get_artist,
            handlers::artist::replace_artist
        ))
        .routes(routes!(handlers::artist::edit_artist))
}

fn show_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        handlers::show::list_shows,
        handlers::show::create_show
    ))
}
