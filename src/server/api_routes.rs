//! JSON endpoints.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::state::GuardedAlbumStore;
use crate::album_store::AlbumField;
use crate::dispatcher;
use crate::forms::LookupForm;

fn storage_failure(err: anyhow::Error) -> Response {
    error!("Album store failure: {:#}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

/// GET /api/artist
///
/// Without a query string, lists the distinct artists (500 on an empty
/// catalog). With one, runs the validated `type`/`value` lookup.
pub async fn get_api_artist(
    State(album_store): State<GuardedAlbumStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.is_empty() {
        return match dispatcher::list_artists(album_store.as_ref()) {
            Ok(artists) if artists.is_empty() => {
                (StatusCode::INTERNAL_SERVER_ERROR, "The database is empty.").into_response()
            }
            Ok(artists) => Json(artists).into_response(),
            Err(err) => storage_failure(err),
        };
    }

    let query = match LookupForm::validate(&params) {
        Ok(query) => query,
        Err(errors) => {
            return (StatusCode::BAD_REQUEST, format!("Invalid request: {}", errors))
                .into_response()
        }
    };

    match dispatcher::lookup(album_store.as_ref(), &query) {
        Ok(albums) if albums.is_empty() => (
            StatusCode::NOT_FOUND,
            format!("{} {} not found.", query.field, query.value),
        )
            .into_response(),
        Ok(albums) => Json(albums).into_response(),
        Err(err) => storage_failure(err),
    }
}

/// GET /albums/{artist}
pub async fn get_artist_albums(
    State(album_store): State<GuardedAlbumStore>,
    Path(artist): Path<String>,
) -> Response {
    let found =
        dispatcher::lookup_by_name(album_store.as_ref(), AlbumField::Artist.as_str(), &artist);
    match found {
        Ok(Some(albums)) if !albums.is_empty() => Json(albums).into_response(),
        Ok(_) => (
            StatusCode::NOT_FOUND,
            format!("Artist {} not found.", artist),
        )
            .into_response(),
        Err(err) => storage_failure(err),
    }
}
