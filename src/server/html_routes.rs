//! HTML pages.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Form,
};
use tracing::error;

use super::state::GuardedAlbumStore;
use super::views::{
    album_rows, message_page, render_page, validation_errors_page, Template, TemplateContext,
};
use crate::dispatcher::{self, CreateOutcome};
use crate::forms::{CreationForm, LookupForm};

fn storage_failure_page(err: anyhow::Error) -> Response {
    error!("Album store failure: {:#}", err);
    message_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Server error",
        "The request could not be completed, please try again.",
    )
}

/// GET /artist
///
/// The lookup form, or the results page when `type`/`value` are given.
pub async fn get_artist_page(
    State(album_store): State<GuardedAlbumStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.is_empty() {
        return render_page(StatusCode::OK, Template::ArtistForm, &TemplateContext::new());
    }

    let query = match LookupForm::validate(&params) {
        Ok(query) => query,
        Err(errors) => return validation_errors_page(&errors),
    };

    match dispatcher::lookup(album_store.as_ref(), &query) {
        Ok(albums) if albums.is_empty() => message_page(
            StatusCode::NOT_FOUND,
            "Not found",
            &format!("{} {} not found.", query.field, query.value),
        ),
        Ok(albums) => render_page(
            StatusCode::OK,
            Template::ArtistResults,
            &TemplateContext::new()
                .text("title", format!("Albums with {} {}", query.field, query.value))
                .text("count", albums.len().to_string())
                .html("records", album_rows(&albums)),
        ),
        Err(err) => storage_failure_page(err),
    }
}

/// GET /new_artist
pub async fn get_new_artist_page() -> Response {
    render_page(
        StatusCode::OK,
        Template::NewArtistForm,
        &TemplateContext::new(),
    )
}

/// POST /new_artist
///
/// Adding an album that already exists is not an error: the page says so
/// with a 200.
pub async fn post_new_artist(
    State(album_store): State<GuardedAlbumStore>,
    Form(params): Form<HashMap<String, String>>,
) -> Response {
    let new_album = match CreationForm::validate(&params) {
        Ok(new_album) => new_album,
        Err(errors) => return validation_errors_page(&errors),
    };

    match dispatcher::create(album_store.as_ref(), new_album) {
        Ok(CreateOutcome::Added(album)) => message_page(
            StatusCode::OK,
            "Album added",
            &format!("Album {} by {} was added.", album.album, album.artist),
        ),
        Ok(CreateOutcome::Duplicate(album)) => message_page(
            StatusCode::OK,
            "Album already exists",
            &format!("Album {} is already in the catalog.", album.album),
        ),
        Err(err) => storage_failure_page(err),
    }
}

/// GET /hello/{name}
pub async fn get_hello(Path(name): Path<String>) -> Response {
    render_page(
        StatusCode::OK,
        Template::Hello,
        &TemplateContext::new().text("name", name),
    )
}
