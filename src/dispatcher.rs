//! Maps validated requests onto album store queries.

use crate::album_store::{Album, AlbumField, AlbumStore, NewAlbum};
use crate::forms::LookupQuery;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Added(NewAlbum),
    Duplicate(NewAlbum),
}

/// Runs the single store query selected by the lookup field.
pub fn lookup(store: &dyn AlbumStore, query: &LookupQuery) -> Result<Vec<Album>> {
    debug!("Lookup {} = {:?}", query.field, query.value);
    store.find_by(query.field, &query.value)
}

/// String-keyed lookup. An unknown field name selects no query.
pub fn lookup_by_name(
    store: &dyn AlbumStore,
    field_name: &str,
    value: &str,
) -> Result<Option<Vec<Album>>> {
    match AlbumField::from_name(field_name) {
        Some(field) => Ok(Some(store.find_by(field, value)?)),
        None => {
            debug!("No query for unknown field {:?}", field_name);
            Ok(None)
        }
    }
}

/// Inserts the album unless one with the same title already exists.
///
/// The existence check and the insert are separate store calls. Two
/// concurrent creations of the same title can both pass the check; the
/// store's unique constraint then fails the second insert, which surfaces
/// as an error rather than `Duplicate`.
pub fn create(store: &dyn AlbumStore, album: NewAlbum) -> Result<CreateOutcome> {
    if store.album_exists(&album.album)? {
        debug!("Album {:?} already exists", album.album);
        return Ok(CreateOutcome::Duplicate(album));
    }
    let id = store.insert_album(&album)?;
    info!("Added album {:?} by {:?} with id {}", album.album, album.artist, id);
    Ok(CreateOutcome::Added(album))
}

pub fn list_artists(store: &dyn AlbumStore) -> Result<Vec<String>> {
    store.distinct_artists()
}
