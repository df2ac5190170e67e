//! AlbumStore trait definition.

use super::models::{Album, AlbumField, NewAlbum};
use anyhow::Result;

/// Storage backend for the album catalog.
///
/// Each call acquires the underlying connection for its own duration and
/// releases it before returning, on success and on error alike.
pub trait AlbumStore: Send + Sync {
    /// Returns every album whose `field` column equals `value` exactly, ordered by id.
    fn find_by(&self, field: AlbumField, value: &str) -> Result<Vec<Album>>;

    /// Returns true if an album with this exact title is stored.
    fn album_exists(&self, album: &str) -> Result<bool>;

    /// Inserts a new album in its own transaction and returns its id.
    ///
    /// Fails if the title violates the unique constraint.
    fn insert_album(&self, album: &NewAlbum) -> Result<i64>;

    /// Returns the distinct artist names, one per group.
    fn distinct_artists(&self) -> Result<Vec<String>>;

    /// Returns the number of stored albums.
    fn get_albums_count(&self) -> Result<usize>;
}
