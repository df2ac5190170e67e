//! Test fixture creation
//!
//! Builds the temporary album database and static directory each test
//! server runs against.

use super::constants::*;
use album_catalog_server::album_store::{AlbumStore, NewAlbum, SqliteAlbumStore};
use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

fn new_album(artist: &str, album: &str, genre: &str, year: i32) -> NewAlbum {
    NewAlbum {
        year,
        artist: artist.to_string(),
        genre: genre.to_string(),
        album: album.to_string(),
    }
}

/// Creates an album database seeded with the albums from `constants`.
///
/// Returns the temp dir (keep it alive) and the database path.
pub fn create_test_db(seeded: bool) -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("db").join("albums.sqlite3");

    let store = SqliteAlbumStore::new(&db_path)?;
    if seeded {
        for album in [
            new_album(SEEDED_ARTIST, SEEDED_ALBUM, SEEDED_GENRE, SEEDED_YEAR),
            new_album(SEEDED_ARTIST, SEEDED_ALBUM_2, SEEDED_GENRE, SEEDED_YEAR_2),
            new_album(OTHER_ARTIST, OTHER_ALBUM, OTHER_GENRE, OTHER_YEAR),
        ] {
            store.insert_album(&album)?;
        }
    }

    Ok((temp_dir, db_path))
}

/// Creates a static directory holding `css/style.css`.
pub fn create_test_static_dir() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let css_dir = temp_dir.path().join("css");
    std::fs::create_dir_all(&css_dir)?;
    std::fs::write(css_dir.join("style.css"), TEST_STYLESHEET)?;
    Ok(temp_dir)
}
