//! Album catalog models.

use rusqlite::Row;
use serde::Serialize;
use std::fmt;

/// One row of the `album` table.
///
/// Serializes as `{artist, album, year, genre}`; the row id stays internal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Album {
    #[serde(skip_serializing)]
    pub id: i64,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub genre: String,
}

impl Album {
    /// Maps a row selected as `id, year, artist, genre, album`.
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Album {
            id: row.get(0)?,
            year: row.get(1)?,
            artist: row.get(2)?,
            genre: row.get(3)?,
            album: row.get(4)?,
        })
    }
}

/// A validated album waiting to be inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAlbum {
    pub year: i32,
    pub artist: String,
    pub genre: String,
    pub album: String,
}

/// The four columns a lookup can filter on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlbumField {
    Year,
    Artist,
    Genre,
    Album,
}

impl AlbumField {
    pub const ALL: [AlbumField; 4] = [
        AlbumField::Year,
        AlbumField::Artist,
        AlbumField::Genre,
        AlbumField::Album,
    ];

    /// Name used both as the form value and as the column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumField::Year => "year",
            AlbumField::Artist => "artist",
            AlbumField::Genre => "genre",
            AlbumField::Album => "album",
        }
    }

    pub fn from_name(name: &str) -> Option<AlbumField> {
        AlbumField::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for AlbumField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
