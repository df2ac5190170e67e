//! SQLite schema for the album catalog.
//!
//! A single `album` table. The `album` title column carries a UNIQUE
//! constraint, which is the authority on duplicates.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

pub const ALBUM_TABLE_NAME: &str = "album";

const ALBUM_TABLE: Table = Table {
    name: ALBUM_TABLE_NAME,
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("year", &SqlType::Text, non_null = true),
        sqlite_column!("artist", &SqlType::Text, non_null = true),
        sqlite_column!("genre", &SqlType::Text, non_null = true),
        sqlite_column!("album", &SqlType::Text, non_null = true),
    ],
    indices: &[("idx_album_artist", "artist")],
    unique_constraints: &[&["album"]],
};

pub const ALBUM_SCHEMA: VersionedSchema = VersionedSchema {
    version: 0,
    tables: &[ALBUM_TABLE],
};
