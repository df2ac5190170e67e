//! SQLite-backed album store.

use super::models::{Album, AlbumField, NewAlbum};
use super::schema::{ALBUM_SCHEMA, ALBUM_TABLE_NAME};
use super::trait_def::AlbumStore;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

pub struct SqliteAlbumStore {
    conn: Mutex<Connection>,
}

fn create_or_validate_schema(conn: &Connection) -> Result<()> {
    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |r| r.get(0),
    )?;

    if table_count == 0 {
        info!(
            "Creating album db schema at version {}",
            ALBUM_SCHEMA.version
        );
        ALBUM_SCHEMA.create(conn)?;
        return Ok(());
    }

    ALBUM_SCHEMA
        .validate(conn)
        .context("Album database does not match the expected schema")
}

impl SqliteAlbumStore {
    /// Opens the album database at `db_path`, creating the file, its parent
    /// directory and the schema if they are missing.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
        }

        let conn = Connection::open_with_flags(
            db_path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open album database {:?}", db_path))?;

        Self::from_connection(conn)
    }

    /// Opens a private in-memory database, for tests and throwaway runs.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        create_or_validate_schema(&conn)?;

        let album_count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", ALBUM_TABLE_NAME),
            [],
            |r| r.get(0),
        )?;
        info!("Opened album catalog: {} albums", album_count);

        Ok(SqliteAlbumStore {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("Album database connection lock poisoned"))
    }
}

impl AlbumStore for SqliteAlbumStore {
    fn find_by(&self, field: AlbumField, value: &str) -> Result<Vec<Album>> {
        // Column names come from the closed AlbumField set, never from input.
        let column = match field {
            AlbumField::Year => "year",
            AlbumField::Artist => "artist",
            AlbumField::Genre => "genre",
            AlbumField::Album => "album",
        };
        let sql = format!(
            "SELECT id, year, artist, genre, album FROM {} WHERE {} = ?1 ORDER BY id",
            ALBUM_TABLE_NAME, column
        );

        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(&sql)?;
        let albums = stmt
            .query_map(params![value], Album::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .with_context(|| format!("Failed to query albums by {}", field))?;
        debug!("{} = {:?} matched {} albums", field, value, albums.len());
        Ok(albums)
    }

    fn album_exists(&self, album: &str) -> Result<bool> {
        let conn = self.conn()?;
        let exists: bool = conn.query_row(
            &format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE album = ?1)",
                ALBUM_TABLE_NAME
            ),
            params![album],
            |r| r.get(0),
        )?;
        Ok(exists)
    }

    fn insert_album(&self, album: &NewAlbum) -> Result<i64> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        tx.execute(
            &format!(
                "INSERT INTO {} (year, artist, genre, album) VALUES (?1, ?2, ?3, ?4)",
                ALBUM_TABLE_NAME
            ),
            params![album.year.to_string(), album.artist, album.genre, album.album],
        )
        .with_context(|| format!("Failed to insert album {:?}", album.album))?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    fn distinct_artists(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT artist FROM {} GROUP BY artist ORDER BY artist",
            ALBUM_TABLE_NAME
        ))?;
        let artists = stmt
            .query_map([], |r| r.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(artists)
    }

    fn get_albums_count(&self) -> Result<usize> {
        let conn = self.conn()?;
        let count: i64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM {}", ALBUM_TABLE_NAME),
                [],
                |r| r.get(0),
            )
            .context("Failed to count albums")?;
        Ok(count as usize)
    }
}
