mod models;
mod schema;
mod store;
mod trait_def;

pub use models::{Album, AlbumField, NewAlbum};
pub use schema::ALBUM_SCHEMA;
pub use store::SqliteAlbumStore;
pub use trait_def::AlbumStore;
