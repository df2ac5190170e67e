//! Shared constants for end-to-end tests
//!
//! When the seeded catalog changes, update only this file.

// ============================================================================
// Seeded Catalog
// ============================================================================

/// Artist of the first seeded album
pub const SEEDED_ARTIST: &str = "Beatles";

/// Title of the first seeded album
pub const SEEDED_ALBUM: &str = "Abbey Road";

/// Genre of the first seeded album
pub const SEEDED_GENRE: &str = "Rock";

/// Year of the first seeded album
pub const SEEDED_YEAR: i32 = 1969;

/// Second seeded album, same artist
pub const SEEDED_ALBUM_2: &str = "Let It Be";
pub const SEEDED_YEAR_2: i32 = 1970;

/// Third seeded album, different artist and genre
pub const OTHER_ARTIST: &str = "Miles Davis";
pub const OTHER_ALBUM: &str = "Kind of Blue";
pub const OTHER_GENRE: &str = "Jazz";
pub const OTHER_YEAR: i32 = 1959;

/// Number of albums in the seeded catalog
pub const SEEDED_ALBUMS_COUNT: usize = 3;

/// An artist that is never in the catalog
pub const MISSING_ARTIST: &str = "Queen";

/// Content of the stylesheet written to the test static directory
pub const TEST_STYLESHEET: &str = "body { font-family: sans-serif; }\n";

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness checks (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// HTTP request timeout (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
