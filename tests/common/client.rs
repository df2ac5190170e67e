//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per album-catalog endpoint.
//! When routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // JSON Endpoints
    // ========================================================================

    /// GET / - server stats
    pub async fn get_stats(&self) -> Response {
        self.get("/").await
    }

    /// GET /api/artist - distinct artist listing
    pub async fn list_artists(&self) -> Response {
        self.get("/api/artist").await
    }

    /// GET /api/artist?type=..&value=..
    pub async fn api_lookup(&self, field: &str, value: &str) -> Response {
        self.get_with_query("/api/artist", &[("type", field), ("value", value)])
            .await
    }

    /// GET /api/artist with arbitrary query parameters
    pub async fn api_lookup_raw(&self, query: &[(&str, &str)]) -> Response {
        self.get_with_query("/api/artist", query).await
    }

    /// GET /albums/{artist}
    pub async fn get_artist_albums(&self, artist: &str) -> Response {
        self.get(&format!("/albums/{}", urlencoding::encode(artist)))
            .await
    }

    // ========================================================================
    // HTML Endpoints
    // ========================================================================

    /// GET /artist - lookup form
    pub async fn artist_form_page(&self) -> Response {
        self.get("/artist").await
    }

    /// GET /artist?type=..&value=.. - lookup results page
    pub async fn artist_results_page(&self, field: &str, value: &str) -> Response {
        self.get_with_query("/artist", &[("type", field), ("value", value)])
            .await
    }

    /// GET /new_artist - creation form
    pub async fn new_artist_page(&self) -> Response {
        self.get("/new_artist").await
    }

    /// POST /new_artist
    pub async fn create_album(&self, artist: &str, album: &str, genre: &str, year: &str) -> Response {
        self.create_album_raw(&[
            ("artist", artist),
            ("album", album),
            ("genre", genre),
            ("year", year),
        ])
        .await
    }

    /// POST /new_artist with arbitrary form fields
    pub async fn create_album_raw(&self, form: &[(&str, &str)]) -> Response {
        self.client
            .post(format!("{}/new_artist", self.base_url))
            .form(form)
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /hello/{name}
    pub async fn hello(&self, name: &str) -> Response {
        self.get(&format!("/hello/{}", urlencoding::encode(name))).await
    }

    // ========================================================================
    // Static Assets
    // ========================================================================

    /// GET /css/{filename}
    pub async fn get_css(&self, filename: &str) -> Response {
        self.get(&format!("/css/{}", filename)).await
    }
}
