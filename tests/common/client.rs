//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all catalogue endpoints.
//!
//! When API routes or request formats change, update only this file.

#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

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

    /// GET an arbitrary path, relative to the server root
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET an `/api` path with query parameters
    pub async fn get_api(&self, path: &str, query: &[(&str, &str)]) -> Response {
        self.client
            .get(format!("{}/api{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Index
    // ========================================================================

    pub async fn get_index(&self) -> Response {
        self.get("/api").await
    }

    // ========================================================================
    // Composers
    // ========================================================================

    pub async fn get_composers(&self) -> Response {
        self.get_api("/composers", &[]).await
    }

    pub async fn get_composer(&self, id: &str) -> Response {
        self.get_api(&format!("/composers/{}", id), &[]).await
    }

    pub async fn get_composer_works(&self, id: &str, query: &[(&str, &str)]) -> Response {
        self.get_api(&format!("/composers/{}/works", id), query).await
    }

    pub async fn get_composer_recordings(&self, id: &str, query: &[(&str, &str)]) -> Response {
        self.get_api(&format!("/composers/{}/recordings", id), query)
            .await
    }

    pub async fn get_composer_periods(&self, id: &str) -> Response {
        self.get_api(&format!("/composers/{}/periods", id), &[]).await
    }

    // ========================================================================
    // Works
    // ========================================================================

    pub async fn get_works(&self, query: &[(&str, &str)]) -> Response {
        self.get_api("/works", query).await
    }

    /// Catalogue ids contain spaces, so they are percent-encoded here
    pub async fn get_work(&self, catalog_id: &str) -> Response {
        self.get_api(&format!("/works/{}", encode_segment(catalog_id)), &[])
            .await
    }

    pub async fn get_works_by_genre(&self, genre: &str) -> Response {
        self.get_api(&format!("/works/genre/{}", genre), &[]).await
    }

    pub async fn get_works_by_year(&self, year: &str) -> Response {
        self.get_api(&format!("/works/year/{}", year), &[]).await
    }

    // ========================================================================
    // Recordings
    // ========================================================================

    pub async fn get_recordings(&self, query: &[(&str, &str)]) -> Response {
        self.get_api("/recordings", query).await
    }

    pub async fn get_recording(&self, id: &str) -> Response {
        self.get_api(&format!("/recordings/{}", id), &[]).await
    }

    pub async fn get_recordings_by_work(&self, work_id: &str) -> Response {
        self.get_api(
            &format!("/recordings/work/{}", encode_segment(work_id)),
            &[],
        )
        .await
    }

    pub async fn get_recordings_by_performer(&self, name: &str) -> Response {
        self.get_api(
            &format!("/recordings/performer/{}", encode_segment(name)),
            &[],
        )
        .await
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub async fn search(&self, query: &[(&str, &str)]) -> Response {
        self.get_api("/search", query).await
    }

    pub async fn search_works(&self, query: &[(&str, &str)]) -> Response {
        self.get_api("/works/search", query).await
    }

    pub async fn advanced_search(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/api/search/advanced", self.base_url))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    pub async fn get_stats(&self) -> Response {
        self.get_api("/stats", &[]).await
    }

    pub async fn get_composer_stats(&self, id: &str) -> Response {
        self.get_api(&format!("/stats/composer/{}", id), &[]).await
    }
}

fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
