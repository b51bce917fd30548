//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per endpoint. When routes or request
//! formats change, update only this file.

#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

/// HTTP test client with cookie-based session management
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    /// Creates a new unauthenticated client
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// Creates a client signed in as the seeded test user
    ///
    /// # Panics
    ///
    /// Panics if authentication fails (indicates test infrastructure problem).
    pub async fn authenticated(base_url: String) -> Self {
        let client = Self::new(base_url);

        let response = client.signin(TEST_EMAIL, TEST_PASS).await;
        assert_eq!(
            response.status(),
            reqwest::StatusCode::OK,
            "Test user authentication failed: {:?}",
            response.text().await
        );

        client
    }

    // ========================================================================
    // Authentication Endpoints
    // ========================================================================

    /// POST /api/auth/signup
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Response {
        self.signup_raw(json!({"name": name, "email": email, "password": password}))
            .await
    }

    /// POST /api/auth/signup with an arbitrary body
    pub async fn signup_raw(&self, body: Value) -> Response {
        self.client
            .post(format!("{}/api/auth/signup", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Signup request failed")
    }

    /// POST /api/auth/signin
    pub async fn signin(&self, email: &str, password: &str) -> Response {
        self.client
            .post(format!("{}/api/auth/signin", self.base_url))
            .json(&json!({"email": email, "password": password}))
            .send()
            .await
            .expect("Signin request failed")
    }

    /// GET /api/auth/me
    pub async fn me(&self) -> Response {
        self.client
            .get(format!("{}/api/auth/me", self.base_url))
            .send()
            .await
            .expect("Me request failed")
    }

    /// GET /api/auth/me with an explicit Authorization header
    pub async fn me_with_token(&self, authorization: &str) -> Response {
        self.client
            .get(format!("{}/api/auth/me", self.base_url))
            .header("Authorization", authorization)
            .send()
            .await
            .expect("Me request failed")
    }

    /// GET /api/auth/signout
    pub async fn signout(&self) -> Response {
        self.client
            .get(format!("{}/api/auth/signout", self.base_url))
            .send()
            .await
            .expect("Signout request failed")
    }

    // ========================================================================
    // Analysis Endpoints
    // ========================================================================

    /// POST /api/analyze-pixels
    pub async fn analyze_pixels(&self, r: i64, g: i64, b: i64) -> Response {
        self.analyze_pixels_raw(json!({"r": r, "g": g, "b": b}))
            .await
    }

    /// POST /api/analyze-pixels with an arbitrary body
    pub async fn analyze_pixels_raw(&self, body: Value) -> Response {
        self.client
            .post(format!("{}/api/analyze-pixels", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Analyze request failed")
    }

    /// GET /api/health
    pub async fn health(&self) -> Response {
        self.client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await
            .expect("Health request failed")
    }

    // ========================================================================
    // Profile Endpoints
    // ========================================================================

    /// GET /api/profiles
    pub async fn get_profiles(&self) -> Response {
        self.client
            .get(format!("{}/api/profiles", self.base_url))
            .send()
            .await
            .expect("Get profiles request failed")
    }

    /// POST /api/profiles
    pub async fn create_profile(&self, body: Value) -> Response {
        self.client
            .post(format!("{}/api/profiles", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Create profile request failed")
    }

    /// DELETE /api/profiles/{id}
    pub async fn delete_profile(&self, id: &str) -> Response {
        self.client
            .delete(format!("{}/api/profiles/{}", self.base_url, id))
            .send()
            .await
            .expect("Delete profile request failed")
    }
}
