//! Shared constants for end-to-end tests

// ============================================================================
// Test User Credentials
// ============================================================================

/// Seeded user, present in every test server db
pub const TEST_NAME: &str = "Test User";
pub const TEST_EMAIL: &str = "testuser@example.com";
pub const TEST_PASS: &str = "testpass123";

/// Not seeded, free to sign up
pub const NEW_NAME: &str = "New User";
pub const NEW_EMAIL: &str = "newuser@example.com";
pub const NEW_PASS: &str = "newpass123";

// ============================================================================
// Pixels
// ============================================================================

/// Warm, medium, "Golden Beige", #c89664
pub const WARM_MEDIUM_PIXEL: (i64, i64, i64) = (200, 150, 100);

/// Cool, medium-deep, "Cool Tan"
pub const COOL_MEDIUM_DEEP_PIXEL: (i64, i64, i64) = (100, 120, 150);

// ============================================================================
// Timeouts
// ============================================================================

pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
