//! Shared constants for end-to-end tests
//!
//! When the fixture catalogue changes, update only this file.

#![allow(dead_code)]

// ============================================================================
// Test Catalogue IDs
// ============================================================================

pub const BACH_ID: &str = "bach";
pub const BACH_NAME: &str = "Johann Sebastian Bach";

pub const MOZART_ID: &str = "mozart";
pub const MOZART_NAME: &str = "Wolfgang Amadeus Mozart";

/// Goldberg Variations, recorded twice by Glenn Gould
pub const GOLDBERG_ID: &str = "BWV 988";
pub const GOLDBERG_TITLE: &str = "Goldberg Variations";

/// Mass in B minor, the only work with a localized title matching "messe"
pub const MASS_ID: &str = "BWV 232";

/// The Art of Fugue, the only work without a composition year
pub const ART_OF_FUGUE_ID: &str = "BWV 1080";

pub const REQUIEM_ID: &str = "K. 626";

/// Gould's 1981 Goldberg recording, the best rated one
pub const GOULD_1981_ID: &str = "rec_001";
pub const GOULD_1955_ID: &str = "rec_002";

/// Gardiner's Mass in B minor, the only one listing a `soloists` array
pub const GARDINER_ID: &str = "rec_003";

/// The only unrated recording
pub const UNRATED_ID: &str = "rec_006";

// ============================================================================
// Fixture Counts
// ============================================================================

pub const COMPOSER_COUNT: usize = 2;
pub const WORK_COUNT: usize = 8;
pub const BACH_WORK_COUNT: usize = 5;
pub const RECORDING_COUNT: usize = 6;
pub const BACH_RECORDING_COUNT: usize = 4;
pub const CATEGORY_COUNT: usize = 6;
pub const PLATFORM_COUNT: usize = 3;
pub const UNIQUE_PERFORMER_COUNT: usize = 8;
pub const AVERAGE_RATING: f64 = 4.7;

// ============================================================================
// Test Server Settings
// ============================================================================

/// Maximum time to wait for the test server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness checks
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Timeout for each request made by the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
