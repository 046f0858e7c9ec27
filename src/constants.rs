//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// JUDGE SERVICE
// =============================================================================

/// Default origin of the external judge service
pub const DEFAULT_JUDGE_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout in seconds (0 disables the timeout)
pub const DEFAULT_JUDGE_TIMEOUT_SECONDS: u64 = 0;

/// Judge endpoint evaluating an algorithm-practice submission
pub const JUDGE_TEST_PATH: &str = "/api/code/test";

/// Judge endpoint executing free-form code
pub const JUDGE_RUN_PATH: &str = "/api/code/run";

/// Prefix of every locally synthesized failure message
pub const ERROR_PREFIX: &str = "Error: ";

// =============================================================================
// SESSIONS
// =============================================================================

/// Default cap on concurrently open editor sessions
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Default idle time in seconds before an untouched session is evicted
/// (0 disables eviction)
pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS: u64 = 1800;

/// How often the idle-session sweeper runs, in seconds
pub const SESSION_SWEEP_INTERVAL_SECONDS: u64 = 60;

/// Maximum source code size in bytes (1 MB)
pub const MAX_SOURCE_CODE_SIZE: usize = 1024 * 1024;

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Language identifiers
pub mod languages {
    pub const JAVASCRIPT: &str = "javascript";
    pub const PYTHON: &str = "python";
    pub const JAVA: &str = "java";
    pub const CPP: &str = "cpp";

    /// Languages offered in the algorithm-practice view
    pub const PRACTICE: &[&str] = &[JAVASCRIPT, PYTHON, JAVA, CPP];

    /// Languages offered in the free-run playground
    pub const PLAYGROUND: &[&str] = &[PYTHON, JAVA, CPP];

    /// Language selected when a practice view opens
    pub const DEFAULT_PRACTICE: &str = CPP;

    /// Language selected when the playground opens
    pub const DEFAULT_PLAYGROUND: &str = PYTHON;
}

// =============================================================================
// VERDICT CATEGORIES
// =============================================================================

/// Verdict tiers reported by the judge
pub mod verdicts {
    pub const GREEN: &str = "GREEN";
    pub const YELLOW: &str = "YELLOW";
    pub const RED: &str = "RED";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

/// Catalog list view; unknown slugs are redirected here
pub const ALGORITHMS_LIST_PATH: &str = "/api/v1/algorithms";
