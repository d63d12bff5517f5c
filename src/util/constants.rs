// FirmLens - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "FirmLens";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "FirmLens";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent header sent with the directory fetch.
pub const HTTP_USER_AGENT: &str = concat!("FirmLens/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Fetch limits
// =============================================================================

/// Default directory endpoint when neither the CLI nor config.toml names one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/companies";

/// HTTP request timeout in seconds for the directory fetch.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Hard upper bound on the number of records accepted from the endpoint.
///
/// A misbehaving endpoint returning an enormous array is truncated here
/// rather than exhausting memory; a warning is logged when the cap trips.
pub const MAX_RECORDS: usize = 100_000;

// =============================================================================
// Pagination
// =============================================================================

/// Number of records shown per page.
pub const ITEMS_PER_PAGE: usize = 10;

/// Above this many pages the numbered buttons collapse to a "Page x of y"
/// label so the pagination strip never outgrows the window width.
pub const MAX_PAGE_BUTTONS: usize = 12;

// =============================================================================
// Filtering
// =============================================================================

/// Maximum regex pattern length for the name search, to prevent ReDoS.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 512;

// =============================================================================
// Export
// =============================================================================

/// Maximum number of records that can be exported in a single operation.
pub const MAX_EXPORT_RECORDS: usize = 1_000_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Directory vocabularies
// =============================================================================

/// Cities the location filter offers. The endpoint draws from this fixed set.
pub const LOCATIONS: &[&str] = &[
    "Hyderabad",
    "Bangalore",
    "Chennai",
    "Mumbai",
    "Pune",
    "Delhi",
    "Kochi",
];

/// Sectors the industry filter offers.
pub const INDUSTRIES: &[&str] = &[
    "Software",
    "IT Services",
    "AI & ML",
    "Fintech",
    "Healthcare",
    "EdTech",
    "Renewable Energy",
    "Transportation",
    "Agritech",
    "Cybersecurity",
];
