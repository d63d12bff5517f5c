// FirmLens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (core depends on std + serde only).
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Company record
// =============================================================================

/// A single company in the directory, as returned by the endpoint.
///
/// Records are immutable once fetched: the full set is populated by one
/// fetch and never mutated afterwards. `id` is unique and is the stable
/// sort key for display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Unique identifier; the directory is always ordered ascending by id.
    pub id: u64,

    /// Company name. Target of the substring/regex search.
    pub name: String,

    /// City, drawn from a fixed set (see `util::constants::LOCATIONS`).
    pub location: String,

    /// Sector, drawn from a fixed set (see `util::constants::INDUSTRIES`).
    pub industry: String,
}

// =============================================================================
// Session phase
// =============================================================================

/// Overall session state: `Loading -> {Loaded, Error}`.
///
/// Error is terminal for the session; only an explicit reload starts a new
/// one. Loaded remains active indefinitely while filter and page operations
/// mutate derived state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// The startup fetch is in flight.
    Loading,

    /// Records are in memory; the directory is browsable.
    Loaded,

    /// The fetch failed. The message is displayed verbatim instead of the
    /// table; mutually exclusive with Loading/Loaded.
    Error(String),
}

impl SessionPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

// =============================================================================
// Fetch progress (for UI updates)
// =============================================================================

/// Progress messages sent from the fetch thread to the UI thread.
#[derive(Debug, Clone)]
pub enum FetchProgress {
    /// The request has been issued.
    Started,

    /// The fetch completed; `records` is the full (unsorted) directory.
    Completed { records: Vec<CompanyRecord> },

    /// The fetch failed. `message` is the user-facing failure text.
    Failed { message: String },
}

// =============================================================================
// Directory summary
// =============================================================================

/// Aggregate counts over the filtered record set, for the summary dialog.
#[derive(Debug, Clone, Default)]
pub struct DirectorySummary {
    /// Number of records in the filtered set.
    pub total: usize,

    /// (location, count) pairs, most common first.
    pub by_location: Vec<(String, usize)>,

    /// (industry, count) pairs, most common first.
    pub by_industry: Vec<(String, usize)>,
}
