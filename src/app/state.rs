// FirmLens - app/state.rs
//
// Application state management. Holds the directory view, the session
// phase, and status/UI flags. Owned by the eframe::App implementation.
//
// The session state machine (Loading -> {Loaded, Error}) lives in
// `apply_fetch_progress` so it is unit-testable without a GUI. Error is
// terminal until the user requests a reload, which starts a fresh session.

use crate::core::directory::DirectoryState;
use crate::core::model::{FetchProgress, SessionPhase};
use chrono::{DateTime, Utc};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Filtered, paginated view over the fetched records.
    pub directory: DirectoryState,

    /// Session phase: Loading, Loaded, or Error.
    pub phase: SessionPhase,

    /// Resolved directory endpoint (CLI > config > default).
    pub endpoint: String,

    /// Status message for the status bar.
    pub status_message: String,

    /// When the current record set was fetched.
    pub fetched_at: Option<DateTime<Utc>>,

    /// Non-fatal warnings (config validation, record-cap truncation).
    pub warnings: Vec<String>,

    /// Endpoint queued for fetching; taken by the GUI update loop.
    pub pending_fetch: Option<String>,

    /// Whether to show the directory summary dialog.
    pub show_summary: bool,

    /// Whether dark mode is enabled.
    pub dark_mode: bool,

    /// Regex toggle for the name search box.
    pub regex_enabled: bool,

    /// Raw regex pattern as typed; compiled into the criteria on change.
    pub regex_input: String,

    /// Feedback line under the search box when the pattern is invalid.
    pub regex_error: Option<String>,
}

impl AppState {
    /// Create initial state. The startup fetch is queued immediately so
    /// the first GUI frame starts it.
    pub fn new(endpoint: String, dark_mode: bool) -> Self {
        Self {
            directory: DirectoryState::new(),
            phase: SessionPhase::Loading,
            status_message: "Fetching company directory...".to_string(),
            pending_fetch: Some(endpoint.clone()),
            endpoint,
            fetched_at: None,
            warnings: Vec::new(),
            show_summary: false,
            dark_mode,
            regex_enabled: false,
            regex_input: String::new(),
            regex_error: None,
        }
    }

    /// Apply a fetch progress message to the session state machine.
    pub fn apply_fetch_progress(&mut self, msg: FetchProgress) {
        match msg {
            FetchProgress::Started => {
                self.phase = SessionPhase::Loading;
                self.status_message = "Fetching company directory...".to_string();
            }
            FetchProgress::Completed { records } => {
                let count = records.len();
                self.directory.load(records);
                self.phase = SessionPhase::Loaded;
                self.fetched_at = Some(Utc::now());
                self.status_message = format!("Loaded {count} companies.");
            }
            FetchProgress::Failed { message } => {
                self.status_message = format!("Fetch failed: {message}");
                self.phase = SessionPhase::Error(message);
            }
        }
    }

    /// Queue a reload of the configured endpoint (File > Reload).
    ///
    /// Starts a fresh session: the current phase is replaced by Loading
    /// when the new fetch's Started message arrives.
    pub fn request_reload(&mut self) {
        self.pending_fetch = Some(self.endpoint.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CompanyRecord;

    fn make_record(id: u64, name: &str) -> CompanyRecord {
        CompanyRecord {
            id,
            name: name.to_string(),
            location: "Pune".to_string(),
            industry: "Software".to_string(),
        }
    }

    fn new_state() -> AppState {
        AppState::new("http://localhost:5000/companies".to_string(), true)
    }

    #[test]
    fn test_initial_state_is_loading_with_queued_fetch() {
        let state = new_state();
        assert!(state.phase.is_loading());
        assert_eq!(
            state.pending_fetch.as_deref(),
            Some("http://localhost:5000/companies")
        );
        assert!(state.fetched_at.is_none());
    }

    #[test]
    fn test_completed_transitions_to_loaded() {
        let mut state = new_state();
        state.apply_fetch_progress(FetchProgress::Completed {
            records: vec![make_record(2, "Beta"), make_record(1, "Acme")],
        });

        assert!(state.phase.is_loaded());
        assert_eq!(state.directory.total_len(), 2);
        // load() sorted the records by id.
        assert_eq!(state.directory.record(0).unwrap().id, 1);
        assert!(state.fetched_at.is_some());
        assert_eq!(state.status_message, "Loaded 2 companies.");
    }

    #[test]
    fn test_failed_transitions_to_error_with_verbatim_message() {
        let mut state = new_state();
        state.apply_fetch_progress(FetchProgress::Failed {
            message: "Network error".to_string(),
        });

        assert_eq!(state.phase, SessionPhase::Error("Network error".to_string()));
        assert!(state.status_message.contains("Network error"));
        // Error state carries no records: the table is not shown.
        assert_eq!(state.directory.total_len(), 0);
    }

    #[test]
    fn test_reload_after_error_starts_fresh_session() {
        let mut state = new_state();
        state.apply_fetch_progress(FetchProgress::Failed {
            message: "Network error".to_string(),
        });
        state.pending_fetch = None;

        state.request_reload();
        assert_eq!(state.pending_fetch.as_deref(), Some(state.endpoint.as_str()));

        state.apply_fetch_progress(FetchProgress::Started);
        assert!(state.phase.is_loading());

        state.apply_fetch_progress(FetchProgress::Completed {
            records: vec![make_record(1, "Acme")],
        });
        assert!(state.phase.is_loaded());
        assert_eq!(state.directory.total_len(), 1);
    }
}
