// FirmLens - app/fetch.rs
//
// Fetch lifecycle management. Performs the directory request on a
// background thread, sending progress messages to the UI thread via
// an mpsc channel.
//
// Architecture:
//   - `FetchManager` lives on the UI thread; `run_fetch` runs on a
//     background thread.
//   - All cross-thread communication is via `FetchProgress` channel
//     messages; there is no shared mutable state.
//   - One outstanding fetch at a time. Starting a new fetch replaces the
//     receiver; the orphaned thread's sends fail and it exits quietly.
//   - No retry and no partial-data fallback: any failure is surfaced as a
//     single `Failed` message carrying the user-facing text.

use crate::core::model::{CompanyRecord, FetchProgress};
use crate::util::constants::{FETCH_TIMEOUT_SECS, HTTP_USER_AGENT, MAX_RECORDS};
use crate::util::error::FetchError;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::sync::mpsc;
use std::time::Duration;

/// Manages the directory fetch on a background thread.
pub struct FetchManager {
    /// Channel receiver for the UI to poll progress messages.
    pub progress_rx: Option<mpsc::Receiver<FetchProgress>>,
}

impl FetchManager {
    pub fn new() -> Self {
        Self { progress_rx: None }
    }

    /// Start fetching the directory from `endpoint`.
    ///
    /// Spawns a background thread immediately; progress is sent over the
    /// channel.
    pub fn start_fetch(&mut self, endpoint: String) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || {
            run_fetch(endpoint, tx);
        });

        tracing::info!("Fetch started");
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<FetchProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for FetchManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Background fetch
// =============================================================================

/// Single GET + decode pipeline. Runs on a background thread.
fn run_fetch(endpoint: String, tx: mpsc::Sender<FetchProgress>) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                return; // Receiver dropped (UI closed or refetch); exit quietly.
            }
        };
    }

    send!(FetchProgress::Started);

    match fetch_records(&endpoint) {
        Ok(records) => {
            tracing::info!(count = records.len(), endpoint = %endpoint, "Fetch completed");
            send!(FetchProgress::Completed { records });
        }
        Err(e) => {
            tracing::warn!(error = %e, endpoint = %endpoint, "Fetch failed");
            send!(FetchProgress::Failed {
                message: e.to_string(),
            });
        }
    }
}

/// Fetch and decode the company list from `endpoint`.
///
/// Blocking; intended to run off the UI thread.
pub fn fetch_records(endpoint: &str) -> Result<Vec<CompanyRecord>, FetchError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| FetchError::Transport {
            url: endpoint.to_string(),
            source: e,
        })?;

    let response = client
        .get(endpoint)
        .header(USER_AGENT, HTTP_USER_AGENT)
        .send()
        .map_err(|e| FetchError::Transport {
            url: endpoint.to_string(),
            source: e,
        })?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: endpoint.to_string(),
            status: response.status().as_u16(),
        });
    }

    let body = response.text().map_err(|e| FetchError::Transport {
        url: endpoint.to_string(),
        source: e,
    })?;

    decode_records(&body)
}

/// Decode a JSON array of company records.
///
/// Pure function, separated from the network call so decode behaviour is
/// testable without an endpoint. Oversized payloads are truncated at
/// `MAX_RECORDS` with a warning rather than rejected.
pub fn decode_records(json: &str) -> Result<Vec<CompanyRecord>, FetchError> {
    let mut records: Vec<CompanyRecord> =
        serde_json::from_str(json).map_err(|e| FetchError::Decode { source: e })?;

    if records.len() > MAX_RECORDS {
        tracing::warn!(
            count = records.len(),
            max = MAX_RECORDS,
            "Endpoint returned more records than the cap; truncating"
        );
        records.truncate(MAX_RECORDS);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_array() {
        let json = r#"[
            {"id": 2, "name": "Beta", "location": "Pune", "industry": "Fintech"},
            {"id": 1, "name": "Acme", "location": "Pune", "industry": "Software"}
        ]"#;
        let records = decode_records(json).unwrap();
        assert_eq!(records.len(), 2);
        // Decode preserves wire order; sorting is DirectoryState::load's job.
        assert_eq!(records[0].id, 2);
        assert_eq!(records[1].name, "Acme");
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let result = decode_records(r#"{"error": "oops"}"#);
        assert!(matches!(result, Err(FetchError::Decode { .. })));
    }

    #[test]
    fn test_decode_rejects_malformed_record() {
        let result = decode_records(r#"[{"id": "not a number"}]"#);
        assert!(matches!(result, Err(FetchError::Decode { .. })));
    }

    #[test]
    fn test_decode_error_message_is_user_readable() {
        let err = decode_records("not json at all").unwrap_err();
        assert!(err.to_string().contains("not a valid company list"));
    }
}
