// FirmLens - core/filter.rs
//
// Composable filter engine for company records.
// All active criteria are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::CompanyRecord;
use crate::util::constants::MAX_REGEX_PATTERN_LENGTH;
use crate::util::error::FilterError;
use regex::Regex;

/// Complete filter criteria. All fields are AND-combined when applied.
///
/// Empty/None fields are identity filters: a default `FilterCriteria`
/// matches every record.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match on the company name. Empty = no filter.
    pub name_query: String,

    /// Compiled regex match on the company name. None = no regex filter.
    pub name_regex: Option<Regex>,

    /// Exact location constraint. None = all locations.
    pub location: Option<String>,

    /// Exact industry constraint. None = all industries.
    pub industry: Option<String>,
}

impl FilterCriteria {
    /// Returns true if no criteria are active.
    pub fn is_empty(&self) -> bool {
        self.name_query.is_empty()
            && self.name_regex.is_none()
            && self.location.is_none()
            && self.industry.is_none()
    }

    /// Set the name regex, compiling it.
    ///
    /// An empty pattern clears the regex. On error the previous regex is
    /// left untouched so the filtered view does not flicker while the user
    /// is mid-edit on an invalid pattern.
    pub fn set_regex(&mut self, pattern: &str) -> Result<(), FilterError> {
        if pattern.is_empty() {
            self.name_regex = None;
            return Ok(());
        }
        if pattern.len() > MAX_REGEX_PATTERN_LENGTH {
            return Err(FilterError::RegexTooLong {
                length: pattern.len(),
                max_length: MAX_REGEX_PATTERN_LENGTH,
            });
        }
        let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.name_regex = Some(regex);
        Ok(())
    }
}

/// Apply criteria to a slice of records, returning indices of matches.
///
/// Returns a Vec of indices into the original records slice, in input
/// order. The filter is order-preserving, not sorting: the result is
/// always a subset of the input in the same relative order.
pub fn apply_filters(records: &[CompanyRecord], criteria: &FilterCriteria) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..records.len()).collect();
    }

    let query_lower = criteria.name_query.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_all(record, criteria, &query_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single record matches all active criteria.
fn matches_all(record: &CompanyRecord, criteria: &FilterCriteria, query_lower: &str) -> bool {
    // Name substring (case-insensitive)
    if !query_lower.is_empty() && !record.name.to_lowercase().contains(query_lower) {
        return false;
    }

    // Name regex
    if let Some(ref regex) = criteria.name_regex {
        if !regex.is_match(&record.name) {
            return false;
        }
    }

    // Location
    if let Some(ref location) = criteria.location {
        if &record.location != location {
            return false;
        }
    }

    // Industry
    if let Some(ref industry) = criteria.industry {
        if &record.industry != industry {
            return false;
        }
    }

    true
}
