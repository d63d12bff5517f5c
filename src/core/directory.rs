// FirmLens - core/directory.rs
//
// DirectoryState: the browsable view over the fetched record set.
// Owns the full set, the active filter criteria, the derived filtered
// index list, and the pagination cursor. The filtered set is recomputed
// whenever the criteria or the source set change; the page window is a
// slice over the filtered indices.
//
// Invariants:
//   - filtered indices are a subset of the full set, ascending by id
//     (the full set is sorted once at load; filtering preserves order);
//   - current_page resets to 1 whenever criteria or the source set change;
//   - current_page is always within [1, max(1, total_pages())].

use crate::core::filter::{self, FilterCriteria};
use crate::core::model::{CompanyRecord, DirectorySummary};
use crate::util::constants::ITEMS_PER_PAGE;
use std::collections::BTreeMap;

/// Filtered, paginated view over the company directory.
#[derive(Debug)]
pub struct DirectoryState {
    /// Full record set, sorted ascending by id. Immutable between loads.
    records: Vec<CompanyRecord>,

    /// Active filter criteria.
    criteria: FilterCriteria,

    /// Indices of records matching the criteria (into `records`).
    filtered: Vec<usize>,

    /// Current page, 1-based.
    current_page: usize,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            current_page: 1,
        }
    }

    /// Replace the full record set.
    ///
    /// Records are sorted ascending by id so display order is stable
    /// regardless of the order the endpoint returned them in. Resets the
    /// page cursor and recomputes the filtered set under the current
    /// criteria.
    pub fn load(&mut self, mut records: Vec<CompanyRecord>) {
        records.sort_by_key(|r| r.id);
        self.records = records;
        self.current_page = 1;
        self.recompute();
    }

    /// Replace the filter criteria, recompute, and reset to page 1.
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.current_page = 1;
        self.recompute();
    }

    /// Recompute the filtered index list from the records and criteria.
    pub fn recompute(&mut self) {
        self.filtered = filter::apply_filters(&self.records, &self.criteria);
        self.current_page = self.current_page.min(self.total_pages().max(1));
    }

    /// Set the current page, clamped to [1, max(1, total_pages())].
    ///
    /// The UI disables out-of-range controls, but clamping here keeps the
    /// page invariant for any caller.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    /// Total number of pages over the filtered set.
    ///
    /// 0 when the filtered set is empty; callers render a placeholder and
    /// no pagination controls in that state.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(ITEMS_PER_PAGE)
    }

    /// The filtered indices visible on the current page.
    ///
    /// Index range [(page-1)*N, page*N) clipped to the filtered length;
    /// at most `ITEMS_PER_PAGE` long, shorter only on the last page.
    pub fn page_window(&self) -> &[usize] {
        let start = (self.current_page - 1) * ITEMS_PER_PAGE;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + ITEMS_PER_PAGE).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// The records visible on the current page, in display order.
    pub fn page_records(&self) -> impl Iterator<Item = &CompanyRecord> {
        self.page_window().iter().map(|&idx| &self.records[idx])
    }

    /// Aggregate counts over the filtered set for the summary dialog.
    pub fn summary(&self) -> DirectorySummary {
        let mut by_location: BTreeMap<&str, usize> = BTreeMap::new();
        let mut by_industry: BTreeMap<&str, usize> = BTreeMap::new();
        for &idx in &self.filtered {
            let record = &self.records[idx];
            *by_location.entry(&record.location).or_default() += 1;
            *by_industry.entry(&record.industry).or_default() += 1;
        }

        // Most common first; alphabetical within equal counts.
        let sort_counts = |map: BTreeMap<&str, usize>| {
            let mut pairs: Vec<(String, usize)> =
                map.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
            pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            pairs
        };

        DirectorySummary {
            total: self.filtered.len(),
            by_location: sort_counts(by_location),
            by_industry: sort_counts(by_industry),
        }
    }

    // -- Accessors --

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn record(&self, idx: usize) -> Option<&CompanyRecord> {
        self.records.get(idx)
    }

    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered_records(&self) -> Vec<CompanyRecord> {
        self.filtered
            .iter()
            .filter_map(|&idx| self.records.get(idx))
            .cloned()
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_len(&self) -> usize {
        self.records.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: u64, name: &str, location: &str, industry: &str) -> CompanyRecord {
        CompanyRecord {
            id,
            name: name.to_string(),
            location: location.to_string(),
            industry: industry.to_string(),
        }
    }

    /// 25 records, ids 1..=25, cycling through three cities and two sectors.
    fn many_records() -> Vec<CompanyRecord> {
        (1..=25)
            .map(|id| {
                let location = ["Pune", "Delhi", "Mumbai"][(id as usize - 1) % 3];
                let industry = ["Software", "Fintech"][(id as usize - 1) % 2];
                make_record(id, &format!("Company {id}"), location, industry)
            })
            .collect()
    }

    #[test]
    fn test_load_sorts_by_id() {
        let mut state = DirectoryState::new();
        state.load(vec![
            make_record(3, "C", "Pune", "Software"),
            make_record(1, "A", "Pune", "Software"),
            make_record(2, "B", "Pune", "Software"),
        ]);
        let ids: Vec<u64> = state.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // Unfiltered view covers everything.
        assert_eq!(state.filtered_indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut state = DirectoryState::new();
        state.load(many_records());
        state.set_page(3);
        assert_eq!(state.current_page(), 3);

        state.set_filter(FilterCriteria {
            location: Some("Pune".to_string()),
            ..Default::default()
        });
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_load_resets_page() {
        let mut state = DirectoryState::new();
        state.load(many_records());
        state.set_page(3);
        state.load(many_records());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_pagination_25_records() {
        let mut state = DirectoryState::new();
        state.load(many_records());

        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.page_window().len(), 10);

        state.set_page(2);
        assert_eq!(state.page_window().len(), 10);

        state.set_page(3);
        assert_eq!(state.page_window().len(), 5);

        // First record of page 2 is id 11.
        state.set_page(2);
        let first = state.page_records().next().unwrap();
        assert_eq!(first.id, 11);
    }

    #[test]
    fn test_page_window_never_exceeds_page_size() {
        let mut state = DirectoryState::new();
        state.load(many_records());
        for page in 1..=state.total_pages() {
            state.set_page(page);
            assert!(state.page_window().len() <= ITEMS_PER_PAGE);
            if page < state.total_pages() {
                assert_eq!(state.page_window().len(), ITEMS_PER_PAGE);
            }
        }
    }

    #[test]
    fn test_set_page_clamps_out_of_range() {
        let mut state = DirectoryState::new();
        state.load(many_records());

        state.set_page(99);
        assert_eq!(state.current_page(), 3);

        state.set_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_empty_directory_is_well_defined() {
        let mut state = DirectoryState::new();
        state.load(Vec::new());
        assert_eq!(state.total_pages(), 0);
        assert!(state.page_window().is_empty());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_empty_filtered_set_is_well_defined() {
        let mut state = DirectoryState::new();
        state.load(many_records());
        state.set_filter(FilterCriteria {
            name_query: "no such company".to_string(),
            ..Default::default()
        });
        assert_eq!(state.filtered_len(), 0);
        assert_eq!(state.total_pages(), 0);
        assert!(state.page_window().is_empty());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_set_filter_is_idempotent() {
        let mut state = DirectoryState::new();
        state.load(many_records());

        let criteria = FilterCriteria {
            location: Some("Delhi".to_string()),
            ..Default::default()
        };
        state.set_filter(criteria.clone());
        let first = state.filtered_indices().to_vec();
        state.set_filter(criteria);
        assert_eq!(state.filtered_indices(), &first[..]);
    }

    #[test]
    fn test_conjunctive_narrowing_scenario() {
        let mut state = DirectoryState::new();
        state.load(vec![
            make_record(1, "Acme", "Pune", "Software"),
            make_record(2, "Beta", "Pune", "Fintech"),
            make_record(3, "Acme2", "Delhi", "Software"),
        ]);

        let mut criteria = FilterCriteria {
            name_query: "acme".to_string(),
            ..Default::default()
        };
        state.set_filter(criteria.clone());
        let ids: Vec<u64> = state.page_records().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);

        criteria.industry = Some("Software".to_string());
        state.set_filter(criteria.clone());
        let ids: Vec<u64> = state.page_records().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);

        criteria.location = Some("Delhi".to_string());
        state.set_filter(criteria);
        let ids: Vec<u64> = state.page_records().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_filtered_is_ordered_subset_of_full() {
        let mut state = DirectoryState::new();
        state.load(many_records());
        state.set_filter(FilterCriteria {
            industry: Some("Fintech".to_string()),
            ..Default::default()
        });
        let ids: Vec<u64> = state
            .filtered_indices()
            .iter()
            .map(|&i| state.record(i).unwrap().id)
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_summary_counts() {
        let mut state = DirectoryState::new();
        state.load(vec![
            make_record(1, "Acme", "Pune", "Software"),
            make_record(2, "Beta", "Pune", "Fintech"),
            make_record(3, "Gamma", "Delhi", "Software"),
        ]);

        let summary = state.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_location[0], ("Pune".to_string(), 2));
        assert_eq!(summary.by_industry[0], ("Software".to_string(), 2));

        // Summary follows the filtered set, not the full set.
        state.set_filter(FilterCriteria {
            location: Some("Delhi".to_string()),
            ..Default::default()
        });
        let summary = state.summary();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.by_industry, vec![("Software".to_string(), 1)]);
    }
}
