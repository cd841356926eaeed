use crate::types::TimesheetEntry;
use std::collections::{BTreeMap, HashMap};

/// Why an entry could not be appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendRefused {
    UnknownCategory,
}

/// In-memory categories and their entries, owned by `App` for the process lifetime.
///
/// Categories keep insertion order and can exist with zero entries.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    categories: Vec<String>,
    entries: HashMap<String, Vec<TimesheetEntry>>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Add a category. Blank or already-present names are ignored.
    ///
    /// Returns `true` if the category set changed.
    pub fn add_category(&mut self, name: &str) -> bool {
        if name.trim().is_empty() || self.contains_category(name) {
            return false;
        }
        self.categories.push(name.to_string());
        true
    }

    /// Append an entry to an existing category.
    pub fn append(&mut self, category: &str, entry: TimesheetEntry) -> Result<(), AppendRefused> {
        if !self.contains_category(category) {
            return Err(AppendRefused::UnknownCategory);
        }
        self.entries
            .entry(category.to_string())
            .or_default()
            .push(entry);
        Ok(())
    }

    /// Entries of one category, in the order they were saved.
    pub fn entries_for(&self, category: &str) -> &[TimesheetEntry] {
        self.entries
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Total hours per date across every category, ordered by date string.
    pub fn daily_totals(&self) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for entry in self.entries.values().flatten() {
            *totals.entry(entry.date().to_string()).or_insert(0.0) += entry.hours_worked();
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, start: &str, end: &str) -> TimesheetEntry {
        TimesheetEntry::new(date, start, end, "").expect("positive duration")
    }

    #[test]
    fn test_add_category_keeps_insertion_order() {
        let mut store = EntryStore::new();
        assert!(store.add_category("Work"));
        assert!(store.add_category("Study"));
        assert!(store.add_category("Admin"));
        assert_eq!(store.categories(), ["Work", "Study", "Admin"]);
    }

    #[test]
    fn test_blank_category_is_ignored() {
        let mut store = EntryStore::new();
        store.add_category("Work");
        assert!(!store.add_category(""));
        assert!(!store.add_category("   "));
        assert_eq!(store.categories(), ["Work"]);
    }

    #[test]
    fn test_duplicate_category_is_ignored() {
        let mut store = EntryStore::new();
        store.add_category("Work");
        assert!(!store.add_category("Work"));
        assert_eq!(store.categories(), ["Work"]);
    }

    #[test]
    fn test_category_can_exist_without_entries() {
        let mut store = EntryStore::new();
        store.add_category("Work");
        assert!(store.entries_for("Work").is_empty());
        assert!(store.daily_totals().is_empty());
    }

    #[test]
    fn test_append_requires_known_category() {
        let mut store = EntryStore::new();
        let result = store.append("Ghost", entry("2024-01-01", "09:00", "10:00"));
        assert_eq!(result, Err(AppendRefused::UnknownCategory));
        assert_eq!(store.entry_count(), 0);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = EntryStore::new();
        store.add_category("Work");
        store
            .append("Work", entry("2024-01-02", "09:00", "10:00"))
            .unwrap();
        store
            .append("Work", entry("2024-01-01", "13:00", "15:00"))
            .unwrap();
        let dates: Vec<&str> = store.entries_for("Work").iter().map(|e| e.date()).collect();
        assert_eq!(dates, ["2024-01-02", "2024-01-01"]);
    }

    #[test]
    fn test_empty_store_has_no_totals() {
        assert!(EntryStore::new().daily_totals().is_empty());
    }

    #[test]
    fn test_daily_totals_sum_across_categories() {
        let mut a_first = EntryStore::new();
        a_first.add_category("A");
        a_first.add_category("B");
        a_first
            .append("A", entry("2024-01-01", "09:00", "11:00"))
            .unwrap();
        a_first
            .append("B", entry("2024-01-01", "13:00", "16:00"))
            .unwrap();

        let mut b_first = EntryStore::new();
        b_first.add_category("B");
        b_first.add_category("A");
        b_first
            .append("B", entry("2024-01-01", "13:00", "16:00"))
            .unwrap();
        b_first
            .append("A", entry("2024-01-01", "09:00", "11:00"))
            .unwrap();

        let expected = BTreeMap::from([("2024-01-01".to_string(), 5.0)]);
        assert_eq!(a_first.daily_totals(), expected);
        assert_eq!(b_first.daily_totals(), expected);
    }

    #[test]
    fn test_daily_totals_group_by_date() {
        let mut store = EntryStore::new();
        store.add_category("Work");
        store.add_category("Study");
        store
            .append("Work", entry("2024-01-02", "09:00", "12:00"))
            .unwrap();
        store
            .append("Work", entry("2024-01-01", "09:00", "10:30"))
            .unwrap();
        store
            .append("Study", entry("2024-01-02", "18:00", "19:00"))
            .unwrap();

        let totals: Vec<(String, f64)> = store.daily_totals().into_iter().collect();
        assert_eq!(
            totals,
            vec![
                ("2024-01-01".to_string(), 1.5),
                ("2024-01-02".to_string(), 4.0),
            ]
        );
    }
}
