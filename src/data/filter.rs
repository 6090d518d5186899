use std::collections::BTreeSet;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// FilterSelection – which values the user has selected
// ---------------------------------------------------------------------------

/// The three independent filter selections.
///
/// `branches` and `years` are plain value sets: an empty set matches
/// nothing, and "all" semantics mean populating the full domain
/// ([`FilterSelection::select_all`]). `company: None` means no company
/// constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub branches: BTreeSet<String>,
    pub years: BTreeSet<i32>,
    pub company: Option<String>,
}

impl FilterSelection {
    /// Selection with every branch and year selected and no company
    /// constraint — the state the filter widgets start from.
    pub fn select_all(dataset: &Dataset) -> Self {
        let domains = dataset.domains();
        FilterSelection {
            branches: domains.branches.iter().cloned().collect(),
            years: domains.years.iter().copied().collect(),
            company: None,
        }
    }

    /// Whether a record satisfies all three filters.
    pub fn matches(&self, record: &Record) -> bool {
        self.branches.contains(&record.branch)
            && self.years.contains(&record.graduation_year)
            && self
                .company
                .as_deref()
                .map_or(true, |company| record.company == company)
    }
}

// ---------------------------------------------------------------------------
// FilteredView – the subsequence passing the current filters
// ---------------------------------------------------------------------------

/// A view over the records matching a [`FilterSelection`], in original
/// dataset order. Recomputed on every filter change, never mutated.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Rebuild a view from previously computed indices.
    pub fn from_indices(dataset: &'a Dataset, indices: Vec<usize>) -> Self {
        FilteredView { dataset, indices }
    }

    /// Iterate over the visible records in dataset order.
    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let dataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.records[i])
    }

    /// Indices of the visible records within the dataset.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Apply the selection to the dataset.
///
/// Deterministic and side-effect-free: the output is the subsequence of
/// records satisfying the selection, in original order. Unknown values
/// simply match nothing; there are no error conditions.
pub fn apply_filters<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| selection.matches(record))
        .map(|(i, _)| i)
        .collect();

    FilteredView { dataset, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, branch: &str, year: i32, company: &str) -> Record {
        Record {
            name: name.to_string(),
            branch: branch.to_string(),
            graduation_year: year,
            company: company.to_string(),
            job_role: String::new(),
            location: String::new(),
            salary: None,
            placement_date: None,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("a", "CS", 2023, "Acme"),
            record("b", "CS", 2023, "Beta"),
            record("c", "EE", 2022, "Acme"),
            record("d", "ME", 2023, "Gamma"),
        ])
    }

    #[test]
    fn keeps_matching_records_in_original_order() {
        let ds = sample_dataset();
        let selection = FilterSelection {
            branches: ["CS", "EE"].iter().map(|s| s.to_string()).collect(),
            years: [2022, 2023].into_iter().collect(),
            company: None,
        };

        let view = apply_filters(&ds, &selection);
        let names: Vec<&str> = view.records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(view.records().all(|r| selection.matches(r)));
    }

    #[test]
    fn company_constraint_is_optional() {
        let ds = sample_dataset();
        let mut selection = FilterSelection::select_all(&ds);
        selection.company = Some("Acme".to_string());

        let view = apply_filters(&ds, &selection);
        let names: Vec<&str> = view.records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn empty_branch_set_collapses_to_empty_view() {
        let ds = sample_dataset();
        let selection = FilterSelection {
            branches: BTreeSet::new(),
            years: [2022, 2023].into_iter().collect(),
            company: None,
        };

        assert!(apply_filters(&ds, &selection).is_empty());
    }

    #[test]
    fn unknown_values_match_nothing() {
        let ds = sample_dataset();
        let mut selection = FilterSelection::select_all(&ds);
        selection.company = Some("Nonexistent Corp".to_string());

        assert!(apply_filters(&ds, &selection).is_empty());
    }

    #[test]
    fn apply_filters_is_idempotent() {
        let ds = sample_dataset();
        let selection = FilterSelection::select_all(&ds);

        let first = apply_filters(&ds, &selection).into_indices();
        let second = apply_filters(&ds, &selection).into_indices();
        assert_eq!(first, second);
    }
}
