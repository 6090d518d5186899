use crate::data::filter::{apply_filters, FilterSelection, FilteredView};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Dashboard tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Academics,
    Companies,
    Salaries,
    Locations,
    MultiFactor,
    Timeline,
    Roles,
}

impl Tab {
    pub const ALL: [Tab; 8] = [
        Tab::Overview,
        Tab::Academics,
        Tab::Companies,
        Tab::Salaries,
        Tab::Locations,
        Tab::MultiFactor,
        Tab::Timeline,
        Tab::Roles,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Academics => "Academic Trends",
            Tab::Companies => "Company Insights",
            Tab::Salaries => "Salary Analysis",
            Tab::Locations => "Location Insights",
            Tab::MultiFactor => "Multi-Factor",
            Tab::Timeline => "Placement Timeline",
            Tab::Roles => "Job Roles",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The filter selection is an
/// explicit value handed to the filter engine; no module-level state.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Current filter selections.
    pub selection: FilterSelection,

    /// Indices of records passing the current filters.
    pub visible: Vec<usize>,

    /// Active dashboard tab.
    pub tab: Tab,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: FilterSelection::default(),
            visible: Vec::new(),
            tab: Tab::Overview,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and start with everything selected.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection = FilterSelection::select_all(&dataset);
        self.visible = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute `visible` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(dataset) = &self.dataset {
            self.visible = apply_filters(dataset, &self.selection).into_indices();
        }
    }

    /// The filtered view for the current frame.
    pub fn view<'a>(&self, dataset: &'a Dataset) -> FilteredView<'a> {
        FilteredView::from_indices(dataset, self.visible.clone())
    }

    /// Toggle a single branch in the selection.
    pub fn toggle_branch(&mut self, branch: &str) {
        if !self.selection.branches.remove(branch) {
            self.selection.branches.insert(branch.to_string());
        }
        self.refilter();
    }

    /// Toggle a single graduation year in the selection.
    pub fn toggle_year(&mut self, year: i32) {
        if !self.selection.years.remove(&year) {
            self.selection.years.insert(year);
        }
        self.refilter();
    }

    /// Constrain to one company, or `None` for all.
    pub fn set_company(&mut self, company: Option<String>) {
        self.selection.company = company;
        self.refilter();
    }

    pub fn select_all_branches(&mut self) {
        if let Some(dataset) = &self.dataset {
            self.selection.branches = dataset.domains().branches.iter().cloned().collect();
        }
        self.refilter();
    }

    pub fn clear_branches(&mut self) {
        self.selection.branches.clear();
        self.refilter();
    }

    pub fn select_all_years(&mut self) {
        if let Some(dataset) = &self.dataset {
            self.selection.years = dataset.domains().years.iter().copied().collect();
        }
        self.refilter();
    }

    pub fn clear_years(&mut self) {
        self.selection.years.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn record(branch: &str, year: i32, company: &str) -> Record {
        Record {
            name: String::new(),
            branch: branch.to_string(),
            graduation_year: year,
            company: company.to_string(),
            job_role: String::new(),
            location: String::new(),
            salary: None,
            placement_date: None,
        }
    }

    #[test]
    fn set_dataset_selects_everything() {
        let mut state = AppState::default();
        state.set_dataset(Dataset::from_records(vec![
            record("CS", 2023, "Acme"),
            record("EE", 2022, "Beta"),
        ]));

        assert_eq!(state.visible, vec![0, 1]);
        assert_eq!(state.selection.branches.len(), 2);
        assert_eq!(state.selection.company, None);
    }

    #[test]
    fn toggling_filters_recomputes_visible() {
        let mut state = AppState::default();
        state.set_dataset(Dataset::from_records(vec![
            record("CS", 2023, "Acme"),
            record("EE", 2022, "Beta"),
            record("CS", 2022, "Acme"),
        ]));

        state.toggle_branch("EE");
        assert_eq!(state.visible, vec![0, 2]);

        state.set_company(Some("Acme".to_string()));
        assert_eq!(state.visible, vec![0, 2]);

        state.clear_years();
        assert!(state.visible.is_empty());

        state.select_all_years();
        state.toggle_branch("EE");
        state.set_company(None);
        assert_eq!(state.visible, vec![0, 1, 2]);
    }
}
