use std::collections::BTreeSet;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Record – one row of the placement table
// ---------------------------------------------------------------------------

/// A single placement record (one CSV row), with a fixed schema.
///
/// Salary and placement date are optional: source files routinely carry
/// blank or unparseable entries in those columns, and such rows stay in the
/// dataset with the field marked missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub branch: String,
    pub graduation_year: i32,
    pub company: String,
    pub job_role: String,
    pub location: String,
    /// Salary in INR. `None` when blank, non-numeric, or negative.
    pub salary: Option<f64>,
    /// `None` when the date column was blank or did not parse.
    pub placement_date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// FilterDomains – distinct values offered by the filter widgets
// ---------------------------------------------------------------------------

/// Distinct values per filterable column, sorted ascending.
/// Empty strings (missing categoricals) are excluded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDomains {
    pub branches: Vec<String>,
    pub years: Vec<i32>,
    pub companies: Vec<String>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Read-only after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records, in file order.
    pub records: Vec<Record>,
    /// Precomputed filter domains.
    pub domains: FilterDomains,
}

impl Dataset {
    /// Build the dataset and its filter domains from loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut branches: BTreeSet<&str> = BTreeSet::new();
        let mut years: BTreeSet<i32> = BTreeSet::new();
        let mut companies: BTreeSet<&str> = BTreeSet::new();

        for record in &records {
            if !record.branch.is_empty() {
                branches.insert(&record.branch);
            }
            years.insert(record.graduation_year);
            if !record.company.is_empty() {
                companies.insert(&record.company);
            }
        }

        let domains = FilterDomains {
            branches: branches.into_iter().map(str::to_string).collect(),
            years: years.into_iter().collect(),
            companies: companies.into_iter().map(str::to_string).collect(),
        };

        Dataset { records, domains }
    }

    /// Distinct filterable values, sorted ascending.
    pub fn domains(&self) -> &FilterDomains {
        &self.domains
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
