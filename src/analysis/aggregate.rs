use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::data::filter::FilteredView;
use crate::data::model::Record;

// ---------------------------------------------------------------------------
// Grouping keys
// ---------------------------------------------------------------------------

/// Categorical columns the grouped aggregations can key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Branch,
    Company,
    JobRole,
    Location,
}

impl CategoryField {
    fn value(self, record: &Record) -> &str {
        match self {
            CategoryField::Branch => &record.branch,
            CategoryField::Company => &record.company,
            CategoryField::JobRole => &record.job_role,
            CategoryField::Location => &record.location,
        }
    }
}

/// A calendar month, usable as an ordered grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One group of a count aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: String,
    pub count: usize,
}

/// One group of a mean-salary aggregation. `count` is the number of
/// records that contributed a salary (missing salaries are excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub key: String,
    pub mean: f64,
    pub count: usize,
}

/// Ordering requested by the caller for mean aggregations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    KeyAscending,
    MeanDescending,
}

/// Salary extremes over a view. Undefined (absent) when no record in the
/// view carries a salary.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Records with a salary value.
    pub count: usize,
}

/// Mean salary per branch × company cell; `None` where the pair has no
/// salary data.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanPivot {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    /// `cells[row][col]`, aligned with `rows` / `cols`.
    pub cells: Vec<Vec<Option<f64>>>,
}

/// Row count per category × category cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CountPivot {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    pub cells: Vec<Vec<usize>>,
}

/// Highest salary observed for a company / job-role pair, with the number
/// of placements in that pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRoleSalary {
    pub company: String,
    pub job_role: String,
    pub max_salary: f64,
    pub count: usize,
}

/// The job-role / company pair with the most placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCompanyCount {
    pub job_role: String,
    pub company: String,
    pub count: usize,
}

/// Change between the two most recent graduation years in the view.
/// Percentages are `None` when the prior period's figure is zero or
/// undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct YearOverYear {
    pub latest_year: i32,
    pub prior_year: i32,
    pub placement_change_pct: Option<f64>,
    pub salary_change_pct: Option<f64>,
}

/// One bin of the salary histogram; `lower` inclusive, `upper` exclusive
/// except for the last bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Counts
// ---------------------------------------------------------------------------

/// Row count per distinct value of `field`, descending by count.
/// Equal counts keep first-seen (dataset) order: the sort is stable and
/// groups are accumulated in encounter order.
pub fn count_by_category(view: &FilteredView<'_>, field: CategoryField) -> Vec<GroupCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupCount> = Vec::new();

    for record in view.records() {
        let key = field.value(record);
        match index.get(key) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                index.insert(key, groups.len());
                groups.push(GroupCount {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// Row count per graduation year, ascending by year.
pub fn count_by_year(view: &FilteredView<'_>) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for record in view.records() {
        *counts.entry(record.graduation_year).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Row count per placement month, ascending. Records without a placement
/// date are excluded from this series only.
pub fn count_by_month(view: &FilteredView<'_>) -> Vec<(YearMonth, usize)> {
    let mut counts: BTreeMap<YearMonth, usize> = BTreeMap::new();
    for record in view.records() {
        if let Some(date) = record.placement_date {
            *counts.entry(YearMonth::from(date)).or_default() += 1;
        }
    }
    counts.into_iter().collect()
}

/// The `k` most frequent values of `field`, descending by count.
/// Ties keep first-seen order (see [`count_by_category`]).
pub fn top_k(view: &FilteredView<'_>, field: CategoryField, k: usize) -> Vec<GroupCount> {
    let mut groups = count_by_category(view, field);
    groups.truncate(k);
    groups
}

/// The most frequent value of `field`; the first value attaining the
/// maximum count wins. `None` for an empty view.
pub fn most_common(view: &FilteredView<'_>, field: CategoryField) -> Option<GroupCount> {
    count_by_category(view, field).into_iter().next()
}

// ---------------------------------------------------------------------------
// Means and extremes
// ---------------------------------------------------------------------------

/// Mean salary per distinct value of `field`, in the caller's requested
/// order. Groups with no salary data are excluded.
pub fn mean_salary_by(
    view: &FilteredView<'_>,
    field: CategoryField,
    order: SortOrder,
) -> Vec<GroupMean> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sums: Vec<(String, f64, usize)> = Vec::new();

    for record in view.records() {
        let Some(salary) = record.salary else { continue };
        let key = field.value(record);
        match index.get(key) {
            Some(&slot) => {
                sums[slot].1 += salary;
                sums[slot].2 += 1;
            }
            None => {
                index.insert(key, sums.len());
                sums.push((key.to_string(), salary, 1));
            }
        }
    }

    let mut groups: Vec<GroupMean> = sums
        .into_iter()
        .map(|(key, sum, count)| GroupMean {
            key,
            mean: sum / count as f64,
            count,
        })
        .collect();

    match order {
        SortOrder::KeyAscending => groups.sort_by(|a, b| a.key.cmp(&b.key)),
        SortOrder::MeanDescending => groups.sort_by(|a, b| b.mean.total_cmp(&a.mean)),
    }
    groups
}

/// Mean salary per graduation year, ascending by year. Years with no
/// salary data are excluded.
pub fn mean_salary_by_year(view: &FilteredView<'_>) -> Vec<(i32, f64)> {
    mean_by_key(view, |record| Some(record.graduation_year))
}

/// Mean salary per placement-date year, ascending. Records without a date
/// are excluded.
pub fn mean_salary_by_placement_year(view: &FilteredView<'_>) -> Vec<(i32, f64)> {
    mean_by_key(view, |record| record.placement_date.map(|d| d.year()))
}

fn mean_by_key<F>(view: &FilteredView<'_>, key_of: F) -> Vec<(i32, f64)>
where
    F: Fn(&Record) -> Option<i32>,
{
    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for record in view.records() {
        let (Some(key), Some(salary)) = (key_of(record), record.salary) else {
            continue;
        };
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += salary;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, n))| (key, sum / n as f64))
        .collect()
}

/// Min / max / mean of salary over the view; `None` when no record
/// carries a salary.
pub fn salary_stats(view: &FilteredView<'_>) -> Option<SalaryStats> {
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut count = 0usize;

    for record in view.records() {
        if let Some(salary) = record.salary {
            sum += salary;
            min = min.min(salary);
            max = max.max(salary);
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    Some(SalaryStats {
        mean: sum / count as f64,
        min,
        max,
        count,
    })
}

/// The graduation year with the highest mean salary; the earliest such
/// year wins a tie. `None` when no salary data is present.
pub fn best_salary_year(view: &FilteredView<'_>) -> Option<(i32, f64)> {
    let mut best: Option<(i32, f64)> = None;
    for (year, mean) in mean_salary_by_year(view) {
        match best {
            Some((_, best_mean)) if mean <= best_mean => {}
            _ => best = Some((year, mean)),
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Pivots
// ---------------------------------------------------------------------------

/// Mean salary per branch × company cell, keys ascending.
pub fn mean_salary_pivot(view: &FilteredView<'_>) -> MeanPivot {
    let mut sums: BTreeMap<(&str, &str), (f64, usize)> = BTreeMap::new();
    for record in view.records() {
        let Some(salary) = record.salary else { continue };
        let entry = sums
            .entry((record.branch.as_str(), record.company.as_str()))
            .or_insert((0.0, 0));
        entry.0 += salary;
        entry.1 += 1;
    }

    let rows = distinct_keys(view, CategoryField::Branch);
    let cols = distinct_keys(view, CategoryField::Company);
    let cells = rows
        .iter()
        .map(|row| {
            cols.iter()
                .map(|col| {
                    sums.get(&(row.as_str(), col.as_str()))
                        .map(|&(sum, n)| sum / n as f64)
                })
                .collect()
        })
        .collect();

    MeanPivot { rows, cols, cells }
}

/// Row count per `row_field` × `col_field` cell, keys ascending.
pub fn count_pivot(
    view: &FilteredView<'_>,
    row_field: CategoryField,
    col_field: CategoryField,
) -> CountPivot {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for record in view.records() {
        *counts
            .entry((row_field.value(record), col_field.value(record)))
            .or_default() += 1;
    }

    let rows = distinct_keys(view, row_field);
    let cols = distinct_keys(view, col_field);
    let cells = rows
        .iter()
        .map(|row| {
            cols.iter()
                .map(|col| {
                    counts
                        .get(&(row.as_str(), col.as_str()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();

    CountPivot { rows, cols, cells }
}

fn distinct_keys(view: &FilteredView<'_>, field: CategoryField) -> Vec<String> {
    let mut keys: Vec<&str> = view.records().map(|r| field.value(r)).collect();
    keys.sort_unstable();
    keys.dedup();
    keys.into_iter().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Rankings over pairs
// ---------------------------------------------------------------------------

/// Highest salary per company / job-role pair, descending by that maximum.
/// The count covers every placement in the pair, including rows with a
/// missing salary; pairs with no salary data at all are excluded (their
/// maximum is undefined). Equal maxima keep first-seen order.
pub fn top_company_role_salaries(view: &FilteredView<'_>) -> Vec<CompanyRoleSalary> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut pairs: Vec<(String, String, Option<f64>, usize)> = Vec::new();

    for record in view.records() {
        let key = (record.company.as_str(), record.job_role.as_str());
        match index.get(&key) {
            Some(&slot) => {
                let pair = &mut pairs[slot];
                pair.2 = match (pair.2, record.salary) {
                    (Some(current), Some(salary)) => Some(current.max(salary)),
                    (current, salary) => current.or(salary),
                };
                pair.3 += 1;
            }
            None => {
                index.insert(key, pairs.len());
                pairs.push((
                    record.company.clone(),
                    record.job_role.clone(),
                    record.salary,
                    1,
                ));
            }
        }
    }

    let mut ranked: Vec<CompanyRoleSalary> = pairs
        .into_iter()
        .filter_map(|(company, job_role, max_salary, count)| {
            max_salary.map(|max_salary| CompanyRoleSalary {
                company,
                job_role,
                max_salary,
                count,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.max_salary.total_cmp(&a.max_salary));
    ranked
}

/// The job-role / company pair with the most placements; first-seen order
/// breaks ties. `None` for an empty view.
pub fn top_role_company_pair(view: &FilteredView<'_>) -> Option<RoleCompanyCount> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut pairs: Vec<RoleCompanyCount> = Vec::new();

    for record in view.records() {
        let key = (record.job_role.as_str(), record.company.as_str());
        match index.get(&key) {
            Some(&slot) => pairs[slot].count += 1,
            None => {
                index.insert(key, pairs.len());
                pairs.push(RoleCompanyCount {
                    job_role: record.job_role.clone(),
                    company: record.company.clone(),
                    count: 1,
                });
            }
        }
    }

    // Manual fold so the first-seen pair wins ties.
    pairs.into_iter().fold(None, |best, pair| match best {
        Some(b) if pair.count <= b.count => Some(b),
        _ => Some(pair),
    })
}

// ---------------------------------------------------------------------------
// Trends
// ---------------------------------------------------------------------------

/// Percentage change in placement count and mean salary between the two
/// most recent graduation years in the view. `None` when fewer than two
/// distinct years are present ("insufficient data").
pub fn year_over_year(view: &FilteredView<'_>) -> Option<YearOverYear> {
    let counts = count_by_year(view);
    if counts.len() < 2 {
        return None;
    }

    let (latest_year, latest_count) = counts[counts.len() - 1];
    let (prior_year, prior_count) = counts[counts.len() - 2];

    let means: BTreeMap<i32, f64> = mean_salary_by_year(view).into_iter().collect();
    let salary_change_pct = match (means.get(&prior_year), means.get(&latest_year)) {
        (Some(&prior), Some(&latest)) => pct_change(prior, latest),
        _ => None,
    };

    Some(YearOverYear {
        latest_year,
        prior_year,
        placement_change_pct: pct_change(prior_count as f64, latest_count as f64),
        salary_change_pct,
    })
}

/// Percentage change from `prior` to `latest`; `None` when the prior
/// figure is zero or not finite (undefined, never a division fault).
fn pct_change(prior: f64, latest: f64) -> Option<f64> {
    if prior == 0.0 || !prior.is_finite() || !latest.is_finite() {
        return None;
    }
    Some((latest - prior) / prior * 100.0)
}

/// Histogram of salary values over `bins` equal-width bins spanning the
/// observed range. Empty when no salary data is present or `bins` is zero.
pub fn salary_histogram(view: &FilteredView<'_>, bins: usize) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }
    let Some(stats) = salary_stats(view) else {
        return Vec::new();
    };

    let width = (stats.max - stats.min) / bins as f64;
    let mut counts = vec![0usize; bins];

    for record in view.records() {
        let Some(salary) = record.salary else { continue };
        let slot = if width > 0.0 {
            (((salary - stats.min) / width) as usize).min(bins - 1)
        } else {
            0
        };
        counts[slot] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: stats.min + width * i as f64,
            upper: stats.min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply_filters, FilterSelection, FilteredView};
    use crate::data::model::Dataset;

    fn record(
        branch: &str,
        year: i32,
        company: &str,
        role: &str,
        location: &str,
        salary: Option<f64>,
        date: Option<&str>,
    ) -> Record {
        Record {
            name: String::new(),
            branch: branch.to_string(),
            graduation_year: year,
            company: company.to_string(),
            job_role: role.to_string(),
            location: location.to_string(),
            salary,
            placement_date: date.map(|d| d.parse().unwrap()),
        }
    }

    fn full_view(dataset: &Dataset) -> FilteredView<'_> {
        apply_filters(dataset, &FilterSelection::select_all(dataset))
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("CS", 2023, "Acme", "Engineer", "Pune", Some(500_000.0), Some("2023-06-15")),
            record("CS", 2023, "Beta", "Analyst", "Mumbai", Some(700_000.0), Some("2023-07-01")),
            record("EE", 2022, "Acme", "Engineer", "Pune", Some(600_000.0), Some("2022-06-20")),
            record("CS", 2022, "Acme", "Engineer", "Delhi", None, None),
            record("ME", 2023, "Gamma", "Designer", "Pune", Some(400_000.0), Some("2023-06-02")),
        ])
    }

    #[test]
    fn branch_counts_sum_to_view_length() {
        let ds = sample_dataset();
        let view = full_view(&ds);
        let counts = count_by_category(&view, CategoryField::Branch);
        let total: usize = counts.iter().map(|g| g.count).sum();
        assert_eq!(total, view.len());
    }

    #[test]
    fn count_by_category_is_descending_with_first_seen_ties() {
        let ds = sample_dataset();
        let view = full_view(&ds);
        let counts = count_by_category(&view, CategoryField::Branch);

        assert_eq!(counts[0], GroupCount { key: "CS".into(), count: 3 });
        // EE and ME tie at 1; EE appears first in the dataset.
        assert_eq!(counts[1].key, "EE");
        assert_eq!(counts[2].key, "ME");
    }

    #[test]
    fn top_k_truncates_without_duplicates() {
        let ds = sample_dataset();
        let view = full_view(&ds);

        let top = top_k(&view, CategoryField::Location, 2);
        assert_eq!(top.len(), 2);
        assert!(top[0].count >= top[1].count);
        assert_ne!(top[0].key, top[1].key);

        let all = top_k(&view, CategoryField::Location, 10);
        assert_eq!(all.len(), 3); // min(K, distinct groups)
    }

    #[test]
    fn mean_lies_between_min_and_max() {
        let ds = sample_dataset();
        let view = full_view(&ds);
        let stats = salary_stats(&view).unwrap();

        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, 400_000.0);
        assert_eq!(stats.max, 700_000.0);
    }

    #[test]
    fn missing_salaries_excluded_from_means_but_not_counts() {
        let ds = sample_dataset();
        let view = full_view(&ds);

        let counts = count_by_category(&view, CategoryField::Company);
        assert_eq!(counts[0], GroupCount { key: "Acme".into(), count: 3 });

        let means = mean_salary_by(&view, CategoryField::Company, SortOrder::KeyAscending);
        let acme = means.iter().find(|g| g.key == "Acme").unwrap();
        assert_eq!(acme.count, 2); // the salary-less Acme row is excluded
        assert_eq!(acme.mean, 550_000.0);
    }

    #[test]
    fn year_and_month_series_are_ascending() {
        let ds = sample_dataset();
        let view = full_view(&ds);

        assert_eq!(count_by_year(&view), vec![(2022, 2), (2023, 3)]);

        let months = count_by_month(&view);
        // The dateless row is excluded from this series only.
        let total: usize = months.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 4);
        assert!(months.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn company_role_ranking_counts_all_rows_in_pair() {
        let ds = sample_dataset();
        let view = full_view(&ds);
        let ranked = top_company_role_salaries(&view);

        assert_eq!(ranked[0].company, "Beta");
        assert_eq!(ranked[0].max_salary, 700_000.0);

        let acme = ranked
            .iter()
            .find(|p| p.company == "Acme" && p.job_role == "Engineer")
            .unwrap();
        assert_eq!(acme.max_salary, 600_000.0);
        assert_eq!(acme.count, 3); // includes the missing-salary row
    }

    #[test]
    fn year_over_year_uses_two_most_recent_years() {
        let ds = sample_dataset();
        let view = full_view(&ds);
        let yoy = year_over_year(&view).unwrap();

        assert_eq!(yoy.prior_year, 2022);
        assert_eq!(yoy.latest_year, 2023);
        // 2 → 3 placements
        assert_eq!(yoy.placement_change_pct, Some(50.0));
        // mean 600k → mean 533_333.3…
        let salary_change = yoy.salary_change_pct.unwrap();
        assert!((salary_change - (-11.111)).abs() < 0.01);
    }

    #[test]
    fn year_over_year_requires_two_distinct_years() {
        let ds = Dataset::from_records(vec![record(
            "CS", 2023, "Acme", "Engineer", "Pune", Some(500_000.0), None,
        )]);
        let view = full_view(&ds);
        assert_eq!(year_over_year(&view), None);
    }

    #[test]
    fn pivots_cover_all_keys() {
        let ds = sample_dataset();
        let view = full_view(&ds);

        let pivot = mean_salary_pivot(&view);
        assert_eq!(pivot.rows, vec!["CS", "EE", "ME"]);
        assert_eq!(pivot.cols, vec!["Acme", "Beta", "Gamma"]);
        // The salary-less CS × Acme row does not drag the mean down.
        assert_eq!(pivot.cells[0][0], Some(500_000.0));
        assert_eq!(pivot.cells[1][0], Some(600_000.0));
        // CS never placed at Gamma: the cell is undefined, not zero.
        assert_eq!(pivot.cells[0][2], None);

        let density = count_pivot(&view, CategoryField::JobRole, CategoryField::Company);
        let total: usize = density.cells.iter().flatten().sum();
        assert_eq!(total, view.len());
    }

    #[test]
    fn top_role_company_pair_breaks_ties_by_first_seen() {
        let ds = sample_dataset();
        let view = full_view(&ds);
        let pair = top_role_company_pair(&view).unwrap();
        assert_eq!(pair.job_role, "Engineer");
        assert_eq!(pair.company, "Acme");
        assert_eq!(pair.count, 3);
    }

    #[test]
    fn histogram_spans_range_and_counts_all_salaries() {
        let ds = sample_dataset();
        let view = full_view(&ds);
        let bins = salary_histogram(&view, 3);

        assert_eq!(bins.len(), 3);
        assert_eq!(bins[0].lower, 400_000.0);
        assert_eq!(bins[2].upper, 700_000.0);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn empty_view_degrades_everywhere() {
        let ds = sample_dataset();
        let selection = FilterSelection::default(); // empty sets
        let view = apply_filters(&ds, &selection);
        assert!(view.is_empty());

        assert!(count_by_category(&view, CategoryField::Branch).is_empty());
        assert!(count_by_year(&view).is_empty());
        assert!(count_by_month(&view).is_empty());
        assert!(top_k(&view, CategoryField::Company, 5).is_empty());
        assert_eq!(most_common(&view, CategoryField::Branch), None);
        assert!(mean_salary_by(&view, CategoryField::Branch, SortOrder::KeyAscending).is_empty());
        assert!(mean_salary_by_year(&view).is_empty());
        assert!(mean_salary_by_placement_year(&view).is_empty());
        assert_eq!(salary_stats(&view), None);
        assert_eq!(best_salary_year(&view), None);
        assert!(mean_salary_pivot(&view).rows.is_empty());
        assert!(top_company_role_salaries(&view).is_empty());
        assert_eq!(top_role_company_pair(&view), None);
        assert_eq!(year_over_year(&view), None);
        assert!(salary_histogram(&view, 20).is_empty());
    }

    #[test]
    fn three_record_scenario_end_to_end() {
        let ds = Dataset::from_records(vec![
            record("CS", 2023, "Acme", "", "", Some(500_000.0), None),
            record("CS", 2023, "Beta", "", "", Some(700_000.0), None),
            record("EE", 2022, "Acme", "", "", Some(600_000.0), None),
        ]);

        let selection = FilterSelection {
            branches: ["CS".to_string()].into_iter().collect(),
            years: [2023].into_iter().collect(),
            company: None,
        };
        let view = apply_filters(&ds, &selection);
        assert_eq!(view.indices(), &[0, 1]);

        let counts = count_by_category(&view, CategoryField::Branch);
        assert_eq!(counts, vec![GroupCount { key: "CS".into(), count: 2 }]);

        assert_eq!(salary_stats(&view).unwrap().mean, 600_000.0);

        // Acme and Beta tie at one placement each; first-seen order wins,
        // and the count is what the contract fixes.
        let top = top_k(&view, CategoryField::Company, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].count, 1);
        assert_eq!(top[0].key, "Acme");
    }
}
