use crate::data::filter::FilteredView;

use super::aggregate::{
    self, CategoryField, GroupCount, SalaryStats, SortOrder, YearOverYear,
};

/// Shown whenever the current filters leave no records to summarise.
pub const NO_DATA_MESSAGE: &str =
    "No data available to generate insights with the current filters.";

// ---------------------------------------------------------------------------
// Overview summary
// ---------------------------------------------------------------------------

/// The aggregation results the overview summary is rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewFigures {
    pub total: usize,
    pub top_branch: GroupCount,
    pub top_company: GroupCount,
    pub salary: Option<SalaryStats>,
    pub best_salary_year: Option<(i32, f64)>,
    pub latest_year: i32,
    pub year_over_year: Option<YearOverYear>,
}

/// Gather the figures the overview summary needs. `None` for an empty view.
pub fn overview_figures(view: &FilteredView<'_>) -> Option<OverviewFigures> {
    let top_branch = aggregate::most_common(view, CategoryField::Branch)?;
    let top_company = aggregate::most_common(view, CategoryField::Company)?;
    let latest_year = aggregate::count_by_year(view).last().map(|&(y, _)| y)?;

    Some(OverviewFigures {
        total: view.len(),
        top_branch,
        top_company,
        salary: aggregate::salary_stats(view),
        best_salary_year: aggregate::best_salary_year(view),
        latest_year,
        year_over_year: aggregate::year_over_year(view),
    })
}

/// Deterministic overview text; the empty view yields [`NO_DATA_MESSAGE`].
pub fn overview_summary(view: &FilteredView<'_>) -> String {
    match overview_figures(view) {
        Some(figures) => render_overview(&figures),
        None => NO_DATA_MESSAGE.to_string(),
    }
}

fn render_overview(figures: &OverviewFigures) -> String {
    let mut out = String::new();

    out.push_str(&format!("Summary of {} placements:\n", figures.total));
    out.push_str(&format!(
        "- {} recorded the highest placements with {} students.\n",
        figures.top_branch.key, figures.top_branch.count
    ));
    out.push_str(&format!(
        "- {} was the top recruiter, hiring {} candidates.\n",
        figures.top_company.key, figures.top_company.count
    ));

    match &figures.salary {
        Some(salary) => {
            out.push_str(&format!(
                "- The average salary offered was {}, ranging from {} to {}.\n",
                format_inr(salary.mean),
                format_inr(salary.min),
                format_inr(salary.max)
            ));
            if let Some((year, _)) = figures.best_salary_year {
                out.push_str(&format!(
                    "- Graduates from {year} achieved the highest average salary.\n"
                ));
            }
        }
        None => {
            out.push_str("- No salary figures are available for the current selection.\n");
        }
    }

    out.push_str(&format!(
        "- Most recent graduating batch analysed: {}.\n",
        figures.latest_year
    ));

    match &figures.year_over_year {
        Some(yoy) => {
            let placements = yoy
                .placement_change_pct
                .map(|p| format!("{p:.1}%"))
                .unwrap_or_else(|| "an undefined amount".to_string());
            let salary = yoy
                .salary_change_pct
                .map(|p| format!("{p:.1}%"))
                .unwrap_or_else(|| "an undefined amount".to_string());
            out.push_str(&format!(
                "- Placements changed by {placements} and average salary by {salary} year-over-year.\n"
            ));
        }
        None => {
            out.push_str("- Not enough data for a year-over-year comparison.\n");
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Role / company summary
// ---------------------------------------------------------------------------

/// Deterministic highlights for the job-roles tab; the empty view yields
/// [`NO_DATA_MESSAGE`].
pub fn role_company_summary(view: &FilteredView<'_>) -> String {
    let Some(top_pair) = aggregate::top_role_company_pair(view) else {
        return NO_DATA_MESSAGE.to_string();
    };

    let mut out = String::new();
    out.push_str(&format!(
        "- {} hires the most for the {} role with {} placements.\n",
        top_pair.company, top_pair.job_role, top_pair.count
    ));

    if let Some(top_role) = aggregate::most_common(view, CategoryField::JobRole) {
        out.push_str(&format!(
            "- The most popular job role is {}, with {} placements across recruiters.\n",
            top_role.key, top_role.count
        ));

        let role_mean = aggregate::mean_salary_by(view, CategoryField::JobRole, SortOrder::KeyAscending)
            .into_iter()
            .find(|g| g.key == top_role.key);
        match role_mean {
            Some(group) => out.push_str(&format!(
                "- The average salary for this role is {}.\n",
                format_inr(group.mean)
            )),
            None => out.push_str("- No salary figures are recorded for this role.\n"),
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format an INR amount with thousands separators, rounded to whole rupees.
pub fn format_inr(value: f64) -> String {
    let rounded = value.round().abs() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0.0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply_filters, FilterSelection};
    use crate::data::model::{Dataset, Record};

    fn record(branch: &str, year: i32, company: &str, role: &str, salary: Option<f64>) -> Record {
        Record {
            name: String::new(),
            branch: branch.to_string(),
            graduation_year: year,
            company: company.to_string(),
            job_role: role.to_string(),
            location: String::new(),
            salary,
            placement_date: None,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("CS", 2022, "Acme", "Engineer", Some(500_000.0)),
            record("CS", 2023, "Acme", "Engineer", Some(650_000.0)),
            record("EE", 2023, "Beta", "Analyst", Some(700_000.0)),
        ])
    }

    #[test]
    fn empty_view_yields_fixed_message() {
        let ds = sample_dataset();
        let view = apply_filters(&ds, &FilterSelection::default());

        assert_eq!(overview_summary(&view), NO_DATA_MESSAGE);
        assert_eq!(role_company_summary(&view), NO_DATA_MESSAGE);
    }

    #[test]
    fn overview_summary_is_deterministic_and_complete() {
        let ds = sample_dataset();
        let selection = FilterSelection::select_all(&ds);
        let view = apply_filters(&ds, &selection);

        let text = overview_summary(&view);
        assert_eq!(text, overview_summary(&view));

        assert!(text.contains("CS recorded the highest placements with 2 students."));
        assert!(text.contains("Acme was the top recruiter, hiring 2 candidates."));
        assert!(text.contains("₹616,667"));
        assert!(text.contains("ranging from ₹500,000 to ₹700,000"));
        assert!(text.contains("Graduates from 2023 achieved the highest average salary."));
        assert!(text.contains("Most recent graduating batch analysed: 2023."));
        assert!(text.contains("Placements changed by 100.0%"));
    }

    #[test]
    fn salary_free_view_avoids_undefined_interpolation() {
        let ds = Dataset::from_records(vec![
            record("CS", 2023, "Acme", "Engineer", None),
            record("CS", 2023, "Beta", "Engineer", None),
        ]);
        let view = apply_filters(&ds, &FilterSelection::select_all(&ds));

        let text = overview_summary(&view);
        assert!(text.contains("No salary figures are available"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn role_summary_names_top_pair_and_role() {
        let ds = sample_dataset();
        let view = apply_filters(&ds, &FilterSelection::select_all(&ds));

        let text = role_company_summary(&view);
        assert!(text.contains("Acme hires the most for the Engineer role with 2 placements."));
        assert!(text.contains("The most popular job role is Engineer"));
        assert!(text.contains("₹575,000"));
    }

    #[test]
    fn inr_formatting_groups_thousands() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(950.4), "₹950");
        assert_eq!(format_inr(500_000.0), "₹500,000");
        assert_eq!(format_inr(12_345_678.9), "₹12,345,679");
    }
}
