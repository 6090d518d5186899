use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::analysis::aggregate::{
    self, CategoryField, GroupCount, GroupMean, SortOrder,
};
use crate::analysis::insights;
use crate::color::{heat_color, CategoryColors};
use crate::data::filter::FilteredView;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Central panel – tabbed dashboard
// ---------------------------------------------------------------------------

/// Render the central dashboard: tab bar plus the active tab's charts.
/// Everything below is recomputed from the current view on every frame.
pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for tab in Tab::ALL {
            if ui.selectable_label(state.tab == tab, tab.label()).clicked() {
                state.tab = tab;
            }
        }
    });
    ui.separator();

    let tab = state.tab;
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a placement CSV to begin  (File → Open…)");
        });
        return;
    };
    let view = state.view(dataset);

    if view.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No records match the current filters.");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match tab {
            Tab::Overview => overview_tab(ui, &view),
            Tab::Academics => academics_tab(ui, &view),
            Tab::Companies => companies_tab(ui, &view),
            Tab::Salaries => salaries_tab(ui, &view),
            Tab::Locations => locations_tab(ui, &view),
            Tab::MultiFactor => multi_factor_tab(ui, &view),
            Tab::Timeline => timeline_tab(ui, &view),
            Tab::Roles => roles_tab(ui, &view),
        });
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

fn overview_tab(ui: &mut Ui, view: &FilteredView<'_>) {
    ui.heading("Placement Overview");

    if let Some(stats) = aggregate::salary_stats(view) {
        ui.horizontal(|ui: &mut Ui| {
            metric(ui, "Total Placements", &view.len().to_string());
            metric(ui, "Average Salary", &insights::format_inr(stats.mean));
            if let Some(top) = aggregate::most_common(view, CategoryField::Company) {
                metric(ui, "Top Recruiter", &top.key);
            }
            if let Some(top) = aggregate::most_common(view, CategoryField::Branch) {
                metric(ui, "Top Branch", &top.key);
            }
        });
    }

    ui.group(|ui: &mut Ui| {
        ui.label(RichText::new(insights::overview_summary(view)).strong());
    });

    ui.add_space(8.0);
    ui.strong("Total placements by graduation year");
    year_count_line(ui, "overview_year", view);

    ui.strong("Top 5 recruiting companies");
    count_bars(ui, "overview_companies", &aggregate::top_k(view, CategoryField::Company, 5));

    ui.strong("Average salary by placement year");
    year_mean_line(ui, "overview_salary", &aggregate::mean_salary_by_placement_year(view));

    ui.strong("Placements by branch");
    count_bars(
        ui,
        "overview_branch",
        &aggregate::count_by_category(view, CategoryField::Branch),
    );

    ui.strong("Top placement locations");
    count_bars(ui, "overview_locations", &aggregate::top_k(view, CategoryField::Location, 8));
}

fn academics_tab(ui: &mut Ui, view: &FilteredView<'_>) {
    ui.strong("Placements per branch");
    count_bars(
        ui,
        "academic_branch",
        &aggregate::count_by_category(view, CategoryField::Branch),
    );

    ui.strong("Placements per graduation year");
    year_count_line(ui, "academic_year", view);
}

fn companies_tab(ui: &mut Ui, view: &FilteredView<'_>) {
    ui.strong("Top 10 recruiting companies");
    count_bars(ui, "company_top10", &aggregate::top_k(view, CategoryField::Company, 10));

    ui.strong("Job role distribution (top 10)");
    count_bars(ui, "company_roles", &aggregate::top_k(view, CategoryField::JobRole, 10));
}

fn salaries_tab(ui: &mut Ui, view: &FilteredView<'_>) {
    ui.strong("Highest salary by company and job role");
    let ranked = aggregate::top_company_role_salaries(view);
    if ranked.is_empty() {
        ui.label("No salary data in the current selection.");
    } else {
        egui::Grid::new("company_role_salary")
            .striped(true)
            .show(ui, |ui: &mut Ui| {
                ui.strong("Company");
                ui.strong("Job Role");
                ui.strong("Highest Salary");
                ui.strong("Placements");
                ui.end_row();
                for pair in ranked.iter().take(15) {
                    ui.label(&pair.company);
                    ui.label(&pair.job_role);
                    ui.label(insights::format_inr(pair.max_salary));
                    ui.label(pair.count.to_string());
                    ui.end_row();
                }
            });
    }

    ui.add_space(8.0);
    ui.strong("Salary distribution");
    salary_histogram_chart(ui, "salary_hist", view);

    ui.strong("Average salary by branch");
    mean_bars(
        ui,
        "salary_avg_branch",
        &aggregate::mean_salary_by(view, CategoryField::Branch, SortOrder::KeyAscending),
    );
}

fn locations_tab(ui: &mut Ui, view: &FilteredView<'_>) {
    ui.strong("Placements by location (top 10)");
    count_bars(ui, "location_top", &aggregate::top_k(view, CategoryField::Location, 10));
}

fn multi_factor_tab(ui: &mut Ui, view: &FilteredView<'_>) {
    ui.strong("Average salary heatmap (branch vs company)");
    let pivot = aggregate::mean_salary_pivot(view);
    mean_heatmap(ui, "salary_heatmap", &pivot);

    ui.add_space(8.0);
    ui.strong("Salary vs graduation year (coloured by branch)");
    salary_scatter(ui, "salary_scatter", view);
}

fn timeline_tab(ui: &mut Ui, view: &FilteredView<'_>) {
    ui.strong("Monthly placement trend");
    let months = aggregate::count_by_month(view);
    if months.is_empty() {
        ui.label("No parseable placement dates in the current selection.");
        return;
    }

    let first = months.first().map(|(m, _)| m.to_string()).unwrap_or_default();
    let last = months.last().map(|(m, _)| m.to_string()).unwrap_or_default();
    ui.label(format!("From {first} to {last} (records without a date are excluded)."));

    let points: PlotPoints = months
        .iter()
        .map(|(month, count)| {
            let x = month.year as f64 + (month.month as f64 - 1.0) / 12.0;
            [x, *count as f64]
        })
        .collect();

    Plot::new("timeline")
        .height(320.0)
        .x_axis_label("Month")
        .y_axis_label("Placements")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Placements").width(2.0));
        });
}

fn roles_tab(ui: &mut Ui, view: &FilteredView<'_>) {
    ui.heading("Job Roles Analysis");

    ui.strong("Top 10 job roles by number of placements");
    count_bars(ui, "roles_top", &aggregate::top_k(view, CategoryField::JobRole, 10));

    ui.strong("Top 10 highest paying job roles (average salary)");
    let mut means = aggregate::mean_salary_by(view, CategoryField::JobRole, SortOrder::MeanDescending);
    means.truncate(10);
    mean_bars(ui, "roles_salary", &means);

    ui.strong("Placement density (job role vs company)");
    let density = aggregate::count_pivot(view, CategoryField::JobRole, CategoryField::Company);
    count_heatmap(ui, "roles_heatmap", &density);

    ui.add_space(8.0);
    ui.group(|ui: &mut Ui| {
        ui.label(RichText::new(insights::role_company_summary(view)).strong());
    });
}

// ---------------------------------------------------------------------------
// Chart helpers
// ---------------------------------------------------------------------------

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(label).small());
            ui.label(RichText::new(value).heading());
        });
    });
}

/// Horizontal bar chart of group counts; one named chart per group so the
/// legend carries the category labels.
fn count_bars(ui: &mut Ui, id: &str, groups: &[GroupCount]) {
    let colors = CategoryColors::new(groups.iter().map(|g| g.key.clone()));

    Plot::new(id.to_string())
        .legend(Legend::default())
        .height(260.0)
        .show(ui, |plot_ui| {
            for (i, group) in groups.iter().enumerate() {
                let bar =
                    Bar::new(groups.len() as f64 - 1.0 - i as f64, group.count as f64).width(0.7);
                let chart = BarChart::new(vec![bar])
                    .horizontal()
                    .name(&group.key)
                    .color(colors.color_for(&group.key));
                plot_ui.bar_chart(chart);
            }
        });
}

/// Horizontal bar chart of group means (salary figures).
fn mean_bars(ui: &mut Ui, id: &str, groups: &[GroupMean]) {
    let colors = CategoryColors::new(groups.iter().map(|g| g.key.clone()));

    Plot::new(id.to_string())
        .legend(Legend::default())
        .height(260.0)
        .show(ui, |plot_ui| {
            for (i, group) in groups.iter().enumerate() {
                let bar = Bar::new(groups.len() as f64 - 1.0 - i as f64, group.mean).width(0.7);
                let chart = BarChart::new(vec![bar])
                    .horizontal()
                    .name(&group.key)
                    .color(colors.color_for(&group.key));
                plot_ui.bar_chart(chart);
            }
        });
}

fn year_count_line(ui: &mut Ui, id: &str, view: &FilteredView<'_>) {
    let counts = aggregate::count_by_year(view);
    let points: PlotPoints = counts
        .iter()
        .map(|&(year, count)| [year as f64, count as f64])
        .collect();

    Plot::new(id.to_string())
        .height(260.0)
        .x_axis_label("Graduation Year")
        .y_axis_label("Placements")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Placements").width(2.0));
        });
}

fn year_mean_line(ui: &mut Ui, id: &str, series: &[(i32, f64)]) {
    if series.is_empty() {
        ui.label("No salary data in the current selection.");
        return;
    }
    let points: PlotPoints = series
        .iter()
        .map(|&(year, mean)| [year as f64, mean])
        .collect();

    Plot::new(id.to_string())
        .height(260.0)
        .x_axis_label("Year")
        .y_axis_label("Average Salary (INR)")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Average salary").width(2.0));
        });
}

fn salary_histogram_chart(ui: &mut Ui, id: &str, view: &FilteredView<'_>) {
    let bins = aggregate::salary_histogram(view, 20);
    if bins.is_empty() {
        ui.label("No salary data in the current selection.");
        return;
    }

    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| {
            let center = (bin.lower + bin.upper) / 2.0;
            Bar::new(center, bin.count as f64).width((bin.upper - bin.lower) * 0.95)
        })
        .collect();

    Plot::new(id.to_string())
        .height(260.0)
        .x_axis_label("Salary (INR)")
        .y_axis_label("Placements")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Salaries"));
        });
}

fn salary_scatter(ui: &mut Ui, id: &str, view: &FilteredView<'_>) {
    let branches = aggregate::count_by_category(view, CategoryField::Branch);
    let colors = CategoryColors::new(branches.iter().map(|g| g.key.clone()));

    Plot::new(id.to_string())
        .legend(Legend::default())
        .height(320.0)
        .x_axis_label("Graduation Year")
        .y_axis_label("Salary (INR)")
        .show(ui, |plot_ui| {
            for branch in &branches {
                let points: PlotPoints = view
                    .records()
                    .filter(|r| r.branch == branch.key)
                    .filter_map(|r| r.salary.map(|s| [r.graduation_year as f64, s]))
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .radius(3.0)
                        .name(&branch.key)
                        .color(colors.color_for(&branch.key)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Heatmap grids
// ---------------------------------------------------------------------------

fn mean_heatmap(ui: &mut Ui, id: &str, pivot: &aggregate::MeanPivot) {
    let defined: Vec<f64> = pivot.cells.iter().flatten().filter_map(|c| *c).collect();
    if defined.is_empty() {
        ui.label("No salary data in the current selection.");
        return;
    }
    let min = defined.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = defined.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    heat_grid(ui, id, &pivot.rows, &pivot.cols, |row, col| {
        pivot.cells[row][col].map(|mean| {
            let t = if max > min { (mean - min) / (max - min) } else { 1.0 };
            (insights::format_inr(mean), t as f32)
        })
    });
}

fn count_heatmap(ui: &mut Ui, id: &str, pivot: &aggregate::CountPivot) {
    let max = pivot.cells.iter().flatten().copied().max().unwrap_or(0);
    if max == 0 {
        ui.label("No records in the current selection.");
        return;
    }

    heat_grid(ui, id, &pivot.rows, &pivot.cols, |row, col| {
        let count = pivot.cells[row][col];
        if count == 0 {
            None
        } else {
            Some((count.to_string(), count as f32 / max as f32))
        }
    });
}

/// Shared heatmap rendering: a grid of labels with heat-scaled backgrounds.
/// `cell` returns the display text and a normalised intensity, or `None`
/// for an empty cell.
fn heat_grid<F>(ui: &mut Ui, id: &str, rows: &[String], cols: &[String], cell: F)
where
    F: Fn(usize, usize) -> Option<(String, f32)>,
{
    ScrollArea::horizontal()
        .id_salt(id.to_string())
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new(id.to_string())
                .spacing([6.0, 4.0])
                .show(ui, |ui: &mut Ui| {
                    ui.label("");
                    for col in cols {
                        ui.label(RichText::new(col).small().strong());
                    }
                    ui.end_row();

                    for (r, row) in rows.iter().enumerate() {
                        ui.label(RichText::new(row).strong());
                        for c in 0..cols.len() {
                            match cell(r, c) {
                                Some((text, t)) => {
                                    ui.label(
                                        RichText::new(text)
                                            .background_color(heat_color(t))
                                            .color(egui::Color32::BLACK),
                                    );
                                }
                                None => {
                                    ui.label(RichText::new("–").weak());
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}
