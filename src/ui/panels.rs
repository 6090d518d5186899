use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let domains = match &state.dataset {
        Some(dataset) => dataset.domains().clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Branch filter ----
            let header = format!(
                "Branch  ({}/{})",
                state.selection.branches.len(),
                domains.branches.len()
            );
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("branch_filter")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_branches();
                        }
                        if ui.small_button("None").clicked() {
                            state.clear_branches();
                        }
                    });
                    for branch in &domains.branches {
                        let mut checked = state.selection.branches.contains(branch);
                        if ui.checkbox(&mut checked, branch).changed() {
                            state.toggle_branch(branch);
                        }
                    }
                });

            // ---- Graduation year filter ----
            let header = format!(
                "Graduation Year  ({}/{})",
                state.selection.years.len(),
                domains.years.len()
            );
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("year_filter")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_years();
                        }
                        if ui.small_button("None").clicked() {
                            state.clear_years();
                        }
                    });
                    for &year in &domains.years {
                        let mut checked = state.selection.years.contains(&year);
                        if ui.checkbox(&mut checked, year.to_string()).changed() {
                            state.toggle_year(year);
                        }
                    }
                });

            ui.separator();

            // ---- Company selector ----
            ui.strong("Company");
            let current = state
                .selection
                .company
                .clone()
                .unwrap_or_else(|| "All".to_string());
            egui::ComboBox::from_id_salt("company_filter")
                .selected_text(&current)
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(state.selection.company.is_none(), "All")
                        .clicked()
                    {
                        state.set_company(None);
                    }
                    for company in &domains.companies {
                        let selected = state.selection.company.as_deref() == Some(company);
                        if ui.selectable_label(selected, company).clicked() {
                            state.set_company(Some(company.clone()));
                        }
                    }
                });

            ui.separator();
            ui.label(format!(
                "Showing {} records after filters.",
                state.visible.len()
            ));
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(dataset) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                dataset.len(),
                state.visible.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open placement data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} placement records ({} branches, {} companies)",
                    dataset.len(),
                    dataset.domains().branches.len(),
                    dataset.domains().companies.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
