use std::collections::BTreeSet;
use std::path::PathBuf;

use egui_file_dialog::{DialogMode, FileDialog};

use cf_app::Viewport;
use cf_data::{Dataset, GroupCatalog, load_dataset};
use cf_filter::{FilterEvent, FilterState, GroupChoice, NamedFilter, Selection};
use cf_query::{export_rows, to_csv};
use cf_scene::{Interaction, Scene};

use crate::sankey_view;

pub struct CommuteFlowApp {
    dataset: Option<Dataset>,
    dataset_path: Option<PathBuf>,
    catalog: GroupCatalog,
    origins: Vec<String>,
    destinations: Vec<String>,
    year_range: Option<(i32, i32)>,
    filter: FilterState,
    interaction: Interaction,
    scene: Option<Scene>,
    scene_filter: Option<FilterState>,
    scene_size: egui::Vec2,
    file_dialog: FileDialog,
    file_dialog_action: Option<FileDialogAction>,
    last_directory: Option<PathBuf>,
    status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FileDialogAction {
    OpenDataset,
    ExportCsv,
}

impl CommuteFlowApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            dataset: None,
            dataset_path: None,
            catalog: GroupCatalog::default(),
            origins: Vec::new(),
            destinations: Vec::new(),
            year_range: None,
            filter: FilterState::default(),
            interaction: Interaction::new(),
            scene: None,
            scene_filter: None,
            scene_size: egui::Vec2::ZERO,
            file_dialog: FileDialog::new(),
            file_dialog_action: None,
            last_directory: None,
            status: None,
        }
    }

    fn open_dataset(&mut self, path: PathBuf) {
        match load_dataset(&path) {
            Ok(dataset) => {
                if let Some(parent) = path.parent() {
                    self.last_directory = Some(parent.to_path_buf());
                }
                self.catalog = GroupCatalog::from_records(&dataset.links);
                self.origins = distinct(dataset.links.iter().map(|r| r.origin.as_str()));
                self.destinations = distinct(dataset.links.iter().map(|r| r.destination.as_str()));
                self.year_range = year_range(&dataset);
                self.status = Some(format!(
                    "Loaded {} records from {}",
                    dataset.links.len(),
                    path.display()
                ));
                self.dataset = Some(dataset);
                self.dataset_path = Some(path);
                self.filter = FilterState::default();
                if let Some((min, max)) = self.year_range {
                    self.filter = self
                        .filter
                        .apply(FilterEvent::Year(self.filter.year.clamp(min, max)));
                }
                self.interaction.reset();
                self.scene = None;
                self.scene_filter = None;
            }
            Err(e) => {
                self.status = Some(format!("Failed to load dataset: {}", e));
            }
        }
    }

    fn export_csv(&mut self, path: PathBuf) {
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };
        let rows = export_rows(&dataset.links, &self.filter);
        match std::fs::write(&path, to_csv(&rows)) {
            Ok(()) => {
                self.status = Some(format!("Exported {} rows to {}", rows.len(), path.display()));
            }
            Err(e) => {
                self.status = Some(format!("Failed to export CSV: {}", e));
            }
        }
    }

    /// Apply a committed filter change: new state, cleared interaction.
    fn apply_filter(&mut self, event: FilterEvent) {
        self.filter = self.filter.apply(event);
        self.interaction.reset();
    }

    fn rebuild_scene_if_needed(&mut self, size: egui::Vec2) {
        let stale = self.scene.is_none()
            || self.scene_filter.as_ref() != Some(&self.filter)
            || self.scene_size != size;
        if !stale {
            return;
        }
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };
        let viewport = Viewport {
            width: size.x,
            height: size.y,
        };
        match cf_app::build_scene(&dataset.links, &self.filter, viewport, &self.interaction) {
            Ok(scene) => {
                self.scene = Some(scene);
                self.scene_filter = Some(self.filter.clone());
                self.scene_size = size;
            }
            Err(e) => {
                self.scene = None;
                self.status = Some(format!("Cannot draw diagram: {}", e));
            }
        }
    }

    fn filter_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Filters");
        ui.separator();

        if let Some((min, max)) = self.year_range {
            let mut year = self.filter.year;
            if min < max {
                if ui
                    .add(egui::Slider::new(&mut year, min..=max).text("Year"))
                    .changed()
                {
                    self.apply_filter(FilterEvent::Year(year));
                }
            } else {
                ui.label(format!("Year: {}", min));
            }
        }

        ui.separator();
        ui.label("Commute characteristics");
        for option in NamedFilter::OPTIONS {
            if ui
                .selectable_label(self.filter.named == option, option.label())
                .clicked()
            {
                self.apply_filter(FilterEvent::Named(option));
            }
        }

        ui.separator();
        let origins = self.origins.clone();
        if let Some(selection) = selection_section(ui, "Origins", &origins, &self.filter.origins) {
            self.apply_filter(FilterEvent::Origins(selection));
        }
        let destinations = self.destinations.clone();
        if let Some(selection) = selection_section(
            ui,
            "Destinations",
            &destinations,
            &self.filter.destinations,
        ) {
            self.apply_filter(FilterEvent::Destinations(selection));
        }

        ui.separator();
        ui.label("Demographics (one family at a time)");
        let ages = self.catalog.ages.clone();
        ui.add_enabled_ui(self.filter.age_enabled(), |ui| {
            if let Some(choice) =
                group_combo(ui, "Age group", &ages, &self.filter.age_group)
            {
                self.apply_filter(FilterEvent::AgeGroup(choice));
            }
        });
        let incomes = self.catalog.incomes.clone();
        ui.add_enabled_ui(self.filter.income_enabled(), |ui| {
            if let Some(choice) =
                group_combo(ui, "Income group", &incomes, &self.filter.income_group)
            {
                self.apply_filter(FilterEvent::IncomeGroup(choice));
            }
        });
    }
}

impl eframe::App for CommuteFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open Dataset").clicked() {
                    self.file_dialog_action = Some(FileDialogAction::OpenDataset);
                    let initial_dir = self.last_directory.as_ref().and_then(|p| p.to_str());
                    let _ = self
                        .file_dialog
                        .open(DialogMode::SelectFile, true, initial_dir);
                }

                ui.add_enabled_ui(self.dataset.is_some(), |ui| {
                    if ui.button("Export CSV").clicked() {
                        self.file_dialog_action = Some(FileDialogAction::ExportCsv);
                        self.file_dialog.save_file();
                    }
                });

                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            match self.file_dialog_action.take() {
                Some(FileDialogAction::OpenDataset) => self.open_dataset(path.to_path_buf()),
                Some(FileDialogAction::ExportCsv) => self.export_csv(path.to_path_buf()),
                None => {}
            }
        }

        egui::SidePanel::left("filters")
            .default_width(240.0)
            .show(ctx, |ui| {
                if self.dataset.is_some() {
                    self.filter_panel(ui);
                } else {
                    ui.label("No dataset loaded");
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.dataset.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label("Open a commute dataset to draw the flow diagram.");
                });
                return;
            }

            self.rebuild_scene_if_needed(ui.available_size());

            let Some(scene) = self.scene.as_mut() else {
                return;
            };

            let hit = sankey_view::show(ui, scene);

            let before = self.interaction.emphasis();
            match hit.hovered_node {
                Some(raw) => self.interaction.hover_in(raw),
                None => self.interaction.hover_out(),
            }
            if let Some(raw) = hit.clicked_node {
                self.interaction.click(raw);
            }
            if self.interaction.emphasis() != before {
                scene.restyle(&self.interaction);
            }
        });
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter().map(str::to_string).collect()
}

fn year_range(dataset: &Dataset) -> Option<(i32, i32)> {
    let years: BTreeSet<i32> = dataset.links.iter().filter_map(|r| r.year).collect();
    match (years.first(), years.last()) {
        (Some(min), Some(max)) => Some((*min, *max)),
        _ => None,
    }
}

/// Multi-select area section. Returns the new selection when toggled.
fn selection_section(
    ui: &mut egui::Ui,
    title: &str,
    values: &[String],
    current: &Selection,
) -> Option<Selection> {
    let mut next = None;
    egui::CollapsingHeader::new(title)
        .default_open(false)
        .show(ui, |ui| {
            if ui.selectable_label(current.is_all(), "All").clicked() {
                next = Some(Selection::All);
            }
            for value in values {
                let checked = !current.is_all() && current.matches(value);
                let mut state = checked;
                if ui.checkbox(&mut state, value).changed() {
                    let mut set: BTreeSet<String> = match current {
                        Selection::All => BTreeSet::new(),
                        Selection::Only(set) => set.clone(),
                    };
                    if state {
                        set.insert(value.clone());
                    } else {
                        set.remove(value);
                    }
                    next = Some(Selection::from_values(set));
                }
            }
        });
    next
}

/// Single-select group combo with an "All" sentinel.
fn group_combo(
    ui: &mut egui::Ui,
    label: &str,
    values: &[String],
    current: &GroupChoice,
) -> Option<GroupChoice> {
    let mut next = None;
    let selected_text = match current {
        GroupChoice::All => "All".to_string(),
        GroupChoice::Group(g) => cf_core::group_display(g),
    };
    egui::ComboBox::from_label(label)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_all(), "All").clicked() {
                next = Some(GroupChoice::All);
            }
            for value in values {
                let selected = current.matches(value);
                if ui
                    .selectable_label(selected, cf_core::group_display(value))
                    .clicked()
                {
                    next = Some(GroupChoice::Group(value.clone()));
                }
            }
        });
    next
}
