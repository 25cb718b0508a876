use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::modal::{
    Modal,
    ModalConfig,
    ModalResult,
};
use crate::core::LessonSummary;

const TABLE_HEIGHT: f32 = 300.0;
const ID_COLUMN_WIDTH: f32 = 50.0;
const HEADER_HEIGHT: f32 = 20.0;
const ROW_HEIGHT: f32 = 24.0;

#[derive(Default, Clone)]
struct LessonsData {
    lessons: Vec<LessonSummary>,
    loading: bool,
    error: Option<String>,
    refresh_requested: bool,
    selected: Option<LessonSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LessonsAction {
    Refresh,
    Open(LessonSummary),
}

/// History of lessons the service has already analysed.
pub struct LessonsModal {
    modal: Modal<LessonsData>,
}

impl LessonsModal {
    pub fn new() -> Self {
        let config = ModalConfig {
            fixed_size: Some(egui::Vec2::new(460.0, 380.0)),
            ..Default::default()
        };

        Self { modal: Modal::new_with_data("Leçons importées", LessonsData::default()).with_config(config) }
    }

    /// Opens the dialog; the caller should start a refresh.
    pub fn open(&mut self) {
        let data = self.modal.data_mut();
        data.loading = true;
        data.error = None;
        data.selected = None;
        self.modal.open();
    }

    pub fn set_lessons(&mut self, result: Result<Vec<LessonSummary>, String>) {
        let data = self.modal.data_mut();
        data.loading = false;
        match result {
            Ok(mut lessons) => {
                lessons.sort_by(|a, b| b.id.cmp(&a.id));
                data.lessons = lessons;
                data.error = None;
            }
            Err(message) => data.error = Some(message),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<LessonsAction> {
        let result = self.modal.show(ctx, |ui, data| {
            ui.horizontal(|ui| {
                if ui.add_enabled(!data.loading, egui::Button::new("Actualiser")).clicked() {
                    data.loading = true;
                    data.refresh_requested = true;
                }
                if data.loading {
                    ui.add(egui::Spinner::new());
                }
            });

            if let Some(error) = &data.error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.add_space(6.0);

            if data.lessons.is_empty() && !data.loading {
                ui.label("Aucune leçon pour l'instant.");
            } else {
                let mut clicked = None;
                egui::ScrollArea::vertical().max_height(TABLE_HEIGHT).show(ui, |ui| {
                    TableBuilder::new(ui)
                        .striped(true)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .column(Column::exact(ID_COLUMN_WIDTH))
                        .column(Column::remainder())
                        .column(Column::auto())
                        .header(HEADER_HEIGHT, |mut header| {
                            header.col(|ui| {
                                ui.strong("#");
                            });
                            header.col(|ui| {
                                ui.strong("Titre");
                            });
                            header.col(|_| {});
                        })
                        .body(|mut body| {
                            for lesson in &data.lessons {
                                body.row(ROW_HEIGHT, |mut row| {
                                    row.col(|ui| {
                                        ui.label(lesson.id.to_string());
                                    });
                                    row.col(|ui| {
                                        ui.label(lesson.display_title());
                                    });
                                    row.col(|ui| {
                                        if ui.button("Ouvrir").clicked() {
                                            clicked = Some(lesson.clone());
                                        }
                                    });
                                });
                            }
                        });
                });

                if let Some(lesson) = clicked {
                    data.selected = Some(lesson);
                    return Some(ModalResult::Confirmed(data.clone()));
                }
            }

            ui.add_space(8.0);
            if ui.button("Fermer").clicked() {
                return Some(ModalResult::Cancelled);
            }
            None
        });

        match result {
            Some(ModalResult::Confirmed(data)) => data.selected.map(LessonsAction::Open),
            Some(ModalResult::Cancelled) => None,
            None => {
                let data = self.modal.data_mut();
                if data.refresh_requested {
                    data.refresh_requested = false;
                    Some(LessonsAction::Refresh)
                } else {
                    None
                }
            }
        }
    }
}

impl Default for LessonsModal {
    fn default() -> Self {
        Self::new()
    }
}
