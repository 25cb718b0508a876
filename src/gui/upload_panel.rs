use std::path::{
    Path,
    PathBuf,
};

use eframe::egui;
use rfd::FileDialog;

use super::theme::Theme;
use crate::core::UploadForm;

pub const COURSE_EXTENSIONS: [&str; 2] = ["docx", "pptx"];

#[derive(Debug, Clone, PartialEq)]
pub enum UploadAction {
    FileChosen(PathBuf),
    Submit,
}

pub fn has_course_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| COURSE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

pub fn pick_course_file() -> Option<PathBuf> {
    FileDialog::new().add_filter("Cours (.docx, .pptx)", &COURSE_EXTENSIONS).pick_file()
}

pub struct UploadPanel;

impl UploadPanel {
    pub fn show(ui: &mut egui::Ui, form: &UploadForm, theme: &Theme) -> Option<UploadAction> {
        let mut action = None;

        ui.heading("Importer un cours (roumain)");
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                if ui.button("Choisir un fichier…").clicked() {
                    if let Some(path) = pick_course_file() {
                        action = Some(UploadAction::FileChosen(path));
                    }
                }

                match form.selected_file_name() {
                    Some(name) => {
                        ui.label(name);
                    }
                    None => {
                        ui.label(
                            egui::RichText::new("Aucun fichier sélectionné")
                                .color(theme.muted(ui.ctx())),
                        );
                    }
                }
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let button = egui::Button::new(form.submit_label());
                if ui.add_enabled(form.can_submit(), button).clicked() {
                    action = Some(UploadAction::Submit);
                }
                if form.is_loading() {
                    ui.add(egui::Spinner::new());
                }
            });

            if let Some(message) = form.error() {
                ui.add_space(6.0);
                ui.label(egui::RichText::new(message).color(theme.red(ui.ctx())));
            }
        });

        action
    }
}
