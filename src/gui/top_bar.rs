use std::path::PathBuf;

use eframe::egui::{
    self,
    containers,
};

use super::{
    recent_files::RecentUploads,
    theme::Theme,
};

#[derive(Debug, Clone, PartialEq)]
pub enum TopBarAction {
    ChooseFile,
    SelectRecent(PathBuf),
    ClearRecent,
    OpenLessons,
    ToggleDarkMode,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        recent: &RecentUploads,
        service_online: Option<bool>,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.menu_button("Fichier", |ui| {
                    if ui.button("Choisir un fichier…").clicked() {
                        action = Some(TopBarAction::ChooseFile);
                    }

                    ui.menu_button("Imports récents", |ui| {
                        let valid = recent.get_valid_files();
                        if valid.is_empty() {
                            ui.label("Aucun import récent");
                        }
                        for entry in valid {
                            let label = format!(
                                "{}  ·  {}  ·  {}",
                                entry.get_filename(),
                                entry.format_notion_count(),
                                entry.format_uploaded_at()
                            );
                            if ui
                                .button(label)
                                .on_hover_text(format!(
                                    "{} ({})",
                                    entry.file_path.display(),
                                    entry.format_file_size()
                                ))
                                .clicked()
                            {
                                action = Some(TopBarAction::SelectRecent(entry.file_path.clone()));
                            }
                        }
                        if !recent.is_empty() {
                            ui.separator();
                            if ui.button("Effacer la liste").clicked() {
                                action = Some(TopBarAction::ClearRecent);
                            }
                        }
                    });

                    ui.separator();
                    if ui.button("Quitter").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Leçons", |ui| {
                    if ui.button("Historique…").clicked() {
                        action = Some(TopBarAction::OpenLessons);
                    }
                });

                let theme_icon = if ctx.style().visuals.dark_mode { "☀" } else { "🌙" };
                if ui.button(theme_icon).on_hover_text("Thème clair / sombre").clicked() {
                    action = Some(TopBarAction::ToggleDarkMode);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, theme, service_online);
                });
            });
        });

        action
    }

    fn show_status_indicator(ui: &mut egui::Ui, theme: &Theme, service_online: Option<bool>) {
        let (color, tooltip) = match service_online {
            Some(true) => (theme.green(ui.ctx()), "Service d'analyse joignable"),
            Some(false) => (theme.red(ui.ctx()), "Service d'analyse injoignable"),
            None => (theme.muted(ui.ctx()), "Vérification du service…"),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
            ui.small("Service").on_hover_text(tooltip);
        });
    }
}
