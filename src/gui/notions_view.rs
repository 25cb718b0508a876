use eframe::egui;

use super::theme::Theme;
use crate::core::{
    view::REVISION_BADGE,
    Document,
    Notion,
};

const ROW_SPACING: f32 = 4.0;

pub fn notions_view(ui: &mut egui::Ui, document: &Document, theme: &Theme) {
    ui.add_space(16.0);
    ui.label(theme.heading(ui.ctx(), &document.heading()).size(20.0));

    let sections = document.sections();
    if sections.is_empty() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Aucune notion trouvée.").color(theme.muted(ui.ctx())));
        return;
    }

    ui.label(
        egui::RichText::new(format!(
            "{} notions · {} en révision",
            document.notion_count(),
            document.revision_count()
        ))
        .small()
        .color(theme.muted(ui.ctx())),
    );

    egui::ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
        for section in sections {
            ui.add_space(8.0);
            egui::CollapsingHeader::new(egui::RichText::new(section.label).strong())
                .id_salt(section.category.key())
                .default_open(true)
                .show(ui, |ui| {
                    for notion in section.notions {
                        notion_row(ui, notion, theme);
                        ui.add_space(ROW_SPACING);
                    }
                });
        }
    });
}

fn notion_row(ui: &mut egui::Ui, notion: &Notion, theme: &Theme) {
    egui::Frame::group(ui.style()).inner_margin(egui::Margin::symmetric(10, 6)).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(&notion.title);
            if notion.is_revision {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    revision_badge(ui, theme);
                });
            }
        });
    });
}

fn revision_badge(ui: &mut egui::Ui, theme: &Theme) {
    let (fill, stroke) = theme.badge(ui.ctx());
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, stroke))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(REVISION_BADGE).small());
        });
}
