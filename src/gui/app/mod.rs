mod modals;

use std::{
    mem,
    path::PathBuf,
    time::{
        Duration,
        Instant,
    },
};

use eframe::egui::{
    self,
    Id,
};
use modals::Modals;
use tracing::{
    error,
    info,
    warn,
};

use super::{
    lessons_modal::LessonsAction,
    notions_view::notions_view,
    recent_files::RecentUpload,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    upload_panel::{
        has_course_extension,
        pick_course_file,
        UploadAction,
        UploadPanel,
    },
};
use crate::{
    core::{
        tasks::{
            types::UploadResult,
            TaskManager,
            TaskResult,
        },
        ApiClient,
        NotesError,
        UploadForm,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(10);
const CONTENT_MAX_WIDTH: f32 = 720.0;

pub struct NotesApp {
    form: UploadForm,

    // Configuration
    settings_data: SettingsData,

    // UI State
    theme: Theme,
    modals: Modals,

    // External Services
    service_online: Option<bool>,
    last_health_check: Option<Instant>,
    task_manager: TaskManager,
}

impl NotesApp {
    pub fn new(cc: &eframe::CreationContext<'_>, client: ApiClient) -> Result<Self, NotesError> {
        info!("Analysis service at {}", client.config().api_base);

        let repaint_ctx = cc.egui_ctx.clone();
        let task_manager =
            TaskManager::new(client)?.with_repaint(move || repaint_ctx.request_repaint());

        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let theme = Theme::dracula();

        set_theme(&cc.egui_ctx, &theme);
        apply_dark_mode(&cc.egui_ctx, settings_data.dark_mode);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        Ok(Self {
            form: UploadForm::new(),
            settings_data,
            theme,
            modals: Modals::default(),
            service_online: None,
            last_health_check: None,
            task_manager,
        })
    }
}

fn apply_dark_mode(ctx: &egui::Context, dark_mode: bool) {
    ctx.options_mut(|o| {
        o.theme_preference = if dark_mode {
            egui::ThemePreference::Dark
        } else {
            egui::ThemePreference::Light
        };
    });
}

impl eframe::App for NotesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_service_status();
        self.handle_file_drops(ctx);
        self.draw_file_drop_overlay(ctx);

        if let Some(action) = TopBar::show(
            ctx,
            &self.theme,
            &self.settings_data.recent_uploads,
            self.service_online,
        ) {
            self.handle_top_bar_action(action, ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let width = ui.available_width().min(CONTENT_MAX_WIDTH);
            ui.vertical_centered(|ui| {
                ui.set_max_width(width);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    if let Some(action) = UploadPanel::show(ui, &self.form, &self.theme) {
                        self.handle_upload_action(action);
                    }

                    if let Some(document) = self.form.document() {
                        notions_view(ui, document, &self.theme);
                    }
                });
            });
        });

        if let Some(action) = self.modals.lessons.show(ctx) {
            match action {
                LessonsAction::Refresh => self.task_manager.load_lessons(),
                LessonsAction::Open(summary) => {
                    info!("Opening lesson #{}", summary.id);
                    self.task_manager.load_lesson_notions(summary);
                }
            }
        }

        self.modals.error.show(ctx);

        ctx.request_repaint_after(HEALTH_CHECK_INTERVAL);
    }
}

impl NotesApp {
    fn handle_upload_action(&mut self, action: UploadAction) {
        match action {
            UploadAction::FileChosen(path) => {
                info!("File selected: {}", path.display());
                self.form.select_file(path);
            }
            UploadAction::Submit => self.submit(),
        }
    }

    fn submit(&mut self) {
        let task_manager = &self.task_manager;
        let started = self.form.submit(|path| {
            info!("Submitting {}", path.display());
            task_manager.upload(path);
        });

        if !started {
            if let Some(message) = self.form.error() {
                warn!("Upload not started: {}", message);
            }
        }
    }

    fn handle_top_bar_action(&mut self, action: TopBarAction, ctx: &egui::Context) {
        match action {
            TopBarAction::ChooseFile => {
                if let Some(path) = pick_course_file() {
                    self.form.select_file(path);
                }
            }
            TopBarAction::SelectRecent(path) => self.form.select_file(path),
            TopBarAction::ClearRecent => {
                self.settings_data.recent_uploads.clear();
                self.save_settings();
            }
            TopBarAction::OpenLessons => {
                self.modals.lessons.open();
                self.task_manager.load_lessons();
            }
            TopBarAction::ToggleDarkMode => {
                self.settings_data.dark_mode = !self.settings_data.dark_mode;
                apply_dark_mode(ctx, self.settings_data.dark_mode);
                self.save_settings();
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Upload { file, result } => self.handle_upload_result(file, result),

            TaskResult::Health(online) => {
                if self.service_online != Some(online) {
                    info!("Analysis service {}", if online { "online" } else { "offline" });
                }
                self.service_online = Some(online);
            }

            TaskResult::Lessons(result) => {
                if let Err(message) = &result {
                    error!("Failed to list lessons: {}", message);
                }
                self.modals.lessons.set_lessons(result);
            }

            TaskResult::LessonNotions { summary, result } => match result {
                Ok(document) => {
                    if !self.form.show(document) {
                        warn!("Lesson #{} arrived during an upload, not shown", summary.id);
                    }
                }
                Err(message) => {
                    error!("Failed to load lesson #{}: {}", summary.id, message);
                    self.modals.error.show_error(
                        "Leçon indisponible",
                        format!("Impossible d'ouvrir « {} ».", summary.display_title()),
                        Some(message),
                    );
                }
            },
        }
    }

    fn handle_upload_result(&mut self, file: PathBuf, result: UploadResult) {
        match &result {
            Ok(document) => {
                info!(
                    "Analysed '{}': {} notions ({} revisions)",
                    document.title,
                    document.notion_count(),
                    document.revision_count()
                );
                self.settings_data.recent_uploads.record(RecentUpload::new(
                    file,
                    document.title.clone(),
                    document.notion_count(),
                ));
                self.save_settings();
            }
            Err(e) => error!("Upload of {} failed: {}", file.display(), e),
        }

        self.form.finish(result);
    }

    fn update_service_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_health_check {
            None => true,
            Some(last_check) => now.duration_since(last_check) >= HEALTH_CHECK_INTERVAL,
        };

        if should_check {
            self.task_manager.check_health();
            self.last_health_check = Some(now);
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            error!("Failed to save settings: {}", e);
        }
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input_mut(|i| mem::take(&mut i.raw.dropped_files));
        if dropped.is_empty() {
            return;
        }

        match dropped.iter().filter_map(|f| f.path.as_deref()).find(|p| has_course_extension(p)) {
            Some(path) => {
                info!("File dropped: {}", path.display());
                self.form.select_file(path);
            }
            None => warn!("Dropped files ignored: none is a .docx or .pptx"),
        }
    }

    fn draw_file_drop_overlay(&self, ctx: &egui::Context) {
        let any_valid_hovered = ctx.input(|i| {
            i.raw.hovered_files.iter().filter_map(|f| f.path.as_deref()).any(has_course_extension)
        });
        if !any_valid_hovered {
            return;
        }

        let size = egui::vec2(300.0, 120.0);

        egui::Modal::new(Id::new("file_drop_overlay")).show(ctx, |ui| {
            ui.set_max_size(size);
            ui.set_min_size(size);

            ui.centered_and_justified(|ui| {
                ui.heading("📥  Déposer le cours ici");
            });
        });
    }
}
