use eframe::egui;

pub struct Modal<T> {
    open: bool,
    title: String,
    data: T,
    config: ModalConfig,
}

/// Configuration for modal appearance and behavior
#[derive(Clone)]
pub struct ModalConfig {
    pub resizable: bool,
    pub fixed_size: Option<egui::Vec2>,
    pub min_size: Option<egui::Vec2>,
    /// Dim the rest of the window behind the modal
    pub show_overlay: bool,
    pub close_on_outside_click: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            resizable: false,
            fixed_size: None,
            min_size: Some(egui::Vec2::new(300.0, 200.0)),
            show_overlay: true,
            close_on_outside_click: true,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ModalResult<T> {
    Confirmed(T),
    Cancelled,
}

impl<T> Modal<T> {
    pub fn new_with_data(title: impl Into<String>, data: T) -> Self {
        Self { open: false, title: title.into(), data, config: ModalConfig::default() }
    }

    pub fn with_config(mut self, config: ModalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Any returned result closes the modal.
    pub fn show<F>(&mut self, ctx: &egui::Context, content: F) -> Option<ModalResult<T>>
    where
        F: FnOnce(&mut egui::Ui, &mut T) -> Option<ModalResult<T>>,
    {
        if !self.open {
            return None;
        }

        let mut result = None;
        let mut close_from_outside_click = false;

        if self.config.show_overlay {
            close_from_outside_click = self.show_overlay(ctx);
        }

        let mut window = egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(self.config.resizable)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO);

        if let Some(size) = self.config.fixed_size {
            window = window.fixed_size(size);
        }

        if let Some(min_size) = self.config.min_size {
            window = window.min_size(min_size);
        }

        let data = &mut self.data;
        window.show(ctx, |ui| {
            result = content(ui, data);
        });

        if result.is_none() && close_from_outside_click && self.config.close_on_outside_click {
            result = Some(ModalResult::Cancelled);
        }

        if result.is_some() {
            self.open = false;
        }

        result
    }

    fn show_overlay(&self, ctx: &egui::Context) -> bool {
        let area_response = egui::Area::new(egui::Id::new("modal_overlay"))
            .order(egui::Order::Background)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                let (_rect, response) =
                    ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
                ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(100));
                response.clicked()
            });

        area_response.inner
    }
}
