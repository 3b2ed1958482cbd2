//! VexPath Editor.
//!
//! Interaktiver Editor für stückweise kubische Bézier-Pfade auf einem
//! quadratischen Spielfeld mit Text-Export in Feldkoordinaten.

use eframe::egui;
use vexpath_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("VexPath Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 960.0])
                .with_title("VexPath Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "VexPath Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = !events.is_empty();

        self.process_events(events);

        self.sync_clipboard(ctx);
        self.sync_background_upload(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let side = ui.available_width().min(ui.available_height());
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click_and_drag());
                let transform = render::CanvasTransform::new(rect, self.state.options.canvas_size);

                events.extend(self.input.collect_canvas_events(
                    ui,
                    &response,
                    &transform,
                    &self.state,
                ));

                if response.contains_pointer() || self.state.paths.is_dragging() {
                    ui.ctx().set_cursor_icon(ui::input::cursor_for(
                        self.state.view.hover,
                        self.state.paths.is_dragging(),
                    ));
                }

                let scene = self.controller.build_render_scene(&self.state);
                self.renderer
                    .render_scene(&ui.painter_at(rect), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("Fehler: {:#}", e));
            }
        }
    }

    fn sync_clipboard(&mut self, ctx: &egui::Context) {
        if let Some(text) = self.state.ui.pending_clipboard.take() {
            ctx.copy_text(text);
        }
    }

    fn sync_background_upload(&mut self, ctx: &egui::Context) {
        if !self.state.view.background_dirty {
            return;
        }
        self.state.view.background_dirty = false;

        self.renderer
            .set_background(ctx, self.state.view.background_image.as_deref());
        if self.state.view.background_image.is_none() {
            log::info!("Hintergrundbild aus Renderer entfernt");
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.paths.is_dragging()
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
