//! Canvas-Rendering über den egui-Painter.

mod background_renderer;
mod path_renderer;
mod types;

pub use crate::shared::RenderScene;
pub(crate) use background_renderer::BackgroundRenderer;
pub(crate) use path_renderer::PathRenderer;
pub use types::{color32, CanvasTransform};
use types::RenderContext;

/// Haupt-Renderer für den Bézier-Canvas.
///
/// Verwaltet die Hintergrund-Textur und bietet eine saubere API:
/// `new()` + `render_scene()` + `set_background()`.
#[derive(Default)]
pub struct Renderer {
    background_renderer: BackgroundRenderer,
    path_renderer: PathRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendert die komplette Szene in das Canvas-Rechteck.
    pub fn render_scene(&mut self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        let ctx = RenderContext {
            transform: CanvasTransform::new(rect, scene.canvas_size),
            options: &scene.options,
        };

        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));

        if scene.has_background() {
            self.background_renderer.render(
                painter,
                &ctx,
                scene.field_rect,
                scene.background_opacity,
            );
        }

        let (field_min, field_max) = scene.field_rect;
        painter.rect_stroke(
            egui::Rect::from_min_max(
                ctx.transform.to_screen(field_min),
                ctx.transform.to_screen(field_max),
            ),
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
            egui::StrokeKind::Inside,
        );

        self.path_renderer.render(painter, &ctx, scene);
    }

    /// Lädt ein neues Hintergrundbild als Textur hoch oder entfernt es.
    pub fn set_background(
        &mut self,
        ctx: &egui::Context,
        image: Option<&crate::core::BackgroundImage>,
    ) {
        self.background_renderer.set_background(ctx, image);
    }
}
