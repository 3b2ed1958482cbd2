//! Rendering-Typen: Koordinaten-Transformation und Renderkontext.

use crate::shared::EditorOptions;
use egui::{Pos2, Rect};
use glam::Vec2;

/// Gemeinsamer Kontext für alle Sub-Renderer.
pub(crate) struct RenderContext<'a> {
    /// Abbildung logischer Canvas ↔ Bildschirm
    pub transform: CanvasTransform,
    /// Editor-Optionen (Farben, Größen, etc.)
    pub options: &'a EditorOptions,
}

/// Abbildung zwischen logischem Canvas (quadratisch, `canvas_size` Kantenlänge)
/// und dem Bildschirm-Rechteck, in dem der Canvas gezeichnet wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Bildschirm-Rechteck des Canvas
    pub rect: Rect,
    /// Bildschirm-Pixel pro logischem Pixel
    pub scale: f32,
}

impl CanvasTransform {
    /// Erstellt die Transformation für ein (quadratisches) Canvas-Rechteck.
    pub fn new(rect: Rect, canvas_size: f32) -> Self {
        let side = rect.width().min(rect.height());
        let scale = if canvas_size > 0.0 {
            side / canvas_size
        } else {
            1.0
        };
        Self { rect, scale }
    }

    /// Logische Canvas-Koordinate → Bildschirmposition.
    pub fn to_screen(&self, logical: Vec2) -> Pos2 {
        self.rect.min + egui::vec2(logical.x, logical.y) * self.scale
    }

    /// Bildschirmposition → logische Canvas-Koordinate.
    pub fn to_logical(&self, screen: Pos2) -> Vec2 {
        let local = (screen - self.rect.min) / self.scale;
        Vec2::new(local.x, local.y)
    }

    /// Logische Länge → Bildschirm-Pixel.
    pub fn scale_length(&self, length: f32) -> f32 {
        length * self.scale
    }
}

/// RGBA (0..1, nicht vormultipliziert) → egui-Farbe.
pub fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn transform_scales_logical_canvas_into_rect() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(400.0, 400.0));
        let transform = CanvasTransform::new(rect, 800.0);

        let screen = transform.to_screen(Vec2::new(800.0, 400.0));

        assert_relative_eq!(transform.scale, 0.5);
        assert_relative_eq!(screen.x, 410.0);
        assert_relative_eq!(screen.y, 220.0);
    }

    #[test]
    fn transform_roundtrips_screen_positions() {
        let rect = Rect::from_min_size(Pos2::new(5.0, 7.0), egui::vec2(600.0, 600.0));
        let transform = CanvasTransform::new(rect, 800.0);
        let logical = Vec2::new(240.0, 560.0);

        let back = transform.to_logical(transform.to_screen(logical));

        assert_relative_eq!(back.x, logical.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, logical.y, epsilon = 1e-3);
    }

    #[test]
    fn non_square_rect_uses_shorter_side() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(1000.0, 400.0));

        let transform = CanvasTransform::new(rect, 800.0);

        assert_relative_eq!(transform.scale, 0.5);
    }
}
