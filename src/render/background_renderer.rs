//! Background-Renderer für das Hintergrundbild.

use super::types::RenderContext;
use crate::core::BackgroundImage;
use egui::{Color32, Rect, TextureHandle, TextureOptions};

/// Renderer für das Hintergrundbild (in das Feld-Rechteck gestreckt).
#[derive(Default)]
pub struct BackgroundRenderer {
    texture: Option<TextureHandle>,
}

impl BackgroundRenderer {
    /// Lädt das Bild als Textur hoch; `None` entfernt die aktuelle Textur.
    pub fn set_background(&mut self, ctx: &egui::Context, image: Option<&BackgroundImage>) {
        let Some(image) = image else {
            self.texture = None;
            return;
        };

        let (width, height) = image.dimensions();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            image.rgba().as_raw(),
        );
        self.texture = Some(ctx.load_texture(
            "background_image",
            color_image,
            TextureOptions::LINEAR,
        ));
        log::info!(
            "Hintergrund-Textur hochgeladen: {}x{} ({})",
            width,
            height,
            image.source()
        );
    }

    pub(crate) fn render(
        &self,
        painter: &egui::Painter,
        ctx: &RenderContext,
        field_rect: (glam::Vec2, glam::Vec2),
        opacity: f32,
    ) {
        let Some(texture) = &self.texture else {
            return;
        };
        let rect = Rect::from_min_max(
            ctx.transform.to_screen(field_rect.0),
            ctx.transform.to_screen(field_rect.1),
        );
        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(
            texture.id(),
            rect,
            uv,
            Color32::WHITE.gamma_multiply(opacity.clamp(0.0, 1.0)),
        );
    }
}
