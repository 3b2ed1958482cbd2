//! Renderer für Bézier-Pfade, Handle-Linien und Kontrollpunkte.

use super::types::{color32, RenderContext};
use crate::core::{HoverTarget, PointRole};
use crate::shared::{RenderPath, RenderScene};
use egui::epaint::CubicBezierShape;
use egui::{Align2, Color32, FontId, Pos2, Stroke};

/// Deckkraft-Faktor für Handles und Punkte inaktiver Pfade
const INACTIVE_DIM: f32 = 0.45;

/// Zeichnet alle Pfade in Z-Reihenfolge.
#[derive(Default)]
pub struct PathRenderer;

impl PathRenderer {
    pub(crate) fn render(&self, painter: &egui::Painter, ctx: &RenderContext, scene: &RenderScene) {
        for (index, path) in scene.paths.iter().enumerate() {
            self.render_curve(painter, ctx, path);
            self.render_points(painter, ctx, index, path, scene);
        }
    }

    fn render_curve(&self, painter: &egui::Painter, ctx: &RenderContext, path: &RenderPath) {
        let stroke = Stroke::new(
            ctx.transform.scale_length(path.stroke_width),
            color32(path.color),
        );
        for segment in path.points.windows(4).step_by(3) {
            let screen: [Pos2; 4] = [
                ctx.transform.to_screen(segment[0]),
                ctx.transform.to_screen(segment[1]),
                ctx.transform.to_screen(segment[2]),
                ctx.transform.to_screen(segment[3]),
            ];
            painter.add(CubicBezierShape::from_points_stroke(
                screen,
                false,
                Color32::TRANSPARENT,
                stroke,
            ));
        }
    }

    fn render_points(
        &self,
        painter: &egui::Painter,
        ctx: &RenderContext,
        curve: usize,
        path: &RenderPath,
        scene: &RenderScene,
    ) {
        let options = ctx.options;
        let dim = if path.is_active { 1.0 } else { INACTIVE_DIM };
        let handle_stroke = Stroke::new(
            1.5,
            color32(options.handle_line_color).gamma_multiply(dim),
        );
        let len = path.points.len();

        // Handle-Linien: jedes Handle zu seinem Anker
        for (index, point) in path.points.iter().enumerate() {
            let role = PointRole::of(index, len);
            if role.is_anchor() {
                continue;
            }
            let anchor = path.points[role.owning_anchor(index)];
            painter.line_segment(
                [ctx.transform.to_screen(anchor), ctx.transform.to_screen(*point)],
                handle_stroke,
            );
        }

        let radius = ctx.transform.scale_length(options.point_radius);
        let anchor_color = color32(path.color).gamma_multiply(dim);
        let handle_color = Color32::from_gray(230).gamma_multiply(dim);
        for (index, point) in path.points.iter().enumerate() {
            let center = ctx.transform.to_screen(*point);
            let is_dragged = scene.drag_point == Some((curve, index));
            let is_hovered = scene.hover == HoverTarget::Point { curve, index };

            let fill = if is_dragged {
                color32(options.drag_point_color)
            } else if PointRole::of(index, len).is_anchor() {
                anchor_color
            } else {
                handle_color
            };
            painter.circle_filled(center, radius, fill);

            if is_hovered || is_dragged {
                painter.circle_stroke(center, radius + 2.0, Stroke::new(1.5, Color32::WHITE));
            }

            if options.show_point_indices && path.is_active {
                painter.text(
                    center + egui::vec2(0.0, -radius - 2.0),
                    Align2::CENTER_BOTTOM,
                    index.to_string(),
                    FontId::monospace(11.0),
                    Color32::WHITE,
                );
            }
        }
    }
}
