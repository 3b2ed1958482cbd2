//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{BackgroundImage, HoverTarget};
use glam::Vec2;
use std::sync::Arc;

/// Ein Pfad, wie er gezeichnet wird.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPath {
    /// Alle Punkte in logischen Canvas-Koordinaten (`3k + 1`)
    pub points: Vec<Vec2>,
    /// Strichfarbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke in logischen Pixeln
    pub stroke_width: f32,
    /// Aktiver Pfad (Handles und Punkte werden gezeichnet)
    pub is_active: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Alle Pfade in Z-Reihenfolge
    pub paths: Vec<RenderPath>,
    /// Gerade gezogener Punkt als `(Pfad, Index)`
    pub drag_point: Option<(usize, usize)>,
    /// Hover-Ziel unter dem Zeiger
    pub hover: HoverTarget,
    /// Kantenlänge des logischen Canvas
    pub canvas_size: f32,
    /// Feld-Rechteck im logischen Canvas `(min, max)`
    pub field_rect: (Vec2, Vec2),
    /// Hintergrundbild (optional)
    pub background: Option<Arc<BackgroundImage>>,
    /// Background-Opacity (0.0 = transparent, 1.0 = opak)
    pub background_opacity: f32,
    /// Background-Sichtbarkeit
    pub background_visible: bool,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Der aktive Pfad, falls vorhanden.
    pub fn active_path(&self) -> Option<&RenderPath> {
        self.paths.iter().find(|p| p.is_active)
    }

    /// Gibt zurück, ob ein Hintergrundbild gezeichnet werden soll.
    pub fn has_background(&self) -> bool {
        self.background_visible && self.background.is_some()
    }
}
