//! Abbildung zwischen Canvas-Pixeln und Spielfeld-Einheiten.
//!
//! Das Spielfeld belegt die zentrierten `1 - 2·margin_ratio` des Canvas.
//! Canvas-Ursprung ist oben links, Feld-Ursprung unten links (Y gespiegelt).

use glam::Vec2;

/// Standard-Feldgröße in Feld-Einheiten (Zoll).
pub const FIELD_SIZE: f32 = 144.0;
/// Standard-Randanteil des Canvas je Seite.
pub const FIELD_MARGIN_RATIO: f32 = 0.1;
/// Kantenlänge des logischen (quadratischen) Canvas in Pixeln.
pub const LOGICAL_CANVAS_SIZE: f32 = 800.0;

/// Vertrag für die Umrechnung zwischen Canvas- und Feldkoordinaten.
pub trait CoordinateMapping {
    /// Canvas-Pixel → Feld-Einheiten.
    fn to_field(&self, canvas: Vec2) -> Vec2;
    /// Feld-Einheiten → Canvas-Pixel.
    fn to_canvas(&self, field: Vec2) -> Vec2;
}

/// Lineare Feld-Abbildung für einen Canvas fester Größe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMapping {
    /// Canvas-Größe in Pixeln
    pub canvas_size: Vec2,
    /// Rand je Seite als Anteil der Canvas-Größe
    pub margin_ratio: f32,
    /// Kantenlänge des Spielfelds in Feld-Einheiten
    pub field_size: f32,
}

impl FieldMapping {
    /// Erstellt eine Abbildung mit Standard-Rand und -Feldgröße.
    pub fn new(canvas_size: Vec2) -> Self {
        Self {
            canvas_size,
            margin_ratio: FIELD_MARGIN_RATIO,
            field_size: FIELD_SIZE,
        }
    }

    /// Rand in Pixeln je Achse.
    pub fn margin(&self) -> Vec2 {
        self.canvas_size * self.margin_ratio
    }

    /// Nutzbare Feldfläche in Pixeln je Achse.
    pub fn usable_size(&self) -> Vec2 {
        self.canvas_size - 2.0 * self.margin()
    }

    /// Feld-Rechteck im Canvas als `(min, max)`.
    pub fn field_rect(&self) -> (Vec2, Vec2) {
        let margin = self.margin();
        (margin, margin + self.usable_size())
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::new(Vec2::splat(LOGICAL_CANVAS_SIZE))
    }
}

impl CoordinateMapping for FieldMapping {
    fn to_field(&self, canvas: Vec2) -> Vec2 {
        let normalized = (canvas - self.margin()) / self.usable_size();
        Vec2::new(normalized.x, 1.0 - normalized.y) * self.field_size
    }

    fn to_canvas(&self, field: Vec2) -> Vec2 {
        let normalized = field / self.field_size;
        self.margin() + Vec2::new(normalized.x, 1.0 - normalized.y) * self.usable_size()
    }
}
