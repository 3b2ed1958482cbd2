//! Verwaltung mehrerer Bézier-Pfade inklusive Drag-Zustandsmaschine.
//!
//! `CurveSet` besitzt alle Pfade, den aktiven Index und den laufenden Drag.
//! Nach jedem Drag-Schritt wird zuerst die lokale Kontinuität des Pfads
//! und danach die pfadübergreifende Tangenten-Kontinuität hergestellt.

mod tangency;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bezier_path::{BezierPath, ContinuityPolicy, PathColor, SegmentExtension};
use super::export::export_path;
use super::field_mapping::{CoordinateMapping, FieldMapping, LOGICAL_CANVAS_SIZE};

/// Standardkurve in Feld-Einheiten.
pub const DEFAULT_CURVE_FIELD: [Vec2; 4] = [
    Vec2::new(36.0, 36.0),
    Vec2::new(54.0, 108.0),
    Vec2::new(108.0, 54.0),
    Vec2::new(108.0, 108.0),
];

/// Verhalten, wenn der Zeiger den Canvas während eines Drags verlässt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeaveBehavior {
    /// Drag bleibt aktiv, bis die Maustaste losgelassen wird
    #[default]
    KeepDragging,
    /// Drag wird beim Verlassen sofort beendet
    CancelDrag,
}

/// Alle Konstanten der Pfad-Bearbeitung.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSetConfig {
    /// Canvas-Größe (Clamp-Grenzen für Drags)
    pub bounds: Vec2,
    /// Punkte eines neuen Standardpfads in Canvas-Koordinaten
    pub default_points: [Vec2; 4],
    /// Trefferradius für Punkte
    pub hit_radius: f32,
    /// Trefferradius für Kurvenkörper
    pub curve_hit_radius: f32,
    /// Abtastschritt für den Kurven-Treffertest
    pub curve_sample_step: f32,
    /// Toleranz, innerhalb der zwei Endpunkte als verbunden gelten
    pub join_tolerance: f32,
    /// Mindestabstand gezogener Punkte zum Canvas-Rand
    pub clamp_margin: f32,
    /// Versatz neuer Pfade je Einfügeposition (beide Achsen)
    pub new_path_offset: f32,
    /// Hue-Schritt in Grad je Einfügeposition
    pub hue_step: f32,
    /// Geometrie für `add_segment`
    pub segment: SegmentExtension,
    /// Kontinuitäts-Strategie beim Ziehen
    pub continuity: ContinuityPolicy,
    /// Verhalten beim Verlassen des Canvas
    pub leave_behavior: LeaveBehavior,
    /// Klick auf leere Fläche verlängert den aktiven Pfad
    pub click_adds_point: bool,
}

impl CurveSetConfig {
    /// Standardkonfiguration für einen Canvas mit der gegebenen Abbildung.
    pub fn for_mapping(mapping: &FieldMapping) -> Self {
        Self {
            bounds: mapping.canvas_size,
            default_points: DEFAULT_CURVE_FIELD.map(|p| mapping.to_canvas(p)),
            hit_radius: 8.0,
            curve_hit_radius: 8.0,
            curve_sample_step: 0.05,
            join_tolerance: 5.0,
            clamp_margin: 2.0,
            new_path_offset: 80.0,
            hue_step: 67.0,
            segment: SegmentExtension {
                handle_length: 80.0,
                control_offset: Vec2::new(120.0, 40.0),
                anchor_offset: Vec2::new(160.0, 80.0),
            },
            continuity: ContinuityPolicy::default(),
            leave_behavior: LeaveBehavior::default(),
            click_adds_point: false,
        }
    }
}

impl Default for CurveSetConfig {
    fn default() -> Self {
        Self::for_mapping(&FieldMapping::new(Vec2::splat(LOGICAL_CANVAS_SIZE)))
    }
}

/// Laufender Drag eines einzelnen Punkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Index des Pfads
    pub curve: usize,
    /// Index des Punkts im Pfad
    pub index: usize,
    /// Zeiger minus Punktposition beim Drag-Start
    pub offset: Vec2,
}

/// Ergebnis eines Hover-Treffertests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverTarget {
    /// Kontrollpunkt unter dem Zeiger
    Point { curve: usize, index: usize },
    /// Kurvenkörper unter dem Zeiger
    Curve(usize),
    /// Nichts getroffen
    #[default]
    Empty,
}

/// Geordnete Menge von Pfaden mit aktivem Pfad und Drag-Zustand.
#[derive(Debug, Clone)]
pub struct CurveSet {
    curves: Vec<BezierPath>,
    active: usize,
    drag: Option<DragState>,
    config: CurveSetConfig,
}

impl Default for CurveSet {
    fn default() -> Self {
        Self::new(CurveSetConfig::default())
    }
}

impl CurveSet {
    /// Erstellt eine Menge mit genau einem Standardpfad.
    pub fn new(config: CurveSetConfig) -> Self {
        let mut set = Self {
            curves: Vec::new(),
            active: 0,
            drag: None,
            config,
        };
        set.reset();
        set
    }

    /// Setzt auf einen einzelnen Standardpfad zurück.
    pub fn reset(&mut self) {
        self.curves = vec![self.make_curve(0)];
        self.active = 0;
        self.drag = None;
    }

    fn make_curve(&self, insert_index: usize) -> BezierPath {
        let mut curve = BezierPath::new(
            self.config.default_points,
            PathColor::from_hue(self.config.hue_step * insert_index as f32),
        );
        curve.translate(Vec2::splat(self.config.new_path_offset * insert_index as f32));
        curve
    }

    // ── Abfragen ────────────────────────────────────────────────────

    pub fn curves(&self) -> &[BezierPath] {
        &self.curves
    }

    pub fn curve(&self, index: usize) -> Option<&BezierPath> {
        self.curves.get(index)
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Der aktive Pfad (existiert immer).
    pub fn active_curve(&self) -> &BezierPath {
        &self.curves[self.active]
    }

    pub fn drag_state(&self) -> Option<DragState> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Exportiert den aktiven Pfad unter dem Namen `p{aktiver Index}`.
    pub fn export_active(&self, mapping: &impl CoordinateMapping) -> String {
        export_path(self.active_curve(), &format!("p{}", self.active), mapping)
    }

    pub fn config(&self) -> &CurveSetConfig {
        &self.config
    }

    /// Ersetzt die Konfiguration; bestehende Pfade bleiben unverändert.
    pub fn set_config(&mut self, config: CurveSetConfig) {
        self.config = config;
    }

    // ── Pfad-Verwaltung ─────────────────────────────────────────────

    /// Fügt hinter dem aktiven Pfad einen neuen Pfad ein und aktiviert ihn.
    pub fn add_curve(&mut self) -> usize {
        let insert_index = self.active + 1;
        let curve = self.make_curve(insert_index);
        self.curves.insert(insert_index, curve);
        self.active = insert_index;
        self.drag = None;
        log::info!(
            "Pfad {} hinzugefügt ({} Pfade)",
            insert_index,
            self.curves.len()
        );
        insert_index
    }

    /// Entfernt den aktiven Pfad. Eine leere Menge erhält einen neuen Standardpfad.
    pub fn delete_active_curve(&mut self) {
        let removed = self.active;
        self.curves.remove(removed);
        self.drag = None;
        if self.curves.is_empty() {
            self.reset();
        } else {
            self.active = removed.saturating_sub(1);
        }
        log::info!(
            "Pfad {} gelöscht, aktiv: {} ({} Pfade)",
            removed,
            self.active,
            self.curves.len()
        );
    }

    /// Aktiviert den Pfad an `index`; außerhalb des Bereichs ein No-op.
    pub fn set_active_curve(&mut self, index: usize) -> bool {
        if index >= self.curves.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Hängt ein Segment an den aktiven Pfad an.
    pub fn add_segment(&mut self) {
        let ext = self.config.segment;
        self.curves[self.active].add_segment(&ext);
    }

    /// Verlängert den aktiven Pfad bis `pos`.
    pub fn append_point(&mut self, pos: Vec2) {
        self.curves[self.active].append_point(pos);
    }

    /// Entfernt das letzte Segment des aktiven Pfads.
    pub fn delete_last_segment(&mut self) -> bool {
        let removed = self.curves[self.active].delete_last_segment();
        if removed {
            self.cancel_stale_drag();
        }
        removed
    }

    fn cancel_stale_drag(&mut self) {
        if let Some(drag) = self.drag {
            let still_valid = self
                .curves
                .get(drag.curve)
                .is_some_and(|c| drag.index < c.len());
            if !still_valid {
                self.drag = None;
            }
        }
    }

    // ── Treffertests ────────────────────────────────────────────────

    fn point_hit(&self, pos: Vec2) -> Option<(usize, usize)> {
        self.curves.iter().enumerate().find_map(|(ci, curve)| {
            curve
                .point_under(pos, self.config.hit_radius)
                .map(|index| (ci, index))
        })
    }

    fn curve_hit(&self, pos: Vec2) -> Option<usize> {
        self.curves.iter().position(|curve| {
            curve.is_curve_under(
                pos,
                self.config.curve_hit_radius,
                self.config.curve_sample_step,
            )
        })
    }

    /// Was liegt unter dem Zeiger (Punkte vor Kurvenkörpern)?
    pub fn hover(&self, pos: Vec2) -> HoverTarget {
        if let Some((curve, index)) = self.point_hit(pos) {
            HoverTarget::Point { curve, index }
        } else if let Some(curve) = self.curve_hit(pos) {
            HoverTarget::Curve(curve)
        } else {
            HoverTarget::Empty
        }
    }

    // ── Drag-Zustandsmaschine ───────────────────────────────────────

    /// Zeiger gedrückt. Gibt zurück, ob das Ereignis verbraucht wurde.
    pub fn handle_drag_start(&mut self, pos: Vec2) -> bool {
        if let Some((curve, index)) = self.point_hit(pos) {
            let point = self.curves[curve].points()[index];
            self.drag = Some(DragState {
                curve,
                index,
                offset: pos - point,
            });
            self.active = curve;
            log::debug!("Drag gestartet: Pfad {}, Punkt {}", curve, index);
            return true;
        }

        if let Some(curve) = self.curve_hit(pos) {
            self.active = curve;
            return true;
        }

        if self.config.click_adds_point {
            self.append_point(pos);
            return true;
        }

        false
    }

    /// Zeiger bewegt. Gibt `true` zurück, wenn ein Drag Punkte verschoben hat.
    pub fn handle_drag_move(&mut self, pos: Vec2) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let margin = Vec2::splat(self.config.clamp_margin);
        let upper = self.config.bounds - margin;
        let target = (pos - drag.offset).max(margin).min(upper);

        let policy = self.config.continuity;
        let Some(curve) = self.curves.get_mut(drag.curve) else {
            self.drag = None;
            return false;
        };
        if curve.point(drag.index).is_none() {
            self.drag = None;
            return false;
        }
        curve.set_point(drag.index, target);
        let changed = curve.maintain_local_continuity(drag.index, policy);
        let step = tangency::DragStep {
            curve: drag.curve,
            index: drag.index,
            changed: &changed,
        };
        tangency::maintain_cross_path_continuity(
            &mut self.curves,
            step,
            self.config.join_tolerance,
        );
        true
    }

    /// Zeiger losgelassen. Gibt zurück, ob ein Drag aktiv war.
    pub fn handle_drag_end(&mut self) -> bool {
        match self.drag.take() {
            Some(drag) => {
                log::debug!("Drag beendet: Pfad {}, Punkt {}", drag.curve, drag.index);
                true
            }
            None => false,
        }
    }

    /// Zeiger hat den Canvas verlassen.
    pub fn handle_pointer_leave(&mut self) -> bool {
        match self.config.leave_behavior {
            LeaveBehavior::KeepDragging => false,
            LeaveBehavior::CancelDrag => self.handle_drag_end(),
        }
    }
}

#[cfg(test)]
mod tests;
