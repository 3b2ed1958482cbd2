//! Stückweise kubischer Bézier-Pfad.
//!
//! Ein Pfad ist eine geordnete Punktfolge der Länge `3k + 1` (k ≥ 1).
//! Segment `i` nutzt die Punkte `[3i, 3i+1, 3i+2, 3i+3]`: Vielfache von 3
//! sind Anker (auf der Kurve), die Punkte dazwischen Handles.
//! Alle mutierenden Operationen halten die `3k + 1`-Invariante ein.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Minimale Punktanzahl eines Pfads (genau ein Segment).
pub const MIN_PATH_POINTS: usize = 4;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

// ── Rollen ──────────────────────────────────────────────────────────

/// Rolle eines Punkts innerhalb eines Pfads, abgeleitet aus Index und Länge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    /// Index 0: freier Startpunkt
    FirstAnchor,
    /// Letzter Index: freier Endpunkt
    LastAnchor,
    /// Anker zwischen zwei Segmenten (index % 3 == 0)
    InteriorAnchor,
    /// Ausgehender Handle des Ankers `anchor` (index % 3 == 1)
    OutgoingHandle { anchor: usize },
    /// Eingehender Handle des Ankers `anchor` (index % 3 == 2)
    IncomingHandle { anchor: usize },
}

/// Seite eines Handles relativ zu seinem Anker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    /// Vor dem Anker (eingehende Tangente)
    Before,
    /// Nach dem Anker (ausgehende Tangente)
    After,
}

impl HandleSide {
    /// Vorzeichen, mit dem eine Fahrtrichtung in einen Handle-Offset übersetzt wird.
    pub fn heading_sign(self) -> f32 {
        match self {
            HandleSide::Before => -1.0,
            HandleSide::After => 1.0,
        }
    }
}

impl PointRole {
    /// Klassifiziert `index` in einem Pfad der Länge `len`.
    pub fn of(index: usize, len: usize) -> Self {
        if index == 0 {
            PointRole::FirstAnchor
        } else if index + 1 == len {
            PointRole::LastAnchor
        } else {
            match index % 3 {
                0 => PointRole::InteriorAnchor,
                1 => PointRole::OutgoingHandle { anchor: index - 1 },
                _ => PointRole::IncomingHandle { anchor: index + 1 },
            }
        }
    }

    /// True für Start-, End- und Zwischenanker.
    pub fn is_anchor(self) -> bool {
        matches!(
            self,
            PointRole::FirstAnchor | PointRole::LastAnchor | PointRole::InteriorAnchor
        )
    }

    /// Index des Ankers, zu dem der Punkt gehört (bei Ankern der Index selbst).
    pub fn owning_anchor(self, index: usize) -> usize {
        match self {
            PointRole::OutgoingHandle { anchor } | PointRole::IncomingHandle { anchor } => anchor,
            _ => index,
        }
    }

    /// Handle-Seite, `None` für Anker.
    pub fn handle_side(self) -> Option<HandleSide> {
        match self {
            PointRole::OutgoingHandle { .. } => Some(HandleSide::After),
            PointRole::IncomingHandle { .. } => Some(HandleSide::Before),
            _ => None,
        }
    }
}

// ── Konfiguration ───────────────────────────────────────────────────

/// Kontinuitäts-Strategie beim Ziehen innerhalb eines Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContinuityPolicy {
    /// Anker-Drag richtet beide Handles kollinear und gleich lang aus,
    /// Handle-Drag spiegelt den Gegen-Handle.
    #[default]
    NormalizeHandles,
    /// Anker-Drag spiegelt nur den ausgehenden Handle, Längen bleiben frei.
    MirrorOnly,
}

/// Parameter für `BezierPath::add_segment` (Erweiterung per Button).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentExtension {
    /// Länge des ersten neuen Handles entlang der eingehenden Tangente
    pub handle_length: f32,
    /// Offset des zweiten neuen Handles relativ zum bisherigen Endpunkt
    pub control_offset: Vec2,
    /// Offset des neuen Endankers relativ zum bisherigen Endpunkt
    pub anchor_offset: Vec2,
}

// ── Farbe ───────────────────────────────────────────────────────────

/// Pfadfarbe im HSL-Raum (Hue in Grad, Sättigung/Helligkeit 0..1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathColor {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl PathColor {
    /// Standard-Sättigung neuer Pfade.
    pub const SATURATION: f32 = 0.7;
    /// Standard-Helligkeit neuer Pfade.
    pub const LIGHTNESS: f32 = 0.4;
    /// Helligkeit des aktiven Pfads.
    pub const ACTIVE_LIGHTNESS: f32 = 0.7;

    /// Farbe mit gegebenem Hue und Standard-Sättigung/-Helligkeit.
    pub fn from_hue(hue: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: Self::SATURATION,
            lightness: Self::LIGHTNESS,
        }
    }

    /// Aufgehellte Variante für den aktiven Pfad.
    pub fn highlighted(self) -> Self {
        Self {
            lightness: Self::ACTIVE_LIGHTNESS,
            ..self
        }
    }

    /// Konvertiert nach RGBA (0..1).
    pub fn to_rgba(self) -> [f32; 4] {
        let c = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.lightness - c / 2.0;
        [r + m, g + m, b + m, 1.0]
    }
}

impl Default for PathColor {
    fn default() -> Self {
        Self::from_hue(0.0)
    }
}

// ── Pfad ────────────────────────────────────────────────────────────

/// Ein Pfad aus verketteten kubischen Bézier-Segmenten.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierPath {
    points: Vec<Vec2>,
    color: PathColor,
}

impl BezierPath {
    /// Erstellt einen Pfad mit genau einem Segment.
    pub fn new(points: [Vec2; 4], color: PathColor) -> Self {
        Self {
            points: points.to_vec(),
            color,
        }
    }

    /// Erstellt einen Pfad aus beliebig vielen Punkten.
    ///
    /// Gibt `None` zurück, wenn die Länge nicht die Form `3k + 1` (k ≥ 1) hat.
    pub fn from_points(points: Vec<Vec2>, color: PathColor) -> Option<Self> {
        if points.len() < MIN_PATH_POINTS || (points.len() - 1) % 3 != 0 {
            return None;
        }
        Some(Self { points, color })
    }

    /// Alle Punkte in Index-Reihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Anzahl der Punkte (immer `3k + 1`).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True, wenn der Pfad keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Anzahl der Bézier-Segmente.
    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Punkt an `index`, falls vorhanden.
    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Startanker.
    pub fn first(&self) -> Vec2 {
        self.points[0]
    }

    /// Endanker.
    pub fn last(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    /// Eingehender Handle des Endankers.
    pub fn second_to_last(&self) -> Vec2 {
        self.points[self.points.len() - 2]
    }

    /// Iteriert über alle Segmente als `[P0, P1, P2, P3]`.
    pub fn segments(&self) -> impl Iterator<Item = [Vec2; 4]> + '_ {
        self.points
            .windows(4)
            .step_by(3)
            .map(|w| [w[0], w[1], w[2], w[3]])
    }

    /// Rolle des Punkts an `index`, `None` außerhalb des Bereichs.
    pub fn role(&self, index: usize) -> Option<PointRole> {
        (index < self.points.len()).then(|| PointRole::of(index, self.points.len()))
    }

    /// Handles eines Ankers mit ihrer Seite (0 bis 2 Einträge).
    pub fn anchor_handles(&self, anchor: usize) -> Vec<(usize, HandleSide)> {
        let mut handles = Vec::with_capacity(2);
        if anchor > 0 && anchor < self.points.len() {
            handles.push((anchor - 1, HandleSide::Before));
        }
        if anchor + 1 < self.points.len() {
            handles.push((anchor + 1, HandleSide::After));
        }
        handles
    }

    /// Pfadfarbe.
    pub fn color(&self) -> PathColor {
        self.color
    }

    /// Setzt die Pfadfarbe.
    pub fn set_color(&mut self, color: PathColor) {
        self.color = color;
    }

    /// Überschreibt einen Punkt ohne Kontinuitäts-Nebenwirkungen.
    ///
    /// Gibt `false` zurück, wenn `index` außerhalb liegt.
    pub fn set_point(&mut self, index: usize, pos: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = pos;
                true
            }
            None => false,
        }
    }

    /// Verschiebt alle Punkte um `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }

    /// Erweitert den Pfad per Klick bis `pos`.
    ///
    /// Der erste neue Handle ist die Spiegelung des bisherigen eingehenden
    /// Handles am Endanker (tangentialer Abgang), der zweite liegt ein
    /// Sehnen-Drittel vor dem neuen Anker.
    pub fn append_point(&mut self, pos: Vec2) {
        let last = self.last();
        let reflected = 2.0 * last - self.second_to_last();
        let incoming = pos + (last - pos) / 3.0;
        self.points.extend([reflected, incoming, pos]);
    }

    /// Hängt ein vollständiges Segment an den Endanker an.
    ///
    /// Der erste neue Handle folgt der eingehenden Tangente mit fester Länge
    /// (ohne Spiegelung der bisherigen Handle-Länge).
    pub fn add_segment(&mut self, ext: &SegmentExtension) {
        let last = self.last();
        let direction = (last - self.second_to_last())
            .try_normalize()
            .unwrap_or(Vec2::X);
        self.points.extend([
            last + direction * ext.handle_length,
            last + ext.control_offset,
            last + ext.anchor_offset,
        ]);
    }

    /// Entfernt das letzte Segment.
    ///
    /// Das erste Segment bleibt immer erhalten: bei `len() <= 4` wird
    /// nichts entfernt und `false` zurückgegeben.
    pub fn delete_last_segment(&mut self) -> bool {
        if self.points.len() <= MIN_PATH_POINTS {
            return false;
        }
        let new_len = self.points.len() - 3;
        self.points.truncate(new_len.max(MIN_PATH_POINTS));
        true
    }

    /// Stellt die C1-Kontinuität nach einem Drag von `dragged` wieder her.
    ///
    /// Gibt die Indizes zurück, die dabei zusätzlich verändert wurden.
    pub fn maintain_local_continuity(
        &mut self,
        dragged: usize,
        policy: ContinuityPolicy,
    ) -> Vec<usize> {
        let len = self.points.len();
        if dragged == 0 || dragged >= len {
            return Vec::new();
        }

        match PointRole::of(dragged, len) {
            PointRole::InteriorAnchor => {
                let (before, after) = (dragged - 1, dragged + 1);
                let anchor = self.points[dragged];
                match policy {
                    ContinuityPolicy::NormalizeHandles => {
                        let before_len = self.points[before].distance(anchor);
                        let after_len = self.points[after].distance(anchor);
                        let average = (before_len + after_len) / 2.0;
                        let Some(direction) = (anchor - self.points[before]).try_normalize()
                        else {
                            return Vec::new();
                        };
                        self.points[before] = anchor - direction * average;
                        self.points[after] = anchor + direction * average;
                        vec![before, after]
                    }
                    ContinuityPolicy::MirrorOnly => {
                        self.points[after] = 2.0 * anchor - self.points[before];
                        vec![after]
                    }
                }
            }
            PointRole::OutgoingHandle { anchor } if dragged > 1 => {
                let before = dragged - 2;
                self.points[before] = 2.0 * self.points[anchor] - self.points[dragged];
                vec![before]
            }
            PointRole::IncomingHandle { anchor } if dragged > 1 => {
                let after = anchor + 1;
                if after >= len {
                    return Vec::new();
                }
                self.points[after] = 2.0 * self.points[anchor] - self.points[dragged];
                vec![after]
            }
            _ => Vec::new(),
        }
    }

    /// Erster Punkt-Index innerhalb von `radius` um `pos` (niedrigster Index gewinnt).
    pub fn point_under(&self, pos: Vec2, radius: f32) -> Option<usize> {
        self.points.iter().position(|p| p.distance(pos) <= radius)
    }

    /// Prüft per Abtastung, ob die Kurve innerhalb von `radius` um `pos` verläuft.
    ///
    /// Jedes Segment wird in Schritten von `step` über [0, 1] ausgewertet.
    pub fn is_curve_under(&self, pos: Vec2, radius: f32, step: f32) -> bool {
        let samples = if step > 0.0 {
            (1.0 / step).ceil().max(1.0) as usize
        } else {
            1
        };
        self.segments().any(|[p0, p1, p2, p3]| {
            (0..=samples).any(|i| {
                let t = i as f32 / samples as f32;
                cubic_bezier(p0, p1, p2, p3, t).distance(pos) <= radius
            })
        })
    }
}
