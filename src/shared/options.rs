//! Zentrale Konfiguration für den VexPath Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::{
    ContinuityPolicy, CurveSetConfig, FieldMapping, LeaveBehavior, SegmentExtension,
    FIELD_MARGIN_RATIO, FIELD_SIZE, LOGICAL_CANVAS_SIZE,
};

// ── Treffertests ────────────────────────────────────────────────────

/// Trefferradius für Kontrollpunkte (logische Canvas-Pixel).
pub const HIT_RADIUS: f32 = 8.0;
/// Trefferradius für Kurvenkörper.
pub const CURVE_HIT_RADIUS: f32 = 8.0;
/// Abtastschritt des Kurven-Treffertests.
pub const CURVE_SAMPLE_STEP: f32 = 0.05;

// ── Kontinuität ─────────────────────────────────────────────────────

/// Toleranz für verbundene Endpunkte verschiedener Pfade.
pub const JOIN_TOLERANCE: f32 = 5.0;
/// Mindestabstand gezogener Punkte zum Canvas-Rand.
pub const CLAMP_MARGIN: f32 = 2.0;

// ── Neue Pfade & Segmente ───────────────────────────────────────────

/// Versatz je Einfügeposition für neue Pfade.
pub const NEW_PATH_OFFSET: f32 = 80.0;
/// Hue-Schritt je Einfügeposition (Grad).
pub const PATH_HUE_STEP: f32 = 67.0;
/// Handle-Länge des ersten Handles beim Segment-Anhängen.
pub const SEGMENT_HANDLE_LENGTH: f32 = 80.0;
/// Offset des zweiten Handles relativ zum bisherigen Endpunkt.
pub const SEGMENT_CONTROL_OFFSET: [f32; 2] = [120.0, 40.0];
/// Offset des neuen Endankers relativ zum bisherigen Endpunkt.
pub const SEGMENT_ANCHOR_OFFSET: [f32; 2] = [160.0, 80.0];

// ── Rendering ───────────────────────────────────────────────────────

/// Linienstärke des aktiven Pfads.
pub const STROKE_WIDTH_ACTIVE: f32 = 5.0;
/// Linienstärke inaktiver Pfade.
pub const STROKE_WIDTH_INACTIVE: f32 = 3.0;
/// Radius der Kontrollpunkte.
pub const POINT_RADIUS: f32 = 6.0;
/// Farbe der Handle-Linien (RGBA: halbtransparentes Grün).
pub const HANDLE_LINE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 0.5];
/// Farbe des gerade gezogenen Punkts (RGBA: Gelb).
pub const DRAG_POINT_COLOR: [f32; 4] = [1.0, 0.9, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `vexpath_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Canvas & Feld ───────────────────────────────────────────
    /// Kantenlänge des logischen Canvas in Pixeln
    pub canvas_size: f32,
    /// Feldgröße in Feld-Einheiten
    pub field_size: f32,
    /// Rand je Seite als Anteil der Canvas-Größe
    pub field_margin_ratio: f32,

    // ── Treffertests ────────────────────────────────────────────
    /// Trefferradius für Kontrollpunkte
    pub hit_radius: f32,
    /// Trefferradius für Kurvenkörper
    pub curve_hit_radius: f32,
    /// Abtastschritt des Kurven-Treffertests
    pub curve_sample_step: f32,

    // ── Kontinuität ─────────────────────────────────────────────
    /// Toleranz für verbundene Endpunkte
    pub join_tolerance: f32,
    /// Mindestabstand zum Canvas-Rand beim Ziehen
    pub clamp_margin: f32,
    /// Kontinuitäts-Strategie bei Anker-Drags
    #[serde(default)]
    pub continuity_policy: ContinuityPolicy,
    /// Verhalten beim Verlassen des Canvas während eines Drags
    #[serde(default)]
    pub leave_behavior: LeaveBehavior,
    /// Klick ins Leere verlängert den aktiven Pfad
    #[serde(default)]
    pub click_adds_point: bool,

    // ── Neue Pfade & Segmente ───────────────────────────────────
    /// Versatz neuer Pfade je Einfügeposition
    pub new_path_offset: f32,
    /// Hue-Schritt neuer Pfade (Grad)
    #[serde(default = "default_path_hue_step")]
    pub path_hue_step: f32,
    /// Handle-Länge beim Segment-Anhängen
    pub segment_handle_length: f32,
    /// Offset des zweiten neuen Handles
    pub segment_control_offset: [f32; 2],
    /// Offset des neuen Endankers
    pub segment_anchor_offset: [f32; 2],

    // ── Rendering ───────────────────────────────────────────────
    /// Linienstärke des aktiven Pfads
    pub stroke_width_active: f32,
    /// Linienstärke inaktiver Pfade
    pub stroke_width_inactive: f32,
    /// Radius der Kontrollpunkte
    pub point_radius: f32,
    /// Farbe der Handle-Linien
    pub handle_line_color: [f32; 4],
    /// Farbe des gezogenen Punkts
    pub drag_point_color: [f32; 4],
    /// Punkt-Indizes neben den Kontrollpunkten anzeigen
    #[serde(default)]
    pub show_point_indices: bool,
    /// Deckungsgrad des Hintergrundbilds
    pub background_opacity: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_size: LOGICAL_CANVAS_SIZE,
            field_size: FIELD_SIZE,
            field_margin_ratio: FIELD_MARGIN_RATIO,

            hit_radius: HIT_RADIUS,
            curve_hit_radius: CURVE_HIT_RADIUS,
            curve_sample_step: CURVE_SAMPLE_STEP,

            join_tolerance: JOIN_TOLERANCE,
            clamp_margin: CLAMP_MARGIN,
            continuity_policy: ContinuityPolicy::default(),
            leave_behavior: LeaveBehavior::default(),
            click_adds_point: false,

            new_path_offset: NEW_PATH_OFFSET,
            path_hue_step: PATH_HUE_STEP,
            segment_handle_length: SEGMENT_HANDLE_LENGTH,
            segment_control_offset: SEGMENT_CONTROL_OFFSET,
            segment_anchor_offset: SEGMENT_ANCHOR_OFFSET,

            stroke_width_active: STROKE_WIDTH_ACTIVE,
            stroke_width_inactive: STROKE_WIDTH_INACTIVE,
            point_radius: POINT_RADIUS,
            handle_line_color: HANDLE_LINE_COLOR,
            drag_point_color: DRAG_POINT_COLOR,
            show_point_indices: false,
            background_opacity: 1.0,
        }
    }
}

/// Serde-Default für `path_hue_step` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_path_hue_step() -> f32 {
    PATH_HUE_STEP
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("vexpath_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("vexpath_editor.toml")
    }

    /// Feld-Abbildung für den logischen Canvas.
    pub fn field_mapping(&self) -> FieldMapping {
        FieldMapping {
            canvas_size: Vec2::splat(self.canvas_size),
            margin_ratio: self.field_margin_ratio,
            field_size: self.field_size,
        }
    }

    /// Leitet die Konfiguration der Pfad-Verwaltung ab.
    pub fn curve_set_config(&self) -> CurveSetConfig {
        CurveSetConfig {
            hit_radius: self.hit_radius,
            curve_hit_radius: self.curve_hit_radius,
            curve_sample_step: self.curve_sample_step,
            join_tolerance: self.join_tolerance,
            clamp_margin: self.clamp_margin,
            new_path_offset: self.new_path_offset,
            hue_step: self.path_hue_step,
            segment: SegmentExtension {
                handle_length: self.segment_handle_length,
                control_offset: Vec2::from(self.segment_control_offset),
                anchor_offset: Vec2::from(self.segment_anchor_offset),
            },
            continuity: self.continuity_policy,
            leave_behavior: self.leave_behavior,
            click_adds_point: self.click_adds_point,
            ..CurveSetConfig::for_mapping(&self.field_mapping())
        }
    }
}
