use crate::shared::EditorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Drag & Zeiger ───────────────────────────────────────────────
    /// Treffertest und ggf. Drag starten
    BeginDrag { pos: Vec2 },
    /// Gezogenen Punkt auf Zeigerposition nachführen
    UpdateDrag { pos: Vec2 },
    /// Drag beenden
    EndDrag,
    /// Zeiger hat den Canvas verlassen (Verhalten laut Optionen)
    PointerLeft,
    /// Koordinatenanzeige und Hover aktualisieren
    UpdatePointerReadout { pos: Vec2 },
    /// Koordinatenanzeige leeren
    ClearPointerReadout,

    // ── Pfade ───────────────────────────────────────────────────────
    /// Neuen Pfad anlegen und aktivieren
    AddPath,
    /// Aktiven Pfad löschen (letzter Pfad wird ersetzt)
    DeleteActivePath,
    /// Aktiven Pfad wechseln
    SetActivePath { index: usize },
    /// Segment an aktiven Pfad anhängen
    AddSegment,
    /// Letztes Segment des aktiven Pfads entfernen
    DeleteLastSegment,
    /// Alle Pfade zurücksetzen
    ResetPaths,
    /// Aktiven Pfad exportieren und in die Zwischenablage legen
    ExportActivePath,

    // ── Hintergrund ─────────────────────────────────────────────────
    /// Hintergrundbild-Dialog anfordern
    RequestBackgroundImageDialog,
    /// Hintergrundbild laden
    LoadBackgroundImage { path: String },
    /// Hintergrund-Sichtbarkeit umschalten
    ToggleBackgroundVisibility,
    /// Hintergrund-Deckkraft setzen
    SetBackgroundOpacity { opacity: f32 },

    // ── Dialoge & Anwendung ─────────────────────────────────────────
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
    /// Statusmeldung entfernen
    DismissStatusMessage,
    /// Anwendung beenden
    RequestExit,
}
