//! Use-Case-Funktionen für das Hintergrundbild.

use crate::app::AppState;
use crate::core::BackgroundImage;
use anyhow::Result;
use std::sync::Arc;

/// Öffnet den Hintergrundbild-Auswahl-Dialog.
pub fn request_background_image_dialog(state: &mut AppState) {
    state.ui.show_background_dialog = true;
}

/// Lädt ein Hintergrundbild von einem Dateipfad.
///
/// Nicht-quadratische Bilder werden mittig quadratisch zugeschnitten;
/// der Renderer streckt das Bild auf das Feld-Rechteck.
pub fn load_background_image(state: &mut AppState, path: String) -> Result<()> {
    log::info!("Lade Hintergrundbild: {}", path);

    let image = BackgroundImage::load_from_file(&path)?;

    let (width, height) = image.dimensions();
    log::info!(
        "Hintergrundbild erfolgreich geladen: {}x{} Pixel",
        width,
        height
    );

    state.view.background_image = Some(Arc::new(image));
    state.view.background_visible = true;
    state.view.background_dirty = true;

    Ok(())
}

/// Schaltet die Sichtbarkeit des Hintergrundbilds um.
pub fn toggle_background_visibility(state: &mut AppState) {
    state.view.background_visible = !state.view.background_visible;
    log::info!(
        "Hintergrund-Sichtbarkeit: {}",
        if state.view.background_visible {
            "an"
        } else {
            "aus"
        }
    );
}

/// Setzt die Deckkraft des Hintergrundbilds, begrenzt auf `0.0..=1.0`.
pub fn set_background_opacity(state: &mut AppState, opacity: f32) {
    state.view.background_opacity = opacity.clamp(0.0, 1.0);
}
