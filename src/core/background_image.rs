//! Hintergrundbild des Spielfelds.

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, ImageReader, RgbaImage};
use std::io::BufReader;

/// Hintergrundbild (quadratisch zugeschnitten, RGBA8).
pub struct BackgroundImage {
    /// Bilddaten nach dem Zuschnitt
    image_data: RgbaImage,
    /// Herkunft (Dateipfad) für Anzeige und Log
    source: String,
}

impl BackgroundImage {
    /// Lädt ein Hintergrundbild aus einer Datei.
    ///
    /// Unterstützte Formate: PNG, JPG, JPEG
    pub fn load_from_file(path: &str) -> Result<Self> {
        // Erst über die Dateiendung, bei Fehlschlag über die Magic Bytes
        let image = match image::open(path) {
            Ok(img) => img,
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Erkennung via Dateiinhalt...",
                    path, ext_err
                );
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Datei nicht gefunden: {}", path))?;
                let reader = ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .with_context(|| format!("Format-Erkennung fehlgeschlagen für: {}", path))?;
                reader
                    .decode()
                    .with_context(|| format!("Fehler beim Dekodieren des Hintergrundbilds: {}", path))?
            }
        };

        Ok(Self::from_image(image, path))
    }

    /// Erstellt ein Hintergrundbild aus einem bereits dekodierten Bild.
    ///
    /// Nicht-quadratische Bilder werden mittig auf die kürzere Kante zugeschnitten.
    pub fn from_image(image: DynamicImage, source: &str) -> Self {
        let (width, height) = image.dimensions();
        let image = Self::center_square(image);
        let (side, _) = image.dimensions();
        log::info!(
            "Hintergrundbild geladen: {}x{} Pixel von '{}' (Zuschnitt {}x{})",
            width,
            height,
            source,
            side,
            side
        );
        Self {
            image_data: image.to_rgba8(),
            source: source.to_string(),
        }
    }

    fn center_square(image: DynamicImage) -> DynamicImage {
        let (width, height) = image.dimensions();
        if width == height {
            return image;
        }
        let side = width.min(height);
        let (x, y) = square_crop_origin(width, height);
        image.crop_imm(x, y, side, side)
    }

    /// Pixeldaten als RGBA8.
    pub fn rgba(&self) -> &RgbaImage {
        &self.image_data
    }

    /// Breite und Höhe in Pixeln.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image_data.dimensions()
    }

    /// Dateipfad, aus dem das Bild geladen wurde.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Linke obere Ecke eines mittigen quadratischen Zuschnitts.
fn square_crop_origin(width: u32, height: u32) -> (u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2)
}
