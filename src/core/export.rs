//! Text-Export eines Pfads als Koordinaten-Programm.
//!
//! Format je Segment (Feld-Einheiten, eine Nachkommastelle):
//! ```text
//! Path p0(x0,y0, x1,y1, x2,y2, x3,y3);
//! p0 += Path(x0,y0, x1,y1, x2,y2, x3,y3);
//! ```

use glam::Vec2;

use super::bezier_path::BezierPath;
use super::field_mapping::CoordinateMapping;

/// Exportiert alle Segmente von `curve` unter dem Namen `name`.
pub fn export_path(curve: &BezierPath, name: &str, mapping: &impl CoordinateMapping) -> String {
    let mut out = String::new();
    for (i, segment) in curve.segments().enumerate() {
        let coords = segment
            .iter()
            .map(|p| format_pair(mapping.to_field(*p)))
            .collect::<Vec<_>>()
            .join(", ");
        let line = if i == 0 {
            format!("Path {name}({coords});\n")
        } else {
            format!("{name} += Path({coords});\n")
        };
        out.push_str(&line);
    }
    out
}

fn format_pair(p: Vec2) -> String {
    format!("{:.1},{:.1}", round_tenth(p.x), round_tenth(p.y))
}

/// Rundet auf eine Nachkommastelle (Hälften von Null weg) und ersetzt `-0.0` durch `0.0`.
fn round_tenth(v: f32) -> f32 {
    let rounded = (v * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formatiert eine Koordinate für die Statusanzeige.
///
/// Rechtsbündig in Breite 5 mit einer Nachkommastelle, das Vorzeichen
/// direkt vor der Zahl; nicht-endliche Werte werden als `---.-` dargestellt.
pub fn format_coordinate(v: f32) -> String {
    if !v.is_finite() {
        return "---.-".to_string();
    }
    format!("{:>5.1}", round_tenth(v))
}
