//! Tangenten-Kontinuität über Pfadgrenzen hinweg.
//!
//! Zwei Pfade gelten an einem Punkt als verbunden, solange ihre Anker
//! achsweise näher als die Toleranz beieinander liegen. Eine feste
//! Verbindungsliste gibt es nicht: jede Drag-Bewegung prüft neu.

use glam::Vec2;

use crate::core::bezier_path::{BezierPath, HandleSide};

/// Ein einzelner Drag-Schritt auf Pfad `curve`.
#[derive(Debug, Clone, Copy)]
pub(super) struct DragStep<'a> {
    pub curve: usize,
    pub index: usize,
    /// Von der lokalen Kontinuität zusätzlich verschobene Indizes
    pub changed: &'a [usize],
}

/// Achsweiser Abstand strikt kleiner als `tolerance`.
pub(super) fn is_joined(a: Vec2, b: Vec2, tolerance: f32) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}

/// Wendet Endpunkt-Verschweißung, Randregeln und den allgemeinen Abgleich an.
pub(super) fn maintain_cross_path_continuity(
    curves: &mut [BezierPath],
    step: DragStep<'_>,
    tolerance: f32,
) {
    let k = step.curve;
    let Some(len) = curves.get(k).map(BezierPath::len) else {
        return;
    };

    // Endanker gezogen: Startpunkt des Folgepfads mitführen, solange der
    // Schritt innerhalb der Toleranz bleibt
    if step.index == len - 1 && k + 1 < curves.len() {
        let last = curves[k].last();
        if is_joined(curves[k + 1].first(), last, tolerance) {
            curves[k + 1].set_point(0, last);
            log::debug!("Pfad {} an Pfad {} verschweißt", k + 1, k);
        }
    }

    // Startanker gezogen: Ausgang folgt der Richtung des Vorgängers
    if step.index == 0 && k > 0 {
        let prev = &curves[k - 1];
        let (prev_last, prev_handle) = (prev.last(), prev.second_to_last());
        let first = curves[k].first();
        if is_joined(first, prev_last, tolerance) {
            curves[k].set_point(1, first + (prev_last - prev_handle));
        }
    }

    // Letzter Handle gezogen: Ausgang des Folgepfads spiegeln
    if step.index == len - 2 && k + 1 < curves.len() {
        let last = curves[k].last();
        let dragged = curves[k].second_to_last();
        let next_first = curves[k + 1].first();
        if is_joined(next_first, last, tolerance) {
            curves[k + 1].set_point(1, next_first + (last - dragged));
        }
    }

    maintain_all_path_tangencies(curves, step, tolerance);
}

/// Richtet die Handles aller fremden Anker aus, die mit einem vom Drag
/// betroffenen Anker zusammenfallen.
///
/// Die Fahrtrichtung durch den Anker wird vom lokalen Pfad übernommen.
/// Ein fremder Handle auf der Gegenseite zeigt in Fahrtrichtung weiter,
/// einer auf derselben Seite liegt auf demselben Strahl. Fremde
/// Handle-Längen bleiben erhalten.
pub(super) fn maintain_all_path_tangencies(
    curves: &mut [BezierPath],
    step: DragStep<'_>,
    tolerance: f32,
) {
    let Some(local) = curves.get(step.curve) else {
        return;
    };

    let mut anchors: Vec<usize> = std::iter::once(step.index)
        .chain(step.changed.iter().copied())
        .filter_map(|i| local.role(i).map(|role| role.owning_anchor(i)))
        .collect();
    anchors.sort_unstable();
    anchors.dedup();

    let targets: Vec<(Vec2, Vec2)> = anchors
        .into_iter()
        .filter_map(|anchor| {
            let heading = anchor_heading(local, anchor, step.index)?;
            Some((local.points()[anchor], heading))
        })
        .collect();

    for (joint, heading) in targets {
        for (ci, curve) in curves.iter_mut().enumerate() {
            if ci == step.curve {
                continue;
            }
            align_joined_anchors(curve, joint, heading, tolerance);
        }
    }
}

/// Fahrtrichtung durch `anchor`, bevorzugt vom gezogenen Handle abgeleitet.
fn anchor_heading(path: &BezierPath, anchor: usize, dragged: usize) -> Option<Vec2> {
    let handles = path.anchor_handles(anchor);
    let driving = handles
        .iter()
        .find(|(index, _)| *index == dragged)
        .or_else(|| handles.first())?;
    let (index, side) = *driving;
    let anchor_pos = path.points()[anchor];
    let handle_pos = path.points()[index];
    let raw = match side {
        HandleSide::Before => anchor_pos - handle_pos,
        HandleSide::After => handle_pos - anchor_pos,
    };
    raw.try_normalize()
}

fn align_joined_anchors(curve: &mut BezierPath, joint: Vec2, heading: Vec2, tolerance: f32) {
    for anchor in (0..curve.len()).step_by(3) {
        let anchor_pos = curve.points()[anchor];
        if !is_joined(anchor_pos, joint, tolerance) {
            continue;
        }
        for (index, side) in curve.anchor_handles(anchor) {
            let length = curve.points()[index].distance(anchor_pos);
            curve.set_point(index, anchor_pos + side.heading_sign() * heading * length);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bezier_path::PathColor;
    use approx::assert_relative_eq;

    fn path(points: [Vec2; 4]) -> BezierPath {
        BezierPath::new(points, PathColor::default())
    }

    #[test]
    fn test_is_joined_strikt_und_achsweise() {
        let a = Vec2::new(100.0, 100.0);
        assert!(is_joined(a, Vec2::new(104.9, 95.1), 5.0));
        assert!(!is_joined(a, Vec2::new(105.0, 100.0), 5.0));
        assert!(!is_joined(a, Vec2::new(100.0, 94.0), 5.0));
        // Chebyshev-Box, nicht euklidisch
        assert!(is_joined(a, Vec2::new(104.0, 104.0), 5.0));
    }

    #[test]
    fn test_gegenseitige_handles_werden_kollinear_durch_gelenk() {
        let joint = Vec2::new(300.0, 300.0);
        let mut curves = vec![
            path([
                Vec2::new(100.0, 300.0),
                Vec2::new(150.0, 250.0),
                Vec2::new(250.0, 260.0),
                joint,
            ]),
            path([
                joint,
                Vec2::new(300.0, 400.0),
                Vec2::new(450.0, 350.0),
                Vec2::new(500.0, 300.0),
            ]),
        ];
        let step = DragStep {
            curve: 0,
            index: 2,
            changed: &[],
        };
        maintain_all_path_tangencies(&mut curves, step, 5.0);

        let incoming = joint - curves[0].points()[2];
        let outgoing = curves[1].points()[1] - joint;
        assert_relative_eq!(incoming.perp_dot(outgoing), 0.0, epsilon = 1e-2);
        assert!(incoming.dot(outgoing) > 0.0);
        assert_relative_eq!(outgoing.length(), 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_gleichseitige_handles_liegen_auf_demselben_strahl() {
        let joint = Vec2::new(300.0, 300.0);
        let mut curves = vec![
            path([
                Vec2::new(100.0, 300.0),
                Vec2::new(150.0, 250.0),
                Vec2::new(260.0, 270.0),
                joint,
            ]),
            path([
                Vec2::new(500.0, 500.0),
                Vec2::new(450.0, 500.0),
                Vec2::new(300.0, 360.0),
                joint,
            ]),
        ];
        let step = DragStep {
            curve: 0,
            index: 2,
            changed: &[],
        };
        maintain_all_path_tangencies(&mut curves, step, 5.0);

        let local = (curves[0].points()[2] - joint).normalize();
        let foreign = curves[1].points()[2] - joint;
        assert_relative_eq!(foreign.length(), 60.0, epsilon = 1e-3);
        assert_relative_eq!(foreign.normalize().dot(local), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_gleicher_pfad_wird_nicht_abgeglichen() {
        let mut curves = vec![BezierPath::from_points(
            vec![
                Vec2::new(100.0, 100.0),
                Vec2::new(200.0, 50.0),
                Vec2::new(200.0, 150.0),
                Vec2::new(100.0, 100.0),
                Vec2::new(50.0, 50.0),
                Vec2::new(50.0, 150.0),
                Vec2::new(100.0, 100.0),
            ],
            PathColor::default(),
        )
        .expect("gültige Punktanzahl")];
        let before = curves[0].clone();
        let step = DragStep {
            curve: 0,
            index: 1,
            changed: &[],
        };
        maintain_all_path_tangencies(&mut curves, step, 5.0);
        assert_eq!(curves[0], before);
    }

    fn welded_pair(last: Vec2) -> Vec<BezierPath> {
        vec![
            path([
                Vec2::new(100.0, 300.0),
                Vec2::new(150.0, 250.0),
                Vec2::new(250.0, 300.0),
                last,
            ]),
            path([
                Vec2::new(300.0, 300.0),
                Vec2::new(350.0, 300.0),
                Vec2::new(450.0, 350.0),
                Vec2::new(500.0, 300.0),
            ]),
        ]
    }

    const END_ANCHOR: DragStep<'static> = DragStep {
        curve: 0,
        index: 3,
        changed: &[],
    };

    #[test]
    fn test_kleiner_schritt_fuehrt_folgepfad_mit() {
        let mut curves = welded_pair(Vec2::new(303.0, 296.0));
        maintain_cross_path_continuity(&mut curves, END_ANCHOR, 5.0);
        assert_eq!(curves[1].first(), Vec2::new(303.0, 296.0));
    }

    #[test]
    fn test_grosser_schritt_loest_verbindung() {
        let mut curves = welded_pair(Vec2::new(320.0, 300.0));
        let before = curves[1].clone();
        maintain_cross_path_continuity(&mut curves, END_ANCHOR, 5.0);
        assert_eq!(curves[1], before);
    }
}
