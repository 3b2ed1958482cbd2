use super::*;
use crate::core::bezier_path::MIN_PATH_POINTS;
use approx::assert_relative_eq;

fn assert_all_valid(set: &CurveSet) {
    assert!(set.curve_count() >= 1);
    assert!(set.active_index() < set.curve_count());
    for curve in set.curves() {
        assert!(curve.len() >= MIN_PATH_POINTS);
        assert_eq!((curve.len() - 1) % 3, 0);
    }
}

/// Zieht Punkt `index` von Pfad `curve` in Schritten von höchstens 2 Pixeln nach `to`.
fn drag_point(set: &mut CurveSet, curve: usize, index: usize, to: Vec2) {
    let from = set.curve(curve).expect("Pfad vorhanden").points()[index];
    let steps = ((to - from).abs().max_element() / 2.0).ceil().max(1.0) as usize;
    drag_point_in_steps(set, curve, index, to, steps);
}

fn drag_point_in_steps(set: &mut CurveSet, curve: usize, index: usize, to: Vec2, steps: usize) {
    let from = set.curve(curve).expect("Pfad vorhanden").points()[index];
    assert!(set.handle_drag_start(from));
    assert_eq!(
        set.drag_state().map(|d| (d.curve, d.index)),
        Some((curve, index)),
        "falscher Punkt getroffen"
    );
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        assert!(set.handle_drag_move(from.lerp(to, t)));
    }
    assert!(set.handle_drag_end());
}

// ── Lebenszyklus ────────────────────────────────────────────────────

#[test]
fn test_neue_menge_hat_standardpfad() {
    let set = CurveSet::default();
    assert_eq!(set.curve_count(), 1);
    assert_eq!(set.active_index(), 0);
    assert!(!set.is_dragging());
    assert_eq!(
        set.active_curve().points(),
        &[
            Vec2::new(240.0, 560.0),
            Vec2::new(320.0, 240.0),
            Vec2::new(560.0, 480.0),
            Vec2::new(560.0, 240.0),
        ]
    );
    assert_eq!(set.active_curve().color(), PathColor::from_hue(0.0));
}

#[test]
fn test_add_curve_fuegt_hinter_aktivem_ein() {
    let mut set = CurveSet::default();
    assert_eq!(set.add_curve(), 1);
    assert_eq!(set.add_curve(), 2);
    assert!(set.set_active_curve(0));
    assert_eq!(set.add_curve(), 1);
    assert_eq!(set.curve_count(), 4);
    assert_eq!(set.active_index(), 1);

    let inserted = set.active_curve();
    assert_eq!(inserted.first(), Vec2::new(320.0, 640.0));
    assert_relative_eq!(inserted.color().hue, 67.0);
    assert_eq!(inserted.color().lightness, PathColor::LIGHTNESS);
    assert_all_valid(&set);
}

#[test]
fn test_add_curve_hue_modulo_360() {
    let mut set = CurveSet::default();
    for _ in 0..6 {
        set.add_curve();
    }
    // 67 * 6 = 402 → 42
    assert_relative_eq!(set.active_curve().color().hue, 42.0);
}

#[test]
fn test_delete_active_waehlt_vorgaenger() {
    let mut set = CurveSet::default();
    set.add_curve();
    set.add_curve();
    set.delete_active_curve();
    assert_eq!(set.curve_count(), 2);
    assert_eq!(set.active_index(), 1);

    set.set_active_curve(0);
    set.delete_active_curve();
    assert_eq!(set.curve_count(), 1);
    assert_eq!(set.active_index(), 0);
}

#[test]
fn test_delete_einzigen_pfad_erzeugt_standardpfad() {
    let mut set = CurveSet::default();
    set.add_segment();
    assert_eq!(set.active_curve().len(), 7);
    set.delete_active_curve();
    assert_eq!(set.curve_count(), 1);
    assert_eq!(set.active_index(), 0);
    assert_eq!(set.active_curve().len(), 4);
    assert_eq!(set.active_curve(), CurveSet::default().active_curve());
}

#[test]
fn test_set_active_ausserhalb_ist_noop() {
    let mut set = CurveSet::default();
    set.add_curve();
    assert!(!set.set_active_curve(2));
    assert_eq!(set.active_index(), 1);
    assert!(set.set_active_curve(0));
    assert_eq!(set.active_index(), 0);
}

#[test]
fn test_reset_verwirft_alle_pfade() {
    let mut set = CurveSet::default();
    set.add_curve();
    set.add_segment();
    set.reset();
    assert_eq!(set.curve_count(), 1);
    assert_eq!(set.active_curve().len(), 4);
}

// ── Segmente ────────────────────────────────────────────────────────

#[test]
fn test_add_segment_szenario_standardkurve() {
    let mut set = CurveSet::default();
    let old_handle = set.active_curve().second_to_last();
    let old_last = set.active_curve().last();
    set.add_segment();

    let curve = set.active_curve();
    assert_eq!(curve.len(), 7);
    let new_handle = curve.points()[4];
    let ray = (old_last - old_handle).normalize();
    let offset = new_handle - old_last;
    assert_relative_eq!(offset.normalize().dot(ray), 1.0, epsilon = 1e-5);
    assert_relative_eq!(offset.length(), set.config().segment.handle_length, epsilon = 1e-3);
}

#[test]
fn test_delete_last_segment_meldet_ergebnis() {
    let mut set = CurveSet::default();
    assert!(!set.delete_last_segment());
    set.add_segment();
    assert!(set.delete_last_segment());
    assert_eq!(set.active_curve().len(), 4);
}

#[test]
fn test_delete_last_segment_beendet_veralteten_drag() {
    let mut set = CurveSet::default();
    set.add_segment();
    let last = set.active_curve().last();
    assert!(set.handle_drag_start(last));
    assert!(set.delete_last_segment());
    assert!(!set.is_dragging());
    assert!(!set.handle_drag_move(Vec2::new(100.0, 100.0)));
}

// ── Drag-Zustandsmaschine ───────────────────────────────────────────

#[test]
fn test_drag_start_auf_punkt_aktiviert_pfad() {
    let mut set = CurveSet::default();
    set.add_curve();
    set.set_active_curve(1);
    let target = set.curve(0).expect("Pfad 0").points()[2] + Vec2::new(3.0, -2.0);
    assert!(set.handle_drag_start(target));
    let drag = set.drag_state().expect("Drag aktiv");
    assert_eq!((drag.curve, drag.index), (0, 2));
    assert_eq!(drag.offset, Vec2::new(3.0, -2.0));
    assert_eq!(set.active_index(), 0);
}

#[test]
fn test_drag_offset_bleibt_relativ() {
    let mut set = CurveSet::default();
    let handle = set.active_curve().points()[1];
    assert!(set.handle_drag_start(handle + Vec2::new(4.0, 4.0)));
    assert!(set.handle_drag_move(handle + Vec2::new(54.0, 24.0)));
    assert_eq!(set.active_curve().points()[1], handle + Vec2::new(50.0, 20.0));
}

#[test]
fn test_drag_start_auf_kurve_wechselt_nur_aktiven_pfad() {
    let mut set = CurveSet::default();
    set.add_curve();
    let curve0 = set.curve(0).expect("Pfad 0").clone();
    let [p0, p1, p2, p3] = curve0.segments().next().expect("Segment");
    let on_curve = cubic_bezier_point(p0, p1, p2, p3);
    assert_eq!(set.hover(on_curve), HoverTarget::Curve(0));

    assert!(set.handle_drag_start(on_curve));
    assert_eq!(set.active_index(), 0);
    assert!(!set.is_dragging());
}

fn cubic_bezier_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    crate::core::bezier_path::cubic_bezier(p0, p1, p2, p3, 0.5)
}

#[test]
fn test_drag_start_ins_leere_wird_nicht_verbraucht() {
    let mut set = CurveSet::default();
    let before = set.active_curve().clone();
    assert!(!set.handle_drag_start(Vec2::new(20.0, 20.0)));
    assert_eq!(set.hover(Vec2::new(20.0, 20.0)), HoverTarget::Empty);
    assert_eq!(set.active_curve(), &before);
}

#[test]
fn test_klick_fuegt_punkt_hinzu_wenn_konfiguriert() {
    let config = CurveSetConfig {
        click_adds_point: true,
        ..CurveSetConfig::default()
    };
    let mut set = CurveSet::new(config);
    assert!(set.handle_drag_start(Vec2::new(700.0, 700.0)));
    assert_eq!(set.active_curve().len(), 7);
    assert_eq!(set.active_curve().last(), Vec2::new(700.0, 700.0));
    assert!(!set.is_dragging());
}

#[test]
fn test_move_ohne_drag_ist_hover() {
    let mut set = CurveSet::default();
    let before = set.active_curve().clone();
    assert!(!set.handle_drag_move(Vec2::new(240.0, 560.0)));
    assert_eq!(set.active_curve(), &before);
    assert_eq!(
        set.hover(Vec2::new(240.0, 560.0)),
        HoverTarget::Point { curve: 0, index: 0 }
    );
}

#[test]
fn test_drag_wird_am_rand_begrenzt() {
    let mut set = CurveSet::default();
    let first = set.active_curve().first();
    assert!(set.handle_drag_start(first));
    set.handle_drag_move(Vec2::new(-100.0, 2000.0));
    assert_eq!(set.active_curve().first(), Vec2::new(2.0, 798.0));
    set.handle_drag_move(Vec2::new(900.0, -5.0));
    assert_eq!(set.active_curve().first(), Vec2::new(798.0, 2.0));
}

#[test]
fn test_drag_end_ohne_drag_meldet_false() {
    let mut set = CurveSet::default();
    assert!(!set.handle_drag_end());
}

#[test]
fn test_verlassen_behaelt_drag_standardmaessig() {
    let mut set = CurveSet::default();
    let first = set.active_curve().first();
    set.handle_drag_start(first);
    assert!(!set.handle_pointer_leave());
    assert!(set.is_dragging());
}

#[test]
fn test_verlassen_bricht_drag_ab_wenn_konfiguriert() {
    let config = CurveSetConfig {
        leave_behavior: LeaveBehavior::CancelDrag,
        ..CurveSetConfig::default()
    };
    let mut set = CurveSet::new(config);
    let first = set.active_curve().first();
    set.handle_drag_start(first);
    assert!(set.handle_pointer_leave());
    assert!(!set.is_dragging());
}

#[test]
fn test_anker_drag_haelt_kontinuitaet() {
    let mut set = CurveSet::default();
    set.add_segment();
    drag_point(&mut set, 0, 3, Vec2::new(500.0, 300.0));

    let points = set.active_curve().points();
    let anchor = points[3];
    assert_eq!(anchor, Vec2::new(500.0, 300.0));
    let d_before = points[2].distance(anchor);
    let d_after = points[4].distance(anchor);
    assert_relative_eq!(d_before, d_after, epsilon = 1e-3);
    let cross = (anchor - points[2]).perp_dot(points[4] - anchor);
    assert_relative_eq!(cross, 0.0, epsilon = 1e-1);
    assert_all_valid(&set);
}

#[test]
fn test_handle_drag_spiegelt_exakt() {
    let mut set = CurveSet::default();
    set.add_segment();
    drag_point(&mut set, 0, 4, Vec2::new(650.0, 150.0));
    let points = set.active_curve().points();
    assert_eq!(points[2], 2.0 * points[3] - points[4]);
}

#[test]
fn test_mirror_only_laesst_laengen_frei() {
    let config = CurveSetConfig {
        continuity: ContinuityPolicy::MirrorOnly,
        ..CurveSetConfig::default()
    };
    let mut set = CurveSet::new(config);
    set.add_segment();
    drag_point(&mut set, 0, 3, Vec2::new(500.0, 300.0));
    let points = set.active_curve().points();
    assert_eq!(points[4], 2.0 * points[3] - points[2]);
}

// ── Pfadübergreifende Kontinuität ───────────────────────────────────

/// Zwei Pfade, bei denen Pfad 1 am Endpunkt von Pfad 0 beginnt.
fn joined_pair() -> CurveSet {
    let mut set = CurveSet::default();
    set.add_curve();
    let joint = set.curve(0).expect("Pfad 0").last();
    let first = set.curve(1).expect("Pfad 1").first();
    // Startpunkt von Pfad 1 auf das Gelenk ziehen
    drag_point(&mut set, 1, 0, joint);
    assert_eq!(set.curve(1).expect("Pfad 1").first(), joint);
    assert_ne!(first, joint);
    set
}

#[test]
fn test_letzter_handle_steuert_ausgang_des_folgepfads() {
    let mut set = joined_pair();
    let joint = set.curve(0).expect("Pfad 0").last();
    let handle_index = set.curve(0).expect("Pfad 0").len() - 2;
    drag_point(&mut set, 0, handle_index, Vec2::new(500.0, 300.0));

    let a = set.curve(0).expect("Pfad 0");
    let b = set.curve(1).expect("Pfad 1");
    let incoming = (a.last() - a.second_to_last()).normalize();
    let outgoing = (b.points()[1] - b.first()).normalize();
    assert_eq!(b.first(), joint);
    assert_relative_eq!(incoming.dot(outgoing), 1.0, epsilon = 1e-4);
}

#[test]
fn test_grosser_gelenk_schritt_trennt_pfade() {
    let mut set = joined_pair();
    let joint = set.curve(0).expect("Pfad 0").last();
    let last = set.curve(0).expect("Pfad 0").len() - 1;

    drag_point_in_steps(&mut set, 0, last, joint + Vec2::new(150.0, -200.0), 1);
    assert_eq!(set.curve(0).expect("Pfad 0").last(), joint + Vec2::new(150.0, -200.0));
    assert_eq!(set.curve(1).expect("Pfad 1").first(), joint);

    // Der freigegebene Startpunkt von Pfad 1 ist nun direkt greifbar
    assert!(set.handle_drag_start(joint));
    assert_eq!(set.drag_state().map(|d| (d.curve, d.index)), Some((1, 0)));
    assert!(set.handle_drag_end());
}

#[test]
fn test_getrennte_pfade_werden_nicht_abgeglichen() {
    let mut set = joined_pair();
    let joint = set.curve(0).expect("Pfad 0").last();
    let last = set.curve(0).expect("Pfad 0").len() - 1;
    drag_point_in_steps(&mut set, 0, last, joint + Vec2::new(150.0, -200.0), 1);
    let b_before = set.curve(1).expect("Pfad 1").clone();

    let handle_index = set.curve(0).expect("Pfad 0").len() - 2;
    drag_point(&mut set, 0, handle_index, Vec2::new(500.0, 300.0));
    assert_eq!(set.curve(1).expect("Pfad 1"), &b_before);
}

#[test]
fn test_knapp_innerhalb_der_toleranz_wird_abgeglichen() {
    let mut set = joined_pair();
    let joint = set.curve(1).expect("Pfad 1").first();
    set.curves[1].set_point(0, joint + Vec2::new(4.0, -4.0));

    let handle_index = set.curve(0).expect("Pfad 0").len() - 2;
    drag_point(&mut set, 0, handle_index, Vec2::new(500.0, 300.0));
    let a = set.curve(0).expect("Pfad 0");
    let b = set.curve(1).expect("Pfad 1");
    let incoming = (a.last() - a.second_to_last()).normalize();
    let outgoing = (b.points()[1] - b.first()).normalize();
    assert_relative_eq!(incoming.dot(outgoing), 1.0, epsilon = 1e-4);
}

#[test]
fn test_endanker_drag_verschweisst_folgepfad() {
    let mut set = joined_pair();
    let last = set.curve(0).expect("Pfad 0").len() - 1;
    drag_point(&mut set, 0, last, Vec2::new(600.0, 200.0));
    assert_eq!(set.curve(0).expect("Pfad 0").last(), Vec2::new(600.0, 200.0));
    assert_eq!(set.curve(1).expect("Pfad 1").first(), Vec2::new(600.0, 200.0));
}

#[test]
fn test_startpunkt_drag_uebernimmt_richtung_des_vorgaengers() {
    let set = joined_pair();
    let a = set.curve(0).expect("Pfad 0");
    let b = set.curve(1).expect("Pfad 1");
    let incoming = (a.last() - a.second_to_last()).normalize();
    let outgoing = (b.points()[1] - b.first()).normalize();
    assert_relative_eq!(incoming.dot(outgoing), 1.0, epsilon = 1e-4);
}

#[test]
fn test_letzter_handle_spiegelt_durch_gelenk() {
    let mut set = joined_pair();
    let handle_index = set.curve(0).expect("Pfad 0").len() - 2;
    drag_point(&mut set, 0, handle_index, Vec2::new(320.0, 240.0));

    let a = set.curve(0).expect("Pfad 0");
    let b = set.curve(1).expect("Pfad 1");
    let mirrored = 2.0 * a.last() - a.second_to_last();
    assert_relative_eq!(b.points()[1].x, mirrored.x, epsilon = 1e-2);
    assert_relative_eq!(b.points()[1].y, mirrored.y, epsilon = 1e-2);
}

#[test]
fn test_invariante_ueber_viele_drags() {
    let mut set = joined_pair();
    set.set_active_curve(1);
    set.add_segment();
    let targets = [
        Vec2::new(100.0, 100.0),
        Vec2::new(700.0, 650.0),
        Vec2::new(400.0, 400.0),
        Vec2::new(10.0, 790.0),
    ];
    for (i, target) in targets.iter().enumerate() {
        let curve = i % 2;
        let len = set.curve(curve).expect("Pfad").len();
        let index = (i * 2 + 1) % len;
        let from = set.curve(curve).expect("Pfad").points()[index];
        set.handle_drag_start(from);
        set.handle_drag_move(*target);
        set.handle_drag_end();
        assert_all_valid(&set);
    }
}

// ── Export ──────────────────────────────────────────────────────────

#[test]
fn test_export_active_nutzt_aktiven_index() {
    let mut set = CurveSet::default();
    let mapping = FieldMapping::default();
    assert_eq!(
        set.export_active(&mapping),
        "Path p0(36.0,36.0, 54.0,108.0, 108.0,54.0, 108.0,108.0);\n"
    );
    set.add_curve();
    assert!(set.export_active(&mapping).starts_with("Path p1("));
}
