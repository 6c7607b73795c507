use egui::{Color32, Pos2};
use inkpad::{BrushType, Document};

// Helper to draw one complete stroke through the public lifecycle
fn draw_stroke(document: &mut Document, points: &[Pos2]) {
    let (first, rest) = points.split_first().expect("at least one point");
    document.start_stroke(*first);
    for point in rest {
        document.add_point(*point);
    }
    document.end_stroke();
}

#[test]
fn active_points_track_the_fed_sequence() {
    let mut document = Document::new();
    let points = [
        Pos2::new(1.0, 1.0),
        Pos2::new(2.0, 2.0),
        Pos2::new(3.0, 3.0),
    ];

    document.start_stroke(points[0]);
    assert_eq!(document.active_points(), &points[..1]);

    document.add_point(points[1]);
    assert_eq!(document.active_points(), &points[..2]);

    document.add_point(points[2]);
    assert_eq!(document.active_points(), &points[..]);

    // The in-progress stroke mirrors the active sequence at each step.
    assert_eq!(document.strokes()[0].points(), &points[..]);
}

#[test]
fn start_then_end_leaves_one_finished_stroke() {
    let mut document = Document::new();
    document.start_stroke(Pos2::new(10.0, 20.0));
    assert_eq!(document.active_points(), [Pos2::new(10.0, 20.0)]);

    document.add_point(Pos2::new(30.0, 40.0));
    assert_eq!(
        document.active_points(),
        [Pos2::new(10.0, 20.0), Pos2::new(30.0, 40.0)]
    );
    assert_eq!(document.strokes()[0].points(), document.active_points());

    document.end_stroke();
    assert!(document.active_points().is_empty());
    assert_eq!(document.strokes().len(), 1);
    assert_eq!(
        document.strokes()[0].points(),
        [Pos2::new(10.0, 20.0), Pos2::new(30.0, 40.0)]
    );
}

#[test]
fn undo_and_redo_round_trip_a_stroke() {
    let mut document = Document::new();
    document.set_brush_type(BrushType::Circle);
    document.set_color(Color32::BLACK);
    document.set_brush_size(4.0);
    draw_stroke(
        &mut document,
        &[Pos2::new(5.0, 5.0), Pos2::new(6.0, 7.0), Pos2::new(8.0, 9.0)],
    );
    let original = document.strokes()[0].clone();

    document.undo();
    assert!(document.strokes().is_empty());
    assert!(document.can_redo());

    document.redo();
    assert_eq!(document.strokes().len(), 1);
    let restored = &document.strokes()[0];
    assert_eq!(restored.brush(), original.brush());
    assert_eq!(restored.color(), original.color());
    assert_eq!(restored.size(), original.size());
    assert_eq!(restored.points(), original.points());
    assert!(document.can_undo());
}

#[test]
fn redo_restores_at_the_end_of_the_list() {
    let mut document = Document::new();
    draw_stroke(&mut document, &[Pos2::new(1.0, 1.0)]);
    draw_stroke(&mut document, &[Pos2::new(2.0, 2.0)]);
    let second = document.strokes()[1].clone();

    document.undo();
    assert_eq!(document.strokes().len(), 1);
    document.redo();
    assert_eq!(document.strokes().len(), 2);
    assert_eq!(document.strokes()[1].points(), second.points());
}

#[test]
fn finishing_a_stroke_invalidates_redo() {
    let mut document = Document::new();
    draw_stroke(&mut document, &[Pos2::new(1.0, 1.0)]);
    document.undo();
    assert!(document.can_redo());

    draw_stroke(&mut document, &[Pos2::new(9.0, 9.0)]);
    assert!(!document.can_redo());

    // redo must now be a no-op
    document.redo();
    assert_eq!(document.strokes().len(), 1);
    assert_eq!(document.strokes()[0].points(), [Pos2::new(9.0, 9.0)]);
}

#[test]
fn clear_empties_strokes_and_both_stacks() {
    let mut document = Document::new();
    draw_stroke(&mut document, &[Pos2::new(1.0, 1.0)]);
    draw_stroke(&mut document, &[Pos2::new(2.0, 2.0)]);
    document.undo();
    assert!(document.can_undo());
    assert!(document.can_redo());

    document.clear();
    assert!(document.strokes().is_empty());
    assert!(!document.can_undo());
    assert!(!document.can_redo());
}

#[test]
fn empty_history_operations_are_no_ops() {
    let mut document = Document::new();
    document.undo();
    document.redo();
    document.end_stroke();

    assert!(document.strokes().is_empty());
    assert!(!document.can_undo());
    assert!(!document.can_redo());
    assert!(!document.is_drawing());
}

#[test]
fn ending_twice_records_the_stroke_once() {
    let mut document = Document::new();
    draw_stroke(&mut document, &[Pos2::new(1.0, 1.0)]);
    document.end_stroke();

    document.undo();
    assert!(document.strokes().is_empty());
    assert!(!document.can_undo());
}

#[test]
fn mid_drag_setter_changes_retag_the_active_stroke() {
    // Observed source behavior: extensions re-read the current settings, so
    // changing them mid-drag retroactively re-tags the in-progress stroke.
    let mut document = Document::new();
    document.set_brush_type(BrushType::Line);
    document.set_color(Color32::RED);

    document.start_stroke(Pos2::new(0.0, 0.0));
    document.set_color(Color32::BLUE);
    document.set_brush_size(9.0);
    document.add_point(Pos2::new(1.0, 1.0));

    let active = &document.strokes()[0];
    assert_eq!(active.color(), Color32::BLUE);
    assert_eq!(active.size(), 9.0);
    assert_eq!(active.brush(), BrushType::Line);
}

#[test]
fn reentrant_start_finishes_the_previous_stroke() {
    let mut document = Document::new();
    document.start_stroke(Pos2::new(1.0, 1.0));
    document.add_point(Pos2::new(2.0, 2.0));

    // Drag-start without a preceding end: the first stroke is frozen as-is.
    document.start_stroke(Pos2::new(50.0, 50.0));

    assert_eq!(document.strokes().len(), 2);
    assert_eq!(
        document.strokes()[0].points(),
        [Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)]
    );
    assert_eq!(document.active_points(), [Pos2::new(50.0, 50.0)]);
    assert!(document.can_undo());
}

#[test]
fn undo_mid_drag_leaves_committed_strokes_alone() {
    let mut document = Document::new();
    draw_stroke(&mut document, &[Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)]);

    // Undo arrives (e.g. via keyboard shortcut) while a second stroke is
    // still being dragged: it must not pop the active stroke.
    document.start_stroke(Pos2::new(5.0, 5.0));
    document.undo();
    document.add_point(Pos2::new(6.0, 6.0));
    document.end_stroke();

    assert_eq!(document.strokes().len(), 2);
    assert_eq!(
        document.strokes()[0].points(),
        [Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)]
    );
    assert_eq!(
        document.strokes()[1].points(),
        [Pos2::new(5.0, 5.0), Pos2::new(6.0, 6.0)]
    );
}

#[test]
fn redo_mid_drag_is_a_no_op() {
    let mut document = Document::new();
    draw_stroke(&mut document, &[Pos2::new(1.0, 1.0)]);
    document.undo();
    assert!(document.can_redo());

    document.start_stroke(Pos2::new(5.0, 5.0));
    document.redo();

    // Still only the active stroke; the parked stroke was not reinserted
    // behind it.
    assert_eq!(document.strokes().len(), 1);
    assert_eq!(document.active_points(), [Pos2::new(5.0, 5.0)]);
    assert!(document.can_redo());
}

#[test]
fn with_settings_starts_clean_at_version_zero() {
    let document = Document::with_settings(BrushType::Line, Color32::RED, 7.0);

    assert_eq!(document.brush_type(), BrushType::Line);
    assert_eq!(document.color(), Color32::RED);
    assert_eq!(document.brush_size(), 7.0);
    assert_eq!(document.version(), 0);
    assert!(document.strokes().is_empty());
}

#[test]
fn version_counter_increases_with_each_mutation() {
    let mut document = Document::new();
    let v0 = document.version();
    document.start_stroke(Pos2::new(1.0, 1.0));
    let v1 = document.version();
    document.add_point(Pos2::new(2.0, 2.0));
    let v2 = document.version();
    document.end_stroke();
    let v3 = document.version();

    assert!(v0 < v1 && v1 < v2 && v2 < v3);

    // No-ops leave the version untouched.
    document.undo();
    document.undo();
    let v4 = document.version();
    document.redo();
    document.redo();
    assert_eq!(document.version(), v4 + 1);
}
