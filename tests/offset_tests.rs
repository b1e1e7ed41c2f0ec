use swatchpad::offset::{DragState, DragTracker, Offset, PadGeometry};

fn pad() -> PadGeometry {
    PadGeometry::default()
}

#[test]
fn test_center_maps_to_zero() {
    let pad = pad();
    assert_eq!(pad.offset_at(70.0, 70.0), Offset::new(0, 0));
}

#[test]
fn test_right_edge_and_beyond_hit_max() {
    let pad = pad();
    assert_eq!(pad.offset_at(140.0, 70.0).x, 50);
    assert_eq!(pad.offset_at(131.0, 70.0).x, 50);
    assert_eq!(pad.offset_at(1000.0, 70.0).x, 50);
}

#[test]
fn test_left_and_top_edges_hit_min() {
    let pad = pad();
    assert_eq!(pad.offset_at(0.0, 0.0), Offset::new(-50, -50));
    assert_eq!(pad.offset_at(-300.0, -300.0), Offset::new(-50, -50));
}

#[test]
fn test_forward_is_linear_inside_reach() {
    let pad = pad();
    // reach = 70 - 9 = 61 pixels
    assert_eq!(pad.reach_x(), 61.0);
    assert_eq!(pad.offset_at(70.0 + 30.5, 70.0).x, 25);
    assert_eq!(pad.offset_at(70.0, 70.0 - 30.5).y, -25);
}

#[test]
fn test_inverse_then_forward_roundtrip() {
    let geometries = [
        pad(),
        PadGeometry::square(200.0, 24.0, 50),
        PadGeometry::square(41.0, 1.0, 20),
        PadGeometry {
            width: 300.0,
            height: 90.0,
            handle: 10.0,
            max_offset: 50,
        },
    ];

    for pad in geometries {
        let bound = pad.max_offset;
        for x in (-bound..=bound).step_by(3) {
            for y in [-bound, -7, 0, 13, bound] {
                let offset = Offset::new(x, y);
                let (cx, cy) = pad.handle_center(offset);
                let back = pad.offset_at(cx, cy);
                assert!(
                    (back.x - x).abs() <= 1 && (back.y - y).abs() <= 1,
                    "{pad:?}: {offset:?} came back as {back:?}"
                );
            }
        }
    }
}

#[test]
fn test_handle_stays_inside_region() {
    let pad = pad();
    for offset in [Offset::new(50, 50), Offset::new(-50, -50), Offset::new(50, -50)] {
        let (x, y) = pad.handle_origin(offset);
        assert!(x >= 0.0 && x + pad.handle <= pad.width);
        assert!(y >= 0.0 && y + pad.handle <= pad.height);
    }
}

#[test]
fn test_inverse_clamps_out_of_range_offsets() {
    let pad = pad();
    assert_eq!(
        pad.handle_origin(Offset::new(500, -500)),
        pad.handle_origin(Offset::new(50, -50))
    );
}

#[test]
fn test_drag_sequence() {
    let pad = pad();
    let mut tracker = DragTracker::new(pad, Offset::default());
    assert_eq!(tracker.state(), DragState::Idle);

    let first = tracker.pointer_down(100.0, 70.0);
    assert_eq!(first, Some(pad.offset_at(100.0, 70.0)));
    assert_eq!(first, Some(Offset::new(25, 0)));
    assert!(tracker.is_dragging());

    let second = tracker.pointer_move(40.0, 20.0);
    assert_eq!(second, Some(pad.offset_at(40.0, 20.0)));
    assert_eq!(second, Some(Offset::new(-25, -41)));

    assert_eq!(tracker.pointer_up(), None);
    assert_eq!(tracker.state(), DragState::Idle);
    assert_eq!(tracker.pointer_move(70.0, 70.0), None);
    assert_eq!(tracker.offset(), Offset::new(-25, -41));
}

#[test]
fn test_drag_continues_outside_region() {
    let mut tracker = DragTracker::new(pad(), Offset::default());
    tracker.pointer_down(70.0, 70.0);
    assert_eq!(tracker.pointer_move(-40.0, 500.0), Some(Offset::new(-50, 50)));
}

#[test]
fn test_press_outside_region_is_ignored() {
    let mut tracker = DragTracker::new(pad(), Offset::new(3, 4));
    assert_eq!(tracker.pointer_down(-5.0, 10.0), None);
    assert!(!tracker.is_dragging());
    assert_eq!(tracker.pointer_move(70.0, 70.0), None);
    assert_eq!(tracker.offset(), Offset::new(3, 4));
}

#[test]
fn test_nudge_is_clamped() {
    let mut tracker = DragTracker::new(pad(), Offset::new(48, 0));
    assert_eq!(tracker.nudge(5, -1), Offset::new(50, -1));
    assert_eq!(tracker.nudge(-200, 0), Offset::new(-50, -1));
}

#[test]
fn test_geometry_change_reclamps_offset() {
    let mut tracker = DragTracker::new(pad(), Offset::new(40, -40));
    tracker.set_geometry(PadGeometry::square(60.0, 1.0, 20));
    assert_eq!(tracker.offset(), Offset::new(20, -20));
}
