use super::*;
use proptest::prelude::*;

const CONTAINER: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);

/// Horizontal span of a `width` x `height` frame placed at `final_x` and
/// rotated by `rotation_deg` around its center.
fn rotated_span(final_x: f64, width: f64, height: f64, rotation_deg: f64) -> (f64, f64) {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let half_extent = (width * cos.abs() + height * sin.abs()) / 2.0;
    let center_x = final_x + width / 2.0;
    (center_x - half_extent, center_x + half_extent)
}

fn tall_card() -> FrameGeometry {
    let bounds = Rect::new(100.0, 200.0, 200.0, 400.0);
    FrameGeometry::capture(bounds, bounds.center(), CONTAINER).expect("valid geometry")
}

fn card() -> FrameGeometry {
    // 200 wide, so the half width is 100.
    let bounds = Rect::new(100.0, 200.0, 200.0, 300.0);
    FrameGeometry::capture(bounds, bounds.center(), CONTAINER).expect("valid geometry")
}

#[test]
fn capture_records_snapshot() {
    let geometry = card();
    assert_eq!(geometry.width(), 200.0);
    assert_eq!(geometry.height(), 300.0);
    assert_eq!(geometry.half_width(), 100.0);
    assert_eq!(geometry.origin(), Point::new(100.0, 200.0));
    assert_eq!(geometry.center(), Point::new(200.0, 350.0));
    assert_eq!(geometry.container(), CONTAINER);
}

#[test]
fn capture_rejects_degenerate_width() {
    let center = Point::new(0.0, 0.0);
    assert_eq!(
        FrameGeometry::capture(Rect::new(0.0, 0.0, 0.0, 10.0), center, CONTAINER),
        Err(GeometryError::NonPositiveWidth(0.0))
    );
    assert_eq!(
        FrameGeometry::capture(Rect::new(0.0, 0.0, -5.0, 10.0), center, CONTAINER),
        Err(GeometryError::NonPositiveWidth(-5.0))
    );
    assert_eq!(
        FrameGeometry::capture(Rect::new(0.0, 0.0, 10.0, 0.0), center, CONTAINER),
        Err(GeometryError::NonPositiveHeight(0.0))
    );
}

#[test]
fn capture_rejects_non_finite_input() {
    let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(
        FrameGeometry::capture(Rect::new(0.0, 0.0, f64::NAN, 10.0), bounds.center(), CONTAINER),
        Err(GeometryError::NonFinite {
            field: "frame_bounds"
        })
    );
    assert_eq!(
        FrameGeometry::capture(bounds, Point::new(f64::INFINITY, 0.0), CONTAINER),
        Err(GeometryError::NonFinite {
            field: "original_center"
        })
    );
    assert_eq!(
        FrameGeometry::capture(bounds, bounds.center(), Rect::new(0.0, 0.0, f64::NAN, 1.0)),
        Err(GeometryError::NonFinite { field: "container" })
    );
}

#[test]
fn touch_zone_splits_at_half_height() {
    let geometry = card();
    assert_eq!(geometry.touch_zone(0.0), TouchZone::Top);
    assert_eq!(geometry.touch_zone(150.0), TouchZone::Top);
    assert_eq!(geometry.touch_zone(150.5), TouchZone::Bottom);
    assert_eq!(geometry.touch_zone(300.0), TouchZone::Bottom);
}

#[test]
fn transform_follows_drag_and_tilts_with_progress() {
    let geometry = card();
    let update = geometry.compute_transform(50.0, -20.0, 15.0);
    assert_eq!(update.x, 150.0);
    assert_eq!(update.y, 180.0);
    assert_eq!(update.progress, 0.5);
    assert_eq!(update.rotation_deg, 7.5);
    assert_eq!(update.position(), Point::new(150.0, 180.0));
}

#[test]
fn transform_rotation_saturates_with_progress() {
    let geometry = card();
    let update = geometry.compute_transform(-350.0, 0.0, 15.0);
    assert_eq!(update.x, -250.0);
    assert_eq!(update.progress, -1.0);
    assert_eq!(update.rotation_deg, -15.0);
}

#[test]
fn recenter_targets_captured_origin() {
    let target = card().recenter_target();
    assert_eq!(
        target,
        ExitTarget {
            final_x: 100.0,
            final_y: 200.0,
            final_rotation_deg: 0.0,
        }
    );
}

#[test]
fn exit_targets_clear_the_container() {
    let geometry = card();
    let current = Point::new(260.0, 240.0);

    let right = geometry.right_exit_target(current, 15.0);
    assert!(right.final_x > CONTAINER.right());
    let right_frame = Rect::new(right.final_x, right.final_y, 200.0, 300.0);
    assert!(!right_frame.intersects(&CONTAINER));
    assert_eq!(right.final_y, 240.0);
    assert_eq!(right.final_rotation_deg, 30.0);

    let left = geometry.left_exit_target(current, -15.0);
    assert!(left.final_x + geometry.width() < CONTAINER.x);
    assert_eq!(left.final_y, 240.0);
    assert_eq!(left.final_rotation_deg, -30.0);
}

#[test]
fn tilted_tall_card_exits_clear_of_the_container() {
    let geometry = tall_card();
    let current = Point::new(160.0, 200.0);

    let right = geometry.right_exit_target(current, 15.0);
    let (right_left_edge, _) = rotated_span(right.final_x, 200.0, 400.0, right.final_rotation_deg);
    assert!(
        right_left_edge >= CONTAINER.right() - 1e-9,
        "rotated left edge {right_left_edge} overlaps the container"
    );

    let left = geometry.left_exit_target(current, -15.0);
    let (_, left_right_edge) = rotated_span(left.final_x, 200.0, 400.0, left.final_rotation_deg);
    assert!(
        left_right_edge <= CONTAINER.x + 1e-9,
        "rotated right edge {left_right_edge} overlaps the container"
    );
}

#[test]
fn untilted_exit_sits_just_outside_the_container() {
    let geometry = tall_card();
    let current = Point::new(160.0, 200.0);
    assert_eq!(geometry.right_exit_target(current, 0.0).final_x, CONTAINER.right());
    assert_eq!(geometry.left_exit_target(current, 0.0).final_x, CONTAINER.x - 200.0);
}

#[test]
fn exit_margin_pushes_target_further_out() {
    let geometry = card();
    let current = Point::new(0.0, 200.0);
    let right = geometry.right_exit_target(current, 10.0);
    let right_margin = geometry.right_exit_target_with_margin(current, 10.0, 25.0);
    assert_eq!(right_margin.final_x, right.final_x + 25.0);
    assert_eq!(right_margin.final_y, right.final_y);

    let left = geometry.left_exit_target(current, 10.0);
    let left_margin = geometry.left_exit_target_with_margin(current, 10.0, 25.0);
    assert_eq!(left_margin.final_x, left.final_x - 25.0);
    assert_eq!(left_margin.final_rotation_deg, left.final_rotation_deg);
}

proptest! {
    #[test]
    fn exit_targets_clear_the_container_at_any_tilt(
        width in 1.0f64..600.0,
        height in 1.0f64..1200.0,
        rotation_factor in -90.0f64..90.0,
    ) {
        let bounds = Rect::new(100.0, 200.0, width, height);
        let geometry = FrameGeometry::capture(bounds, bounds.center(), CONTAINER)
            .expect("valid geometry");
        let current = Point::new(150.0, 250.0);

        let right = geometry.right_exit_target(current, rotation_factor);
        let (right_left_edge, _) =
            rotated_span(right.final_x, width, height, right.final_rotation_deg);
        prop_assert!(right_left_edge >= CONTAINER.right() - 1e-6);

        let left = geometry.left_exit_target(current, rotation_factor);
        let (_, left_right_edge) =
            rotated_span(left.final_x, width, height, left.final_rotation_deg);
        prop_assert!(left_right_edge <= CONTAINER.x + 1e-6);
    }

    #[test]
    fn progress_saturates_beyond_half_width(dx in 100.0f64..1.0e6) {
        let geometry = card();
        prop_assert_eq!(geometry.scroll_progress(dx), 1.0);
        prop_assert_eq!(geometry.scroll_progress(-dx), -1.0);
    }

    #[test]
    fn progress_is_exact_ratio_within_half_width(dx in -99.999f64..99.999) {
        let geometry = card();
        prop_assert_eq!(geometry.scroll_progress(dx), dx / 100.0);
    }

    #[test]
    fn transform_progress_matches_scroll_progress(
        dx in -1000.0f64..1000.0,
        dy in -1000.0f64..1000.0,
    ) {
        let geometry = card();
        let update = geometry.compute_transform(dx, dy, 12.0);
        prop_assert_eq!(update.progress, geometry.scroll_progress(dx));
        prop_assert!((-1.0..=1.0).contains(&update.progress));
        prop_assert_eq!(update.rotation_deg, 12.0 * update.progress);
    }
}
