#![allow(clippy::float_cmp)]

use super::*;
use crate::hit::{Corner, EndPoint, HitPart};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// distance
// =============================================================

#[test]
fn distance_zero_for_same_point() {
    assert_eq!(distance(pt(3.0, 4.0), pt(3.0, 4.0)), 0.0);
}

#[test]
fn distance_pythagorean_triple() {
    assert_eq!(distance(pt(0.0, 0.0), pt(3.0, 4.0)), 5.0);
}

#[test]
fn distance_is_symmetric() {
    let a = pt(-1.0, 2.5);
    let b = pt(7.0, -3.0);
    assert_eq!(distance(a, b), distance(b, a));
}

// =============================================================
// near_point
// =============================================================

#[test]
fn near_point_within_square_tolerance() {
    let part = near_point(pt(12.0, 13.0), pt(10.0, 10.0), HitPart::Corner(Corner::TopLeft));
    assert_eq!(part, Some(HitPart::Corner(Corner::TopLeft)));
}

#[test]
fn near_point_exact_match() {
    let part = near_point(pt(10.0, 10.0), pt(10.0, 10.0), HitPart::Endpoint(EndPoint::Start));
    assert_eq!(part, Some(HitPart::Endpoint(EndPoint::Start)));
}

#[test]
fn near_point_tolerance_is_exclusive() {
    assert_eq!(near_point(pt(15.0, 10.0), pt(10.0, 10.0), HitPart::Inside), None);
    assert_eq!(near_point(pt(14.9, 10.0), pt(10.0, 10.0), HitPart::Inside), Some(HitPart::Inside));
}

#[test]
fn near_point_square_not_circle() {
    // (4, 4) off the target is outside a radius-5 circle but inside the
    // per-axis square.
    let part = near_point(pt(14.0, 14.0), pt(10.0, 10.0), HitPart::Corner(Corner::BottomRight));
    assert_eq!(part, Some(HitPart::Corner(Corner::BottomRight)));
}

#[test]
fn near_point_one_axis_out_misses() {
    assert_eq!(near_point(pt(11.0, 16.0), pt(10.0, 10.0), HitPart::Inside), None);
}

// =============================================================
// on_segment
// =============================================================

#[test]
fn on_segment_midpoint() {
    let part = on_segment(pt(0.0, 0.0), pt(10.0, 0.0), pt(5.0, 0.0), 1.0);
    assert_eq!(part, Some(HitPart::Inside));
}

#[test]
fn on_segment_slightly_off_axis_within_tolerance() {
    let part = on_segment(pt(0.0, 0.0), pt(10.0, 0.0), pt(5.0, 0.4), 1.0);
    assert_eq!(part, Some(HitPart::Inside));
}

#[test]
fn on_segment_far_off_axis_misses() {
    assert_eq!(on_segment(pt(0.0, 0.0), pt(10.0, 0.0), pt(5.0, 5.0), 1.0), None);
}

#[test]
fn on_segment_beyond_endpoint_misses() {
    assert_eq!(on_segment(pt(0.0, 0.0), pt(10.0, 0.0), pt(15.0, 0.0), 1.0), None);
}

#[test]
fn on_segment_wider_tolerance_admits_more() {
    let a = pt(0.0, 0.0);
    let b = pt(10.0, 0.0);
    let p = pt(5.0, 3.0);
    assert_eq!(on_segment(a, b, p, 1.0), None);
    assert_eq!(on_segment(a, b, p, 5.0), Some(HitPart::Inside));
}

#[test]
fn on_segment_endpoint_is_inside() {
    let part = on_segment(pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 0.0), 1.0);
    assert_eq!(part, Some(HitPart::Inside));
}

// =============================================================
// adjustment_required
// =============================================================

#[test]
fn adjustment_required_for_line_and_rectangle() {
    assert!(adjustment_required(ElementKind::Line));
    assert!(adjustment_required(ElementKind::Rectangle));
}

#[test]
fn adjustment_not_required_for_pencil_and_text() {
    assert!(!adjustment_required(ElementKind::Pencil));
    assert!(!adjustment_required(ElementKind::Text));
}

// =============================================================
// adjust_element_coordinates
// =============================================================

#[test]
fn rectangle_drawn_backwards_normalizes() {
    let adjusted =
        adjust_element_coordinates(ElementKind::Rectangle, Bounds::new(50.0, 60.0, 10.0, 20.0));
    assert_eq!(adjusted, Bounds::new(10.0, 20.0, 50.0, 60.0));
}

#[test]
fn rectangle_already_normalized_is_unchanged() {
    let b = Bounds::new(10.0, 20.0, 50.0, 60.0);
    assert_eq!(adjust_element_coordinates(ElementKind::Rectangle, b), b);
}

#[test]
fn rectangle_mixed_orientation_normalizes() {
    let adjusted =
        adjust_element_coordinates(ElementKind::Rectangle, Bounds::new(50.0, 20.0, 10.0, 60.0));
    assert_eq!(adjusted, Bounds::new(10.0, 20.0, 50.0, 60.0));
}

#[test]
fn rectangle_invariant_holds_after_adjust() {
    let adjusted =
        adjust_element_coordinates(ElementKind::Rectangle, Bounds::new(9.0, -4.0, -7.0, 13.0));
    assert!(adjusted.x1 <= adjusted.x2);
    assert!(adjusted.y1 <= adjusted.y2);
}

#[test]
fn line_left_to_right_is_unchanged() {
    let b = Bounds::new(0.0, 0.0, 10.0, 5.0);
    assert_eq!(adjust_element_coordinates(ElementKind::Line, b), b);
}

#[test]
fn line_right_to_left_swaps_endpoints() {
    let adjusted =
        adjust_element_coordinates(ElementKind::Line, Bounds::new(10.0, 5.0, 0.0, 0.0));
    assert_eq!(adjusted, Bounds::new(0.0, 0.0, 10.0, 5.0));
}

#[test]
fn vertical_line_orders_by_y() {
    let adjusted =
        adjust_element_coordinates(ElementKind::Line, Bounds::new(5.0, 10.0, 5.0, 0.0));
    assert_eq!(adjusted, Bounds::new(5.0, 0.0, 5.0, 10.0));
}

#[test]
fn line_lexicographic_invariant_holds() {
    let adjusted =
        adjust_element_coordinates(ElementKind::Line, Bounds::new(3.0, -2.0, -3.0, 8.0));
    assert!(adjusted.x1 < adjusted.x2 || (adjusted.x1 == adjusted.x2 && adjusted.y1 <= adjusted.y2));
}

#[test]
fn pencil_and_text_pass_through() {
    let b = Bounds::new(9.0, 8.0, 1.0, 2.0);
    assert_eq!(adjust_element_coordinates(ElementKind::Pencil, b), b);
    assert_eq!(adjust_element_coordinates(ElementKind::Text, b), b);
}

// =============================================================
// resized_coordinates
// =============================================================

const START: Bounds = Bounds { x1: 10.0, y1: 20.0, x2: 50.0, y2: 60.0 };

#[test]
fn resize_top_left_moves_first_corner() {
    let resized = resized_coordinates(pt(0.0, 0.0), HitPart::Corner(Corner::TopLeft), START);
    assert_eq!(resized, Some(Bounds::new(0.0, 0.0, 50.0, 60.0)));
}

#[test]
fn resize_start_endpoint_moves_first_point() {
    let resized = resized_coordinates(pt(1.0, 2.0), HitPart::Endpoint(EndPoint::Start), START);
    assert_eq!(resized, Some(Bounds::new(1.0, 2.0, 50.0, 60.0)));
}

#[test]
fn resize_top_right_moves_x2_y1() {
    let resized = resized_coordinates(pt(70.0, 5.0), HitPart::Corner(Corner::TopRight), START);
    assert_eq!(resized, Some(Bounds::new(10.0, 5.0, 70.0, 60.0)));
}

#[test]
fn resize_bottom_left_moves_x1_y2() {
    let resized = resized_coordinates(pt(5.0, 80.0), HitPart::Corner(Corner::BottomLeft), START);
    assert_eq!(resized, Some(Bounds::new(5.0, 20.0, 50.0, 80.0)));
}

#[test]
fn resize_bottom_right_moves_second_corner() {
    let resized = resized_coordinates(pt(90.0, 95.0), HitPart::Corner(Corner::BottomRight), START);
    assert_eq!(resized, Some(Bounds::new(10.0, 20.0, 90.0, 95.0)));
}

#[test]
fn resize_end_endpoint_moves_second_point() {
    let resized = resized_coordinates(pt(33.0, 44.0), HitPart::Endpoint(EndPoint::End), START);
    assert_eq!(resized, Some(Bounds::new(10.0, 20.0, 33.0, 44.0)));
}

#[test]
fn resize_from_body_is_none() {
    assert_eq!(resized_coordinates(pt(30.0, 30.0), HitPart::Inside, START), None);
}

// =============================================================
// cursor_for_position
// =============================================================

#[test]
fn diagonal_handles_get_diagonal_cursor() {
    assert_eq!(cursor_for_position(HitPart::Corner(Corner::TopLeft)), Cursor::DiagonalResize);
    assert_eq!(cursor_for_position(HitPart::Corner(Corner::BottomRight)), Cursor::DiagonalResize);
    assert_eq!(cursor_for_position(HitPart::Endpoint(EndPoint::Start)), Cursor::DiagonalResize);
    assert_eq!(cursor_for_position(HitPart::Endpoint(EndPoint::End)), Cursor::DiagonalResize);
}

#[test]
fn anti_diagonal_handles_get_anti_diagonal_cursor() {
    assert_eq!(
        cursor_for_position(HitPart::Corner(Corner::TopRight)),
        Cursor::AntiDiagonalResize
    );
    assert_eq!(
        cursor_for_position(HitPart::Corner(Corner::BottomLeft)),
        Cursor::AntiDiagonalResize
    );
}

#[test]
fn body_gets_move_cursor() {
    assert_eq!(cursor_for_position(HitPart::Inside), Cursor::Move);
}

#[test]
fn cursor_css_names() {
    assert_eq!(Cursor::DiagonalResize.as_css(), "nwse-resize");
    assert_eq!(Cursor::AntiDiagonalResize.as_css(), "nesw-resize");
    assert_eq!(Cursor::Move.as_css(), "move");
}
