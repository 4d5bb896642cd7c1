#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_pencil() {
    assert_eq!(Tool::default(), Tool::Pencil);
}

#[test]
fn tool_equality() {
    assert_eq!(Tool::Line, Tool::Line);
    assert_ne!(Tool::Line, Tool::Rectangle);
}

#[test]
fn tool_clone_and_copy() {
    let a = Tool::Text;
    let b = a;
    let c = a.clone();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn selection_tool_creates_nothing() {
    assert_eq!(Tool::Selection.element_kind(), None);
}

#[test]
fn drawing_tools_map_to_their_kind() {
    use crate::doc::ElementKind;
    assert_eq!(Tool::Line.element_kind(), Some(ElementKind::Line));
    assert_eq!(Tool::Rectangle.element_kind(), Some(ElementKind::Rectangle));
    assert_eq!(Tool::Pencil.element_kind(), Some(ElementKind::Pencil));
    assert_eq!(Tool::Text.element_kind(), Some(ElementKind::Text));
}

#[test]
fn tool_parses_known_names() {
    assert_eq!("selection".parse::<Tool>(), Ok(Tool::Selection));
    assert_eq!("pencil".parse::<Tool>(), Ok(Tool::Pencil));
}

#[test]
fn tool_rejects_unknown_name() {
    let err = "lasso".parse::<Tool>();
    assert_eq!(err, Err(crate::doc::InvalidElementKind("lasso".to_string())));
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let mods = Modifiers::default();
    assert!(!mods.shift);
    assert!(!mods.ctrl);
    assert!(!mods.alt);
    assert!(!mods.meta);
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Middle, Button::Secondary);
    assert_ne!(Button::Primary, Button::Secondary);
}

// =============================================================
// GestureState
// =============================================================

#[test]
fn gesture_default_is_idle() {
    assert_eq!(GestureState::default(), GestureState::Idle);
}

#[test]
fn gesture_states_carry_their_context() {
    let moving = GestureState::Moving {
        index: 2,
        grab: Grab::Box {
            offset: Point::new(1.0, 2.0),
            origin: Point::new(10.0, 20.0),
            width: 30.0,
            height: 40.0,
        },
    };
    match moving {
        GestureState::Moving { index, grab: Grab::Box { width, .. } } => {
            assert_eq!(index, 2);
            assert_eq!(width, 30.0);
        }
        _ => panic!("wrong variant"),
    }
}

#[test]
fn stroke_grab_keeps_one_offset_per_point() {
    let grab = Grab::Stroke {
        offsets: vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0)],
    };
    let Grab::Stroke { offsets } = grab else {
        panic!("wrong variant");
    };
    assert_eq!(offsets.len(), 3);
}

#[test]
fn gesture_debug_format() {
    let s = format!("{:?}", GestureState::Idle);
    assert_eq!(s, "Idle");
    let s = format!("{:?}", GestureState::Drawing { index: 4 });
    assert!(s.contains("Drawing"));
    assert!(s.contains('4'));
}
