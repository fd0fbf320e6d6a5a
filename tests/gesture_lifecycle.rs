use egui::{Color32, Pos2, Vec2, pos2, vec2};
use whiteboard::surface::{CompositeMode, DrawOp, RecordingSurface};
use whiteboard::{CanvasController, HexColor, Tool, WhiteboardConfig};

// Helper to create a laid-out controller whose surface records draw calls
fn create_test_controller() -> CanvasController<RecordingSurface> {
    let mut controller = CanvasController::with_surface(WhiteboardConfig::default(), RecordingSurface::new(0, 0));
    controller.layout(vec2(640.0, 480.0));
    controller.surface_mut().unwrap().take_ops();
    controller
}

fn ops(controller: &CanvasController<RecordingSurface>) -> &[DrawOp] {
    controller.surface().unwrap().ops()
}

fn drag(controller: &mut CanvasController<RecordingSurface>, from: Pos2, moves: &[Pos2], to: Pos2) {
    controller.pointer_down(from);
    for &pos in moves {
        controller.pointer_move(pos);
    }
    controller.pointer_up(Some(to));
}

#[test]
fn test_rectangle_scenario() {
    let mut controller = create_test_controller();
    controller.set_tool(Tool::Rectangle);
    controller.set_color("#FF0000".parse().unwrap());
    controller.set_stroke_width(5);

    drag(&mut controller, pos2(10.0, 10.0), &[pos2(50.0, 30.0)], pos2(110.0, 60.0));

    match ops(&controller) {
        [DrawOp::StrokeRect { origin, size, style }] => {
            assert_eq!(*origin, pos2(10.0, 10.0));
            assert_eq!(*size, vec2(100.0, 50.0));
            assert_eq!(style.color, Color32::from_rgb(255, 0, 0));
            assert_eq!(style.width, 5.0);
            assert_eq!(style.composite, CompositeMode::SourceOver);
        }
        other => panic!("expected a single rectangle, got {:?}", other),
    }
}

#[test]
fn test_circle_radius_is_euclidean_distance() {
    let mut controller = create_test_controller();
    controller.set_tool(Tool::Circle);
    drag(&mut controller, pos2(50.0, 50.0), &[], pos2(80.0, 90.0));

    match ops(&controller) {
        [DrawOp::StrokeCircle { center, radius, .. }] => {
            assert_eq!(*center, pos2(50.0, 50.0));
            assert!((radius - 50.0).abs() < 1e-4);
        }
        other => panic!("expected a single circle, got {:?}", other),
    }
}

#[test]
fn test_line_endpoints() {
    let mut controller = create_test_controller();
    controller.set_tool(Tool::Line);
    drag(&mut controller, pos2(5.0, 6.0), &[pos2(7.0, 8.0), pos2(9.0, 10.0)], pos2(200.0, 100.0));

    assert_eq!(
        ops(&controller),
        &[DrawOp::StrokeLine {
            from: pos2(5.0, 6.0),
            to: pos2(200.0, 100.0),
            style: ops(&controller)[0].style().copied().unwrap(),
        }]
    );
}

#[test]
fn test_shapes_draw_nothing_while_gesture_is_active() {
    for tool in [Tool::Rectangle, Tool::Circle, Tool::Line] {
        let mut controller = create_test_controller();
        controller.set_tool(tool);
        controller.pointer_down(pos2(1.0, 1.0));
        for i in 0..10 {
            controller.pointer_move(pos2(i as f32 * 10.0, 5.0));
        }
        assert!(ops(&controller).is_empty(), "{} drew before release", tool.name());

        controller.pointer_up(Some(pos2(100.0, 100.0)));
        assert_eq!(controller.surface().unwrap().shape_ops().count(), 1);
    }
}

#[test]
fn test_brush_strokes_one_segment_per_move() {
    let mut controller = create_test_controller();
    drag(
        &mut controller,
        pos2(0.0, 0.0),
        &[pos2(1.0, 1.0), pos2(2.0, 2.0), pos2(3.0, 3.0)],
        pos2(3.0, 3.0),
    );

    let surface = controller.surface().unwrap();
    assert_eq!(surface.ops()[0], DrawOp::BeginPath(pos2(0.0, 0.0)));
    assert_eq!(surface.segment_count(), 3);
    assert_eq!(surface.shape_ops().count(), 0);
}

#[test]
fn test_no_segments_after_gesture_ends() {
    let mut controller = create_test_controller();
    drag(&mut controller, pos2(0.0, 0.0), &[pos2(1.0, 1.0)], pos2(1.0, 1.0));
    controller.surface_mut().unwrap().take_ops();

    controller.pointer_move(pos2(5.0, 5.0));
    controller.pointer_move(pos2(6.0, 6.0));
    assert!(ops(&controller).is_empty());
}

#[test]
fn test_composite_mode_follows_current_tool() {
    let mut controller = create_test_controller();

    controller.set_tool(Tool::Eraser);
    drag(&mut controller, pos2(0.0, 0.0), &[pos2(4.0, 4.0)], pos2(4.0, 4.0));
    controller.set_tool(Tool::Brush);
    drag(&mut controller, pos2(0.0, 0.0), &[pos2(4.0, 4.0)], pos2(4.0, 4.0));
    controller.set_tool(Tool::Eraser);
    drag(&mut controller, pos2(0.0, 0.0), &[pos2(4.0, 4.0)], pos2(4.0, 4.0));
    controller.set_tool(Tool::Rectangle);
    drag(&mut controller, pos2(0.0, 0.0), &[], pos2(4.0, 4.0));

    let modes: Vec<CompositeMode> = ops(&controller)
        .iter()
        .filter_map(|op| op.style().map(|style| style.composite))
        .collect();
    assert_eq!(
        modes,
        vec![
            CompositeMode::DestinationOut,
            CompositeMode::SourceOver,
            CompositeMode::DestinationOut,
            CompositeMode::SourceOver,
        ]
    );
}

#[test]
fn test_leave_ends_gesture_like_release() {
    let mut controller = create_test_controller();
    controller.set_tool(Tool::Rectangle);
    controller.pointer_down(pos2(10.0, 10.0));
    controller.pointer_leave(Some(pos2(40.0, 30.0)));
    assert!(controller.gesture().is_idle());

    // No resume: moves after leaving are ignored
    controller.pointer_move(pos2(60.0, 60.0));
    controller.pointer_up(Some(pos2(70.0, 70.0)));

    match ops(&controller) {
        [DrawOp::StrokeRect { origin, size, .. }] => {
            assert_eq!(*origin, pos2(10.0, 10.0));
            assert_eq!(*size, Vec2::new(30.0, 20.0));
        }
        other => panic!("expected a single rectangle, got {:?}", other),
    }
}

#[test]
fn test_palette_swatch_applies_to_next_stroke() {
    let mut controller = create_test_controller();
    let swatch = controller.config().palette[7];
    controller.select_swatch(7);
    assert_eq!(controller.color(), swatch);
    assert_eq!(controller.color(), HexColor::from_rgb(0xFF, 0xA5, 0x00));

    drag(&mut controller, pos2(0.0, 0.0), &[pos2(3.0, 0.0)], pos2(3.0, 0.0));
    let style = ops(&controller)[1].style().copied().unwrap();
    assert_eq!(style.color, swatch.color32());
}

#[test]
fn test_width_change_applies_without_validation() {
    let mut controller = create_test_controller();
    controller.set_stroke_width(80);
    drag(&mut controller, pos2(0.0, 0.0), &[pos2(3.0, 0.0)], pos2(3.0, 0.0));
    assert_eq!(ops(&controller)[1].style().unwrap().width, 80.0);
}

#[test]
fn test_clear_fills_background() {
    let mut controller = create_test_controller();
    controller.clear();
    controller.clear();
    assert_eq!(ops(&controller), &[DrawOp::Fill(Color32::WHITE), DrawOp::Fill(Color32::WHITE)]);
}

#[test]
fn test_height_change_reinitializes_surface() {
    let mut controller = create_test_controller();
    assert!(controller.layout(vec2(640.0, 400.0)));
    assert_eq!(
        ops(&controller),
        &[DrawOp::Resize { width: 640, height: 400 }, DrawOp::Fill(Color32::WHITE)]
    );
}
