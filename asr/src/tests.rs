use std::{mem::offset_of, time::Duration};

use asr_gl::gl;
use glam::{Mat4, Vec3, Vec4};

use crate::{
    clock::{millis_to_seconds, RenderClock},
    config::{RendererConfig, VSync},
    events::{Action, Event, EventQueue, Key},
    frame::FrameUniforms,
    geometry::{draw_count, DrawCall, Topology, Vertex},
    program::{Location, ProgramLocations, MVP_UNIFORM, TIME_UNIFORM},
    store::GeometryStore,
    transform::{euler_yxz, MatrixMode, MatrixStack, OrthoVolume, TransformStacks},
};

const EPSILON: f32 = 1e-5;

#[test]
fn pop_to_empty_reseeds_identity() {
    let mut stack = MatrixStack::default();
    stack.multiply(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));

    stack.pop();
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.top(), Mat4::IDENTITY);

    stack.pop();
    stack.pop();
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.top(), Mat4::IDENTITY);
}

#[test]
fn push_then_pop_keeps_top_exactly() {
    let mut stacks = TransformStacks::new();
    stacks.translate(Vec3::new(0.3, -1.7, 4.0));
    stacks.rotate(Vec3::new(0.1, 0.7, -0.4));
    let before = stacks.current().top();

    stacks.push();
    assert_eq!(stacks.current().depth(), 2);
    assert_eq!(stacks.current().top(), before);

    stacks.scale(Vec3::splat(3.0));
    stacks.translate(Vec3::X);
    stacks.pop();

    assert_eq!(stacks.current().depth(), 1);
    assert_eq!(stacks.current().top(), before);
}

#[test]
fn rotate_applies_y_then_x_then_z() {
    let mut stacks = TransformStacks::new();
    stacks.translate(Vec3::new(1.0, 2.0, 3.0));
    let prior = stacks.current().top();

    let rotation = Vec3::new(0.4, 1.1, -0.6);
    stacks.rotate(rotation);

    let expected = prior
        * Mat4::from_rotation_y(rotation.y)
        * Mat4::from_rotation_x(rotation.x)
        * Mat4::from_rotation_z(rotation.z);
    assert!(stacks.current().top().abs_diff_eq(expected, EPSILON));

    let xyz = prior
        * Mat4::from_rotation_x(rotation.x)
        * Mat4::from_rotation_y(rotation.y)
        * Mat4::from_rotation_z(rotation.z);
    assert!(!stacks.current().top().abs_diff_eq(xyz, EPSILON));
}

#[test]
fn euler_single_axis() {
    let quarter = std::f32::consts::FRAC_PI_2;
    assert!(euler_yxz(Vec3::new(0.0, quarter, 0.0)).abs_diff_eq(Mat4::from_rotation_y(quarter), EPSILON));
    assert!(euler_yxz(Vec3::ZERO).abs_diff_eq(Mat4::IDENTITY, EPSILON));
}

#[test]
fn transforms_compose_in_local_frame() {
    let mut stacks = TransformStacks::new();
    stacks.scale(Vec3::splat(2.0));
    stacks.translate(Vec3::new(1.0, 0.0, 0.0));

    let origin = stacks.current().top() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(origin.abs_diff_eq(Vec4::new(2.0, 0.0, 0.0, 1.0), EPSILON));
}

#[test]
fn load_replaces_top_only() {
    let mut stacks = TransformStacks::new();
    stacks.push();
    let matrix = Mat4::from_scale(Vec3::new(1.0, 2.0, 3.0));
    stacks.load(matrix);
    assert_eq!(stacks.current().top(), matrix);
    assert_eq!(stacks.current().depth(), 2);

    stacks.load_identity();
    assert_eq!(stacks.current().top(), Mat4::IDENTITY);

    stacks.pop();
    assert_eq!(stacks.current().top(), Mat4::IDENTITY);
}

#[test]
fn modes_select_independent_stacks() {
    let mut stacks = TransformStacks::new();
    assert_eq!(stacks.mode(), MatrixMode::Model);

    stacks.translate(Vec3::X);
    stacks.set_mode(MatrixMode::Projection);
    stacks.push();
    stacks.scale(Vec3::splat(0.5));

    assert_eq!(stacks.stack(MatrixMode::Model).top(), Mat4::from_translation(Vec3::X));
    assert_eq!(stacks.stack(MatrixMode::View).top(), Mat4::IDENTITY);
    assert_eq!(stacks.stack(MatrixMode::View).depth(), 1);
    assert_eq!(stacks.stack(MatrixMode::Projection).depth(), 2);
    assert_eq!(stacks.stack(MatrixMode::Projection).top(), Mat4::from_scale(Vec3::splat(0.5)));
}

#[test]
fn reset_reseeds_all_stacks() {
    let mut stacks = TransformStacks::new();
    for mode in [MatrixMode::Model, MatrixMode::View, MatrixMode::Projection] {
        stacks.set_mode(mode);
        stacks.translate(Vec3::Y);
        stacks.push();
        stacks.push();
    }

    stacks.reset();
    for mode in [MatrixMode::Model, MatrixMode::View, MatrixMode::Projection] {
        assert_eq!(stacks.stack(mode).depth(), 1);
        assert_eq!(stacks.stack(mode).top(), Mat4::IDENTITY);
    }
    assert_eq!(stacks.mode(), MatrixMode::Projection);
}

#[test]
fn orthographic_volume_on_square_window() {
    let aspect_ratio = 500.0 / 500.0;
    let volume = OrthoVolume::from_zoom(1.0, aspect_ratio, 0.0, 10.0);
    assert_eq!(volume.left, -1.0);
    assert_eq!(volume.right, 1.0);
    assert_eq!(volume.bottom, -1.0);
    assert_eq!(volume.top, 1.0);

    let mut stacks = TransformStacks::new();
    stacks.set_mode(MatrixMode::Projection);
    stacks.load_orthographic(1.0, 0.0, 10.0, aspect_ratio);
    assert_eq!(
        stacks.current().top(),
        Mat4::orthographic_rh_gl(-1.0, 1.0, -1.0, 1.0, 0.0, 10.0)
    );
}

#[test]
fn orthographic_volume_widens_with_aspect() {
    let volume = OrthoVolume::from_zoom(2.0, 1.5, 0.1, 100.0);
    assert_eq!(volume.left, -3.0);
    assert_eq!(volume.right, 3.0);
    assert_eq!(volume.bottom, -2.0);
    assert_eq!(volume.top, 2.0);
}

#[test]
fn perspective_uses_aspect_ratio() {
    let mut stacks = TransformStacks::new();
    stacks.load_perspective(1.0, 0.1, 50.0, 2.0);
    assert_eq!(
        stacks.current().top(),
        Mat4::perspective_rh_gl(1.0, 2.0, 0.1, 50.0)
    );
}

#[test]
fn mvp_inverts_the_view_stack() {
    let mut stacks = TransformStacks::new();
    stacks.set_mode(MatrixMode::View);
    stacks.load_look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    let look_at = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    assert_eq!(stacks.current().top(), look_at);

    assert!(stacks
        .model_view_projection()
        .abs_diff_eq(look_at.inverse(), EPSILON));

    // The camera placement maps the origin onto the eye.
    let origin = stacks.model_view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(origin.abs_diff_eq(Vec4::new(0.0, 0.0, 5.0, 1.0), EPSILON));
}

#[test]
fn mvp_order_is_projection_view_model() {
    let mut stacks = TransformStacks::new();
    let model = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
    let camera = Mat4::from_translation(Vec3::new(0.0, 0.0, 3.0));
    let projection = Mat4::perspective_rh_gl(1.2, 1.0, 0.1, 10.0);

    stacks.load(model);
    stacks.set_mode(MatrixMode::View);
    stacks.load(camera);
    stacks.set_mode(MatrixMode::Projection);
    stacks.load(projection);

    let expected = projection * camera.inverse() * model;
    assert!(stacks.model_view_projection().abs_diff_eq(expected, EPSILON));
}

#[test]
fn draw_count_follows_indices() {
    assert_eq!(draw_count(&[0, 1, 2]), 3);
    // A quad: four vertices, six indices.
    assert_eq!(draw_count(&[0, 1, 2, 2, 3, 0]), 6);
    assert_eq!(draw_count(&[]), 0);
}

#[test]
fn vertex_layout_is_interleaved() {
    assert_eq!(size_of::<Vertex>(), 7 * size_of::<f32>());
    assert_eq!(Vertex::STRIDE, 28);
    assert_eq!(offset_of!(Vertex, position), 0);
    assert_eq!(offset_of!(Vertex, color) as u32, Vertex::COLOR.offset);
    assert_eq!(Vertex::POSITION.component_count, 3);
    assert_eq!(Vertex::COLOR.component_count, 4);

    let vertices = [
        Vertex::new([1.0, 2.0, 3.0], [0.1, 0.2, 0.3, 0.4]),
        Vertex::from_vecs(Vec3::new(4.0, 5.0, 6.0), Vec4::ONE),
    ];
    let floats: &[f32] = bytemuck::cast_slice(&vertices);
    assert_eq!(floats.len(), 14);
    assert_eq!(&floats[..7], &[1.0, 2.0, 3.0, 0.1, 0.2, 0.3, 0.4]);
    assert_eq!(floats[7], 4.0);
}

#[test]
fn topology_maps_to_gl_primitives() {
    let pairs = [
        (Topology::Points, gl::POINTS),
        (Topology::Lines, gl::LINES),
        (Topology::LineLoop, gl::LINE_LOOP),
        (Topology::LineStrip, gl::LINE_STRIP),
        (Topology::Triangles, gl::TRIANGLES),
        (Topology::TriangleFan, gl::TRIANGLE_FAN),
        (Topology::TriangleStrip, gl::TRIANGLE_STRIP),
    ];
    for (topology, primitive) in pairs {
        assert_eq!(topology.to_u32(), primitive, "{topology:?}");
    }
}

#[test]
fn locations_treat_negative_as_unresolved() {
    assert_eq!(Location::from_raw(-1), Location::Unresolved);
    assert_eq!(Location::from_raw(0), Location::Resolved(0));
    assert_eq!(Location::from_raw(3).get(), Some(3));
    assert_eq!(Location::Unresolved.to_raw(), -1);
    assert_eq!(Location::default(), Location::Unresolved);
}

#[test]
fn broken_program_resolves_nothing() {
    // What GL reports for a program that failed to compile or link.
    let locations = ProgramLocations::resolve(|_| -1, |_| -1);
    assert_eq!(locations, ProgramLocations::UNRESOLVED);

    let mut stacks = TransformStacks::new();
    stacks.translate(Vec3::ONE);
    let uniforms = FrameUniforms::gather(&locations, &stacks, &RenderClock::start_new());
    assert!(uniforms.is_empty());
    assert_eq!(uniforms, FrameUniforms::default());
}

#[test]
fn frame_uniforms_only_for_resolved_slots() {
    let locations = ProgramLocations::resolve(
        |name| if name == "position" { 0 } else { -1 },
        |name| match name {
            TIME_UNIFORM => 4,
            _ => -1,
        },
    );
    assert!(locations.position.is_resolved());
    assert!(!locations.color.is_resolved());

    let stacks = TransformStacks::new();
    let uniforms = FrameUniforms::gather(&locations, &stacks, &RenderClock::start_new());
    let (location, seconds) = uniforms.time.expect("time is resolved");
    assert_eq!(location, 4);
    assert!(seconds >= 0.0);
    assert_eq!(uniforms.mvp, None);

    let locations = ProgramLocations::resolve(|_| -1, |name| if name == MVP_UNIFORM { 7 } else { -1 });
    let uniforms = FrameUniforms::gather(&locations, &stacks, &RenderClock::start_new());
    assert_eq!(uniforms.time, None);
    assert_eq!(uniforms.mvp, Some((7, Mat4::IDENTITY)));
}

#[test]
fn elapsed_time_drops_sub_millisecond_part() {
    assert_eq!(millis_to_seconds(Duration::ZERO), 0.0);
    assert_eq!(millis_to_seconds(Duration::from_micros(1_500_999)), 1.5);
    assert_eq!(millis_to_seconds(Duration::from_millis(250)), 0.25);

    let mut clock = RenderClock::start_new();
    std::thread::sleep(Duration::from_millis(5));
    assert!(clock.elapsed() >= Duration::from_millis(5));
    clock.restart();
    assert!(clock.elapsed_seconds() < 1.0);
}

#[test]
fn escape_quits_by_default() {
    let mut queue = EventQueue::new(RendererConfig::default().escape_quits);
    queue.push_key(Key::A, Action::Press);
    queue.push_key(Key::A, Action::Release);
    queue.push_key(Key::Escape, Action::Press);

    let events = queue.drain();
    assert_eq!(
        events.iter().copied().collect::<Vec<_>>(),
        vec![Event::KeyDown(Key::A), Event::KeyDown(Key::Escape), Event::Quit]
    );
    assert!(events.should_stop());
    assert!(queue.is_empty());
}

#[test]
fn key_repeat_reports_key_down() {
    let mut queue = EventQueue::new(false);
    queue.push_key(Key::W, Action::Press);
    queue.push_key(Key::W, Action::Repeat);
    queue.push_key(Key::Escape, Action::Press);

    let events = queue.drain();
    assert!(!events.should_stop());
    assert_eq!(
        events.keys_down().collect::<Vec<_>>(),
        vec![Key::W, Key::W, Key::Escape]
    );
}

#[test]
fn close_request_stops_and_drains_once() {
    let mut queue = EventQueue::new(true);
    queue.push_quit();
    assert_eq!(queue.len(), 1);

    assert!(queue.drain().should_stop());
    let next = queue.drain();
    assert!(next.is_empty());
    assert!(!next.should_stop());
}

#[test]
fn config_defaults() {
    let config = RendererConfig::default();
    assert_eq!((config.width, config.height), (500, 500));
    assert_eq!(config.title, "ASR: Version 2.0");
    assert_eq!(config.depth_bits, 24);
    assert_eq!(config.samples, 2);
    assert_eq!(config.vsync, VSync::Adaptive);
    assert!(config.escape_quits);

    let hints = config.context_hints();
    assert_eq!(hints.es_version, (2, 0));
    assert!(hints.double_buffer);

    let config = RendererConfig::default()
        .with_size(800, 600)
        .with_title("demo")
        .with_vsync(VSync::Off)
        .with_escape_quits(false);
    assert_eq!((config.width, config.height), (800, 600));
    assert_eq!(config.title, "demo");
    assert!(!config.escape_quits);
}

#[test]
fn adaptive_vsync_falls_back() {
    assert_eq!(VSync::Adaptive.swap_interval(true), -1);
    assert_eq!(VSync::Adaptive.swap_interval(false), 1);
    assert_eq!(VSync::On.swap_interval(true), 1);
    assert_eq!(VSync::Off.swap_interval(false), 0);
}

fn mesh(vertex_array: u32, count: u32) -> DrawCall {
    DrawCall {
        topology: Topology::Triangles,
        count,
        vertex_array,
    }
}

#[test]
#[should_panic(expected = "no current geometry")]
fn draw_without_current_geometry_panics() {
    let mut store = GeometryStore::new();
    store.insert(mesh(1, 3));
    store.expect_current();
}

#[test]
fn dropping_current_geometry_clears_selection() {
    let mut store = GeometryStore::new();
    let first = store.insert(mesh(1, 9));
    assert!(store.select(Some(first)));
    assert_eq!(store.expect_current(), &mesh(1, 9));

    assert_eq!(store.remove(first), Some(mesh(1, 9)));
    assert_eq!(store.current(), None);
    assert_eq!(store.current_id(), None);

    // The freed slot is reused, but the old id must not reach the new mesh.
    let second = store.insert(mesh(1, 1));
    assert_ne!(first, second);
    assert_eq!(store.get(first), None);
    assert_eq!(store.current(), None);
    assert!(!store.select(Some(first)));
    assert_eq!(store.current(), None);
    assert_eq!(store.remove(first), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn removing_other_geometry_keeps_selection() {
    let mut store = GeometryStore::new();
    let kept = store.insert(mesh(1, 3));
    let other = store.insert(mesh(2, 6));
    store.select(Some(kept));

    assert_eq!(store.remove(other), Some(mesh(2, 6)));
    assert_eq!(store.current(), Some(&mesh(1, 3)));

    assert!(!store.select(None));
    assert_eq!(store.current(), None);
    assert!(!store.is_empty());
}

#[test]
fn view_stack_holds_camera_placement() {
    let mut stacks = TransformStacks::new();
    stacks.set_mode(MatrixMode::View);
    stacks.load(Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0)));

    let origin = stacks.model_view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(origin.abs_diff_eq(Vec4::new(0.0, 0.0, -2.0, 1.0), EPSILON));

    let look_at = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::Y);
    assert!(stacks.model_view_projection().abs_diff_eq(look_at, EPSILON));
}
