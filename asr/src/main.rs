use std::f32::consts::FRAC_PI_3;

use asr::{
    glam::{Mat4, Vec3}, logging, shaders, Event, Key, MatrixMode, Renderer, RendererConfig, Topology,
    Vertex,
};
use color_eyre::Result as EyreResult;

const VERTICES: [Vertex; 3] = [
    Vertex::new([-0.5, -0.5, 0.0], [1.0, 0.0, 0.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.0], [0.0, 1.0, 0.0, 1.0]),
    Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0, 1.0]),
];

const INDICES: [u32; 3] = [0, 1, 2];

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    logging::init_logging("info");

    let mut renderer = Renderer::create(RendererConfig::default().with_title("ASR: Triangle"))?;
    renderer.create_program(shaders::BASIC_VERTEX, shaders::BASIC_FRAGMENT);

    let triangle = renderer.upload_geometry(Topology::Triangles, &VERTICES, &INDICES);

    renderer.prepare_for_rendering();
    renderer.enable_depth_test();
    renderer.set_current(Some(triangle));

    renderer.set_mode(MatrixMode::View);
    renderer.load(Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0)));

    renderer.set_mode(MatrixMode::Projection);
    renderer.load_perspective(FRAC_PI_3, 0.1, 100.0);

    let mut angle = 0.0f32;
    let mut paused = false;
    loop {
        let events = renderer.process_events();
        if events.should_stop() {
            break;
        }
        for event in &events {
            if let Event::KeyDown(Key::Space) = event {
                paused = !paused;
            }
        }
        if !paused {
            angle += if renderer.is_key_held(Key::LeftShift) { 0.05 } else { 0.01 };
        }

        renderer.begin_frame();

        renderer.set_mode(MatrixMode::Model);
        renderer.load_identity();
        renderer.push();
        renderer.rotate(Vec3::new(0.0, angle, 0.0));
        renderer.draw();
        renderer.pop();

        renderer.end_frame();
    }

    renderer.destroy_geometry(triangle);
    renderer.destroy_program();
    renderer.destroy();

    Ok(())
}
