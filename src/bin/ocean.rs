//! Second exercise: a full-screen raymarched ocean, shadertoy style.
//!
//! The geometry is a screen-covering quad; everything interesting happens in
//! the fragment shader, driven by time, resolution and mouse uniforms.

use glam::Vec2;
use glow::HasContext;

use lgl::{abs::*, settings::Settings, shader_program};

// x, y in clip space
const VERTICES: [f32; 8] = [
    -1.0, -1.0, //
    1.0, -1.0, //
    1.0, 1.0, //
    -1.0, 1.0, //
];

const INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

fn main() {
    lgl::logging::setup(log::LevelFilter::Info).unwrap();
    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("Failed to load settings: {}", e);
        Settings::default()
    });

    let mut app = App::new(
        "LearnOpenGL - Ocean",
        settings.width,
        settings.height,
        settings.fullscreen,
        settings.vsync,
    );

    let vbo = VertexBuffer::new(&app.gl, &VERTICES);
    let mut layout = VertexLayout::new();
    layout.push::<f32>(2);
    let vao = VertexArray::new(&app.gl);
    vao.add_buffer(&vbo, &layout);

    let ibo = IndexBuffer::new(&app.gl, &INDICES);

    let shader_program = shader_program!(ocean, app.gl);

    let mut resolution = Vec2::new(settings.width as f32, settings.height as f32);
    let mut mouse = Vec2::ZERO;
    let start = std::time::Instant::now();

    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::KeyDown {
                    keycode: Some(sdl2::keyboard::Keycode::Escape),
                    ..
                } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => {
                    unsafe {
                        app.gl.viewport(0, 0, width, height);
                    }
                    resolution = Vec2::new(width as f32, height as f32);
                }
                sdl2::event::Event::MouseMotion { x, y, .. } => {
                    mouse = Vec2::new(x as f32, resolution.y - y as f32);
                }
                _ => {}
            }
        }

        unsafe {
            app.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);

            shader_program.use_program();
            shader_program.set_uniform("u_time", start.elapsed().as_secs_f32());
            shader_program.set_uniform("u_resolution", resolution);
            shader_program.set_uniform("u_mouse", mouse);
            vao.bind();
            ibo.bind();
            app.gl
                .draw_elements(glow::TRIANGLES, ibo.count() as i32, glow::UNSIGNED_INT, 0);
            ibo.unbind();
            vao.unbind();
        }

        app.window.gl_swap_window();
    }
}
