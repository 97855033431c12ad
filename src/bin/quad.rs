//! Third exercise: an indexed quad with per-vertex colors.

use glow::HasContext;

use lgl::{abs::*, settings::Settings, shader_program};

// x, y, z, r, g, b
const VERTICES: [f32; 24] = [
    0.5, 0.5, 0.0, 1.0, 0.0, 0.0, // top right
    0.5, -0.5, 0.0, 0.0, 1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0, 0.0, 0.0, 1.0, // bottom left
    -0.5, 0.5, 0.0, 1.0, 1.0, 0.0, // top left
];

const INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

fn main() {
    lgl::logging::setup(log::LevelFilter::Info).unwrap();
    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("Failed to load settings: {}", e);
        Settings::default()
    });

    let mut app = App::new(
        "LearnOpenGL - Indexed Quad",
        settings.width,
        settings.height,
        settings.fullscreen,
        settings.vsync,
    );

    let vbo = VertexBuffer::new(&app.gl, &VERTICES);
    let mut layout = VertexLayout::new();
    layout.push::<f32>(3);
    layout.push::<f32>(3);
    let vao = VertexArray::new(&app.gl);
    vao.add_buffer(&vbo, &layout);

    let ibo = IndexBuffer::new(&app.gl, &INDICES);

    let shader_program = shader_program!(quad, app.gl);

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
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        unsafe {
            app.gl.clear_color(0.2, 0.3, 0.3, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);

            shader_program.use_program();
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
