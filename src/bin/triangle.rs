//! First exercise: a single triangle with a flickering color uniform.

use glam::Vec4;
use glow::HasContext;

use lgl::{abs::*, settings::Settings, shader_program};

/// Ramps a value up and down between 0 and 1 by a fixed step per frame.
struct Flicker {
    value: f32,
    increment: f32,
}

impl Flicker {
    fn new(step: f32) -> Self {
        Self {
            value: 0.0,
            increment: step,
        }
    }

    fn step(&mut self) -> f32 {
        if self.value > 1.0 {
            self.increment = -self.increment.abs();
        } else if self.value < 0.0 {
            self.increment = self.increment.abs();
        }
        self.value += self.increment;
        self.value
    }
}

fn main() {
    lgl::logging::setup(log::LevelFilter::Info).unwrap();
    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("Failed to load settings: {}", e);
        Settings::default()
    });

    let mut app = App::new(
        "LearnOpenGL - Triangle",
        settings.width,
        settings.height,
        settings.fullscreen,
        settings.vsync,
    );

    let vertices: [f32; 9] = [
        -0.5, -0.5, 0.0, // bottom left
        0.5, -0.5, 0.0, // bottom right
        0.0, 0.5, 0.0, // top
    ];

    let vbo = VertexBuffer::new(&app.gl, &vertices);
    let mut layout = VertexLayout::new();
    layout.push::<f32>(3);
    let vao = VertexArray::new(&app.gl);
    vao.add_buffer(&vbo, &layout);

    let shader_program = shader_program!(triangle, app.gl);

    let mut flicker = Flicker::new(0.05);

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

        let r = flicker.step();

        unsafe {
            app.gl.clear_color(0.2, 0.3, 0.3, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);

            shader_program.use_program();
            shader_program.set_uniform("u_color", Vec4::new(r, 0.3, 0.8, 1.0));
            vao.bind();
            app.gl.draw_arrays(glow::TRIANGLES, 0, 3);
            vao.unbind();
        }

        app.window.gl_swap_window();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flicker_bounces_between_zero_and_one() {
        let mut flicker = Flicker::new(0.05);
        let mut seen_high = false;
        let mut seen_low = false;
        for _ in 0..100 {
            let v = flicker.step();
            assert!((-0.05..=1.05).contains(&v));
            if v > 0.95 {
                seen_high = true;
            }
            if seen_high && v < 0.05 {
                seen_low = true;
            }
        }
        assert!(seen_high);
        assert!(seen_low);
    }
}
