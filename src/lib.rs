//! A collection of OpenGL learning exercises. The library half holds thin
//! RAII wrappers around buffers, vertex arrays and shader programs; the
//! binaries under `src/bin/` are the individual exercises built on top of
//! them.

pub mod abs;
pub mod logging;
pub mod settings;

/// Builds a [`abs::ShaderProgram`] from the vertex and fragment shader
/// sources under `src/shaders/<name>/`.
#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr) => {{
        let vert = $crate::abs::Shader::new(
            &$gl,
            $crate::abs::ShaderStage::Vertex,
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
        )
        .unwrap();
        let frag = $crate::abs::Shader::new(
            &$gl,
            $crate::abs::ShaderStage::Fragment,
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
        .unwrap();
        $crate::abs::ShaderProgram::new(&$gl, &[&vert, &frag]).unwrap()
    }};
}
