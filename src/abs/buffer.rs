//! Vertex and index buffer wrappers.
//!
//! This module defines the [`VertexBuffer`] and [`IndexBuffer`] structs which
//! own a GPU-side buffer object and delete it on drop. The wrappers only
//! upload data and bind; issuing draw calls is left to the caller.

use std::sync::Arc;

use glow::HasContext;

/// Represents a vertex buffer stored on the GPU side.
pub struct VertexBuffer {
    gl: Arc<glow::Context>,
    vbo: glow::Buffer,
}

impl VertexBuffer {
    /// Creates a new vertex buffer and uploads the given vertex data to it.
    pub fn new<V>(gl: &Arc<glow::Context>, vertices: &[V]) -> Self {
        unsafe {
            let vbo = gl.create_buffer().unwrap();
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                std::slice::from_raw_parts(
                    vertices.as_ptr() as *const u8,
                    vertices.len() * std::mem::size_of::<V>(),
                ),
                glow::STATIC_DRAW,
            );
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Self {
                gl: Arc::clone(gl),
                vbo,
            }
        }
    }

    /// Binds the buffer to `GL_ARRAY_BUFFER`.
    pub fn bind(&self) {
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
        }
    }

    /// Unbinds the buffer.
    pub fn unbind(&self) {
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
        }
    }
}

/// Represents an index buffer stored on the GPU side.
pub struct IndexBuffer {
    gl: Arc<glow::Context>,
    ebo: glow::Buffer,
    count: usize,
}

impl IndexBuffer {
    /// Creates a new index buffer and uploads the given indices to it.
    pub fn new(gl: &Arc<glow::Context>, indices: &[u32]) -> Self {
        unsafe {
            let ebo = gl.create_buffer().unwrap();
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                std::slice::from_raw_parts(
                    indices.as_ptr() as *const u8,
                    indices.len() * std::mem::size_of::<u32>(),
                ),
                glow::STATIC_DRAW,
            );
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Self {
                gl: Arc::clone(gl),
                ebo,
                count: indices.len(),
            }
        }
    }

    /// Binds the buffer to `GL_ELEMENT_ARRAY_BUFFER`.
    pub fn bind(&self) {
        unsafe {
            self.gl
                .bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.ebo));
        }
    }

    /// Unbinds the buffer.
    pub fn unbind(&self) {
        unsafe {
            self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
        }
    }

    /// Returns the amount of indices stored in the buffer.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.ebo);
        }
    }
}
