//! Vertex array object wrapper.
//!
//! This module defines the [`VertexArray`] struct which ties a vertex
//! buffer's [`VertexLayout`] to shader attribute locations.

use std::sync::Arc;

use glow::HasContext;

use crate::abs::{LayoutElement, VertexBuffer, VertexLayout};

/// Represents a vertex array object on the GPU side.
pub struct VertexArray {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
}

impl VertexArray {
    pub fn new(gl: &Arc<glow::Context>) -> Self {
        unsafe {
            let vao = gl.create_vertex_array().unwrap();
            Self {
                gl: Arc::clone(gl),
                vao,
            }
        }
    }

    /// Attaches the given vertex buffer with the given layout. Attribute
    /// locations are assigned in the order the layout elements were pushed.
    pub fn add_buffer(&self, vb: &VertexBuffer, layout: &VertexLayout) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            vb.bind();
            let mut offset = 0;
            for (index, element) in layout.elements().iter().enumerate() {
                self.gl.enable_vertex_attrib_array(index as u32);
                self.gl.vertex_attrib_pointer_f32(
                    index as u32,
                    element.count as i32,
                    element.gl_type,
                    element.normalised,
                    layout.stride() as i32,
                    offset,
                );
                offset += (LayoutElement::size_of_type(element.gl_type) * element.count) as i32;
            }
            self.gl.bind_vertex_array(None);
            vb.unbind();
        }
    }

    /// Binds the vertex array.
    pub fn bind(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
        }
    }

    /// Unbinds the vertex array.
    pub fn unbind(&self) {
        unsafe {
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
