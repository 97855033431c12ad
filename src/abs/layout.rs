//! Vertex buffer layout description.
//!
//! A [`VertexLayout`] describes how the bytes of a vertex buffer map to
//! shader attribute locations. It is plain CPU-side state; the layout is
//! applied to a vertex array by [`VertexArray::add_buffer`].
//!
//! [`VertexArray::add_buffer`]: crate::abs::VertexArray::add_buffer

/// A single attribute within a [`VertexLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutElement {
    pub gl_type: u32,
    pub count: u32,
    pub normalised: bool,
}

impl LayoutElement {
    /// Returns the size in bytes of one component of the given GL type.
    pub fn size_of_type(gl_type: u32) -> u32 {
        match gl_type {
            glow::FLOAT => 4,
            glow::UNSIGNED_INT => 4,
            glow::UNSIGNED_BYTE => 1,
            _ => 0,
        }
    }
}

/// Trait for Rust types that can appear as vertex attribute components.
pub trait LayoutType {
    const GL_TYPE: u32;
    /// Byte attributes are uploaded normalised to `[0, 1]`.
    const NORMALISED: bool;
}

impl LayoutType for f32 {
    const GL_TYPE: u32 = glow::FLOAT;
    const NORMALISED: bool = false;
}

impl LayoutType for u32 {
    const GL_TYPE: u32 = glow::UNSIGNED_INT;
    const NORMALISED: bool = false;
}

impl LayoutType for u8 {
    const GL_TYPE: u32 = glow::UNSIGNED_BYTE;
    const NORMALISED: bool = true;
}

/// Describes the attribute layout of one vertex buffer.
#[derive(Debug, Clone, Default)]
pub struct VertexLayout {
    elements: Vec<LayoutElement>,
    stride: u32,
}

impl VertexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute of `count` components of type `T`.
    pub fn push<T: LayoutType>(&mut self, count: u32) {
        self.elements.push(LayoutElement {
            gl_type: T::GL_TYPE,
            count,
            normalised: T::NORMALISED,
        });
        self.stride += LayoutElement::size_of_type(T::GL_TYPE) * count;
    }

    /// Returns the attributes pushed so far, in order.
    pub fn elements(&self) -> &[LayoutElement] {
        &self.elements
    }

    /// Returns the byte distance between consecutive vertices.
    pub fn stride(&self) -> u32 {
        self.stride
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_accumulates_per_type() {
        let mut layout = VertexLayout::new();
        layout.push::<f32>(3);
        layout.push::<f32>(2);
        layout.push::<u8>(4);
        assert_eq!(layout.stride(), 3 * 4 + 2 * 4 + 4);
        assert_eq!(layout.elements().len(), 3);
        assert_eq!(
            layout.elements()[0],
            LayoutElement {
                gl_type: glow::FLOAT,
                count: 3,
                normalised: false,
            }
        );
    }

    #[test]
    fn test_byte_attributes_are_normalised() {
        let mut layout = VertexLayout::new();
        layout.push::<u8>(4);
        layout.push::<u32>(1);
        assert!(layout.elements()[0].normalised);
        assert!(!layout.elements()[1].normalised);
        assert_eq!(layout.stride(), 4 + 4);
    }

    #[test]
    fn test_unknown_type_has_no_size() {
        assert_eq!(LayoutElement::size_of_type(glow::FLOAT), 4);
        assert_eq!(LayoutElement::size_of_type(glow::TRIANGLES), 0);
    }
}
