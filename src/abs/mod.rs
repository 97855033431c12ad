//! This module contains the OpenGL wrapper layer: application setup,
//! buffer and vertex array objects, and shader management.

pub mod app;
pub mod buffer;
pub mod layout;
pub mod shader;
pub mod vertex_array;

pub use app::*;
pub use buffer::*;
pub use layout::*;
pub use shader::*;
pub use vertex_array::*;
