use super::error::GlResult;
use gl::types::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum Primitive {
    Triangles = gl::TRIANGLES,
}

/// Clears the color buffer of the current framebuffer to `color` (RGBA).
pub fn clear(color: [f32; 4]) -> GlResult<()> {
    let [r, g, b, a] = color;
    unsafe {
        gl_call!(ClearColor(r, g, b, a))?;
        gl_call!(Clear(gl::COLOR_BUFFER_BIT))
    }
}

pub fn viewport(width: u32, height: u32) -> GlResult<()> {
    unsafe { gl_call!(Viewport(0, 0, width as GLsizei, height as GLsizei)) }
}

/// Draws `count` vertices from the currently bound vertex array.
pub fn draw_arrays(primitive: Primitive, first: usize, count: usize) -> GlResult<()> {
    unsafe {
        gl_call!(DrawArrays(
            primitive as GLenum,
            first as GLint,
            count as GLsizei
        ))
    }
}
