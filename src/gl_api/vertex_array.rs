use super::buffer::VertexBuffer;
use super::error::GlResult;
use super::layout::VertexAttribute;
use gl::types::*;

#[derive(Debug)]
pub struct VertexArray {
    pub(crate) id: GLuint,
    index: usize,
    _marker: ::std::marker::PhantomData<*mut ()>,
}

impl VertexArray {
    pub fn new() -> GlResult<Self> {
        let mut id = 0;
        unsafe {
            gl_call!(GenVertexArrays(1, &mut id))?;
        }
        log::trace!("created vertex array {id}");
        Ok(VertexArray {
            id,
            index: 0,
            _marker: ::std::marker::PhantomData,
        })
    }

    pub fn bind(&self) -> GlResult<()> {
        unsafe { gl_call!(BindVertexArray(self.id)) }
    }

    pub fn unbind(&self) -> GlResult<()> {
        unsafe { gl_call!(BindVertexArray(0)) }
    }

    /// Records the attribute layout of `T` for `buffer`, starting at the next
    /// free attribute slot. The array stays bound afterwards.
    pub fn add_buffer<T: VertexAttribute>(&mut self, buffer: &VertexBuffer<T>) -> GlResult<()> {
        self.bind()?;
        buffer.bind()?;

        self.index += T::define_attribs(self.index as u32, 0)? as usize;

        Ok(())
    }

    /// Amount of attribute slots in use.
    pub fn attribute_count(&self) -> usize {
        self.index
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            let _ = gl_call!(DeleteVertexArrays(1, &self.id));
        }
    }
}
