use super::info_log_to_string;
use crate::gl_api::error::{GlError, GlResult};
use gl::types::*;
use std::ffi::{CString, NulError};
use std::fmt;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum ShaderType {
    Vertex = gl::VERTEX_SHADER,
    Fragment = gl::FRAGMENT_SHADER,
}

impl ShaderType {
    /// Stage name as it appears in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ShaderType::Vertex => "VERTEX",
            ShaderType::Fragment => "FRAGMENT",
        }
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type ShaderResult<T> = Result<T, ShaderError>;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("could not create {0} shader object")]
    Creation(ShaderType),
    #[error("shader source contains a NUL byte")]
    InvalidSource(#[from] NulError),
    #[error("{stage} shader compilation failed: {log}")]
    Compile { stage: ShaderType, log: String },
    #[error(transparent)]
    Gl(#[from] GlError),
}

#[derive(Debug)]
pub struct Shader {
    pub(crate) id: GLuint,
    pub shader_type: ShaderType,
    _marker: ::std::marker::PhantomData<*mut ()>,
}

/// A shader whose compile status has been checked. Only these can be
/// attached to a program.
#[derive(Debug)]
pub struct CompiledShader {
    pub(crate) shader: Shader,
}

impl Shader {
    pub fn new(shader_type: ShaderType) -> ShaderResult<Self> {
        let id = unsafe { gl_call!(CreateShader(shader_type as GLenum))? };
        match id {
            0 => Err(ShaderError::Creation(shader_type)),
            id => Ok(Shader {
                id,
                shader_type,
                _marker: ::std::marker::PhantomData,
            }),
        }
    }

    pub fn source(&self, source: &str) -> ShaderResult<()> {
        let source = CString::new(source)?;
        unsafe {
            let ptr = source.as_ptr();
            gl_call!(ShaderSource(self.id, 1, &ptr, ::std::ptr::null()))?;
        }
        Ok(())
    }

    pub fn compile(self) -> ShaderResult<CompiledShader> {
        let mut status = 0;
        unsafe {
            gl_call!(CompileShader(self.id))?;
            gl_call!(GetShaderiv(self.id, gl::COMPILE_STATUS, &mut status))?;
        }

        if status == gl::FALSE as GLint {
            return Err(ShaderError::Compile {
                stage: self.shader_type,
                log: shader_info_log(self.id).unwrap_or_default(),
            });
        }

        log::debug!("compiled {} shader {}", self.shader_type, self.id);
        Ok(CompiledShader { shader: self })
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        // Attached shaders are only flagged for deletion until the program
        // goes away.
        unsafe {
            let _ = gl_call!(DeleteShader(self.id));
        }
    }
}

fn shader_info_log(id: GLuint) -> GlResult<String> {
    let mut length = 0;
    unsafe {
        gl_call!(GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut length))?;
    }
    if length <= 0 {
        return Ok(String::new());
    }

    let mut buffer = vec![0u8; length as usize];
    unsafe {
        gl_call!(GetShaderInfoLog(
            id,
            length,
            ::std::ptr::null_mut(),
            buffer.as_mut_ptr() as *mut GLchar
        ))?;
    }
    Ok(info_log_to_string(&buffer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_types_map_to_gl_enums() {
        assert_eq!(ShaderType::Vertex as GLenum, gl::VERTEX_SHADER);
        assert_eq!(ShaderType::Fragment as GLenum, gl::FRAGMENT_SHADER);
    }

    #[test]
    fn compile_error_names_the_stage() {
        let err = ShaderError::Compile {
            stage: ShaderType::Fragment,
            log: "0:3(1): error: syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "FRAGMENT shader compilation failed: 0:3(1): error: syntax error"
        );
    }

    #[test]
    fn nul_in_source_is_rejected_before_gl() {
        let err: ShaderError = CString::new("void main() {\0}").unwrap_err().into();
        assert!(matches!(err, ShaderError::InvalidSource(_)));
    }
}
