use super::info_log_to_string;
use super::shader::{CompiledShader, Shader, ShaderError, ShaderType};
use crate::gl_api::error::{GlError, GlResult};
use gl::types::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("could not create program object")]
    Creation,
    #[error("program linking failed: {0}")]
    Link(String),
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    Gl(#[from] GlError),
}

pub struct ProgramBuilder {
    program: Program,
    vertex: Shader,
    fragment: Shader,
}

impl ProgramBuilder {
    pub fn new(vertex: Shader, fragment: Shader) -> Result<Self, ProgramError> {
        assert_eq!(vertex.shader_type, ShaderType::Vertex);
        assert_eq!(fragment.shader_type, ShaderType::Fragment);
        Ok(ProgramBuilder {
            program: Program::new()?,
            vertex,
            fragment,
        })
    }

    /// Compiles both stages and links them. The shader objects are released
    /// once this returns, whether or not linking worked.
    pub fn build(self) -> Result<Program, ProgramError> {
        let vertex = self.vertex.compile()?;
        let fragment = self.fragment.compile()?;

        self.program.attach_shader(&vertex)?;
        self.program.attach_shader(&fragment)?;
        self.program.link()?;

        Ok(self.program)
    }
}

#[derive(Debug)]
pub struct Program {
    id: GLuint,
    _marker: ::std::marker::PhantomData<*mut ()>,
}

impl Program {
    fn new() -> Result<Self, ProgramError> {
        let id = unsafe { gl_call!(CreateProgram())? };
        match id {
            0 => Err(ProgramError::Creation),
            id => Ok(Program {
                id,
                _marker: ::std::marker::PhantomData,
            }),
        }
    }

    pub fn bind(&self) -> GlResult<()> {
        unsafe { gl_call!(UseProgram(self.id)) }
    }

    fn attach_shader(&self, shader: &CompiledShader) -> GlResult<()> {
        unsafe { gl_call!(AttachShader(self.id, shader.shader.id)) }
    }

    fn link(&self) -> Result<(), ProgramError> {
        let mut status = 0;
        unsafe {
            gl_call!(LinkProgram(self.id))?;
            gl_call!(GetProgramiv(self.id, gl::LINK_STATUS, &mut status))?;
        }

        if status == gl::FALSE as GLint {
            return Err(ProgramError::Link(
                program_info_log(self.id).unwrap_or_default(),
            ));
        }

        log::debug!("linked program {}", self.id);
        Ok(())
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            let _ = gl_call!(DeleteProgram(self.id));
        }
    }
}

fn program_info_log(id: GLuint) -> GlResult<String> {
    let mut length = 0;
    unsafe {
        gl_call!(GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut length))?;
    }
    if length <= 0 {
        return Ok(String::new());
    }

    let mut buffer = vec![0u8; length as usize];
    unsafe {
        gl_call!(GetProgramInfoLog(
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
    fn link_error_carries_the_log() {
        let err = ProgramError::Link("error: vertex shader lacks `main'".to_string());
        assert_eq!(
            err.to_string(),
            "program linking failed: error: vertex shader lacks `main'"
        );
    }

    #[test]
    fn shader_errors_pass_through() {
        let err = ProgramError::from(ShaderError::Creation(ShaderType::Vertex));
        assert_eq!(err.to_string(), "could not create VERTEX shader object");
    }
}
