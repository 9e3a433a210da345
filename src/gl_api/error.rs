use gl::types::GLenum;
use thiserror::Error;

pub type GlResult<T> = Result<T, GlError>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{name} ({code:#06x})", name = error_name(.code))]
pub struct GlError {
    code: GLenum,
}

impl GlError {
    fn get_raw() -> GLenum {
        unsafe { gl::GetError() }
    }

    pub(crate) fn from_code(code: GLenum) -> Self {
        GlError { code }
    }

    pub fn code(&self) -> GLenum {
        self.code
    }

    pub fn map_value<T>(val: T) -> GlResult<T> {
        match Self::get_raw() {
            gl::NO_ERROR => Ok(val),
            // GL specification states that it is undefined to issue any GL
            // calls after an out of memory error is received.
            gl::OUT_OF_MEMORY => ::std::process::abort(),
            code => Err(GlError::from_code(code)),
        }
    }
}

fn error_name(code: &GLenum) -> &'static str {
    match *code {
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        gl::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        gl::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        _ => "unknown GL error",
    }
}

/// Calls `gl::$name` and checks `glGetError` afterwards.
///
/// Must be used inside an `unsafe` block with a current context.
macro_rules! gl_call {
    ($name:ident($($args:expr),*)) => {{
        $crate::gl_api::error::GlError::map_value(::gl::$name($($args),*))
    }}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_known_codes() {
        let err = GlError::from_code(gl::INVALID_OPERATION);
        assert_eq!(err.to_string(), "GL_INVALID_OPERATION (0x0502)");
        assert_eq!(err.code(), gl::INVALID_OPERATION);
    }

    #[test]
    fn display_falls_back_for_unknown_codes() {
        let err = GlError::from_code(0x1234);
        assert_eq!(err.to_string(), "unknown GL error (0x1234)");
    }
}
