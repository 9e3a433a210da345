use crate::gl_api::shader::program::ProgramError;
use crate::gl_api::GlError;
use thiserror::Error;
use winit::error::EventLoopError;
use winit::raw_window_handle::HandleError;

/// A fatal failure. Each variant's message is the diagnostic line printed
/// before exiting.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[source] Box<dyn std::error::Error>),
    #[error("Failed to get window handle: {0}")]
    WindowHandle(#[from] HandleError),
    #[error("Failed to create OpenGL context: {0}")]
    Context(#[source] glutin::error::Error),
    #[error("Failed to create window surface: {0}")]
    Surface(#[source] glutin::error::Error),
    #[error("Failed to make OpenGL context current: {0}")]
    MakeCurrent(#[source] glutin::error::Error),
    #[error("Failed to load OpenGL functions: {0} is missing")]
    LoadGl(&'static str),
    #[error("Failed to build shader program: {0}")]
    Pipeline(#[from] ProgramError),
    #[error("OpenGL error during setup: {0}")]
    Gl(#[from] GlError),
    #[error("OpenGL error while drawing: {0}")]
    Draw(#[source] GlError),
    #[error("Failed to present frame: {0}")]
    Present(#[source] glutin::error::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl_api::shader::shader::{ShaderError, ShaderType};

    #[test]
    fn compile_failure_reads_as_one_line() {
        let err = InitError::from(ProgramError::from(ShaderError::Compile {
            stage: ShaderType::Vertex,
            log: "0:2(1): error: `position' undeclared".to_string(),
        }));
        assert_eq!(
            err.to_string(),
            "Failed to build shader program: VERTEX shader compilation failed: \
             0:2(1): error: `position' undeclared"
        );
    }

    #[test]
    fn missing_entry_point() {
        assert_eq!(
            InitError::LoadGl("glCreateShader").to_string(),
            "Failed to load OpenGL functions: glCreateShader is missing"
        );
    }

    #[test]
    fn gl_errors_convert_to_setup_failures() {
        let err: InitError = GlError::from_code(gl::INVALID_VALUE).into();
        assert!(matches!(err, InitError::Gl(_)));
    }
}
