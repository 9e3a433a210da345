pub mod program;
#[allow(clippy::module_inception)]
pub mod shader;

use self::program::*;
use self::shader::*;

/// Builds a program out of a vertex and a fragment stage given as GLSL
/// source.
pub fn simple_pipeline(vert: &str, frag: &str) -> Result<Program, ProgramError> {
    let vert_shader = Shader::new(ShaderType::Vertex)?;
    let frag_shader = Shader::new(ShaderType::Fragment)?;

    vert_shader.source(vert)?;
    frag_shader.source(frag)?;

    ProgramBuilder::new(vert_shader, frag_shader)?.build()
}

/// Turns a raw info log into a string. Drivers NUL-terminate the log and
/// often end it with a newline, neither of which is wanted in diagnostics.
pub fn info_log_to_string(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_stops_at_nul() {
        assert_eq!(info_log_to_string(b"0:1(10): error\n\0garbage"), "0:1(10): error");
    }

    #[test]
    fn info_log_without_nul_is_kept() {
        assert_eq!(info_log_to_string(b"link failed  "), "link failed");
    }

    #[test]
    fn empty_info_log() {
        assert_eq!(info_log_to_string(b"\0"), "");
        assert_eq!(info_log_to_string(b""), "");
    }

    #[test]
    fn info_log_with_bad_utf8_is_lossy() {
        assert_eq!(info_log_to_string(b"bad \xff byte\0"), "bad \u{fffd} byte");
    }
}
