use cgmath::Vector3;

use crate::app::Scene;
use crate::error::InitError;
use crate::gl_api::buffer::{UsageType, VertexBuffer};
use crate::gl_api::draw::{self, Primitive};
use crate::gl_api::shader::program::Program;
use crate::gl_api::shader::simple_pipeline;
use crate::gl_api::vertex_array::VertexArray;
use crate::gl_api::GlResult;

pub const VERTEX_SHADER_SRC: &str = "#version 330 core
layout (location = 0) in vec3 position;
void main()
{
    gl_Position = vec4(position.x, position.y, position.z, 1.0);
}
";

pub const FRAGMENT_SHADER_SRC: &str = "#version 330 core
out vec4 color;
void main()
{
    color = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
";

pub const TRIANGLE_VERTICES: [Vector3<f32>; 3] = [
    // bottom left
    Vector3 { x: -0.5, y: -0.5, z: 0.0 },
    // bottom right
    Vector3 { x: 0.5, y: -0.5, z: 0.0 },
    // top middle
    Vector3 { x: 0.0, y: 0.5, z: 0.0 },
];

/// One orange triangle in the middle of the screen.
pub struct Triangle {
    // Released in this order on drop.
    vao: VertexArray,
    vbo: VertexBuffer<Vector3<f32>>,
    program: Program,
}

impl Triangle {
    pub fn new() -> Result<Self, InitError> {
        let program = simple_pipeline(VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC)?;

        let mut vao = VertexArray::new()?;
        let mut vbo = VertexBuffer::new()?;

        vao.bind()?;
        vbo.upload(&TRIANGLE_VERTICES, UsageType::StaticDraw)?;
        vao.add_buffer(&vbo)?;

        vbo.unbind()?;
        vao.unbind()?;

        log::debug!(
            "uploaded {} vertices using {} attribute slot(s)",
            vbo.len(),
            vao.attribute_count()
        );
        Ok(Triangle { vao, vbo, program })
    }
}

impl Scene for Triangle {
    fn draw(&mut self) -> GlResult<()> {
        self.program.bind()?;
        self.vao.bind()?;
        draw::draw_arrays(Primitive::Triangles, 0, self.vbo.len())?;
        self.vao.unbind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl_api::buffer::byte_len;

    #[test]
    fn triangle_is_nine_floats() {
        assert_eq!(TRIANGLE_VERTICES.len(), 3);
        assert_eq!(byte_len::<Vector3<f32>>(TRIANGLE_VERTICES.len()), 9 * 4);
    }

    #[test]
    fn triangle_corners() {
        let flat: Vec<f32> = TRIANGLE_VERTICES
            .iter()
            .flat_map(|v| [v.x, v.y, v.z])
            .collect();
        assert_eq!(
            flat,
            vec![-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0]
        );
    }

    #[test]
    fn triangle_is_counter_clockwise() {
        let [a, b, c] = TRIANGLE_VERTICES;
        let area = (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y);
        assert!(area > 0.0);
    }

    #[test]
    fn shaders_target_glsl_330_core() {
        assert!(VERTEX_SHADER_SRC.starts_with("#version 330 core\n"));
        assert!(FRAGMENT_SHADER_SRC.starts_with("#version 330 core\n"));
    }

    #[test]
    fn vertex_shader_reads_slot_zero() {
        assert!(VERTEX_SHADER_SRC.contains("layout (location = 0) in vec3 position;"));
    }

    #[test]
    fn fragment_shader_is_orange() {
        assert!(FRAGMENT_SHADER_SRC.contains("vec4(1.0f, 0.5f, 0.2f, 1.0f)"));
    }

    #[test]
    fn shader_sources_have_no_nul() {
        assert!(!VERTEX_SHADER_SRC.contains('\0'));
        assert!(!FRAGMENT_SHADER_SRC.contains('\0'));
    }
}
