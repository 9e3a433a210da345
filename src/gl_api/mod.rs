#[macro_use]
pub mod error;

pub mod buffer;
pub mod draw;
pub mod layout;
pub mod shader;
pub mod vertex_array;

pub use self::error::{GlError, GlResult};
