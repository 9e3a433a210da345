//! Opens an OpenGL window and draws into it: the setup both `clear_window`
//! and `hello_triangle` share.

#[macro_use]
pub mod gl_api;

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod triangle;

pub use app::{run, ClearOnly, Scene};
pub use config::WindowConfig;
pub use error::InitError;
pub use triangle::Triangle;
