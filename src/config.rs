use glutin::context::{ContextApi, ContextAttributes, ContextAttributesBuilder, Version};
use winit::dpi::LogicalSize;
use winit::raw_window_handle::RawWindowHandle;
use winit::window::{Window, WindowAttributes};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;
pub const TITLE: &str = "Learn OpenGL";

/// Window and context configuration.
///
/// The defaults are what both programs run with.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    /// Requested desktop GL version as `(major, minor)`.
    pub gl_version: (u8, u8),
    pub clear_color: [f32; 4],
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            width: WIDTH,
            height: HEIGHT,
            resizable: false,
            gl_version: (3, 3),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            vsync: true,
        }
    }
}

impl WindowConfig {
    pub fn size(&self) -> LogicalSize<f64> {
        LogicalSize::new(self.width as f64, self.height as f64)
    }

    pub fn window_attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.size())
            .with_resizable(self.resizable)
    }

    pub fn context_attributes(&self, raw_window_handle: Option<RawWindowHandle>) -> ContextAttributes {
        let (major, minor) = self.gl_version;
        ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(raw_window_handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn defaults_match_the_fixed_window() {
        let config = WindowConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.title, "Learn OpenGL");
        assert!(!config.resizable);
        assert_eq!(config.gl_version, (3, 3));
        assert_eq!(config.clear_color, [0.2, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn window_attributes_carry_the_config() {
        let attrs = WindowConfig::default().window_attributes();
        assert_eq!(attrs.title, "Learn OpenGL");
        assert!(!attrs.resizable);
        assert_eq!(
            attrs.inner_size,
            Some(Size::Logical(LogicalSize::new(800.0, 600.0)))
        );
    }

    #[test]
    fn custom_size_is_applied() {
        let config = WindowConfig {
            width: 320,
            height: 240,
            resizable: true,
            ..WindowConfig::default()
        };
        let attrs = config.window_attributes();
        assert!(attrs.resizable);
        assert_eq!(
            attrs.inner_size,
            Some(Size::Logical(LogicalSize::new(320.0, 240.0)))
        );
    }
}
