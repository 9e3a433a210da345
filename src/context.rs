use std::ffi::{CStr, CString};
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::raw_window_handle::HasWindowHandle;
use winit::window::Window;

use crate::config::WindowConfig;
use crate::error::InitError;
use crate::gl_api::{draw, GlResult};

type LoadCheck = (&'static str, fn() -> bool);

/// Entry points both programs call. Any of these missing means the loader
/// did not find a usable GL.
const REQUIRED_FUNCTIONS: &[LoadCheck] = &[
    ("glViewport", gl::Viewport::is_loaded),
    ("glClear", gl::Clear::is_loaded),
    ("glClearColor", gl::ClearColor::is_loaded),
    ("glCreateShader", gl::CreateShader::is_loaded),
    ("glCreateProgram", gl::CreateProgram::is_loaded),
    ("glGenBuffers", gl::GenBuffers::is_loaded),
    ("glGenVertexArrays", gl::GenVertexArrays::is_loaded),
    ("glDrawArrays", gl::DrawArrays::is_loaded),
];

/// A window with a current GL context drawing into it.
pub struct GlWindow {
    // Dropped in declaration order; the surface and context have to go
    // before the window they were made for.
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    gl_config: Config,
    window: Window,
}

impl GlWindow {
    pub fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, InitError> {
        let template = ConfigTemplateBuilder::new();
        let display_builder =
            DisplayBuilder::new().with_window_attributes(Some(config.window_attributes()));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                // glutin only calls this with a non-empty set
                configs
                    .min_by_key(|config| config.num_samples())
                    .expect("no GL configs to pick from")
            })
            .map_err(InitError::Window)?;

        let window = match window {
            Some(window) => window,
            None => glutin_winit::finalize_window(event_loop, config.window_attributes(), &gl_config)
                .map_err(|err| InitError::Window(Box::new(err)))?,
        };

        let display = gl_config.display();
        log::debug!("using GL display {}", display.version_string());

        let raw_window_handle = window.window_handle()?.as_raw();
        let context_attributes = config.context_attributes(Some(raw_window_handle));
        let not_current = match unsafe { display.create_context(&gl_config, &context_attributes) } {
            Ok(context) => context,
            Err(err) => {
                log::warn!(
                    "could not get an OpenGL {}.{} context ({err}), retrying with defaults",
                    config.gl_version.0,
                    config.gl_version.1
                );
                let fallback = ContextAttributesBuilder::new().build(Some(raw_window_handle));
                unsafe { display.create_context(&gl_config, &fallback) }
                    .map_err(InitError::Context)?
            }
        };

        let (width, height): (u32, u32) = window.inner_size().into();
        let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
        );
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(InitError::Surface)?;

        let context = not_current
            .make_current(&surface)
            .map_err(InitError::MakeCurrent)?;

        if config.vsync {
            if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                log::warn!("could not enable vsync: {err}");
            }
        }

        log::info!("created {width}x{height} window \"{}\"", config.title);
        Ok(GlWindow {
            surface,
            context,
            gl_config,
            window,
        })
    }

    /// Loads GL function pointers for the current context and checks that
    /// the ones we need are there.
    pub fn load_gl(&self) -> Result<(), InitError> {
        let display = self.gl_config.display();
        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => display.get_proc_address(&symbol),
            Err(_) => std::ptr::null(),
        });

        if let Some(name) = first_missing(REQUIRED_FUNCTIONS) {
            return Err(InitError::LoadGl(name));
        }

        if let Some(version) = gl_string(gl::VERSION) {
            log::info!("OpenGL version {version}");
        }
        if let Some(renderer) = gl_string(gl::RENDERER) {
            log::debug!("renderer: {renderer}");
        }
        Ok(())
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Size of the drawable area in pixels, which is what the viewport wants.
    pub fn framebuffer_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    pub fn resize(&self, size: PhysicalSize<u32>) -> GlResult<()> {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };
        self.surface.resize(&self.context, width, height);
        draw::viewport(size.width, size.height)
    }

    pub fn swap_buffers(&self) -> glutin::error::Result<()> {
        self.surface.swap_buffers(&self.context)
    }
}

fn first_missing(checks: &[LoadCheck]) -> Option<&'static str> {
    checks
        .iter()
        .find(|(_, is_loaded)| !is_loaded())
        .map(|&(name, _)| name)
}

fn gl_string(name: gl::types::GLenum) -> Option<String> {
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            None
        } else {
            Some(CStr::from_ptr(ptr as *const _).to_string_lossy().into_owned())
        }
    }
}
