use std::process::ExitCode;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::config::WindowConfig;
use crate::context::GlWindow;
use crate::error::InitError;
use crate::gl_api::{draw, GlResult};

/// Whatever gets drawn each frame after the clear. Built once the context is
/// current, dropped before it goes away.
pub trait Scene {
    fn draw(&mut self) -> GlResult<()>;
}

/// Draws nothing; the frame is just the clear color.
#[derive(Copy, Clone, Debug, Default)]
pub struct ClearOnly;

impl Scene for ClearOnly {
    fn draw(&mut self) -> GlResult<()> {
        Ok(())
    }
}

/// Opens the window and runs the frame loop until it is closed.
///
/// `build_scene` runs with the context current and the GL functions loaded.
pub fn run<S, F>(config: WindowConfig, build_scene: F) -> Result<(), InitError>
where
    S: Scene,
    F: FnOnce() -> Result<S, InitError>,
{
    let event_loop = EventLoop::new()?;
    let mut state = AppState::new(config, build_scene);

    event_loop.run_app(&mut state)?;

    state.finish()
}

/// Process exit status for the outcome of [`run`].
pub fn exit_status(result: &Result<(), InitError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Prints the diagnostic line on failure and turns the outcome into an exit
/// code.
pub fn exit_code(result: Result<(), InitError>) -> ExitCode {
    if let Err(err) = &result {
        log::error!("{err}");
        println!("{err}");
    }
    ExitCode::from(exit_status(&result))
}

struct AppState<S, F> {
    config: WindowConfig,
    build_scene: Option<F>,
    // Field order is drop order: the scene's GL objects go first.
    scene: Option<S>,
    window: Option<GlWindow>,
    error: Option<InitError>,
}

impl<S, F> AppState<S, F>
where
    S: Scene,
    F: FnOnce() -> Result<S, InitError>,
{
    fn new(config: WindowConfig, build_scene: F) -> Self {
        Self {
            config,
            build_scene: Some(build_scene),
            scene: None,
            window: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let window = GlWindow::new(event_loop, &self.config)?;
        window.load_gl()?;

        let size = window.framebuffer_size();
        draw::viewport(size.width, size.height)?;
        // The window owns the context, so it has to be stored before the
        // scene can fail and trigger teardown.
        self.window = Some(window);

        if let Some(build_scene) = self.build_scene.take() {
            self.scene = Some(build_scene()?);
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), InitError> {
        let (Some(window), Some(scene)) = (&self.window, &mut self.scene) else {
            return Ok(());
        };

        draw::clear(self.config.clear_color).map_err(InitError::Draw)?;
        scene.draw().map_err(InitError::Draw)?;
        window.swap_buffers().map_err(InitError::Present)
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: InitError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    fn teardown(&mut self) {
        self.scene = None;
        self.window = None;
    }

    fn finish(mut self) -> Result<(), InitError> {
        self.teardown();
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<S, F> ApplicationHandler for AppState<S, F>
where
    S: Scene,
    F: FnOnce() -> Result<S, InitError>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.error.is_some() {
            return;
        }

        match self.init(event_loop) {
            Ok(()) => {
                if let Some(window) = &self.window {
                    window.window().request_redraw();
                }
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                let resized = match &self.window {
                    Some(window) => window.resize(size),
                    None => Ok(()),
                };
                if let Err(err) = resized {
                    self.fail(event_loop, InitError::Draw(err));
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render() {
                    self.fail(event_loop, err);
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Redraw as fast as the swap interval allows.
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(window) = &self.window {
            window.window().request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_close_exits_zero() {
        assert_eq!(exit_status(&Ok(())), 0);
    }

    #[test]
    fn any_failure_exits_one() {
        assert_eq!(exit_status(&Err(InitError::LoadGl("glViewport"))), 1);
        assert_eq!(
            exit_status(&Err(InitError::Window("no display".into()))),
            1
        );
    }

    #[test]
    fn clear_only_draws_nothing() {
        assert_eq!(ClearOnly.draw(), Ok(()));
    }

    #[test]
    fn scene_is_not_built_before_the_window() {
        let mut built = false;
        let state = AppState::new(WindowConfig::default(), || {
            built = true;
            Ok(ClearOnly)
        });
        assert!(state.scene.is_none());
        assert!(state.finish().is_ok());
        assert!(!built);
    }
}
