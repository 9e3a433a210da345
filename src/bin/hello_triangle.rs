//! Opens the window and draws one triangle every frame.

use std::process::ExitCode;

use learn_opengl::app;
use learn_opengl::logging::{init_logging, LoggingConfig};
use learn_opengl::{Triangle, WindowConfig};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    app::exit_code(app::run(WindowConfig::default(), Triangle::new))
}
