mod platform;

use std::process::ExitCode;

use recipe_logging::recipe_error;

fn main() -> ExitCode {
    match platform::run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            recipe_error!("Recipe browser stopped: {}", err);
            eprintln!("recipe_app: {err}");
            ExitCode::FAILURE
        }
    }
}
