use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use recipe_core::{update, AppState, AppViewModel, Msg};
use recipe_engine::{ClientSettings, EngineError, DEFAULT_BASE_URL};
use recipe_logging::{recipe_debug, recipe_info, recipe_warn};

use super::config::{load_config, DEFAULT_CONFIG_FILE};
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{self, UiCommand};
use super::ui::{constants, render};

const TICK: Duration = Duration::from_millis(75);

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

pub fn run_app() -> Result<(), AppError> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let (config, config_error) = match load_config(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (Default::default(), Some(err)),
    };

    logging::initialize(config.log_destination, &config.log_file);
    if let Some(err) = config_error {
        recipe_warn!("{}; using defaults", err);
        eprintln!("Warning: {err}; using defaults");
    }

    let runner = start_effect_runner(config.client_settings())?;
    let mut controller = AppController::new(runner, io::stdout());

    // Stdin blocks, so it gets its own thread; the loop below owns all state.
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    controller.dispatch(Msg::Started)?;
    loop {
        controller.pump_engine()?;
        match line_rx.recv_timeout(TICK) {
            Ok(line) => {
                if !controller.handle_line(&line)? {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => controller.dispatch(Msg::Tick)?,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    recipe_info!("Leaving recipe browser");
    Ok(())
}

/// Starts the engine, falling back to the default API base when the
/// configured one is unusable. Only a runtime failure is fatal.
fn start_effect_runner(settings: ClientSettings) -> Result<EffectRunner, EngineError> {
    match EffectRunner::new(settings.clone()) {
        Err(EngineError::Client(err)) => {
            recipe_warn!("{}; using default API base {}", err, DEFAULT_BASE_URL);
            eprintln!("Warning: {err}; using default API base {DEFAULT_BASE_URL}");
            EffectRunner::new(ClientSettings {
                base_url: DEFAULT_BASE_URL.to_string(),
                ..settings
            })
        }
        started => started,
    }
}

/// Owns the browser state and is the only place it is updated.
struct AppController<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> AppController<W> {
    fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            out,
        }
    }

    fn view(&self) -> AppViewModel {
        self.state.view()
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.runner.run(effects);
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn pump_engine(&mut self) -> io::Result<()> {
        for msg in self.runner.drain_messages() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    /// Applies one line of input. Returns `false` when the user wants out.
    fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        match commands::parse(line, &self.view()) {
            UiCommand::Send(msgs) => {
                for msg in msgs {
                    recipe_debug!("Input -> {:?}", msg);
                    self.dispatch(msg)?;
                }
            }
            UiCommand::Help => {
                writeln!(self.out, "{}", constants::HELP_TEXT)?;
                self.prompt()?;
            }
            UiCommand::Invalid(reason) => {
                writeln!(self.out, "{reason}")?;
                self.prompt()?;
            }
            UiCommand::Nothing => self.prompt()?,
            UiCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn render(&mut self) -> io::Result<()> {
        for line in render::render(&self.state.view()) {
            writeln!(self.out, "{line}")?;
        }
        self.prompt()
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", constants::PROMPT)?;
        self.out.flush()
    }
}
