use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::app::command::{parse_script, Command};
use crate::core::observable::Subscription;
use crate::core::view_model::MainViewModel;
use crate::domain::model::DisplayState;
use crate::utils::error::{AppError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub const WAITING_NOTICE: &str = "Waiting for both a number and a random number...";

/// Console presentation layer.
///
/// Observes the view model's display state and writes every published state
/// after the command that caused it.
pub struct Console {
    view_model: MainViewModel,
    format: OutputFormat,
    pending: Rc<RefCell<Vec<DisplayState>>>,
    _subscription: Subscription,
}

impl Console {
    pub fn new(view_model: MainViewModel, format: OutputFormat) -> Self {
        let display_state = view_model.display_state();
        let pending: Rc<RefCell<Vec<DisplayState>>> = Rc::new(RefCell::new(Vec::new()));

        let pending_clone = Rc::clone(&pending);
        let subscription = display_state.subscribe(move |state: &DisplayState| {
            pending_clone.borrow_mut().push(state.clone());
        });

        Self {
            view_model,
            format,
            pending,
            _subscription: subscription,
        }
    }

    pub fn view_model(&self) -> &MainViewModel {
        &self.view_model
    }

    /// Run one command and write whatever it produced.
    pub fn execute<W: Write>(&self, command: Command, out: &mut W) -> Result<Flow> {
        tracing::debug!(?command, "executing command");
        match command {
            Command::Add => self.view_model.on_add_button_clicked(),
            Command::Multiply => self.view_model.on_multiply_button_clicked(),
            Command::Reroll => self.view_model.on_random_button_clicked(),
            Command::Show => match self.view_model.display_state().get() {
                Some(state) => self.render(&state, out)?,
                None => writeln!(out, "{}", WAITING_NOTICE)?,
            },
            Command::Help => writeln!(out, "{}", Command::HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        if matches!(command, Command::Add | Command::Multiply | Command::Reroll) {
            self.flush_pending(out)?;
        }
        Ok(Flow::Continue)
    }

    /// Run a whole script. Any unknown command aborts before the first one runs.
    ///
    /// Only states published by the script's own commands are written. Use
    /// `show` to print one that existed beforehand.
    pub fn run_script<W: Write>(&self, script: &str, out: &mut W) -> Result<()> {
        let commands = parse_script(script)?;
        tracing::info!(commands = commands.len(), "running script");

        self.pending.borrow_mut().clear();
        for command in commands {
            if self.execute(command, out)? == Flow::Quit {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Read commands line by line until `quit` or end of input.
    ///
    /// Unknown commands are reported and the session continues.
    pub fn run_interactive<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<()> {
        self.pending.borrow_mut().clear();
        match self.view_model.display_state().get() {
            Some(state) => self.render(&state, out)?,
            None => writeln!(out, "{}", WAITING_NOTICE)?,
        }
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(out, "> ")?;
                out.flush()?;
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(e @ AppError::UnknownCommand { .. }) => {
                    tracing::warn!("{}", e);
                    writeln!(out, "❓ {} ({})", e, e.recovery_suggestion())?;
                }
                Err(e) => return Err(e),
            }

            write!(out, "> ")?;
            out.flush()?;
        }

        tracing::info!("session ended");
        Ok(())
    }

    fn flush_pending<W: Write>(&self, out: &mut W) -> Result<()> {
        let states: Vec<DisplayState> = self.pending.borrow_mut().drain(..).collect();
        for state in &states {
            self.render(state, out)?;
        }
        Ok(())
    }

    fn render<W: Write>(&self, state: &DisplayState, out: &mut W) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", state)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(state)?)?,
        }
        Ok(())
    }
}
