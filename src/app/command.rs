use crate::utils::error::{AppError, Result};
use std::str::FromStr;

/// A user action typed at the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Multiply,
    Reroll,
    Show,
    Help,
    Quit,
}

impl Command {
    pub const HELP: &'static str = "\
Commands:
  add, a, +               add to the number
  double, multiply, d, *  multiply the number
  reroll, random, r       roll a new random number
  show, s                 show the current state
  help, h, ?              show this help
  quit, exit, q           leave";
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "a" | "+" => Ok(Command::Add),
            "double" | "multiply" | "d" | "*" => Ok(Command::Multiply),
            "reroll" | "random" | "r" => Ok(Command::Reroll),
            "show" | "s" => Ok(Command::Show),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(AppError::UnknownCommand {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// Parse a script of commands separated by commas and/or whitespace.
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
