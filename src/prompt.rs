use std::{
    cell::RefCell,
    io::{self, BufRead, IsTerminal, StdinLock, Write},
};

use anyhow::{Result, bail};
use console::Term;
use dialoguer::{Input, theme::ColorfulTheme};
use thiserror::Error;
use tracing::warn;

/// The operator-facing questions a pipeline asks.
pub trait Prompter {
    /// Shows `items` with zero-based indices and returns the index chosen.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;
    /// Returns `true` only when the operator explicitly agrees.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{index} is out of range, pick 0 to {}", .len.saturating_sub(1))]
    OutOfRange { index: usize, len: usize },
}

/// Parses an index typed by the operator against a list of `len` items.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let index: usize = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;
    if index >= len {
        return Err(SelectionError::OutOfRange { index, len });
    }
    Ok(index)
}

/// Only a literal `y` continues; anything else, including an empty line, declines.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim() == "y"
}

/// Prompts on the controlling terminal, or reads answers line by line when
/// stdin or stderr is not a TTY (answers piped in from a script).
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    piped: Option<LinePrompter<StdinLock<'static>>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        let interactive = Term::stderr().is_term() && io::stdin().is_terminal();
        Self {
            theme: ColorfulTheme::default(),
            piped: (!interactive).then(|| LinePrompter::new(io::stdin().lock())),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        if let Some(piped) = &self.piped {
            return piped.select(prompt, items);
        }
        print_items(items);
        let len = items.len();
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(move |s: &String| parse_selection(s, len).map(|_| ()))
            .interact_text()?;
        Ok(parse_selection(&answer, len)?)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        if let Some(piped) = &self.piped {
            return piped.confirm(prompt);
        }
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(format!("{} (y/n)", prompt))
            .allow_empty(true)
            .interact_text()?;
        Ok(is_affirmative(&answer))
    }
}

/// Answers prompts from any line source. Invalid selections are reported and
/// the next line is read; running out of input is an error.
pub struct LinePrompter<R> {
    input: RefCell<R>,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: RefCell::new(input),
        }
    }

    fn read_answer(&self, prompt: &str) -> Result<String> {
        print!("{}: ", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            bail!("No answer for '{}': input closed", prompt);
        }
        Ok(line)
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        print_items(items);
        loop {
            let answer = self.read_answer(prompt)?;
            match parse_selection(&answer, items.len()) {
                Ok(index) => return Ok(index),
                Err(e) => warn!("{}", e),
            }
        }
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = self.read_answer(&format!("{} (y/n)", prompt))?;
        Ok(is_affirmative(&answer))
    }
}

fn print_items(items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        println!("{}: {}", i, item);
    }
}
