//! Executes parsed commands against the session state

use super::command::{create_command_table, parse_command, Command, CommandKind};
use crate::state::State;
use crate::Result;
use log::{debug, warn};
use std::collections::HashMap;
use std::io::Write;

/// Action to take after processing a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerAction {
    /// Keep reading input
    Continue,
    /// Leave the command loop
    Quit,
}

const HELP: &str = "\
Commands:
  select IMAGE      open a category or speak an item (or just type IMAGE)
  add IMAGE TEXT    add a category at home, or an item inside a category
  list              images on this page
  category          name of the open category
  has IMAGE         is IMAGE on this page
  back              return to the categories
  save [FILE]       write the board definition
  view              this page as JSON
  quit              leave";

/// Line-oriented command handler
pub struct CommandHandler {
    table: HashMap<&'static str, CommandKind>,
}

impl CommandHandler {
    /// Create a handler with the default command words
    pub fn new() -> Self {
        let table = create_command_table();
        debug!("Creating command handler with {} command words", table.len());
        Self { table }
    }

    /// Process one input line, writing replies to `out`
    ///
    /// Board errors are reported to `out` and the loop carries on; only
    /// failures writing to `out` are returned. A quit whose autosave fails
    /// is reported like any other error and does not end the loop.
    pub fn process_line<W: Write>(
        &mut self,
        line: &str,
        state: &mut State,
        out: &mut W,
    ) -> Result<HandlerAction> {
        let command = match parse_command(line, &self.table) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(HandlerAction::Continue),
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(HandlerAction::Continue);
            }
        };

        let result = self.execute(command.clone(), state, out);
        if let Err(e) = &result {
            if e.is_selection_error() {
                debug!("Rejected pick: {}", e);
            } else {
                warn!("Command {:?} failed: {}", command, e);
            }
            writeln!(out, "{}", e)?;
        }

        // A failed autosave keeps the session open so the board can be saved elsewhere
        Ok(if command == Command::Quit && result.is_ok() {
            HandlerAction::Quit
        } else {
            HandlerAction::Continue
        })
    }

    fn execute<W: Write>(&mut self, command: Command, state: &mut State, out: &mut W) -> Result<()> {
        match command {
            Command::Select(image) => self.pick(&image, state, out)?,
            Command::Bare(image) => {
                if state.board.has_image(&image) {
                    self.pick(&image, state, out)?;
                } else {
                    writeln!(out, "Not on this page: {} (type help for commands)", image)?;
                }
            }
            Command::Add { image, text } => {
                state.add_item(&image, &text)?;
                writeln!(out, "Added {}", image)?;
            }
            Command::List => {
                for image in state.board.get_image_locs() {
                    writeln!(out, "{}", image)?;
                }
            }
            Command::Category => writeln!(out, "{}", state.board.get_category())?,
            Command::Has(image) => writeln!(out, "{}", state.board.has_image(&image))?,
            Command::Back => {
                state.reset();
                self.show_page(state, out)?;
            }
            Command::Save(path) => {
                match path {
                    Some(path) => state.save_as(path)?,
                    None => state.save()?,
                }
                writeln!(out, "Saved {}", state.board_path().display())?;
            }
            Command::View => {
                writeln!(out, "{}", serde_json::to_string(&state.board.snapshot())?)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => state.shutdown()?,
        }
        Ok(())
    }

    /// Select an image; opening a category announces the new page
    fn pick<W: Write>(&self, image: &str, state: &mut State, out: &mut W) -> Result<()> {
        let text = state.select(image)?;
        if text.is_empty() {
            self.show_page(state, out)?;
        }
        Ok(())
    }

    /// Describe the page now showing
    fn show_page<W: Write>(&self, state: &State, out: &mut W) -> Result<()> {
        let name = state.board.get_category();
        if state.board.current().is_some() {
            writeln!(out, "[{}]", name)?;
        } else {
            writeln!(out, "[home]")?;
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
