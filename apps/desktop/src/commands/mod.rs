//! # Commands Module
//!
//! Line commands typed at the prompt, mapped onto window handlers.
//!
//! ## Command Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input                  Handler                                         │
//! │  ─────────────────────  ──────────────────────────────────────────────  │
//! │  id|name|qty|price <v>  form.set(field, v)   (no value clears field)   │
//! │  create                 on_create                                       │
//! │  read                   on_read                                         │
//! │  update                 on_update                                       │
//! │  delete                 on_delete                                       │
//! │  refresh                load_products                                   │
//! │  clear                  clear_inputs                                    │
//! │  select <row>           on_table_click(row - 1)                         │
//! │  show / help / quit     redraw / usage / exit                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use crate::error::DesktopError;
use crate::state::FormField;
use crate::window::ProductWindow;

/// A parsed line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Create,
    Read,
    Update,
    Delete,
    Refresh,
    Clear,
    /// 1-based row number as displayed
    Select(usize),
    Show,
    Help,
    Quit,
}

/// What the front end should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    ShowHelp,
    Quit,
}

pub const HELP: &str = "\
Commands:
  id <n>        Set Product ID         create    Create product from form
  name <text>   Set Name               read      Load product by ID
  qty <n>       Set Quantity           update    Update non-empty fields
  price <x>     Set Price              delete    Delete product by ID
  select <row>  Copy table row         refresh   Reload table
  clear         Empty the form         show      Redraw
  help          This text              quit      Exit";

impl FromStr for Command {
    type Err = DesktopError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" | "show" => Command::Show,
            "create" => Command::Create,
            "read" => Command::Read,
            "update" => Command::Update,
            "delete" => Command::Delete,
            "refresh" => Command::Refresh,
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "select" => {
                let row = rest
                    .parse::<usize>()
                    .ok()
                    .filter(|row| *row >= 1)
                    .ok_or_else(|| DesktopError::input("select needs a row number (1, 2, ...)"))?;
                Command::Select(row)
            }
            field => match field.parse::<FormField>() {
                Ok(field) => Command::Set(field, rest.to_string()),
                Err(_) => {
                    return Err(DesktopError::input(format!(
                        "Unknown command: {} (type 'help')",
                        word
                    )))
                }
            },
        };
        Ok(command)
    }
}

/// Runs one command against the window.
pub async fn execute(window: &mut ProductWindow, command: Command) -> Outcome {
    match command {
        Command::Set(field, value) => window.form.set(field, value),
        Command::Create => window.on_create().await,
        Command::Read => window.on_read().await,
        Command::Update => window.on_update().await,
        Command::Delete => window.on_delete().await,
        Command::Refresh => window.load_products().await,
        Command::Clear => window.clear_inputs(),
        Command::Select(row) => window.on_table_click(row - 1),
        Command::Show => {}
        Command::Help => return Outcome::ShowHelp,
        Command::Quit => return Outcome::Quit,
    }
    Outcome::Redraw
}
