//! Interactive input
//!
//! Each line typed at the board is parsed into a `Command` and run against
//! the session `State` by the `CommandHandler`.

pub mod command;
pub mod handler;

pub use command::{create_command_table, parse_command, Command, CommandKind};
pub use handler::{CommandHandler, HandlerAction};
