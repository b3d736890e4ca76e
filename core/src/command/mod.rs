//! Console commands
//!
//! Text front end for the cvar registry.
//!
//! # Overview
//!
//! - [`ConsoleHost`] tokenizes a raw line and routes `(command, args)` to a
//!   [`ConsoleCommand`]; it also answers completion requests and owns `help`.
//! - [`CVarCommand`] implements `cvar`: list, read and write by name.
//! - [`Localizer`] renders every user-facing message from a key and named
//!   arguments; [`MessageTable`] is the TOML-backed implementation.
//!
//! # Usage
//!
//! ```rust,ignore
//! let registry = Arc::new(CVarRegistry::new());
//! let loc: Arc<dyn Localizer> = Arc::new(MessageTable::english());
//!
//! let mut host = ConsoleHost::new(Arc::clone(&loc));
//! host.register(CVarCommand::new(Arc::clone(&registry), loc, &ConsoleConfig::default()));
//!
//! let mut shell = BufferShell::new();
//! host.execute(&mut shell, "cvar fps_max 144");
//! ```

pub mod cvar_cmd;
mod help;
pub mod host;
pub mod loc;
pub mod shell;
mod tests;

pub use cvar_cmd::{CVarCommand, CVarOutcome, CommandError, TRUNCATION_MARKER, truncate_hint};
pub use host::{ConsoleHost, HELP_COMMAND, tokenize};
pub use loc::{Localizer, MessageTable};
pub use shell::{BufferShell, CompletionOption, CompletionResult, ConsoleCommand, ConsoleShell};
