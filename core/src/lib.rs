//! CVar Core - Typed configuration variables with a console front end
//!
//! This crate provides a registry of named, typed configuration variables and
//! the console command used to inspect and change them at runtime.
//!
//! # Architecture
//!
//! - [`CVarRegistry`] - Name → typed slot map; typed API for trusted code
//! - [`CVarCommand`] - The `cvar` console command (string coercion, completion)
//! - [`ConsoleHost`] - Line tokenizer and command router, with built-in `help`
//! - [`Localizer`] - Message lookup boundary; [`MessageTable`] loads TOML messages
//! - [`ConsoleConfig`] - `console.toml` settings

pub mod command;
pub mod config;
pub mod cvar;

// Re-export registry types
pub use cvar::{
    CVarDef, CVarError, CVarFlags, CVarInfo, CVarRegistry, CVarResult, CVarType, CVarValue,
    DefsError, DefsFile, InspectorRow, ParseValueError, ValueType, parse_value,
};

// Re-export console types
pub use command::{
    BufferShell, CVarCommand, CommandError, CompletionOption, CompletionResult, ConsoleCommand,
    ConsoleHost, ConsoleShell, Localizer, MessageTable,
};

pub use config::{ConfigError, ConsoleConfig};
