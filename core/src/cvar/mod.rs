//! Configuration variables
//!
//! Named, typed values registered once at startup and read or written at runtime.
//!
//! # Overview
//!
//! - [`CVarRegistry`] owns every cvar. Trusted code uses the typed accessors
//!   (`get::<T>`, `set::<T>`, [`CVarDef`]); the console goes through
//!   `get_value`/`set_value` with [`CVarValue`].
//! - [`parse_value`] turns console input into a value of a known [`ValueType`];
//!   `CVarValue`'s `Display` is the inverse.
//! - [`DefsFile`] registers cvars from a TOML document.
//! - [`inspect::snapshot`] gives display layers rows with confidential values withheld.
//!
//! # Usage
//!
//! ```rust,ignore
//! const FPS_MAX: CVarDef<i32> = CVarDef::new("fps_max", 60, CVarFlags::ARCHIVE);
//!
//! let registry = CVarRegistry::new();
//! registry.register_def(&FPS_MAX)?;
//! registry.set_def(&FPS_MAX, 144)?;
//! ```
//!
//! # Invariants
//!
//! - A name is registered at most once and its type never changes.
//! - A stored value is always tagged with its cvar's declared type.
//! - Lookups are exact and case-sensitive.

pub mod defs;
pub mod error;
pub mod inspect;
pub mod parse;
pub mod registry;
pub mod types;

pub use defs::{DefsError, DefsFile};
pub use error::{CVarError, CVarResult};
pub use inspect::InspectorRow;
pub use parse::{ParseValueError, parse_value};
pub use registry::{CVarInfo, CVarRegistry, LIST_TOKEN};
pub use types::{CVarDef, CVarFlags, CVarType, CVarValue, ValueType};
