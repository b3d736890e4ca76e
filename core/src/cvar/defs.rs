//! Declarative cvar definitions
//!
//! Lets a host register cvars from a TOML document instead of code:
//!
//! ```toml
//! [[cvar]]
//! name = "fps_max"
//! type = "Integer32"
//! default = 60
//! flags = ["ARCHIVE"]
//!
//! [[cvar]]
//! name = "net.password"
//! type = "String"
//! default = ""
//! flags = ["CONFIDENTIAL"]
//! ```
//!
//! Only registrations are read from here; current values are never written back.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::CVarError;
use super::registry::CVarRegistry;
use super::types::{CVarFlags, CVarValue, ValueType};

/// Errors from loading or applying a definitions document
#[derive(Debug, thiserror::Error)]
pub enum DefsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid cvar definitions: {0}")]
    Toml(#[from] toml::de::Error),

    /// Declared type is not in the coercion table
    #[error("cvar '{name}' declares unsupported type '{type_name}'")]
    UnsupportedType { name: String, type_name: String },

    /// Default value cannot be represented in the declared type
    #[error("cvar '{name}' has type {expected} but its default is a TOML {found}")]
    DefaultMismatch {
        name: String,
        expected: ValueType,
        found: &'static str,
    },

    #[error("cvar '{name}' uses unknown flag '{flag}'")]
    UnknownFlag { name: String, flag: String },

    #[error(transparent)]
    Registry(#[from] CVarError),
}

/// A parsed definitions document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefsFile {
    #[serde(default, rename = "cvar")]
    pub cvars: Vec<DefEntry>,
}

/// One `[[cvar]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct DefEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub default: toml::Value,
    #[serde(default)]
    pub flags: Vec<String>,
}

/// A definition resolved against the type table, ready to register
#[derive(Debug, Clone, PartialEq)]
struct ResolvedDef<'a> {
    name: &'a str,
    value_type: ValueType,
    default: CVarValue,
    flags: CVarFlags,
}

impl DefsFile {
    /// Parse a definitions document from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, DefsError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a definitions file
    pub fn load(path: &Path) -> Result<Self, DefsError> {
        let text = std::fs::read_to_string(path).map_err(|source| DefsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Register every definition, in document order.
    ///
    /// All entries are resolved before anything is registered, so a bad type,
    /// default or flag leaves the registry untouched. Registry errors (such as
    /// a duplicate name) stop at the failing entry.
    ///
    /// Returns the number of cvars registered.
    pub fn register_all(&self, registry: &CVarRegistry) -> Result<usize, DefsError> {
        let resolved = self
            .cvars
            .iter()
            .map(DefEntry::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        for def in &resolved {
            registry.register(def.name, def.value_type, def.default.clone(), def.flags)?;
        }

        tracing::info!("registered {} cvars from definitions", resolved.len());
        Ok(resolved.len())
    }
}

impl DefEntry {
    fn resolve(&self) -> Result<ResolvedDef<'_>, DefsError> {
        let value_type =
            ValueType::from_name(&self.type_name).ok_or_else(|| DefsError::UnsupportedType {
                name: self.name.clone(),
                type_name: self.type_name.clone(),
            })?;

        let default =
            toml_to_value(value_type, &self.default).ok_or_else(|| DefsError::DefaultMismatch {
                name: self.name.clone(),
                expected: value_type,
                found: self.default.type_str(),
            })?;

        let mut flags = CVarFlags::empty();
        for flag in &self.flags {
            flags |= CVarFlags::from_name(flag).ok_or_else(|| DefsError::UnknownFlag {
                name: self.name.clone(),
                flag: flag.clone(),
            })?;
        }

        Ok(ResolvedDef {
            name: &self.name,
            value_type,
            default,
            flags,
        })
    }
}

/// Convert a TOML scalar to a value of `value_type`.
///
/// Integers are accepted for float types; out-of-range integers are rejected.
fn toml_to_value(value_type: ValueType, value: &toml::Value) -> Option<CVarValue> {
    use toml::Value;

    match (value_type, value) {
        (ValueType::Boolean, Value::Boolean(b)) => Some(CVarValue::Boolean(*b)),
        (ValueType::Integer32, Value::Integer(i)) => {
            i32::try_from(*i).ok().map(CVarValue::Integer32)
        }
        (ValueType::Integer64, Value::Integer(i)) => Some(CVarValue::Integer64(*i)),
        (ValueType::Float32, Value::Float(f)) => Some(CVarValue::Float32(*f as f32)),
        (ValueType::Float32, Value::Integer(i)) => Some(CVarValue::Float32(*i as f32)),
        (ValueType::Float64, Value::Float(f)) => Some(CVarValue::Float64(*f)),
        (ValueType::Float64, Value::Integer(i)) => Some(CVarValue::Float64(*i as f64)),
        (ValueType::String, Value::String(s)) => Some(CVarValue::String(s.clone())),
        _ => None,
    }
}
