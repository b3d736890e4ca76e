//! CVar registry
//!
//! Owns every registered cvar and guards current values behind a single lock.


use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hashbrown::HashMap;

use super::error::{CVarError, CVarResult};
use super::types::{CVarDef, CVarFlags, CVarType, CVarValue, ValueType};

/// Argument that asks the console for the list of cvar names; never a valid name
pub const LIST_TOKEN: &str = "?";

/// A registered cvar
#[derive(Debug, Clone)]
struct CVarEntry {
    /// Declared type, fixed at registration
    value_type: ValueType,
    default_value: CVarValue,
    /// Always tagged with `value_type`
    current_value: CVarValue,
    flags: CVarFlags,
}

/// Read-only view of a registered cvar, for display layers
#[derive(Debug, Clone, PartialEq)]
pub struct CVarInfo {
    pub name: String,
    pub value_type: ValueType,
    pub flags: CVarFlags,
    pub value: CVarValue,
    pub default: CVarValue,
}

/// Registry of configuration variables
///
/// Construct one at startup, register everything, then share it by reference
/// (or `Arc`) with the console and any display layer. Writes are rare, so one
/// `RwLock` over the whole map is enough to keep readers from seeing a torn value.
#[derive(Debug, Default)]
pub struct CVarRegistry {
    entries: RwLock<HashMap<String, CVarEntry>>,
}

impl CVarRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave an entry half-written
    // (values are replaced whole), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CVarEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CVarEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a cvar with its type, default and flags.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if the name is empty, has whitespace, or is [`LIST_TOKEN`]
    /// - `DuplicateRegistration` if the name exists, whatever the new type
    /// - `TypeMismatch` if `default_value` is not tagged `value_type`
    pub fn register(
        &self,
        name: &str,
        value_type: ValueType,
        default_value: CVarValue,
        flags: CVarFlags,
    ) -> CVarResult<()> {
        if name.is_empty() || name == LIST_TOKEN || name.chars().any(char::is_whitespace) {
            tracing::warn!("rejected cvar registration with invalid name {:?}", name);
            return Err(CVarError::InvalidName(name.to_string()));
        }

        let mut entries = self.write();

        if entries.contains_key(name) {
            tracing::warn!("cvar '{}' registered twice", name);
            return Err(CVarError::DuplicateRegistration(name.to_string()));
        }

        if default_value.value_type() != value_type {
            return Err(CVarError::TypeMismatch {
                name: name.to_string(),
                expected: value_type,
                found: default_value.value_type(),
            });
        }

        tracing::debug!(
            "registered cvar '{}' ({}) = {}",
            name,
            value_type,
            if flags.contains(CVarFlags::CONFIDENTIAL) {
                "<confidential>".to_string()
            } else {
                default_value.to_string()
            }
        );

        entries.insert(
            name.to_string(),
            CVarEntry {
                value_type,
                current_value: default_value.clone(),
                default_value,
                flags,
            },
        );
        Ok(())
    }

    /// Register a typed definition
    pub fn register_def<T: CVarType>(&self, def: &CVarDef<T>) -> CVarResult<()> {
        self.register(
            def.name,
            T::VALUE_TYPE,
            def.default.clone().into(),
            def.flags,
        )
    }

    /// Check whether a cvar exists
    pub fn is_registered(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Get the declared type of a cvar
    pub fn get_type(&self, name: &str) -> CVarResult<ValueType> {
        self.with_entry(name, |entry| entry.value_type)
    }

    /// Get the flags of a cvar
    pub fn get_flags(&self, name: &str) -> CVarResult<CVarFlags> {
        self.with_entry(name, |entry| entry.flags)
    }

    /// Get the current value of a cvar
    ///
    /// The returned value is always tagged with the cvar's declared type.
    pub fn get_value(&self, name: &str) -> CVarResult<CVarValue> {
        self.with_entry(name, |entry| entry.current_value.clone())
    }

    /// Get the value a cvar was registered with
    pub fn get_default(&self, name: &str) -> CVarResult<CVarValue> {
        self.with_entry(name, |entry| entry.default_value.clone())
    }

    /// Get the current value as a concrete Rust type
    ///
    /// Fails with `TypeMismatch` if `T` is not the cvar's declared type.
    pub fn get<T: CVarType>(&self, name: &str) -> CVarResult<T> {
        let (value_type, value) =
            self.with_entry(name, |entry| (entry.value_type, entry.current_value.clone()))?;

        T::from_value(value).ok_or_else(|| CVarError::TypeMismatch {
            name: name.to_string(),
            expected: value_type,
            found: T::VALUE_TYPE,
        })
    }

    /// Get the current value of a typed definition
    pub fn get_def<T: CVarType>(&self, def: &CVarDef<T>) -> CVarResult<T> {
        self.get(def.name)
    }

    /// Replace the current value of a cvar.
    ///
    /// On failure the stored value is left untouched.
    ///
    /// # Errors
    ///
    /// - `NotRegistered` if the name is unknown
    /// - `TypeMismatch` if `value` is not tagged with the declared type
    pub fn set_value(&self, name: &str, value: CVarValue) -> CVarResult<()> {
        let mut entries = self.write();
        let entry = entries
            .get_mut(name)
            .ok_or_else(|| CVarError::NotRegistered(name.to_string()))?;

        if value.value_type() != entry.value_type {
            return Err(CVarError::TypeMismatch {
                name: name.to_string(),
                expected: entry.value_type,
                found: value.value_type(),
            });
        }

        entry.current_value = value;
        Ok(())
    }

    /// Set the current value from a concrete Rust type
    pub fn set<T: CVarType>(&self, name: &str, value: T) -> CVarResult<()> {
        self.set_value(name, value.into())
    }

    /// Set the current value of a typed definition
    pub fn set_def<T: CVarType>(&self, def: &CVarDef<T>, value: T) -> CVarResult<()> {
        self.set(def.name, value)
    }

    /// Restore a cvar to its registered default
    pub fn reset(&self, name: &str) -> CVarResult<()> {
        let mut entries = self.write();
        let entry = entries
            .get_mut(name)
            .ok_or_else(|| CVarError::NotRegistered(name.to_string()))?;
        entry.current_value = entry.default_value.clone();
        Ok(())
    }

    /// All registered names in lexicographic order
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Snapshot of every cvar, sorted by name
    ///
    /// Values are returned as stored; callers that display them must honor
    /// [`CVarFlags::CONFIDENTIAL`] themselves.
    pub fn entries(&self) -> Vec<CVarInfo> {
        let mut infos: Vec<CVarInfo> = self
            .read()
            .iter()
            .map(|(name, entry)| CVarInfo {
                name: name.clone(),
                value_type: entry.value_type,
                flags: entry.flags,
                value: entry.current_value.clone(),
                default: entry.default_value.clone(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Get number of registered cvars
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn with_entry<R>(&self, name: &str, f: impl FnOnce(&CVarEntry) -> R) -> CVarResult<R> {
        self.read()
            .get(name)
            .map(f)
            .ok_or_else(|| CVarError::NotRegistered(name.to_string()))
    }
}
