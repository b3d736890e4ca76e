//! Inspector snapshot
//!
//! Flattens the registry into display rows for a debug overlay or dev window.
//! Confidential values are withheld here so a display layer built on these rows
//! cannot leak them by accident.

use super::registry::CVarRegistry;
use super::types::CVarFlags;

/// One cvar as an inspector shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorRow {
    pub name: String,
    /// Type name, e.g. `Integer32`
    pub type_name: &'static str,
    /// Rendered current value, `None` if the cvar is confidential
    pub value: Option<String>,
    /// Current value differs from the registered default
    pub modified: bool,
    pub flags: CVarFlags,
}

impl InspectorRow {
    pub fn is_confidential(&self) -> bool {
        self.flags.contains(CVarFlags::CONFIDENTIAL)
    }
}

/// Build inspector rows for every cvar, sorted by name
pub fn snapshot(registry: &CVarRegistry) -> Vec<InspectorRow> {
    registry
        .entries()
        .into_iter()
        .map(|info| {
            let confidential = info.flags.contains(CVarFlags::CONFIDENTIAL);
            InspectorRow {
                type_name: info.value_type.type_name(),
                value: (!confidential).then(|| info.value.to_string()),
                modified: info.value != info.default,
                flags: info.flags,
                name: info.name,
            }
        })
        .collect()
}
