//! The `cvar` console command
//!
//! ```text
//! cvar ?              list every registered name
//! cvar <name>         print the current value
//! cvar <name> <value> parse and store a new value
//! ```

use std::sync::Arc;

use crate::config::ConsoleConfig;
use crate::cvar::{
    CVarError, CVarFlags, CVarInfo, CVarRegistry, LIST_TOKEN, ParseValueError, parse_value,
};

use super::loc::Localizer;
use super::shell::{CompletionOption, CompletionResult, ConsoleCommand, ConsoleShell};

/// Appended to a completion hint that was cut short
pub const TRUNCATION_MARKER: &str = "…";

/// Why a `cvar` invocation failed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// Zero or more than two arguments
    #[error("expected one or two arguments, got {0}")]
    InvalidArity(usize),

    #[error("cvar '{0}' is not registered")]
    NotRegistered(String),

    /// Value does not parse as the cvar's type
    #[error(transparent)]
    ParseError(#[from] ParseValueError),

    /// Registry refused a value that was parsed for its own type
    #[error("registry rejected update of '{name}': {source}")]
    Internal {
        name: String,
        #[source]
        source: CVarError,
    },
}

/// Successful `cvar` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CVarOutcome {
    /// `cvar ?`: sorted names
    Listed(Vec<String>),
    /// `cvar <name>`: rendered value
    Read(String),
    /// `cvar <name> <value>`
    Written,
}

/// Reads and writes registry values from console text
pub struct CVarCommand {
    registry: Arc<CVarRegistry>,
    loc: Arc<dyn Localizer>,
    hint_max_chars: usize,
    redact_reads: bool,
}

impl CVarCommand {
    pub fn new(registry: Arc<CVarRegistry>, loc: Arc<dyn Localizer>, config: &ConsoleConfig) -> Self {
        Self {
            registry,
            loc,
            hint_max_chars: config.hint_max_chars,
            redact_reads: config.redact_reads,
        }
    }

    /// Run the command without touching a shell
    pub fn run(&self, args: &[String]) -> Result<CVarOutcome, CommandError> {
        match args {
            [name] if name == LIST_TOKEN => Ok(CVarOutcome::Listed(self.registry.list_names())),
            [name] => self.read(name),
            [name, value] => self.write(name, value),
            _ => Err(CommandError::InvalidArity(args.len())),
        }
    }

    fn read(&self, name: &str) -> Result<CVarOutcome, CommandError> {
        let not_registered = |_| CommandError::NotRegistered(name.to_string());
        let value = self.registry.get_value(name).map_err(not_registered)?;

        if self.redact_reads && self.is_confidential(name) {
            return Ok(CVarOutcome::Read(self.hidden_placeholder()));
        }

        Ok(CVarOutcome::Read(value.to_string()))
    }

    fn write(&self, name: &str, input: &str) -> Result<CVarOutcome, CommandError> {
        let value_type = self
            .registry
            .get_type(name)
            .map_err(|_| CommandError::NotRegistered(name.to_string()))?;

        let value = parse_value(value_type, input)?;

        self.registry
            .set_value(name, value)
            .map_err(|source| CommandError::Internal {
                name: name.to_string(),
                source,
            })?;

        Ok(CVarOutcome::Written)
    }

    fn is_confidential(&self, name: &str) -> bool {
        self.registry
            .get_flags(name)
            .is_ok_and(|flags| flags.contains(CVarFlags::CONFIDENTIAL))
    }

    fn hidden_placeholder(&self) -> String {
        self.loc.translate("cmd-cvar-value-hidden", &[])
    }

    /// Completion hint for a cvar name: its value, or the placeholder if confidential
    pub fn value_hint(&self, info: &CVarInfo) -> String {
        if info.flags.contains(CVarFlags::CONFIDENTIAL) {
            return self.hidden_placeholder();
        }
        truncate_hint(&info.value.to_string(), self.hint_max_chars)
    }

    /// User-facing text for an error
    pub fn error_message(&self, err: &CommandError) -> String {
        match err {
            CommandError::InvalidArity(_) => self.loc.translate("cmd-cvar-invalid-args", &[]),
            CommandError::NotRegistered(name) => self
                .loc
                .translate("cmd-cvar-not-registered", &[("cvar", name.as_str())]),
            CommandError::ParseError(e) => self
                .loc
                .translate("cmd-cvar-parse-error", &[("type", e.expected.type_name())]),
            CommandError::Internal { name, .. } => self
                .loc
                .translate("cmd-cvar-internal-error", &[("cvar", name.as_str())]),
        }
    }
}

impl ConsoleCommand for CVarCommand {
    fn name(&self) -> &'static str {
        "cvar"
    }

    fn description(&self) -> String {
        self.loc.translate("cmd-cvar-desc", &[])
    }

    fn help(&self) -> String {
        self.loc.translate("cmd-cvar-help", &[])
    }

    fn execute(&self, shell: &mut dyn ConsoleShell, args: &[String]) {
        match self.run(args) {
            Ok(CVarOutcome::Listed(names)) => shell.write_line(&names.join("\n")),
            Ok(CVarOutcome::Read(text)) => shell.write_line(&text),
            Ok(CVarOutcome::Written) => {}
            Err(err) => {
                if let CommandError::Internal { source, .. } = &err {
                    tracing::error!("cvar command hit a registry defect: {}", source);
                }
                shell.write_error(&self.error_message(&err));
            }
        }
    }

    fn completion(&self, args: &[String]) -> CompletionResult {
        match args.len() {
            0 | 1 => {
                let mut options: Vec<CompletionOption> = self
                    .registry
                    .entries()
                    .iter()
                    .map(|info| CompletionOption::new(info.name.clone(), self.value_hint(info)))
                    .collect();
                options.push(CompletionOption::new(
                    LIST_TOKEN,
                    self.loc.translate("cmd-cvar-compl-list", &[]),
                ));

                // Grouped by value, so cvars sharing a value sit together
                options.sort_by(|a, b| a.hint.cmp(&b.hint));

                CompletionResult::from_hint_options(
                    options,
                    self.loc.translate("cmd-cvar-arg-name", &[]),
                )
            }
            2 => match self.registry.get_type(&args[0]) {
                Ok(value_type) => CompletionResult::from_hint(format!("<{}>", value_type)),
                Err(_) => CompletionResult::empty(),
            },
            _ => CompletionResult::empty(),
        }
    }
}

/// Cut `value` to at most `max_chars` characters, marking the cut.
pub fn truncate_hint(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &value[..cut], TRUNCATION_MARKER),
        None => value.to_string(),
    }
}
