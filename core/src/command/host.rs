//! Console host
//!
//! Tokenizes raw command lines and routes them to registered commands.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::loc::Localizer;
use super::shell::{CompletionOption, CompletionResult, ConsoleCommand, ConsoleShell};

/// Name of the built-in help command
pub const HELP_COMMAND: &str = "help";

/// Routes command lines to commands by name
pub struct ConsoleHost {
    commands: BTreeMap<&'static str, Box<dyn ConsoleCommand>>,
    pub(super) loc: Arc<dyn Localizer>,
}

impl ConsoleHost {
    pub fn new(loc: Arc<dyn Localizer>) -> Self {
        Self {
            commands: BTreeMap::new(),
            loc,
        }
    }

    /// Add a command. Returns `false` (and keeps the existing one) if the
    /// name is taken.
    pub fn register(&mut self, command: impl ConsoleCommand + 'static) -> bool {
        let name = command.name();
        if name == HELP_COMMAND || self.commands.contains_key(name) {
            tracing::warn!("console command '{}' registered twice - ignored", name);
            return false;
        }
        self.commands.insert(name, Box::new(command));
        true
    }

    pub fn find(&self, name: &str) -> Option<&dyn ConsoleCommand> {
        self.commands.get(name).map(|cmd| &**cmd)
    }

    /// Registered command names in sorted order, excluding `help`
    pub fn command_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub(super) fn commands(&self) -> impl Iterator<Item = &dyn ConsoleCommand> {
        self.commands.values().map(|cmd| &**cmd)
    }

    /// Execute a raw command line.
    pub fn execute(&self, shell: &mut dyn ConsoleShell, line: &str) {
        let tokens = tokenize(line);
        let Some((command, args)) = tokens.split_first() else {
            return;
        };

        // Arguments can carry confidential values; only the command is logged
        tracing::debug!("console command '{}' ({} args)", command, args.len());

        if command == HELP_COMMAND {
            self.execute_help(shell, args);
            return;
        }

        match self.find(command) {
            Some(cmd) => cmd.execute(shell, args),
            None => shell.write_error(
                &self
                    .loc
                    .translate("shell-unknown-command", &[("command", command.as_str())]),
            ),
        }
    }

    /// Completion for the argument under the cursor at the end of `line`.
    ///
    /// While the first token is being typed, command names are offered.
    /// Afterwards the command sees its arguments, with an empty last argument
    /// if the line ends in whitespace.
    pub fn complete(&self, line: &str) -> CompletionResult {
        let (tokens, in_quote) = split_tokens(line);
        let new_arg = !in_quote && line.ends_with(char::is_whitespace);

        if tokens.len() <= 1 && !new_arg {
            return self.complete_command_name();
        }

        let Some((command, args)) = tokens.split_first() else {
            return self.complete_command_name();
        };
        let mut args = args.to_vec();
        if new_arg {
            args.push(String::new());
        }

        if command == HELP_COMMAND {
            return self.complete_help(&args);
        }

        self.find(command)
            .map(|cmd| cmd.completion(&args))
            .unwrap_or_default()
    }

    fn complete_command_name(&self) -> CompletionResult {
        let mut options: Vec<CompletionOption> = self
            .commands()
            .map(|cmd| CompletionOption::new(cmd.name(), cmd.description()))
            .collect();
        options.push(CompletionOption::new(
            HELP_COMMAND,
            self.loc.translate("cmd-help-desc", &[]),
        ));
        options.sort_by(|a, b| a.value.cmp(&b.value));
        CompletionResult::from_options(options)
    }
}

/// Split a command line into tokens.
///
/// Whitespace separates tokens. Double quotes group a token and may be empty
/// (`""`); inside quotes `\"` and `\\` are escapes. An unterminated quote runs
/// to the end of the line.
pub fn tokenize(line: &str) -> Vec<String> {
    split_tokens(line).0
}

/// Tokens plus whether the line ended inside an open quote
fn split_tokens(line: &str) -> (Vec<String>, bool) {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quote = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quote {
            match c {
                '"' => in_quote = false,
                '\\' if matches!(chars.peek(), Some('"' | '\\')) => {
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                }
                _ => current.push(c),
            }
        } else if c == '"' {
            in_quote = true;
            in_token = true;
        } else if c.is_whitespace() {
            if in_token {
                tokens.push(std::mem::take(&mut current));
                in_token = false;
            }
        } else {
            current.push(c);
            in_token = true;
        }
    }

    if in_token {
        tokens.push(current);
    }

    (tokens, in_quote)
}
