//! Shell protocol
//!
//! The boundary between a command dispatcher and the commands it routes to.

/// Output sink for a running command
///
/// Output is line-oriented; an error is a single human-readable line.
pub trait ConsoleShell {
    fn write_line(&mut self, text: &str);
    fn write_error(&mut self, text: &str);
}

/// A console command
pub trait ConsoleCommand: Send + Sync {
    /// Command token, e.g. `cvar`
    fn name(&self) -> &'static str;

    /// One-line description (shown in the command list)
    fn description(&self) -> String;

    /// Usage text (shown by `help <command>`)
    fn help(&self) -> String;

    /// Run the command with already-tokenized arguments
    fn execute(&self, shell: &mut dyn ConsoleShell, args: &[String]);

    /// Suggestions for the last element of `args`, which may be empty
    fn completion(&self, _args: &[String]) -> CompletionResult {
        CompletionResult::empty()
    }
}

/// A single completion candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOption {
    /// Text inserted when the candidate is picked
    pub value: String,
    /// Text shown next to the candidate
    pub hint: Option<String>,
}

impl CompletionOption {
    pub fn new(value: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn bare(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hint: None,
        }
    }
}

/// Completion answer: ordered candidates plus an optional prompt label
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionResult {
    pub options: Vec<CompletionOption>,
    pub hint: Option<String>,
}

impl CompletionResult {
    /// No completions
    pub fn empty() -> Self {
        Self::default()
    }

    /// Free-form input expected; only a prompt label
    pub fn from_hint(hint: impl Into<String>) -> Self {
        Self {
            options: Vec::new(),
            hint: Some(hint.into()),
        }
    }

    pub fn from_options(options: Vec<CompletionOption>) -> Self {
        Self {
            options,
            hint: None,
        }
    }

    pub fn from_hint_options(options: Vec<CompletionOption>, hint: impl Into<String>) -> Self {
        Self {
            options,
            hint: Some(hint.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.hint.is_none()
    }
}

/// Shell that collects output in memory
#[derive(Debug, Clone, Default)]
pub struct BufferShell {
    pub lines: Vec<String>,
    pub errors: Vec<String>,
}

impl BufferShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything collected so far
    pub fn clear(&mut self) {
        self.lines.clear();
        self.errors.clear();
    }
}

impl ConsoleShell for BufferShell {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn write_error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }
}
