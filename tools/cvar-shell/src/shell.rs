//! Terminal output for the console

use std::fmt::Write;

use cvar_core::{CompletionResult, ConsoleShell};

/// Writes command output to stdout and errors to stderr
pub struct StdoutShell;

impl ConsoleShell for StdoutShell {
    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn write_error(&mut self, text: &str) {
        eprintln!("error: {}", text);
    }
}

/// Render a completion answer as one candidate per line, hints aligned
pub fn format_completion(result: &CompletionResult) -> String {
    let mut out = String::new();

    if let Some(hint) = &result.hint {
        let _ = writeln!(out, "[{}]", hint);
    }

    let width = result
        .options
        .iter()
        .map(|opt| opt.value.chars().count())
        .max()
        .unwrap_or(0);

    for opt in &result.options {
        match &opt.hint {
            Some(hint) => {
                let _ = writeln!(out, "  {:<width$}  {}", opt.value, hint, width = width);
            }
            None => {
                let _ = writeln!(out, "  {}", opt.value);
            }
        }
    }

    out
}
