//! Built-in `help` command

use super::host::{ConsoleHost, HELP_COMMAND};
use super::shell::{CompletionOption, CompletionResult, ConsoleShell};

impl ConsoleHost {
    /// `help` lists commands; `help <command>` prints its usage
    pub(super) fn execute_help(&self, shell: &mut dyn ConsoleShell, args: &[String]) {
        match args {
            [] => {
                let mut lines: Vec<String> = self
                    .commands()
                    .map(|cmd| {
                        let description = cmd.description();
                        self.loc.translate(
                            "cmd-help-top",
                            &[("command", cmd.name()), ("description", description.as_str())],
                        )
                    })
                    .collect();
                let own = self.loc.translate("cmd-help-desc", &[]);
                lines.push(self.loc.translate(
                    "cmd-help-top",
                    &[("command", HELP_COMMAND), ("description", own.as_str())],
                ));
                lines.sort();
                shell.write_line(&lines.join("\n"));
            }
            [name] if name == HELP_COMMAND => {
                shell.write_line(&self.loc.translate("cmd-help-help", &[]));
            }
            [name] => match self.find(name) {
                Some(cmd) => shell.write_line(&format!("{}\n{}", cmd.name(), cmd.help())),
                None => shell.write_error(
                    &self
                        .loc
                        .translate("cmd-help-unknown", &[("command", name.as_str())]),
                ),
            },
            _ => shell.write_error(&self.loc.translate("cmd-help-invalid-args", &[])),
        }
    }

    pub(super) fn complete_help(&self, args: &[String]) -> CompletionResult {
        if args.len() != 1 {
            return CompletionResult::empty();
        }

        let mut options: Vec<CompletionOption> = self
            .command_names()
            .chain(std::iter::once(HELP_COMMAND))
            .map(CompletionOption::bare)
            .collect();
        options.sort_by(|a, b| a.value.cmp(&b.value));

        CompletionResult::from_hint_options(
            options,
            self.loc.translate("cmd-help-arg-command", &[]),
        )
    }
}
