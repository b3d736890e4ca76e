//! CVar Shell - Interactive console for a cvar registry
//!
//! # Usage
//!
//! ```bash
//! # Start an interactive console with cvars from a definitions file
//! cvar --defs cvars.toml
//!
//! # Run commands and exit
//! cvar --defs cvars.toml -c "cvar fps_max 144" -c "cvar fps_max"
//! ```
//!
//! Inside the console, `:complete <line>` prints what tab completion would
//! offer for `<line>`, and `:quit` (or end of input) exits.
//!
//! # Configuration (console.toml)
//!
//! ```toml
//! hint_max_chars = 50
//! redact_reads = false
//! locale_file = "locale/de-DE.toml"
//! definitions = ["cvars.toml"]
//! ```

mod shell;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cvar_core::config;
use cvar_core::{
    CVarCommand, CVarDef, CVarFlags, CVarRegistry, ConsoleConfig, ConsoleHost, DefsFile,
    Localizer, MessageTable,
};

use shell::{StdoutShell, format_completion};

/// Prompt shown before each line
const SHELL_PROMPT: CVarDef<String> = CVarDef::new("shell.prompt", String::new(), CVarFlags::empty());
/// Echo each command before running it
const SHELL_ECHO: CVarDef<bool> = CVarDef::new("shell.echo", false, CVarFlags::empty());

/// CVar Shell - Inspect and edit configuration variables
#[derive(Parser)]
#[command(name = "cvar")]
#[command(about = "Interactive console for inspecting and editing cvars")]
#[command(version)]
struct Cli {
    /// Console config file (defaults to console.toml in the config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cvar definition files, registered after those named in the config
    #[arg(long = "defs")]
    defs: Vec<PathBuf>,

    /// Message file overriding the bundled English messages
    #[arg(long)]
    locale: Option<PathBuf>,

    /// Run a command line and exit (repeatable)
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let console_config = match &cli.config {
        Some(path) => ConsoleConfig::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => config::load(),
    };

    let loc: Arc<dyn Localizer> = Arc::new(load_messages(&cli, &console_config)?);

    let registry = Arc::new(CVarRegistry::new());
    registry.register_def(&SHELL_PROMPT)?;
    registry.set_def(&SHELL_PROMPT, "> ".to_string())?;
    registry.register_def(&SHELL_ECHO)?;

    for path in console_config.definitions.iter().chain(&cli.defs) {
        let count = DefsFile::load(path)?
            .register_all(&registry)
            .with_context(|| format!("registering {}", path.display()))?;
        tracing::debug!("{}: {} cvars", path.display(), count);
    }

    let mut host = ConsoleHost::new(Arc::clone(&loc));
    host.register(CVarCommand::new(
        Arc::clone(&registry),
        loc,
        &console_config,
    ));

    let mut out = StdoutShell;

    if !cli.commands.is_empty() {
        for line in &cli.commands {
            run_line(&host, &registry, &mut out, line);
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let prompt = registry.get_def(&SHELL_PROMPT).unwrap_or_default();
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        if line.trim() == ":quit" {
            break;
        }
        if let Some(partial) = line.strip_prefix(":complete ") {
            print!("{}", format_completion(&host.complete(partial)));
            continue;
        }

        run_line(&host, &registry, &mut out, &line);
    }

    Ok(())
}

fn run_line(host: &ConsoleHost, registry: &CVarRegistry, out: &mut StdoutShell, line: &str) {
    if registry.get_def(&SHELL_ECHO).unwrap_or(false) {
        println!("{}", line);
    }
    host.execute(out, line);
}

/// Bundled English, with the config's locale file and then `--locale` on top
fn load_messages(cli: &Cli, console_config: &ConsoleConfig) -> Result<MessageTable> {
    let mut messages = MessageTable::english();
    for path in console_config.locale_file.iter().chain(&cli.locale) {
        let overrides =
            MessageTable::load(path).with_context(|| format!("loading {}", path.display()))?;
        messages.merge(overrides);
    }
    Ok(messages)
}
