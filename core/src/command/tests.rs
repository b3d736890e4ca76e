//! Tests for the console commands

#![cfg(test)]

use std::sync::Arc;

use crate::config::ConsoleConfig;
use crate::cvar::{CVarFlags, CVarRegistry, CVarValue, ParseValueError, ValueType};

use super::{
    BufferShell, CVarCommand, CVarOutcome, CommandError, CompletionOption, CompletionResult,
    ConsoleCommand, ConsoleHost, Localizer, MessageTable, TRUNCATION_MARKER, truncate_hint,
};

struct Fixture {
    registry: Arc<CVarRegistry>,
    host: ConsoleHost,
    cmd: CVarCommand,
}

impl Fixture {
    fn new() -> Self {
        Self::with_config(ConsoleConfig::default())
    }

    fn with_config(config: ConsoleConfig) -> Self {
        let registry = Arc::new(CVarRegistry::new());
        let loc: Arc<dyn Localizer> = Arc::new(MessageTable::english());

        let mut host = ConsoleHost::new(Arc::clone(&loc));
        assert!(host.register(CVarCommand::new(
            Arc::clone(&registry),
            Arc::clone(&loc),
            &config
        )));
        let cmd = CVarCommand::new(Arc::clone(&registry), loc, &config);

        Self {
            registry,
            host,
            cmd,
        }
    }

    fn register(&self, name: &str, value: CVarValue, flags: CVarFlags) {
        self.registry
            .register(name, value.value_type(), value, flags)
            .unwrap();
    }

    fn exec(&self, line: &str) -> BufferShell {
        let mut shell = BufferShell::new();
        self.host.execute(&mut shell, line);
        shell
    }

    fn read(&self, name: &str) -> String {
        let shell = self.exec(&format!("cvar {}", name));
        assert!(shell.errors.is_empty(), "unexpected errors {:?}", shell.errors);
        assert_eq!(shell.lines.len(), 1);
        shell.lines[0].clone()
    }
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Execute
// ============================================================================

#[test]
fn test_fps_max_scenario() {
    let fx = Fixture::new();
    fx.register("fps_max", CVarValue::Integer32(60), CVarFlags::empty());

    assert_eq!(fx.read("fps_max"), "60");

    let shell = fx.exec("cvar fps_max 144");
    assert!(shell.lines.is_empty());
    assert!(shell.errors.is_empty());
    assert_eq!(fx.read("fps_max"), "144");

    let shell = fx.exec("cvar fps_max notanumber");
    assert_eq!(
        shell.errors,
        vec!["Input value is in incorrect format for type Integer32"]
    );
    assert_eq!(
        fx.cmd.run(&args(&["fps_max", "notanumber"])),
        Err(CommandError::ParseError(ParseValueError {
            expected: ValueType::Integer32,
            input: "notanumber".to_string(),
        }))
    );
    assert_eq!(fx.read("fps_max"), "144");
}

#[test]
fn test_not_registered_and_arity() {
    let fx = Fixture::new();

    assert_eq!(
        fx.cmd.run(&args(&["doesnotexist"])),
        Err(CommandError::NotRegistered("doesnotexist".to_string()))
    );
    assert_eq!(
        fx.cmd.run(&args(&["doesnotexist", "1"])),
        Err(CommandError::NotRegistered("doesnotexist".to_string()))
    );
    assert_eq!(fx.cmd.run(&[]), Err(CommandError::InvalidArity(0)));
    assert_eq!(
        fx.cmd.run(&args(&["a", "b", "c"])),
        Err(CommandError::InvalidArity(3))
    );

    let shell = fx.exec("cvar doesnotexist");
    assert!(shell.lines.is_empty());
    assert_eq!(shell.errors.len(), 1);
    assert!(shell.errors[0].contains("'doesnotexist'"));

    let shell = fx.exec("cvar");
    assert_eq!(shell.errors, vec!["Must provide exactly one or two arguments."]);
}

#[test]
fn test_list_is_sorted_and_unfiltered() {
    let fx = Fixture::new();
    fx.register("net.port", CVarValue::Integer32(7777), CVarFlags::REPLICATED);
    fx.register("net.password", CVarValue::from("x"), CVarFlags::CONFIDENTIAL);
    fx.register("audio.volume", CVarValue::Float32(0.8), CVarFlags::ARCHIVE);

    let shell = fx.exec("cvar ?");
    assert_eq!(shell.lines, vec!["audio.volume\nnet.password\nnet.port"]);
    assert_eq!(fx.exec("cvar ?").lines, shell.lines);

    assert_eq!(
        fx.cmd.run(&args(&["?"])),
        Ok(CVarOutcome::Listed(fx.registry.list_names()))
    );
}

#[test]
fn test_list_token_with_value_is_a_write() {
    let fx = Fixture::new();
    assert_eq!(
        fx.cmd.run(&args(&["?", "1"])),
        Err(CommandError::NotRegistered("?".to_string()))
    );
}

#[test]
fn test_bool_coercion_through_console() {
    let fx = Fixture::new();
    fx.register("sv_cheats", CVarValue::Boolean(false), CVarFlags::CHEAT);

    fx.exec("cvar sv_cheats 1");
    assert_eq!(fx.registry.get::<bool>("sv_cheats"), Ok(true));
    fx.exec("cvar sv_cheats FALSE");
    assert_eq!(fx.registry.get::<bool>("sv_cheats"), Ok(false));
    fx.exec("cvar sv_cheats True");
    assert_eq!(fx.read("sv_cheats"), "true");

    let shell = fx.exec("cvar sv_cheats 2");
    assert_eq!(
        shell.errors,
        vec!["Input value is in incorrect format for type Boolean"]
    );
    assert_eq!(fx.registry.get::<bool>("sv_cheats"), Ok(true));
}

#[test]
fn test_string_and_float_writes() {
    let fx = Fixture::new();
    fx.register("motd", CVarValue::from("welcome"), CVarFlags::empty());
    fx.register("volume", CVarValue::Float32(1.0), CVarFlags::empty());

    fx.exec(r#"cvar motd "hello there""#);
    assert_eq!(fx.read("motd"), "hello there");

    fx.exec(r#"cvar motd """#);
    assert_eq!(fx.read("motd"), "");

    fx.exec("cvar volume 1e-1");
    assert_eq!(fx.read("volume"), "0.1");
}

#[test]
fn test_reads_not_redacted_by_default() {
    let fx = Fixture::new();
    fx.register("net.password", CVarValue::from("hunter2"), CVarFlags::CONFIDENTIAL);
    assert_eq!(fx.read("net.password"), "hunter2");
}

#[test]
fn test_redact_reads_uses_hint_placeholder() {
    let fx = Fixture::with_config(ConsoleConfig {
        redact_reads: true,
        ..ConsoleConfig::default()
    });
    fx.register("net.password", CVarValue::from("hunter2"), CVarFlags::CONFIDENTIAL);
    fx.register("fps_max", CVarValue::Integer32(60), CVarFlags::empty());

    assert_eq!(fx.read("net.password"), "<hidden>");
    assert_eq!(fx.read("fps_max"), "60");

    // Writes still go through
    fx.exec("cvar net.password swordfish");
    assert_eq!(
        fx.registry.get::<String>("net.password"),
        Ok("swordfish".to_string())
    );
}

// ============================================================================
// Completion
// ============================================================================

#[test]
fn test_confidential_hint_is_placeholder() {
    let fx = Fixture::new();
    fx.register("net.password", CVarValue::from(""), CVarFlags::CONFIDENTIAL);

    let long = "s".repeat(200);
    for value in ["", "hunter2", long.as_str()] {
        fx.registry.set("net.password", value.to_string()).unwrap();
        let result = fx.cmd.completion(&args(&[""]));
        assert!(
            result
                .options
                .contains(&CompletionOption::new("net.password", "<hidden>"))
        );
        if !value.is_empty() {
            assert!(
                result
                    .options
                    .iter()
                    .all(|opt| !opt.hint.as_deref().unwrap_or("").contains(value))
            );
        }
    }
}

#[test]
fn test_name_completion_sorted_by_hint() {
    let fx = Fixture::new();
    fx.register("a", CVarValue::Integer32(5), CVarFlags::empty());
    fx.register("b", CVarValue::Integer32(1), CVarFlags::empty());
    fx.register("c", CVarValue::Boolean(true), CVarFlags::empty());
    fx.register("d", CVarValue::Integer32(1), CVarFlags::empty());

    let result = fx.cmd.completion(&args(&[""]));
    assert_eq!(result.hint.as_deref(), Some("<name | ?>"));

    let pairs: Vec<(&str, &str)> = result
        .options
        .iter()
        .map(|o| (o.value.as_str(), o.hint.as_deref().unwrap_or("")))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("b", "1"),
            ("d", "1"),
            ("a", "5"),
            ("?", "List available CVars"),
            ("c", "true"),
        ]
    );
}

#[test]
fn test_hint_truncation() {
    let fx = Fixture::new();
    let exact = "x".repeat(50);
    let long = "y".repeat(51);
    fx.register("exact", CVarValue::from(exact.as_str()), CVarFlags::empty());
    fx.register("long", CVarValue::from(long.as_str()), CVarFlags::empty());

    let infos = fx.registry.entries();
    assert_eq!(fx.cmd.value_hint(&infos[0]), exact);

    let hint = fx.cmd.value_hint(&infos[1]);
    assert_eq!(hint, format!("{}{}", "y".repeat(50), TRUNCATION_MARKER));
}

#[test]
fn test_truncate_hint_counts_characters() {
    assert_eq!(truncate_hint("", 50), "");
    assert_eq!(truncate_hint("short", 50), "short");

    let wide = "é".repeat(60);
    let hint = truncate_hint(&wide, 50);
    assert!(hint.ends_with(TRUNCATION_MARKER));
    assert_eq!(hint.chars().count(), 51);
    assert_eq!(truncate_hint(&"é".repeat(50), 50), "é".repeat(50));
}

#[test]
fn test_hint_length_follows_config() {
    let fx = Fixture::with_config(ConsoleConfig {
        hint_max_chars: 4,
        ..ConsoleConfig::default()
    });
    fx.register("motd", CVarValue::from("welcome"), CVarFlags::empty());
    let infos = fx.registry.entries();
    assert_eq!(fx.cmd.value_hint(&infos[0]), "welc…");
}

#[test]
fn test_value_completion_is_type_hint() {
    let fx = Fixture::new();
    fx.register("fps_max", CVarValue::Integer32(60), CVarFlags::empty());
    fx.register("volume", CVarValue::Float64(0.5), CVarFlags::empty());

    assert_eq!(
        fx.cmd.completion(&args(&["fps_max", ""])),
        CompletionResult::from_hint("<Integer32>")
    );
    assert_eq!(
        fx.cmd.completion(&args(&["volume", "0."])),
        CompletionResult::from_hint("<Float64>")
    );
    assert!(fx.cmd.completion(&args(&["missing", ""])).is_empty());
    assert!(fx.cmd.completion(&args(&["fps_max", "1", ""])).is_empty());
}

// ============================================================================
// Host
// ============================================================================

#[test]
fn test_host_completion_routes_by_position() {
    let fx = Fixture::new();
    fx.register("fps_max", CVarValue::Integer32(60), CVarFlags::empty());

    let names = fx.host.complete("cv");
    let values: Vec<&str> = names.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["cvar", "help"]);

    let first_arg = fx.host.complete("cvar ");
    assert_eq!(first_arg, fx.cmd.completion(&args(&[""])));

    let partial = fx.host.complete("cvar fps");
    assert_eq!(partial, fx.cmd.completion(&args(&["fps"])));

    assert_eq!(
        fx.host.complete("cvar fps_max "),
        CompletionResult::from_hint("<Integer32>")
    );
    assert!(fx.host.complete("nope ").is_empty());
}

#[test]
fn test_host_unknown_command() {
    let fx = Fixture::new();
    let shell = fx.exec("frobnicate now");
    assert_eq!(
        shell.errors,
        vec!["Unknown command: frobnicate. Type 'help' to see available commands."]
    );

    let shell = fx.exec("   ");
    assert!(shell.lines.is_empty() && shell.errors.is_empty());
}

#[test]
fn test_host_rejects_duplicate_command() {
    let mut fx = Fixture::new();
    let loc: Arc<dyn Localizer> = Arc::new(MessageTable::english());
    let again = CVarCommand::new(Arc::clone(&fx.registry), loc, &ConsoleConfig::default());
    assert!(!fx.host.register(again));
    assert_eq!(fx.host.command_names().collect::<Vec<_>>(), vec!["cvar"]);
}

#[test]
fn test_help() {
    let fx = Fixture::new();

    let shell = fx.exec("help");
    assert_eq!(shell.lines.len(), 1);
    assert!(shell.lines[0].contains("cvar - Gets or sets a CVar."));
    assert!(shell.lines[0].contains("help - "));

    let shell = fx.exec("help cvar");
    assert!(shell.lines[0].starts_with("cvar\nUsage: cvar <name | ?> [value]"));

    let shell = fx.exec("help nope");
    assert_eq!(shell.errors, vec!["Unknown command: nope"]);

    let shell = fx.exec("help a b");
    assert_eq!(shell.errors, vec!["Expected at most one argument."]);

    let completion = fx.host.complete("help ");
    let values: Vec<&str> = completion.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["cvar", "help"]);
    assert_eq!(completion.hint.as_deref(), Some("[command]"));
}

#[test]
fn test_error_messages_use_localizer() {
    fn keys(key: &str, args: &[(&str, &str)]) -> String {
        let rendered: Vec<String> = args.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        format!("{}({})", key, rendered.join(","))
    }

    let registry = Arc::new(CVarRegistry::new());
    registry
        .register("fps_max", ValueType::Integer32, CVarValue::Integer32(60), CVarFlags::empty())
        .unwrap();
    let cmd = CVarCommand::new(registry, Arc::new(keys), &ConsoleConfig::default());

    let mut shell = BufferShell::new();
    cmd.execute(&mut shell, &args(&["fps_max", "x"]));
    cmd.execute(&mut shell, &args(&["nope"]));
    cmd.execute(&mut shell, &[]);
    assert_eq!(
        shell.errors,
        vec![
            "cmd-cvar-parse-error(type=Integer32)",
            "cmd-cvar-not-registered(cvar=nope)",
            "cmd-cvar-invalid-args()",
        ]
    );
    assert_eq!(cmd.description(), "cmd-cvar-desc()");
}
