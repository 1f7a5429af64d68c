use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Matches `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}`
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// An unset variable is an error unless the placeholder carries a
/// `default("...")` fallback. Expansion happens on the raw text before
/// deserialization, so config structs use plain String/SecretString.
/// Comment lines are passed through unchanged, which keeps commented-out
/// secrets from failing the load.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut missing: Option<String> = None;

    let expanded: Vec<String> = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_owned();
            }

            placeholder_re()
                .replace_all(line, |caps: &Captures<'_>| {
                    let var_name = &caps[1];
                    std::env::var(var_name).unwrap_or_else(|_| match caps.get(2) {
                        Some(default) => default.as_str().to_owned(),
                        None => {
                            missing.get_or_insert_with(|| var_name.to_owned());
                            String::new()
                        }
                    })
                })
                .into_owned()
        })
        .collect();

    if let Some(var_name) = missing {
        return Err(format!("environment variable not found: `{var_name}`"));
    }

    let mut output = expanded.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
