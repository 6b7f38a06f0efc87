use std::sync::OnceLock;

use regex::Regex;

/// Placeholder pattern: `{{ env.VAR }}`, optionally `{{ env.VAR | default("x") }}`
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Secrets stay out of the config file: the file references environment
/// variables and expansion happens on the raw text before deserialization.
/// A placeholder without a `default(...)` fails when the variable is unset.
/// TOML comment lines are passed through untouched.
pub fn expand_env(input: &str) -> anyhow::Result<String> {
    let mut output = String::with_capacity(input.len());

    for (index, line) in input.lines().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        output.push_str(&expand_line(line)?);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

/// Expand placeholders within a single line
fn expand_line(line: &str) -> anyhow::Result<String> {
    let mut expanded = String::with_capacity(line.len());
    let mut cursor = 0;

    for captures in placeholder_re().captures_iter(line) {
        let whole = captures.get(0).expect("capture 0 always present");
        let variable = &captures[1];
        let fallback = captures.get(2).map(|m| m.as_str());

        expanded.push_str(&line[cursor..whole.start()]);

        match (std::env::var(variable), fallback) {
            (Ok(value), _) => expanded.push_str(&value),
            (Err(_), Some(fallback)) => expanded.push_str(fallback),
            (Err(_), None) => {
                anyhow::bail!("environment variable not found: `{variable}`");
            }
        }

        cursor = whole.end();
    }

    expanded.push_str(&line[cursor..]);
    Ok(expanded)
}
