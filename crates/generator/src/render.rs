use florastack_core::Result;
use serde::Serialize;

/// Substitute `{{key}}` placeholders in `template`.
///
/// Only the listed keys are touched, so JSX object literals such as
/// `initial={{ y: 10 }}` pass through unchanged. The template is scanned
/// once from left to right; substituted values are never scanned again.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];

        let value = after.find("}}").and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Escape text placed between JSX tags.
///
/// Braces would open a JS expression, angle brackets a tag.
pub fn jsx_text(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '{' => "&#123;".to_string(),
            '}' => "&#125;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// A JS/TS string literal (JSON strings are valid JS)
pub fn js_string(s: &str) -> Result<String> {
    Ok(serde_json::to_string(s)?)
}

/// A JS/TS literal for `value`, indented to sit at `indent` spaces
pub fn js_literal<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String> {
    let json = serde_json::to_string_pretty(value)?;
    Ok(indent_continuation(&json, indent))
}

/// Indent every line except the first by `indent` spaces
fn indent_continuation(s: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    s.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
