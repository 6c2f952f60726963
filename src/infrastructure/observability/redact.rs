const REDACTED: &str = "[REDACTED]";

/// Redacts credential material from text destined for logs or client-facing
/// error messages. Remote error bodies are relayed to callers, so anything
/// resembling an API key must be stripped first.
pub fn redact_secrets(text: &str) -> String {
    let assignments = [
        "Bearer ",
        "api_key=",
        "api-key=",
        "password=",
        "secret=",
        "token=",
    ];

    let mut result = text.to_string();
    for pattern in assignments {
        result = redact_assignment(&result, pattern);
    }

    redact_inline_keys(&result)
}

/// Replaces the value following `pattern` (up to the next delimiter) with a
/// redaction marker, for every occurrence.
fn redact_assignment(text: &str, pattern: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(pattern) {
        let value_start = idx + pattern.len();
        let value_end = rest[value_start..]
            .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
            .map(|i| value_start + i)
            .unwrap_or(rest.len());

        result.push_str(&rest[..value_start]);
        result.push_str(REDACTED);
        rest = &rest[value_end..];
    }

    result.push_str(rest);
    result
}

/// Redacts OpenAI-style `sk-` keys appearing inline, e.g. when an upstream
/// error body echoes the credential it rejected.
fn redact_inline_keys(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find("sk-") {
        let at_boundary = !rest[..idx]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric());

        if at_boundary {
            result.push_str(&rest[..idx]);
            result.push_str(REDACTED);
            let key_end = rest[idx..]
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
                .map(|i| idx + i)
                .unwrap_or(rest.len());
            rest = &rest[key_end..];
        } else {
            result.push_str(&rest[..idx + 3]);
            rest = &rest[idx + 3..];
        }
    }

    result.push_str(rest);
    result
}
