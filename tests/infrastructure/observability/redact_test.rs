use whisper_relay::infrastructure::observability::redact_secrets;

#[test]
fn given_bearer_token_when_redacting_then_token_is_removed() {
    let redacted = redact_secrets("Authorization: Bearer sk-secret123 rejected");

    assert_eq!(redacted, "Authorization: Bearer [REDACTED] rejected");
}

#[test]
fn given_inline_openai_key_when_redacting_then_key_is_removed() {
    let redacted = redact_secrets("Incorrect API key provided: sk-proj-abc_123.");

    assert!(!redacted.contains("sk-proj-abc_123"));
    assert!(redacted.contains("[REDACTED]"));
    assert!(redacted.ends_with('.'));
}

#[test]
fn given_query_string_credential_when_redacting_then_value_is_removed() {
    let redacted = redact_secrets("calling https://host/path?api_key=abc123&x=1");

    assert_eq!(redacted, "calling https://host/path?api_key=[REDACTED]&x=1");
}

#[test]
fn given_word_containing_sk_when_redacting_then_text_is_untouched() {
    let redacted = redact_secrets("a risk-free operation");

    assert_eq!(redacted, "a risk-free operation");
}

#[test]
fn given_plain_error_text_when_redacting_then_text_is_untouched() {
    let redacted = redact_secrets("connection refused (os error 111)");

    assert_eq!(redacted, "connection refused (os error 111)");
}

#[test]
fn given_multiple_credentials_when_redacting_then_all_are_removed() {
    let redacted = redact_secrets("token=aaa and later token=bbb");

    assert_eq!(redacted, "token=[REDACTED] and later token=[REDACTED]");
}
