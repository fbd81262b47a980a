#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use unitgate_core::policy::{DenialClass, SecurityConfig, SecurityPolicy};

fn policy(api_key: Option<&str>, allowed_hosts: &[&str]) -> SecurityPolicy {
    SecurityPolicy::new(SecurityConfig {
        api_key: api_key.map(str::to_string),
        allowed_hosts: allowed_hosts.iter().map(|s| s.to_string()).collect(),
    })
}

#[test]
fn no_security_grants_unconditionally() {
    let p = policy(None, &[]);
    assert!(p.evaluate("127.0.0.1", None).granted);
    assert!(p.evaluate("203.0.113.9", Some("whatever")).granted);
    assert!(p.evaluate("not-an-ip", None).granted);
}

#[test]
fn empty_api_key_counts_as_unconfigured() {
    let p = policy(Some(""), &[]);
    assert!(p.evaluate("203.0.113.9", None).granted);
}

#[test]
fn api_key_only_grants_on_exact_token() {
    let p = policy(Some("k-secret"), &[]);

    let ok = p.evaluate("203.0.113.9", Some("k-secret"));
    assert!(ok.granted);
    assert!(ok.reasons.is_empty());

    let wrong = p.evaluate("203.0.113.9", Some("k-Secret"));
    assert!(!wrong.granted);
    assert_eq!(wrong.denial, Some(DenialClass::Unauthorized));
    assert_eq!(wrong.reasons, vec!["invalid or missing API key".to_string()]);

    let missing = p.evaluate("127.0.0.1", None);
    assert!(!missing.granted);
    assert_eq!(missing.denial, Some(DenialClass::Unauthorized));
}

#[test]
fn host_only_grants_on_allowlist_match() {
    let p = policy(None, &["10.0.0.0/8", "localhost"]);

    assert!(p.evaluate("10.1.2.3", None).granted);
    assert!(p.evaluate("127.0.0.1", None).granted);

    let denied = p.evaluate("192.168.1.50", None);
    assert!(!denied.granted);
    assert_eq!(denied.denial, Some(DenialClass::Forbidden));
    assert_eq!(
        denied.reasons,
        vec!["host 192.168.1.50 not in allowed list".to_string()]
    );
}

#[test]
fn host_only_denial_is_forbidden_even_with_token_presented() {
    // A bearer token cannot substitute for a host match when only the host
    // method is configured.
    let p = policy(None, &["10.0.0.0/8"]);
    let denied = p.evaluate("192.168.1.50", Some("some-token"));
    assert!(!denied.granted);
    assert_eq!(denied.denial, Some(DenialClass::Forbidden));
}

#[test]
fn both_methods_must_pass_independently() {
    let p = policy(Some("k"), &["10.0.0.0/8"]);

    assert!(p.evaluate("10.1.2.3", Some("k")).granted);
    assert!(!p.evaluate("10.1.2.3", Some("wrong")).granted);
    assert!(!p.evaluate("192.168.1.50", Some("k")).granted);
    assert!(!p.evaluate("192.168.1.50", Some("wrong")).granted);
}

#[test]
fn api_key_failure_dominates_denial_class() {
    let p = policy(Some("k"), &["10.0.0.0/8"]);

    // Key failed, host passed: unauthorized, key reason only.
    let d = p.evaluate("10.1.2.3", Some("wrong"));
    assert_eq!(d.denial, Some(DenialClass::Unauthorized));
    assert_eq!(d.reasons, vec!["invalid or missing API key".to_string()]);

    // Both failed: still unauthorized, both reasons listed.
    let d = p.evaluate("192.168.1.50", None);
    assert_eq!(d.denial, Some(DenialClass::Unauthorized));
    assert_eq!(
        d.reasons,
        vec![
            "invalid or missing API key".to_string(),
            "host 192.168.1.50 not in allowed list".to_string(),
        ]
    );

    // Key passed, host failed: pure network-origin failure.
    let d = p.evaluate("192.168.1.50", Some("k"));
    assert_eq!(d.denial, Some(DenialClass::Forbidden));
    assert_eq!(
        d.reasons,
        vec!["host 192.168.1.50 not in allowed list".to_string()]
    );
}
