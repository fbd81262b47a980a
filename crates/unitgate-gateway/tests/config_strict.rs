#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use unitgate_gateway::config;

fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn api_key_only_config() {
    let cfg = config::load_from_vars(vars(&[
        (config::ENV_API_KEY, "test-key-123"),
        (config::ENV_PORT, "9000"),
        (
            config::ENV_SERVICES,
            r#"[{"service": "test.service", "displayName": "Test", "description": "Test service"}]"#,
        ),
    ]))
    .expect("must parse");

    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.services.len(), 1);
    assert_eq!(cfg.services[0].service, "test.service");
    assert_eq!(cfg.services[0].display_name, "Test");
    assert!(cfg.security.has_api_key());
    assert!(!cfg.security.has_host_restriction());
}

#[test]
fn allowed_hosts_are_split_and_trimmed() {
    let cfg = config::load_from_vars(vars(&[(
        config::ENV_ALLOWED_HOSTS,
        " localhost , 192.168.1.0/24 ,, 10.0.0.5 ",
    )]))
    .expect("must parse");

    assert_eq!(
        cfg.security.allowed_hosts,
        vec!["localhost", "192.168.1.0/24", "10.0.0.5"]
    );
    assert!(cfg.security.has_host_restriction());
    assert!(!cfg.security.has_api_key());
}

#[test]
fn empty_environment_is_reverse_proxy_mode() {
    let cfg = config::load_from_vars(|_| None).expect("must parse");

    assert_eq!(cfg.port, 8080);
    assert!(cfg.services.is_empty());
    assert!(!cfg.security.has_api_key());
    assert!(!cfg.security.has_host_restriction());
}

#[test]
fn empty_api_key_means_no_key() {
    let cfg = config::load_from_vars(vars(&[(config::ENV_API_KEY, "")])).expect("must parse");
    assert!(!cfg.security.has_api_key());
}

#[test]
fn malformed_services_json_is_fatal() {
    let err = config::load_from_vars(vars(&[(config::ENV_SERVICES, "not json")]))
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}

#[test]
fn unknown_service_fields_are_rejected() {
    let err = config::load_from_vars(vars(&[(
        config::ENV_SERVICES,
        r#"[{"service": "a.service", "displayName": "A", "description": "d", "displayname": "typo"}]"#,
    )]))
    .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}

#[test]
fn bad_port_is_fatal() {
    let err =
        config::load_from_vars(vars(&[(config::ENV_PORT, "eighty")])).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}

#[test]
fn blank_unit_name_is_fatal() {
    let err = config::load_from_vars(vars(&[(
        config::ENV_SERVICES,
        r#"[{"service": "  ", "displayName": "A", "description": "d"}]"#,
    )]))
    .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}

#[test]
fn service_metadata_is_optional_and_preserved() {
    let cfg = config::load_from_vars(vars(&[(
        config::ENV_SERVICES,
        r#"[{"service": "nginx.service", "displayName": "Web", "description": "d", "metadata": {"port": "80"}}]"#,
    )]))
    .expect("must parse");

    let meta = cfg.services[0].metadata.as_ref().expect("metadata");
    assert_eq!(meta.get("port").map(String::as_str), Some("80"));
}
