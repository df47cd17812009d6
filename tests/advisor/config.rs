use std::time::Duration;

use redis_advisor::config::{AdvisorConfig, CliError};

fn args(flags: &[&str]) -> Vec<String> {
    std::iter::once("redis-advisor")
        .chain(flags.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn test_config_creation_without_flags() {
    let config = AdvisorConfig::new(args(&[])).unwrap();

    assert_eq!(config, AdvisorConfig::default());
    assert_eq!(config.address(), "127.0.0.1:6379");
    assert_eq!(config.timeout, Duration::from_millis(5000));
}

#[test]
fn test_config_creation_with_all_flags() {
    let config = AdvisorConfig::new(args(&[
        "--host",
        "redis.internal",
        "--port",
        "6380",
        "--user",
        "admin",
        "--password",
        "secret",
        "--db",
        "3",
        "--timeout",
        "250",
        "--section",
        "Memory",
    ]))
    .unwrap();

    assert_eq!(
        config,
        AdvisorConfig {
            host: "redis.internal".to_string(),
            port: 6380,
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
            db: 3,
            timeout: Duration::from_millis(250),
            section: Some("memory".to_string()),
        }
    );
    assert_eq!(config.address(), "redis.internal:6380");
}

#[test]
fn test_config_creation_with_invalid_flags() {
    let test_cases = vec![
        (args(&["--port", "invalid"]), CliError::InvalidCommandLineFlagValue),
        (args(&["--port", "70000"]), CliError::InvalidCommandLineFlagValue),
        (args(&["--port", "0"]), CliError::InvalidCommandLineFlagValue),
        (args(&["--port"]), CliError::InvalidCommandLineFlagValue),
        (args(&["--host", " "]), CliError::InvalidCommandLineFlagValue),
        (args(&["--db", "-1"]), CliError::InvalidCommandLineFlagValue),
        (args(&["--timeout", "0"]), CliError::InvalidCommandLineFlagValue),
        (args(&["--timeout", "soon"]), CliError::InvalidCommandLineFlagValue),
        (args(&["invalid"]), CliError::InvalidCommandLineFlag),
        (args(&["--verbose", "true"]), CliError::InvalidCommandLineFlag),
        (args(&["--user", "admin"]), CliError::UserWithoutPassword),
    ];

    for (args, expected_error) in test_cases {
        let result = AdvisorConfig::new(args.clone());
        assert_eq!(result, Err(expected_error), "parsing {:?}", args);
    }
}
