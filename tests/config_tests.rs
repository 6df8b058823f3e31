use std::fs;

use excheck::config::ConfigError;
use excheck::{validate, Config, Error, MethodSignature, RejectReason, ValidationResult};

#[test]
fn load_config_with_relative_declarations() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("bank.java"),
        "class BankException extends Exception {}\nclass InsufficientFundsException extends BankException {}\n",
    )
    .unwrap();
    let config_path = dir.path().join("excheck.toml");
    fs::write(
        &config_path,
        r#"
declarations = ["bank.java"]
unchecked_roots = ["LimitExceeded"]

[[exceptions]]
name = "LimitExceeded"
extends = "Exception"
"#,
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.base_dir.as_deref(), Some(dir.path()));
    let h = config.hierarchy().unwrap();

    let parent = MethodSignature::new("withdraw").throwing(["BankException"]);
    let narrower = MethodSignature::new("withdraw").throwing(["InsufficientFundsException", "LimitExceeded"]);
    assert_eq!(validate(&parent, &narrower, &h).unwrap(), ValidationResult::Allowed);

    let broader = MethodSignature::new("withdraw").throwing(["Exception"]);
    assert_eq!(
        validate(&parent, &broader, &h).unwrap(),
        ValidationResult::rejected("Exception", RejectReason::Broader)
    );
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err}");
}

#[test]
fn missing_declarations_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("excheck.toml");
    fs::write(&config_path, "declarations = [\"gone.java\"]\n").unwrap();
    let err = Config::load(&config_path).unwrap().hierarchy().unwrap_err();
    match err {
        Error::Config(ConfigError::Declarations { path, .. }) => assert!(path.ends_with("gone.java")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_declarations_surface_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.java"), "class extends Exception {}").unwrap();
    let config_path = dir.path().join("excheck.toml");
    fs::write(&config_path, "declarations = [\"bad.java\"]\n").unwrap();
    let err = Config::load(&config_path).unwrap().hierarchy().unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "{err}");
}

#[test]
fn config_without_unchecked_root_fails_to_build() {
    let config = Config::from_toml_str(
        r#"
standard = false

[[exceptions]]
name = "Problem"
"#,
    )
    .unwrap();
    let err = config.hierarchy().unwrap_err();
    assert_eq!(err.to_string(), "exception hierarchy designates no unchecked root");
}

#[test]
fn wrong_value_type_rejected() {
    let err = Config::from_toml_str("standard = \"yes\"").unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Toml(_))));
}
