use super::error::Error;
use super::logging;
use crate::config::{LoggingSettings, load_config};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn level(level: &str) -> LoggingSettings {
    LoggingSettings {
        level: level.to_string(),
    }
}

#[test]
#[serial]
fn test_filter_uses_configured_level() {
    let filter = temp_env::with_var_unset("RUST_LOG", || {
        logging::filter(&level("info,minipub::broker=debug"))
    });
    assert!(filter.to_string().contains("minipub::broker=debug"));
}

#[test]
#[serial]
fn test_filter_falls_back_on_bad_level() {
    let filter = temp_env::with_var_unset("RUST_LOG", || {
        logging::filter(&level("minipub=notalevel"))
    });
    assert!(!filter.to_string().contains("notalevel"));
}

#[test]
#[serial]
fn test_filter_prefers_rust_log() {
    let filter = temp_env::with_var("RUST_LOG", Some("minipub::session=trace"), || {
        logging::filter(&level("warn"))
    });
    assert!(filter.to_string().contains("minipub::session=trace"));
}

#[test]
#[serial]
fn test_logging_init_from_loaded_config() {
    let tmp = TempDir::new().expect("create tempdir");
    let orig = env::current_dir().expect("current_dir");
    env::set_current_dir(tmp.path()).expect("set current dir");

    fs::create_dir_all("config").expect("create config dir");
    fs::write("config/default.toml", "[logging]\nlevel = \"debug\"\n").expect("write config file");

    let cfg = temp_env::with_vars_unset(
        ["MINIPUB_LOGGING__LEVEL", "MINIPUB_SESSION__INBOX_CAPACITY"],
        load_config,
    );

    env::set_current_dir(orig).expect("restore cwd");
    let cfg = cfg.expect("load_config failed");
    assert_eq!(cfg.logging.level, "debug");

    logging::init(&cfg.logging);
    // a second install is refused rather than panicking
    assert!(!logging::init(&cfg.logging));
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = Error::MalformedMessage {
        required: 129,
        actual: 3,
    };
    assert_eq!(
        err.to_string(),
        "malformed message: need at least 129 bytes, got 3"
    );
    assert_eq!(
        Error::UnrecognizedType(7).to_string(),
        "unrecognized message type: 7"
    );
}
