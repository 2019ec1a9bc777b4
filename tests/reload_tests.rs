// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for cached settings, reloads and the global resolver.

mod common;

use common::{create_temp_yaml, EnvGuard, SAMPLE_YAML};
use serial_test::serial;
use std::fs;
use std::sync::Arc;
use std::thread;
use sweester_config::prelude::*;
use sweester_config::service::global;

#[test]
fn test_file_changes_need_reload() {
    let file = create_temp_yaml("app:\n  name: first\n");
    let resolver = SettingsResolver::builder()
        .with_yaml_file(file.path())
        .with_env(MapEnv::new())
        .build()
        .unwrap();

    assert_eq!(resolver.resolve("app.name", "").unwrap().as_str(), "first");

    fs::write(file.path(), "app:\n  name: second\n").unwrap();
    assert_eq!(resolver.resolve("app.name", "").unwrap().as_str(), "first");

    resolver.reload().unwrap();
    assert_eq!(resolver.resolve("app.name", "").unwrap().as_str(), "second");
}

#[test]
fn test_deleted_file_reloads_as_empty() {
    let file = create_temp_yaml(SAMPLE_YAML);
    let path = file.path().to_path_buf();
    let store = SettingsStore::new(&path);
    assert_eq!(store.settings().unwrap().len(), 6);

    drop(file);
    store.reset();
    assert!(store.settings().unwrap().is_empty());
}

#[test]
fn test_shared_resolver_across_threads() {
    let file = create_temp_yaml(SAMPLE_YAML);
    let resolver = Arc::new(
        SettingsResolver::builder()
            .with_yaml_file(file.path())
            .with_env(MapEnv::new())
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                resolver
                    .resolve(&format!("sys.users.{}", i), "")
                    .unwrap()
                    .as_string()
            })
        })
        .collect();
    let users: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(users, vec!["foo", "bar", "test", "zoo"]);
}

#[test]
#[serial]
fn test_global_reads_configured_path() {
    let mut env_guard = EnvGuard::new();
    let file = create_temp_yaml(SAMPLE_YAML);
    env_guard.set(global::CONFIG_PATH_VAR, &file.path().to_string_lossy());
    env_guard.set("DB_PORT", "13306");
    global::reset();

    let all = global::settings("", "").unwrap().into_all().unwrap();
    assert_eq!(all["sys.users.0"], Scalar::from("foo"));
    assert_eq!(global::resolve("this.does.not.exist", "").unwrap().as_str(), "");
    assert_eq!(global::resolve("db.port", "").unwrap().as_str(), "13306");
    assert_eq!(global::resolve("sys.users.2", "").unwrap().as_str(), "test");
    assert_eq!(global::get_uint("db.port", 0).unwrap(), 13306);

    global::reset();
}

#[test]
#[serial]
fn test_global_reset_switches_files() {
    let mut env_guard = EnvGuard::new();
    let first = create_temp_yaml("app:\n  name: first\n");
    let second = create_temp_yaml("app:\n  name: second\n");

    env_guard.set(global::CONFIG_PATH_VAR, &first.path().to_string_lossy());
    global::reset();
    assert_eq!(global::resolve("app.name", "").unwrap().as_str(), "first");

    env_guard.set(global::CONFIG_PATH_VAR, &second.path().to_string_lossy());
    assert_eq!(global::resolve("app.name", "").unwrap().as_str(), "first");

    global::reset();
    assert_eq!(global::resolve("app.name", "").unwrap().as_str(), "second");

    global::reset();
}

#[test]
#[serial]
fn test_global_missing_file_is_empty() {
    let mut env_guard = EnvGuard::new();
    env_guard.set(global::CONFIG_PATH_VAR, "NON-EXIST-YAML-FILE");
    global::reset();

    assert!(global::resolver().all().unwrap().is_empty());
    assert!(global::get_boolean("app.debug", true).unwrap());

    global::reset();
}
