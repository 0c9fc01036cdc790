//! E2E tests for `settle build`
//!
//! Timing-sensitive: they rely on the platform watcher delivering events
//! well within the generous timeouts used here.

#![cfg(unix)]

mod common;

use std::time::Duration;

use common::*;

const TIMEOUT: Duration = Duration::from_secs(10);

fn elm_project() -> TestEnv {
    let env = TestEnv::new();
    env.write("src/Main.elm", "module Main exposing (main)\n");
    env
}

#[test]
fn burst_of_changes_builds_once() {
    let env = elm_project();
    let mut watch = env.spawn(&["--json", "build", "-c", "echo built", "-d", "300"]);
    assert!(watch.wait_for("watch_started", TIMEOUT).is_some());

    env.write("src/A.elm", "module A exposing (..)\n");
    env.write("src/B.elm", "module B exposing (..)\n");
    env.write("src/Main.elm", "module Main exposing (main)\n-- edited\n");

    let complete = watch
        .wait_for("build_complete", TIMEOUT)
        .expect("build should run once the burst settles");
    assert_eq!(complete["success"], true);

    watch.drain_for(Duration::from_millis(1000));
    assert_eq!(watch.count("action_started"), 1, "events: {:?}", watch.seen());
    assert_eq!(watch.count("build_complete"), 1);

    let started = watch
        .seen()
        .iter()
        .find(|e| event_name(e) == "action_started")
        .expect("action_started");
    assert!(started["path"]
        .as_str()
        .is_some_and(|p| p.ends_with("Main.elm")));

    let output = watch
        .seen()
        .iter()
        .find(|e| event_name(e) == "build_output")
        .expect("build_output");
    assert_eq!(output["output"], "built\n");
}

#[test]
fn irrelevant_change_is_ignored() {
    let env = elm_project();
    let mut watch = env.spawn(&["--json", "build", "-c", "echo built"]);
    assert!(watch.wait_for("watch_started", TIMEOUT).is_some());

    env.write("src/readme.md", "# notes\n");
    watch.drain_for(Duration::from_millis(800));

    assert_eq!(watch.count("change_accepted"), 0, "events: {:?}", watch.seen());
    assert_eq!(watch.count("action_started"), 0);
}

#[test]
fn failing_build_exits_with_exit_policy() {
    let env = elm_project();

    let result = env.run(&[
        "--json",
        "build",
        "-c",
        "echo broken; exit 3",
        "--on-failure",
        "exit",
        "--initial",
    ]);

    assert!(!result.success);
    let events = result.events();
    let complete = events
        .iter()
        .find(|e| event_name(e) == "build_complete")
        .expect("build_complete");
    assert_eq!(complete["success"], false);
    assert_eq!(complete["code"], 3);
    assert_eq!(result.event_names().last().map(String::as_str), Some("error"));
    assert!(result.stdout.contains("broken"));
}

#[test]
fn failing_build_keeps_watching_by_default() {
    let env = elm_project();
    let mut watch = env.spawn(&["--json", "build", "-c", "exit 3", "--initial"]);

    let complete = watch
        .wait_for("build_complete", TIMEOUT)
        .expect("initial build should run");
    assert_eq!(complete["success"], false);
    assert_eq!(complete["code"], 3);

    assert!(watch.wait_exit(Duration::from_millis(500)).is_none());
}

#[test]
fn missing_root_is_reported() {
    let env = TestEnv::new();

    let result = env.run(&["build", "-r", "does-not-exist"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("watch root not found"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn human_output_prints_rule_before_rebuild() {
    let env = elm_project();

    let result = env.run(&[
        "build",
        "-c",
        "exit 1",
        "--on-failure",
        "exit",
        "--initial",
    ]);

    assert!(!result.success);
    assert!(result.stdout.contains("Initial build"), "stdout: {}", result.stdout);
    assert!(
        result.stdout.contains("Build failed (exit code 1)"),
        "stdout: {}",
        result.stdout
    );
}
