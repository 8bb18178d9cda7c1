///
/// Scenario Integration Tests
///
/// Runs the `wabbit-scenario` binary, which links the runtime and calls the
/// entry points through their unmangled C symbols (directly or from JIT
/// code), and asserts on exactly what reached the process's stdout.
///
/// Run all:  `cargo test -p wabbit-scenario`
///

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::process::{Command, Output, Stdio};

fn scenario_cmd(name: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wabbit-scenario"));
    cmd.arg(name);
    cmd
}

fn run_scenario(name: &str) -> Output {
    let output = scenario_cmd(name)
        .output()
        .expect("failed to run wabbit-scenario");
    assert!(
        output.status.success(),
        "scenario {} failed: {}\nstderr: {}",
        name,
        output.status,
        String::from_utf8_lossy(&output.stderr),
    );
    output
}

fn stdout_of(name: &str) -> String {
    String::from_utf8(run_scenario(name).stdout).unwrap()
}

// ── Linked calls ────────────────────────────────────────────────────

#[test]
fn test_mixed_program_output() {
    assert_eq!(stdout_of("mixed"), "7\ntrue\nXY1.000000\n");
}

#[test]
fn test_chars_compose_a_string() {
    assert_eq!(stdout_of("chars"), "Hello, wabbit!\n");
}

#[test]
fn test_output_is_repeatable() {
    let first = run_scenario("mixed").stdout;
    let second = run_scenario("mixed").stdout;
    assert_eq!(first, second);
}

#[test]
fn test_threads_keep_lines_intact() {
    let text = stdout_of("threads");

    let mut seen: HashMap<i32, usize> = HashMap::new();
    for line in text.lines() {
        let value: i32 = line
            .parse()
            .unwrap_or_else(|_| panic!("torn or corrupt line: {:?}", line));
        *seen.entry(value).or_default() += 1;
    }

    assert_eq!(seen.len(), 8 * 500);
    for t in 0..8 {
        for i in 0..500 {
            let value = -(t * 100_000_000 + 1_000_000 + i);
            assert_eq!(seen.get(&value), Some(&1), "missing {}", value);
        }
    }
}

#[test]
fn test_stdout_redirected_to_file() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let path = tmp.path().join("stdout.txt");
    let file = File::create(&path).unwrap();

    let status = scenario_cmd("mixed")
        .stdout(Stdio::from(file))
        .status()
        .expect("failed to run wabbit-scenario");
    assert!(status.success());

    let mut contents = String::new();
    File::open(&path).unwrap().read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "7\ntrue\nXY1.000000\n");
}

#[test]
fn test_closed_stdout_is_not_an_error() {
    let mut child = scenario_cmd("flood")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn wabbit-scenario");

    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert!(
        output.status.success(),
        "flood exited with {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
    );
}

#[test]
fn test_unknown_scenario_is_rejected() {
    let output = scenario_cmd("nope").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

// ── JIT-compiled calls ──────────────────────────────────────────────

#[test]
fn test_jit_mixed_output() {
    assert_eq!(stdout_of("jit-mixed"), "7\ntrue\nX\n1.000000\nfalse\n");
}

#[test]
fn test_jit_bool_argument_words() {
    let out = stdout_of("jit-mixed");
    let words: Vec<_> = out
        .lines()
        .filter(|l| *l == "true" || *l == "false" || *l == "1" || *l == "0")
        .collect();
    assert_eq!(words, ["true", "false"]);
}

#[test]
fn test_jit_extreme_arguments() {
    let out = stdout_of("jit-extremes");
    assert!(out.ends_with("false\ntrue\n"), "got: {:?}", out);
    insta::assert_snapshot!(out, @r"
    -2147483648
    2147483647
    nan
    -inf
    -10000000000000000.000000
    -0.000000
    �🐇
    false
    true
    ");
}
