///
/// wabbit-scenario - Stand-in for a compiled Wabbit program
///
/// Calls the runtime's entry points the way generated code does. The direct
/// scenarios declare them as foreign C functions resolved by symbol name at
/// link time; the `jit-*` scenarios compile the calls with Cranelift.
/// Used by the integration tests to check exact stdout.
///
/// Usage: wabbit-scenario <mixed|chars|threads|flood|jit-mixed|jit-extremes>
///

extern crate wabbit_runtime;

mod jit;

use std::process::ExitCode;
use std::thread;

use wabbit_runtime::EntryPoint;

use crate::jit::{Arg, compile_calls};

unsafe extern "C" {
    fn _print_int(x: i32) -> i32;
    fn _print_float(x: f64) -> i32;
    fn _print_char(c: i32) -> i32;
    fn _print_bool(b: bool) -> i32;
}

/// Threads and lines per thread for the `threads` scenario.
const THREADS: i32 = 8;
const LINES_PER_THREAD: i32 = 500;

const USAGE: &str = "usage: wabbit-scenario <mixed|chars|threads|flood|jit-mixed|jit-extremes>";

fn mixed() -> i32 {
    unsafe {
        _print_int(7)
            | _print_bool(true)
            | _print_char('X' as i32)
            | _print_char('Y' as i32)
            | _print_float(1.0)
    }
}

fn chars() -> i32 {
    "Hello, wabbit!\n"
        .chars()
        .map(|c| unsafe { _print_char(c as i32) })
        .fold(0, |acc, status| acc | status)
}

fn threads() -> i32 {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            thread::spawn(move || {
                let mut status = 0;
                for i in 0..LINES_PER_THREAD {
                    // Values long enough that a torn write would be visible.
                    status |= unsafe { _print_int(-(t * 100_000_000 + 1_000_000 + i)) };
                }
                status
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|h| h.join().unwrap_or(1))
        .fold(0, |acc, status| acc | status)
}

fn flood() -> i32 {
    let mut status = 0;
    for i in 0..20_000 {
        status |= unsafe { _print_float(f64::from(i) * 0.5) };
        status |= unsafe { _print_bool(i % 2 == 0) };
    }
    status
}

fn run_jit(calls: &[(EntryPoint, Arg)]) -> i32 {
    match compile_calls(calls) {
        Ok(main) => main(),
        Err(err) => {
            tracing::error!(error = %err, "jit compilation failed");
            1
        }
    }
}

fn jit_mixed() -> i32 {
    run_jit(&[
        (EntryPoint::PrintInt, Arg::Int(7)),
        (EntryPoint::PrintBool, Arg::Bool(true)),
        (EntryPoint::PrintChar, Arg::Int('X' as i32)),
        (EntryPoint::PrintChar, Arg::Int('\n' as i32)),
        (EntryPoint::PrintFloat, Arg::Float(1.0)),
        (EntryPoint::PrintBool, Arg::Bool(false)),
    ])
}

fn jit_extremes() -> i32 {
    run_jit(&[
        (EntryPoint::PrintInt, Arg::Int(i32::MIN)),
        (EntryPoint::PrintInt, Arg::Int(i32::MAX)),
        (EntryPoint::PrintFloat, Arg::Float(f64::NAN)),
        (EntryPoint::PrintFloat, Arg::Float(f64::NEG_INFINITY)),
        (EntryPoint::PrintFloat, Arg::Float(-1e16)),
        (EntryPoint::PrintFloat, Arg::Float(-0.0)),
        (EntryPoint::PrintChar, Arg::Int(-1)),
        (EntryPoint::PrintChar, Arg::Int(0x1F407)),
        (EntryPoint::PrintChar, Arg::Int('\n' as i32)),
        (EntryPoint::PrintBool, Arg::Bool(false)),
        (EntryPoint::PrintBool, Arg::Bool(true)),
    ])
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let Some(name) = std::env::args().nth(1) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    let status = match name.as_str() {
        "mixed" => mixed(),
        "chars" => chars(),
        "threads" => threads(),
        "flood" => flood(),
        "jit-mixed" => jit_mixed(),
        "jit-extremes" => jit_extremes(),
        other => {
            eprintln!("unknown scenario: {}\n{}", other, USAGE);
            return ExitCode::from(2);
        }
    };

    if status == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
