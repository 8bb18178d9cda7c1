//!
//! wabbit-runtime - Print Runtime
//!
//! Provides the console output functions that compiled Wabbit programs call
//! by fixed symbol name with the C calling convention:
//!
//! - `_print_int(int) -> int` - decimal integer and a newline
//! - `_print_float(double) -> int` - fixed-point float (6 digits) and a newline
//! - `_print_char(int) -> int` - one character, no newline
//! - `_print_bool(bool) -> int` - `true` or `false` and a newline
//!
//! Every entry point returns 0. Output failures are logged through `tracing`
//! and otherwise ignored; generated call sites never inspect the result.
//!
//! The crate builds as `libwabbit_runtime.a` for linking with generated
//! object code, and as an rlib for hosts that JIT-compile and need the
//! symbol addresses (see [`symbols`]).
//!

pub mod error;
pub mod render;
pub mod symbols;

mod emit;
mod print;

pub use error::RuntimeError;
pub use print::*;
pub use render::{FLOAT_PRECISION, render_bool, render_char, render_float, render_int};
pub use symbols::{AbiType, EntryPoint};

/// Status returned by every entry point.
pub const PRINT_OK: i32 = 0;
