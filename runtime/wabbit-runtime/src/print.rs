///
/// Print Entry Points
///
/// The functions generated Wabbit code calls. Exported unmangled with the C
/// calling convention so object code from the compiler links against
/// libwabbit_runtime.a directly, and registered by address for JIT use.
///
/// All four always return 0 (`PRINT_OK`).
///

use crate::emit::emit;
use crate::render::{render_bool, render_char, render_float, render_int};
use crate::symbols::EntryPoint;

#[unsafe(no_mangle)]
pub extern "C" fn _print_int(x: i32) -> i32 {
    emit(EntryPoint::PrintInt, |buf| render_int(buf, x))
}

#[unsafe(no_mangle)]
pub extern "C" fn _print_float(x: f64) -> i32 {
    emit(EntryPoint::PrintFloat, |buf| render_float(buf, x))
}

/// No trailing newline: strings are printed one `_print_char` at a time.
#[unsafe(no_mangle)]
pub extern "C" fn _print_char(c: i32) -> i32 {
    emit(EntryPoint::PrintChar, |buf| render_char(buf, c))
}

#[unsafe(no_mangle)]
pub extern "C" fn _print_bool(b: bool) -> i32 {
    emit(EntryPoint::PrintBool, |buf| render_bool(buf, b))
}
