///
/// Value Rendering
///
/// Formats one call's worth of output for each supported value kind into
/// any `io::Write` sink. The entry points render into a per-call buffer
/// and hand the finished bytes to stdout in a single write.
///
/// Conventions:
/// - int: base 10, `-` only when negative
/// - float: fixed-point with `FLOAT_PRECISION` fractional digits, never an
///   exponent; NaN is `nan`, infinities are `inf` / `-inf`
/// - char: the UTF-8 glyph; values that are not Unicode scalar values
///   render as U+FFFD
/// - bool: `true` / `false`
///
/// Everything except char ends with a newline.
///

use std::io::{self, Write};

/// Fractional digits written for every finite float.
pub const FLOAT_PRECISION: usize = 6;

pub fn render_int<W: Write>(out: &mut W, value: i32) -> io::Result<()> {
    writeln!(out, "{}", value)
}

pub fn render_float<W: Write>(out: &mut W, value: f64) -> io::Result<()> {
    if value.is_nan() {
        out.write_all(b"nan\n")
    } else if value.is_infinite() {
        let text: &[u8] = if value.is_sign_negative() { b"-inf\n" } else { b"inf\n" };
        out.write_all(text)
    } else {
        writeln!(out, "{:.*}", FLOAT_PRECISION, value)
    }
}

pub fn render_char<W: Write>(out: &mut W, value: i32) -> io::Result<()> {
    let ch = u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    let mut buf = [0u8; 4];
    out.write_all(ch.encode_utf8(&mut buf).as_bytes())
}

pub fn render_bool<W: Write>(out: &mut W, value: bool) -> io::Result<()> {
    let text: &[u8] = if value { b"true\n" } else { b"false\n" };
    out.write_all(text)
}
