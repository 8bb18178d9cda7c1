///
/// Output Emission
///
/// Each entry point renders its whole output into a stack buffer first, then
/// writes it to stdout with one `write_all` under the stdout lock and flushes.
/// One call's bytes stay contiguous when several threads print at once, and
/// nothing waits in a buffer when the host exits without running Rust's
/// stdout cleanup (a C `main` linked against the staticlib).
///

use std::io::{self, Write};

use smallvec::SmallVec;

use crate::error::RuntimeError;
use crate::symbols::EntryPoint;
use crate::PRINT_OK;

/// Fits any int, bool or char line; long floats spill to the heap.
pub(crate) type LineBuf = SmallVec<[u8; 64]>;

/// Render with `render`, write the result to stdout, and return the fixed
/// success status regardless of what happened.
pub(crate) fn emit<F>(entry: EntryPoint, render: F) -> i32
where
    F: FnOnce(&mut LineBuf) -> io::Result<()>,
{
    if let Err(err) = emit_to(entry, &mut io::stdout(), render) {
        tracing::debug!(symbol = err.symbol(), error = %err, "dropped output");
    }
    PRINT_OK
}

pub(crate) fn emit_to<W, F>(entry: EntryPoint, sink: &mut W, render: F) -> Result<(), RuntimeError>
where
    W: LockedSink,
    F: FnOnce(&mut LineBuf) -> io::Result<()>,
{
    let symbol = entry.symbol();
    let mut line = LineBuf::new();
    // Rendering into the line buffer cannot fail; only the sink can.
    render(&mut line)
        .and_then(|()| sink.write_locked(&line))
        .map_err(|source| RuntimeError::Write { symbol, source })?;

    tracing::trace!(symbol, bytes = line.len(), "emitted");
    Ok(())
}

/// A shared output handle that can write one buffer atomically.
pub(crate) trait LockedSink {
    fn write_locked(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl LockedSink for io::Stdout {
    fn write_locked(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut out = self.lock();
        out.write_all(bytes)?;
        out.flush()
    }
}

#[cfg(test)]
impl LockedSink for Vec<u8> {
    fn write_locked(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}
