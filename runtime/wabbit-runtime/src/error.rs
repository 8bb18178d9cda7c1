///
/// Runtime error types.
///
/// A call's output failed to reach stdout. Never crosses the C ABI: the
/// entry points log it and return 0.
///

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to write {symbol} output: {source}")]
    Write {
        symbol: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl RuntimeError {
    pub fn symbol(&self) -> &'static str {
        match self {
            RuntimeError::Write { symbol, .. } => *symbol,
        }
    }
}
