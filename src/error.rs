use thiserror::Error;

/// Failures that stop the relay server as a whole.
///
/// Per-connection problems (failed upgrade, socket errors, malformed frames)
/// never surface here; they end or skip only the affected connection.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to bind relay listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("relay listener io error")]
    Io(#[from] std::io::Error),
}
