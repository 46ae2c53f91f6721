// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Errors for wheel construction, prime certification, and config loading.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Only W[0], W[1] and W[2] have a closed form to start from.
    #[error("unsupported wheel seed {0}: expected 0, 1 or 2")]
    UnsupportedSeed(u32),

    /// The wheel hit its limit before it could certify every prime below
    /// `requested`. Primes are only complete below `certified`.
    #[error("wheel saturated: requested primes below {requested}, certified below {certified}")]
    Saturated { requested: u64, certified: u64 },

    #[error("IO error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        return Error::Io(err.to_string());
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        return Error::Json(err.to_string());
    }
}
