use thiserror::Error;

/// Misuse of the hashing API.
///
/// Every byte sequence is a valid message or key, so the only failures are
/// caller bugs such as naming a variant that does not exist.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("contract violation: {0}")]
    ContractViolation(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
