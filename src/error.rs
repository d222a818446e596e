use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for this crate.
///
/// Rendering itself never fails: anomalies (malformed event tokens, days
/// outside the laid-out range, invalid digits) degrade to no-op paints.
/// The only fallible surface is command-byte intake.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// A command byte that is none of `+`, `-`, `0`.
    #[display("unrecognized command byte {_0:#04x}")]
    UnknownCommand(#[error(not(source))] u8),
}
