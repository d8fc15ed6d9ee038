use thiserror::Error;

/// The error type for operations whose preconditions on the container's
/// length or on a position were not met.
///
/// Every error is reported to the caller unchanged: nothing in this crate
/// retries or swallows one.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum Error {
    /// The operation needs at least one element but the container is empty.
    #[error("the container is empty")]
    Empty,

    /// A position-addressed operation was given a position at or past the
    /// container's length.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the container at the time of the request.
        len: usize,
    },
}

/// A `Result` whose error type defaults to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(Error::Empty.to_string(), "the container is empty");
        assert_eq!(
            Error::IndexOutOfRange { index: 8, len: 8 }.to_string(),
            "index 8 is out of range for length 8"
        );
    }
}
