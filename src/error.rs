use thiserror::Error;

/// Errors returned by `IntegerCodec` implementations.
///
/// Both variants are reported before any output is written or any input is consumed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested input did not contain a single whole block.
    #[error("input of {len} values is smaller than one block of {} values, no work done", crate::BLOCK_SIZE)]
    InsufficientInput { len: usize },
    /// A zero length was passed to `uncompress`.
    #[error("length is 0, no work done")]
    InvalidLength,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(
            Error::InsufficientInput { len: 100 }.to_string(),
            "input of 100 values is smaller than one block of 128 values, no work done"
        );
        assert_eq!(Error::InvalidLength.to_string(), "length is 0, no work done");
    }
}
