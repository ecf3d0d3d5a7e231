use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A supplied vector or buffer does not have the length the network was built for.
    #[error("input size mismatch: {what} has len {actual}, expected {expected}")]
    InputSizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected != actual {
            return Err(Error::InputSizeMismatch {
                what,
                expected,
                actual,
            });
        }
        Ok(())
    }
}
