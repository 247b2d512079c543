use thiserror::Error;

/// Errors that the checked sequence generator can return.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A term required to reach `F(n)` does not fit the integer width.
    #[error("fibonacci term {n} overflows a {bits}-bit integer")]
    Overflow { n: u32, bits: u32 },
}
