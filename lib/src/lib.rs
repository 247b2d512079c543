pub mod error;
pub mod sequence;

pub use error::SequenceError;
pub use sequence::{checked_fib, fib, fib_with, max_exact_n, FibState, Fibonacci, SequenceInt};
