use crate::error::SequenceError;
use num_traits::{CheckedAdd, One, WrappingAdd, Zero};

/// Unsigned integer types the generator can run at.
pub trait SequenceInt: Copy + Zero + One + WrappingAdd + CheckedAdd {
    /// Bit width of the type, used in overflow reports.
    const BITS: u32;
}

macro_rules! impl_sequence_int {
    ($($ty:ty),*) => {
        $(
            impl SequenceInt for $ty {
                const BITS: u32 = <$ty>::BITS;
            }
        )*
    };
}

impl_sequence_int!(u8, u16, u32, u64, u128, usize);

/// Two consecutive terms `(F(i), F(i + 1))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibState<T> {
    a: T,
    b: T,
}

impl<T: SequenceInt> Default for FibState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SequenceInt> FibState<T> {
    /// The state before any transition: `(F(0), F(1)) = (0, 1)`.
    pub fn new() -> Self {
        Self {
            a: T::zero(),
            b: T::one(),
        }
    }

    /// `F(i)`.
    pub fn current(&self) -> T {
        self.a
    }

    /// `F(i + 1)`.
    pub fn next_term(&self) -> T {
        self.b
    }

    /// Applies `(a, b) <- (b, a + b)`, wrapping on overflow.
    pub fn step(&mut self) {
        let sum = self.a.wrapping_add(&self.b);
        self.a = self.b;
        self.b = sum;
    }

    /// Applies the transition, or returns `None` if `a + b` overflows.
    pub fn checked_step(&self) -> Option<Self> {
        let sum = self.a.checked_add(&self.b)?;
        Some(Self { a: self.b, b: sum })
    }
}

/// Iterator over `F(0), F(1), F(2), ...` with wrapping arithmetic.
#[derive(Debug, Clone)]
pub struct Fibonacci<T> {
    state: FibState<T>,
}

impl<T: SequenceInt> Default for Fibonacci<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SequenceInt> Fibonacci<T> {
    pub fn new() -> Self {
        Self {
            state: FibState::new(),
        }
    }
}

impl<T: SequenceInt> Iterator for Fibonacci<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let term = self.state.current();
        self.state.step();
        Some(term)
    }
}

/// Computes the `n`-th Fibonacci number as a `u64`.
///
/// Runs exactly `n` transitions from `(0, 1)` in constant space. Terms past
/// `F(93)` do not fit and wrap silently; see [`checked_fib`] for the checked
/// variant.
pub fn fib(n: u32) -> u64 {
    fib_with::<u64>(n)
}

/// Computes `F(n)` at width `T` with wrapping arithmetic.
pub fn fib_with<T: SequenceInt>(n: u32) -> T {
    let mut state = FibState::<T>::new();
    for _ in 0..n {
        state.step();
    }
    state.current()
}

/// Computes `F(n)` at width `T`, failing if `F(n)` does not fit.
///
/// The last transition also produces `F(n + 1)`, which is never returned, so
/// it is allowed to overflow.
pub fn checked_fib<T: SequenceInt>(n: u32) -> Result<T, SequenceError> {
    let mut state = FibState::<T>::new();
    for i in 0..n {
        if i + 1 == n {
            return Ok(state.next_term());
        }
        state = state
            .checked_step()
            .ok_or(SequenceError::Overflow { n, bits: T::BITS })?;
    }
    Ok(state.current())
}

/// The largest `n` such that `F(n)` fits in `T`.
pub fn max_exact_n<T: SequenceInt>() -> u32 {
    let mut state = FibState::<T>::new();
    let mut n = 1;
    while let Some(next) = state.checked_step() {
        state = next;
        n += 1;
    }
    n
}
