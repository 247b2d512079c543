use anyhow::{anyhow, Error};
use fibonacci_lib::max_exact_n;
use serde::Serialize;
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// Integer width the sequence generator runs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchWidth {
    U64,
    U128,
}

impl BenchWidth {
    pub fn to_str(&self) -> &'static str {
        match self {
            BenchWidth::U64 => "u64",
            BenchWidth::U128 => "u128",
        }
    }

    pub fn bits(&self) -> u32 {
        match self {
            BenchWidth::U64 => u64::BITS,
            BenchWidth::U128 => u128::BITS,
        }
    }

    /// Largest `n` whose term is exact at this width.
    pub fn max_exact_n(&self) -> u32 {
        match self {
            BenchWidth::U64 => max_exact_n::<u64>(),
            BenchWidth::U128 => max_exact_n::<u128>(),
        }
    }
}

impl fmt::Display for BenchWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl std::str::FromStr for BenchWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BenchWidth::iter()
            .find(|width| width.to_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let supported: Vec<_> = BenchWidth::iter().map(|w| w.to_str()).collect();
                anyhow!(
                    "unsupported width: {} (expected one of {})",
                    s,
                    supported.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_width() {
        assert_eq!(BenchWidth::from_str("u64").unwrap(), BenchWidth::U64);
        assert_eq!(BenchWidth::from_str("U128").unwrap(), BenchWidth::U128);

        let err = BenchWidth::from_str("u256").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported width: u256 (expected one of u64, u128)"
        );
    }

    #[test]
    fn test_width_limits() {
        assert_eq!(BenchWidth::U64.bits(), 64);
        assert_eq!(BenchWidth::U64.max_exact_n(), 93);
        assert_eq!(BenchWidth::U128.max_exact_n(), 186);
    }
}
