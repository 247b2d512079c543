use anyhow::{bail, Result};

/// A named workload: compute `F(n)` once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchProgram {
    pub n: u32,
    pub note: &'static str,
}

pub const DEFAULT_PROGRAM: &str = "fib-50";

pub const PROGRAMS: &[BenchProgram] = &[
    BenchProgram {
        n: 50,
        note: "default workload",
    },
    BenchProgram {
        n: 92,
        note: "largest term that fits i64",
    },
    BenchProgram {
        n: 93,
        note: "largest term that fits u64",
    },
    BenchProgram {
        n: 186,
        note: "largest term that fits u128",
    },
];

impl BenchProgram {
    /// Workload for an `n` given on the command line.
    pub fn adhoc(n: u32) -> Self {
        Self { n, note: "ad hoc" }
    }

    pub fn name(&self) -> String {
        format!("fib-{}", self.n)
    }
}

/// Looks up a registered program by name, ignoring case.
pub fn find(name: &str) -> Option<BenchProgram> {
    PROGRAMS
        .iter()
        .find(|p| p.name().eq_ignore_ascii_case(name))
        .copied()
}

/// Resolves the programs to run. `n` takes precedence over `names`, and the
/// name `all` selects the whole registry.
pub fn select(names: &[String], n: Option<u32>) -> Result<Vec<BenchProgram>> {
    if let Some(n) = n {
        return Ok(vec![BenchProgram::adhoc(n)]);
    }
    if names.is_empty() {
        return Ok(find(DEFAULT_PROGRAM).into_iter().collect());
    }
    if names.iter().any(|name| name.eq_ignore_ascii_case("all")) {
        return Ok(PROGRAMS.to_vec());
    }

    let mut programs = Vec::with_capacity(names.len());
    for name in names {
        match find(name) {
            Some(program) => programs.push(program),
            None => {
                let available: Vec<_> = PROGRAMS.iter().map(|p| p.name()).collect();
                bail!(
                    "unknown bench program: {} (available: {}, all)",
                    name,
                    available.join(", ")
                );
            }
        }
    }
    Ok(programs)
}
