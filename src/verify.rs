use crate::tables::CaseFoldTables;
use crate::types::CodePoint;
use core::fmt;

/// A broken invariant in an equivalence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A code point is listed as equivalent to itself.
    SelfLoop { key: CodePoint },
    /// A value appears twice under one key.
    Duplicate { key: CodePoint, value: CodePoint },
    /// An ASCII case pair is listed, which plain `i` matching already covers.
    AsciiVariant { key: CodePoint, value: CodePoint },
    /// `value` is listed under `key` but nothing under `value` leads back.
    Asymmetric { key: CodePoint, value: CodePoint },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Violation::SelfLoop { key } => write!(f, "U+{:04X} maps to itself", key),
            Violation::Duplicate { key, value } => {
                write!(f, "U+{:04X} lists U+{:04X} more than once", key, value)
            }
            Violation::AsciiVariant { key, value } => write!(
                f,
                "U+{:04X} lists its ASCII case variant U+{:04X}",
                key, value
            ),
            Violation::Asymmetric { key, value } => write!(
                f,
                "U+{:04X} lists U+{:04X} but not the other way around",
                key, value
            ),
        }
    }
}

/// The violations found by `verify`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyError {
    pub violations: Vec<Violation>,
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} invariant violation(s)", self.violations.len())?;
        for v in self.violations.iter().take(8) {
            write!(f, "; {}", v)?;
        }
        if self.violations.len() > 8 {
            f.write_str("; ...")?;
        }
        Ok(())
    }
}

impl std::error::Error for VerifyError {}

/// Check the equivalence table against the simple fold table it came from.
/// All violations are collected.
pub fn verify(tables: &CaseFoldTables) -> Result<(), VerifyError> {
    let simple = &tables.simple;
    let iu = &tables.iu;
    let mut violations = Vec::new();
    for (key, values) in iu.iter() {
        for (idx, &value) in values.iter().enumerate() {
            if value == key {
                violations.push(Violation::SelfLoop { key });
            }
            if values[..idx].contains(&value) {
                violations.push(Violation::Duplicate { key, value });
            }
            if simple.is_ascii_case_variant(key, value) {
                violations.push(Violation::AsciiVariant { key, value });
            }
            // An ASCII case variant of `key` listed under `value` stands in for it.
            let back = iu.get(value);
            let returns = back
                .iter()
                .any(|&other| other == key || simple.is_ascii_case_variant(other, key));
            if !returns {
                violations.push(Violation::Asymmetric { key, value });
            }
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(VerifyError { violations })
    }
}
