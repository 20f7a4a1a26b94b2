//! Operation flags shared by the primitives and the factorization kernel.

use crate::{BlasError, Result};
use std::str::FromStr;

/// Transpose operation applied to a matrix operand.
///
/// Corresponds to the BLAS `TRANS` character:
/// - 'N': No transpose
/// - 'T': Transpose
/// - 'C': Conjugate transpose, identical to 'T' for real scalars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    /// No transpose operation
    NoTrans,
    /// Transpose operation
    Trans,
    /// Conjugate transpose (adjoint)
    ConjTrans,
}

impl Transpose {
    /// Convert to the BLAS character representation.
    pub fn to_char(self) -> char {
        match self {
            Transpose::NoTrans => 'N',
            Transpose::Trans => 'T',
            Transpose::ConjTrans => 'C',
        }
    }

    /// Whether the operand is read transposed.
    #[inline]
    pub fn is_transposed(self) -> bool {
        !matches!(self, Transpose::NoTrans)
    }
}

impl TryFrom<char> for Transpose {
    type Error = BlasError;

    fn try_from(flag: char) -> Result<Self> {
        match flag.to_ascii_uppercase() {
            'N' => Ok(Transpose::NoTrans),
            'T' => Ok(Transpose::Trans),
            'C' => Ok(Transpose::ConjTrans),
            _ => Err(BlasError::InvalidFlag {
                kind: "transpose",
                flag,
            }),
        }
    }
}

impl FromStr for Transpose {
    type Err = BlasError;

    /// Only the first character is significant ("No transpose" parses as 'N').
    fn from_str(s: &str) -> Result<Self> {
        let flag = s.chars().next().ok_or(BlasError::InvalidFlag {
            kind: "transpose",
            flag: ' ',
        })?;
        Transpose::try_from(flag)
    }
}

/// Which triangle of a symmetric matrix holds meaningful data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uplo {
    /// Upper triangle
    Upper,
    /// Lower triangle
    Lower,
}

impl Uplo {
    /// Convert to the BLAS character representation.
    pub fn to_char(self) -> char {
        match self {
            Uplo::Upper => 'U',
            Uplo::Lower => 'L',
        }
    }
}

impl TryFrom<char> for Uplo {
    type Error = BlasError;

    fn try_from(flag: char) -> Result<Self> {
        match flag.to_ascii_uppercase() {
            'U' => Ok(Uplo::Upper),
            'L' => Ok(Uplo::Lower),
            _ => Err(BlasError::InvalidFlag { kind: "uplo", flag }),
        }
    }
}

impl FromStr for Uplo {
    type Err = BlasError;

    /// Only the first character is significant ("Upper" parses as 'U').
    fn from_str(s: &str) -> Result<Self> {
        let flag = s
            .chars()
            .next()
            .ok_or(BlasError::InvalidFlag { kind: "uplo", flag: ' ' })?;
        Uplo::try_from(flag)
    }
}
