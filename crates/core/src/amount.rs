use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::{ConvertError, Result};

/// Input to a conversion. Each variant has its own precision rules, so
/// variants are never coerced into one another.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAmount {
    /// Exact integer, scaled without validation.
    Integer(BigInt),
    /// Double-precision number, limited to what an `f64` can carry.
    Float(f64),
    /// Decimal text with arbitrary precision.
    Text(String),
}

/// Selects which `RawAmount` variant to build from command-line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountKind {
    #[default]
    Text,
    Float,
    Integer,
}

impl RawAmount {
    pub fn parse_as(kind: AmountKind, text: &str) -> Result<Self> {
        match kind {
            AmountKind::Text => Ok(Self::Text(text.to_string())),
            AmountKind::Float => text
                .parse::<f64>()
                .map(Self::Float)
                .map_err(|_| ConvertError::invalid(text)),
            AmountKind::Integer => BigInt::from_str(text)
                .map(Self::Integer)
                .map_err(|_| ConvertError::invalid(text)),
        }
    }

    pub fn kind(&self) -> AmountKind {
        match self {
            Self::Integer(_) => AmountKind::Integer,
            Self::Float(_) => AmountKind::Float,
            Self::Text(_) => AmountKind::Text,
        }
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<BigInt> for RawAmount {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<&BigInt> for RawAmount {
    fn from(value: &BigInt) -> Self {
        Self::Integer(value.clone())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawAmount {
                fn from(value: $t) -> Self {
                    Self::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for RawAmount {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for RawAmount {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}
