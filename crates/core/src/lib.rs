//! Exact conversion between decimal amounts and integer nano units.

pub mod amount;
pub mod batch;
pub mod config;
pub mod error;
pub mod nano;
pub mod result;
pub mod send_mode;

pub use amount::{AmountKind, RawAmount};
pub use error::{ConvertError, Result};
pub use nano::{from_nano, from_nano_with_decimals, pow10, to_nano, to_nano_with_decimals};
pub use send_mode::SendMode;

pub use num_bigint::BigInt;
