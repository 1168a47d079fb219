//! Message send-mode flags. Plain named constants, combined with bitwise OR.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SendMode {
    CarryAllRemainingBalance = 128,
    CarryAllRemainingIncomingValue = 64,
    DestroyAccountIfZero = 32,
    PayGasSeparately = 1,
    IgnoreErrors = 2,
    None = 0,
}

impl SendMode {
    pub const ALL: [SendMode; 6] = [
        SendMode::CarryAllRemainingBalance,
        SendMode::CarryAllRemainingIncomingValue,
        SendMode::DestroyAccountIfZero,
        SendMode::PayGasSeparately,
        SendMode::IgnoreErrors,
        SendMode::None,
    ];

    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn combine(modes: &[SendMode]) -> u8 {
        modes.iter().fold(0, |acc, mode| acc | mode.bits())
    }

    pub fn name(self) -> &'static str {
        match self {
            SendMode::CarryAllRemainingBalance => "CARRY_ALL_REMAINING_BALANCE",
            SendMode::CarryAllRemainingIncomingValue => "CARRY_ALL_REMAINING_INCOMING_VALUE",
            SendMode::DestroyAccountIfZero => "DESTROY_ACCOUNT_IF_ZERO",
            SendMode::PayGasSeparately => "PAY_GAS_SEPARATELY",
            SendMode::IgnoreErrors => "IGNORE_ERRORS",
            SendMode::None => "NONE",
        }
    }
}

impl fmt::Display for SendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SendMode {
    type Err = String;

    /// Accepts `PAY_GAS_SEPARATELY`, `pay_gas_separately` or `pay-gas-separately`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| format!("Unknown send mode: {s}"))
    }
}
