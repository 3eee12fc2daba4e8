//! Whole-dollar amount type
//!
//! Uses rust_decimal for deterministic parsing of raw amount fields (no
//! floating-point errors). Amounts are rounded up to the nearest whole
//! dollar on ingestion and are strictly positive from then on.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AmountError;

/// A contribution amount in whole dollars
///
/// Constructed from a raw decimal string by taking the ceiling, so `100.40`
/// becomes `101`. Zero and negative amounts (refunds, corrections) are
/// rejected at construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Parse a raw amount field into a whole-dollar amount
    ///
    /// The field is parsed as a decimal and rounded up to the nearest whole
    /// dollar.
    pub fn parse(raw: &str) -> Result<Self, AmountError> {
        let decimal = Decimal::from_str(raw).map_err(|_| AmountError::Unparsable)?;
        Self::from_ceiling(decimal)
    }

    /// Build an amount from a decimal by rounding up to whole dollars
    pub fn from_ceiling(decimal: Decimal) -> Result<Self, AmountError> {
        let whole = decimal.ceil();
        if whole <= Decimal::ZERO {
            return Err(AmountError::NonPositive);
        }
        let dollars = whole.to_u64().ok_or(AmountError::OutOfRange)?;
        Ok(Self(dollars))
    }

    /// Create an amount directly from whole dollars
    pub fn from_u64(dollars: u64) -> Self {
        Self(dollars)
    }

    /// Get the whole-dollar value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
