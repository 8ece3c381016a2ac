//! Fixed-point CAD amount arithmetic.
//!
//! 1 CAD = 100 cents. Stored as `u64` cents; the only place an amount turns
//! into `f64` is when a percentage is derived from it.

use std::fmt;
use std::iter::Sum;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// CAD amount stored as whole cents.
///
/// # Examples
///
/// ```
/// use benefits_domain::CadAmount;
///
/// let visit = CadAmount::from_dollars(160);
/// let copay = CadAmount::from_decimal_str("12.50").unwrap();
/// let total = visit.checked_add(&copay).unwrap();
/// assert_eq!(total.to_decimal_string(), "172.50");
/// assert_eq!(total.to_currency_string(), "CA$173");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CadAmount(u64);

impl CadAmount {
    /// Zero CAD.
    pub const ZERO: Self = CadAmount(0);

    /// Number of decimal places (2).
    const DECIMALS: usize = 2;
    /// Cents per dollar.
    const SCALE: u64 = 100;

    /// Create from raw cents.
    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        CadAmount(cents)
    }

    /// Create from whole dollars (e.g., `50` → `50.00`).
    #[inline]
    pub const fn from_dollars(dollars: u64) -> Self {
        CadAmount(dollars.saturating_mul(Self::SCALE))
    }

    /// Parse a decimal string like `"120.5"` or `"1000"`.
    ///
    /// Up to 2 decimal places accepted. Extra decimals → error.
    pub fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if frac.len() > Self::DECIMALS {
            return Err(DomainError::InvalidAmount(format!(
                "too many decimal places in '{}' (max 2)",
                s
            )));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidAmount(format!(
                "invalid fractional part: '{}'",
                frac
            )));
        }
        let whole_val: u64 = whole
            .parse()
            .map_err(|_| DomainError::InvalidAmount(format!("invalid amount: '{}'", s)))?;
        let frac_val: u64 = if frac.is_empty() {
            0
        } else {
            // right-pad to 2 digits so "5" means 50 cents
            format!("{:0<2}", frac)
                .parse()
                .map_err(|_| DomainError::InvalidAmount(format!("invalid amount: '{}'", s)))?
        };
        whole_val
            .checked_mul(Self::SCALE)
            .and_then(|c| c.checked_add(frac_val))
            .map(CadAmount)
            .ok_or_else(|| DomainError::InvalidAmount("amount overflow".to_string()))
    }

    /// Convert a JSON-style number into cents.
    ///
    /// Rejects negative, non-finite and sub-cent values.
    pub fn from_f64(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidAmount(format!(
                "amount must be a finite non-negative number, got {}",
                value
            )));
        }
        let scaled = value * Self::SCALE as f64;
        let cents = scaled.round();
        if (scaled - cents).abs() > 1e-6 {
            return Err(DomainError::InvalidAmount(format!(
                "too many decimal places in {} (max 2)",
                value
            )));
        }
        if cents >= u64::MAX as f64 {
            return Err(DomainError::InvalidAmount("amount overflow".to_string()));
        }
        Ok(CadAmount(cents as u64))
    }

    /// Raw cent value.
    #[inline]
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Dollar value as `f64`, for percentage math only.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Whole dollars, rounded half away from zero.
    pub fn rounded_dollars(&self) -> u64 {
        let whole = self.0 / Self::SCALE;
        if self.0 % Self::SCALE >= Self::SCALE / 2 {
            whole + 1
        } else {
            whole
        }
    }

    /// Format as `"120.50"` (always 2 decimal places).
    pub fn to_decimal_string(&self) -> String {
        format!("{}.{:02}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }

    /// Format as `"CA$1,000"`: whole dollars with grouped thousands.
    pub fn to_currency_string(&self) -> String {
        format!("CA${}", group_thousands(self.rounded_dollars()))
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(CadAmount)
    }

    /// Checked subtraction. Returns `None` if result would be negative.
    #[inline]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(CadAmount)
    }

    /// Saturating subtraction (floors at zero).
    #[inline]
    pub fn saturating_sub(&self, rhs: &Self) -> Self {
        CadAmount(self.0.saturating_sub(rhs.0))
    }

    /// Returns `true` if the amount is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for CadAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_currency_string())
    }
}

/// Saturates at `u64::MAX` cents rather than panicking.
impl Sum for CadAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(CadAmount::ZERO, |acc, x| CadAmount(acc.0.saturating_add(x.0)))
    }
}

impl<'a> Sum<&'a CadAmount> for CadAmount {
    fn sum<I: Iterator<Item = &'a CadAmount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// Amounts travel as plain JSON numbers so fixture files keep the shape of
// `{"total": 1000, "remaining": 600}`.
impl Serialize for CadAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % Self::SCALE == 0 {
            serializer.serialize_u64(self.0 / Self::SCALE)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for CadAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        CadAmount::from_f64(value).map_err(serde::de::Error::custom)
    }
}
