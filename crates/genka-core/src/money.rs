//! # Money Module
//!
//! Display formatting for yen amounts and percentages.
//!
//! ## Why Truncate?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  COSTS ARE REAL NUMBERS, DISPLAY IS WHOLE YEN                           │
//! │                                                                         │
//! │  Unit prices are often fractional (flour at ¥0.35/g), so the engines   │
//! │  work in f64. Only the display layer turns a figure into yen, and it   │
//! │  truncates toward zero rather than rounding:                           │
//! │                                                                         │
//! │    14.99  → ¥14                                                         │
//! │   -14.99  → ¥-14                                                        │
//! │                                                                         │
//! │  The same rule prints the price on the label.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use genka_core::money::{format_percentage, Yen};
//!
//! assert_eq!(Yen::from_amount(1234.9).to_string(), "¥1,234");
//! assert_eq!(format_percentage(98.5), "98.5%");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use ts_rs::TS;

// =============================================================================
// Yen Type
// =============================================================================

/// A whole-yen amount ready for display.
///
/// - **i64 (signed)**: a loss-making recipe has a negative profit
/// - Built only from a real amount via truncation, never rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Yen(i64);

impl Yen {
    /// Truncates a real amount toward zero.
    ///
    /// Non-finite input (NaN, ±∞) becomes zero. Amounts outside the `i64`
    /// range saturate to `i64::MIN` / `i64::MAX`.
    ///
    /// ## Example
    /// ```rust
    /// use genka_core::money::Yen;
    ///
    /// assert_eq!(Yen::from_amount(985.0).amount(), 985);
    /// assert_eq!(Yen::from_amount(-0.5).amount(), 0);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        if amount.is_finite() {
            let whole = amount.trunc();
            if whole >= i64::MAX as f64 || whole < i64::MIN as f64 {
                debug!(amount, "yen amount saturated");
            }
            Yen(whole as i64)
        } else {
            Yen(0)
        }
    }

    /// Returns the whole-yen value.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Yen(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Renders `¥` followed by the amount with comma thousands separators.
///
/// The sign follows the currency mark (`¥-985`), which is how the shop's
/// listing pages have always printed losses.
impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "¥{}{}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

impl Default for Yen {
    fn default() -> Self {
        Yen::zero()
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Formats a real amount as whole yen, e.g. `¥1,234`.
pub fn format_yen(amount: f64) -> String {
    Yen::from_amount(amount).to_string()
}

/// Formats a percentage with one decimal place, e.g. `98.5%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

// =============================================================================
// Unit Tests
// =============================================================================
