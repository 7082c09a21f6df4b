//! Amounts and STX unit conversion.
//!
//! Every amount the ledger stores or moves is an [`Amount`] of micro-STX.
//! Being unsigned, a negative balance is unrepresentable.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::{Result, XwalletError, constants};

/// Integer amount of micro-STX.
pub type Amount = u128;

/// Convert micro-STX to a decimal STX value (scale 6).
///
/// # Errors
/// Returns [`XwalletError::InvalidAmount`] if the value exceeds the 96-bit
/// range of [`Decimal`].
pub fn micro_to_stx(micro: Amount) -> Result<Decimal> {
    let signed = i128::try_from(micro).map_err(|_| out_of_range(micro))?;
    Decimal::try_from_i128_with_scale(signed, constants::STX_DECIMALS)
        .map_err(|_| out_of_range(micro))
}

/// Convert a decimal STX value to micro-STX, truncating sub-micro fractions.
///
/// # Errors
/// Returns [`XwalletError::InvalidAmount`] for negative or oversized input.
pub fn stx_to_micro(stx: Decimal) -> Result<Amount> {
    if stx.is_sign_negative() && !stx.is_zero() {
        return Err(XwalletError::InvalidAmount {
            reason: format!("negative STX amount {stx}"),
        });
    }
    let scale = Decimal::new(1_000_000, 0);
    stx.checked_mul(scale)
        .and_then(|micro| micro.floor().to_u128())
        .ok_or_else(|| XwalletError::InvalidAmount {
            reason: format!("STX amount {stx} out of range"),
        })
}

/// Render micro-STX as STX with thousands separators and 2–6 fraction digits,
/// e.g. `1234567890` → `"1,234.56789"`.
#[must_use]
pub fn format_stx(micro: Amount) -> String {
    let whole = micro / constants::MICRO_PER_STX;
    let frac = micro % constants::MICRO_PER_STX;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut fraction = format!("{frac:06}");
    while fraction.len() > constants::DISPLAY_MIN_FRACTION_DIGITS && fraction.ends_with('0') {
        fraction.pop();
    }
    format!("{grouped}.{fraction}")
}

fn out_of_range(micro: Amount) -> XwalletError {
    XwalletError::InvalidAmount {
        reason: format!("{micro} micro-STX exceeds decimal range"),
    }
}
