//! Fixed-layout currency rendering: `symbol + int(4, right) + sep + frac(3, left)`.

use crate::domain::model::NumberFormat;
use crate::utils::error::{FormatError, Result};

const INTEGER_WIDTH: usize = 4;
const FRACTION_WIDTH: usize = 3;

/// Lay out a currency string such as `"$12.5"` into aligned columns.
///
/// The first character is taken as the symbol; the rest must contain the
/// configured decimal separator exactly once.
pub fn pad_currency(amount: &str, format: &NumberFormat) -> Result<String> {
    let mut chars = amount.chars();
    let Some(symbol) = chars.next() else {
        return Ok(String::new());
    };
    let number = chars.as_str();
    let separator = format.decimal_separator();

    let separators = number.matches(separator).count();
    let (integer_part, fraction_part) = match number.split_once(separator) {
        Some(parts) if separators == 1 => parts,
        _ => {
            tracing::debug!(amount, separator, separators, "rejecting currency string");
            return Err(FormatError::MalformedCurrency {
                amount: amount.to_string(),
                separators,
            });
        }
    };

    Ok(format!(
        "{}{:>int_w$}{}{:<frac_w$}",
        symbol,
        integer_part,
        separator,
        fraction_part,
        int_w = INTEGER_WIDTH,
        frac_w = FRACTION_WIDTH
    ))
}

/// [`pad_currency`] cut to at most `total_width` characters. Never pads.
pub fn fit_currency(amount: &str, total_width: usize, format: &NumberFormat) -> Result<String> {
    let padded = pad_currency(amount, format)?;
    if padded.chars().count() > total_width {
        Ok(padded.chars().take(total_width).collect())
    } else {
        Ok(padded)
    }
}
