const SEPARATOR: char = ':';

/// Shorten a coin symbol for narrow columns.
///
/// Plain symbols (`BTC`) pass through. Grouped symbols such as
/// `NiceHash:X11` or `Other:SHA256` keep only uppercase letters and digits on
/// each side, with `SHA256` further abbreviated to `SHA2`.
pub fn short_coin_symbol(coin_symbol: &str) -> String {
    let Some((group, algorithm)) = coin_symbol.split_once(SEPARATOR) else {
        return coin_symbol.to_string();
    };

    format!(
        "{}{}{}",
        strip_lower_chars(group),
        SEPARATOR,
        strip_lower_chars(algorithm)
    )
    .replace("SHA256", "SHA2")
}

/// Keep only uppercase letters and numeric characters.
pub fn strip_lower_chars(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_uppercase() || c.is_numeric())
        .collect()
}
