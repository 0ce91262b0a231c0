//! Middle-ellipsis truncation and fixed-width column fitting.
//!
//! Widths count `char`s. `fit_*` and `pad_fit_*` always return exactly
//! `total_width` characters; `ellipsis_fit` on its own may come up short.

/// Replace the middle of `text` with `ellipsis` when it is longer than
/// `total_width`, keeping an equal-length prefix and suffix.
///
/// The kept parts are `(total_width - ellipsis_len) / 2` characters each, so
/// the result is one character short of `total_width` when the difference is
/// odd, and is just the ellipsis when the ellipsis does not fit at all.
pub fn ellipsis_fit(text: &str, total_width: usize, ellipsis: &str) -> String {
    let text_len = text.chars().count();
    if text_len <= total_width {
        return text.to_string();
    }

    let part_len = total_width.saturating_sub(ellipsis.chars().count()) / 2;

    let mut result = String::with_capacity(text.len());
    result.extend(text.chars().take(part_len));
    result.push_str(ellipsis);
    result.extend(text.chars().skip(text_len - part_len));
    result
}

/// Ellipsis-fit then right-align in a column of `total_width`.
pub fn fit_left(text: &str, total_width: usize, ellipsis: &str) -> String {
    let fitted = clamp_width(ellipsis_fit(text, total_width, ellipsis), total_width);
    format!("{:>width$}", fitted, width = total_width)
}

/// Ellipsis-fit then left-align in a column of `total_width`.
pub fn fit_right(text: &str, total_width: usize, ellipsis: &str) -> String {
    let fitted = clamp_width(ellipsis_fit(text, total_width, ellipsis), total_width);
    format!("{:<width$}", fitted, width = total_width)
}

/// Like [`fit_left`] but fits the text into one column less, leaving at least
/// one leading space so the value never touches the field before it.
pub fn pad_fit_left(text: &str, total_width: usize, ellipsis: &str) -> String {
    let fitted = ellipsis_fit(text, total_width.saturating_sub(1), ellipsis);
    format!("{:>width$}", clamp_width(fitted, total_width), width = total_width)
}

/// Like [`fit_right`] but fits the text into one column less, leaving at
/// least one trailing space.
pub fn pad_fit_right(text: &str, total_width: usize, ellipsis: &str) -> String {
    let fitted = ellipsis_fit(text, total_width.saturating_sub(1), ellipsis);
    format!("{:<width$}", clamp_width(fitted, total_width), width = total_width)
}

// Only bites when the ellipsis itself is wider than the column.
fn clamp_width(fitted: String, total_width: usize) -> String {
    if fitted.chars().count() > total_width {
        tracing::trace!(total_width, "ellipsis wider than column, cutting");
        fitted.chars().take(total_width).collect()
    } else {
        fitted
    }
}
