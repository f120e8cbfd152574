//! Amount text round-trip.
//!
//! Ingredient amounts are edited as text. [`format_amount`] renders a
//! number the way it is shown in a field or a row, [`parse_amount`] reads
//! user input back, and [`AmountField`] carries the working string for one
//! editing session together with its commit policy: empty text means an
//! explicit zero, junk means keep the last good value.

/// Render an amount with up to three fraction digits, trailing zeros
/// trimmed. Values produced here round-trip through [`parse_amount`].
pub fn format_amount(amount: f64) -> String {
    let mut text = format!("{:.3}", amount);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Parse a decimal amount from user input.
///
/// Accepts `.` or `,` as the decimal separator. Returns `None` for
/// malformed input, for negative values (amounts in this domain are never
/// negative) and for non-finite values. The empty string is not an amount;
/// the empty-means-zero policy belongs to [`AmountField::commit`].
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

/// The working string for one amount-editing session.
///
/// Initialized from the stored amount when the row enters editing and
/// committed when editing ends; in between it holds whatever the user
/// typed, valid or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountField {
    text: String,
}

impl AmountField {
    /// Start an editing session, (re-)initializing the working string from
    /// the stored amount.
    pub fn begin(amount: f64) -> Self {
        Self {
            text: format_amount(amount),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// End the editing session.
    ///
    /// `Some(0.0)` for an empty string (explicit zero), `Some(value)` for a
    /// parsable one, `None` for junk — in which case the caller leaves the
    /// stored amount as it was.
    pub fn commit(&self) -> Option<f64> {
        if self.text.trim().is_empty() {
            return Some(0.0);
        }
        parse_amount(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_trims_trailing_zeros() {
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(2.5), "2.5");
        assert_eq!(format_amount(0.125), "0.125");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(100.0), "100");
    }

    #[test]
    fn test_parse_format_roundtrip() {
        for value in [0.0, 1.0, 2.5, 0.125, 0.75, 42.0, 99.9, 100.0] {
            assert_eq!(parse_amount(&format_amount(value)), Some(value));
        }
    }

    #[test]
    fn test_parse_accepts_comma_separator() {
        assert_eq!(parse_amount("2,5"), Some(2.5));
        assert_eq!(parse_amount("0,125"), Some(0.125));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("2g"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_parse_rejects_negative_and_non_finite() {
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("-0.5"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_field_begin_initializes_from_amount() {
        let field = AmountField::begin(2.5);
        assert_eq!(field.text(), "2.5");
    }

    #[test]
    fn test_commit_empty_is_explicit_zero() {
        let mut field = AmountField::begin(7.0);
        field.set_text("");
        assert_eq!(field.commit(), Some(0.0));
        field.set_text("   ");
        assert_eq!(field.commit(), Some(0.0));
    }

    #[test]
    fn test_commit_junk_keeps_last_good_value() {
        let mut field = AmountField::begin(7.0);
        field.set_text("lots");
        // None: the caller leaves the stored amount untouched.
        assert_eq!(field.commit(), None);
    }

    #[test]
    fn test_commit_parses_valid_input() {
        let mut field = AmountField::begin(0.0);
        field.set_text("3,5");
        assert_eq!(field.commit(), Some(3.5));
    }
}
