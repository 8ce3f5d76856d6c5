//! Price parsing and label formatting for the it-IT list price column.
//!
//! The export mixes plain numbers with strings like `"1.234,50"`,
//! `"€ 49,90"` and `"-49,90"` (discount/return rows carry a negative
//! sign, the catalog always shows the positive retail price).

/// Parses a price string into a non-negative value.
///
/// Whitespace and the `€` glyph are stripped. When a comma is present it
/// is the decimal separator and dots are thousands separators; without a
/// comma the string is parsed as-is. Unparseable input yields
/// [`f64::NAN`].
pub fn parse_price_text(v: &str) -> f64 {
    let s: String = v.chars().filter(|c| !c.is_whitespace() && *c != '€').collect();
    if s.is_empty() {
        return f64::NAN;
    }

    let s = if s.contains(',') {
        // "1.234,50" -> "1234.50"
        s.replace('.', "").replacen(',', ".", 1)
    } else {
        s
    };

    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => n.abs(),
        _ => f64::NAN,
    }
}

/// Numeric price values come through as-is, sign folded to positive.
pub fn parse_price_number(n: f64) -> f64 {
    if n.is_finite() {
        n.abs()
    } else {
        f64::NAN
    }
}

/// Formats a price as `€ 1.234,50` (dot thousands, comma decimals).
/// Non-finite input renders the localized placeholder `—`.
pub fn format_eur(n: f64) -> String {
    if !n.is_finite() {
        return "—".to_string();
    }

    let fixed = format!("{:.2}", n);
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // Dot every 3 digits from the right, never before the sign.
    let mut rev = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            rev.push('.');
        }
        rev.push(c);
    }
    let grouped: String = rev.chars().rev().collect();

    format!("€ {},{}", grouped, dec_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_and_number_forms_agree() {
        assert_eq!(parse_price_text("1.234,50"), 1234.5);
        assert_eq!(parse_price_text("1234,50"), 1234.5);
        assert_eq!(parse_price_number(1234.5), 1234.5);
    }

    #[test]
    fn sign_is_folded_to_positive() {
        assert_eq!(parse_price_text("-49,90"), 49.9);
        assert_eq!(parse_price_number(-12.0), 12.0);
    }

    #[test]
    fn currency_glyph_and_spaces_are_stripped() {
        assert_eq!(parse_price_text("€ 10,00"), 10.0);
        assert_eq!(parse_price_text(" 10.5 "), 10.5);
    }

    #[test]
    fn garbage_is_nan() {
        assert!(parse_price_text("").is_nan());
        assert!(parse_price_text("n.d.").is_nan());
        assert!(parse_price_text("1,2,3").is_nan());
    }

    #[test]
    fn label_formatting() {
        assert_eq!(format_eur(49.9), "€ 49,90");
        assert_eq!(format_eur(1234.5), "€ 1.234,50");
        assert_eq!(format_eur(1234567.891), "€ 1.234.567,89");
        assert_eq!(format_eur(0.0), "€ 0,00");
        assert_eq!(format_eur(f64::NAN), "—");
    }
}
