//! Delta-T: return duct temperature minus supply duct temperature.
//!
//! Inputs are whatever the technician has typed so far. A result exists
//! only while both fields hold a decimal number; anything else is just
//! "not enough input yet" and shows the prompt.

use std::fmt;
use thiserror::Error;

/// Shown in place of a result until both fields parse.
pub const PROMPT: &str = "Enter both temperatures";

/// Unit suffix for every reading and result.
pub const UNIT: &str = "°F";

/// Why a field does not hold a usable reading.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseReadingError {
    #[error("no value entered")]
    Empty,
    #[error("not a decimal number")]
    Malformed,
}

/// A temperature in degrees Fahrenheit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading(f64);

impl TemperatureReading {
    pub fn fahrenheit(self) -> f64 {
        self.0
    }

    /// Parse user text. Either `.` or `,` is accepted as the decimal
    /// separator; every `,` becomes `.` before parsing.
    ///
    /// Accepted: an optional sign, then digits with at most one separator
    /// and at least one digit. Whitespace, exponents, `inf` and `nan` are
    /// rejected. Digit strings too long for an `f64` are not rejected;
    /// they read as infinity, so the result becomes `inf` or `NaN`.
    pub fn parse(text: &str) -> Result<Self, ParseReadingError> {
        if text.is_empty() {
            return Err(ParseReadingError::Empty);
        }
        let normalized = normalize(text);
        if !is_plain_decimal(&normalized) {
            return Err(ParseReadingError::Malformed);
        }
        normalized
            .parse::<f64>()
            .map(Self)
            .map_err(|_| ParseReadingError::Malformed)
    }
}

/// Replace every comma with a period.
pub fn normalize(text: &str) -> String {
    text.replace(',', ".")
}

fn is_plain_decimal(s: &str) -> bool {
    let body = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let mut digits = 0usize;
    let mut separators = 0usize;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => separators += 1,
            _ => return false,
        }
    }
    digits > 0 && separators <= 1
}

/// A computed Delta-T, in °F. Negative when supply is warmer than return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaT(f64);

impl DeltaT {
    pub fn between(return_air: TemperatureReading, supply_air: TemperatureReading) -> Self {
        Self(return_air.fahrenheit() - supply_air.fahrenheit())
    }

    /// One digit after the decimal point plus the unit, e.g. `"17.0 °F"`.
    pub fn display(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DeltaT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.0, UNIT)
    }
}

/// The two text fields of the Delta-T screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeltaTInput {
    pub return_text: String,
    pub supply_text: String,
}

impl DeltaTInput {
    pub fn return_reading(&self) -> Result<TemperatureReading, ParseReadingError> {
        TemperatureReading::parse(&self.return_text)
    }

    pub fn supply_reading(&self) -> Result<TemperatureReading, ParseReadingError> {
        TemperatureReading::parse(&self.supply_text)
    }

    /// `Some` iff both fields parse.
    pub fn evaluate(&self) -> Option<DeltaT> {
        let return_air = self.return_reading().ok()?;
        let supply_air = self.supply_reading().ok()?;
        Some(DeltaT::between(return_air, supply_air))
    }

    /// The text for the result region: the formatted result or [`PROMPT`].
    pub fn display(&self) -> String {
        match self.evaluate() {
            Some(delta) => delta.display(),
            None => PROMPT.to_string(),
        }
    }
}

/// Drop characters a decimal keypad cannot produce. Returns whether
/// anything was removed.
pub fn retain_keypad_chars(text: &mut String) -> bool {
    let before = text.len();
    text.retain(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'));
    text.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(r: &str, s: &str) -> DeltaTInput {
        DeltaTInput {
            return_text: r.to_string(),
            supply_text: s.to_string(),
        }
    }

    fn delta_t(r: &str, s: &str) -> Option<DeltaT> {
        input(r, s).evaluate()
    }

    fn delta_t_display(r: &str, s: &str) -> String {
        input(r, s).display()
    }

    fn value(r: &str, s: &str) -> Option<f64> {
        delta_t(r, s).map(|d| d.0)
    }

    #[test]
    fn test_subtracts_supply_from_return() {
        assert_eq!(value("75", "55"), Some(20.0));
        assert_eq!(value("72.5", "55.0"), Some(17.5));
        assert_eq!(delta_t_display("75", "55"), "20.0 °F");
    }

    #[test]
    fn test_comma_separator_matches_period() {
        assert_eq!(value("72,5", "55,0"), Some(17.5));
        assert_eq!(value("72,5", "55,0"), value("72.5", "55.0"));
        assert_eq!(value("72,5", "55.0"), Some(17.5));
    }

    #[test]
    fn test_negative_delta_keeps_sign() {
        assert_eq!(delta_t_display("68.3", "70"), "-1.7 °F");
        assert!(value("68.3", "70").unwrap() < 0.0);
    }

    #[test]
    fn test_always_one_decimal() {
        assert_eq!(DeltaT(17.5).display(), "17.5 °F");
        assert_eq!(DeltaT(17.0).display(), "17.0 °F");
        assert_eq!(DeltaT(0.0).display(), "0.0 °F");
        assert_eq!(DeltaT(-3.24).display(), "-3.2 °F");
    }

    #[test]
    fn test_missing_input_is_absent() {
        assert_eq!(delta_t("", "60"), None);
        assert_eq!(delta_t("60", ""), None);
        assert_eq!(delta_t("", ""), None);
        assert_eq!(delta_t_display("", "60"), PROMPT);
        assert_eq!(delta_t_display("60", ""), PROMPT);
    }

    #[test]
    fn test_malformed_input_is_absent() {
        for bad in ["abc", "1.2.3", "1,2,3", "1.2,3", ".", "-", "+", " 60", "60 ", "1e3", "inf", "NaN", "6O"] {
            assert_eq!(delta_t(bad, "60"), None, "return {:?} should not parse", bad);
            assert_eq!(delta_t("60", bad), None, "supply {:?} should not parse", bad);
            assert_eq!(delta_t_display(bad, "60"), PROMPT);
        }
    }

    #[test]
    fn test_partial_decimals_parse() {
        assert_eq!(value("60.", "0"), Some(60.0));
        assert_eq!(value(",5", "0"), Some(0.5));
        assert_eq!(value("-10", "+5"), Some(-15.0));
    }

    #[test]
    fn test_parse_error_reasons() {
        assert_eq!(TemperatureReading::parse(""), Err(ParseReadingError::Empty));
        assert_eq!(TemperatureReading::parse("x"), Err(ParseReadingError::Malformed));
        assert_eq!(TemperatureReading::parse("55,5"), Ok(TemperatureReading(55.5)));
    }

    #[test]
    fn test_result_matches_parsed_difference() {
        let pairs = [("98.6", "54.2"), ("0", "0"), ("-40", "32"), ("120,75", "7,25"), ("3", "1000")];
        for (r, s) in pairs {
            let expected = normalize(r).parse::<f64>().unwrap() - normalize(s).parse::<f64>().unwrap();
            assert_eq!(value(r, s), Some(expected));
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let fields = input("71,4", "52.9");
        let first = fields.evaluate();
        assert_eq!(fields.evaluate(), first);
        assert_eq!(fields.display(), fields.display());
    }

    #[test]
    fn test_out_of_range_digits_read_as_infinity() {
        let huge = format!("1{}", "0".repeat(400));
        let reading = TemperatureReading::parse(&huge).unwrap();
        assert!(reading.fahrenheit().is_infinite());
        assert_eq!(delta_t_display(&huge, "60"), "inf °F");
        assert_eq!(delta_t_display(&huge, &huge), "NaN °F");
    }

    #[test]
    fn test_keypad_filter() {
        let mut text = String::from("7a2,5°F");
        assert!(retain_keypad_chars(&mut text));
        assert_eq!(text, "72,5");
        assert!(!retain_keypad_chars(&mut text));
    }
}
