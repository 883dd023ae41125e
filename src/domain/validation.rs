//! Request parameter validation.
//!
//! Every violation across the five fizzbuzz parameters is collected into a
//! single [`ValidationReport`] so a caller sees the full picture in one
//! round trip. Message order: required checks for all five fields first,
//! then format checks (numeric, alphanumeric, length), then integer range
//! and positivity checks, each phase walking the fields in declaration
//! order.

use std::fmt;

use crate::domain::fizzbuzz::ParameterSet;

/// Maximum accepted length for the substitution strings.
pub const MAX_STRING_LENGTH: usize = 64;

/// Raw, unvalidated request parameters.
///
/// Absent query parameters are carried as empty strings; absence and
/// emptiness are reported identically as `required` violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameters {
    /// Raw `limit` parameter.
    pub limit: String,
    /// Raw `int1` parameter.
    pub int1: String,
    /// Raw `int2` parameter.
    pub int2: String,
    /// Raw `str1` parameter.
    pub str1: String,
    /// Raw `str2` parameter.
    pub str2: String,
}

/// A single validation failure, already rendered as its report message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError(String);

impl FieldError {
    fn required(name: &str) -> Self {
        Self(format!("parameter {name} is required"))
    }

    fn not_numeric(name: &str, raw: &str) -> Self {
        Self(format!("parameter {name} is not a numeric value (received:{raw})"))
    }

    fn not_alphanumeric(name: &str, raw: &str) -> Self {
        Self(format!(
            "parameter {name} is not an alphanumeric value (received:{raw})"
        ))
    }

    fn too_long(name: &str, raw: &str) -> Self {
        Self(format!(
            "parameter {name} cannot be over {MAX_STRING_LENGTH} characters (received:{raw})"
        ))
    }

    fn out_of_range(raw: &str) -> Self {
        Self(format!("int type parameter is out of range (received:{raw})"))
    }

    fn below_one(raw: &str) -> Self {
        Self(format!(
            "int type parameter cannot be less than 1 (received:{raw})"
        ))
    }

    /// The rendered failure message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Every violation found in one validation pass.
///
/// Displays as all messages joined by newlines, in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// The individual violations, in report order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(error.message())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Numeric format: an optional sign followed by ASCII digits only.
fn is_numeric(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_alphanumeric(raw: &str) -> bool {
    raw.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Range and positivity check for a field that already passed the numeric
/// format check. Format and range violations are mutually exclusive per
/// field.
fn check_int(raw: &str, errors: &mut Vec<FieldError>) -> Option<i64> {
    if raw.is_empty() || !is_numeric(raw) {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(value) if value < 1 => {
            errors.push(FieldError::below_one(raw));
            None
        }
        Ok(value) => Some(value),
        // is_numeric holds, so the only parse failure left is overflow.
        Err(_) => {
            errors.push(FieldError::out_of_range(raw));
            None
        }
    }
}

impl RawParameters {
    /// Validate the raw parameters into a [`ParameterSet`], or report every
    /// violation at once.
    pub fn validate(self) -> Result<ParameterSet, ValidationReport> {
        let mut errors = Vec::new();

        let fields = [
            ("limit", self.limit.as_str()),
            ("int1", self.int1.as_str()),
            ("int2", self.int2.as_str()),
            ("str1", self.str1.as_str()),
            ("str2", self.str2.as_str()),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                errors.push(FieldError::required(name));
            }
        }

        for (name, value) in [
            ("limit", self.limit.as_str()),
            ("int1", self.int1.as_str()),
            ("int2", self.int2.as_str()),
        ] {
            if !value.is_empty() && !is_numeric(value) {
                errors.push(FieldError::not_numeric(name, value));
            }
        }

        for (name, value) in [("str1", self.str1.as_str()), ("str2", self.str2.as_str())] {
            if value.is_empty() {
                continue;
            }
            if !is_alphanumeric(value) {
                errors.push(FieldError::not_alphanumeric(name, value));
            } else if value.len() > MAX_STRING_LENGTH {
                errors.push(FieldError::too_long(name, value));
            }
        }

        let limit = check_int(&self.limit, &mut errors);
        let int1 = check_int(&self.int1, &mut errors);
        let int2 = check_int(&self.int2, &mut errors);

        match (limit, int1, int2) {
            (Some(limit), Some(int1), Some(int2)) if errors.is_empty() => Ok(ParameterSet {
                limit,
                int1,
                int2,
                str1: self.str1,
                str2: self.str2,
            }),
            _ => Err(ValidationReport { errors }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn raw(limit: &str, int1: &str, int2: &str, str1: &str, str2: &str) -> RawParameters {
        RawParameters {
            limit: limit.to_owned(),
            int1: int1.to_owned(),
            int2: int2.to_owned(),
            str1: str1.to_owned(),
            str2: str2.to_owned(),
        }
    }

    #[test]
    fn all_empty_reports_every_required_field_in_order() {
        let report = raw("", "", "", "", "").validate().expect_err("must fail");
        assert_eq!(
            report.to_string(),
            "parameter limit is required\n\
             parameter int1 is required\n\
             parameter int2 is required\n\
             parameter str1 is required\n\
             parameter str2 is required"
        );
    }

    #[rstest]
    #[case::alpha_limit(
        raw("azerty", "3", "5", "abc", "def"),
        "parameter limit is not a numeric value (received:azerty)"
    )]
    #[case::negative_int1(
        raw("100", "-456", "5", "abc", "def"),
        "int type parameter cannot be less than 1 (received:-456)"
    )]
    #[case::zero_limit(
        raw("0", "3", "5", "abc", "def"),
        "int type parameter cannot be less than 1 (received:0)"
    )]
    #[case::symbols_in_str1(
        raw("100", "3", "5", "!!!!", "def"),
        "parameter str1 is not an alphanumeric value (received:!!!!)"
    )]
    #[case::overflowing_int2(
        raw("100", "3", "9223372036854775808", "abc", "def"),
        "int type parameter is out of range (received:9223372036854775808)"
    )]
    #[case::decimal_limit(
        raw("1.5", "3", "5", "abc", "def"),
        "parameter limit is not a numeric value (received:1.5)"
    )]
    fn single_violations_produce_one_message(#[case] input: RawParameters, #[case] expected: &str) {
        let report = input.validate().expect_err("must fail");
        assert_eq!(report.to_string(), expected);
        assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn over_long_string_is_rejected() {
        let long = "a".repeat(MAX_STRING_LENGTH + 1);
        let report = raw("10", "3", "5", &long, "def")
            .validate()
            .expect_err("must fail");
        assert_eq!(
            report.to_string(),
            format!("parameter str1 cannot be over 64 characters (received:{long})")
        );
    }

    #[test]
    fn string_at_the_length_limit_is_accepted() {
        let exact = "b".repeat(MAX_STRING_LENGTH);
        let parameters = raw("10", "3", "5", "abc", &exact)
            .validate()
            .expect("64 characters is allowed");
        assert_eq!(parameters.str2, exact);
    }

    #[test]
    fn required_precedes_format_precedes_range() {
        let report = raw("", "-2", "x", "", "é")
            .validate()
            .expect_err("must fail");
        let messages: Vec<&str> = report.errors().iter().map(FieldError::message).collect();
        assert_eq!(
            messages,
            vec![
                "parameter limit is required",
                "parameter str1 is required",
                "parameter int2 is not a numeric value (received:x)",
                "parameter str2 is not an alphanumeric value (received:é)",
                "int type parameter cannot be less than 1 (received:-2)",
            ]
        );
    }

    #[test]
    fn non_numeric_field_skips_the_range_check() {
        let report = raw("azerty", "3", "5", "abc", "def")
            .validate()
            .expect_err("must fail");
        // Exactly one message for limit: the format failure, never a
        // positivity failure on top.
        assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn valid_input_builds_the_parameter_set() {
        let parameters = raw("15", "+3", "5", "Fizz", "Buzz")
            .validate()
            .expect("valid input");
        assert_eq!(
            parameters,
            ParameterSet {
                limit: 15,
                int1: 3,
                int2: 5,
                str1: "Fizz".to_owned(),
                str2: "Buzz".to_owned(),
            }
        );
    }
}
