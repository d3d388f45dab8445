//! Per-field validators for admission records.
//!
//! Every function here is pure: it takes one raw token and either returns the
//! typed value or the [`RecordError`] describing the first rule it broke.

use crate::domain::model::{Gpa, StudentType, ToeflScore, GPA_SCALE, MONTHS};
use crate::utils::error::{Field, RecordError};
use chrono::Month;
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_YEAR: u16 = 1950;
pub const MAX_YEAR: u16 = 2010;
pub const MAX_TOEFL: u8 = 120;
pub const MAX_GPA_DECIMALS: usize = 4;
/// 4.3 in ten-thousandths.
pub const GPA_CAP: u32 = 43_000;
/// 0.0001 in ten-thousandths.
pub const GPA_EPSILON: u32 = 1;

pub type FieldResult<T> = std::result::Result<T, RecordError>;

fn gpa_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^(?P<whole>[0-9]*)(?:\.(?P<frac>[0-9]*))?$").expect("GPA pattern is valid")
    })
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

pub fn name_of(token: &str, field: Field) -> FieldResult<&str> {
    if token.trim().is_empty() {
        return Err(RecordError::MissingField(field));
    }
    Ok(token)
}

pub fn month_of(token: &str) -> FieldResult<Month> {
    MONTHS
        .iter()
        .find(|(abbreviation, _)| *abbreviation == token)
        .map(|(_, month)| *month)
        .ok_or_else(|| RecordError::InvalidMonth(token.to_string()))
}

/// Days in `month`, with February at 29 whenever the year is divisible by 4.
pub fn days_in_month(month: Month, year: u16) -> u8 {
    match month {
        Month::February if year % 4 == 0 => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Checks the day token on its own: an integer literal in 1..=31.
pub fn day_literal(token: &str) -> FieldResult<u8> {
    if !is_digits(token) {
        return Err(RecordError::InvalidDay(token.to_string()));
    }
    match token.parse::<u32>() {
        Ok(day @ 1..=31) => Ok(day as u8),
        _ => Err(RecordError::InvalidDay(token.to_string())),
    }
}

pub fn check_day_in_month(day: u8, month: Month, year: u16) -> FieldResult<u8> {
    if day == 0 || day > days_in_month(month, year) {
        return Err(RecordError::InvalidDay(day.to_string()));
    }
    Ok(day)
}

pub fn day_of(token: &str, month: Month, year: u16) -> FieldResult<u8> {
    let day = day_literal(token)?;
    check_day_in_month(day, month, year)
}

pub fn year_of(token: &str) -> FieldResult<u16> {
    if !is_digits(token) {
        return Err(RecordError::InvalidYear(token.to_string()));
    }
    match token.parse::<u32>() {
        Ok(year) if (u32::from(MIN_YEAR)..=u32::from(MAX_YEAR)).contains(&year) => Ok(year as u16),
        _ => Err(RecordError::InvalidYear(token.to_string())),
    }
}

pub fn gpa_of(token: &str) -> FieldResult<Gpa> {
    let invalid = |reason: &'static str| RecordError::InvalidGpa {
        token: token.to_string(),
        reason,
    };

    if token.chars().any(|c| c != '.' && !c.is_ascii_digit()) {
        return Err(invalid("GPA must be a float"));
    }

    let captures = gpa_shape()
        .captures(token)
        .ok_or_else(|| invalid("GPA may contain at most one decimal point"))?;
    let whole = captures.name("whole").map_or("", |m| m.as_str());
    let frac = captures.name("frac").map_or("", |m| m.as_str());

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("GPA must contain at least one digit"));
    }
    if frac.len() > MAX_GPA_DECIMALS {
        return Err(RecordError::GpaTooManyDecimals(token.to_string()));
    }

    let out_of_range = || invalid("GPA must be between 0.0 and 4.3");
    let whole = whole.trim_start_matches('0');
    if whole.len() > 1 {
        return Err(out_of_range());
    }
    let whole_units = whole.parse::<u32>().unwrap_or(0) * GPA_SCALE;
    let frac_units = format!("{:0<width$}", frac, width = MAX_GPA_DECIMALS)
        .parse::<u32>()
        .unwrap_or(0);
    let ten_thousandths = whole_units + frac_units;

    if ten_thousandths.saturating_sub(GPA_CAP) >= GPA_EPSILON {
        return Err(out_of_range());
    }

    Ok(Gpa::new(token, ten_thousandths))
}

pub fn toefl_of(token: &str) -> FieldResult<ToeflScore> {
    if !is_digits(token) {
        return Err(RecordError::InvalidToefl(token.to_string()));
    }
    match token.parse::<u32>() {
        Ok(score) if score <= u32::from(MAX_TOEFL) => Ok(ToeflScore::new(token, score as u8)),
        _ => Err(RecordError::InvalidToefl(token.to_string())),
    }
}

pub fn type_of(token: &str) -> FieldResult<StudentType> {
    match token {
        "D" => Ok(StudentType::Domestic),
        "I" => Ok(StudentType::International),
        other => Err(RecordError::InvalidType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_month_of_is_case_sensitive() {
        assert_eq!(month_of("Jan").unwrap(), Month::January);
        assert_eq!(month_of("Dec").unwrap(), Month::December);
        assert_eq!(month_of("jan").unwrap_err().kind(), ErrorKind::InvalidMonth);
        assert_eq!(month_of("JAN").unwrap_err().kind(), ErrorKind::InvalidMonth);
        assert_eq!(month_of("January").unwrap_err().kind(), ErrorKind::InvalidMonth);
        assert_eq!(month_of("").unwrap_err().kind(), ErrorKind::InvalidMonth);
    }

    #[test]
    fn test_february_uses_divisible_by_four_rule() {
        assert_eq!(day_of("29", Month::February, 2000).unwrap(), 29);
        assert_eq!(day_of("29", Month::February, 2004).unwrap(), 29);
        assert_eq!(
            day_of("29", Month::February, 2001).unwrap_err().kind(),
            ErrorKind::InvalidDay
        );
        assert_eq!(
            day_of("30", Month::February, 2000).unwrap_err().kind(),
            ErrorKind::InvalidDay
        );
        assert_eq!(days_in_month(Month::February, 1952), 29);
    }

    #[test]
    fn test_day_of_month_lengths() {
        assert_eq!(day_of("31", Month::January, 1990).unwrap(), 31);
        assert_eq!(day_of("30", Month::April, 1990).unwrap(), 30);
        assert!(day_of("31", Month::April, 1990).is_err());
        assert!(day_of("31", Month::November, 1990).is_err());
        assert_eq!(day_of("05", Month::May, 1990).unwrap(), 5);
    }

    #[test]
    fn test_day_literal_rejects_non_integers() {
        for token in ["0", "32", "", "-1", "+5", "5a", "1.5", "99999999999"] {
            assert_eq!(
                day_literal(token).unwrap_err().kind(),
                ErrorKind::InvalidDay,
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(year_of("1950").unwrap(), 1950);
        assert_eq!(year_of("2010").unwrap(), 2010);
        assert_eq!(year_of("1949").unwrap_err().kind(), ErrorKind::InvalidYear);
        assert_eq!(year_of("2011").unwrap_err().kind(), ErrorKind::InvalidYear);
        assert_eq!(year_of("19x0").unwrap_err().kind(), ErrorKind::InvalidYear);
        assert_eq!(year_of("").unwrap_err().kind(), ErrorKind::InvalidYear);
    }

    #[test]
    fn test_gpa_upper_boundary() {
        assert_eq!(gpa_of("4.3000").unwrap().ten_thousandths(), 43_000);
        assert_eq!(gpa_of("4.3").unwrap().ten_thousandths(), 43_000);
        assert_eq!(gpa_of("4.3001").unwrap_err().kind(), ErrorKind::InvalidGpa);
        assert_eq!(
            gpa_of("4.30001").unwrap_err().kind(),
            ErrorKind::GpaTooManyDecimals
        );
        assert_eq!(
            gpa_of("1.00001").unwrap_err().kind(),
            ErrorKind::GpaTooManyDecimals
        );
        assert_eq!(gpa_of("10").unwrap_err().kind(), ErrorKind::InvalidGpa);
        assert_eq!(gpa_of("5").unwrap_err().kind(), ErrorKind::InvalidGpa);
    }

    #[test]
    fn test_gpa_shapes() {
        assert_eq!(gpa_of("0").unwrap().ten_thousandths(), 0);
        assert_eq!(gpa_of("3.").unwrap().ten_thousandths(), 30_000);
        assert_eq!(gpa_of(".5").unwrap().ten_thousandths(), 5_000);
        assert_eq!(gpa_of("003.25").unwrap().ten_thousandths(), 32_500);
        assert_eq!(gpa_of("3.9999").unwrap().as_str(), "3.9999");

        for token in [".", "", "3.2.1", "-1", "3,5", "abc", "3.5e0"] {
            assert_eq!(
                gpa_of(token).unwrap_err().kind(),
                ErrorKind::InvalidGpa,
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_toefl_bounds() {
        assert_eq!(toefl_of("0").unwrap().as_u8(), 0);
        assert_eq!(toefl_of("120").unwrap().as_u8(), 120);
        assert_eq!(toefl_of("0120").unwrap().as_str(), "0120");
        assert_eq!(toefl_of("121").unwrap_err().kind(), ErrorKind::InvalidToefl);
        assert_eq!(toefl_of("9a").unwrap_err().kind(), ErrorKind::InvalidToefl);
        assert_eq!(toefl_of("-5").unwrap_err().kind(), ErrorKind::InvalidToefl);
        assert_eq!(toefl_of("99.5").unwrap_err().kind(), ErrorKind::InvalidToefl);
        assert_eq!(
            toefl_of("100000000000").unwrap_err().kind(),
            ErrorKind::InvalidToefl
        );
    }

    #[test]
    fn test_type_of_accepts_exact_tags() {
        assert_eq!(type_of("D").unwrap(), StudentType::Domestic);
        assert_eq!(type_of("I").unwrap(), StudentType::International);
        assert_eq!(type_of("d").unwrap_err().kind(), ErrorKind::InvalidType);
        assert_eq!(type_of("X").unwrap_err().kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn test_name_of_rejects_blank() {
        assert_eq!(name_of("Alice", Field::FirstName).unwrap(), "Alice");
        assert_eq!(
            name_of("", Field::LastName).unwrap_err(),
            RecordError::MissingField(Field::LastName)
        );
    }
}
